//! # 并行执行器
//!
//! 在独立的 rayon 线程池中执行有序 map。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示（可关闭）
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{DosError, Result};
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;

/// 并行执行器
#[derive(Debug, Clone, Copy)]
pub struct ParallelRunner {
    /// 并行线程数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl ParallelRunner {
    /// 创建新的并行执行器（jobs = 0 时使用全部核心）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 不显示进度条
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理 `items`，结果与输入一一对应
    pub fn map<T, R, F>(&self, items: &[T], message: &str, f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(items.len() as u64, message)
        } else {
            ProgressBar::hidden()
        };

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| DosError::ThreadPool(e.to_string()))?;

        let results: Vec<R> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = f(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(results)
    }
}
