//! # 统一错误处理模块
//!
//! 定义 tbdos 的所有错误类型，使用 `thiserror` 派生。
//!
//! 数值核心（`dos/`）本身不返回错误：能带外的能量得到 0，
//! 奇点处的浮点越界由被积函数的回填策略处理。
//! 错误只出现在参数校验、文件输出、绘图和线程池构建这些边界上。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// tbdos 统一错误类型
#[derive(Error, Debug)]
pub enum DosError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render plot '{path}': {reason}")]
    PlotError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 运行时错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DosError>;
