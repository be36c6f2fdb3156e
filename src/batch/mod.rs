//! # 并行执行模块
//!
//! 提供有序的并行 map：每个能量点的 DOS 互相独立，
//! 按原顺序收集结果。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 可配置线程数（0 = 全部核心）
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs` 使用
//! - 使用 `rayon` 进行并行计算
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::ParallelRunner;
