//! # convergence 子命令 CLI 定义
//!
//! 比较不同边界加密次数下的 DOS 与归一化参数 Θ。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/dos.rs` 的参数组
//! - 参数传递给 `commands/convergence.rs`

use super::dos::{FigureOpts, LatticeOpts};
use clap::Args;
use std::path::PathBuf;

/// convergence 子命令参数
#[derive(Args, Debug)]
pub struct ConvergenceArgs {
    #[command(flatten)]
    pub lattice: LatticeOpts,

    /// Energy grid size
    #[arg(long, default_value_t = 500)]
    pub num_points_energy: usize,

    /// Base number of ξ points per integral
    #[arg(long, default_value_t = 500)]
    pub num_points_xi: usize,

    /// Half-width of the energy window, in units of beta
    #[arg(long, default_value_t = 4.0)]
    pub interval_energy: f64,

    /// Largest border refinement to test (runs 0..=max)
    #[arg(long, default_value_t = 4)]
    pub max_border: usize,

    /// Plot every n-th sample
    #[arg(long, default_value_t = 10)]
    pub stride: usize,

    #[command(flatten)]
    pub figure: FigureOpts,

    /// Plot file (PNG or SVG)
    #[arg(short, long, default_value = "dos_convergence.png")]
    pub output: PathBuf,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
