//! # sweep 子命令 CLI 定义
//!
//! 对一组等间距的 β 计算 DOS，并提取能带边缘处的 DOS。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/dos.rs` 的参数组
//! - 参数传递给 `commands/sweep.rs`

use super::dos::{FigureOpts, IntegrationOpts};
use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Atomic energy level E0
    #[arg(long = "energy-0", default_value_t = 0.0, allow_negative_numbers = true)]
    pub energy_0: f64,

    /// Lattice constant a (> 0)
    #[arg(short = 'a', long, default_value_t = 1.0)]
    pub lattice_constant: f64,

    /// Range of hopping energies (e.g., "1-5")
    #[arg(long, default_value = "1-5")]
    pub beta_range: String,

    /// Number of beta values in the range (inclusive of both ends)
    #[arg(long, default_value_t = 9)]
    pub count: usize,

    #[command(flatten)]
    pub integration: IntegrationOpts,

    #[command(flatten)]
    pub figure: FigureOpts,

    /// Plot file for the overlaid DOS curves
    #[arg(short, long, default_value = "dos_sweep.png")]
    pub output: PathBuf,

    /// Plot file for the band-edge DOS against beta
    #[arg(long, default_value = "dos_band_edge.png")]
    pub edge_output: PathBuf,

    /// Save all curves as long-format CSV (beta, energy, dos)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
