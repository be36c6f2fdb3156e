//! # integrand 子命令 CLI 定义
//!
//! 在若干能量下绘制被积函数 y(ξ)，用于检查端点加密效果。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/dos.rs` 的参数组
//! - 参数传递给 `commands/integrand.rs`

use super::dos::{FigureOpts, LatticeOpts};
use clap::Args;
use std::path::PathBuf;

/// integrand 子命令参数
#[derive(Args, Debug)]
pub struct IntegrandArgs {
    #[command(flatten)]
    pub lattice: LatticeOpts,

    /// Comma-separated energies (e.g., "-2,-1,0,1,2")
    #[arg(long, default_value = "-2,-1,0,1,2", allow_hyphen_values = true)]
    pub energies: String,

    /// Base number of ξ points
    #[arg(long, default_value_t = 40)]
    pub num_points_xi: usize,

    /// Number of refinement passes at the ξ-domain borders
    #[arg(long, default_value_t = 1)]
    pub border_param: usize,

    #[command(flatten)]
    pub figure: FigureOpts,

    /// Plot file (PNG or SVG)
    #[arg(short, long, default_value = "integrand.png")]
    pub output: PathBuf,

    /// Save the samples as CSV (energy, xi, y)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

/// 解析逗号分隔的能量列表
pub fn parse_energy_list(input: &str) -> Result<Vec<f64>, String> {
    let values: Vec<f64> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("Invalid energy '{}' in list '{}'", s, input))
        })
        .collect::<Result<_, _>>()?;

    if values.is_empty() {
        return Err(format!("No energies given in '{}'", input));
    }
    Ok(values)
}
