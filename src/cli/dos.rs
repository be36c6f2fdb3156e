//! # dos 子命令 CLI 定义
//!
//! 同时定义各子命令共用的参数组：
//! - `LatticeOpts`: 晶格参数
//! - `IntegrationOpts`: 网格与并行参数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `LatticeOpts`, `IntegrationOpts` 被其他子命令复用
//! - 参数传递给 `commands/dos.rs`

use crate::models::{DosConfig, LatticeParameters};

use clap::Args;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 共用参数组
// ─────────────────────────────────────────────────────────────

/// 晶格参数
#[derive(Args, Debug, Clone)]
pub struct LatticeOpts {
    /// Atomic energy level E0
    #[arg(long = "energy-0", default_value_t = 0.0, allow_negative_numbers = true)]
    pub energy_0: f64,

    /// Hopping energy beta (> 0)
    #[arg(long, default_value_t = 5.0)]
    pub beta: f64,

    /// Lattice constant a (> 0)
    #[arg(short = 'a', long, default_value_t = 1.0)]
    pub lattice_constant: f64,
}

impl LatticeOpts {
    pub fn to_params(&self) -> LatticeParameters {
        LatticeParameters::new(self.energy_0, self.beta, self.lattice_constant)
    }
}

/// 网格与并行参数
#[derive(Args, Debug, Clone)]
pub struct IntegrationOpts {
    /// Energy grid size; the grid holds 4*ceil((n+2)/2)-3 points
    #[arg(long, default_value_t = 500)]
    pub num_points_energy: usize,

    /// Base number of ξ points per integral
    #[arg(long, default_value_t = 1000)]
    pub num_points_xi: usize,

    /// Half-width of the energy window, in units of beta
    #[arg(long, default_value_t = 5.0)]
    pub interval_energy: f64,

    /// Number of refinement passes at the ξ-domain borders
    #[arg(long, default_value_t = 3)]
    pub border_param: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "TBDOS_JOBS")]
    pub jobs: usize,
}

impl IntegrationOpts {
    pub fn to_config(&self) -> DosConfig {
        DosConfig {
            num_points_energy: self.num_points_energy,
            num_points_xi: self.num_points_xi,
            interval_energy: self.interval_energy,
            border_param: self.border_param,
        }
    }
}

/// 图像尺寸
#[derive(Args, Debug, Clone)]
pub struct FigureOpts {
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

// ─────────────────────────────────────────────────────────────
// dos 子命令
// ─────────────────────────────────────────────────────────────

/// dos 子命令参数
#[derive(Args, Debug)]
pub struct DosArgs {
    #[command(flatten)]
    pub lattice: LatticeOpts,

    #[command(flatten)]
    pub integration: IntegrationOpts,

    #[command(flatten)]
    pub figure: FigureOpts,

    /// Plot file (PNG or SVG, chosen by extension)
    #[arg(short, long, default_value = "dos.png")]
    pub output: PathBuf,

    /// Save the (energy, DOS) data (.csv, or .xy/.dat/.txt for XY)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Also save the below/above-average subsets next to --data
    #[arg(long, default_value_t = false, requires = "data")]
    pub split: bool,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}
