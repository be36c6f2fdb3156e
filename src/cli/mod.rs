//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `dos`: 计算单条 DOS 曲线
//! - `sweep`: 扫描一组 β
//! - `integrand`: 查看不同能量下的被积函数
//! - `convergence`: 归一化参数 Θ 随边界加密的收敛
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: dos, sweep, integrand, convergence

pub mod convergence;
pub mod dos;
pub mod integrand;
pub mod sweep;

use clap::{Parser, Subcommand};

/// tbdos - 正方晶格紧束缚模型态密度计算
#[derive(Parser)]
#[command(name = "tbdos")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Density of states of the 2D square-lattice tight-binding model",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the DOS for one set of lattice parameters
    Dos(dos::DosArgs),

    /// Compute the DOS for a range of hopping energies
    Sweep(sweep::SweepArgs),

    /// Plot the integrand over ξ for several energies
    Integrand(integrand::IntegrandArgs),

    /// Study the goodness parameter against border refinement
    Convergence(convergence::ConvergenceArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dos_defaults() {
        let cli = Cli::try_parse_from(["tbdos", "dos"]).unwrap();
        match cli.command {
            Commands::Dos(args) => {
                assert_eq!(args.lattice.beta, 5.0);
                assert_eq!(args.integration.num_points_xi, 1000);
                assert_eq!(args.integration.border_param, 3);
                assert!(args.data.is_none());
            }
            _ => panic!("expected dos subcommand"),
        }
    }

    #[test]
    fn test_parse_negative_energy_0() {
        let cli = Cli::try_parse_from(["tbdos", "dos", "--energy-0", "-1.5", "--beta", "2"]).unwrap();
        match cli.command {
            Commands::Dos(args) => {
                assert_eq!(args.lattice.energy_0, -1.5);
                assert_eq!(args.lattice.beta, 2.0);
            }
            _ => panic!("expected dos subcommand"),
        }
    }
}
