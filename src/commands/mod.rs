//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `dos/`, `models/`, `utils/`
//! - 子模块: dos, sweep, integrand, convergence

pub mod convergence;
pub mod dos;
pub mod integrand;
pub mod sweep;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Dos(args) => dos::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Integrand(args) => integrand::execute(args),
        Commands::Convergence(args) => convergence::execute(args),
    }
}
