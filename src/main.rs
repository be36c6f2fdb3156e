//! # tbdos - 正方晶格紧束缚模型态密度
//!
//! 二维正方晶格最近邻紧束缚模型：
//! E(k) = E₀ − 2β (cos kₓa + cos k_ya)，
//! 对 k_y 解析积分后，DOS 化为对 ξ 的一维奇异积分，
//! 在端点加密网格上用 Simpson 法数值求解。
//!
//! ## 子命令
//! - `dos`         - 计算单条 DOS 曲线
//! - `sweep`       - 扫描跃迁能 β
//! - `integrand`   - 查看被积函数
//! - `convergence` - Θ 随边界加密的收敛
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── dos/       (数值核心、导出、绘图)
//!   │     ├── batch/     (并行执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod dos;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
