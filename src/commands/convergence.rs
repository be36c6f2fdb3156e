//! # convergence 子命令实现
//!
//! 对 border_param = 0..=max 分别计算 DOS，比较归一化参数 Θ，
//! 并在对数坐标下叠加能带内的 DOS。
//!
//! ## 依赖关系
//! - 使用 `cli/convergence.rs` 定义的 ConvergenceArgs
//! - 使用 `dos/engine.rs` 计算，`dos/filters.rs` 求 Θ
//! - 使用 `dos/plot.rs` 绘图

use crate::cli::convergence::ConvergenceArgs;
use crate::commands::dos::legend_notes;
use crate::dos::filters::goodness;
use crate::dos::plot::{self, PlotOptions, PlotSeries};
use crate::dos::compute_dos;
use crate::error::{DosError, Result};
use crate::models::{DosConfig, DosCurve};
use crate::utils::output;

use std::time::Instant;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct ThetaRow {
    #[tabled(rename = "Border")]
    border: usize,
    #[tabled(rename = "ξ points")]
    xi_points: usize,
    #[tabled(rename = "Θ")]
    theta: String,
    #[tabled(rename = "|Θ − 1|")]
    deviation: String,
}

/// 执行 convergence 子命令
pub fn execute(args: ConvergenceArgs) -> Result<()> {
    output::print_header("Border Refinement Convergence");

    if args.stride == 0 {
        return Err(DosError::InvalidArgument(
            "--stride must be at least 1".to_string(),
        ));
    }

    let lattice = args.lattice.to_params();
    output::print_info(&format!(
        "E0 = {}, beta = {}, a = {}, border 0..={}",
        lattice.energy_0, lattice.beta, lattice.lattice_constant, args.max_border
    ));

    let mut results: Vec<(usize, DosCurve, f64)> = Vec::with_capacity(args.max_border + 1);
    for border in 0..=args.max_border {
        let config = DosConfig {
            num_points_energy: args.num_points_energy,
            num_points_xi: args.num_points_xi,
            interval_energy: args.interval_energy,
            border_param: border,
        };
        let start = Instant::now();
        let curve = compute_dos(lattice, config)?;
        let theta = goodness(&curve, &lattice);
        output::print_timing(&format!("border = {}: Θ = {:.6}", border, theta), start.elapsed());
        results.push((border, curve, theta));
    }

    let rows: Vec<ThetaRow> = results
        .iter()
        .map(|(border, _, theta)| ThetaRow {
            border: *border,
            xi_points: xi_grid_len(args.num_points_xi, *border),
            theta: format!("{:.6}", theta),
            deviation: format!("{:.3e}", (theta - 1.0).abs()),
        })
        .collect();

    output::print_header("Goodness Parameter");
    let table = Table::new(&rows);
    println!("{}", table);

    if !args.no_plot {
        let series: Vec<PlotSeries> = results
            .iter()
            .map(|(border, curve, _)| {
                let points = curve
                    .in_band(&lattice)
                    .points()
                    .step_by(args.stride)
                    .collect();
                PlotSeries::markers(Some(format!("border = {}", border)), points)
            })
            .collect();

        let mut options = PlotOptions::new("DOS versus border refinement", "Energy", "DOS");
        options.width = args.figure.width;
        options.height = args.figure.height;
        options.log_y = true;
        options.notes = legend_notes(&lattice, None);
        plot::render(&series, &options, &args.output)?;
        output::print_success(&format!("Plot saved to '{}'", args.output.display()));
    }

    Ok(())
}

/// 加密后的 ξ 网格长度 n + b(2n − 2)
fn xi_grid_len(num_points: usize, border_param: usize) -> usize {
    num_points + border_param * (2 * num_points - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dos::grid::build_xi_grid;

    #[test]
    fn test_xi_grid_len_matches_builder() {
        for border in 0..4 {
            let grid = build_xi_grid(0.0, 1.0, 50, border);
            assert_eq!(xi_grid_len(50, border), grid.len());
        }
    }
}
