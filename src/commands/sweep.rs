//! # sweep 子命令实现
//!
//! 对一组 β 计算 DOS 曲线，提取能带底的 DOS 并检查 β·DOS·a² 是否为常数。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `dos/` 模块进行计算、导出与绘图
//! - 使用 `utils/output.rs` 输出

use crate::batch::ParallelRunner;
use crate::cli::sweep::SweepArgs;
use crate::dos::grid::linspace;
use crate::dos::plot::{self, PlotOptions, PlotSeries};
use crate::dos::{export, DosEngine};
use crate::error::{DosError, Result};
use crate::models::{DosCurve, LatticeParameters};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 能带边缘表格行
#[derive(Debug, Clone, Tabled)]
struct EdgeRow {
    #[tabled(rename = "β")]
    beta: String,
    #[tabled(rename = "Edge E")]
    energy: String,
    #[tabled(rename = "Edge DOS")]
    dos: String,
    #[tabled(rename = "β·DOS·a²")]
    scaled: String,
}

/// 执行 sweep 子命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Hopping-Energy Sweep");

    let (beta_min, beta_max) = parse_beta_range(&args.beta_range)?;
    if args.count == 0 {
        return Err(DosError::InvalidArgument(
            "--count must be at least 1".to_string(),
        ));
    }
    let betas = linspace(beta_min, beta_max, args.count);
    let config = args.integration.to_config();
    let runner = ParallelRunner::new(args.integration.jobs);

    output::print_info(&format!(
        "{} values of beta in [{}, {}], E0 = {}, a = {}",
        betas.len(),
        beta_min,
        beta_max,
        args.energy_0,
        args.lattice_constant
    ));
    output::print_info(&format!("Using {} threads", runner.jobs()));

    let mut curves: Vec<(f64, DosCurve)> = Vec::with_capacity(betas.len());
    for &beta in &betas {
        let lattice = LatticeParameters::new(args.energy_0, beta, args.lattice_constant);
        let engine = DosEngine::new(lattice, config)?;
        let curve = engine.compute(&runner)?;
        output::print_success(&format!("beta = {:.4}: {} samples", beta, curve.len()));
        curves.push((beta, curve));
    }

    // 能带边缘
    let edges: Vec<(f64, f64, f64)> = curves
        .iter()
        .filter_map(|(beta, curve)| {
            curve
                .band_edge_value()
                .map(|(energy, dos)| (*beta, energy, dos))
        })
        .collect();

    if edges.len() < curves.len() {
        output::print_warning(&format!(
            "{} curves have no positive DOS sample",
            curves.len() - edges.len()
        ));
    }

    let a2 = args.lattice_constant.powi(2);
    let rows: Vec<EdgeRow> = edges
        .iter()
        .map(|&(beta, energy, dos)| EdgeRow {
            beta: format!("{:.4}", beta),
            energy: format!("{:.6}", energy),
            dos: format!("{:.6e}", dos),
            scaled: format!("{:.6}", beta * dos * a2),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header("DOS at the Band Bottom");
        let table = Table::new(&rows);
        println!("{}", table);
    }

    if let Some(ref data_path) = args.data {
        export::sweep_to_csv(&curves, data_path)?;
        output::print_success(&format!("Sweep data saved to '{}'", data_path.display()));
    }

    if !args.no_plot {
        let series: Vec<PlotSeries> = curves
            .iter()
            .map(|(beta, curve)| {
                PlotSeries::line(Some(format!("β = {:.2}", beta)), curve.points().collect())
            })
            .collect();

        let mut options = PlotOptions::new("DOS for varying hopping energy", "Energy", "DOS");
        options.width = args.figure.width;
        options.height = args.figure.height;
        options.notes = vec![
            format!("E₀ = {}", args.energy_0),
            format!("a = {}", args.lattice_constant),
        ];
        plot::render(&series, &options, &args.output)?;
        output::print_success(&format!("Plot saved to '{}'", args.output.display()));

        if !edges.is_empty() {
            let points: Vec<(f64, f64)> = edges
                .iter()
                .map(|&(beta, _, dos)| (beta, beta * dos * a2))
                .collect();
            let edge_series = [
                PlotSeries::line(None, points.clone()),
                PlotSeries::markers(None, points),
            ];

            let mut options = PlotOptions::new("Band-bottom DOS", "β", "β·DOS·a²");
            options.width = args.figure.width;
            options.height = args.figure.height;
            plot::render(&edge_series, &options, &args.edge_output)?;
            output::print_success(&format!(
                "Band-edge plot saved to '{}'",
                args.edge_output.display()
            ));
        }
    }

    Ok(())
}

/// 解析 β 范围，如 "1-5"
fn parse_beta_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(DosError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .parse()
        .map_err(|_| DosError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .parse()
        .map_err(|_| DosError::InvalidRange(range.to_string()))?;

    if min <= 0.0 || max < min || !max.is_finite() {
        return Err(DosError::InvalidRange(format!(
            "{} (must be 0 < min <= max)",
            range
        )));
    }

    Ok((min, max))
}
