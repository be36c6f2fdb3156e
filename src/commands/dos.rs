//! # dos 子命令实现
//!
//! 计算单条 DOS 曲线并输出摘要、数据文件与图像。
//!
//! ## 功能
//! - 并行计算整个能量网格上的 DOS
//! - 终端摘要表格（能带、峰值、Θ、平均值拆分）
//! - 导出数据文件 (CSV/XY)，可选拆分低/高于平均的两部分
//! - 输出图像 (PNG/SVG)，图例中标注 E₀, β, a, Θ
//!
//! ## 依赖关系
//! - 使用 `cli/dos.rs` 定义的 DosArgs
//! - 使用 `dos/` 模块进行计算、导出与绘图
//! - 使用 `utils/output.rs` 输出

use crate::batch::ParallelRunner;
use crate::cli::dos::DosArgs;
use crate::dos::filters::{goodness, split_above_average, split_below_average};
use crate::dos::plot::{self, PlotOptions, PlotSeries};
use crate::dos::{export, DosEngine};
use crate::error::Result;
use crate::models::{DosCurve, LatticeParameters};
use crate::utils::output;

use std::path::{Path, PathBuf};
use std::time::Instant;
use tabled::{Table, Tabled};

/// 摘要表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryRow {
    fn new(quantity: &str, value: String) -> Self {
        Self {
            quantity: quantity.to_string(),
            value,
        }
    }
}

/// 执行 dos 子命令
pub fn execute(args: DosArgs) -> Result<()> {
    output::print_header("Square-Lattice Tight-Binding DOS");

    let lattice = args.lattice.to_params();
    let engine = DosEngine::new(lattice, args.integration.to_config())?;
    let runner = ParallelRunner::new(args.integration.jobs);

    print_parameters(&engine);
    output::print_info(&format!("Using {} threads", runner.jobs()));

    let start = Instant::now();
    let curve = engine.compute(&runner)?;
    output::print_timing(
        &format!("Integrated {} energy points", curve.len()),
        start.elapsed(),
    );
    let theta = goodness(&curve, &lattice);

    let (low_energy, low_dos) = split_below_average(&curve.energies, &curve.dos);
    let (high_energy, high_dos) = split_above_average(&curve.energies, &curve.dos);

    print_summary(&curve, &lattice, theta, low_energy.len(), high_energy.len());

    if (theta - 1.0).abs() > 0.01 {
        output::print_warning(&format!(
            "Θ = {:.6} deviates from 1; increase --num-points-xi or --border-param",
            theta
        ));
    }

    // 保存数据
    if let Some(ref data_path) = args.data {
        export::write_curve(&curve, &lattice, data_path)?;
        output::print_success(&format!("DOS data saved to '{}'", data_path.display()));

        if args.split {
            let low_path = suffixed_path(data_path, "low");
            let high_path = suffixed_path(data_path, "high");
            export::write_curve(&DosCurve::new(low_energy, low_dos), &lattice, &low_path)?;
            export::write_curve(&DosCurve::new(high_energy, high_dos), &lattice, &high_path)?;
            output::print_success(&format!(
                "Below/above-average subsets saved to '{}' and '{}'",
                low_path.display(),
                high_path.display()
            ));
        }
    }

    // 绘图
    if !args.no_plot {
        let mut options = PlotOptions::new(
            args.title.as_deref().unwrap_or("Square lattice density of states"),
            "Energy",
            "DOS",
        );
        options.width = args.figure.width;
        options.height = args.figure.height;
        options.notes = legend_notes(&lattice, Some(theta));

        let series = [PlotSeries::line(None, curve.points().collect())];
        plot::render(&series, &options, &args.output)?;
        output::print_success(&format!("Plot saved to '{}'", args.output.display()));
    }

    Ok(())
}

/// 打印计算参数
fn print_parameters(engine: &DosEngine) {
    let lattice = engine.lattice();
    let config = engine.config();
    output::print_info(&format!(
        "E0 = {}, beta = {}, a = {}",
        lattice.energy_0, lattice.beta, lattice.lattice_constant
    ));
    output::print_info(&format!(
        "Band: [{}, {}]",
        lattice.band_bottom(),
        lattice.band_top()
    ));
    output::print_info(&format!(
        "{} energy points, {} base ξ points, border refinement {}",
        engine.energy_grid().len(),
        config.num_points_xi,
        config.border_param
    ));
}

/// 图例中的参数说明
pub(crate) fn legend_notes(lattice: &LatticeParameters, theta: Option<f64>) -> Vec<String> {
    let mut notes = vec![
        format!("E₀ = {}", lattice.energy_0),
        format!("β = {}", lattice.beta),
        format!("a = {}", lattice.lattice_constant),
    ];
    if let Some(theta) = theta {
        notes.push(format!("Θ = {:.4}", theta));
    }
    notes
}

fn print_summary(
    curve: &DosCurve,
    lattice: &LatticeParameters,
    theta: f64,
    below: usize,
    above: usize,
) {
    let mut rows = vec![
        SummaryRow::new("Samples", curve.len().to_string()),
        SummaryRow::new(
            "Energy window",
            format!(
                "[{:.4}, {:.4}]",
                curve.energies.first().copied().unwrap_or(f64::NAN),
                curve.energies.last().copied().unwrap_or(f64::NAN)
            ),
        ),
        SummaryRow::new(
            "Band",
            format!("[{:.4}, {:.4}]", lattice.band_bottom(), lattice.band_top()),
        ),
        SummaryRow::new("In-band samples", curve.in_band(lattice).len().to_string()),
    ];

    if let Some((energy, dos)) = curve.peak() {
        rows.push(SummaryRow::new(
            "Peak DOS",
            format!("{:.6e} at E = {:.6}", dos, energy),
        ));
    }
    if let Some(mean) = curve.mean() {
        rows.push(SummaryRow::new("Mean DOS", format!("{:.6e}", mean)));
    }
    rows.push(SummaryRow::new("Below / above mean", format!("{} / {}", below, above)));
    rows.push(SummaryRow::new("Θ (goodness)", format!("{:.6}", theta)));

    output::print_header("Summary");
    let table = Table::new(&rows);
    println!("{}", table);
}

/// `dos.csv` + `low` → `dos_low.csv`
fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dos");

    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext),
        None => format!("{}_{}", stem, suffix),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixed_path() {
        assert_eq!(
            suffixed_path(Path::new("out/dos.csv"), "low"),
            PathBuf::from("out/dos_low.csv")
        );
        assert_eq!(
            suffixed_path(Path::new("dos.xy"), "high"),
            PathBuf::from("dos_high.xy")
        );
        assert_eq!(suffixed_path(Path::new("dos"), "low"), PathBuf::from("dos_low"));
    }

    #[test]
    fn test_legend_notes() {
        let lattice = LatticeParameters::new(0.0, 5.0, 1.0);
        let notes = legend_notes(&lattice, Some(0.99871));
        assert_eq!(notes, vec!["E₀ = 0", "β = 5", "a = 1", "Θ = 0.9987"]);
        assert_eq!(legend_notes(&lattice, None).len(), 3);
    }
}
