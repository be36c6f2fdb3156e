//! # integrand 子命令实现
//!
//! 在若干能量下对被积函数 y(ξ) 采样，打印积分区间并绘制散点图，
//! 用于直观检查端点加密后的网格分布。
//!
//! ## 依赖关系
//! - 使用 `cli/integrand.rs` 定义的 IntegrandArgs
//! - 使用 `dos/engine.rs` 采样，`dos/quadrature.rs` 积分
//! - 使用 `dos/export.rs`, `dos/plot.rs` 输出

use crate::cli::integrand::{parse_energy_list, IntegrandArgs};
use crate::dos::limits::integration_limits;
use crate::dos::plot::{self, PlotOptions, PlotSeries};
use crate::dos::quadrature::simpson;
use crate::dos::{export, DosEngine};
use crate::error::{DosError, Result};
use crate::models::{DosConfig, IntegrandCurve, LatticeParameters};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct SampleRow {
    #[tabled(rename = "E")]
    energy: String,
    #[tabled(rename = "ξ range")]
    domain: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Samples")]
    samples: usize,
    #[tabled(rename = "max y")]
    max_y: String,
    #[tabled(rename = "∫ y dξ")]
    integral: String,
}

/// 执行 integrand 子命令
pub fn execute(args: IntegrandArgs) -> Result<()> {
    output::print_header("Integrand Inspection");

    let energies = parse_energy_list(&args.energies).map_err(DosError::InvalidArgument)?;
    let lattice = args.lattice.to_params();
    let config = DosConfig {
        num_points_xi: args.num_points_xi,
        border_param: args.border_param,
        ..DosConfig::default()
    };
    let engine = DosEngine::new(lattice, config)?;

    output::print_info(&format!(
        "E0 = {}, beta = {}, {} base ξ points, border refinement {}",
        lattice.energy_0, lattice.beta, args.num_points_xi, args.border_param
    ));

    let samples: Vec<IntegrandCurve> = energies.iter().map(|&e| engine.integrand(e)).collect();

    let rows: Vec<SampleRow> = samples.iter().map(|s| sample_row(s, &lattice)).collect();
    output::print_header("Integrand Samples");
    let table = Table::new(&rows);
    println!("{}", table);

    let outside = samples
        .iter()
        .filter(|s| !lattice.in_band(s.energy))
        .count();
    if outside > 0 {
        output::print_warning(&format!(
            "{} energies lie outside the band [{}, {}]; their integrand is zero",
            outside,
            lattice.band_bottom(),
            lattice.band_top()
        ));
    }

    if let Some(ref data_path) = args.data {
        export::integrand_to_csv(&samples, data_path)?;
        output::print_success(&format!(
            "Integrand samples saved to '{}'",
            data_path.display()
        ));
    }

    if !args.no_plot {
        let series: Vec<PlotSeries> = samples
            .iter()
            .map(|s| {
                PlotSeries::markers(
                    Some(format!("E = {}", s.energy)),
                    s.xi.iter().copied().zip(s.y.iter().copied()).collect(),
                )
            })
            .collect();

        let mut options = PlotOptions::new("Integrand on the refined ξ grid", "ξ", "y(ξ)");
        options.width = args.figure.width;
        options.height = args.figure.height;
        plot::render(&series, &options, &args.output)?;
        output::print_success(&format!("Plot saved to '{}'", args.output.display()));
    }

    Ok(())
}

fn sample_row(sample: &IntegrandCurve, lattice: &LatticeParameters) -> SampleRow {
    let domain = integration_limits(sample.energy, lattice.energy_0, lattice.beta);
    let max_y = sample
        .y
        .iter()
        .copied()
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max);

    SampleRow {
        energy: format!("{}", sample.energy),
        domain: format!("[{:.6}, {:.6}]", domain.lower, domain.upper),
        width: format!("{:.6}", domain.width()),
        samples: sample.xi.len(),
        max_y: format!("{:.4e}", max_y),
        integral: format!("{:.6}", simpson(&sample.y, &sample.xi)),
    }
}
