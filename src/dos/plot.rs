//! # DOS 图表生成
//!
//! 使用 `plotters` 库生成 DOS 曲线、被积函数和收敛性图表。
//!
//! ## 功能
//! - 折线和散点两种系列样式，可叠加多条
//! - 可选对数 y 轴（收敛性对比）
//! - 图例中附加晶格参数说明（E₀, β, a, Θ）
//! - 根据扩展名输出 PNG 或 SVG
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::{DosError, Result};

use plotters::coord::CoordTranslate;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// 系列颜色
const SERIES_COLORS: [RGBColor; 8] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 51, 0),
    RGBColor(0, 153, 76),
    RGBColor(153, 51, 204),
    RGBColor(230, 153, 0),
    RGBColor(0, 153, 153),
    RGBColor(204, 0, 102),
    RGBColor(102, 102, 102),
];

/// 系列样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Markers,
}

/// 一条数据系列
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl PlotSeries {
    pub fn line(label: Option<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label,
            points,
            style: SeriesStyle::Line,
        }
    }

    pub fn markers(label: Option<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label,
            points,
            style: SeriesStyle::Markers,
        }
    }
}

/// 图表选项
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
    pub log_y: bool,
    /// 只出现在图例中的说明文字
    pub notes: Vec<String>,
}

impl PlotOptions {
    pub fn new(title: &str, x_desc: &str, y_desc: &str) -> Self {
        Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            width: 1200,
            height: 800,
            log_y: false,
            notes: Vec::new(),
        }
    }
}

/// 渲染图表，`.svg` 扩展名输出 SVG，其余输出 PNG
pub fn render(series: &[PlotSeries], options: &PlotOptions, output_path: &Path) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    let size = (options.width, options.height);
    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, series, options, output_path)?;
        root.present().map_err(|e| plot_error(output_path, e))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, series, options, output_path)?;
        root.present().map_err(|e| plot_error(output_path, e))?;
    }
    Ok(())
}

fn plot_error<E: std::fmt::Debug>(path: &Path, e: E) -> DosError {
    DosError::PlotError {
        path: path.display().to_string(),
        reason: format!("{:?}", e),
    }
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    series: &[PlotSeries],
    options: &PlotOptions,
    path: &Path,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let (x_range, y_range) = axis_ranges(series, options.log_y).ok_or_else(|| {
        DosError::PlotError {
            path: path.display().to_string(),
            reason: "no finite data to plot".to_string(),
        }
    })?;

    let mut builder = ChartBuilder::on(root);
    builder
        .caption(&options.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80);

    if options.log_y {
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range.log_scale())
            .map_err(|e| plot_error(path, e))?;

        chart
            .configure_mesh()
            .x_desc(options.x_desc.as_str())
            .y_desc(options.y_desc.as_str())
            .x_label_style(("sans-serif", 16))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(|e| plot_error(path, e))?;

        draw_series(&mut chart, series, options, path)
    } else {
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| plot_error(path, e))?;

        chart
            .configure_mesh()
            .x_desc(options.x_desc.as_str())
            .y_desc(options.y_desc.as_str())
            .x_label_style(("sans-serif", 16))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(|e| plot_error(path, e))?;

        draw_series(&mut chart, series, options, path)
    }
}

/// 绘制所有系列和图例
fn draw_series<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    series: &[PlotSeries],
    options: &PlotOptions,
    path: &Path,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let mut has_legend = false;

    for (i, s) in series.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = s
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite() && (!options.log_y || *y > 0.0))
            .collect();

        let anno = match s.style {
            SeriesStyle::Line => chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(|e| plot_error(path, e))?,
            SeriesStyle::Markers => chart
                .draw_series(
                    points
                        .into_iter()
                        .map(|(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(|e| plot_error(path, e))?,
        };

        if let Some(label) = &s.label {
            has_legend = true;
            match s.style {
                SeriesStyle::Line => anno.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                }),
                SeriesStyle::Markers => anno
                    .label(label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled())),
            };
        }
    }

    // 说明文字：空系列 + 图例条目
    for note in &options.notes {
        has_legend = true;
        chart
            .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())
            .map_err(|e| plot_error(path, e))?
            .label(note.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 1, y)], WHITE.stroke_width(1)));
    }

    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 16))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| plot_error(path, e))?;
    }

    Ok(())
}

/// 计算坐标轴范围，没有有限数据时返回 None
fn axis_ranges(series: &[PlotSeries], log_y: bool) -> Option<(Range<f64>, Range<f64>)> {
    let points: Vec<(f64, f64)> = series
        .iter()
        .flat_map(|s| s.points.iter().copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite() && (!log_y || *y > 0.0))
        .collect();

    if points.is_empty() {
        return None;
    }

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let x_range = if x_max > x_min {
        x_min..x_max
    } else {
        (x_min - 1.0)..(x_max + 1.0)
    };

    let y_range = if log_y {
        (y_min * 0.5)..(y_max * 2.0)
    } else {
        let low = y_min.min(0.0);
        let span = (y_max - low).max(f64::EPSILON);
        low..(y_max + 0.1 * span)
    };

    Some((x_range, y_range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ranges_linear() {
        let series = vec![PlotSeries::line(
            None,
            vec![(-2.0, 0.0), (0.0, 1.0), (2.0, f64::NAN), (3.0, 0.5)],
        )];
        let (x, y) = axis_ranges(&series, false).unwrap();
        assert_eq!(x, -2.0..3.0);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_axis_ranges_log_skips_zeros() {
        let series = vec![PlotSeries::markers(
            None,
            vec![(0.0, 0.0), (1.0, 0.01), (2.0, 10.0)],
        )];
        let (x, y) = axis_ranges(&series, true).unwrap();
        assert_eq!(x, 1.0..2.0);
        assert!((y.start - 0.005).abs() < 1e-15);
        assert!((y.end - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_ranges_empty() {
        let series = vec![PlotSeries::line(None, vec![(0.0, 0.0)])];
        assert!(axis_ranges(&series, true).is_none());
        assert!(axis_ranges(&[], false).is_none());
    }
}
