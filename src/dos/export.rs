//! # DOS 数据导出
//!
//! 导出 DOS 曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: `energy,dos`（扫描模式为 `beta,energy,dos`，被积函数为 `energy,xi,y`）
//! - XY: 以 `#` 开头的注释头 + 两列空白分隔数据
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/curve.rs` 的 DosCurve, IntegrandCurve
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{DosError, Result};
use crate::models::{DosCurve, IntegrandCurve, LatticeParameters};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 数据文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Xy,
}

impl DataFormat {
    /// 从扩展名推断格式，未知扩展名按 CSV 处理
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("xy") | Some("dat") | Some("txt") => DataFormat::Xy,
            _ => DataFormat::Csv,
        }
    }
}

#[derive(Serialize)]
struct DosRow {
    energy: f64,
    dos: f64,
}

#[derive(Serialize)]
struct SweepRow {
    beta: f64,
    energy: f64,
    dos: f64,
}

#[derive(Serialize)]
struct IntegrandRow {
    energy: f64,
    xi: f64,
    y: f64,
}

/// 按扩展名导出 DOS 曲线
pub fn write_curve(curve: &DosCurve, lattice: &LatticeParameters, output_path: &Path) -> Result<()> {
    match DataFormat::from_path(output_path) {
        DataFormat::Csv => to_csv(curve, output_path),
        DataFormat::Xy => to_xy(curve, lattice, output_path),
    }
}

/// 导出为 CSV
pub fn to_csv(curve: &DosCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (energy, dos) in curve.points() {
        wtr.serialize(DosRow { energy, dos })?;
    }

    wtr.flush().map_err(|e| DosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(curve: &DosCurve, lattice: &LatticeParameters, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| DosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Square-lattice tight-binding DOS").map_err(write_err)?;
    writeln!(
        out,
        "# E0 = {}, beta = {}, a = {}",
        lattice.energy_0, lattice.beta, lattice.lattice_constant
    )
    .map_err(write_err)?;
    writeln!(out, "# Columns: energy, DOS").map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (energy, dos) in curve.points() {
        writeln!(out, "{:.10e}\t{:.10e}", energy, dos).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

/// 导出多条不同 β 的 DOS 曲线（长表格式）
pub fn sweep_to_csv(curves: &[(f64, DosCurve)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (beta, curve) in curves {
        for (energy, dos) in curve.points() {
            wtr.serialize(SweepRow {
                beta: *beta,
                energy,
                dos,
            })?;
        }
    }

    wtr.flush().map_err(|e| DosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出被积函数采样
pub fn integrand_to_csv(samples: &[IntegrandCurve], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for sample in samples {
        for (&xi, &y) in sample.xi.iter().zip(&sample.y) {
            wtr.serialize(IntegrandRow {
                energy: sample.energy,
                xi,
                y,
            })?;
        }
    }

    wtr.flush().map_err(|e| DosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tbdos_{}_{}", std::process::id(), name))
    }

    fn sample_curve() -> DosCurve {
        DosCurve::new(vec![-1.0, 0.0, 1.5], vec![0.25, 1.0, 0.0])
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_path(Path::new("a.csv")), DataFormat::Csv);
        assert_eq!(DataFormat::from_path(Path::new("a.XY")), DataFormat::Xy);
        assert_eq!(DataFormat::from_path(Path::new("a.dat")), DataFormat::Xy);
        assert_eq!(DataFormat::from_path(Path::new("a")), DataFormat::Csv);
    }

    #[test]
    fn test_csv_export() {
        let path = temp_path("curve.csv");
        to_csv(&sample_curve(), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["energy", "dos"]);

        let rows: Vec<(f64, f64)> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, vec![(-1.0, 0.25), (0.0, 1.0), (1.5, 0.0)]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_xy_export() {
        let path = temp_path("curve.xy");
        let lattice = LatticeParameters::new(0.0, 1.0, 1.0);
        write_curve(&sample_curve(), &lattice, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 3);
        let values: Vec<f64> = data[0]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values, vec![-1.0, 0.25]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_sweep_export_rows() {
        let path = temp_path("sweep.csv");
        let curves = vec![(1.0, sample_curve()), (2.0, sample_curve())];
        sweep_to_csv(&curves, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<(f64, f64, f64)> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3], (2.0, -1.0, 0.25));

        std::fs::remove_file(&path).ok();
    }
}
