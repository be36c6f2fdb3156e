//! # DOS 曲线数据模型
//!
//! 存储能量网格与对应的态密度，以及被积函数的采样结果。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs`, `dos/filters.rs`, `dos/export.rs`, `dos/plot.rs` 使用
//! - 被 `commands/` 使用

use crate::models::LatticeParameters;

use serde::{Deserialize, Serialize};

/// 态密度曲线（能量与 DOS 一一对应，按能量升序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DosCurve {
    pub energies: Vec<f64>,
    pub dos: Vec<f64>,
}

impl DosCurve {
    pub fn new(energies: Vec<f64>, dos: Vec<f64>) -> Self {
        debug_assert_eq!(energies.len(), dos.len());
        Self { energies, dos }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// (E, DOS) 点对
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies.iter().copied().zip(self.dos.iter().copied())
    }

    /// 只保留能带 [E₀ − 4β, E₀ + 4β] 内的样本
    pub fn in_band(&self, lattice: &LatticeParameters) -> DosCurve {
        let (energies, dos) = self
            .points()
            .filter(|(e, _)| lattice.in_band(*e))
            .unzip();
        DosCurve { energies, dos }
    }

    /// 最大 DOS 值及其能量
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .filter(|(_, d)| d.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// 能带底处的 DOS：第一个有限正值
    pub fn band_edge_value(&self) -> Option<(f64, f64)> {
        self.points().find(|(_, d)| d.is_finite() && *d > 0.0)
    }

    /// DOS 平均值，空曲线返回 None
    pub fn mean(&self) -> Option<f64> {
        if self.dos.is_empty() {
            None
        } else {
            Some(self.dos.iter().sum::<f64>() / self.dos.len() as f64)
        }
    }
}

/// 某一能量下的被积函数采样
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrandCurve {
    pub energy: f64,
    pub xi: Vec<f64>,
    pub y: Vec<f64>,
}
