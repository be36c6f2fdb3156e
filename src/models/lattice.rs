//! # 晶格参数与计算配置
//!
//! - `LatticeParameters`: 原子能级 E₀、跃迁能 β、晶格常数 a
//! - `DosConfig`: 能量网格、ξ 网格与边界加密参数
//!
//! 两者在一次运行中只创建一次，之后只读。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs`, `dos/filters.rs` 和 `commands/` 使用
//! - 使用 `error.rs` 报告参数校验失败

use crate::error::{DosError, Result};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 正方晶格紧束缚模型参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    /// 孤立原子能级 E₀
    pub energy_0: f64,
    /// 最近邻跃迁能 β（> 0）
    pub beta: f64,
    /// 晶格常数 a（> 0）
    pub lattice_constant: f64,
}

impl LatticeParameters {
    pub fn new(energy_0: f64, beta: f64, lattice_constant: f64) -> Self {
        Self {
            energy_0,
            beta,
            lattice_constant,
        }
    }

    /// 能带底 E₀ − 4β
    pub fn band_bottom(&self) -> f64 {
        self.energy_0 - 4.0 * self.beta
    }

    /// 能带顶 E₀ + 4β
    pub fn band_top(&self) -> f64 {
        self.energy_0 + 4.0 * self.beta
    }

    /// 能量是否落在闭区间 [E₀ − 4β, E₀ + 4β] 内
    pub fn in_band(&self, energy: f64) -> bool {
        self.band_bottom() <= energy && energy <= self.band_top()
    }

    /// DOS 前置因子 1 / (a² β π²)
    pub fn prefactor(&self) -> f64 {
        1.0 / (self.lattice_constant.powi(2) * self.beta * PI * PI)
    }

    /// 校验参数（β > 0, a > 0, 全部有限）
    ///
    /// 数值核心不做这些检查，β = 0 或 a = 0 会直接产生 inf/NaN。
    pub fn validate(&self) -> Result<()> {
        if !self.energy_0.is_finite() {
            return Err(DosError::InvalidArgument(format!(
                "energy_0 must be finite, got {}",
                self.energy_0
            )));
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(DosError::InvalidArgument(format!(
                "beta must be a positive number, got {}",
                self.beta
            )));
        }
        if !(self.lattice_constant.is_finite() && self.lattice_constant > 0.0) {
            return Err(DosError::InvalidArgument(format!(
                "lattice constant must be a positive number, got {}",
                self.lattice_constant
            )));
        }
        Ok(())
    }
}

/// DOS 计算配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosConfig {
    /// 能量网格规模（≥ 2），实际点数为 4⌈(n+2)/2⌉ − 3
    pub num_points_energy: usize,
    /// ξ 基础网格点数（≥ 2）
    pub num_points_xi: usize,
    /// 能量窗口半宽，以 β 为单位（> 0）
    pub interval_energy: f64,
    /// 端点加密次数（≥ 0），0 表示均匀网格
    pub border_param: usize,
}

impl Default for DosConfig {
    fn default() -> Self {
        DosConfig {
            num_points_energy: 500,
            num_points_xi: 1000,
            interval_energy: 5.0,
            border_param: 3,
        }
    }
}

impl DosConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_points_energy < 2 {
            return Err(DosError::InvalidArgument(format!(
                "num_points_energy must be at least 2, got {}",
                self.num_points_energy
            )));
        }
        if self.num_points_xi < 2 {
            return Err(DosError::InvalidArgument(format!(
                "num_points_xi must be at least 2, got {}",
                self.num_points_xi
            )));
        }
        if !(self.interval_energy.is_finite() && self.interval_energy > 0.0) {
            return Err(DosError::InvalidArgument(format!(
                "interval_energy must be a positive number, got {}",
                self.interval_energy
            )));
        }
        Ok(())
    }
}
