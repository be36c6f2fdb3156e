//! # DOS 计算引擎
//!
//! 对能量网格上的每个点：
//! 1. 求 ξ 积分区间（`limits`）
//! 2. 构造端点加密的 ξ 网格（`grid`）
//! 3. 计算被积函数（`integrand`）
//! 4. Simpson 积分（`quadrature`）
//! 5. 乘以前置因子 1/(a² β π²)
//!
//! 各能量点互不依赖，通过 `ParallelRunner` 并行计算后按原顺序收集。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `dos/` 下的全部算法模块
//! - 使用 `batch/runner.rs` 并行执行

use crate::batch::ParallelRunner;
use crate::dos::energy::build_energy_grid;
use crate::dos::grid::build_xi_grid;
use crate::dos::integrand::evaluate_integrand;
use crate::dos::limits::integration_limits;
use crate::dos::quadrature::simpson;
use crate::error::Result;
use crate::models::{DosConfig, DosCurve, IntegrandCurve, LatticeParameters};

/// DOS 计算引擎
#[derive(Debug, Clone, Copy)]
pub struct DosEngine {
    lattice: LatticeParameters,
    config: DosConfig,
}

impl DosEngine {
    /// 创建引擎，参数不合法时返回错误
    pub fn new(lattice: LatticeParameters, config: DosConfig) -> Result<Self> {
        lattice.validate()?;
        config.validate()?;
        Ok(Self { lattice, config })
    }

    pub fn lattice(&self) -> &LatticeParameters {
        &self.lattice
    }

    pub fn config(&self) -> &DosConfig {
        &self.config
    }

    /// 能量网格
    pub fn energy_grid(&self) -> Vec<f64> {
        build_energy_grid(
            self.lattice.energy_0,
            self.lattice.beta,
            self.config.num_points_energy,
            self.config.interval_energy,
        )
    }

    /// 某一能量处被积函数的 (ξ, y) 采样
    pub fn integrand(&self, energy: f64) -> IntegrandCurve {
        let LatticeParameters { energy_0, beta, .. } = self.lattice;
        let domain = integration_limits(energy, energy_0, beta);
        let xi = build_xi_grid(
            domain.lower,
            domain.upper,
            self.config.num_points_xi,
            self.config.border_param,
        );
        let y = evaluate_integrand(&xi, energy, energy_0, beta);
        IntegrandCurve { energy, xi, y }
    }

    /// 单个能量点的 DOS
    pub fn dos_at(&self, energy: f64) -> f64 {
        let sample = self.integrand(energy);
        self.lattice.prefactor() * simpson(&sample.y, &sample.xi)
    }

    /// 在整个能量网格上计算 DOS
    pub fn compute(&self, runner: &ParallelRunner) -> Result<DosCurve> {
        let energies = self.energy_grid();
        let dos = runner.map(&energies, "Integrating", |&energy| self.dos_at(energy))?;
        Ok(DosCurve::new(energies, dos))
    }
}

/// 不显示进度条地计算一条 DOS 曲线
pub fn compute_dos(lattice: LatticeParameters, config: DosConfig) -> Result<DosCurve> {
    DosEngine::new(lattice, config)?.compute(&ParallelRunner::new(0).quiet())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dos::filters::goodness;

    fn engine(border_param: usize) -> DosEngine {
        DosEngine::new(
            LatticeParameters::new(0.0, 5.0, 1.0),
            DosConfig {
                num_points_energy: 50,
                num_points_xi: 1000,
                interval_energy: 5.0,
                border_param,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_zero_outside_band() {
        let engine = engine(1);
        for energy in [-25.0, -20.5, -20.000001, 20.000001, 21.0, 25.0] {
            assert_eq!(engine.dos_at(energy), 0.0, "E = {}", energy);
        }
    }

    #[test]
    fn test_band_edges_are_finite() {
        let engine = engine(2);
        assert_eq!(engine.dos_at(20.0), 0.0);
        assert_eq!(engine.dos_at(-20.0), 0.0);
    }

    #[test]
    fn test_particle_hole_symmetry() {
        let engine = engine(3);
        for x in [0.7, 2.5, 5.0, 9.3, 15.0, 19.0] {
            let up = engine.dos_at(x);
            let down = engine.dos_at(-x);
            assert!(up > 0.0);
            assert!(
                (up - down).abs() <= 1e-3 * up,
                "x = {}: {} vs {}",
                x,
                up,
                down
            );
        }
    }

    #[test]
    fn test_centre_grows_with_border_refinement() {
        let centre: Vec<f64> = (0..3).map(|b| engine(b).dos_at(0.0)).collect();
        assert!(centre[0] < centre[1], "{:?}", centre);
        assert!(centre[1] < centre[2], "{:?}", centre);

        // E₀ ± ε：首个样本不退化，DOS 随加密单调不减
        for eps in [1e-3, -1e-3] {
            let values: Vec<f64> = (0..4).map(|b| engine(b).dos_at(eps)).collect();
            assert!(values.iter().all(|v| v.is_finite() && *v > 0.0), "{:?}", values);
            assert!(values[0] < values[1], "ε = {}: {:?}", eps, values);
            assert!(
                values.windows(2).all(|w| w[1] >= w[0] * (1.0 - 1e-9)),
                "ε = {}: {:?}",
                eps,
                values
            );
        }
    }

    #[test]
    fn test_finite_for_inexact_parameters() {
        let config = DosConfig {
            num_points_xi: 200,
            border_param: 2,
            ..DosConfig::default()
        };
        for (e0, beta) in [(-2.0, 0.3), (0.1, 0.7)] {
            let lattice = LatticeParameters::new(e0, beta, 1.0);
            let engine = DosEngine::new(lattice, config).unwrap();

            // 能带底正好落在能量网格上
            assert!(engine.dos_at(lattice.band_bottom()).is_finite());

            let curve = engine.compute(&ParallelRunner::new(2).quiet()).unwrap();
            let bad: Vec<f64> = curve
                .points()
                .filter(|(_, d)| !d.is_finite())
                .map(|(e, _)| e)
                .collect();
            assert!(bad.is_empty(), "non-finite DOS at {:?}", bad);
            assert!(goodness(&curve, &lattice).is_finite());
        }
        let lattice = LatticeParameters::new(-2.0, 0.3, 1.0);
        assert!(DosEngine::new(lattice, config).unwrap().dos_at(-3.2).is_finite());
    }

    #[test]
    fn test_curve_shape() {
        let engine = engine(3);
        let curve = engine.compute(&ParallelRunner::new(2).quiet()).unwrap();
        assert_eq!(curve.len(), engine.energy_grid().len());
        assert!(curve.dos.iter().all(|d| d.is_finite() && *d >= 0.0));

        // 最大值出现在 E₀ 附近
        let (e_peak, _) = curve.peak().unwrap();
        assert!(e_peak.abs() < 0.5, "peak at {}", e_peak);
    }

    #[test]
    fn test_goodness_reference_run() {
        let lattice = LatticeParameters::new(0.0, 5.0, 1.0);
        let config = DosConfig {
            num_points_energy: 500,
            num_points_xi: 1000,
            interval_energy: 5.0,
            border_param: 3,
        };
        let curve = compute_dos(lattice, config).unwrap();
        let theta = goodness(&curve, &lattice);
        assert!((theta - 1.0).abs() < 0.01, "goodness = {}", theta);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let config = DosConfig::default();
        assert!(DosEngine::new(LatticeParameters::new(0.0, 0.0, 1.0), config).is_err());
        assert!(DosEngine::new(LatticeParameters::new(0.0, 1.0, -1.0), config).is_err());
    }
}
