//! # 被积函数
//!
//! 对给定能量 E，在 ξ 网格上计算
//!
//! ```text
//! y(ξ) = 1 / √(1 − d²),   d = (E₀ − E)/(2β) − cos ξ
//! ```
//!
//! 在积分区间端点 d² → 1，函数发散但可积。浮点误差可能让端点附近的
//! d² ≥ 1，此时不报错，而是沿用前一个样本的值。
//! 第一个样本就退化时没有前驱，取 0。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs` 和 `commands/integrand.rs` 调用
//! - 输入网格来自 `dos/grid.rs`

/// 在 ξ 网格上计算被积函数，返回与 `xi` 等长的数组
///
/// 能量在能带外（|E₀ − E| > 4β）时返回全零。
pub fn evaluate_integrand(xi: &[f64], energy: f64, energy_0: f64, beta: f64) -> Vec<f64> {
    let mut y = vec![0.0; xi.len()];

    if ((energy_0 - energy) / (4.0 * beta)).abs() > 1.0 {
        return y;
    }

    let reduced = (energy_0 - energy) / (2.0 * beta);
    let mut previous = 0.0;

    for (value, &x) in y.iter_mut().zip(xi) {
        let differ = (reduced - x.cos()).powi(2);
        if differ < 1.0 {
            previous = 1.0 / (1.0 - differ).sqrt();
        }
        *value = previous;
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dos::grid::linspace;
    use std::f64::consts::PI;

    #[test]
    fn test_outside_band_is_zero() {
        let xi = linspace(0.0, PI, 11);
        let y = evaluate_integrand(&xi, 21.0, 0.0, 5.0);
        assert_eq!(y.len(), 11);
        assert!(y.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_matches_closed_form() {
        // E = E₀: y = 1/|sin ξ|
        let xi = linspace(0.2, 1.3, 12);
        let y = evaluate_integrand(&xi, 3.0, 3.0, 2.0);
        for (x, v) in xi.iter().zip(&y) {
            assert!((v - 1.0 / x.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_singular_first_sample_is_zero() {
        // ξ = 0, E = E₀: d = −1，首个样本退化
        let xi = [0.0, 0.5, 1.0];
        let y = evaluate_integrand(&xi, 0.0, 0.0, 1.0);
        assert_eq!(y[0], 0.0);
        assert!((y[1] - 1.0 / 0.5_f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_singular_sample_carries_previous_value() {
        // ξ = π, E = E₀: d = 1，沿用前一个值
        let xi = [1.0, 2.0, PI];
        let y = evaluate_integrand(&xi, 0.0, 0.0, 1.0);
        assert!(y[2].is_finite());
        assert_eq!(y[2], y[1]);
    }

    #[test]
    fn test_band_edge_gate_is_inclusive() {
        // |E − E₀| = 4β 仍然计算（全部退化，结果为 0 而不是 NaN）
        let xi = [PI, PI, PI];
        let y = evaluate_integrand(&xi, 4.0, 0.0, 1.0);
        assert!(y.iter().all(|v| *v == 0.0));
    }
}
