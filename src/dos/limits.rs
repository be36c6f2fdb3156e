//! # 积分限
//!
//! 给定能量 E，求约化波矢 ξ 的积分区间 [lower, upper] ⊂ [0, π]。
//!
//! 两个端点分别是 cos(ξ) = (E₀ − E)/(2β) ± 1 的解。
//! 两个分支独立判断：能带中心附近两式同时生效；
//! 能带之外两个分支都取默认值，区间退化为 [0, π]，
//! 此时由 `dos/integrand.rs` 的有效性判断把被积函数置零。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs` 和 `commands/integrand.rs` 调用
//! - 无外部模块依赖

use std::f64::consts::PI;

/// ξ 积分区间
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationDomain {
    pub lower: f64,
    pub upper: f64,
}

impl IntegrationDomain {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// 计算积分区间
///
/// acos 的参数截断到 [−1, 1]：E₀、β 不能精确表示时，能带边缘附近的
/// 参数可能略微越界。
pub fn integration_limits(energy: f64, energy_0: f64, beta: f64) -> IntegrationDomain {
    let reduced = (energy_0 - energy) / (2.0 * beta);

    let lower = if energy_0 <= energy && energy <= energy_0 + 4.0 * beta {
        (reduced + 1.0).clamp(-1.0, 1.0).acos()
    } else {
        0.0
    };

    let upper = if energy_0 - 4.0 * beta <= energy && energy <= energy_0 {
        (reduced - 1.0).clamp(-1.0, 1.0).acos()
    } else {
        PI
    };

    IntegrationDomain { lower, upper }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_inside_band() {
        let (e0, beta) = (0.0, 5.0);
        for i in 1..40 {
            let x = 4.0 * beta * i as f64 / 40.0;
            for energy in [e0 + x, e0 - x] {
                let d = integration_limits(energy, e0, beta);
                assert!(d.lower < d.upper, "E = {}: {:?}", energy, d);
                assert!((0.0..=PI).contains(&d.lower));
                assert!((0.0..=PI).contains(&d.upper));
            }
        }
    }

    #[test]
    fn test_limits_outside_band_default() {
        let d = integration_limits(25.0, 0.0, 5.0);
        assert_eq!(d, IntegrationDomain { lower: 0.0, upper: PI });
        let d = integration_limits(-20.5, 0.0, 5.0);
        assert_eq!(d, IntegrationDomain { lower: 0.0, upper: PI });
    }

    #[test]
    fn test_limits_band_centre_and_edges() {
        // E = E₀：两个分支同时生效，覆盖整个 [0, π]
        let d = integration_limits(1.0, 1.0, 2.0);
        assert_eq!(d.lower, 0.0);
        assert_eq!(d.upper, PI);

        // 能带边缘：区间收缩为一点
        let top = integration_limits(9.0, 1.0, 2.0);
        assert_eq!(top.width(), 0.0);
        let bottom = integration_limits(-7.0, 1.0, 2.0);
        assert_eq!(bottom.width(), 0.0);
    }

    #[test]
    fn test_limits_finite_for_inexact_parameters() {
        // 0.3 与 0.7 不是二进制精确值，边缘处 acos 参数会略微越界
        let cases = [(-3.2, -2.0, 0.3), (-0.8, -2.0, 0.3), (-2.7, 0.1, 0.7), (2.9, 0.1, 0.7)];
        for (energy, e0, beta) in cases {
            let d = integration_limits(energy, e0, beta);
            assert!(d.lower.is_finite() && d.upper.is_finite(), "E = {}: {:?}", energy, d);
            assert!((0.0..=PI).contains(&d.lower), "E = {}: {:?}", energy, d);
            assert!((0.0..=PI).contains(&d.upper), "E = {}: {:?}", energy, d);
            assert!(d.width() >= 0.0);
        }
    }

    #[test]
    fn test_limits_mirror() {
        // E₀ ± x 的区间关于 π/2 对称
        let (e0, beta) = (0.5, 1.5);
        let up = integration_limits(e0 + 2.0, e0, beta);
        let down = integration_limits(e0 - 2.0, e0, beta);
        assert!((up.lower - (PI - down.upper)).abs() < 1e-12);
        assert!((up.upper - (PI - down.lower)).abs() < 1e-12);
    }
}
