//! # DOS 后处理
//!
//! - 按平均值把曲线拆成低于/高于平均的两部分
//! - 归一化检查 Θ = a²/2 · ∫ DOS dE（理想值为 1）
//!
//! 能带外的 DOS 精确为 0，不是 NaN，所以这里按能带区间显式筛选，
//! 不依赖 NaN 传播。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `dos/quadrature.rs` 的梯形积分
//! - 使用 `models/` 的 DosCurve, LatticeParameters

use crate::dos::quadrature::trapezoid;
use crate::models::{DosCurve, LatticeParameters};

/// DOS 低于平均值的样本（保持原顺序）
pub fn split_below_average(energy: &[f64], dos: &[f64]) -> (Vec<f64>, Vec<f64>) {
    split_by_average(energy, dos, |value, mean| value < mean)
}

/// DOS 高于平均值的样本（保持原顺序）
pub fn split_above_average(energy: &[f64], dos: &[f64]) -> (Vec<f64>, Vec<f64>) {
    split_by_average(energy, dos, |value, mean| value > mean)
}

fn split_by_average<F>(energy: &[f64], dos: &[f64], keep: F) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64, f64) -> bool,
{
    if dos.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mean = dos.iter().sum::<f64>() / dos.len() as f64;

    energy
        .iter()
        .zip(dos)
        .filter(|(_, d)| keep(**d, mean))
        .map(|(&e, &d)| (e, d))
        .unzip()
}

/// 归一化参数 Θ
///
/// 只对能带内的样本做梯形积分。网格足够细时 Θ → 1。
pub fn goodness(curve: &DosCurve, lattice: &LatticeParameters) -> f64 {
    let band = curve.in_band(lattice);
    lattice.lattice_constant.powi(2) / 2.0 * trapezoid(&band.dos, &band.energies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_average() {
        let energy = [1.0, 2.0, 3.0, 4.0, 5.0];
        let dos = [0.1, 0.9, 0.5, 0.2, 0.8];
        // mean = 0.5

        let (e_low, d_low) = split_below_average(&energy, &dos);
        assert_eq!(e_low, vec![1.0, 4.0]);
        assert_eq!(d_low, vec![0.1, 0.2]);

        let (e_high, d_high) = split_above_average(&energy, &dos);
        assert_eq!(e_high, vec![2.0, 5.0]);
        assert_eq!(d_high, vec![0.9, 0.8]);
    }

    #[test]
    fn test_split_empty_and_flat() {
        let (e, d) = split_below_average(&[], &[]);
        assert!(e.is_empty() && d.is_empty());

        let (e, _) = split_above_average(&[0.0, 1.0], &[2.0, 2.0]);
        assert!(e.is_empty());
    }

    #[test]
    fn test_goodness_of_flat_band() {
        // 常数 DOS = 2/(a² · 8β) 在能带内积分后 Θ = 1
        let lattice = LatticeParameters::new(0.0, 1.0, 2.0);
        let energies: Vec<f64> = (0..=200).map(|i| (i as f64 - 100.0) / 20.0).collect();
        let dos = energies
            .iter()
            .map(|&e| if lattice.in_band(e) { 2.0 / (4.0 * 8.0) } else { 0.0 })
            .collect();
        let curve = DosCurve::new(energies, dos);
        assert!((goodness(&curve, &lattice) - 1.0).abs() < 1e-9);
    }
}
