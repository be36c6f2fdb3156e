//! # 能量网格
//!
//! DOS 在 E₀ 处对数发散，所以能量网格在 E₀ 附近加密：
//!
//! ```text
//! [E₀ − L, E₀)          粗网格，n − 1 点
//! [E₀ − L/n, E₀]        细网格，n 点（含 E₀）
//! (E₀, E₀ + L/n]        细网格，n − 1 点
//! (E₀, E₀ + L]          粗网格中 > E₀ + L/n 的部分，n − 1 点
//! ```
//!
//! 其中 L = interval_energy · β，n = ⌈(num_points_energy + 2)/2⌉。
//! 输出严格递增，长度 4n − 3，首尾精确等于 E₀ ∓ L。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs` 调用
//! - 使用 `dos/grid.rs` 的 `linspace`

use crate::dos::grid::linspace;

/// 每段子网格的点数 ⌈(num_points_energy + 2)/2⌉
pub fn segment_points(num_points_energy: usize) -> usize {
    (num_points_energy + 3) / 2
}

/// 构造能量网格
pub fn build_energy_grid(
    energy_0: f64,
    beta: f64,
    num_points_energy: usize,
    interval_energy: f64,
) -> Vec<f64> {
    let n = segment_points(num_points_energy);
    let step = interval_energy * beta;
    let fine = step / n as f64;

    let below_coarse = linspace(energy_0 - step, energy_0, n);
    let below_fine = linspace(energy_0 - fine, energy_0, n);
    let above_fine = linspace(energy_0, energy_0 + fine, n);
    let above_coarse = linspace(energy_0, energy_0 + step, n);

    let mut grid = Vec::with_capacity(4 * n - 3);
    grid.extend_from_slice(&below_coarse[..n - 1]);
    grid.extend_from_slice(&below_fine);
    grid.extend_from_slice(&above_fine[1..]);
    grid.extend_from_slice(&above_coarse[1..]);
    grid
}
