//! # 非均匀积分网格
//!
//! 被积函数在 ξ 区间两端有可积奇点（~ 1/√(ξ − ξ₀)），
//! 均匀网格在端点附近采样不足。这里在均匀网格的基础上，
//! 每一轮在两端各插入一段更细的均匀子网格：
//!
//! ```text
//! 第 i 轮: [lower, lower + step/nⁱ⁺¹] ++ 上一轮去掉首尾 ++ [upper − step/nⁱ⁺¹, upper]
//! ```
//!
//! `step` 始终是原始区间宽度，所以每一轮都在固定比例处加一层更细的采样，
//! 内部密度不变。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs`, `dos/energy.rs` 调用
//! - 无外部模块依赖

/// 等间距采样，首尾精确等于 start 和 stop
///
/// n = 0 返回空，n = 1 返回 [start]。
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// 构造端点加密的 ξ 网格
///
/// 返回长度为 `num_points + border_param * (2 * num_points - 2)` 的升序数组。
pub fn build_xi_grid(lower: f64, upper: f64, num_points: usize, border_param: usize) -> Vec<f64> {
    let mut grid = linspace(lower, upper, num_points);
    let step = upper - lower;

    for i in 0..border_param {
        let width = step / (num_points as f64).powi(i as i32 + 1);
        let interior = if grid.len() > 2 {
            &grid[1..grid.len() - 1]
        } else {
            &[][..]
        };

        let mut refined = Vec::with_capacity(interior.len() + 2 * num_points);
        refined.extend(linspace(lower, lower + width, num_points));
        refined.extend_from_slice(interior);
        refined.extend(linspace(upper - width, upper, num_points));
        grid = refined;
    }

    grid
}
