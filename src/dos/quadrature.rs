//! # 数值积分
//!
//! - `simpson`: 非均匀网格上的复合 Simpson 积分，用于 ξ 积分
//! - `trapezoid`: 复合梯形积分，用于 DOS 归一化检查
//!
//! 每对相邻区间 (h₀, h₁) 拟合一条抛物线：
//!
//! ```text
//! ∫ ≈ (h₀+h₁)/6 · [y₀(2 − h₁/h₀) + y₁(h₀+h₁)²/(h₀h₁) + y₂(2 − h₀/h₁)]
//! ```
//!
//! 样本数为偶数时，剩余的一个区间分别放在首尾各算一次梯形，再取平均，
//! 结果关于网格翻转对称。宽度为零的区间（能带边缘处退化的积分区间）贡献为 0。
//!
//! ## 依赖关系
//! - 被 `dos/engine.rs`, `dos/filters.rs` 调用
//! - 无外部模块依赖

/// 复合 Simpson 积分
///
/// # Panics
/// `y` 与 `x` 长度不同。
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(y.len(), x.len(), "simpson: y and x must have equal length");

    let n = x.len();
    match n {
        0 | 1 => 0.0,
        2 => trapezoid(y, x),
        _ if n % 2 == 1 => simpson_panels(y, x),
        _ => {
            let head = simpson_panels(&y[..n - 1], &x[..n - 1]) + trapezoid(&y[n - 2..], &x[n - 2..]);
            let tail = trapezoid(&y[..2], &x[..2]) + simpson_panels(&y[1..], &x[1..]);
            0.5 * (head + tail)
        }
    }
}

/// 奇数个样本的 Simpson 求和
fn simpson_panels(y: &[f64], x: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < x.len() {
        total += simpson_panel(
            [x[i], x[i + 1], x[i + 2]],
            [y[i], y[i + 1], y[i + 2]],
        );
        i += 2;
    }
    total
}

fn simpson_panel(x: [f64; 3], y: [f64; 3]) -> f64 {
    let h0 = x[1] - x[0];
    let h1 = x[2] - x[1];
    debug_assert!(
        h0.is_finite() && h1.is_finite(),
        "simpson: non-finite grid spacing {:?}",
        x
    );

    // 退化区间：退回梯形或直接为 0
    if h0 == 0.0 && h1 == 0.0 {
        return 0.0;
    }
    if h0 == 0.0 {
        return 0.5 * h1 * (y[1] + y[2]);
    }
    if h1 == 0.0 {
        return 0.5 * h0 * (y[0] + y[1]);
    }

    let hsum = h0 + h1;
    let hprod = h0 * h1;
    let ratio = h0 / h1;

    hsum / 6.0 * (y[0] * (2.0 - 1.0 / ratio) + y[1] * hsum * hsum / hprod + y[2] * (2.0 - ratio))
}

/// 复合梯形积分
///
/// # Panics
/// `y` 与 `x` 长度不同。
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(y.len(), x.len(), "trapezoid: y and x must have equal length");

    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum()
}
