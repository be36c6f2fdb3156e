//! # 数据模型模块
//!
//! 定义晶格参数、计算配置和 DOS 曲线的数据模型。
//!
//! ## 依赖关系
//! - 被 `dos/` 和 `commands/` 使用
//! - 子模块: lattice, curve

pub mod curve;
pub mod lattice;

pub use curve::{DosCurve, IntegrandCurve};
pub use lattice::{DosConfig, LatticeParameters};
