//! # 紧束缚 DOS 计算模块
//!
//! 二维正方晶格最近邻紧束缚模型的态密度数值计算。
//!
//! ## 子模块
//! - `limits`: ξ 积分区间
//! - `grid`: 端点加密的 ξ 网格
//! - `integrand`: 被积函数及退化回填
//! - `quadrature`: Simpson / 梯形积分
//! - `energy`: 能量网格
//! - `engine`: 计算引擎
//! - `filters`: 平均值拆分与归一化检查
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 和 `batch/`

pub mod energy;
pub mod engine;
pub mod export;
pub mod filters;
pub mod grid;
pub mod integrand;
pub mod limits;
pub mod plot;
pub mod quadrature;

pub use engine::{compute_dos, DosEngine};
