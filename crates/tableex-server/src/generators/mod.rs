//! 生成器模块
//!
//! 提供确定性的合成表格生成功能。

pub mod table_generator;

pub use table_generator::{TableGenerator, generate};
