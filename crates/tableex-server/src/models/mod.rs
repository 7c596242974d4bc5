//! 表格数据模型
//!
//! 包含生成的表格结构、框选选区，以及它们上的纯函数操作。

pub mod selection;
pub mod table;

pub use selection::{BoxSelection, CellPos, CellRange, Direction};
pub use table::Table;
