//! tableex 服务
//!
//! 生成固定规模的合成表格，并通过模板渲染为 HTML 页面对外提供。
//!
//! # 主要模块
//!
//! - `models`: 表格与框选数据模型，以及列重排、选区文本等纯操作
//! - `generators`: 确定性的表格数据生成器
//! - `renderer`: 基于 tera 的页面渲染
//! - `services`: HTTP 路由与处理器
//!
//! # 使用示例
//!
//! ```rust
//! use tableex_server::generators::generate;
//!
//! let table = generate(2, 3);
//! assert_eq!(table.header, vec!["header0", "header1", "header2"]);
//! assert_eq!(table.body[1][2], "data[1,2]");
//! ```

pub mod cli;
pub mod error;
pub mod generators;
pub mod models;
pub mod renderer;
pub mod services;
pub mod state;
