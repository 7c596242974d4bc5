//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `serve` - 启动 HTTP 服务
//! - `generate` - 生成表格并输出为 JSON 或 TSV
//!
//! # 使用示例
//!
//! ```bash
//! # 启动服务器
//! tableex serve --port 8080
//!
//! # 输出 2 行 3 列的表格
//! tableex generate -r 2 -c 3 -f tsv
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::CommandRunner;
