//! 共享库
//!
//! 包含 tableex 各组件共用的配置、错误处理、可观测性等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;
