//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::error::Result;
use crate::generators::TableGenerator;
use crate::models::Table;
use crate::renderer::TableRenderer;

/// Axum 应用共享状态
///
/// 表格在启动时生成一次，之后只读共享，所有请求无需加锁
#[derive(Clone)]
pub struct AppState {
    /// 启动时生成的表格
    pub table: Arc<Table>,
    /// 页面渲染器
    pub renderer: Arc<TableRenderer>,
    /// 服务名，用于健康检查响应
    pub service_name: Arc<str>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(table: Table, renderer: TableRenderer, service_name: &str) -> Self {
        Self {
            table: Arc::new(table),
            renderer: Arc::new(renderer),
            service_name: Arc::from(service_name),
        }
    }

    /// 由生成器构建状态：生成表格并创建渲染器，页面标题使用服务名
    pub fn from_generator(generator: &TableGenerator, service_name: &str) -> Result<Self> {
        let table = generator.generate()?;
        let renderer = TableRenderer::new()?.with_title(service_name);
        Ok(Self::new(table, renderer, service_name))
    }
}
