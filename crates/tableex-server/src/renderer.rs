//! 页面渲染
//!
//! 封装 tera 模板引擎。内置模板在编译期嵌入二进制，运行时不依赖模板目录。

use tera::{Context, Tera};

use crate::error::Result;
use crate::models::Table;

/// 首页模板名称
pub const INDEX_TEMPLATE: &str = "tableex/index.html";

const INDEX_TEMPLATE_SOURCE: &str = include_str!("../templates/tableex/index.html");

/// 默认页面标题
const DEFAULT_TITLE: &str = "tableex";

/// 表格页面渲染器
pub struct TableRenderer {
    tera: Tera,
    title: String,
}

impl TableRenderer {
    /// 创建渲染器并注册内置模板
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, INDEX_TEMPLATE_SOURCE)?;

        Ok(Self {
            tera,
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// 设置页面标题
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 渲染首页
    ///
    /// 表格以 `table_data` 注入模板，包含 `header` 与 `body` 两个字段
    pub fn render_index(&self, table: &Table) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("table_data", table);

        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}
