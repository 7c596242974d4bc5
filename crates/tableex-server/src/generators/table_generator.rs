//! 表格数据生成器
//!
//! 按行列数生成合成表格。生成是纯函数：相同的维度总是得到相同的结果，
//! 表头为 `header{列}`，单元格为 `data[{行},{列}]`，下标从 0 开始。

use std::time::Instant;

use tableex_shared::config::TableConfig;
use tableex_shared::observability::metrics;
use tracing::debug;

use crate::error::Result;
use crate::models::Table;

/// 生成指定维度的表格
///
/// 对任意 `usize` 都有定义：行数为 0 时 body 为空，列数为 0 时表头和每行都为空。
pub fn generate(rows: usize, columns: usize) -> Table {
    let header = (0..columns).map(|column| format!("header{column}")).collect();
    let body = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| format!("data[{row},{column}]"))
                .collect()
        })
        .collect();

    Table { header, body }
}

/// 基于配置的表格生成器
///
/// 在进程启动时构建一次表格，之后以只读方式注入到渲染层
#[derive(Debug, Clone)]
pub struct TableGenerator {
    config: TableConfig,
}

impl TableGenerator {
    /// 创建生成器
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置（256 行 x 16 列）创建生成器
    pub fn with_defaults() -> Self {
        Self::new(TableConfig::default())
    }

    /// 校验配置并生成表格
    pub fn generate(&self) -> Result<Table> {
        self.config.validate()?;

        let start = Instant::now();
        let table = generate(self.config.rows, self.config.columns);
        let elapsed = start.elapsed();

        metrics::record_table_generation(
            self.config.rows,
            self.config.columns,
            elapsed.as_secs_f64(),
        );
        debug!(
            rows = self.config.rows,
            columns = self.config.columns,
            elapsed_us = elapsed.as_micros() as u64,
            "表格生成完成"
        );

        Ok(table)
    }

    /// 获取配置
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}
