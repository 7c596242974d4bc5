//! 表格模型
//!
//! 生成后的表格在进程内只读共享，所有变换都返回新的表格。

use serde::{Deserialize, Serialize};

use super::selection::{BoxSelection, CellPos};
use crate::error::{Result, ServerError};

/// 合成表格
///
/// 模板渲染时以 `table_data` 的名称注入，字段名即模板中的访问路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// 列标题，长度等于列数
    pub header: Vec<String>,
    /// 数据行，每行长度等于列数
    pub body: Vec<Vec<String>>,
}

impl Table {
    /// 行数（不含表头）
    pub fn rows(&self) -> usize {
        self.body.len()
    }

    /// 列数
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// 读取数据区的单元格
    pub fn cell(&self, pos: CellPos) -> Option<&str> {
        self.body
            .get(pos.row)
            .and_then(|row| row.get(pos.column))
            .map(String::as_str)
    }

    /// 判断坐标是否落在数据区内
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows() && pos.column < self.columns()
    }

    /// 将 `from` 列移动到 `to` 位置
    ///
    /// 两者之间的列依次平移一位，表头与每一行同步处理。
    /// 原表格保持不变。
    pub fn move_column(&self, from: usize, to: usize) -> Result<Table> {
        let columns = self.columns();
        for index in [from, to] {
            if index >= columns {
                return Err(ServerError::ColumnOutOfRange { index, columns });
            }
        }

        let mut moved = self.clone();
        if from == to {
            return Ok(moved);
        }

        shift(&mut moved.header, from, to);
        for row in &mut moved.body {
            shift(row, from, to);
        }

        Ok(moved)
    }

    /// 提取框选区域的文本
    ///
    /// 单元格之间用制表符分隔，行之间用换行分隔，末尾不带换行，
    /// 可直接粘贴到电子表格中。
    pub fn selection_text(&self, selection: &BoxSelection) -> Result<String> {
        self.ensure_contains(selection.anchor)?;
        self.ensure_contains(selection.focus)?;

        let range = selection.range();
        let lines: Vec<String> = self.body[range.top..=range.bottom]
            .iter()
            .map(|row| row[range.left..=range.right].join("\t"))
            .collect();

        Ok(lines.join("\n"))
    }

    /// 校验坐标在数据区内
    pub fn ensure_contains(&self, pos: CellPos) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(ServerError::CellOutOfRange {
                row: pos.row,
                column: pos.column,
                rows: self.rows(),
                columns: self.columns(),
            })
        }
    }

    /// 以 TSV 形式输出整张表（首行为表头）
    pub fn to_tsv(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.body.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn shift(cells: &mut Vec<String>, from: usize, to: usize) {
    let cell = cells.remove(from);
    cells.insert(to, cell);
}
