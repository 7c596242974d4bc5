//! 框选选区模型
//!
//! 选区由起点（anchor）和终点（focus）两个角决定，拖拽方向任意；
//! 归一化后得到闭区间矩形。键盘导航规则：
//!
//! - 单步移动一格，越过边界时停在原处
//! - `to_edge` 直接移动到该方向的最后一格
//! - 不扩展时起点和终点一起移动并重合，扩展时只移动终点

use serde::{Deserialize, Serialize};

/// 数据区坐标（从 0 开始，不含表头行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

impl CellPos {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// 移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 归一化后的矩形区域（上下左右均为闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRange {
    pub fn contains(&self, pos: CellPos) -> bool {
        (self.top..=self.bottom).contains(&pos.row)
            && (self.left..=self.right).contains(&pos.column)
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
}

/// 框选选区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSelection {
    pub anchor: CellPos,
    pub focus: CellPos,
}

impl BoxSelection {
    pub fn new(anchor: CellPos, focus: CellPos) -> Self {
        Self { anchor, focus }
    }

    /// 单格选区（点击某个单元格）
    pub fn single(pos: CellPos) -> Self {
        Self::new(pos, pos)
    }

    pub fn range(&self) -> CellRange {
        CellRange {
            top: self.anchor.row.min(self.focus.row),
            left: self.anchor.column.min(self.focus.column),
            bottom: self.anchor.row.max(self.focus.row),
            right: self.anchor.column.max(self.focus.column),
        }
    }

    /// 按键盘方向移动选区
    ///
    /// `rows`/`columns` 为数据区尺寸，移动结果始终被限制在其中。
    pub fn step(
        &self,
        direction: Direction,
        extend: bool,
        to_edge: bool,
        rows: usize,
        columns: usize,
    ) -> Self {
        if extend {
            let focus = step_pos(self.focus, direction, to_edge, rows, columns);
            Self::new(self.anchor, focus)
        } else {
            Self::single(step_pos(self.anchor, direction, to_edge, rows, columns))
        }
    }
}

fn step_pos(
    pos: CellPos,
    direction: Direction,
    to_edge: bool,
    rows: usize,
    columns: usize,
) -> CellPos {
    let last_row = rows.saturating_sub(1);
    let last_column = columns.saturating_sub(1);

    match (direction, to_edge) {
        (Direction::Up, true) => CellPos::new(0, pos.column),
        (Direction::Up, false) => CellPos::new(pos.row.saturating_sub(1), pos.column),
        (Direction::Down, true) => CellPos::new(last_row, pos.column),
        (Direction::Down, false) => CellPos::new((pos.row + 1).min(last_row), pos.column),
        (Direction::Left, true) => CellPos::new(pos.row, 0),
        (Direction::Left, false) => CellPos::new(pos.row, pos.column.saturating_sub(1)),
        (Direction::Right, true) => CellPos::new(pos.row, last_column),
        (Direction::Right, false) => CellPos::new(pos.row, (pos.column + 1).min(last_column)),
    }
}
