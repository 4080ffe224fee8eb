// ==========================================
// 座位表生成器 - 网格配置与座位分配结果
// ==========================================
// 红线: 座位编号永远是行优先 1..N，与填充方向无关
// 红线: 分配结果每次全量重算，不做增量修补
// ==========================================

use crate::domain::student::StudentRecord;
use crate::domain::types::{FillDirection, OverflowPolicy, ThemeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 默认行数（与原界面一致）
pub const DEFAULT_ROWS: u32 = 5;
/// 默认列数
pub const DEFAULT_COLUMNS: u32 = 6;
/// 单维硬上限：超出部分截断，保证 rows * columns 不溢出且分配有界
pub const MAX_GRID_DIMENSION: u32 = 100;

// ==========================================
// GridConfig - 网格配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    pub fill_direction: FillDirection,
    /// 1 起的不可用座位号；超出 [1, total_cells] 的值无效果
    pub skip_seats: BTreeSet<u32>,
    pub randomize: bool,
    pub overflow: OverflowPolicy,
    pub theme: ThemeId,
    /// 仅供外部生成器使用
    pub landscape: bool,
    /// 目标文档 ID（外部生成器使用，分配逻辑不读取）
    pub target_doc_id: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            fill_direction: FillDirection::default(),
            skip_seats: BTreeSet::new(),
            randomize: false,
            overflow: OverflowPolicy::default(),
            theme: ThemeId::default(),
            landscape: false,
            target_doc_id: String::new(),
        }
    }
}

impl GridConfig {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: FillDirection) -> Self {
        self.fill_direction = direction;
        self
    }

    pub fn with_skip_seats<I: IntoIterator<Item = u32>>(mut self, seats: I) -> Self {
        self.skip_seats = seats.into_iter().collect();
        self
    }

    /// 实际使用的行数（截断到 MAX_GRID_DIMENSION）
    pub fn effective_rows(&self) -> u32 {
        self.rows.min(MAX_GRID_DIMENSION)
    }

    /// 实际使用的列数（截断到 MAX_GRID_DIMENSION）
    pub fn effective_columns(&self) -> u32 {
        self.columns.min(MAX_GRID_DIMENSION)
    }

    /// effective_rows * effective_columns，最大 10_000
    pub fn total_cells(&self) -> u32 {
        self.effective_rows() * self.effective_columns()
    }

    /// 座位号是否被跳过（范围外的跳过值永远不会命中）
    pub fn is_skipped(&self, seat_number: u32) -> bool {
        self.skip_seats.contains(&seat_number)
    }
}

// ==========================================
// SeatCell - 单个座位
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCell {
    /// 行优先 1 起编号
    pub seat_number: u32,
    /// 0 起行号
    pub row: u32,
    /// 0 起列号
    pub col: u32,
    pub student: Option<StudentRecord>,
    pub skipped: bool,
}

impl SeatCell {
    pub fn is_occupied(&self) -> bool {
        self.student.is_some()
    }
}

// ==========================================
// SeatAssignment - 一份名单的座位分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub rows: u32,
    pub columns: u32,
    pub fill_direction: FillDirection,
    /// 长度恒为 rows * columns（截断后的实际尺寸），按座位号升序
    pub cells: Vec<SeatCell>,
    /// 座位用尽后剩余的学生（保持剩余顺序）
    pub overflow_students: Vec<StudentRecord>,
}

impl SeatAssignment {
    pub fn cell(&self, seat_number: u32) -> Option<&SeatCell> {
        seat_number
            .checked_sub(1)
            .and_then(|idx| self.cells.get(idx as usize))
    }

    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn usable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.skipped).count()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow_students.is_empty()
    }

    /// 按实际分配顺序列出已入座学生的规范名
    pub fn names_in_assignment_order(&self) -> Vec<String> {
        let seated = self
            .cells
            .iter()
            .filter_map(|c| c.student.as_ref().map(|s| s.display_name.clone()));

        match self.fill_direction {
            FillDirection::ForwardFromTopLeft => seated.collect(),
            FillDirection::BackwardFromBottomRight => {
                let mut names: Vec<String> = seated.collect();
                names.reverse();
                names
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 6);
        assert_eq!(config.total_cells(), 30);
        assert!(!config.randomize);
    }

    #[test]
    fn test_total_cells_capped() {
        let config = GridConfig::new(u32::MAX, u32::MAX);
        assert_eq!(config.effective_rows(), MAX_GRID_DIMENSION);
        assert_eq!(config.total_cells(), MAX_GRID_DIMENSION * MAX_GRID_DIMENSION);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: GridConfig =
            serde_json::from_str(r#"{"rows": 2, "skip_seats": [1, 99]}"#).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert!(config.is_skipped(99));
        assert_eq!(config.fill_direction, FillDirection::ForwardFromTopLeft);
    }

    #[test]
    fn test_cell_lookup_out_of_range() {
        let assignment = SeatAssignment {
            rows: 1,
            columns: 1,
            fill_direction: FillDirection::ForwardFromTopLeft,
            cells: vec![SeatCell {
                seat_number: 1,
                row: 0,
                col: 0,
                student: None,
                skipped: false,
            }],
            overflow_students: vec![],
        };
        assert!(assignment.cell(0).is_none());
        assert!(assignment.cell(1).is_some());
        assert!(assignment.cell(2).is_none());
    }
}
