// ==========================================
// 座位表生成器 - 座位分配引擎
// ==========================================
// 红线: 座位编号固定为行优先 1..N，填充方向只改变分配顺序
// 红线: 跳过的座位不分配学生；学生数 = 入座数 + 溢出数
// ==========================================
// 输入: 学生列表（名单存储顺序）+ GridConfig
// 输出: SeatAssignment（全量重算）
// ==========================================

use crate::domain::grid::{GridConfig, SeatAssignment, SeatCell};
use crate::domain::student::StudentRecord;
use crate::domain::types::FillDirection;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

// ==========================================
// SeatAssigner - 座位分配引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatAssigner {
    // 无状态引擎
}

impl SeatAssigner {
    pub fn new() -> Self {
        Self {}
    }

    /// 分配座位（随机模式使用线程随机源）
    pub fn assign(&self, students: &[StudentRecord], config: &GridConfig) -> SeatAssignment {
        let mut rng = rand::thread_rng();
        self.assign_with_rng(students, config, &mut rng)
    }

    /// 分配座位（注入随机源，测试中使用固定种子）
    ///
    /// 流程:
    /// 1) 构建 1..N 座位，标记跳过
    /// 2) 随机模式下打乱学生副本
    /// 3) 按填充方向遍历可用座位逐个入座
    /// 4) 剩余学生进入溢出名单
    #[instrument(skip(self, students, config, rng), fields(
        students_count = students.len(),
        rows = config.rows,
        columns = config.columns,
        direction = %config.fill_direction,
        randomize = config.randomize
    ))]
    pub fn assign_with_rng<R: Rng + ?Sized>(
        &self,
        students: &[StudentRecord],
        config: &GridConfig,
        rng: &mut R,
    ) -> SeatAssignment {
        let total_cells = config.total_cells();
        if config.effective_rows() != config.rows || config.effective_columns() != config.columns {
            warn!(
                requested_rows = config.rows,
                requested_columns = config.columns,
                rows = config.effective_rows(),
                columns = config.effective_columns(),
                "网格尺寸超出硬上限，已截断"
            );
        }
        let mut cells = build_cells(config);

        // 只打乱工作副本，名单本身顺序不变
        let mut working: Vec<StudentRecord> = students.to_vec();
        if config.randomize {
            working.shuffle(rng);
        }

        let order = assignment_order(config);
        let mut remaining = working.into_iter();

        for seat_number in order {
            let Some(student) = remaining.next() else {
                break;
            };
            cells[(seat_number - 1) as usize].student = Some(student);
        }

        let overflow_students: Vec<StudentRecord> = remaining.collect();

        debug!(
            total_cells,
            assigned = students.len() - overflow_students.len(),
            overflow = overflow_students.len(),
            "座位分配完成"
        );

        SeatAssignment {
            rows: config.effective_rows(),
            columns: config.effective_columns(),
            fill_direction: config.fill_direction,
            cells,
            overflow_students,
        }
    }
}

/// 构建空网格（行优先编号，标记跳过座位）
fn build_cells(config: &GridConfig) -> Vec<SeatCell> {
    let columns = config.effective_columns();
    (1..=config.total_cells())
        .map(|seat_number| {
            let idx = seat_number - 1;
            SeatCell {
                seat_number,
                row: idx / columns,
                col: idx % columns,
                student: None,
                skipped: config.is_skipped(seat_number),
            }
        })
        .collect()
}

/// 可用座位的分配顺序
pub fn assignment_order(config: &GridConfig) -> Vec<u32> {
    let usable = (1..=config.total_cells()).filter(|seat| !config.is_skipped(*seat));
    match config.fill_direction {
        FillDirection::ForwardFromTopLeft => usable.collect(),
        FillDirection::BackwardFromBottomRight => usable.rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::MAX_GRID_DIMENSION;

    fn students(n: usize) -> Vec<StudentRecord> {
        (1..=n)
            .map(|i| StudentRecord::new(format!("STUDENT{}", i), format!("line {}", i)))
            .collect()
    }

    #[test]
    fn test_assignment_order_forward_with_skips() {
        let config = GridConfig::new(2, 2).with_skip_seats([2, 9]);
        assert_eq!(assignment_order(&config), vec![1, 3, 4]);
    }

    #[test]
    fn test_assignment_order_backward() {
        let config = GridConfig::new(2, 2)
            .with_direction(FillDirection::BackwardFromBottomRight)
            .with_skip_seats([4]);
        assert_eq!(assignment_order(&config), vec![3, 2, 1]);
    }

    #[test]
    fn test_cell_coordinates() {
        let assignment = SeatAssigner::new().assign(&students(0), &GridConfig::new(2, 3));
        let cell = assignment.cell(5).unwrap();
        assert_eq!((cell.row, cell.col), (1, 1));
        let cell = assignment.cell(3).unwrap();
        assert_eq!((cell.row, cell.col), (0, 2));
    }

    #[test]
    fn test_oversized_grid_truncated() {
        let config = GridConfig::new(u32::MAX, 2);
        let assignment = SeatAssigner::new().assign(&students(3), &config);
        assert_eq!(assignment.rows, MAX_GRID_DIMENSION);
        assert_eq!(assignment.cells.len() as u32, assignment.rows * assignment.columns);
        assert_eq!(assignment.assigned_count(), 3);
    }

    #[test]
    fn test_empty_roster() {
        let assignment = SeatAssigner::new().assign(&[], &GridConfig::new(3, 3));
        assert_eq!(assignment.cells.len(), 9);
        assert_eq!(assignment.assigned_count(), 0);
        assert!(!assignment.has_overflow());
    }

    #[test]
    fn test_all_seats_skipped_overflows_everyone() {
        let config = GridConfig::new(1, 2).with_skip_seats([1, 2]);
        let input = students(3);
        let assignment = SeatAssigner::new().assign(&input, &config);
        assert_eq!(assignment.assigned_count(), 0);
        assert_eq!(assignment.overflow_students, input);
    }
}
