// ==========================================
// 座位表生成器 - 领域模型层
// ==========================================
// 职责: 定义学生、名单、网格配置、分配结果
// 红线: 不含解析逻辑,不含分配逻辑
// ==========================================

pub mod grid;
pub mod student;
pub mod types;

// 重导出核心类型
pub use grid::{
    GridConfig, SeatAssignment, SeatCell, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIMENSION,
};
pub use student::{Roster, StudentRecord};
pub use types::{FillDirection, OverflowPolicy, ThemeId};
