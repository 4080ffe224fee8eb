// ==========================================
// 座位表生成器 - 引擎层
// ==========================================
// 职责: 座位分配与配色选择
// 红线: 纯函数，无 I/O，无全局状态
// ==========================================

pub mod seat_assignment;
pub mod theme;

// 重导出核心引擎
pub use seat_assignment::{assignment_order, SeatAssigner};
pub use theme::{color_for, palette};
