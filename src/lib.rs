// ==========================================
// 座位表生成器 - 核心库
// ==========================================
// 名单 CSV → 规范姓名 → 座位网格分配 → 预览 / 生成载荷
// 核心组件均为纯函数，不持有进程级状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 名单解析
pub mod importer;

// 引擎层 - 座位分配 / 配色
pub mod engine;

// 配置层 - 网格配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 会话与生成请求
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    FillDirection, GridConfig, OverflowPolicy, Roster, SeatAssignment, SeatCell, StudentRecord,
    ThemeId,
};

pub use engine::{color_for, SeatAssigner};

pub use importer::{NameNormalizer, RosterImporter, RosterParser};

pub use api::{ApiError, ApiResult, SeatingSession};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "座位表生成器";
