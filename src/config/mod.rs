// ==========================================
// 座位表生成器 - 配置层
// ==========================================
// 职责: 网格配置加载、环境变量覆写、尺寸边界策略
// 不持久化：配置只在单次运行内有效
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    env_keys, parse_overflow, parse_skip_seats, ConfigError, ConfigManager, ConfigResult,
    GridBounds,
};
