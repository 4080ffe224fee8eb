// ==========================================
// 座位表生成器 - 导入层
// ==========================================
// 职责: 原始 CSV 文本 → 规范化学生记录
// 流程: 切行 → 表头识别 → 逐行取名 → 规范化 → 过滤 → 去重
// ==========================================

pub mod error;
pub mod field_splitter;
pub mod header_detector;
pub mod name_normalizer;
pub mod roster_importer;
pub mod roster_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use header_detector::HeaderLayout;
pub use name_normalizer::NameNormalizer;
pub use roster_importer::{label_from_file_name, ImportedRoster, RosterImporter};
pub use roster_parser::{NameSource, RosterParser};
