// ==========================================
// 座位表生成器 - API 层
// ==========================================
// 职责: 名单会话、预览、导出、生成请求，供命令行与外部壳调用
// ==========================================

pub mod error;
pub mod generation;
pub mod preview;
pub mod seating_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use generation::{
    build_payload, build_payload_with_rng, clean_doc_id, GenerationPayload,
    PayloadScriptGenerator, RosterPayload, ScriptGenerator,
};
pub use preview::{render_text, write_csv};
pub use seating_api::{RosterAssignment, SeatingSession};
