// ==========================================
// 座位表生成器 - 生成请求与外部生成器接口
// ==========================================
// 职责: 校验生成请求、构建载荷、调用外部脚本生成器
// 校验顺序: 目标文档 ID → 名单数量
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::seating_api::{RosterAssignment, SeatingSession};
use crate::domain::grid::{GridConfig, SeatAssignment};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

// ==========================================
// 载荷结构
// ==========================================

/// 单份名单载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterPayload {
    pub file_name: String,
    pub color: String,
    /// 按实际分配顺序的规范名
    pub students: Vec<String>,
    pub assignment: SeatAssignment,
}

/// 交给外部生成器的完整载荷
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPayload {
    pub target_doc_id: String,
    pub config: GridConfig,
    pub rosters: Vec<RosterPayload>,
    pub generated_at: DateTime<Utc>,
}

impl From<RosterAssignment> for RosterPayload {
    fn from(item: RosterAssignment) -> Self {
        Self {
            file_name: item.label,
            color: item.color,
            students: item.assignment.names_in_assignment_order(),
            assignment: item.assignment,
        }
    }
}

/// 清洗目标文档 ID：粘贴的 ".../d/<ID>/..." 链接只保留 <ID>
pub fn clean_doc_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(idx) = trimmed.find("/d/") {
        let id: String = trimmed[idx + 3..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if !id.is_empty() {
            return id;
        }
    }
    trimmed.to_string()
}

/// 校验并构建生成载荷
pub fn build_payload(session: &SeatingSession, config: &GridConfig) -> ApiResult<GenerationPayload> {
    let mut rng = rand::thread_rng();
    build_payload_with_rng(session, config, &mut rng)
}

/// 校验并构建生成载荷（注入随机源）
#[instrument(skip(session, config, rng), fields(rosters = session.rosters().len()))]
pub fn build_payload_with_rng<R: Rng + ?Sized>(
    session: &SeatingSession,
    config: &GridConfig,
    rng: &mut R,
) -> ApiResult<GenerationPayload> {
    let target_doc_id = clean_doc_id(&config.target_doc_id);
    if target_doc_id.is_empty() {
        return Err(ApiError::MissingTargetId);
    }
    if session.is_empty() {
        return Err(ApiError::NoRosters);
    }

    let rosters: Vec<RosterPayload> = session
        .assign_all_with_rng(config, rng)
        .into_iter()
        .map(RosterPayload::from)
        .collect();

    let mut config = config.clone();
    config.target_doc_id = target_doc_id.clone();

    info!(target_doc_id = %target_doc_id, rosters = rosters.len(), "生成载荷已构建");
    Ok(GenerationPayload {
        target_doc_id,
        config,
        rosters,
        generated_at: Utc::now(),
    })
}

// ==========================================
// ScriptGenerator Trait
// ==========================================
// 用途: 外部代码生成协作方（网络调用在本 crate 之外实现）
// 实现者: PayloadScriptGenerator（离线，输出载荷 JSON）
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// 根据载荷生成目标脚本
    async fn generate(&self, payload: &GenerationPayload) -> ApiResult<String>;
}

/// 离线生成器：把载荷序列化为格式化 JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadScriptGenerator;

#[async_trait]
impl ScriptGenerator for PayloadScriptGenerator {
    async fn generate(&self, payload: &GenerationPayload) -> ApiResult<String> {
        Ok(serde_json::to_string_pretty(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_doc_id_from_url() {
        assert_eq!(
            clean_doc_id("https://docs.google.com/document/d/1AbC-d_9/edit#heading"),
            "1AbC-d_9"
        );
    }

    #[test]
    fn test_clean_doc_id_plain() {
        assert_eq!(clean_doc_id("  1AbC  "), "1AbC");
        assert_eq!(clean_doc_id("   "), "");
        // "/d/" 后无合法字符时原样保留
        assert_eq!(clean_doc_id("x/d/"), "x/d/");
    }

    #[test]
    fn test_build_payload_requires_doc_id_first() {
        let session = SeatingSession::new();
        let result = build_payload(&session, &GridConfig::default());
        assert!(matches!(result, Err(ApiError::MissingTargetId)));
    }

    #[test]
    fn test_build_payload_requires_rosters() {
        let session = SeatingSession::new();
        let config = GridConfig {
            target_doc_id: "doc".to_string(),
            ..GridConfig::default()
        };
        let result = build_payload(&session, &config);
        assert!(matches!(result, Err(ApiError::NoRosters)));
    }
}
