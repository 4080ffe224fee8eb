// ==========================================
// 座位表生成器 - API层错误类型
// ==========================================
// 职责: 会话/生成请求边界的错误，转换下层错误为用户可读消息
// 引擎本身不报错，这里只覆盖外围
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 生成请求校验
    // ==========================================
    #[error("缺少目标文档 ID")]
    MissingTargetId,

    #[error("请至少上传一份 CSV 名单")]
    NoRosters,

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(#[from] ImportError),

    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(String),

    #[error("脚本生成失败: {0}")]
    GenerationFailed(String),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::GenerationFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
