// ==========================================
// 座位表生成器 - 配置管理器
// ==========================================
// 职责: 加载 GridConfig（JSON 文件 → 环境变量覆写 → 边界收敛）
// 红线: 超界值收敛而非报错；跳过座位的非法值直接忽略
// ==========================================

use crate::domain::grid::GridConfig;
use crate::domain::types::{FillDirection, OverflowPolicy, ThemeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// 环境变量键
pub mod env_keys {
    pub const ROWS: &str = "SEATING_ROWS";
    pub const COLUMNS: &str = "SEATING_COLUMNS";
    pub const FILL_DIRECTION: &str = "SEATING_FILL_DIRECTION";
    pub const THEME: &str = "SEATING_THEME";
    pub const DOC_ID: &str = "SEATING_DOC_ID";
}

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置格式错误: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("配置值错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// GridBounds - 网格尺寸上限（策略，不是不变量）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub max_rows: u32,
    pub max_columns: u32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            max_rows: 8,
            max_columns: 6,
        }
    }
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    bounds: GridBounds,
}

impl ConfigManager {
    pub fn new(bounds: GridBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// 从 JSON 文件读取（缺省字段取默认值）
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<GridConfig> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: GridConfig = serde_json::from_str(&raw)?;
        info!(path = %path.display(), "配置文件加载完成");
        Ok(self.clamp_to_bounds(config))
    }

    /// 用进程环境变量覆写
    pub fn apply_env_overrides(&self, config: GridConfig) -> ConfigResult<GridConfig> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        self.apply_overrides(config, &vars)
    }

    /// 用给定键值覆写（便于测试，不依赖进程环境）
    pub fn apply_overrides(
        &self,
        mut config: GridConfig,
        vars: &HashMap<String, String>,
    ) -> ConfigResult<GridConfig> {
        if let Some(value) = vars.get(env_keys::ROWS) {
            config.rows = parse_dimension(env_keys::ROWS, value)?;
        }
        if let Some(value) = vars.get(env_keys::COLUMNS) {
            config.columns = parse_dimension(env_keys::COLUMNS, value)?;
        }
        if let Some(value) = vars.get(env_keys::FILL_DIRECTION) {
            config.fill_direction =
                value
                    .parse::<FillDirection>()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: env_keys::FILL_DIRECTION.to_string(),
                        value: value.clone(),
                        message,
                    })?;
        }
        if let Some(value) = vars.get(env_keys::THEME) {
            config.theme = ThemeId::parse_lenient(value);
        }
        if let Some(value) = vars.get(env_keys::DOC_ID) {
            config.target_doc_id = value.trim().to_string();
        }

        Ok(self.clamp_to_bounds(config))
    }

    /// 行列收敛到 [1, max]
    pub fn clamp_to_bounds(&self, mut config: GridConfig) -> GridConfig {
        let rows = config.rows.clamp(1, self.bounds.max_rows.max(1));
        let columns = config.columns.clamp(1, self.bounds.max_columns.max(1));

        if rows != config.rows || columns != config.columns {
            warn!(
                requested_rows = config.rows,
                requested_columns = config.columns,
                rows,
                columns,
                "网格尺寸超出范围，已收敛"
            );
        }

        config.rows = rows;
        config.columns = columns;
        config
    }
}

fn parse_dimension(key: &str, value: &str) -> ConfigResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

/// 解析跳过座位列表 "3, 7,12"；无法解析的片段忽略
pub fn parse_skip_seats(value: &str) -> BTreeSet<u32> {
    value
        .split([',', ' ', ';'])
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .filter(|seat| *seat >= 1)
        .collect()
}

/// 解析溢出策略，未知值回退默认
pub fn parse_overflow(value: &str) -> OverflowPolicy {
    value.parse().unwrap_or_else(|message: String| {
        warn!(%message, "溢出策略无效，使用默认值");
        OverflowPolicy::default()
    })
}
