// ==========================================
// 座位表生成器 - 名单文件导入
// ==========================================
// 阶段 0: 文件读取（扩展名 / 存在性 / UTF-8 检查）
// 阶段 1: 文本解析（RosterParser，永不报错）
// ==========================================

use crate::domain::student::StudentRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::roster_parser::RosterParser;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// 导入结果（尚未加入会话，没有 id / 序号）
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRoster {
    pub label: String,
    pub students: Vec<StudentRecord>,
}

// ==========================================
// RosterImporter
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RosterImporter {
    parser: RosterParser,
}

impl RosterImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从文件导入名单
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportedRoster> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| ImportError::EncodingError {
            path: path.display().to_string(),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let imported = self.import_text(&file_name, &text);
        info!(
            label = %imported.label,
            students = imported.students.len(),
            "名单导入完成"
        );
        Ok(imported)
    }

    /// 从已读取的文本导入（文件选择由外部负责时使用）
    pub fn import_text(&self, file_name: &str, raw_text: &str) -> ImportedRoster {
        ImportedRoster {
            label: label_from_file_name(file_name),
            students: self.parser.parse(raw_text),
        }
    }
}

/// 文件名 → 显示标签（去掉最后一个扩展名）
pub fn label_from_file_name(file_name: &str) -> String {
    let name = file_name.trim();
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name.to_string(),
    }
}
