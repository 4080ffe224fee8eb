// ==========================================
// 座位表生成器 - 名单解析器
// ==========================================
// 输入: 原始 CSV 文本
// 输出: 去重、保序的 StudentRecord 列表
// 红线: 永不报错，无法解析的输入得到空列表
// ==========================================

use crate::domain::student::StudentRecord;
use crate::importer::field_splitter::{split_fields, split_lines};
use crate::importer::header_detector::HeaderLayout;
use crate::importer::name_normalizer::NameNormalizer;
use std::collections::HashSet;
use tracing::{debug, instrument};

// ==========================================
// 姓名来源（按优先级排列）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// 名 / 姓两列均非空，value 已是组合后的规范名
    SplitColumns,
    /// 表头中的姓名列
    NameColumn,
    /// 无表头且首列为纯数字 ID，取第 2 列
    AfterNumericId,
    /// 取第 1 列
    FirstField,
}

/// 单行解析出的姓名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub source: NameSource,
    pub value: String,
}

// ==========================================
// RosterParser
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterParser {
    normalizer: NameNormalizer,
}

impl RosterParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析原始文本为学生记录
    #[instrument(skip(self, raw_text), fields(bytes = raw_text.len()))]
    pub fn parse(&self, raw_text: &str) -> Vec<StudentRecord> {
        let lines = split_lines(raw_text);
        let Some(header_line) = lines.first() else {
            return Vec::new();
        };

        let layout = HeaderLayout::detect(&split_fields(header_line), header_line);
        debug!(?layout, line_count = lines.len(), "表头识别完成");

        let mut seen: HashSet<String> = HashSet::new();
        let mut students = Vec::new();

        for (row_idx, line) in lines.iter().enumerate().skip(layout.data_start_row()) {
            let Some(display_name) = self.canonical_name(line, &layout) else {
                debug!(row = row_idx + 1, "行无有效姓名，跳过");
                continue;
            };

            if !seen.insert(display_name.clone()) {
                debug!(row = row_idx + 1, name = %display_name, "重复姓名，保留首次出现");
                continue;
            }

            students.push(StudentRecord::new(display_name, *line));
        }

        debug!(count = students.len(), "名单解析完成");
        students
    }

    /// 一行 → 规范名（被拒绝时返回 None）
    pub fn canonical_name(&self, line: &str, layout: &HeaderLayout) -> Option<String> {
        let fields = split_fields(line);
        let resolved = resolve_name(&fields, layout)?;

        let canonical = match resolved.source {
            NameSource::SplitColumns => resolved.value,
            _ => self.normalizer.normalize(&resolved.value)?,
        };

        // 纯数字 / 纯标点行不算姓名
        if canonical.chars().any(char::is_alphabetic) {
            Some(canonical)
        } else {
            None
        }
    }
}

/// 按优先级选取一行的原始姓名
pub fn resolve_name(fields: &[String], layout: &HeaderLayout) -> Option<ResolvedName> {
    if layout.has_split_columns() {
        let first = field_at(fields, layout.first_name_idx);
        let last = field_at(fields, layout.last_name_idx);
        if !first.is_empty() && !last.is_empty() {
            if let Some(value) = NameNormalizer.compose(last, first) {
                return Some(ResolvedName {
                    source: NameSource::SplitColumns,
                    value,
                });
            }
        }
    }

    if layout.name_idx.is_some() {
        let name = field_at(fields, layout.name_idx);
        if !name.is_empty() {
            return Some(ResolvedName {
                source: NameSource::NameColumn,
                value: name.to_string(),
            });
        }
    }

    let first_field = field_at(fields, Some(0));
    let (source, value) = if fields.len() > 1 && is_numeric_id(first_field) {
        (NameSource::AfterNumericId, field_at(fields, Some(1)))
    } else {
        (NameSource::FirstField, first_field)
    };

    if value.is_empty() {
        None
    } else {
        Some(ResolvedName {
            source,
            value: value.to_string(),
        })
    }
}

/// 缺失的列视为空串
fn field_at(fields: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| fields.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn is_numeric_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// 便捷函数
pub fn parse(raw_text: &str) -> Vec<StudentRecord> {
    RosterParser::new().parse(raw_text)
}
