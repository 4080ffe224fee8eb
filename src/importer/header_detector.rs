// ==========================================
// 座位表生成器 - 表头识别
// ==========================================
// 无固定 schema，按优先级判断首行是否为表头:
//   1) 同时找到 名 / 姓 列      → 表头，按列组合
//   2) 找到姓名列，或首行含 "name" → 表头，按姓名列规范化
//   3) 其余                      → 首行即数据
// ==========================================

use crate::importer::field_splitter::header_key;

const FIRST_NAME_KEYS: &[&str] = &["firstname", "first"];
const LAST_NAME_KEYS: &[&str] = &["lastname", "last"];
const NAME_KEYS: &[&str] = &["name", "student", "studentname", "displayname"];

/// 首行识别结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderLayout {
    pub first_name_idx: Option<usize>,
    pub last_name_idx: Option<usize>,
    pub name_idx: Option<usize>,
    /// 首行是否为表头（数据从第 2 行开始）
    pub has_header: bool,
}

impl HeaderLayout {
    /// 识别首行
    ///
    /// # 参数
    /// - fields: 首行切分后的字段
    /// - raw_line: 首行原文（用于 "name" 子串判断）
    pub fn detect(fields: &[String], raw_line: &str) -> Self {
        let mut layout = HeaderLayout::default();

        // 同名列出现多次时以最后一列为准
        for (idx, field) in fields.iter().enumerate() {
            let key = header_key(field);
            if FIRST_NAME_KEYS.contains(&key.as_str()) {
                layout.first_name_idx = Some(idx);
            }
            if LAST_NAME_KEYS.contains(&key.as_str()) {
                layout.last_name_idx = Some(idx);
            }
            if NAME_KEYS.contains(&key.as_str()) {
                layout.name_idx = Some(idx);
            }
        }

        layout.has_header = layout.has_split_columns()
            || layout.name_idx.is_some()
            || raw_line.to_lowercase().contains("name");

        layout
    }

    /// 是否同时具备名 / 姓两列
    pub fn has_split_columns(&self) -> bool {
        self.first_name_idx.is_some() && self.last_name_idx.is_some()
    }

    pub fn data_start_row(&self) -> usize {
        usize::from(self.has_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_detect_split_columns() {
        let f = fields(&["First Name", "Last Name", "Grade"]);
        let layout = HeaderLayout::detect(&f, "First Name,Last Name,Grade");
        assert_eq!(layout.first_name_idx, Some(0));
        assert_eq!(layout.last_name_idx, Some(1));
        assert!(layout.has_split_columns());
        assert!(layout.has_header);
    }

    #[test]
    fn test_detect_name_column() {
        let f = fields(&["ID", "Student"]);
        let layout = HeaderLayout::detect(&f, "ID,Student");
        assert_eq!(layout.name_idx, Some(1));
        assert!(!layout.has_split_columns());
        assert!(layout.has_header);
    }

    #[test]
    fn test_detect_name_substring_only() {
        let f = fields(&["Pupil Names"]);
        let layout = HeaderLayout::detect(&f, "Pupil Names");
        assert_eq!(layout.name_idx, None);
        assert!(layout.has_header);
        assert_eq!(layout.data_start_row(), 1);
    }

    #[test]
    fn test_detect_headerless() {
        let f = fields(&["1", "John Doe"]);
        let layout = HeaderLayout::detect(&f, "1,John Doe");
        assert_eq!(layout, HeaderLayout::default());
        assert_eq!(layout.data_start_row(), 0);
    }

    #[test]
    fn test_detect_only_first_column_not_split() {
        let f = fields(&["first", "score"]);
        let layout = HeaderLayout::detect(&f, "first,score");
        assert!(!layout.has_split_columns());
        assert!(!layout.has_header);
    }
}
