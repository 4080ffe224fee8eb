// ==========================================
// 座位表生成器 - 学生与名单实体
// ==========================================
// StudentRecord: 解析后不可变
// Roster: 一个输入文件对应一份名单，替换即删除后重新添加
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// StudentRecord - 学生记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 规范显示名 "FAMILY, Given" 或单个大写词
    pub display_name: String,
    /// 原始行（诊断用）
    pub source_line: String,
}

impl StudentRecord {
    pub fn new(display_name: impl Into<String>, source_line: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            source_line: source_line.into(),
        }
    }
}

// ==========================================
// Roster - 班级名单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// 会话内唯一标识（UUID v4）
    pub id: String,
    /// 来源名称（文件名去扩展名）
    pub label: String,
    /// 首次出现顺序，已去重
    pub students: Vec<StudentRecord>,
    /// 在当前已加载名单中的序号（0 起），用于配色
    pub color_seed: usize,
}

impl Roster {
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// 规范名列表（名单存储顺序）
    pub fn display_names(&self) -> Vec<String> {
        self.students.iter().map(|s| s.display_name.clone()).collect()
    }
}
