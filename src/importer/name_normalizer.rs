// ==========================================
// 座位表生成器 - 姓名规范化
// ==========================================
// 输出: "FAMILY, Given" 或单个大写词（单名）
// 规则:
//   1) 含逗号: 第一个逗号左侧为姓，右侧（多段合并）为名
//   2) 不含逗号: 最后一个空白分隔词为姓，其余为名
//   3) 只有一个词: 整体大写
// ==========================================

/// 姓名规范化器（无状态）
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 规范化原始姓名
    ///
    /// # 返回
    /// - Some(String): 规范显示名
    /// - None: 修剪后为空（调用方视为"无姓名"）
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }

        if let Some((family, given)) = name.split_once(',') {
            // 其余逗号并入名字部分
            let given = given.replace(',', " ");
            return self.join_parts(family, &given);
        }

        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        match tokens.pop() {
            Some(family) if !tokens.is_empty() => self.join_parts(family, &tokens.join(" ")),
            Some(single) => Some(single.to_uppercase()),
            None => None,
        }
    }

    /// 由已分列的姓 / 名直接组合规范名
    pub fn compose(&self, family: &str, given: &str) -> Option<String> {
        self.join_parts(family, given)
    }

    /// 姓名两部分都为空时返回 None（如 "," 或 ", ,"）
    fn join_parts(&self, family: &str, given: &str) -> Option<String> {
        let family = family.trim().to_uppercase();
        let given = title_case(given);
        match (family.is_empty(), given.is_empty()) {
            (false, false) => Some(format!("{}, {}", family, given)),
            (false, true) => Some(family),
            // ", John" 之类：没有姓时按单名处理
            (true, false) => Some(given.to_uppercase()),
            (true, true) => None,
        }
    }
}

/// 每个空白分隔词首字母大写、其余小写；词间统一为单个空格
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 便捷函数
pub fn normalize(raw: &str) -> Option<String> {
    NameNormalizer.normalize(raw)
}
