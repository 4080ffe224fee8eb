// ==========================================
// 座位表生成器 - 引号感知的字段切分
// ==========================================
// 双引号内的逗号不是分隔符
// 每个字段: 去首尾空白 → 去一对外层引号 → 再去空白
// ==========================================

/// 按行切分原始文本（CR/LF 皆可），丢弃空白行
pub fn split_lines(raw_text: &str) -> Vec<&str> {
    raw_text
        .trim_start_matches('\u{feff}')
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// 切分一行为字段
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(clean_field(&current));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.trim().to_string()
}

/// 表头匹配键: 小写 + 仅保留字母数字
pub fn header_key(field: &str) -> String {
    field
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}
