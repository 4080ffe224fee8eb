// ==========================================
// RosterParser 集成测试
// ==========================================
// 测试目标: 验证无 schema 名单解析
// 覆盖范围: 表头识别、引号字段、去重、非法行过滤
// ==========================================

use seating_chart::importer::name_normalizer::normalize;
use seating_chart::importer::RosterParser;
use seating_chart::StudentRecord;

// ==========================================
// 测试辅助函数
// ==========================================

fn parse_names(input: &str) -> Vec<String> {
    RosterParser::new()
        .parse(input)
        .into_iter()
        .map(|r| r.display_name)
        .collect()
}

// ==========================================
// 姓名规范化对照表
// ==========================================

#[test]
fn test_name_normalization_table() {
    let cases = [
        ("Doe, john", "DOE, John"),
        ("john doe", "DOE, John"),
        ("Madonna", "MADONNA"),
        ("van der Berg, anna maria", "VAN DER BERG, Anna Maria"),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize(raw).as_deref(), Some(expected), "输入: {}", raw);
    }
}

// ==========================================
// 场景测试
// ==========================================

#[test]
fn test_first_last_header_scenario() {
    let names = parse_names("FirstName,LastName\njohn,doe\njane,smith");
    assert_eq!(names, vec!["DOE, John", "SMITH, Jane"]);
}

#[test]
fn test_headerless_numeric_id_scenario() {
    let names = parse_names("1,John Doe\n2,Jane Smith");
    assert_eq!(names, vec!["DOE, John", "SMITH, Jane"]);
}

#[test]
fn test_headerless_first_line_is_data() {
    let names = parse_names("John Doe\nJane Smith\n");
    assert_eq!(names, vec!["DOE, John", "SMITH, Jane"]);
}

#[test]
fn test_quoted_field_with_comma_not_split() {
    let names = parse_names("Student,Grade\n\"Doe, John\",7\n\"Smith, jane\",8");
    assert_eq!(names, vec!["DOE, John", "SMITH, Jane"]);
}

#[test]
fn test_headerless_quoted_name_after_id() {
    let names = parse_names("17,\"Curie, marie\"\n18,\"Bohr, niels\"");
    assert_eq!(names, vec!["CURIE, Marie", "BOHR, Niels"]);
}

#[test]
fn test_short_rows_do_not_panic() {
    // 缺失字段按空串处理
    let names = parse_names("ID,First Name,Last Name,Email\n1\n2,ada\n3,alan,turing");
    // "1" 被拒绝；"2,ada" 缺姓，退回 ID 后一列
    assert_eq!(names, vec!["ADA", "TURING, Alan"]);
}

#[test]
fn test_crlf_and_blank_lines() {
    let names = parse_names("Name\r\n\r\nAda Lovelace\r\n   \r\nAlan Turing\r\n");
    assert_eq!(names, vec!["LOVELACE, Ada", "TURING, Alan"]);
}

#[test]
fn test_name_substring_header_skipped() {
    // 首行含 "name" 但不匹配任何已知列名，仍视为表头
    let names = parse_names("Full Names of Pupils\nGrace Hopper");
    assert_eq!(names, vec!["HOPPER, Grace"]);
}

// ==========================================
// 去重
// ==========================================

#[test]
fn test_dedup_keeps_first_occurrence() {
    let records: Vec<StudentRecord> =
        RosterParser::new().parse("Name\njohn doe\nAda Lovelace\n\"Doe, John\"\nJOHN DOE");

    let names: Vec<&str> = records.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["DOE, John", "LOVELACE, Ada"]);
    assert_eq!(records[0].source_line, "john doe");
}

#[test]
fn test_dedup_after_normalization() {
    // 原文大小写不同，规范化后相同即为重复
    let names = parse_names("Name\n\"McDonald, Ann\"\n\"Mcdonald, ann\"");
    assert_eq!(names, vec!["MCDONALD, Ann"]);
}

#[test]
fn test_unquoted_comma_splits_name_field() {
    // 未加引号的逗号是字段分隔符，姓名列只取到姓
    let names = parse_names("Name\nDoe, John\nMcdonald, ann");
    assert_eq!(names, vec!["DOE", "MCDONALD"]);
}

// ==========================================
// 拒绝非法输入
// ==========================================

#[test]
fn test_empty_and_garbage_input() {
    assert!(parse_names("").is_empty());
    assert!(parse_names("\n\n").is_empty());
    assert!(parse_names("Name\n123\n!!!\n---").is_empty());
}

#[test]
fn test_header_only_file() {
    assert!(parse_names("First Name,Last Name").is_empty());
}
