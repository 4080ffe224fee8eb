// ==========================================
// 座位表生成器 - 预览渲染与 CSV 导出
// ==========================================
// 预览: 固定宽度文本网格，跳过的座位显示 XX
// 导出: 每个座位一行，溢出学生追加在末尾
// ==========================================

use crate::api::error::ApiResult;
use crate::api::seating_api::RosterAssignment;
use crate::domain::grid::{SeatAssignment, SeatCell};
use crate::domain::types::OverflowPolicy;
use std::io::Write;

const SKIPPED_MARK: &str = "XX";
const MIN_CELL_WIDTH: usize = 12;

/// 渲染单份名单的文本预览
pub fn render_text(item: &RosterAssignment, overflow: OverflowPolicy) -> String {
    let assignment = &item.assignment;
    let width = cell_width(assignment);
    let border = format!(
        "+{}",
        format!("{}+", "-".repeat(width + 2)).repeat(assignment.columns as usize)
    );

    let mut out = String::new();
    out.push_str(&format!(
        "== {} ({}): {} 人入座 / {} 可用座位\n",
        item.label,
        item.color,
        assignment.assigned_count(),
        assignment.usable_count()
    ));
    out.push_str(&border);
    out.push('\n');

    for row in assignment.cells.chunks(assignment.columns.max(1) as usize) {
        out.push('|');
        for cell in row {
            out.push_str(&format!(" {:<width$} |", cell_label(cell), width = width));
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }

    if assignment.has_overflow() {
        let heading = match overflow {
            OverflowPolicy::NewPage => "续下一页",
            OverflowPolicy::WaitingList => "候补名单",
        };
        out.push_str(&format!(
            "{} ({}):\n",
            heading,
            assignment.overflow_students.len()
        ));
        for (idx, student) in assignment.overflow_students.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, student.display_name));
        }
    }

    out
}

fn cell_label(cell: &SeatCell) -> String {
    if cell.skipped {
        return format!("{:>2} {}", cell.seat_number, SKIPPED_MARK);
    }
    match &cell.student {
        Some(student) => format!("{:>2} {}", cell.seat_number, student.display_name),
        None => format!("{:>2}", cell.seat_number),
    }
}

fn cell_width(assignment: &SeatAssignment) -> usize {
    assignment
        .cells
        .iter()
        .map(|c| cell_label(c).chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH)
}

/// 导出全部名单的分配结果为 CSV
pub fn write_csv<W: Write>(writer: W, items: &[RosterAssignment]) -> ApiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["roster", "seat", "row", "col", "student", "status"])?;

    for item in items {
        for cell in &item.assignment.cells {
            let status = if cell.skipped {
                "SKIPPED"
            } else if cell.is_occupied() {
                "SEATED"
            } else {
                "EMPTY"
            };
            let student = cell
                .student
                .as_ref()
                .map(|s| s.display_name.as_str())
                .unwrap_or("");
            let seat = cell.seat_number.to_string();
            let row = (cell.row + 1).to_string();
            let col = (cell.col + 1).to_string();
            csv_writer.write_record([
                item.label.as_str(),
                seat.as_str(),
                row.as_str(),
                col.as_str(),
                student,
                status,
            ])?;
        }
        for student in &item.assignment.overflow_students {
            csv_writer.write_record([
                item.label.as_str(),
                "",
                "",
                "",
                student.display_name.as_str(),
                "OVERFLOW",
            ])?;
        }
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::GridConfig;
    use crate::domain::student::StudentRecord;
    use crate::engine::SeatAssigner;

    fn item(n: usize, config: &GridConfig) -> RosterAssignment {
        let students: Vec<StudentRecord> = (1..=n)
            .map(|i| StudentRecord::new(format!("S{}", i), ""))
            .collect();
        RosterAssignment {
            roster_id: "r1".to_string(),
            label: "Period 1".to_string(),
            color: "#fee2e2".to_string(),
            assignment: SeatAssigner::new().assign(&students, config),
        }
    }

    #[test]
    fn test_render_text_marks_skipped_and_overflow() {
        let config = GridConfig::new(1, 2).with_skip_seats([2]);
        let text = render_text(&item(3, &config), OverflowPolicy::WaitingList);

        assert!(text.contains(" 1 S1"));
        assert!(text.contains(" 2 XX"));
        assert!(text.contains("候补名单 (2):"));
        assert!(text.contains("  1. S2"));
        assert!(text.contains("  2. S3"));
    }

    #[test]
    fn test_render_text_new_page_heading() {
        let config = GridConfig::new(1, 1);
        let text = render_text(&item(2, &config), OverflowPolicy::NewPage);
        assert!(text.contains("续下一页 (1):"));
    }

    #[test]
    fn test_write_csv() {
        let config = GridConfig::new(1, 2).with_skip_seats([2]);
        let mut buf = Vec::new();
        write_csv(&mut buf, &[item(2, &config)]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "roster,seat,row,col,student,status");
        assert_eq!(lines[1], "Period 1,1,1,1,S1,SEATED");
        assert_eq!(lines[2], "Period 1,2,1,2,,SKIPPED");
        assert_eq!(lines[3], "Period 1,,,,S2,OVERFLOW");
    }
}
