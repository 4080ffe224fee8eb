// ==========================================
// 座位表生成器 - 会话 API
// ==========================================
// 职责: 持有已加载名单集合（显式值，无全局状态），
//       为每份名单计算座位分配与颜色
// 红线: 名单不可原地修改，替换 = 删除后重新添加
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::grid::{GridConfig, SeatAssignment};
use crate::domain::student::Roster;
use crate::engine::{color_for, SeatAssigner};
use crate::importer::{ImportedRoster, RosterImporter};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// 一份名单的完整分配结果（预览与生成载荷共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterAssignment {
    pub roster_id: String,
    pub label: String,
    pub color: String,
    pub assignment: SeatAssignment,
}

// ==========================================
// SeatingSession
// ==========================================
#[derive(Debug, Default)]
pub struct SeatingSession {
    rosters: Vec<Roster>,
    importer: RosterImporter,
    assigner: SeatAssigner,
}

impl SeatingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }

    pub fn get_roster(&self, roster_id: &str) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.id == roster_id)
    }

    /// 从文件添加名单
    pub fn add_roster_file<P: AsRef<Path>>(&mut self, path: P) -> ApiResult<&Roster> {
        let imported = self.importer.import_file(path)?;
        Ok(self.push_roster(imported))
    }

    /// 从已读取文本添加名单（0 名学生也会加入，预览显示为空表）
    pub fn add_roster_text(&mut self, file_name: &str, raw_text: &str) -> &Roster {
        let imported = self.importer.import_text(file_name, raw_text);
        self.push_roster(imported)
    }

    fn push_roster(&mut self, imported: ImportedRoster) -> &Roster {
        let roster = Roster {
            id: Uuid::new_v4().to_string(),
            label: imported.label,
            students: imported.students,
            color_seed: self.rosters.len(),
        };
        info!(
            roster_id = %roster.id,
            label = %roster.label,
            students = roster.students.len(),
            "名单已加入会话"
        );
        self.rosters.push(roster);
        &self.rosters[self.rosters.len() - 1]
    }

    /// 删除名单；之后的名单序号前移（颜色随之变化）
    pub fn remove_roster(&mut self, roster_id: &str) -> ApiResult<Roster> {
        let idx = self
            .rosters
            .iter()
            .position(|r| r.id == roster_id)
            .ok_or_else(|| ApiError::NotFound(format!("名单(id={})不存在", roster_id)))?;

        let removed = self.rosters.remove(idx);
        for (ordinal, roster) in self.rosters.iter_mut().enumerate().skip(idx) {
            roster.color_seed = ordinal;
        }

        info!(roster_id = %removed.id, label = %removed.label, "名单已移出会话");
        Ok(removed)
    }

    /// 计算全部名单的座位分配
    pub fn assign_all(&self, config: &GridConfig) -> Vec<RosterAssignment> {
        let mut rng = rand::thread_rng();
        self.assign_all_with_rng(config, &mut rng)
    }

    /// 计算全部名单的座位分配（注入随机源）
    pub fn assign_all_with_rng<R: Rng + ?Sized>(
        &self,
        config: &GridConfig,
        rng: &mut R,
    ) -> Vec<RosterAssignment> {
        self.rosters
            .iter()
            .map(|roster| RosterAssignment {
                roster_id: roster.id.clone(),
                label: roster.label.clone(),
                color: color_for(config.theme, roster.color_seed).to_string(),
                assignment: self
                    .assigner
                    .assign_with_rng(&roster.students, config, &mut *rng),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ThemeId;

    #[test]
    fn test_add_assigns_ordinals() {
        let mut session = SeatingSession::new();
        session.add_roster_text("a.csv", "Name\nAda Lovelace");
        session.add_roster_text("b.csv", "Name\nAlan Turing");

        let seeds: Vec<usize> = session.rosters().iter().map(|r| r.color_seed).collect();
        assert_eq!(seeds, vec![0, 1]);
        assert_eq!(session.rosters()[1].label, "b");
    }

    #[test]
    fn test_remove_shifts_later_ordinals() {
        let mut session = SeatingSession::new();
        let first_id = session.add_roster_text("a.csv", "x").id.clone();
        session.add_roster_text("b.csv", "y");
        session.add_roster_text("c.csv", "z");

        let removed = session.remove_roster(&first_id).unwrap();
        assert_eq!(removed.label, "a");

        let seeds: Vec<(String, usize)> = session
            .rosters()
            .iter()
            .map(|r| (r.label.clone(), r.color_seed))
            .collect();
        assert_eq!(seeds, vec![("b".to_string(), 0), ("c".to_string(), 1)]);

        let colors: Vec<String> = session
            .assign_all(&GridConfig::default())
            .into_iter()
            .map(|a| a.color)
            .collect();
        assert_eq!(colors[0], color_for(ThemeId::Pastel, 0));
    }

    #[test]
    fn test_remove_unknown_roster() {
        let mut session = SeatingSession::new();
        assert!(matches!(
            session.remove_roster("missing"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_empty_parse_still_added() {
        let mut session = SeatingSession::new();
        let roster = session.add_roster_text("blank.csv", "\n\n");
        assert_eq!(roster.student_count(), 0);
        assert_eq!(session.rosters().len(), 1);
    }
}
