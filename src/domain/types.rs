// ==========================================
// 座位表生成器 - 领域类型定义
// ==========================================
// 填充方向 / 溢出策略 / 配色主题
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 填充方向 (Fill Direction)
// ==========================================
// 只影响分配顺序，不影响座位编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillDirection {
    #[default]
    ForwardFromTopLeft, // 左上 → 正向
    BackwardFromBottomRight, // 右下 ← 反向
}

impl fmt::Display for FillDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillDirection::ForwardFromTopLeft => write!(f, "FORWARD_FROM_TOP_LEFT"),
            FillDirection::BackwardFromBottomRight => write!(f, "BACKWARD_FROM_BOTTOM_RIGHT"),
        }
    }
}

impl FromStr for FillDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "forward" | "forwardfromtopleft" | "topleft" => Ok(FillDirection::ForwardFromTopLeft),
            "backward" | "backwardfrombottomright" | "bottomright" => {
                Ok(FillDirection::BackwardFromBottomRight)
            }
            other => Err(format!("未知填充方向: {}", other)),
        }
    }
}

// ==========================================
// 溢出策略 (Overflow Policy)
// ==========================================
// 由下游消费者解释，引擎只负责给出溢出名单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverflowPolicy {
    #[default]
    NewPage, // 另起一页新网格
    WaitingList, // 平铺为候补名单
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::NewPage => write!(f, "NEW_PAGE"),
            OverflowPolicy::WaitingList => write!(f, "WAITING_LIST"),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "newpage" | "page" => Ok(OverflowPolicy::NewPage),
            "waitinglist" | "waitlist" | "list" => Ok(OverflowPolicy::WaitingList),
            other => Err(format!("未知溢出策略: {}", other)),
        }
    }
}

// ==========================================
// 配色主题 (Theme)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeId {
    #[default]
    Pastel,
    Bold,
    Monochrome,
    Ocean,
}

impl ThemeId {
    /// 宽松解析：大小写不敏感，未知主题回退为 Pastel
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeId::Pastel => write!(f, "PASTEL"),
            ThemeId::Bold => write!(f, "BOLD"),
            ThemeId::Monochrome => write!(f, "MONOCHROME"),
            ThemeId::Ocean => write!(f, "OCEAN"),
        }
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pastel" => Ok(ThemeId::Pastel),
            "bold" => Ok(ThemeId::Bold),
            "monochrome" | "mono" => Ok(ThemeId::Monochrome),
            "ocean" => Ok(ThemeId::Ocean),
            other => Err(format!("未知主题: {}", other)),
        }
    }
}
