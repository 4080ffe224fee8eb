// ==========================================
// 座位表生成器 - 主题配色选择
// ==========================================
// 规则: palette[roster_ordinal mod palette.len()]
// 序号是名单在当前已加载名单中的位置，不是名称哈希
// ==========================================

use crate::domain::types::ThemeId;

const PASTEL: &[&str] = &[
    "#fee2e2", // Red-100
    "#ffedd5", // Orange-100
    "#fef3c7", // Amber-100
    "#dcfce7", // Green-100
    "#ccfbf1", // Teal-100
    "#dbeafe", // Blue-100
    "#e0e7ff", // Indigo-100
    "#f3e8ff", // Purple-100
    "#fae8ff", // Fuchsia-100
    "#ffe4e6", // Rose-100
];

const BOLD: &[&str] = &[
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#8b5cf6", "#ec4899",
];

const MONOCHROME: &[&str] = &["#f8fafc", "#e2e8f0", "#cbd5e1", "#94a3b8"];

const OCEAN: &[&str] = &["#e0f2fe", "#bae6fd", "#cffafe", "#a5f3fc", "#ccfbf1", "#dbeafe"];

/// 主题调色板
pub fn palette(theme: ThemeId) -> &'static [&'static str] {
    match theme {
        ThemeId::Pastel => PASTEL,
        ThemeId::Bold => BOLD,
        ThemeId::Monochrome => MONOCHROME,
        ThemeId::Ocean => OCEAN,
    }
}

/// 名单颜色
pub fn color_for(theme: ThemeId, roster_ordinal: usize) -> &'static str {
    let colors = palette(theme);
    colors[roster_ordinal % colors.len()]
}
