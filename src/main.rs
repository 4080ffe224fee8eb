// ==========================================
// 座位表生成器 - 命令行入口
// ==========================================
// 读取名单文件 → 组装网格配置 → 预览 / 导出 / 输出生成载荷
// ==========================================

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seating_chart::api::{
    build_payload_with_rng, render_text, write_csv, PayloadScriptGenerator, ScriptGenerator,
    SeatingSession,
};
use seating_chart::config::{parse_overflow, parse_skip_seats, ConfigManager, GridBounds};
use seating_chart::domain::{FillDirection, GridConfig, ThemeId};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seating-chart", version, about = "CSV 名单 → 座位表")]
struct Cli {
    /// 名单文件（.csv / .txt），可多个
    #[arg(required = true)]
    rosters: Vec<PathBuf>,

    /// JSON 网格配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<u32>,

    #[arg(long)]
    columns: Option<u32>,

    /// forward | backward
    #[arg(long)]
    direction: Option<FillDirection>,

    /// 跳过的座位号，如 "3,7,12"
    #[arg(long)]
    skip: Option<String>,

    #[arg(long)]
    randomize: bool,

    /// 固定随机种子（可复现的打乱结果）
    #[arg(long)]
    seed: Option<u64>,

    /// new-page | waiting-list
    #[arg(long)]
    overflow: Option<String>,

    #[arg(long)]
    theme: Option<String>,

    #[arg(long)]
    landscape: bool,

    /// 目标文档 ID 或链接
    #[arg(long)]
    doc_id: Option<String>,

    /// 行数上限
    #[arg(long, default_value_t = 8)]
    max_rows: u32,

    /// 列数上限
    #[arg(long, default_value_t = 6)]
    max_columns: u32,

    /// 输出生成载荷而不是预览
    #[arg(long)]
    payload: bool,

    /// 导出分配结果到 CSV 文件
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// JSON 格式日志
    #[arg(long)]
    json_log: bool,
}

impl Cli {
    fn grid_config(&self, manager: &ConfigManager) -> anyhow::Result<GridConfig> {
        let base = match &self.config {
            Some(path) => manager
                .load_from_file(path)
                .with_context(|| format!("无法加载配置 {}", path.display()))?,
            None => GridConfig::default(),
        };
        let mut config = manager.apply_env_overrides(base)?;

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(direction) = self.direction {
            config.fill_direction = direction;
        }
        if let Some(skip) = &self.skip {
            config.skip_seats = parse_skip_seats(skip);
        }
        if let Some(overflow) = &self.overflow {
            config.overflow = parse_overflow(overflow);
        }
        if let Some(theme) = &self.theme {
            config.theme = ThemeId::parse_lenient(theme);
        }
        if let Some(doc_id) = &self.doc_id {
            config.target_doc_id = doc_id.clone();
        }
        config.randomize |= self.randomize;
        config.landscape |= self.landscape;

        Ok(manager.clamp_to_bounds(config))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        seating_chart::logging::init_json();
    } else {
        seating_chart::logging::init();
    }

    tracing::info!("{} v{}", seating_chart::APP_NAME, seating_chart::VERSION);

    let manager = ConfigManager::new(GridBounds {
        max_rows: cli.max_rows,
        max_columns: cli.max_columns,
    });
    let config = cli.grid_config(&manager)?;

    let mut session = SeatingSession::new();
    for path in &cli.rosters {
        // 单个文件失败不影响其余文件
        if let Err(e) = session.add_roster_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "名单导入失败，已跳过");
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.payload {
        let payload = build_payload_with_rng(&session, &config, &mut rng)?;
        let script = PayloadScriptGenerator.generate(&payload).await?;
        println!("{}", script);
        return Ok(());
    }

    let assignments = session.assign_all_with_rng(&config, &mut rng);
    for item in &assignments {
        println!("{}", render_text(item, config.overflow));
    }

    if let Some(path) = &cli.export_csv {
        let file =
            File::create(path).with_context(|| format!("无法创建 {}", path.display()))?;
        write_csv(file, &assignments)?;
        tracing::info!(path = %path.display(), "分配结果已导出");
    }

    Ok(())
}
