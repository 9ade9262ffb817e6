// ==========================================
// 服装 FOB 成本核算 - 命令行入口
// ==========================================
// 输入: JSON 文件 / 命令行参数
// 输出: stdout JSON 信封 { app_version, generated_at, data }
// 日志: stderr
// ==========================================

use anyhow::Context;
use apparel_fob::config::ConfigManager;
use apparel_fob::domain::{MarginInput, PatternInput, ScenarioAdjustments};
use apparel_fob::engine::{
    ConsumptionEngine, FeasibilityEngine, FobImpactEngine, MarginEngine, ScenarioEngine,
};
use apparel_fob::{logging, Benchmarks, FeasibilityScore, MarginAnalysis};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "apparel-fob", version, about = "Apparel fabric consumption, FOB and buyer margin analysis")]
struct Cli {
    /// Benchmark override file (JSON); falls back to $APPAREL_FOB_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Structured JSON logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fabric consumption for one pattern (knit / woven / denim)
    Consumption {
        /// Pattern input file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// FOB build-up from fabric cost, other costs and profit margin
    Fob {
        #[arg(long)]
        fabric_cost: f64,

        #[arg(long, default_value_t = 0.0)]
        other_costs: f64,

        /// Profit margin (%)
        #[arg(long, default_value_t = 0.0)]
        profit_margin: f64,
    },

    /// Buyer margin analysis with feasibility score
    Margin {
        /// Margin input file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// What-if simulation on top of a margin analysis
    Scenario {
        /// Margin input file
        #[arg(short, long)]
        input: PathBuf,

        /// Fabric price change (%), -30..=30
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        fabric_price: f64,

        /// Trims cost change (%), -30..=30
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        trims: f64,

        /// CM cost change (%), -30..=30
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        cm: f64,

        /// Wastage change (%), -30..=30
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        wastage: f64,

        /// Order quantity change (%), -50..=100
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        quantity: f64,
    },

    /// Show the effective benchmark tables
    Benchmarks,
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    app_version: &'static str,
    generated_at: DateTime<Utc>,
    data: T,
}

#[derive(Serialize)]
struct MarginReport {
    analysis: MarginAnalysis,
    feasibility: FeasibilityScore,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!("执行失败: {:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigManager::load(cli.config.as_deref()).context("无法加载基准配置")?;
    let benchmarks = config.into_benchmarks();
    let compact = cli.compact;

    match cli.command {
        Command::Consumption { input } => {
            let pattern: PatternInput = read_json(&input)?;
            let result = ConsumptionEngine::with_benchmarks(benchmarks)
                .calculate_from_input(&pattern)
                .context("用料计算失败")?;
            emit(result, compact)
        }
        Command::Fob {
            fabric_cost,
            other_costs,
            profit_margin,
        } => emit(
            FobImpactEngine::new().calculate(fabric_cost, other_costs, profit_margin),
            compact,
        ),
        Command::Margin { input } => {
            let margin_input: MarginInput = read_json(&input)?;
            emit(margin_report(&benchmarks, &margin_input), compact)
        }
        Command::Scenario {
            input,
            fabric_price,
            trims,
            cm,
            wastage,
            quantity,
        } => {
            let margin_input: MarginInput = read_json(&input)?;
            let analysis = MarginEngine::with_benchmarks(benchmarks.clone()).analyze(&margin_input);
            let adjustments = ScenarioAdjustments {
                fabric_price_percent: fabric_price,
                trims_cost_percent: trims,
                cm_cost_percent: cm,
                wastage_percent: wastage,
                order_quantity_percent: quantity,
            };
            let result = ScenarioEngine::with_benchmarks(&benchmarks)
                .simulate(&analysis, &adjustments)
                .context("情景模拟失败")?;
            emit(result, compact)
        }
        Command::Benchmarks => emit(benchmarks, compact),
    }
}

fn margin_report(benchmarks: &Benchmarks, input: &MarginInput) -> MarginReport {
    let analysis = MarginEngine::with_benchmarks(benchmarks.clone()).analyze(input);
    let feasibility = FeasibilityEngine::with_benchmarks(benchmarks).score(&analysis);
    MarginReport {
        analysis,
        feasibility,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("无法读取输入文件: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("输入文件格式错误: {}", path.display()))
}

fn emit<T: Serialize>(data: T, compact: bool) -> anyhow::Result<()> {
    let envelope = Envelope {
        app_version: apparel_fob::VERSION,
        generated_at: Utc::now(),
        data,
    };
    let json = if compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{}", json);
    Ok(())
}
