// ==========================================
// 服装 FOB 成本核算 - 核心库
// ==========================================
// 系统定位: 报价决策支持 (面料用料 -> FOB 构成 -> 买家利润 -> 可行性 -> 情景)
// 技术栈: Rust 纯计算核心 + JSON 输入输出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 规格、结果与枚举
pub mod domain;

// 引擎层 - 核算规则
pub mod engine;

// 配置层 - 行业基准
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ConsumptionUnit, CostCategory, CostDriver, CostStatus, Currency, FeasibilityStatus,
    GarmentType, Incoterm, MarginHealth, OrderEfficiency, OrderSizeCategory, Recommendation,
    ScenarioRiskLevel,
};

// 领域实体
pub use domain::{
    ConsumptionResult, CostBand, CostLineItem, FabricSpec, FeasibilityScore, FobImpact,
    MarginAnalysis, MarginInput, PatternInput, PatternSpec, ScenarioAdjustments, ScenarioResult,
};

// 引擎
pub use engine::{
    ConsumptionEngine, FeasibilityEngine, FobImpactEngine, MarginEngine, ScenarioEngine,
};

// 配置
pub use config::{Benchmarks, ConfigManager};

// 错误
pub use error::{CostingError, CostingResult};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Apparel FOB Analyzer";
