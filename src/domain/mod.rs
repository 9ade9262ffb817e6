// ==========================================
// 服装 FOB 成本核算 - 领域模型层
// ==========================================
// 职责: 定义输入规格、计算结果与枚举类型
// 红线: 不含计算逻辑, 不含 I/O
// ==========================================

pub mod consumption;
pub mod cost;
pub mod feasibility;
pub mod fob;
pub mod margin;
pub mod pattern;
pub mod scenario;
pub mod types;

// 重导出核心类型
pub use consumption::{ConsumptionResult, FamilyDetail};
pub use cost::{standard_cost_lines, CostBand, CostBreakdownEntry, CostLineItem};
pub use feasibility::{FeasibilityScore, ScoreFactor};
pub use fob::FobImpact;
pub use margin::{CostContributor, FlaggedCost, MarginAnalysis, MarginInput, MarginInputSummary};
pub use pattern::{FabricSpec, PatternInput, PatternSpec};
pub use scenario::{AdjustedCost, ScenarioAdjustments, ScenarioResult};
pub use types::{
    ConsumptionUnit, CostCategory, CostDriver, CostStatus, Currency, FeasibilityStatus,
    GarmentType, Incoterm, MarginHealth, OrderEfficiency, OrderSizeCategory, Recommendation,
    ScenarioRiskLevel,
};
