// ==========================================
// 服装 FOB 成本核算 - 引擎层
// ==========================================
// 职责: 用料、FOB 构成、利润分析、可行性评分、情景模拟
// 红线: 引擎为纯计算, 不做 I/O, 不读时钟
// ==========================================

pub mod consumption;
pub mod feasibility;
pub mod fob;
pub mod margin;
pub mod numeric;
pub mod scenario;

// 重导出核心引擎
pub use consumption::{ConsumptionEngine, DENIM_ACCESSORY_ALLOWANCE_YARDS};
pub use feasibility::{FeasibilityEngine, FeasibilityInputs};
pub use fob::FobImpactEngine;
pub use margin::MarginEngine;
pub use scenario::ScenarioEngine;
