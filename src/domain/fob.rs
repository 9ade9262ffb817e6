// ==========================================
// 服装 FOB 成本核算 - FOB 报价构成
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FobImpact {
    pub fabric_cost_per_piece: f64,
    pub fabric_cost_per_dozen: f64,
    pub other_costs_per_piece: f64,
    pub other_costs_per_dozen: f64,
    pub total_cost_per_piece: f64,
    pub total_cost_per_dozen: f64,
    pub profit_margin: f64, // %
    pub fob_per_piece: f64,
    pub fob_per_dozen: f64,
    pub fabric_percentage_of_cost: f64,
    pub fabric_percentage_of_fob: f64,
}
