// ==========================================
// 服装 FOB 成本核算 - 情景模拟领域模型
// ==========================================

use crate::domain::types::{CostCategory, OrderSizeCategory, ScenarioRiskLevel};
use serde::{Deserialize, Serialize};

/// 成本/价格/损耗调整范围 (%)
pub const COST_ADJUSTMENT_RANGE: (f64, f64) = (-30.0, 30.0);
/// 订单数量调整范围 (%)
pub const QUANTITY_ADJUSTMENT_RANGE: (f64, f64) = (-50.0, 100.0);

// ==========================================
// ScenarioAdjustments - 五项独立百分比调整
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustments {
    #[serde(default)]
    pub fabric_price_percent: f64,
    #[serde(default)]
    pub trims_cost_percent: f64,
    #[serde(default)]
    pub cm_cost_percent: f64,
    #[serde(default)]
    pub wastage_percent: f64,
    #[serde(default)]
    pub order_quantity_percent: f64,
}

impl ScenarioAdjustments {
    /// 检查调整是否在允许范围内, 返回按字段顺序的消息
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let (cost_min, cost_max) = COST_ADJUSTMENT_RANGE;
        let (qty_min, qty_max) = QUANTITY_ADJUSTMENT_RANGE;

        let cost_fields = [
            ("Fabric price", self.fabric_price_percent),
            ("Trims cost", self.trims_cost_percent),
            ("CM cost", self.cm_cost_percent),
            ("Wastage", self.wastage_percent),
        ];
        for (name, value) in cost_fields {
            if !value.is_finite() || value < cost_min || value > cost_max {
                errors.push(format!(
                    "{} adjustment must be between {}% and +{}%",
                    name, cost_min, cost_max
                ));
            }
        }

        let qty = self.order_quantity_percent;
        if !qty.is_finite() || qty < qty_min || qty > qty_max {
            errors.push(format!(
                "Order quantity adjustment must be between {}% and +{}%",
                qty_min, qty_max
            ));
        }

        errors
    }
}

// ==========================================
// AdjustedCost - 单项调整前后对比
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCost {
    pub category: CostCategory,
    pub label: String,
    pub enabled: bool,
    pub original: f64,
    pub adjusted: f64,
}

// ==========================================
// ScenarioResult - 情景模拟结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub adjustments: ScenarioAdjustments,

    // ===== 利润对比 =====
    pub original_margin_percent: f64,
    pub scenario_margin_percent: f64,
    pub margin_change: f64,
    pub risk_level: ScenarioRiskLevel,

    // ===== FOB 对比 =====
    pub original_fob: f64,
    pub scenario_fob: f64,

    // ===== 成本对比 =====
    pub original_total_cost: f64,
    pub new_total_cost: f64,
    pub cost_change: f64,
    pub cost_change_percent: f64,
    pub adjusted_costs: Vec<AdjustedCost>,

    // ===== 订单 =====
    pub original_quantity: u64,
    pub adjusted_quantity: u64,
    pub scenario_order_size_category: OrderSizeCategory,
    pub scenario_gross_margin: f64,
    pub scenario_total_profit: f64,

    pub insights: Vec<String>,
}
