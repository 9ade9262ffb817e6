// ==========================================
// 服装 FOB 成本核算 - 用料结果领域模型
// ==========================================
// 每次计算新建, 不持有身份, 字段自描述供导出方直接渲染
// ==========================================

use crate::domain::pattern::PatternSpec;
use crate::domain::types::{ConsumptionUnit, GarmentType};
use serde::{Deserialize, Serialize};

// ==========================================
// FamilyDetail - 款式族专属计算明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum FamilyDetail {
    Knit {
        pattern_area_sq_m: f64,
        marker_length_meters: f64,
    },
    Woven {
        pattern_repeat_allowance: f64, // inch
        patterns_across_fabric: u32,
        marker_length_yards: f64,
    },
    Denim {
        accessory_allowance_yards: f64,
        patterns_across_fabric: u32,
        marker_length_yards: f64,
        weight_oz_per_piece: f64,
        weight_kg_per_piece: f64,
        weight_kg_per_dozen: f64,
        total_fabric_kg: f64,
    },
}

// ==========================================
// ConsumptionResult - 用料计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionResult {
    pub garment_type: GarmentType,
    pub unit: ConsumptionUnit,

    // ===== 核心用料 (4 位小数) =====
    pub theoretical_consumption_per_piece: f64,
    pub actual_consumption_per_piece: f64,
    pub consumption_per_dozen: f64,

    // ===== 纸样 (2 位小数) =====
    pub adjusted_pattern_length: f64,
    pub adjusted_pattern_width: f64,

    // ===== 订单需求 =====
    pub order_quantity: u64,
    pub total_fabric_required: f64, // 原生单位
    pub total_fabric_meters: f64,

    // ===== 成本 =====
    pub fabric_unit_price: f64,
    pub fabric_cost_per_piece: f64,
    pub fabric_cost_per_dozen: f64,
    pub total_fabric_cost: f64,

    // ===== 利用率 =====
    pub marker_efficiency: f64,
    pub fabric_utilization: f64,
    pub waste_percentage: f64,
    pub waste_per_piece: f64,
    pub total_waste: f64,

    pub detail: FamilyDetail,

    // 原样回显输入
    pub inputs: PatternSpec,
}
