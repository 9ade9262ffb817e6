// ==========================================
// 服装 FOB 成本核算 - 买家利润分析领域模型
// ==========================================

use crate::domain::cost::{standard_cost_lines, CostBreakdownEntry, CostLineItem};
use crate::domain::types::{
    CostCategory, CostDriver, CostStatus, Currency, Incoterm, MarginHealth, OrderEfficiency,
    OrderSizeCategory,
};
use serde::{Deserialize, Serialize};

// ==========================================
// MarginInput - 利润分析输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginInput {
    pub buyer_target_fob: f64,
    #[serde(default)]
    pub quoted_fob: Option<f64>,
    pub order_quantity: u64,
    #[serde(default)]
    pub target_profit_percent: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub incoterm: Incoterm,
    #[serde(default = "standard_cost_lines")]
    pub cost_lines: Vec<CostLineItem>,
}

impl MarginInput {
    /// 以八个标准类目 (金额为 0) 初始化
    pub fn new(buyer_target_fob: f64, order_quantity: u64, target_profit_percent: f64) -> Self {
        Self {
            buyer_target_fob,
            quoted_fob: None,
            order_quantity,
            target_profit_percent,
            currency: Currency::default(),
            incoterm: Incoterm::default(),
            cost_lines: standard_cost_lines(),
        }
    }

    pub fn with_quoted_fob(mut self, quoted_fob: f64) -> Self {
        self.quoted_fob = Some(quoted_fob);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// 设置类目金额; 类目不存在时追加
    pub fn with_cost(mut self, category: CostCategory, amount: f64) -> Self {
        match self.cost_lines.iter_mut().find(|l| l.category == category) {
            Some(line) => line.amount = amount,
            None => self.cost_lines.push(CostLineItem::new(category, amount)),
        }
        self
    }

    /// 切换类目启停
    pub fn with_enabled(mut self, category: CostCategory, enabled: bool) -> Self {
        for line in self.cost_lines.iter_mut().filter(|l| l.category == category) {
            line.enabled = enabled;
        }
        self
    }
}

// ==========================================
// MarginInputSummary - 输入回显
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginInputSummary {
    pub buyer_target_fob: f64,
    pub quoted_fob: Option<f64>,
    pub order_quantity: u64,
    pub target_profit_percent: f64,
    pub currency: Currency,
    pub incoterm: Incoterm,
}

// ==========================================
// CostContributor / FlaggedCost
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostContributor {
    pub category: CostCategory,
    pub label: String,
    pub amount: f64,
    pub percent_of_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedCost {
    pub category: CostCategory,
    pub label: String,
    pub amount: f64,
    pub percent_of_target: f64,
    pub status: CostStatus,
    pub warning: String,
}

// ==========================================
// MarginAnalysis - 利润分析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginAnalysis {
    pub inputs: MarginInputSummary,

    // ===== 成本结构 =====
    pub total_cost: f64,
    pub cost_breakdown: Vec<CostBreakdownEntry>,
    pub top_cost_contributors: Vec<CostContributor>,
    pub cost_driver: CostDriver,
    pub flagged_costs: Vec<FlaggedCost>,

    // ===== 利润 =====
    pub gross_margin: f64,
    pub margin_percent: f64,
    pub margin_health: MarginHealth,
    pub break_even_fob: f64,
    pub target_fob_with_profit: f64,
    pub target_variance: f64,
    pub is_viable: bool,

    // ===== 价差 =====
    pub price_gap: f64,
    pub price_gap_percent: f64,

    // ===== 订单 =====
    pub order_size_category: OrderSizeCategory,
    pub order_efficiency: OrderEfficiency,
    pub total_order_value: f64,
    pub total_cost_value: f64,
    pub total_profit: f64,
}

impl MarginAnalysis {
    /// 指定状态的预警项数量
    pub fn flag_count(&self, status: CostStatus) -> usize {
        self.flagged_costs.iter().filter(|c| c.status == status).count()
    }

    pub fn breakdown_for(&self, category: CostCategory) -> Option<&CostBreakdownEntry> {
        self.cost_breakdown.iter().find(|e| e.category == category)
    }

    /// 由明细还原成本项 (金额未舍入, 顺序与输入一致)
    pub fn cost_lines(&self) -> Vec<CostLineItem> {
        self.cost_breakdown
            .iter()
            .map(|e| CostLineItem {
                category: e.category,
                label: e.label.clone(),
                amount: e.amount,
                enabled: e.enabled,
            })
            .collect()
    }
}
