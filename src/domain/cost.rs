// ==========================================
// 服装 FOB 成本核算 - 成本明细领域模型
// ==========================================
// 成本项为有序列表, 启停状态逐项独立;
// 总成本与占比均由一次折叠得出
// ==========================================

use crate::domain::types::{CostCategory, CostStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// CostLineItem - 单件成本项
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub category: CostCategory,
    pub label: String,
    pub amount: f64, // 币种单位 / 件
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl CostLineItem {
    /// 使用默认标签创建启用状态的成本项
    pub fn new(category: CostCategory, amount: f64) -> Self {
        Self {
            category,
            label: category.default_label().to_string(),
            amount,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// 参与汇总的金额 (停用项与非有限值计 0)
    pub fn effective_amount(&self) -> f64 {
        if self.enabled && self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

/// 八个标准类目的成本项, 金额全为 0
pub fn standard_cost_lines() -> Vec<CostLineItem> {
    CostCategory::ALL
        .iter()
        .map(|category| CostLineItem::new(*category, 0.0))
        .collect()
}

// ==========================================
// CostBand - 类目占比阈值 (% of buyer target)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBand {
    pub low: f64,
    pub typical: f64,
    pub high: f64,
    pub critical: f64,
}

impl CostBand {
    pub const fn new(low: f64, typical: f64, high: f64, critical: f64) -> Self {
        Self {
            low,
            typical,
            high,
            critical,
        }
    }

    /// 按占比判定状态, 命中的最高档位生效
    pub fn classify(&self, percent: f64) -> CostStatus {
        if percent >= self.critical {
            CostStatus::Critical
        } else if percent >= self.high {
            CostStatus::High
        } else if percent >= self.typical {
            CostStatus::Typical
        } else if percent >= self.low {
            CostStatus::Low
        } else {
            CostStatus::Normal
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.low <= self.typical && self.typical <= self.high && self.high <= self.critical
    }
}

// ==========================================
// CostBreakdownEntry - 成本项占比分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub category: CostCategory,
    pub label: String,
    pub amount: f64,
    pub enabled: bool,
    pub percent_of_target: f64,
    pub status: CostStatus,
    pub band: CostBand,
}
