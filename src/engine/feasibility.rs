// ==========================================
// 服装 FOB 成本核算 - 商业可行性评分引擎
// ==========================================
// 规则: 基准 100 分, 按利润率/成本预警/订单规模/价差逐项加减分,
//       最终截断到 [0, 100]
// 分级: >= 75 Green/Accept, >= 50 Amber/Renegotiate, 其余 Red/Reject
// ==========================================

use crate::config::benchmarks::{Benchmarks, MarginBands, OrderSizeBands};
use crate::domain::feasibility::{FeasibilityScore, ScoreFactor};
use crate::domain::margin::MarginAnalysis;
use crate::domain::types::{CostStatus, FeasibilityStatus};
use crate::engine::margin::{margin_percent, price_gap_percent, sum_enabled};
use tracing::instrument;

pub const BASE_SCORE: i32 = 100;
pub const GREEN_THRESHOLD: i32 = 75;
pub const AMBER_THRESHOLD: i32 = 50;

// ===== 利润率 =====
const MARGIN_BELOW_MINIMUM: i32 = -40;
const MARGIN_LOW: i32 = -25;
const MARGIN_BELOW_HEALTHY: i32 = -10;
const MARGIN_STRONG: i32 = 5;

// ===== 成本预警 (每项) =====
const CRITICAL_FLAG_PENALTY: i32 = -12;
const HIGH_FLAG_PENALTY: i32 = -5;

// ===== 订单规模 =====
const VERY_SMALL_ORDER: i32 = -15;
const SMALL_ORDER: i32 = -8;
const LARGE_ORDER_BONUS: i32 = 5;

// ===== 价差 =====
const GAP_SIGNIFICANT_PERCENT: f64 = -10.0;
const GAP_BELOW_PERCENT: f64 = -5.0;
const GAP_FAVORABLE_PERCENT: f64 = 5.0;
const GAP_SIGNIFICANT: i32 = -15;
const GAP_BELOW: i32 = -8;
const GAP_FAVORABLE: i32 = 5;

/// 评分引擎输入 (来自利润分析的四个指标)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityInputs {
    pub margin_percent: f64,
    pub critical_flags: usize,
    pub high_flags: usize,
    pub order_quantity: u64,
    pub price_gap_percent: f64,
}

impl FeasibilityInputs {
    /// 利润率与价差占比由明细重算, 不取分析里已舍入的 2 位小数值
    pub fn from_analysis(analysis: &MarginAnalysis) -> Self {
        let target = analysis.inputs.buyer_target_fob;
        let quoted = analysis.inputs.quoted_fob.unwrap_or(0.0);
        let total_cost = sum_enabled(&analysis.cost_lines());

        Self {
            margin_percent: margin_percent(target, total_cost),
            critical_flags: analysis.flag_count(CostStatus::Critical),
            high_flags: analysis.flag_count(CostStatus::High),
            order_quantity: analysis.inputs.order_quantity,
            price_gap_percent: price_gap_percent(target, quoted),
        }
    }
}

// ==========================================
// FeasibilityEngine - 可行性评分引擎
// ==========================================
pub struct FeasibilityEngine {
    margin: MarginBands,
    order_size: OrderSizeBands,
}

impl Default for FeasibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FeasibilityEngine {
    pub fn new() -> Self {
        Self::with_benchmarks(&Benchmarks::default())
    }

    pub fn with_benchmarks(benchmarks: &Benchmarks) -> Self {
        Self {
            margin: benchmarks.margin,
            order_size: benchmarks.order_size,
        }
    }

    #[instrument(skip(self, analysis))]
    pub fn score(&self, analysis: &MarginAnalysis) -> FeasibilityScore {
        self.score_inputs(&FeasibilityInputs::from_analysis(analysis))
    }

    /// 按固定顺序累计因子: 利润率 -> 严重预警 -> 偏高预警 -> 订单规模 -> 价差
    pub fn score_inputs(&self, inputs: &FeasibilityInputs) -> FeasibilityScore {
        let mut factors = Vec::new();
        let mut push = |factor: String, impact: i32| factors.push(ScoreFactor { factor, impact });

        // ===== 利润率 =====
        let margin = inputs.margin_percent;
        if margin < self.margin.minimum {
            push("Margin below minimum viable".to_string(), MARGIN_BELOW_MINIMUM);
        } else if margin < self.margin.low {
            push("Low margin - high commercial risk".to_string(), MARGIN_LOW);
        } else if margin < self.margin.healthy {
            push("Margin below healthy threshold".to_string(), MARGIN_BELOW_HEALTHY);
        } else if margin >= self.margin.strong {
            push("Strong margin position".to_string(), MARGIN_STRONG);
        }

        // ===== 成本预警 =====
        if inputs.critical_flags > 0 {
            push(
                format!("{} critical cost flag(s)", inputs.critical_flags),
                CRITICAL_FLAG_PENALTY * count_as_i32(inputs.critical_flags),
            );
        }
        if inputs.high_flags > 0 {
            push(
                format!("{} high cost flag(s)", inputs.high_flags),
                HIGH_FLAG_PENALTY * count_as_i32(inputs.high_flags),
            );
        }

        // ===== 订单规模 =====
        let qty = inputs.order_quantity;
        if qty < self.order_size.small {
            push("Very small order - low efficiency".to_string(), VERY_SMALL_ORDER);
        } else if qty < self.order_size.medium {
            push("Small order size".to_string(), SMALL_ORDER);
        } else if qty >= self.order_size.large {
            push("Large order efficiency bonus".to_string(), LARGE_ORDER_BONUS);
        }

        // ===== 价差 =====
        let gap = inputs.price_gap_percent;
        if gap < GAP_SIGNIFICANT_PERCENT {
            push("Buyer target significantly below quote".to_string(), GAP_SIGNIFICANT);
        } else if gap < GAP_BELOW_PERCENT {
            push("Buyer target below quote".to_string(), GAP_BELOW);
        } else if gap > GAP_FAVORABLE_PERCENT {
            push("Favorable price gap".to_string(), GAP_FAVORABLE);
        }

        let raw: i32 = BASE_SCORE + factors.iter().map(|f| f.impact).sum::<i32>();
        let score = raw.clamp(0, 100);
        let status = classify_score(score);

        tracing::debug!(raw, score, status = %status, factors = factors.len(), "可行性评分完成");

        FeasibilityScore {
            score,
            status,
            recommendation: status.recommendation(),
            justification: justification(status).to_string(),
            factors,
        }
    }
}

pub fn classify_score(score: i32) -> FeasibilityStatus {
    if score >= GREEN_THRESHOLD {
        FeasibilityStatus::Green
    } else if score >= AMBER_THRESHOLD {
        FeasibilityStatus::Amber
    } else {
        FeasibilityStatus::Red
    }
}

fn justification(status: FeasibilityStatus) -> &'static str {
    match status {
        FeasibilityStatus::Green => "Product shows healthy commercial viability with acceptable margins and manageable cost structure.",
        FeasibilityStatus::Amber => "Marginal viability - requires cost optimization or price negotiation to achieve target returns.",
        FeasibilityStatus::Red => "Commercially unviable at current pricing. Significant margin erosion or cost risks identified.",
    }
}

// 预警项最多 8 个, 饱和转换足够
fn count_as_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX / 100)
}
