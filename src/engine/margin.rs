// ==========================================
// 服装 FOB 成本核算 - 买家利润分析引擎
// ==========================================
// 职责: 总成本汇总、毛利/利润率、盈亏平衡、价差、
//       成本结构占比分档、主要成本项、成本驱动类型、订单规模
// 输入: MarginInput (有序成本项列表)
// 输出: MarginAnalysis
// 红线: 停用项不计入总成本, 占比报 0 且状态为 normal
// ==========================================

use crate::config::benchmarks::Benchmarks;
use crate::domain::cost::{CostBreakdownEntry, CostLineItem};
use crate::domain::margin::{
    CostContributor, FlaggedCost, MarginAnalysis, MarginInput, MarginInputSummary,
};
use crate::domain::types::{CostCategory, CostDriver, CostStatus};
use crate::engine::numeric::{pct_factor, percent_of, round2};
use tracing::instrument;

/// 主要成本项数量
pub const TOP_CONTRIBUTOR_COUNT: usize = 3;

// 成本驱动判定阈值 (% of buyer target)
const FABRIC_DRIVEN_PERCENT: f64 = 50.0;
const LABOR_DRIVEN_PERCENT: f64 = 28.0;
const PROCESSING_DRIVEN_PERCENT: f64 = 12.0;

// ==========================================
// 共用公式 (情景模拟复用, 保证结果一致)
// ==========================================

/// 启用项金额合计 (按列表顺序一次折叠)
pub fn sum_enabled(lines: &[CostLineItem]) -> f64 {
    lines.iter().map(CostLineItem::effective_amount).sum()
}

/// 利润率 % = (目标价 - 成本) / 目标价 x 100, 目标价 <= 0 时为 0
pub fn margin_percent(buyer_target: f64, total_cost: f64) -> f64 {
    percent_of(buyer_target - total_cost, buyer_target)
}

/// 价差占比 % = (目标价 - 报价) / 报价 x 100, 报价 <= 0 时为 0
pub fn price_gap_percent(buyer_target: f64, quoted: f64) -> f64 {
    percent_of(buyer_target - quoted, quoted)
}

/// 含目标利润的 FOB
pub fn fob_with_profit(total_cost: f64, profit_percent: f64) -> f64 {
    total_cost * pct_factor(profit_percent)
}

// ==========================================
// MarginEngine - 利润分析引擎
// ==========================================
pub struct MarginEngine {
    benchmarks: Benchmarks,
}

impl Default for MarginEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MarginEngine {
    pub fn new() -> Self {
        Self::with_benchmarks(Benchmarks::default())
    }

    pub fn with_benchmarks(benchmarks: Benchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    /// 执行利润分析
    ///
    /// # 参数
    /// - input: 买家目标价、报价、数量、目标利润率、成本项
    ///
    /// # 返回
    /// 金额与占比均保留 2 位小数; 状态分档使用未舍入的占比
    #[instrument(skip(self, input), fields(target = input.buyer_target_fob, qty = input.order_quantity))]
    pub fn analyze(&self, input: &MarginInput) -> MarginAnalysis {
        let target = input.buyer_target_fob;
        let quoted = input.quoted_fob.unwrap_or(0.0);
        let qty = input.order_quantity as f64;

        let total_cost = sum_enabled(&input.cost_lines);

        // ===== 利润 =====
        let gross_margin = target - total_cost;
        let margin_pct = margin_percent(target, total_cost);
        let target_fob = fob_with_profit(total_cost, input.target_profit_percent);
        let target_variance = target - target_fob;

        // ===== 价差 (未提供报价按 0 处理, 占比报 0) =====
        let price_gap = target - quoted;
        let gap_pct = price_gap_percent(target, quoted);

        // ===== 成本结构 =====
        let cost_breakdown = self.build_breakdown(&input.cost_lines, target);
        let top_cost_contributors = top_contributors(&cost_breakdown);
        let cost_driver = classify_driver(&top_cost_contributors);
        let flagged_costs = flag_costs(&cost_breakdown);

        let order_size_category = self.benchmarks.order_size.categorize(input.order_quantity);

        let analysis = MarginAnalysis {
            inputs: MarginInputSummary {
                buyer_target_fob: target,
                quoted_fob: input.quoted_fob,
                order_quantity: input.order_quantity,
                target_profit_percent: input.target_profit_percent,
                currency: input.currency,
                incoterm: input.incoterm,
            },
            total_cost: round2(total_cost),
            cost_breakdown,
            top_cost_contributors,
            cost_driver,
            flagged_costs,
            gross_margin: round2(gross_margin),
            margin_percent: round2(margin_pct),
            margin_health: self.benchmarks.margin.health(margin_pct),
            break_even_fob: round2(total_cost),
            target_fob_with_profit: round2(target_fob),
            target_variance: round2(target_variance),
            is_viable: target_variance >= 0.0,
            price_gap: round2(price_gap),
            price_gap_percent: round2(gap_pct),
            order_size_category,
            order_efficiency: order_size_category.efficiency(),
            total_order_value: round2(target * qty),
            total_cost_value: round2(total_cost * qty),
            total_profit: round2(gross_margin * qty),
        };

        tracing::debug!(
            total_cost = analysis.total_cost,
            margin_percent = analysis.margin_percent,
            driver = %analysis.cost_driver,
            flagged = analysis.flagged_costs.len(),
            "利润分析完成"
        );

        analysis
    }

    /// 逐项占比与状态分档
    fn build_breakdown(&self, lines: &[CostLineItem], target: f64) -> Vec<CostBreakdownEntry> {
        lines
            .iter()
            .map(|line| {
                let band = self.benchmarks.cost_band(line.category);
                let (percent, status) = if line.enabled {
                    let raw = percent_of(line.effective_amount(), target);
                    (round2(raw), band.classify(raw))
                } else {
                    (0.0, CostStatus::Normal)
                };

                // 金额原样保留, 情景模拟据此重建成本项
                let amount = if line.amount.is_finite() { line.amount } else { 0.0 };

                CostBreakdownEntry {
                    category: line.category,
                    label: line.label.clone(),
                    amount,
                    enabled: line.enabled,
                    percent_of_target: percent,
                    status,
                    band,
                }
            })
            .collect()
    }
}

/// 启用且金额 > 0 的前三项, 按占比降序 (同占比保持列表顺序)
fn top_contributors(breakdown: &[CostBreakdownEntry]) -> Vec<CostContributor> {
    let mut ranked: Vec<&CostBreakdownEntry> = breakdown
        .iter()
        .filter(|e| e.enabled && e.amount > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.percent_of_target.total_cmp(&a.percent_of_target));

    ranked
        .into_iter()
        .take(TOP_CONTRIBUTOR_COUNT)
        .map(|e| CostContributor {
            category: e.category,
            label: e.label.clone(),
            amount: e.amount,
            percent_of_target: e.percent_of_target,
        })
        .collect()
}

/// 由占比最高的成本项判定驱动类型
fn classify_driver(top: &[CostContributor]) -> CostDriver {
    let Some(first) = top.first() else {
        return CostDriver::Balanced;
    };

    match first.category {
        CostCategory::Fabric if first.percent_of_target > FABRIC_DRIVEN_PERCENT => {
            CostDriver::FabricDriven
        }
        CostCategory::Cm if first.percent_of_target > LABOR_DRIVEN_PERCENT => {
            CostDriver::LaborDriven
        }
        CostCategory::Washing if first.percent_of_target > PROCESSING_DRIVEN_PERCENT => {
            CostDriver::ProcessingDriven
        }
        _ => CostDriver::Balanced,
    }
}

fn flag_costs(breakdown: &[CostBreakdownEntry]) -> Vec<FlaggedCost> {
    breakdown
        .iter()
        .filter(|e| e.status.is_flagged())
        .map(|e| {
            let warning = if e.status == CostStatus::Critical {
                format!("{} is critically high at {}% of FOB", e.label, e.percent_of_target)
            } else {
                format!("{} exceeds typical range at {}% of FOB", e.label, e.percent_of_target)
            };
            FlaggedCost {
                category: e.category,
                label: e.label.clone(),
                amount: e.amount,
                percent_of_target: e.percent_of_target,
                status: e.status,
                warning,
            }
        })
        .collect()
}
