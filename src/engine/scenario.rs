// ==========================================
// 服装 FOB 成本核算 - 情景模拟引擎
// ==========================================
// 职责: 在既有利润分析上叠加面料价/辅料/CM/损耗/数量调整,
//       重新计算利润率与 FOB, 给出风险等级与提示
// 红线: 不修改输入分析; 调整为 0 时必须复现原利润率与 FOB
// ==========================================

use crate::config::benchmarks::{Benchmarks, MarginBands, OrderSizeBands};
use crate::domain::cost::CostLineItem;
use crate::domain::margin::MarginAnalysis;
use crate::domain::scenario::{AdjustedCost, ScenarioAdjustments, ScenarioResult};
use crate::domain::types::{CostCategory, ScenarioRiskLevel};
use crate::engine::margin::{fob_with_profit, margin_percent, sum_enabled};
use crate::engine::numeric::{pct_factor, percent_of, round2};
use crate::error::{CostingError, CostingResult};
use tracing::instrument;

// 提示触发阈值
const MARGIN_SWING_NOTE: f64 = 5.0;
const QUANTITY_COMMITMENT_NOTE: f64 = 20.0;
const FABRIC_CUT_NOTE: f64 = -10.0;

pub struct ScenarioEngine {
    margin: MarginBands,
    order_size: OrderSizeBands,
}

impl Default for ScenarioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioEngine {
    pub fn new() -> Self {
        Self::with_benchmarks(&Benchmarks::default())
    }

    pub fn with_benchmarks(benchmarks: &Benchmarks) -> Self {
        Self {
            margin: benchmarks.margin,
            order_size: benchmarks.order_size,
        }
    }

    /// 执行情景模拟
    ///
    /// # 错误
    /// - Validation: 任一调整超出允许范围
    #[instrument(skip(self, analysis, adjustments))]
    pub fn simulate(
        &self,
        analysis: &MarginAnalysis,
        adjustments: &ScenarioAdjustments,
    ) -> CostingResult<ScenarioResult> {
        let errors = adjustments.validate();
        if !errors.is_empty() {
            return Err(CostingError::validation(errors));
        }

        let target = analysis.inputs.buyer_target_fob;
        let profit_percent = analysis.inputs.target_profit_percent;

        // 由分析明细重建成本项 (顺序不变, 保证汇总结果一致)
        let original_lines = analysis.cost_lines();

        let adjusted_lines: Vec<CostLineItem> = original_lines
            .iter()
            .map(|line| CostLineItem {
                amount: line.amount * line_factor(line.category, adjustments),
                ..line.clone()
            })
            .collect();

        let original_total = sum_enabled(&original_lines);
        let new_total = sum_enabled(&adjusted_lines);

        let original_margin = margin_percent(target, original_total);
        let scenario_margin = margin_percent(target, new_total);
        let margin_change = round2(scenario_margin) - round2(original_margin);

        let original_quantity = analysis.inputs.order_quantity;
        let adjusted_quantity = adjust_quantity(original_quantity, adjustments.order_quantity_percent);
        let scenario_gross = target - new_total;

        let risk_level = self.margin.risk_level(scenario_margin);
        let insights = build_insights(adjustments, margin_change, risk_level);

        let adjusted_costs = original_lines
            .iter()
            .zip(&adjusted_lines)
            .map(|(before, after)| AdjustedCost {
                category: before.category,
                label: before.label.clone(),
                enabled: before.enabled,
                original: round2(before.amount),
                adjusted: round2(after.amount),
            })
            .collect();

        let result = ScenarioResult {
            adjustments: *adjustments,
            original_margin_percent: round2(original_margin),
            scenario_margin_percent: round2(scenario_margin),
            margin_change: round2(margin_change),
            risk_level,
            original_fob: round2(fob_with_profit(original_total, profit_percent)),
            scenario_fob: round2(fob_with_profit(new_total, profit_percent)),
            original_total_cost: round2(original_total),
            new_total_cost: round2(new_total),
            cost_change: round2(new_total - original_total),
            cost_change_percent: round2(percent_of(new_total - original_total, original_total)),
            adjusted_costs,
            original_quantity,
            adjusted_quantity,
            scenario_order_size_category: self.order_size.categorize(adjusted_quantity),
            scenario_gross_margin: round2(scenario_gross),
            scenario_total_profit: round2(scenario_gross * adjusted_quantity as f64),
            insights,
        };

        tracing::debug!(
            margin = result.scenario_margin_percent,
            change = result.margin_change,
            risk = %result.risk_level,
            "情景模拟完成"
        );

        Ok(result)
    }
}

/// 各类目的调整系数; 损耗调整作用于面料成本
fn line_factor(category: CostCategory, adjustments: &ScenarioAdjustments) -> f64 {
    match category {
        CostCategory::Fabric => {
            pct_factor(adjustments.fabric_price_percent) * pct_factor(adjustments.wastage_percent)
        }
        CostCategory::Trims => pct_factor(adjustments.trims_cost_percent),
        CostCategory::Cm => pct_factor(adjustments.cm_cost_percent),
        _ => 1.0,
    }
}

fn adjust_quantity(quantity: u64, percent: f64) -> u64 {
    let adjusted = (quantity as f64 * pct_factor(percent)).round();
    if adjusted.is_finite() && adjusted > 0.0 {
        adjusted as u64
    } else {
        0
    }
}

fn build_insights(
    adjustments: &ScenarioAdjustments,
    margin_change: f64,
    risk_level: ScenarioRiskLevel,
) -> Vec<String> {
    let mut insights = Vec::new();

    if margin_change > MARGIN_SWING_NOTE {
        insights.push(format!(
            "This scenario significantly improves margins by {:.1}%",
            margin_change
        ));
    } else if margin_change < -MARGIN_SWING_NOTE {
        insights.push(format!(
            "This scenario would erode margins by {:.1}%",
            margin_change.abs()
        ));
    }

    if adjustments.order_quantity_percent > QUANTITY_COMMITMENT_NOTE {
        insights.push(
            "Increasing order quantity improves efficiency but requires buyer commitment"
                .to_string(),
        );
    }

    if adjustments.fabric_price_percent < FABRIC_CUT_NOTE {
        insights.push("Significant fabric cost reduction may require quality trade-offs".to_string());
    }

    if risk_level == ScenarioRiskLevel::Critical {
        insights.push("This scenario results in critically low margins - not recommended".to_string());
    }

    insights
}
