// ==========================================
// 服装 FOB 成本核算 - FOB 报价构成引擎
// ==========================================
// 职责: 面料成本 + 其他成本 + 目标利润 => FOB 单件/每打
// 红线: 除数 <= 0 时占比报 0
// ==========================================

use crate::domain::consumption::ConsumptionResult;
use crate::domain::fob::FobImpact;
use crate::engine::numeric::{pct_factor, percent_of, round2, PIECES_PER_DOZEN};
use tracing::instrument;

#[derive(Debug, Default, Clone, Copy)]
pub struct FobImpactEngine {}

impl FobImpactEngine {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip(self))]
    pub fn calculate(&self, fabric_cost: f64, other_costs: f64, profit_margin: f64) -> FobImpact {
        let total = fabric_cost + other_costs;
        let fob = total * pct_factor(profit_margin);

        let impact = FobImpact {
            fabric_cost_per_piece: round2(fabric_cost),
            fabric_cost_per_dozen: round2(fabric_cost * PIECES_PER_DOZEN),
            other_costs_per_piece: round2(other_costs),
            other_costs_per_dozen: round2(other_costs * PIECES_PER_DOZEN),
            total_cost_per_piece: round2(total),
            total_cost_per_dozen: round2(total * PIECES_PER_DOZEN),
            profit_margin: round2(profit_margin),
            fob_per_piece: round2(fob),
            fob_per_dozen: round2(fob * PIECES_PER_DOZEN),
            fabric_percentage_of_cost: round2(percent_of(fabric_cost, total)),
            fabric_percentage_of_fob: round2(percent_of(fabric_cost, fob)),
        };

        tracing::debug!(fob = impact.fob_per_piece, "FOB 构成计算完成");
        impact
    }

    /// 直接取用料结果中的单件面料成本
    pub fn from_consumption(
        &self,
        consumption: &ConsumptionResult,
        other_costs: f64,
        profit_margin: f64,
    ) -> FobImpact {
        self.calculate(consumption.fabric_cost_per_piece, other_costs, profit_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_fob() {
        let impact = FobImpactEngine::new().calculate(0.87, 2.13, 20.0);
        assert_eq!(impact.total_cost_per_piece, 3.0);
        assert_eq!(impact.total_cost_per_dozen, 36.0);
        assert_eq!(impact.fob_per_piece, 3.6);
        assert_eq!(impact.fob_per_dozen, 43.2);
        assert_eq!(impact.fabric_percentage_of_cost, 29.0);
    }

    #[test]
    fn test_zero_total_reports_zero_share() {
        let impact = FobImpactEngine::new().calculate(0.0, 0.0, 15.0);
        assert_eq!(impact.fabric_percentage_of_cost, 0.0);
        assert_eq!(impact.fabric_percentage_of_fob, 0.0);
    }
}
