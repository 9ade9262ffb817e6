// ==========================================
// ScenarioEngine 引擎集成测试
// ==========================================
// 测试目标: 验证调整叠加、利润率重算、风险等级与提示
// 覆盖范围: 零调整复现、面料/损耗复合、数量调整、越界拒绝
// ==========================================

mod test_helpers;

use apparel_fob::logging;
use apparel_fob::domain::{MarginInput, ScenarioAdjustments};
use apparel_fob::engine::{MarginEngine, ScenarioEngine};
use apparel_fob::{CostCategory, CostingError, OrderSizeCategory, ScenarioRiskLevel};
use test_helpers::*;

#[test]
fn test_neutral_scenario_reproduces_analysis() {
    logging::init_test();

    println!("\n=== 测试：零调整复现原分析 ===");

    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let result = ScenarioEngine::new()
        .simulate(&analysis, &ScenarioAdjustments::default())
        .unwrap();

    assert_eq!(result.original_margin_percent, analysis.margin_percent);
    assert_eq!(result.scenario_margin_percent, analysis.margin_percent);
    assert_eq!(result.original_fob, analysis.target_fob_with_profit);
    assert_eq!(result.scenario_fob, analysis.target_fob_with_profit);
    assert_eq!(result.margin_change, 0.0);
    assert_eq!(result.cost_change, 0.0);
    assert_eq!(result.new_total_cost, analysis.total_cost);
    assert_eq!(result.adjusted_quantity, 3000);
    assert!(result.insights.is_empty());

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_neutral_scenario_with_unrounded_amounts() {
    let input = MarginInput::new(7.3, 1500, 12.5)
        .with_cost(CostCategory::Fabric, 2.3333)
        .with_cost(CostCategory::Cm, 1.4444)
        .with_cost(CostCategory::Logistics, 0.1717);
    let analysis = MarginEngine::new().analyze(&input);
    let result = ScenarioEngine::new()
        .simulate(&analysis, &ScenarioAdjustments::default())
        .unwrap();

    assert_eq!(result.scenario_margin_percent, analysis.margin_percent);
    assert_eq!(result.scenario_fob, analysis.target_fob_with_profit);
}

#[test]
fn test_fabric_price_increase() {
    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let adjustments = ScenarioAdjustments {
        fabric_price_percent: 10.0,
        ..Default::default()
    };
    let result = ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    assert_eq!(result.new_total_cost, 3.7);
    assert_eq!(result.scenario_margin_percent, 26.0);
    assert_eq!(result.margin_change, -4.0);
    assert_eq!(result.cost_change, 0.2);
    assert_eq!(result.cost_change_percent, 5.71);
    assert_eq!(result.scenario_fob, 4.44);
    assert_eq!(result.risk_level, ScenarioRiskLevel::Low);
    assert!(result.insights.is_empty(), "变化不足 5 个百分点不提示");

    let fabric = result
        .adjusted_costs
        .iter()
        .find(|c| c.category == CostCategory::Fabric)
        .unwrap();
    assert_eq!(fabric.original, 2.0);
    assert_eq!(fabric.adjusted, 2.2);
}

#[test]
fn test_wastage_compounds_on_fabric() {
    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let adjustments = ScenarioAdjustments {
        fabric_price_percent: 10.0,
        wastage_percent: 10.0,
        ..Default::default()
    };
    let result = ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    assert_eq!(result.new_total_cost, 3.92);
    assert_eq!(result.scenario_margin_percent, 21.6);

    // 损耗调整只作用于面料
    let cm = result
        .adjusted_costs
        .iter()
        .find(|c| c.category == CostCategory::Cm)
        .unwrap();
    assert_eq!(cm.adjusted, cm.original);
}

#[test]
fn test_cost_pressure_erodes_margin() {
    logging::init_test();

    println!("\n=== 测试：成本全面上涨 ===");

    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let adjustments = ScenarioAdjustments {
        fabric_price_percent: 30.0,
        trims_cost_percent: 30.0,
        cm_cost_percent: 30.0,
        ..Default::default()
    };
    let result = ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    for note in &result.insights {
        println!("  - {}", note);
    }

    assert_eq!(result.new_total_cost, 4.55);
    assert_eq!(result.scenario_margin_percent, 9.0);
    assert_eq!(result.margin_change, -21.0);
    assert_eq!(result.risk_level, ScenarioRiskLevel::High);
    assert_eq!(
        result.insights,
        vec!["This scenario would erode margins by 21.0%".to_string()]
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_critical_risk_note() {
    let input = MarginInput::new(4.0, 1000, 10.0)
        .with_cost(CostCategory::Fabric, 2.0)
        .with_cost(CostCategory::Cm, 1.2)
        .with_cost(CostCategory::Trims, 0.3);
    let analysis = MarginEngine::new().analyze(&input);
    let adjustments = ScenarioAdjustments {
        fabric_price_percent: 30.0,
        cm_cost_percent: 30.0,
        ..Default::default()
    };
    let result = ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    assert_eq!(result.risk_level, ScenarioRiskLevel::Critical);
    assert!(result.scenario_margin_percent < 0.0);
    assert_eq!(
        result.insights.last().map(String::as_str),
        Some("This scenario results in critically low margins - not recommended")
    );
}

#[test]
fn test_quantity_and_fabric_cut_notes() {
    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let adjustments = ScenarioAdjustments {
        fabric_price_percent: -15.0,
        order_quantity_percent: 100.0,
        ..Default::default()
    };
    let result = ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    assert_eq!(result.adjusted_quantity, 6000);
    assert_eq!(result.scenario_order_size_category, OrderSizeCategory::Bulk);
    // 面料 1.70, 总成本 3.20, 单件毛利 1.80
    assert_eq!(result.scenario_gross_margin, 1.8);
    assert_eq!(result.scenario_total_profit, 10800.0);
    assert_eq!(result.scenario_margin_percent, 36.0);

    assert_eq!(
        result.insights,
        vec![
            "This scenario significantly improves margins by 6.0%".to_string(),
            "Increasing order quantity improves efficiency but requires buyer commitment"
                .to_string(),
            "Significant fabric cost reduction may require quality trade-offs".to_string(),
        ]
    );
}

#[test]
fn test_out_of_range_adjustments_rejected() {
    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let adjustments = ScenarioAdjustments {
        cm_cost_percent: -45.0,
        order_quantity_percent: 150.0,
        ..Default::default()
    };

    let err = ScenarioEngine::new()
        .simulate(&analysis, &adjustments)
        .unwrap_err();
    assert!(matches!(err, CostingError::Validation { .. }));
    assert_eq!(
        err.messages(),
        &[
            "CM cost adjustment must be between -30% and +30%".to_string(),
            "Order quantity adjustment must be between -50% and +100%".to_string(),
        ]
    );
}

#[test]
fn test_analysis_not_mutated() {
    let analysis = MarginEngine::new().analyze(&basic_margin_input());
    let snapshot = analysis.clone();

    let adjustments = ScenarioAdjustments {
        fabric_price_percent: 20.0,
        trims_cost_percent: -10.0,
        ..Default::default()
    };
    ScenarioEngine::new().simulate(&analysis, &adjustments).unwrap();

    assert_eq!(analysis, snapshot);
}

#[test]
fn test_disabled_line_stays_out_of_scenario_total() {
    let input = basic_margin_input()
        .with_cost(CostCategory::Washing, 0.5)
        .with_enabled(CostCategory::Washing, false);
    let analysis = MarginEngine::new().analyze(&input);
    let result = ScenarioEngine::new()
        .simulate(&analysis, &ScenarioAdjustments::default())
        .unwrap();

    assert_eq!(result.new_total_cost, 3.5);
    let washing = result
        .adjusted_costs
        .iter()
        .find(|c| c.category == CostCategory::Washing)
        .unwrap();
    assert!(!washing.enabled);
    assert_eq!(washing.adjusted, 0.5);
}
