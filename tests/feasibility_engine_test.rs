// ==========================================
// FeasibilityEngine 引擎集成测试
// ==========================================
// 测试目标: 验证评分因子、截断与 Green/Amber/Red 分级
// ==========================================

mod test_helpers;

use apparel_fob::logging;
use apparel_fob::domain::MarginInput;
use apparel_fob::engine::{FeasibilityEngine, FeasibilityInputs, MarginEngine};
use apparel_fob::{CostCategory, FeasibilityStatus, MarginHealth, Recommendation};
use test_helpers::*;

fn inputs(margin: f64, critical: usize, high: usize, qty: u64, gap: f64) -> FeasibilityInputs {
    FeasibilityInputs {
        margin_percent: margin,
        critical_flags: critical,
        high_flags: high,
        order_quantity: qty,
        price_gap_percent: gap,
    }
}

#[test]
fn test_low_margin_small_order_is_rejected() {
    logging::init_test();

    println!("\n=== 测试：低利润 + 严重预警 + 小单 ===");

    let engine = FeasibilityEngine::new();
    let result = engine.score_inputs(&inputs(8.0, 1, 0, 300, 0.0));

    for f in &result.factors {
        println!("  - {} ({:+})", f.factor, f.impact);
    }

    // 100 - 25 - 12 - 15 = 48, 低于 Amber 线 50
    assert_eq!(result.score, 48);
    assert_eq!(result.status, FeasibilityStatus::Red);
    assert_eq!(result.recommendation, Recommendation::Reject);
    assert_eq!(
        result.justification,
        "Commercially unviable at current pricing. Significant margin erosion or cost risks identified."
    );

    let factors: Vec<(&str, i32)> = result
        .factors
        .iter()
        .map(|f| (f.factor.as_str(), f.impact))
        .collect();
    assert_eq!(
        factors,
        vec![
            ("Low margin - high commercial risk", -25),
            ("1 critical cost flag(s)", -12),
            ("Very small order - low efficiency", -15),
        ]
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_amber_band() {
    let engine = FeasibilityEngine::new();
    // 100 - 10 - 8 - 8 = 74
    let result = engine.score_inputs(&inputs(12.0, 0, 0, 1000, -6.0));

    assert_eq!(result.score, 74);
    assert_eq!(result.status, FeasibilityStatus::Amber);
    assert_eq!(result.recommendation, Recommendation::Renegotiate);
    assert_eq!(result.factors[1].factor, "Small order size");
    assert_eq!(result.factors[2].factor, "Buyer target below quote");
}

#[test]
fn test_score_clamped_to_upper_bound() {
    let engine = FeasibilityEngine::new();
    let result = engine.score_inputs(&inputs(25.0, 0, 0, 8000, 12.0));

    assert_eq!(result.raw_score(), 115);
    assert_eq!(result.score, 100);
    assert_eq!(result.status, FeasibilityStatus::Green);
    assert_eq!(result.recommendation, Recommendation::Accept);
}

#[test]
fn test_score_clamped_to_zero() {
    let engine = FeasibilityEngine::new();
    let result = engine.score_inputs(&inputs(-500.0, 3, 2, 1, -50.0));

    // 100 - 40 - 36 - 10 - 15 - 15 = -16
    assert_eq!(result.raw_score(), -16);
    assert_eq!(result.score, 0);
    assert_eq!(result.status, FeasibilityStatus::Red);
    assert_eq!(result.factors[1].factor, "3 critical cost flag(s)");
    assert_eq!(result.factors[2].factor, "2 high cost flag(s)");
    assert_eq!(result.factors[2].impact, -10);
}

#[test]
fn test_score_always_in_range() {
    let engine = FeasibilityEngine::new();
    for margin in [-1000.0, -5.0, 0.0, 7.5, 14.9, 20.0, 95.0] {
        for qty in [1, 499, 1999, 4999, 5000, 100_000] {
            for gap in [-80.0, -7.0, 0.0, 6.0, 300.0] {
                let s = engine.score_inputs(&inputs(margin, 2, 3, qty, gap)).score;
                assert!((0..=100).contains(&s), "评分越界: {}", s);
            }
        }
    }
}

#[test]
fn test_score_from_analysis() {
    logging::init_test();

    println!("\n=== 测试：由利润分析直接评分 ===");

    let analysis = MarginEngine::new().analyze(&basic_margin_input().with_quoted_fob(4.5));
    let result = FeasibilityEngine::new().score(&analysis);

    // 利润率 30% (+5), 数量 3000 无调整, 价差 +11.11% (+5)
    assert_eq!(result.factors.len(), 2);
    assert_eq!(result.factors[0].factor, "Strong margin position");
    assert_eq!(result.factors[1].factor, "Favorable price gap");
    assert_eq!(result.score, 100);
    assert_eq!(
        result.justification,
        "Product shows healthy commercial viability with acceptable margins and manageable cost structure."
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_flags_counted_from_analysis() {
    let input = MarginInput::new(5.0, 6000, 10.0)
        .with_cost(CostCategory::Fabric, 3.4)
        .with_cost(CostCategory::Cm, 1.6);
    let analysis = MarginEngine::new().analyze(&input);
    let inputs = FeasibilityInputs::from_analysis(&analysis);

    assert_eq!(inputs.critical_flags, 1);
    assert_eq!(inputs.high_flags, 1);
    assert_eq!(inputs.order_quantity, 6000);
}

#[test]
fn test_margin_just_below_minimum_scored_unrounded() {
    logging::init_test();

    println!("\n=== 测试：利润率 4.996% 按未舍入值评分 ===");

    let input = MarginInput::new(100.0, 3000, 0.0).with_cost(CostCategory::Fabric, 95.004);
    let analysis = MarginEngine::new().analyze(&input);
    let result = FeasibilityEngine::new().score(&analysis);

    // 展示值舍入为 5.00, 但实际低于最低线 5%
    assert_eq!(analysis.margin_percent, 5.0);
    assert_eq!(analysis.margin_health, MarginHealth::Critical);
    assert_eq!(result.factors[0].factor, "Margin below minimum viable");
    assert_eq!(result.factors[0].impact, -40);
    // 100 - 40 - 12 = 48
    assert_eq!(result.score, 48);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_price_gap_just_beyond_ten_percent_scored_unrounded() {
    let input = MarginInput::new(4.4999, 3000, 20.0)
        .with_cost(CostCategory::Fabric, 2.0)
        .with_cost(CostCategory::Cm, 1.2)
        .with_cost(CostCategory::Trims, 0.3)
        .with_quoted_fob(5.0);
    let analysis = MarginEngine::new().analyze(&input);
    let inputs = FeasibilityInputs::from_analysis(&analysis);

    assert_eq!(analysis.price_gap_percent, -10.0);
    assert!(inputs.price_gap_percent < -10.0, "价差 {}", inputs.price_gap_percent);

    let result = FeasibilityEngine::new().score_inputs(&inputs);
    let factors: Vec<(&str, i32)> = result
        .factors
        .iter()
        .map(|f| (f.factor.as_str(), f.impact))
        .collect();
    assert_eq!(
        factors,
        vec![
            ("Strong margin position", 5),
            ("Buyer target significantly below quote", -15),
        ]
    );
    assert_eq!(result.score, 90);
}
