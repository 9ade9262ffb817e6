// ==========================================
// FobImpactEngine 集成测试
// ==========================================
// 测试目标: 验证单件/每打 FOB 构成与面料占比
// ==========================================

mod test_helpers;

use apparel_fob::logging;
use apparel_fob::engine::{ConsumptionEngine, FobImpactEngine};
use test_helpers::*;

#[test]
fn test_fob_from_knit_consumption() {
    logging::init_test();

    println!("\n=== 测试：针织用料 -> FOB ===");

    let consumption = ConsumptionEngine::new().calculate(&knit_tee_spec()).unwrap();
    let impact = FobImpactEngine::new().from_consumption(&consumption, 2.13, 20.0);

    println!("  - FOB/件: {}", impact.fob_per_piece);
    println!("  - FOB/打: {}", impact.fob_per_dozen);

    assert_eq!(impact.fabric_cost_per_piece, 0.87);
    assert_eq!(impact.total_cost_per_piece, 3.0);
    assert_eq!(impact.fob_per_piece, 3.6);
    assert_eq!(impact.fob_per_dozen, 43.2);
    assert_eq!(impact.fabric_percentage_of_cost, 29.0);
    assert_eq!(impact.fabric_percentage_of_fob, 24.17);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_dozen_figures_scale_by_twelve() {
    let impact = FobImpactEngine::new().calculate(1.25, 2.5, 15.0);

    assert_eq!(impact.fabric_cost_per_dozen, 15.0);
    assert_eq!(impact.other_costs_per_dozen, 30.0);
    assert_eq!(impact.total_cost_per_dozen, 45.0);
    assert_eq!(impact.profit_margin, 15.0);
    assert_close(impact.fob_per_piece, 4.31, "FOB/件");
}

#[test]
fn test_zero_costs_report_zero_shares() {
    let impact = FobImpactEngine::new().calculate(0.0, 0.0, 25.0);
    assert_eq!(impact.fob_per_piece, 0.0);
    assert_eq!(impact.fabric_percentage_of_cost, 0.0);
    assert_eq!(impact.fabric_percentage_of_fob, 0.0);
}

#[test]
fn test_fabric_only_is_full_share_of_cost() {
    let impact = FobImpactEngine::new().calculate(2.0, 0.0, 0.0);
    assert_eq!(impact.fabric_percentage_of_cost, 100.0);
    assert_eq!(impact.fabric_percentage_of_fob, 100.0);
}
