// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供标准纸样规格、利润分析输入与浮点断言
// ==========================================

#![allow(dead_code)]

use apparel_fob::domain::{FabricSpec, MarginInput, PatternSpec};
use apparel_fob::CostCategory;

/// 浮点比较容差
pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: 期望 {}, 实际 {}",
        what,
        expected,
        actual
    );
}

/// 针织 T 恤参考样例 (75x55 cm, 180 GSM, 门幅 90 cm)
pub fn knit_tee_spec() -> PatternSpec {
    PatternSpec {
        pattern_length: 75.0,
        pattern_width: 55.0,
        fabric_width: 90.0,
        marker_efficiency: 82.0,
        shrinkage_length: 5.0,
        shrinkage_width: 3.0,
        wastage: 5.0,
        order_quantity: 10_000,
        fabric: FabricSpec::Knit {
            gsm: 180.0,
            price_per_kg: 8.5,
            pieces_per_marker: 1,
        },
    }
}

/// 梭织衬衫 (30x22 inch, 门幅 58 inch)
pub fn woven_shirt_spec() -> PatternSpec {
    PatternSpec {
        pattern_length: 30.0,
        pattern_width: 22.0,
        fabric_width: 58.0,
        marker_efficiency: 78.0,
        shrinkage_length: 3.0,
        shrinkage_width: 2.0,
        wastage: 4.0,
        order_quantity: 2_000,
        fabric: FabricSpec::Woven {
            pattern_repeat: 0.0,
            price_per_yard: 3.2,
        },
    }
}

/// 牛仔裤 (42x16 inch, 12 oz, 门幅 58 inch)
pub fn denim_jeans_spec() -> PatternSpec {
    PatternSpec {
        pattern_length: 42.0,
        pattern_width: 16.0,
        fabric_width: 58.0,
        marker_efficiency: 75.0,
        shrinkage_length: 10.0,
        shrinkage_width: 5.0,
        wastage: 5.0,
        order_quantity: 3_000,
        fabric: FabricSpec::Denim {
            fabric_weight_oz: 12.0,
            price_per_yard: 4.5,
        },
    }
}

/// 目标价 $5.00: 面料 2.00 + CM 1.20 + 辅料 0.30 = 3.50, 目标利润 20%
pub fn basic_margin_input() -> MarginInput {
    MarginInput::new(5.0, 3_000, 20.0)
        .with_cost(CostCategory::Fabric, 2.0)
        .with_cost(CostCategory::Cm, 1.2)
        .with_cost(CostCategory::Trims, 0.3)
}
