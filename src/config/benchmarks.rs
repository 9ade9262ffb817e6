// ==========================================
// 服装 FOB 成本核算 - 行业基准阈值表
// ==========================================
// 职责: 成本占比档位、利润档位、订单规模档位、
//       唛架利用率/缩率/损耗推荐值
// 形式: 静态查找表 + 可由配置文件覆写
// ==========================================

use crate::domain::cost::CostBand;
use crate::domain::types::{
    CostCategory, GarmentType, MarginHealth, OrderSizeCategory, ScenarioRiskLevel,
};
use crate::error::{CostingError, CostingResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 默认静态表
// ==========================================

/// 各成本类目占买家目标价的默认档位 (low/typical/high/critical, %)
pub const DEFAULT_COST_BANDS: [(CostCategory, CostBand); 8] = [
    (CostCategory::Fabric, CostBand::new(35.0, 45.0, 55.0, 65.0)),
    (CostCategory::Trims, CostBand::new(5.0, 8.0, 12.0, 15.0)),
    (CostCategory::Packaging, CostBand::new(2.0, 4.0, 6.0, 10.0)),
    (CostCategory::Cm, CostBand::new(15.0, 22.0, 30.0, 40.0)),
    (CostCategory::Washing, CostBand::new(0.0, 5.0, 10.0, 15.0)),
    (CostCategory::Testing, CostBand::new(1.0, 2.0, 4.0, 6.0)),
    (CostCategory::Logistics, CostBand::new(2.0, 4.0, 7.0, 10.0)),
    (CostCategory::Overhead, CostBand::new(3.0, 5.0, 8.0, 12.0)),
];

/// 查默认档位 (静态表覆盖全部类目)
pub fn default_cost_band(category: CostCategory) -> CostBand {
    DEFAULT_COST_BANDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, band)| *band)
        .unwrap_or(DEFAULT_COST_BANDS[0].1)
}

pub const DEFAULT_MARGIN_BANDS: MarginBands = MarginBands {
    minimum: 5.0,
    low: 10.0,
    healthy: 15.0,
    strong: 20.0,
    premium: 25.0,
};

pub const DEFAULT_ORDER_SIZE_BANDS: OrderSizeBands = OrderSizeBands {
    small: 500,
    medium: 2000,
    large: 5000,
};

// ==========================================
// MarginBands - 利润率档位 (%)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginBands {
    pub minimum: f64, // 低于即亏损区
    pub low: f64,     // 低利润高风险
    pub healthy: f64, // 行业健康线
    pub strong: f64,  // 具备议价缓冲
    pub premium: f64, // 高端/特种
}

impl MarginBands {
    pub fn health(&self, margin_percent: f64) -> MarginHealth {
        if margin_percent < self.minimum {
            MarginHealth::Critical
        } else if margin_percent < self.low {
            MarginHealth::Low
        } else if margin_percent < self.healthy {
            MarginHealth::BelowTarget
        } else if margin_percent < self.strong {
            MarginHealth::Healthy
        } else {
            MarginHealth::Strong
        }
    }

    /// 情景模拟风险等级, 与利润档位共用阈值
    pub fn risk_level(&self, margin_percent: f64) -> ScenarioRiskLevel {
        if margin_percent < self.minimum {
            ScenarioRiskLevel::Critical
        } else if margin_percent < self.low {
            ScenarioRiskLevel::High
        } else if margin_percent < self.healthy {
            ScenarioRiskLevel::Medium
        } else {
            ScenarioRiskLevel::Low
        }
    }

    fn is_ascending(&self) -> bool {
        self.minimum <= self.low
            && self.low <= self.healthy
            && self.healthy <= self.strong
            && self.strong <= self.premium
    }
}

// ==========================================
// OrderSizeBands - 订单规模档位 (件)
// ==========================================
// small 以下为 Small, medium 以下为 Medium, large 以下为 Large, 其余 Bulk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSizeBands {
    pub small: u64,
    pub medium: u64,
    pub large: u64,
}

impl OrderSizeBands {
    pub fn categorize(&self, quantity: u64) -> OrderSizeCategory {
        if quantity < self.small {
            OrderSizeCategory::Small
        } else if quantity < self.medium {
            OrderSizeCategory::Medium
        } else if quantity < self.large {
            OrderSizeCategory::Large
        } else {
            OrderSizeCategory::Bulk
        }
    }
}

// ==========================================
// 工艺推荐值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBenchmark {
    pub min: f64,
    pub typical: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageBenchmark {
    pub length: f64,
    pub width: f64,
}

/// 按款式族分列的推荐值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyBenchmarks<T> {
    pub knit: T,
    pub woven: T,
    pub denim: T,
}

impl<T: Copy> FamilyBenchmarks<T> {
    pub fn get(&self, garment_type: GarmentType) -> T {
        match garment_type {
            GarmentType::Knit => self.knit,
            GarmentType::Woven => self.woven,
            GarmentType::Denim => self.denim,
        }
    }

    pub fn set(&mut self, garment_type: GarmentType, value: T) {
        match garment_type {
            GarmentType::Knit => self.knit = value,
            GarmentType::Woven => self.woven = value,
            GarmentType::Denim => self.denim = value,
        }
    }
}

// ==========================================
// Benchmarks - 完整基准表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub cost_bands: BTreeMap<CostCategory, CostBand>,
    pub margin: MarginBands,
    pub order_size: OrderSizeBands,
    pub marker_efficiency: FamilyBenchmarks<RangeBenchmark>,
    pub shrinkage: FamilyBenchmarks<ShrinkageBenchmark>,
    pub wastage: FamilyBenchmarks<RangeBenchmark>,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            cost_bands: DEFAULT_COST_BANDS.iter().copied().collect(),
            margin: DEFAULT_MARGIN_BANDS,
            order_size: DEFAULT_ORDER_SIZE_BANDS,
            marker_efficiency: FamilyBenchmarks {
                knit: RangeBenchmark { min: 75.0, typical: 82.0, max: 90.0 },
                woven: RangeBenchmark { min: 70.0, typical: 78.0, max: 85.0 },
                denim: RangeBenchmark { min: 68.0, typical: 75.0, max: 82.0 },
            },
            shrinkage: FamilyBenchmarks {
                knit: ShrinkageBenchmark { length: 5.0, width: 3.0 },
                woven: ShrinkageBenchmark { length: 3.0, width: 2.0 },
                denim: ShrinkageBenchmark { length: 10.0, width: 5.0 },
            },
            wastage: FamilyBenchmarks {
                knit: RangeBenchmark { min: 3.0, typical: 5.0, max: 8.0 },
                woven: RangeBenchmark { min: 2.0, typical: 4.0, max: 6.0 },
                denim: RangeBenchmark { min: 3.0, typical: 5.0, max: 8.0 },
            },
        }
    }
}

impl Benchmarks {
    /// 类目档位; 配置缺失的类目回落到静态默认表
    pub fn cost_band(&self, category: CostCategory) -> CostBand {
        self.cost_bands
            .get(&category)
            .copied()
            .unwrap_or_else(|| default_cost_band(category))
    }

    /// 校验档位单调递增
    pub fn validate(&self) -> CostingResult<()> {
        for (category, band) in &self.cost_bands {
            let finite = [band.low, band.typical, band.high, band.critical]
                .iter()
                .all(|v| v.is_finite());
            if !finite || !band.is_ascending() {
                return Err(CostingError::InvalidBenchmark(format!(
                    "cost band for {} must be ascending (low <= typical <= high <= critical)",
                    category
                )));
            }
        }

        if !self.margin.is_ascending() {
            return Err(CostingError::InvalidBenchmark(
                "margin bands must be ascending (minimum <= low <= healthy <= strong <= premium)"
                    .to_string(),
            ));
        }

        let order = &self.order_size;
        if !(order.small <= order.medium && order.medium <= order.large) {
            return Err(CostingError::InvalidBenchmark(
                "order size bands must be ascending (small <= medium <= large)".to_string(),
            ));
        }

        for garment_type in GarmentType::ALL {
            let eff = self.marker_efficiency.get(garment_type);
            if !(eff.min > 0.0 && eff.min <= eff.typical && eff.typical <= eff.max && eff.max <= 100.0)
            {
                return Err(CostingError::InvalidBenchmark(format!(
                    "marker efficiency benchmark for {} must satisfy 0 < min <= typical <= max <= 100",
                    garment_type
                )));
            }
            let waste = self.wastage.get(garment_type);
            if !(waste.min >= 0.0 && waste.min <= waste.typical && waste.typical <= waste.max) {
                return Err(CostingError::InvalidBenchmark(format!(
                    "wastage benchmark for {} must satisfy 0 <= min <= typical <= max",
                    garment_type
                )));
            }
        }

        Ok(())
    }
}
