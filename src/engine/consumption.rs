// ==========================================
// 服装 FOB 成本核算 - 面料用料计算引擎
// ==========================================
// 职责: 按款式族 (针织/梭织/牛仔) 计算单件用料、损耗、利用率与面料成本
// 输入: PatternSpec (或扁平 PatternInput)
// 输出: ConsumptionResult
// 红线: 纯函数, 不读时钟, 不做 I/O; 校验不通过不计算
// ==========================================

use crate::config::benchmarks::{Benchmarks, RangeBenchmark, ShrinkageBenchmark};
use crate::domain::consumption::{ConsumptionResult, FamilyDetail};
use crate::domain::pattern::{FabricSpec, PatternInput, PatternSpec};
use crate::domain::types::GarmentType;
use crate::engine::numeric::{pct_factor, round2, round4, safe_div, PIECES_PER_DOZEN};
use crate::error::{CostingError, CostingResult};
use tracing::instrument;

/// 牛仔口袋/腰头/裤袢附加用料 (码/件), 不随缩率调整
pub const DENIM_ACCESSORY_ALLOWANCE_YARDS: f64 = 0.2;

const INCHES_PER_YARD: f64 = 36.0;
const METERS_PER_YARD: f64 = 0.9144;
const KG_PER_OZ: f64 = 0.0283495;
const SQ_CM_PER_SQ_M: f64 = 10_000.0;
const GRAMS_PER_KG: f64 = 1000.0;

/// 缩率与利用率修正的中间量 (三个款式族共用)
struct Adjusted {
    length: f64,
    width: f64,
}

impl Adjusted {
    fn from_spec(spec: &PatternSpec) -> Self {
        Self {
            length: spec.pattern_length * pct_factor(spec.shrinkage_length),
            width: spec.pattern_width * pct_factor(spec.shrinkage_width),
        }
    }
}

/// 唛架利用率与损耗修正后的实际用料
fn actual_from_theoretical(theoretical: f64, spec: &PatternSpec) -> f64 {
    safe_div(theoretical, spec.marker_efficiency / 100.0) * pct_factor(spec.wastage)
}

/// 门幅可排纸样数: 向下取整, 至少 1 (不做旋转/套排优化)
fn patterns_across(fabric_width: f64, adjusted_width: f64) -> u32 {
    let across = safe_div(fabric_width, adjusted_width).floor();
    if across >= 1.0 {
        across as u32
    } else {
        1
    }
}

// ==========================================
// ConsumptionEngine - 用料计算引擎
// ==========================================
pub struct ConsumptionEngine {
    benchmarks: Benchmarks,
}

impl Default for ConsumptionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumptionEngine {
    pub fn new() -> Self {
        Self::with_benchmarks(Benchmarks::default())
    }

    pub fn with_benchmarks(benchmarks: Benchmarks) -> Self {
        Self { benchmarks }
    }

    // ==========================================
    // 推荐值
    // ==========================================

    pub fn recommended_efficiency(&self, garment_type: GarmentType) -> RangeBenchmark {
        self.benchmarks.marker_efficiency.get(garment_type)
    }

    pub fn recommended_shrinkage(&self, garment_type: GarmentType) -> ShrinkageBenchmark {
        self.benchmarks.shrinkage.get(garment_type)
    }

    pub fn recommended_wastage(&self, garment_type: GarmentType) -> RangeBenchmark {
        self.benchmarks.wastage.get(garment_type)
    }

    // ==========================================
    // 校验
    // ==========================================

    /// 计算前校验
    ///
    /// # 返回
    /// 按字段顺序排列的可读消息; 为空才允许计算
    pub fn validate(&self, spec: &PatternSpec) -> Vec<String> {
        let mut errors = Vec::new();

        if !(spec.pattern_length > 0.0) {
            errors.push("Pattern length must be greater than 0".to_string());
        }
        if !(spec.pattern_width > 0.0) {
            errors.push("Pattern width must be greater than 0".to_string());
        }
        if !(spec.fabric_width > 0.0) {
            errors.push("Fabric width must be greater than 0".to_string());
        }
        if !(spec.marker_efficiency > 0.0 && spec.marker_efficiency <= 100.0) {
            errors.push("Marker efficiency must be between 0 and 100".to_string());
        }
        if !(0.0..=50.0).contains(&spec.shrinkage_length) {
            errors.push("Shrinkage (length) must be between 0 and 50%".to_string());
        }
        if !(0.0..=50.0).contains(&spec.shrinkage_width) {
            errors.push("Shrinkage (width) must be between 0 and 50%".to_string());
        }
        if !(0.0..=50.0).contains(&spec.wastage) {
            errors.push("Wastage must be between 0 and 50%".to_string());
        }
        if spec.order_quantity == 0 {
            errors.push("Order quantity must be greater than 0".to_string());
        }

        match &spec.fabric {
            FabricSpec::Knit { gsm, price_per_kg, .. } => {
                if !(*gsm > 0.0) {
                    errors.push("GSM must be greater than 0".to_string());
                }
                if !(*price_per_kg > 0.0) {
                    errors.push("Fabric price per kg must be greater than 0".to_string());
                }
            }
            FabricSpec::Woven { price_per_yard, .. } => {
                if !(*price_per_yard > 0.0) {
                    errors.push("Fabric price per yard must be greater than 0".to_string());
                }
            }
            FabricSpec::Denim {
                fabric_weight_oz,
                price_per_yard,
            } => {
                if !(*price_per_yard > 0.0) {
                    errors.push("Fabric price per yard must be greater than 0".to_string());
                }
                if !(*fabric_weight_oz > 0.0) {
                    errors.push("Fabric weight (oz) must be greater than 0".to_string());
                }
            }
        }

        errors
    }

    /// 校验扁平输入 (款式标签未知时直接报错)
    pub fn validate_input(&self, input: &PatternInput) -> CostingResult<Vec<String>> {
        let garment_type: GarmentType = input.garment_type.parse()?;
        Ok(self.validate(&input.to_spec(garment_type)))
    }

    // ==========================================
    // 计算入口
    // ==========================================

    /// 按款式族分派计算
    ///
    /// 入口处重新执行校验, 校验失败返回 Validation 错误, 不产出非有限数值。
    #[instrument(skip(self, spec), fields(garment_type = %spec.garment_type(), qty = spec.order_quantity))]
    pub fn calculate(&self, spec: &PatternSpec) -> CostingResult<ConsumptionResult> {
        let errors = self.validate(spec);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "用料输入校验未通过");
            return Err(CostingError::validation(errors));
        }

        let result = match &spec.fabric {
            FabricSpec::Knit {
                gsm,
                price_per_kg,
                pieces_per_marker,
            } => self.calculate_knit(spec, *gsm, *price_per_kg, *pieces_per_marker),
            FabricSpec::Woven {
                pattern_repeat,
                price_per_yard,
            } => self.calculate_woven(spec, *pattern_repeat, *price_per_yard),
            FabricSpec::Denim {
                fabric_weight_oz,
                price_per_yard,
            } => self.calculate_denim(spec, *fabric_weight_oz, *price_per_yard),
        };

        tracing::debug!(
            actual = result.actual_consumption_per_piece,
            unit = %result.unit,
            cost_per_piece = result.fabric_cost_per_piece,
            "用料计算完成"
        );

        Ok(result)
    }

    /// 按款式标签计算扁平输入
    ///
    /// # 错误
    /// - UnknownGarmentType: 标签不在 {knit, woven, denim}
    /// - Validation: 字段校验失败
    pub fn calculate_from_input(&self, input: &PatternInput) -> CostingResult<ConsumptionResult> {
        let garment_type: GarmentType = input.garment_type.parse()?;
        self.calculate(&input.to_spec(garment_type))
    }

    // ==========================================
    // 针织: 按面积 x 克重计重
    // ==========================================
    fn calculate_knit(
        &self,
        spec: &PatternSpec,
        gsm: f64,
        price_per_kg: f64,
        pieces_per_marker: u32,
    ) -> ConsumptionResult {
        let adjusted = Adjusted::from_spec(spec);
        let qty = spec.order_quantity as f64;

        let area_sq_m = adjusted.length * adjusted.width / SQ_CM_PER_SQ_M;
        let theoretical = area_sq_m * gsm / GRAMS_PER_KG;
        let actual = actual_from_theoretical(theoretical, spec);

        // 唛架长度 (m)
        let pieces = pieces_per_marker.max(1) as f64;
        let marker_length_cm = safe_div(adjusted.length * pieces, spec.marker_efficiency / 100.0);

        let total_kg = actual * qty;
        let fabric_width_m = spec.fabric_width / 100.0;
        let total_meters = safe_div(total_kg, gsm * fabric_width_m / GRAMS_PER_KG);

        self.assemble(
            spec,
            &adjusted,
            theoretical,
            actual,
            total_kg,
            total_meters,
            price_per_kg,
            FamilyDetail::Knit {
                pattern_area_sq_m: round4(area_sq_m),
                marker_length_meters: round4(marker_length_cm / 100.0),
            },
        )
    }

    // ==========================================
    // 梭织: 按门幅排版计长 (码)
    // ==========================================
    fn calculate_woven(
        &self,
        spec: &PatternSpec,
        pattern_repeat: f64,
        price_per_yard: f64,
    ) -> ConsumptionResult {
        let adjusted = Adjusted::from_spec(spec);
        let qty = spec.order_quantity as f64;

        let repeat_allowance = if pattern_repeat > 0.0 { pattern_repeat } else { 0.0 };
        let total_pattern_length = adjusted.length + repeat_allowance;
        let across = patterns_across(spec.fabric_width, adjusted.width);

        let theoretical = total_pattern_length / (INCHES_PER_YARD * across as f64);
        let actual = actual_from_theoretical(theoretical, spec);

        let marker_length_yards =
            safe_div(total_pattern_length, spec.marker_efficiency / 100.0) / INCHES_PER_YARD;

        let total_yards = actual * qty;

        self.assemble(
            spec,
            &adjusted,
            theoretical,
            actual,
            total_yards,
            total_yards * METERS_PER_YARD,
            price_per_yard,
            FamilyDetail::Woven {
                pattern_repeat_allowance: round2(repeat_allowance),
                patterns_across_fabric: across,
                marker_length_yards: round4(marker_length_yards),
            },
        )
    }

    // ==========================================
    // 牛仔: 梭织公式 + 附件用料 + 重量折算
    // ==========================================
    fn calculate_denim(
        &self,
        spec: &PatternSpec,
        fabric_weight_oz: f64,
        price_per_yard: f64,
    ) -> ConsumptionResult {
        let adjusted = Adjusted::from_spec(spec);
        let qty = spec.order_quantity as f64;

        let accessory_allowance_in = DENIM_ACCESSORY_ALLOWANCE_YARDS * INCHES_PER_YARD;
        let total_pattern_length = adjusted.length + accessory_allowance_in;
        let across = patterns_across(spec.fabric_width, adjusted.width);

        let theoretical = total_pattern_length / (INCHES_PER_YARD * across as f64);
        let actual = actual_from_theoretical(theoretical, spec);

        // 重量折算: 平方码 -> oz -> kg
        let sq_yards_per_piece = actual * (spec.fabric_width / INCHES_PER_YARD);
        let oz_per_piece = sq_yards_per_piece * fabric_weight_oz;
        let kg_per_piece = oz_per_piece * KG_PER_OZ;
        let kg_per_piece_rounded = round4(kg_per_piece);

        let marker_length_yards =
            safe_div(total_pattern_length, spec.marker_efficiency / 100.0) / INCHES_PER_YARD;

        let total_yards = actual * qty;

        self.assemble(
            spec,
            &adjusted,
            theoretical,
            actual,
            total_yards,
            total_yards * METERS_PER_YARD,
            price_per_yard,
            FamilyDetail::Denim {
                accessory_allowance_yards: round2(DENIM_ACCESSORY_ALLOWANCE_YARDS),
                patterns_across_fabric: across,
                marker_length_yards: round4(marker_length_yards),
                weight_oz_per_piece: round2(oz_per_piece),
                weight_kg_per_piece: kg_per_piece_rounded,
                weight_kg_per_dozen: round4(kg_per_piece_rounded * PIECES_PER_DOZEN),
                total_fabric_kg: round2(kg_per_piece * qty),
            },
        )
    }

    // ==========================================
    // 结果组装 (三族共用的成本与利用率字段)
    // ==========================================
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        spec: &PatternSpec,
        adjusted: &Adjusted,
        theoretical: f64,
        actual: f64,
        total_native: f64,
        total_meters: f64,
        unit_price: f64,
        detail: FamilyDetail,
    ) -> ConsumptionResult {
        let qty = spec.order_quantity as f64;
        let garment_type = spec.garment_type();

        // 每打用料取自已舍入的单件用料, 保证 per_dozen == per_piece x 12
        let actual_rounded = round4(actual);

        let cost_per_piece = actual * unit_price;

        let utilization = round2(spec.marker_efficiency * (100.0 - spec.wastage) / 100.0);
        let waste_per_piece = actual - theoretical;

        ConsumptionResult {
            garment_type,
            unit: garment_type.unit(),
            theoretical_consumption_per_piece: round4(theoretical),
            actual_consumption_per_piece: actual_rounded,
            consumption_per_dozen: round4(actual_rounded * PIECES_PER_DOZEN),
            adjusted_pattern_length: round2(adjusted.length),
            adjusted_pattern_width: round2(adjusted.width),
            order_quantity: spec.order_quantity,
            total_fabric_required: round2(total_native),
            total_fabric_meters: round2(total_meters),
            fabric_unit_price: unit_price,
            fabric_cost_per_piece: round2(cost_per_piece),
            fabric_cost_per_dozen: round2(cost_per_piece * PIECES_PER_DOZEN),
            total_fabric_cost: round2(total_native * unit_price),
            marker_efficiency: spec.marker_efficiency,
            fabric_utilization: utilization,
            waste_percentage: round2(100.0 - utilization),
            waste_per_piece: round4(waste_per_piece),
            total_waste: round2(waste_per_piece * qty),
            detail,
            inputs: spec.clone(),
        }
    }
}
