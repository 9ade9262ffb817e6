// ==========================================
// 服装 FOB 成本核算 - 纸样规格领域模型
// ==========================================
// 职责: 纸样/工艺参数, 按款式族携带专属字段
// 单位: 针织尺寸为 cm, 梭织/牛仔尺寸为 inch
// ==========================================

use crate::domain::types::GarmentType;
use serde::{Deserialize, Serialize};

// ==========================================
// FabricSpec - 款式族专属面料参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "garment_type", rename_all = "lowercase")]
pub enum FabricSpec {
    Knit {
        gsm: f64,          // 克重 g/m²
        price_per_kg: f64, // 面料单价 /kg
        #[serde(default = "default_pieces_per_marker")]
        pieces_per_marker: u32, // 单床唛架件数
    },
    Woven {
        #[serde(default)]
        pattern_repeat: f64, // 花型循环 inch, 素色为 0
        price_per_yard: f64,
    },
    Denim {
        fabric_weight_oz: f64, // 面料克重 oz/sq yd
        price_per_yard: f64,
    },
}

fn default_pieces_per_marker() -> u32 {
    1
}

impl FabricSpec {
    pub fn garment_type(&self) -> GarmentType {
        match self {
            FabricSpec::Knit { .. } => GarmentType::Knit,
            FabricSpec::Woven { .. } => GarmentType::Woven,
            FabricSpec::Denim { .. } => GarmentType::Denim,
        }
    }
}

// ==========================================
// PatternSpec - 纸样规格 (已校验的强类型输入)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub pattern_length: f64,    // 纸样长度
    pub pattern_width: f64,     // 纸样宽度
    pub fabric_width: f64,      // 门幅 (针织 cm, 梭织/牛仔 inch)
    pub marker_efficiency: f64, // 唛架利用率 %, (0,100]
    pub shrinkage_length: f64,  // 经向缩率 %, [0,50]
    pub shrinkage_width: f64,   // 纬向缩率 %, [0,50]
    pub wastage: f64,           // 损耗 %, [0,50]
    pub order_quantity: u64,    // 订单件数

    #[serde(flatten)]
    pub fabric: FabricSpec,
}

impl PatternSpec {
    pub fn garment_type(&self) -> GarmentType {
        self.fabric.garment_type()
    }
}

// ==========================================
// PatternInput - 表单/历史记录中的扁平输入
// ==========================================
// 款式标签为字符串, 款式专属字段均可缺失;
// 仅在校验通过后转换为 PatternSpec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternInput {
    pub garment_type: String,
    #[serde(default)]
    pub pattern_length: f64,
    #[serde(default)]
    pub pattern_width: f64,
    #[serde(default)]
    pub fabric_width: f64,
    #[serde(default)]
    pub marker_efficiency: f64,
    #[serde(default)]
    pub shrinkage_length: f64,
    #[serde(default)]
    pub shrinkage_width: f64,
    #[serde(default)]
    pub wastage: f64,
    #[serde(default)]
    pub order_quantity: u64,

    // ===== 款式专属字段 =====
    #[serde(default)]
    pub gsm: Option<f64>,
    #[serde(default)]
    pub fabric_weight: Option<f64>,
    #[serde(default)]
    pub pattern_repeat: Option<f64>,
    #[serde(default)]
    pub fabric_price_per_kg: Option<f64>,
    #[serde(default)]
    pub fabric_price_per_yard: Option<f64>,
    #[serde(default)]
    pub pieces_per_marker: Option<u32>,
}

impl PatternInput {
    /// 按指定款式族组装强类型规格
    ///
    /// 不做校验: 缺失的款式字段取 0, 由校验器负责拦截。
    pub fn to_spec(&self, garment_type: GarmentType) -> PatternSpec {
        let fabric = match garment_type {
            GarmentType::Knit => FabricSpec::Knit {
                gsm: self.gsm.unwrap_or(0.0),
                price_per_kg: self.fabric_price_per_kg.unwrap_or(0.0),
                pieces_per_marker: self.pieces_per_marker.unwrap_or(1).max(1),
            },
            GarmentType::Woven => FabricSpec::Woven {
                pattern_repeat: self.pattern_repeat.unwrap_or(0.0).max(0.0),
                price_per_yard: self.fabric_price_per_yard.unwrap_or(0.0),
            },
            GarmentType::Denim => FabricSpec::Denim {
                fabric_weight_oz: self.fabric_weight.unwrap_or(0.0),
                price_per_yard: self.fabric_price_per_yard.unwrap_or(0.0),
            },
        };

        PatternSpec {
            pattern_length: self.pattern_length,
            pattern_width: self.pattern_width,
            fabric_width: self.fabric_width,
            marker_efficiency: self.marker_efficiency,
            shrinkage_length: self.shrinkage_length,
            shrinkage_width: self.shrinkage_width,
            wastage: self.wastage,
            order_quantity: self.order_quantity,
            fabric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_json_is_flat_and_tagged() {
        let json = r#"{
            "garment_type": "woven",
            "pattern_length": 30.0,
            "pattern_width": 22.0,
            "fabric_width": 58.0,
            "marker_efficiency": 78.0,
            "shrinkage_length": 3.0,
            "shrinkage_width": 2.0,
            "wastage": 4.0,
            "order_quantity": 2000,
            "price_per_yard": 3.2
        }"#;

        let spec: PatternSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.garment_type(), GarmentType::Woven);
        assert_eq!(
            spec.fabric,
            FabricSpec::Woven {
                pattern_repeat: 0.0,
                price_per_yard: 3.2
            }
        );
    }

    #[test]
    fn test_input_to_knit_spec_defaults_marker_pieces() {
        let input = PatternInput {
            garment_type: "knit".to_string(),
            gsm: Some(180.0),
            fabric_price_per_kg: Some(8.5),
            ..Default::default()
        };

        let spec = input.to_spec(GarmentType::Knit);
        assert_eq!(
            spec.fabric,
            FabricSpec::Knit {
                gsm: 180.0,
                price_per_kg: 8.5,
                pieces_per_marker: 1
            }
        );
    }
}
