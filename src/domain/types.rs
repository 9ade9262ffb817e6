// ==========================================
// 服装 FOB 成本核算 - 领域类型定义
// ==========================================
// 职责: 款式族、成本类目、状态等级等枚举
// 序列化格式与导出/持久化协作方保持一致
// ==========================================

use crate::error::CostingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 款式族 (Garment Type)
// ==========================================
// 每个款式族对应一套用料公式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Knit,  // 针织 (T恤、Polo), 按 GSM 计重
    Woven, // 梭织 (衬衫、女装), 按码计长
    Denim, // 牛仔 (牛仔裤、夹克), 按码计长并折算重量
}

impl GarmentType {
    pub const ALL: [GarmentType; 3] = [GarmentType::Knit, GarmentType::Woven, GarmentType::Denim];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Knit => "knit",
            GarmentType::Woven => "woven",
            GarmentType::Denim => "denim",
        }
    }

    /// 该款式族用料的原生单位
    pub fn unit(&self) -> ConsumptionUnit {
        match self {
            GarmentType::Knit => ConsumptionUnit::Kg,
            GarmentType::Woven | GarmentType::Denim => ConsumptionUnit::Yards,
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GarmentType {
    type Err = CostingError;

    /// 仅接受小写标签 knit / woven / denim, 其余直接报错, 不回退
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knit" => Ok(GarmentType::Knit),
            "woven" => Ok(GarmentType::Woven),
            "denim" => Ok(GarmentType::Denim),
            _ => Err(CostingError::UnknownGarmentType(s.to_string())),
        }
    }
}

// ==========================================
// 用料单位 (Consumption Unit)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionUnit {
    Kg,
    Yards,
}

impl fmt::Display for ConsumptionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumptionUnit::Kg => write!(f, "kg"),
            ConsumptionUnit::Yards => write!(f, "yards"),
        }
    }
}

// ==========================================
// 成本类目 (Cost Category)
// ==========================================
// 顺序即展示顺序, 也是汇总折叠顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Fabric,    // 面料
    Trims,     // 辅料
    Packaging, // 包装
    Cm,        // 裁剪缝制 (Cut & Make)
    Washing,   // 水洗/印花/绣花
    Testing,   // 检测与合规
    Logistics, // 物流与单证
    Overhead,  // 管理费用分摊
}

impl CostCategory {
    pub const ALL: [CostCategory; 8] = [
        CostCategory::Fabric,
        CostCategory::Trims,
        CostCategory::Packaging,
        CostCategory::Cm,
        CostCategory::Washing,
        CostCategory::Testing,
        CostCategory::Logistics,
        CostCategory::Overhead,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CostCategory::Fabric => "fabric",
            CostCategory::Trims => "trims",
            CostCategory::Packaging => "packaging",
            CostCategory::Cm => "cm",
            CostCategory::Washing => "washing",
            CostCategory::Testing => "testing",
            CostCategory::Logistics => "logistics",
            CostCategory::Overhead => "overhead",
        }
    }

    /// 默认展示名称
    pub fn default_label(&self) -> &'static str {
        match self {
            CostCategory::Fabric => "Fabric",
            CostCategory::Trims => "Trims & Accessories",
            CostCategory::Packaging => "Packaging",
            CostCategory::Cm => "CM / Making",
            CostCategory::Washing => "Washing / Print / Embellishment",
            CostCategory::Testing => "Testing & Compliance",
            CostCategory::Logistics => "Logistics & Documentation",
            CostCategory::Overhead => "Overhead Allocation",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// 成本状态等级 (Cost Status)
// ==========================================
// 顺序: Normal < Low < Typical < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostStatus {
    Normal,
    Low,
    Typical,
    High,
    Critical,
}

impl CostStatus {
    /// 是否需要标记预警
    pub fn is_flagged(&self) -> bool {
        matches!(self, CostStatus::High | CostStatus::Critical)
    }
}

impl fmt::Display for CostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostStatus::Normal => write!(f, "normal"),
            CostStatus::Low => write!(f, "low"),
            CostStatus::Typical => write!(f, "typical"),
            CostStatus::High => write!(f, "high"),
            CostStatus::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 成本驱动类型 (Cost Driver)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostDriver {
    #[serde(rename = "Fabric-Driven")]
    FabricDriven,
    #[serde(rename = "Labor-Driven")]
    LaborDriven,
    #[serde(rename = "Processing-Driven")]
    ProcessingDriven,
    Balanced,
}

impl fmt::Display for CostDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostDriver::FabricDriven => write!(f, "Fabric-Driven"),
            CostDriver::LaborDriven => write!(f, "Labor-Driven"),
            CostDriver::ProcessingDriven => write!(f, "Processing-Driven"),
            CostDriver::Balanced => write!(f, "Balanced"),
        }
    }
}

// ==========================================
// 订单规模 (Order Size)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderSizeCategory {
    Small,
    Medium,
    Large,
    Bulk,
}

impl OrderSizeCategory {
    /// 与规模档位一一对应的生产效率标签
    pub fn efficiency(&self) -> OrderEfficiency {
        match self {
            OrderSizeCategory::Small => OrderEfficiency::Low,
            OrderSizeCategory::Medium => OrderEfficiency::Standard,
            OrderSizeCategory::Large => OrderEfficiency::High,
            OrderSizeCategory::Bulk => OrderEfficiency::Maximum,
        }
    }
}

impl fmt::Display for OrderSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSizeCategory::Small => write!(f, "Small"),
            OrderSizeCategory::Medium => write!(f, "Medium"),
            OrderSizeCategory::Large => write!(f, "Large"),
            OrderSizeCategory::Bulk => write!(f, "Bulk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEfficiency {
    Low,
    Standard,
    High,
    Maximum,
}

impl fmt::Display for OrderEfficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderEfficiency::Low => write!(f, "Low"),
            OrderEfficiency::Standard => write!(f, "Standard"),
            OrderEfficiency::High => write!(f, "High"),
            OrderEfficiency::Maximum => write!(f, "Maximum"),
        }
    }
}

// ==========================================
// 利润健康度 (Margin Health)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarginHealth {
    Critical,
    Low,
    #[serde(rename = "Below Target")]
    BelowTarget,
    Healthy,
    Strong,
}

impl fmt::Display for MarginHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginHealth::Critical => write!(f, "Critical"),
            MarginHealth::Low => write!(f, "Low"),
            MarginHealth::BelowTarget => write!(f, "Below Target"),
            MarginHealth::Healthy => write!(f, "Healthy"),
            MarginHealth::Strong => write!(f, "Strong"),
        }
    }
}

// ==========================================
// 可行性状态与建议 (Feasibility)
// ==========================================
// 顺序: Red < Amber < Green
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeasibilityStatus {
    Red,
    Amber,
    Green,
}

impl FeasibilityStatus {
    pub fn recommendation(&self) -> Recommendation {
        match self {
            FeasibilityStatus::Red => Recommendation::Reject,
            FeasibilityStatus::Amber => Recommendation::Renegotiate,
            FeasibilityStatus::Green => Recommendation::Accept,
        }
    }
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeasibilityStatus::Red => write!(f, "Red"),
            FeasibilityStatus::Amber => write!(f, "Amber"),
            FeasibilityStatus::Green => write!(f, "Green"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Reject,
    Renegotiate,
    Accept,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Reject => write!(f, "Reject"),
            Recommendation::Renegotiate => write!(f, "Renegotiate"),
            Recommendation::Accept => write!(f, "Accept"),
        }
    }
}

// ==========================================
// 情景风险等级 (Scenario Risk Level)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioRiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ScenarioRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioRiskLevel::Low => write!(f, "Low"),
            ScenarioRiskLevel::Medium => write!(f, "Medium"),
            ScenarioRiskLevel::High => write!(f, "High"),
            ScenarioRiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

// ==========================================
// 币种 (Currency) - 仅作标签, 不做汇率换算
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Bdt,
    Inr,
    Cny,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Bdt => "৳",
            Currency::Inr => "₹",
            Currency::Cny => "¥",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Bdt => "Bangladeshi Taka",
            Currency::Inr => "Indian Rupee",
            Currency::Cny => "Chinese Yuan",
        }
    }

    /// 带符号的两位小数金额, 供导出协作方直接使用
    pub fn format_amount(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        format!("{}{:.2}", self.symbol(), value)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Gbp => write!(f, "GBP"),
            Currency::Bdt => write!(f, "BDT"),
            Currency::Inr => write!(f, "INR"),
            Currency::Cny => write!(f, "CNY"),
        }
    }
}

// ==========================================
// 贸易术语 (Incoterm) - 仅作标签
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    #[default]
    Fob,
    Cif,
    Cfr,
    Exw,
    Ddp,
}

impl Incoterm {
    pub fn description(&self) -> &'static str {
        match self {
            Incoterm::Fob => "Free On Board",
            Incoterm::Cif => "Cost, Insurance & Freight",
            Incoterm::Cfr => "Cost & Freight",
            Incoterm::Exw => "Ex Works",
            Incoterm::Ddp => "Delivered Duty Paid",
        }
    }
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incoterm::Fob => write!(f, "FOB"),
            Incoterm::Cif => write!(f, "CIF"),
            Incoterm::Cfr => write!(f, "CFR"),
            Incoterm::Exw => write!(f, "EXW"),
            Incoterm::Ddp => write!(f, "DDP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garment_type_parse() {
        assert_eq!("knit".parse::<GarmentType>().unwrap(), GarmentType::Knit);
        assert_eq!("denim".parse::<GarmentType>().unwrap(), GarmentType::Denim);
        assert_eq!("woven".parse::<GarmentType>().unwrap(), GarmentType::Woven);

        let err = "silk".parse::<GarmentType>().unwrap_err();
        assert!(matches!(err, CostingError::UnknownGarmentType(tag) if tag == "silk"));

        // 大小写或空白不同的标签同样拒绝
        for tag in ["KNIT", "Knit", " denim ", "Woven"] {
            let err = tag.parse::<GarmentType>().unwrap_err();
            assert!(matches!(err, CostingError::UnknownGarmentType(ref t) if t == tag));
        }
    }

    #[test]
    fn test_garment_unit() {
        assert_eq!(GarmentType::Knit.unit(), ConsumptionUnit::Kg);
        assert_eq!(GarmentType::Woven.unit(), ConsumptionUnit::Yards);
        assert_eq!(GarmentType::Denim.unit(), ConsumptionUnit::Yards);
    }

    #[test]
    fn test_cost_status_ordering_and_flags() {
        assert!(CostStatus::Critical > CostStatus::High);
        assert!(CostStatus::Typical > CostStatus::Low);
        assert!(CostStatus::High.is_flagged());
        assert!(CostStatus::Critical.is_flagged());
        assert!(!CostStatus::Typical.is_flagged());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&CostDriver::FabricDriven).unwrap(),
            "\"Fabric-Driven\""
        );
        assert_eq!(
            serde_json::to_string(&MarginHealth::BelowTarget).unwrap(),
            "\"Below Target\""
        );
        assert_eq!(serde_json::to_string(&Currency::Bdt).unwrap(), "\"BDT\"");
        assert_eq!(serde_json::to_string(&CostCategory::Cm).unwrap(), "\"cm\"");
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::Usd.format_amount(5.0), "$5.00");
        assert_eq!(Currency::Eur.format_amount(3.456), "€3.46");
        assert_eq!(Currency::Gbp.format_amount(f64::NAN), "£0.00");
    }

    #[test]
    fn test_status_recommendation() {
        assert_eq!(FeasibilityStatus::Green.recommendation(), Recommendation::Accept);
        assert_eq!(FeasibilityStatus::Amber.recommendation(), Recommendation::Renegotiate);
        assert_eq!(FeasibilityStatus::Red.recommendation(), Recommendation::Reject);
    }
}
