// ==========================================
// 服装 FOB 成本核算 - 可行性评分领域模型
// ==========================================

use crate::domain::types::{FeasibilityStatus, Recommendation};
use serde::{Deserialize, Serialize};

/// 单个评分因子 (名称 + 带符号分值), 保留应用顺序以便解释
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub impact: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityScore {
    pub score: i32, // [0, 100]
    pub status: FeasibilityStatus,
    pub recommendation: Recommendation,
    pub justification: String,
    pub factors: Vec<ScoreFactor>,
}

impl FeasibilityScore {
    /// 未截断前的分值合计 (100 + Σ impact)
    pub fn raw_score(&self) -> i32 {
        100 + self.factors.iter().map(|f| f.impact).sum::<i32>()
    }
}
