// ==========================================
// 服装 FOB 成本核算 - 统一错误类型
// ==========================================
// 职责: 定义核心计算与配置层的错误类型
// 原则: 所有错误同步返回调用方,不重试,不吞错
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 核算错误类型
///
/// 纯计算没有瞬时故障,因此没有"可重试"分类;
/// 校验失败与未知款式是调用方需要展示给用户的两类主要错误。
#[derive(Error, Debug)]
pub enum CostingError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 计算前校验失败 (字段级消息, 保持校验顺序)
    #[error("validation failed: {}", messages.join("; "))]
    Validation { messages: Vec<String> },

    /// 款式标签不在 {knit, woven, denim} 之内
    #[error("unknown garment type: {0}")]
    UnknownGarmentType(String),

    // ==========================================
    // 配置错误
    // ==========================================
    /// 基准阈值不满足递增约束
    #[error("invalid benchmark configuration: {0}")]
    InvalidBenchmark(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CostingError {
    /// 由校验消息列表构造错误
    pub fn validation(messages: Vec<String>) -> Self {
        CostingError::Validation { messages }
    }

    /// 校验消息 (非校验错误返回空切片)
    pub fn messages(&self) -> &[String] {
        match self {
            CostingError::Validation { messages } => messages,
            _ => &[],
        }
    }
}

/// 核算层 Result 类型别名
pub type CostingResult<T> = Result<T, CostingError>;
