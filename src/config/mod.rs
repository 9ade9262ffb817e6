// ==========================================
// 服装 FOB 成本核算 - 配置层
// ==========================================
// 职责: 行业基准阈值表, 支持文件覆写
// 存储: 可选 JSON 覆写文件
// ==========================================

pub mod benchmarks;
pub mod config_manager;

// 重导出核心配置类型
pub use benchmarks::{
    default_cost_band, Benchmarks, FamilyBenchmarks, MarginBands, OrderSizeBands,
    RangeBenchmark, ShrinkageBenchmark, DEFAULT_COST_BANDS, DEFAULT_MARGIN_BANDS,
    DEFAULT_ORDER_SIZE_BANDS,
};
pub use config_manager::{BenchmarkOverrides, ConfigManager, CONFIG_PATH_ENV};
