// ==========================================
// 服装 FOB 成本核算 - 配置管理器
// ==========================================
// 职责: 基准阈值覆写文件的定位、加载、合并与快照
// 存储: JSON 文件 (全部字段可选, 缺省沿用默认表)
// 说明: 核心计算不做 I/O, 文件读取只发生在本层
// ==========================================

use crate::config::benchmarks::{Benchmarks, RangeBenchmark, ShrinkageBenchmark};
use crate::domain::cost::CostBand;
use crate::domain::types::{CostCategory, GarmentType};
use crate::error::{CostingError, CostingResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// 覆写文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "APPAREL_FOB_CONFIG";

/// 默认配置目录下的文件位置
const CONFIG_DIR_NAME: &str = "apparel-fob";
const CONFIG_FILE_NAME: &str = "benchmarks.json";

// ==========================================
// BenchmarkOverrides - 覆写文件结构
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkOverrides {
    /// 仅列出的类目被覆写
    #[serde(default)]
    pub cost_bands: BTreeMap<CostCategory, CostBand>,

    #[serde(default)]
    pub margin: MarginBandOverrides,

    #[serde(default)]
    pub order_size: OrderSizeOverrides,

    #[serde(default)]
    pub marker_efficiency: HashMap<GarmentType, RangeBenchmark>,

    #[serde(default)]
    pub shrinkage: HashMap<GarmentType, ShrinkageBenchmark>,

    #[serde(default)]
    pub wastage: HashMap<GarmentType, RangeBenchmark>,
}

/// 利润档位覆写 (逐项可选)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarginBandOverrides {
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub healthy: Option<f64>,
    #[serde(default)]
    pub strong: Option<f64>,
    #[serde(default)]
    pub premium: Option<f64>,
}

/// 订单规模档位覆写 (逐项可选)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSizeOverrides {
    #[serde(default)]
    pub small: Option<u64>,
    #[serde(default)]
    pub medium: Option<u64>,
    #[serde(default)]
    pub large: Option<u64>,
}

impl BenchmarkOverrides {
    /// 合并到基准表之上
    pub fn apply(self, mut base: Benchmarks) -> Benchmarks {
        base.cost_bands.extend(self.cost_bands);

        let margin = &mut base.margin;
        margin.minimum = self.margin.minimum.unwrap_or(margin.minimum);
        margin.low = self.margin.low.unwrap_or(margin.low);
        margin.healthy = self.margin.healthy.unwrap_or(margin.healthy);
        margin.strong = self.margin.strong.unwrap_or(margin.strong);
        margin.premium = self.margin.premium.unwrap_or(margin.premium);

        let order = &mut base.order_size;
        order.small = self.order_size.small.unwrap_or(order.small);
        order.medium = self.order_size.medium.unwrap_or(order.medium);
        order.large = self.order_size.large.unwrap_or(order.large);

        for (garment_type, value) in self.marker_efficiency {
            base.marker_efficiency.set(garment_type, value);
        }
        for (garment_type, value) in self.shrinkage {
            base.shrinkage.set(garment_type, value);
        }
        for (garment_type, value) in self.wastage {
            base.wastage.set(garment_type, value);
        }

        base
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    benchmarks: Benchmarks,
    source: Option<PathBuf>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            benchmarks: Benchmarks::default(),
            source: None,
        }
    }
}

impl ConfigManager {
    /// 按优先级加载配置
    ///
    /// # 查找顺序
    /// 1. 显式路径 (必须存在)
    /// 2. 环境变量 APPAREL_FOB_CONFIG (必须存在)
    /// 3. <系统配置目录>/apparel-fob/benchmarks.json (存在才加载)
    /// 4. 内置默认表
    pub fn load(explicit: Option<&Path>) -> CostingResult<Self> {
        let env_value = std::env::var(CONFIG_PATH_ENV).ok();
        match Self::resolve_path(explicit, env_value.as_deref()) {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::info!("未找到基准覆写文件, 使用内置默认基准");
                Ok(Self::default())
            }
        }
    }

    /// 从指定文件加载
    pub fn from_path(path: &Path) -> CostingResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CostingError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let benchmarks = Self::parse_overrides(&raw)?;
        tracing::info!(path = %path.display(), "已加载基准覆写文件");

        Ok(Self {
            benchmarks,
            source: Some(path.to_path_buf()),
        })
    }

    /// 解析覆写 JSON 并合并到默认表, 合并后校验
    pub fn parse_overrides(raw: &str) -> CostingResult<Benchmarks> {
        let overrides: BenchmarkOverrides = serde_json::from_str(raw)?;
        let benchmarks = overrides.apply(Benchmarks::default());

        if let Err(e) = benchmarks.validate() {
            tracing::warn!("基准覆写校验失败: {}", e);
            return Err(e);
        }

        Ok(benchmarks)
    }

    /// 解析覆写文件路径
    ///
    /// 显式路径与环境变量指定的路径不检查存在性 (读取时报错),
    /// 默认位置只在文件存在时返回。
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(value));
        }

        Self::default_config_path().filter(|p| p.is_file())
    }

    /// 默认覆写文件位置
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    pub fn into_benchmarks(self) -> Benchmarks {
        self.benchmarks
    }

    /// 生效配置来源 (None 表示内置默认)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 生效基准表的 JSON 快照, 供导出/归档附带
    pub fn snapshot(&self) -> CostingResult<String> {
        Ok(serde_json::to_string_pretty(&self.benchmarks)?)
    }
}
