// ==========================================
// 金属生产LCA评估仪表盘 - KPI结果实体
// ==========================================
// 职责: 六项可持续性指标与双方案对比结果
// 生命周期: 派生数据, 每次查询重新计算, 不缓存不落盘
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::ScenarioType;

// ==========================================
// KpiResult - 六项可持续性指标
// ==========================================

/// KPI计算结果
///
/// 全部指标由输入配置+方案类型闭式推导, 数值保留两位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiResult {
    /// CO2足迹(kg CO2-eq)
    pub co2_footprint_kg: f64,

    /// 能源消耗(GJ)
    pub energy_use_gj: f64,

    /// 再生料占比(%)
    pub recycled_content_pct: f64,

    /// 水耗(L)
    pub water_use_l: f64,

    /// 循环性指数(%)
    pub circularity_index_pct: f64,

    /// 成本节约(USD)
    pub cost_savings_usd: f64,
}

// ==========================================
// ScenarioComparison - 双方案KPI对比
// ==========================================

/// 单方案KPI条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioKpiEntry {
    /// 方案名称
    pub name: String,

    /// 方案类型
    pub scenario_type: ScenarioType,

    /// KPI结果
    pub kpis: KpiResult,
}

/// KPI差值(线性 - 循环, 正值表示循环方案更优)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDelta {
    /// CO2足迹差值(kg)
    pub co2_footprint_kg: f64,

    /// 能耗差值(GJ)
    pub energy_use_gj: f64,

    /// 水耗差值(L)
    pub water_use_l: f64,
}

/// 双方案对比结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// 线性方案条目
    pub conventional: ScenarioKpiEntry,

    /// 循环方案条目
    pub circular: ScenarioKpiEntry,

    /// 指标差值
    pub delta: KpiDelta,
}
