// ==========================================
// 金属生产LCA评估仪表盘 - 分析运行结果实体
// ==========================================
// 职责: 一次LCA运行的产出(KPI + 物料流 + 接口送达情况)
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::flow::FlowEdge;
use crate::domain::kpi::KpiResult;
use crate::domain::types::ScenarioType;

/// 一次LCA分析运行的结果
///
/// KPI与物料流在本地重新计算; 后端接口结果不影响完成,
/// 但送达情况显式回传, 不做静默丢弃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRunResult {
    /// 运行ID
    pub run_id: String,

    /// 完成时间
    pub completed_at: NaiveDateTime,

    /// 方案名称
    pub scenario_name: String,

    /// 方案类型
    pub scenario_type: ScenarioType,

    /// KPI结果
    pub kpis: KpiResult,

    /// 物料流边列表
    pub flows: Vec<FlowEdge>,

    /// LCA接口是否送达
    pub backend_delivered: bool,

    /// LCA接口错误(送达失败时)
    pub backend_error: Option<String>,
}
