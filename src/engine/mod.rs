// ==========================================
// 金属生产LCA评估仪表盘 - 引擎层
// ==========================================
// 职责: KPI与物料流的纯计算, 系数全部来自配置层
// 引擎无状态、无副作用, 每次查询重新计算
// ==========================================

pub mod flow;
pub mod kpi;

// 重导出核心引擎
pub use flow::FlowEngine;
pub use kpi::KpiEngine;
