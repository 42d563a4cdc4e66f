// ==========================================
// 金属生产LCA评估仪表盘 - 配置层
// ==========================================
// 职责: 系数表与运行配置, 作为显式配置数据注入引擎/API
// ==========================================

pub mod dashboard_config;
pub mod lca_profiles;

// 重导出
pub use dashboard_config::DashboardConfig;
pub use lca_profiles::{LcaProfileTable, MetalProfile};
