// ==========================================
// 金属生产LCA评估仪表盘 - 核心库
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 循环经济决策支持仪表盘 (前端渲染, 后端纯计算)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - LCA系数表与运行配置
pub mod config;

// 引擎层 - KPI与物料流纯计算
pub mod engine;

// 网关层 - 后端接口
pub mod gateway;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    EndOfLife, EnergySource, FlowKind, MaterialSource, Metal, ProcessStage, ReportPanelState,
    RunState, ScenarioType, TransportMode,
};

// 领域实体
pub use domain::{
    AnalysisRunResult, FlowEdge, GeneratedReport, InputConfiguration, KpiDelta, KpiResult,
    ReportOptions, ReportSection, Scenario, ScenarioComparison, ScenarioKpiEntry,
};

// 配置
pub use config::{DashboardConfig, LcaProfileTable, MetalProfile};

// 引擎
pub use engine::{FlowEngine, KpiEngine};

// 网关
pub use gateway::{BackendGateway, GatewayError, HttpBackendGateway, NoopBackendGateway};

// API
pub use api::{AnalysisApi, InputValidator, ReportApi, ScenarioApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "金属生产LCA评估仪表盘";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
