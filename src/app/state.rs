// ==========================================
// 金属生产LCA评估仪表盘 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{AnalysisApi, InputValidator, ReportApi, ScenarioApi};
use crate::config::{DashboardConfig, LcaProfileTable};
use crate::engine::{FlowEngine, KpiEngine};
use crate::gateway::{BackendGateway, HttpBackendGateway};

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 运行配置
    pub config: DashboardConfig,

    /// LCA系数表(供前端查询展示)
    pub profiles: LcaProfileTable,

    /// 方案管理API
    pub scenario_api: Arc<ScenarioApi>,

    /// 分析运行API
    pub analysis_api: Arc<AnalysisApi>,

    /// 报告生成API
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// 创建新的AppState实例(HTTP网关)
    ///
    /// # 参数
    /// - config: 运行配置
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 构造LCA系数表与两个计算引擎
    /// 2. 构造HTTP后端网关
    /// 3. 创建所有API实例
    pub fn new(config: DashboardConfig) -> Result<Self, String> {
        let gateway: Arc<dyn BackendGateway> = Arc::new(HttpBackendGateway::new(&config));
        Self::new_with_gateway(config, gateway)
    }

    /// 创建新的AppState实例(注入网关, 供测试/离线使用)
    pub fn new_with_gateway(
        config: DashboardConfig,
        gateway: Arc<dyn BackendGateway>,
    ) -> Result<Self, String> {
        tracing::info!("初始化AppState...");

        // ==========================================
        // 初始化配置与Engine层
        // ==========================================

        let profiles = LcaProfileTable::default();
        let kpi_engine = Arc::new(KpiEngine::new(profiles.clone()));
        let flow_engine = Arc::new(FlowEngine::new(profiles.clone()));

        // 输入校验器
        let validator = Arc::new(InputValidator::new());

        // ==========================================
        // 初始化API层
        // ==========================================

        // 方案管理API(播种默认方案对)
        let scenario_api = Arc::new(ScenarioApi::new(kpi_engine.clone(), flow_engine.clone()));

        // 分析运行API
        let analysis_api = Arc::new(AnalysisApi::new(
            validator,
            gateway.clone(),
            kpi_engine,
            flow_engine,
            config.clone(),
        ));

        // 报告生成API
        let report_api = Arc::new(ReportApi::new(gateway, config.clone()));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            config,
            profiles,
            scenario_api,
            analysis_api,
            report_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(DashboardConfig::default()).unwrap();
        assert_eq!(state.scenario_api.list_scenarios().unwrap().len(), 2);
        assert_eq!(state.profiles.aluminum.co2_kg_per_ton, 11.9);
    }
}
