// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的快速配置与网关测试替身
// ==========================================

use async_trait::async_trait;

use metal_lca_dashboard::config::DashboardConfig;
use metal_lca_dashboard::domain::{InputConfiguration, ReportOptions};
use metal_lca_dashboard::gateway::{BackendGateway, GatewayError, GatewayResult};

/// 测试用运行配置（缩短模拟延迟, 避免拖慢测试）
pub fn fast_test_config() -> DashboardConfig {
    DashboardConfig {
        run_delay_ms: 20,
        report_delay_ms: 20,
        ..DashboardConfig::default()
    }
}

/// 始终失败的网关（模拟后端不可达）
pub struct FailingGateway;

#[async_trait]
impl BackendGateway for FailingGateway {
    async fn submit_lca_run(&self, _inputs: &InputConfiguration) -> GatewayResult<()> {
        Err(GatewayError::RequestFailed("connection refused".to_string()))
    }

    async fn submit_report_request(&self, _options: &ReportOptions) -> GatewayResult<()> {
        Err(GatewayError::BadStatus(503))
    }
}
