// ==========================================
// 金属生产LCA评估仪表盘 - 后端网关层
// ==========================================
// 职责: 定义后端接口 trait, 实现依赖倒置
// 说明: API 层依赖 trait, HTTP 实现与测试替身均可注入
// 约定: 网关错误以 Result 显式回传, 由调用方决定处置策略,
//       不允许静默丢弃
// ==========================================

use async_trait::async_trait;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::domain::report::ReportOptions;
use crate::domain::scenario::InputConfiguration;

// ==========================================
// 网关错误类型
// ==========================================

/// 后端网关错误
#[derive(Error, Debug)]
pub enum GatewayError {
    /// 请求未能发出或传输失败
    #[error("请求发送失败: {0}")]
    RequestFailed(String),

    /// 后端返回非成功状态码
    #[error("后端返回异常状态: {0}")]
    BadStatus(u16),
}

/// Result 类型别名
pub type GatewayResult<T> = Result<T, GatewayError>;

// ==========================================
// 后端网关 Trait
// ==========================================

/// 后端网关
///
/// 两个接口均为 POST + JSON 请求体, 响应体不参与业务语义;
/// 送达与否通过返回值显式上报
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// 提交LCA运行请求(请求体 = 输入配置)
    async fn submit_lca_run(&self, inputs: &InputConfiguration) -> GatewayResult<()>;

    /// 提交报告生成请求(请求体 = 报告选项)
    async fn submit_report_request(&self, options: &ReportOptions) -> GatewayResult<()>;
}

// ==========================================
// HttpBackendGateway - HTTP 实现
// ==========================================

/// HTTP 后端网关
pub struct HttpBackendGateway {
    client: reqwest::Client,
    lca_run_endpoint: String,
    report_endpoint: String,
}

impl HttpBackendGateway {
    /// 从运行配置构造
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            lca_run_endpoint: config.lca_run_endpoint.clone(),
            report_endpoint: config.report_endpoint.clone(),
        }
    }

    async fn post_json<T: serde::Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> GatewayResult<()> {
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::BadStatus(response.status().as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn submit_lca_run(&self, inputs: &InputConfiguration) -> GatewayResult<()> {
        self.post_json(&self.lca_run_endpoint, inputs).await
    }

    async fn submit_report_request(&self, options: &ReportOptions) -> GatewayResult<()> {
        self.post_json(&self.report_endpoint, options).await
    }
}

// ==========================================
// NoopBackendGateway - 空实现
// ==========================================

/// 空网关: 直接成功, 用于离线运行与测试
pub struct NoopBackendGateway;

#[async_trait]
impl BackendGateway for NoopBackendGateway {
    async fn submit_lca_run(&self, _inputs: &InputConfiguration) -> GatewayResult<()> {
        Ok(())
    }

    async fn submit_report_request(&self, _options: &ReportOptions) -> GatewayResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_gateway_always_succeeds() {
        let gateway = NoopBackendGateway;
        let inputs = InputConfiguration::conventional_default();
        assert!(gateway.submit_lca_run(&inputs).await.is_ok());
        assert!(gateway
            .submit_report_request(&ReportOptions::default())
            .await
            .is_ok());
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::BadStatus(502);
        assert!(err.to_string().contains("502"));
    }
}
