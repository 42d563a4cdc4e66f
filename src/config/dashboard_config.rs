// ==========================================
// 金属生产LCA评估仪表盘 - 运行配置
// ==========================================
// 职责: 后端接口地址与模拟延迟配置
// 注意: 接口地址/延迟不属于功能契约, 仅为联调与测试提供注入点
// ==========================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 仪表盘运行配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// LCA运行接口地址
    pub lca_run_endpoint: String,

    /// 报告生成接口地址
    pub report_endpoint: String,

    /// LCA运行模拟延迟(毫秒)
    pub run_delay_ms: u64,

    /// 报告生成模拟延迟(毫秒)
    pub report_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lca_run_endpoint: "http://localhost:8080/api/lca/run".to_string(),
            report_endpoint: "http://localhost:8080/api/reports/generate".to_string(),
            run_delay_ms: 2000,
            report_delay_ms: 3000,
        }
    }
}

impl DashboardConfig {
    /// LCA运行模拟延迟
    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }

    /// 报告生成模拟延迟
    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = DashboardConfig::default();
        assert_eq!(config.run_delay(), Duration::from_millis(2000));
        assert_eq!(config.report_delay(), Duration::from_millis(3000));
    }
}
