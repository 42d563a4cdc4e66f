// ==========================================
// ReportApi 集成测试
// ==========================================
// 测试目标: 验证报告面板状态机与固定目录报告的生成
// 状态机: IDLE → GENERATING → GENERATED → IDLE
// ==========================================

use std::sync::Arc;

use metal_lca_dashboard::api::{ApiError, ReportApi};
use metal_lca_dashboard::domain::types::ReportPanelState;
use metal_lca_dashboard::domain::ReportOptions;
use metal_lca_dashboard::gateway::{BackendGateway, NoopBackendGateway};

#[path = "test_helpers.rs"]
mod test_helpers;
use test_helpers::{fast_test_config, FailingGateway};

// ==========================================
// 测试辅助函数
// ==========================================

fn build_api(gateway: Arc<dyn BackendGateway>) -> ReportApi {
    ReportApi::new(gateway, fast_test_config())
}

// ==========================================
// 正常生成
// ==========================================

#[tokio::test]
async fn test_generate_reaches_generated() {
    metal_lca_dashboard::logging::init_test();

    let api = build_api(Arc::new(NoopBackendGateway));

    assert_eq!(api.report_state().unwrap(), ReportPanelState::Idle);

    let report = api.generate_report(ReportOptions::default()).await.unwrap();

    assert_eq!(api.report_state().unwrap(), ReportPanelState::Generated);
    assert_eq!(report.sections.len(), 8);
    assert_eq!(report.total_pages, 22);
    assert_eq!(report.total_charts, 8);
    assert_eq!(report.format, "PDF");
    assert!(report.backend_delivered);

    // 生成结果可查询
    let stored = api.generated_report().unwrap().unwrap();
    assert_eq!(stored.report_id, report.report_id);
}

// ==========================================
// 网关失败仍进入GENERATED
// ==========================================

#[tokio::test]
async fn test_gateway_failure_still_generates() {
    metal_lca_dashboard::logging::init_test();

    let api = build_api(Arc::new(FailingGateway));

    let report = api.generate_report(ReportOptions::default()).await.unwrap();

    assert_eq!(api.report_state().unwrap(), ReportPanelState::Generated);
    assert!(!report.backend_delivered);
    assert!(report.backend_error.as_deref().unwrap().contains("503"));
    // 报告内容与送达情况无关
    assert_eq!(report.total_pages, 22);
}

// ==========================================
// 状态机转换约束
// ==========================================

#[tokio::test]
async fn test_generate_while_generating_rejected() {
    let api = Arc::new(build_api(Arc::new(NoopBackendGateway)));

    let first = {
        let api = api.clone();
        tokio::spawn(async move { api.generate_report(ReportOptions::default()).await })
    };

    // 等待第一次生成进入GENERATING
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    assert_eq!(api.report_state().unwrap(), ReportPanelState::Generating);

    match api.generate_report(ReportOptions::default()).await {
        Err(ApiError::InvalidStateTransition { from, .. }) => {
            assert_eq!(from, "GENERATING");
        }
        _ => panic!("Expected InvalidStateTransition"),
    }

    assert!(first.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_generated_blocks_regenerate_until_reset() {
    let api = build_api(Arc::new(NoopBackendGateway));

    api.generate_report(ReportOptions::default()).await.unwrap();

    // GENERATED下直接再次生成被拒绝
    assert!(matches!(
        api.generate_report(ReportOptions::default()).await,
        Err(ApiError::InvalidStateTransition { .. })
    ));

    // 重置后回到IDLE, 留存报告清空, 可再次生成
    api.reset_report().unwrap();
    assert_eq!(api.report_state().unwrap(), ReportPanelState::Idle);
    assert!(api.generated_report().unwrap().is_none());
    assert!(api.generate_report(ReportOptions::default()).await.is_ok());
}

#[tokio::test]
async fn test_reset_while_generating_rejected() {
    let api = Arc::new(build_api(Arc::new(NoopBackendGateway)));

    let task = {
        let api = api.clone();
        tokio::spawn(async move { api.generate_report(ReportOptions::default()).await })
    };

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    assert!(matches!(
        api.reset_report(),
        Err(ApiError::InvalidStateTransition { .. })
    ));

    assert!(task.await.unwrap().is_ok());
}

// ==========================================
// 自定义选项
// ==========================================

#[tokio::test]
async fn test_options_passed_through() {
    let api = build_api(Arc::new(NoopBackendGateway));

    let options = ReportOptions {
        format: "PDF".to_string(),
        include_charts: false,
        include_comparison: false,
    };
    let report = api.generate_report(options).await.unwrap();

    assert!(!report.include_charts);
    assert!(!report.include_comparison);
}
