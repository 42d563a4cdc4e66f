// ==========================================
// 金属生产LCA评估仪表盘 - 报告生成 API (模拟)
// ==========================================
// 职责: 报告面板状态机与报告生成(模拟)
// 状态机: IDLE → GENERATING → GENERATED → IDLE
// 报告内容为固定目录, 不随方案数据变化;
// 网关失败同样进入GENERATED, 送达情况显式回传
// ==========================================

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::report::{GeneratedReport, ReportOptions, ReportSection};
use crate::domain::types::ReportPanelState;
use crate::gateway::BackendGateway;

// ==========================================
// ReportApi - 报告生成 API
// ==========================================

/// 报告生成API
///
/// 职责：
/// 1. 报告面板状态机维护(IDLE/GENERATING/GENERATED)
/// 2. 网关提交与固定延迟并行等待
/// 3. 固定目录报告的组装与留存(仅内存)
pub struct ReportApi {
    panel_state: Mutex<ReportPanelState>,
    generated: Mutex<Option<GeneratedReport>>,
    gateway: Arc<dyn BackendGateway>,
    config: DashboardConfig,
}

impl ReportApi {
    /// 创建新的ReportApi实例
    ///
    /// # 参数
    /// - gateway: 后端网关
    /// - config: 运行配置(模拟延迟)
    pub fn new(gateway: Arc<dyn BackendGateway>, config: DashboardConfig) -> Self {
        Self {
            panel_state: Mutex::new(ReportPanelState::Idle),
            generated: Mutex::new(None),
            gateway,
            config,
        }
    }

    /// 当前面板状态
    pub fn report_state(&self) -> ApiResult<ReportPanelState> {
        let state = self.lock_state()?;
        Ok(*state)
    }

    /// 最近生成的报告
    pub fn generated_report(&self) -> ApiResult<Option<GeneratedReport>> {
        let generated = self
            .generated
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(generated.clone())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 触发报告生成
    ///
    /// # 流程
    /// 1. IDLE → GENERATING (其他状态触发返回状态转换错误)
    /// 2. 网关提交与固定延迟并行等待; 网关失败记录日志并回传
    /// 3. 组装固定目录报告, GENERATING → GENERATED, 返回报告
    pub async fn generate_report(&self, options: ReportOptions) -> ApiResult<GeneratedReport> {
        // 1. IDLE → GENERATING
        {
            let mut state = self.lock_state()?;
            if *state != ReportPanelState::Idle {
                return Err(ApiError::InvalidStateTransition {
                    from: state.to_string(),
                    to: ReportPanelState::Generating.to_string(),
                });
            }
            *state = ReportPanelState::Generating;
        }

        tracing::info!("报告生成开始: format={}", options.format);

        // 2. 网关提交与固定延迟并行; 生成时长始终等于配置延迟
        let (gateway_result, _) = futures::join!(
            self.gateway.submit_report_request(&options),
            tokio::time::sleep(self.config.report_delay()),
        );

        let (backend_delivered, backend_error) = match gateway_result {
            Ok(()) => (true, None),
            Err(e) => {
                tracing::warn!("报告接口未送达(生成继续完成): {}", e);
                (false, Some(e.to_string()))
            }
        };

        // 3. 组装固定目录报告
        let sections = ReportSection::standard_sections();
        let report = GeneratedReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().naive_utc(),
            format: options.format,
            include_charts: options.include_charts,
            include_comparison: options.include_comparison,
            total_pages: sections.iter().map(|s| s.pages).sum(),
            total_charts: sections.iter().map(|s| s.charts).sum(),
            sections,
            backend_delivered,
            backend_error,
        };

        {
            let mut generated = self
                .generated
                .lock()
                .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
            *generated = Some(report.clone());
        }
        {
            let mut state = self.lock_state()?;
            *state = ReportPanelState::Generated;
        }

        tracing::info!(
            "报告生成完成: report_id={}, backend_delivered={}",
            report.report_id,
            report.backend_delivered
        );

        Ok(report)
    }

    /// 重置面板以生成新报告
    ///
    /// GENERATED → IDLE; IDLE下重置为幂等空操作;
    /// GENERATING中不可重置
    pub fn reset_report(&self) -> ApiResult<()> {
        let mut state = self.lock_state()?;
        match *state {
            ReportPanelState::Generated | ReportPanelState::Idle => {
                *state = ReportPanelState::Idle;
            }
            ReportPanelState::Generating => {
                return Err(ApiError::InvalidStateTransition {
                    from: state.to_string(),
                    to: ReportPanelState::Idle.to_string(),
                });
            }
        }
        drop(state);

        let mut generated = self
            .generated
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        *generated = None;

        Ok(())
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn lock_state(&self) -> ApiResult<std::sync::MutexGuard<'_, ReportPanelState>> {
        self.panel_state
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }
}
