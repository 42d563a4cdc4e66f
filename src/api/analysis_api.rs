// ==========================================
// 金属生产LCA评估仪表盘 - 分析运行 API
// ==========================================
// 职责: LCA运行触发的状态机与结果产出
// 状态机: IDLE → RUNNING → IDLE (固定延迟后回落, 与接口结果无关)
// 校验失败时运行不启动; 网关结果显式回传, 不静默丢弃
// ==========================================

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::InputValidator;
use crate::config::DashboardConfig;
use crate::domain::analysis::AnalysisRunResult;
use crate::domain::scenario::Scenario;
use crate::domain::types::RunState;
use crate::engine::{FlowEngine, KpiEngine};
use crate::gateway::BackendGateway;

// ==========================================
// AnalysisApi - 分析运行 API
// ==========================================

/// 分析运行API
///
/// 职责：
/// 1. 运行前输入校验(未通过不启动)
/// 2. 运行状态机维护(IDLE/RUNNING)
/// 3. 网关提交与固定延迟并行等待
/// 4. 本地KPI/物料流计算与结果组装
pub struct AnalysisApi {
    run_state: Mutex<RunState>,
    validator: Arc<InputValidator>,
    gateway: Arc<dyn BackendGateway>,
    kpi_engine: Arc<KpiEngine>,
    flow_engine: Arc<FlowEngine>,
    config: DashboardConfig,
}

impl AnalysisApi {
    /// 创建新的AnalysisApi实例
    ///
    /// # 参数
    /// - validator: 输入校验器
    /// - gateway: 后端网关
    /// - kpi_engine: KPI计算引擎
    /// - flow_engine: 物料流生成引擎
    /// - config: 运行配置(模拟延迟)
    pub fn new(
        validator: Arc<InputValidator>,
        gateway: Arc<dyn BackendGateway>,
        kpi_engine: Arc<KpiEngine>,
        flow_engine: Arc<FlowEngine>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            run_state: Mutex::new(RunState::Idle),
            validator,
            gateway,
            kpi_engine,
            flow_engine,
            config,
        }
    }

    /// 当前运行状态
    pub fn run_state(&self) -> ApiResult<RunState> {
        let state = self.lock_state()?;
        Ok(*state)
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 触发一次LCA分析运行
    ///
    /// # 流程
    /// 1. 输入校验, 未通过直接返回违规明细, 状态保持IDLE
    /// 2. IDLE → RUNNING (运行中重复触发返回状态转换错误)
    /// 3. 网关提交与固定延迟并行等待; 网关失败记录日志并回传
    /// 4. 本地计算KPI/物料流, RUNNING → IDLE, 返回结果
    pub async fn run_analysis(&self, scenario: &Scenario) -> ApiResult<AnalysisRunResult> {
        // 1. 校验未通过则运行不启动
        self.validator.validate(&scenario.inputs)?;

        // 2. IDLE → RUNNING
        {
            let mut state = self.lock_state()?;
            if *state != RunState::Idle {
                return Err(ApiError::InvalidStateTransition {
                    from: state.to_string(),
                    to: RunState::Running.to_string(),
                });
            }
            *state = RunState::Running;
        }

        tracing::info!(
            "LCA分析运行开始: scenario={}, type={}",
            scenario.name,
            scenario.scenario_type
        );

        // 3. 网关提交与固定延迟并行; 运行时长始终等于配置延迟
        let (gateway_result, _) = futures::join!(
            self.gateway.submit_lca_run(&scenario.inputs),
            tokio::time::sleep(self.config.run_delay()),
        );

        let (backend_delivered, backend_error) = match gateway_result {
            Ok(()) => (true, None),
            Err(e) => {
                tracing::warn!("LCA运行接口未送达(运行继续完成): {}", e);
                (false, Some(e.to_string()))
            }
        };

        // 4. 本地计算与状态回落
        let kpis = self
            .kpi_engine
            .calculate(&scenario.inputs, scenario.scenario_type);
        let flows = self.flow_engine.generate(&scenario.inputs);

        {
            let mut state = self.lock_state()?;
            *state = RunState::Idle;
        }

        let result = AnalysisRunResult {
            run_id: Uuid::new_v4().to_string(),
            completed_at: Utc::now().naive_utc(),
            scenario_name: scenario.name.clone(),
            scenario_type: scenario.scenario_type,
            kpis,
            flows,
            backend_delivered,
            backend_error,
        };

        tracing::info!(
            "LCA分析运行完成: run_id={}, backend_delivered={}",
            result.run_id,
            result.backend_delivered
        );

        Ok(result)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn lock_state(&self) -> ApiResult<std::sync::MutexGuard<'_, RunState>> {
        self.run_state
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }
}
