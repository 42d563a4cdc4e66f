// ==========================================
// 金属生产LCA评估仪表盘 - 方案管理 API
// ==========================================
// 职责: 双方案容器的查询/选择/编辑, 以及派生KPI与物料流查询
// 架构: API 层 → Engine 层 (KpiEngine / FlowEngine)
// 状态: 方案列表与选中下标为仅有的可变状态, 内存持有不落盘
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::flow::FlowEdge;
use crate::domain::kpi::{KpiDelta, KpiResult, ScenarioComparison, ScenarioKpiEntry};
use crate::domain::scenario::{InputConfiguration, Scenario};
use crate::domain::types::ScenarioType;
use crate::engine::{FlowEngine, KpiEngine};

// ==========================================
// ScenarioBoard - 方案板(内部状态)
// ==========================================

/// 方案板: 恰好两个方案 + 选中下标
struct ScenarioBoard {
    scenarios: Vec<Scenario>,
    selected: usize,
}

// ==========================================
// ScenarioApi - 方案管理 API
// ==========================================

/// 方案管理API
///
/// 职责：
/// 1. 方案列表/选中状态的查询与变更
/// 2. 选中或指定方案的输入编辑(就地修改)
/// 3. KPI与物料流的派生查询(每次调用重新计算)
pub struct ScenarioApi {
    board: Mutex<ScenarioBoard>,
    kpi_engine: Arc<KpiEngine>,
    flow_engine: Arc<FlowEngine>,
}

impl ScenarioApi {
    /// 创建新的ScenarioApi实例, 播种默认方案对
    ///
    /// # 参数
    /// - kpi_engine: KPI计算引擎
    /// - flow_engine: 物料流生成引擎
    pub fn new(kpi_engine: Arc<KpiEngine>, flow_engine: Arc<FlowEngine>) -> Self {
        Self {
            board: Mutex::new(ScenarioBoard {
                scenarios: Scenario::default_pair(),
                selected: 0,
            }),
            kpi_engine,
            flow_engine,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询全部方案
    pub fn list_scenarios(&self) -> ApiResult<Vec<Scenario>> {
        let board = self.lock_board()?;
        Ok(board.scenarios.clone())
    }

    /// 查询指定方案
    pub fn get_scenario(&self, index: usize) -> ApiResult<Scenario> {
        let board = self.lock_board()?;
        Self::scenario_at(&board, index).cloned()
    }

    /// 当前选中下标
    pub fn selected_index(&self) -> ApiResult<usize> {
        let board = self.lock_board()?;
        Ok(board.selected)
    }

    /// 当前选中方案
    pub fn selected_scenario(&self) -> ApiResult<Scenario> {
        let board = self.lock_board()?;
        let index = board.selected;
        Self::scenario_at(&board, index).cloned()
    }

    // ==========================================
    // 变更接口
    // ==========================================

    /// 选中方案
    pub fn select_scenario(&self, index: usize) -> ApiResult<()> {
        let mut board = self.lock_board()?;
        Self::scenario_at(&board, index)?;
        board.selected = index;
        tracing::debug!("选中方案: index={}", index);
        Ok(())
    }

    /// 编辑指定方案的输入配置(就地覆盖)
    ///
    /// 软性约束在运行前校验, 编辑本身不拦截
    pub fn update_scenario_inputs(
        &self,
        index: usize,
        inputs: InputConfiguration,
    ) -> ApiResult<Scenario> {
        let mut board = self.lock_board()?;
        let scenario = match board.scenarios.get_mut(index) {
            Some(s) => s,
            None => return Err(Self::index_not_found(index)),
        };
        scenario.inputs = inputs;
        tracing::debug!("更新方案输入: index={}, name={}", index, scenario.name);
        Ok(scenario.clone())
    }

    // ==========================================
    // 派生查询接口
    // ==========================================

    /// 计算指定方案的KPI
    pub fn scenario_kpis(&self, index: usize) -> ApiResult<KpiResult> {
        let board = self.lock_board()?;
        let scenario = Self::scenario_at(&board, index)?;
        Ok(self
            .kpi_engine
            .calculate(&scenario.inputs, scenario.scenario_type))
    }

    /// 生成指定方案的物料流边
    pub fn scenario_flows(&self, index: usize) -> ApiResult<Vec<FlowEdge>> {
        let board = self.lock_board()?;
        let scenario = Self::scenario_at(&board, index)?;
        Ok(self.flow_engine.generate(&scenario.inputs))
    }

    /// 双方案KPI对比
    ///
    /// 按方案类型取条目; 差值 = 线性 - 循环 (正值表示循环方案更优)
    pub fn compare_scenarios(&self) -> ApiResult<ScenarioComparison> {
        let board = self.lock_board()?;

        let conventional = self.kpi_entry_for(&board, ScenarioType::Conventional)?;
        let circular = self.kpi_entry_for(&board, ScenarioType::Circular)?;

        let delta = KpiDelta {
            co2_footprint_kg: round2(
                conventional.kpis.co2_footprint_kg - circular.kpis.co2_footprint_kg,
            ),
            energy_use_gj: round2(conventional.kpis.energy_use_gj - circular.kpis.energy_use_gj),
            water_use_l: round2(conventional.kpis.water_use_l - circular.kpis.water_use_l),
        };

        Ok(ScenarioComparison {
            conventional,
            circular,
            delta,
        })
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn lock_board(&self) -> ApiResult<std::sync::MutexGuard<'_, ScenarioBoard>> {
        self.board
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    fn scenario_at(board: &ScenarioBoard, index: usize) -> ApiResult<&Scenario> {
        board
            .scenarios
            .get(index)
            .ok_or_else(|| Self::index_not_found(index))
    }

    fn index_not_found(index: usize) -> ApiError {
        ApiError::NotFound(format!("方案(index={})不存在", index))
    }

    fn kpi_entry_for(
        &self,
        board: &ScenarioBoard,
        scenario_type: ScenarioType,
    ) -> ApiResult<ScenarioKpiEntry> {
        let scenario = board
            .scenarios
            .iter()
            .find(|s| s.scenario_type == scenario_type)
            .ok_or_else(|| ApiError::NotFound(format!("方案(type={})不存在", scenario_type)))?;

        Ok(ScenarioKpiEntry {
            name: scenario.name.clone(),
            scenario_type,
            kpis: self
                .kpi_engine
                .calculate(&scenario.inputs, scenario.scenario_type),
        })
    }
}

/// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
