use crate::app::state::AppState;
use crate::domain::scenario::InputConfiguration;

use super::common::map_api_error;

// ==========================================
// 方案管理相关命令
// ==========================================

/// 查询全部方案
#[tauri::command(rename_all = "snake_case")]
pub async fn list_scenarios(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.scenario_api.list_scenarios().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询指定方案
#[tauri::command(rename_all = "snake_case")]
pub async fn get_scenario(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<String, String> {
    let result = state
        .scenario_api
        .get_scenario(index)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询当前选中方案
#[tauri::command(rename_all = "snake_case")]
pub async fn get_selected_scenario(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .scenario_api
        .selected_scenario()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 选中方案
#[tauri::command(rename_all = "snake_case")]
pub async fn select_scenario(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<String, String> {
    state
        .scenario_api
        .select_scenario(index)
        .map_err(map_api_error)?;

    let selected = state.scenario_api.selected_index().map_err(map_api_error)?;
    serde_json::to_string(&selected).map_err(|e| format!("序列化失败: {}", e))
}

/// 编辑指定方案的输入配置
#[tauri::command(rename_all = "snake_case")]
pub async fn update_scenario_inputs(
    state: tauri::State<'_, AppState>,
    index: usize,
    inputs: InputConfiguration,
) -> Result<String, String> {
    let result = state
        .scenario_api
        .update_scenario_inputs(index, inputs)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询指定方案的KPI
#[tauri::command(rename_all = "snake_case")]
pub async fn get_scenario_kpis(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<String, String> {
    let result = state
        .scenario_api
        .scenario_kpis(index)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询指定方案的物料流图
#[tauri::command(rename_all = "snake_case")]
pub async fn get_flow_diagram(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<String, String> {
    let result = state
        .scenario_api
        .scenario_flows(index)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 双方案KPI对比
#[tauri::command(rename_all = "snake_case")]
pub async fn compare_scenarios(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .scenario_api
        .compare_scenarios()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
