use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// 分析运行相关命令
// ==========================================

/// 触发一次LCA分析运行(按方案下标)
///
/// 校验未通过时返回 INPUT_VALIDATION_ERROR, 运行不启动
#[tauri::command(rename_all = "snake_case")]
pub async fn run_lca_analysis(
    state: tauri::State<'_, AppState>,
    scenario_index: usize,
) -> Result<String, String> {
    let scenario = state
        .scenario_api
        .get_scenario(scenario_index)
        .map_err(map_api_error)?;

    let result = state
        .analysis_api
        .run_analysis(&scenario)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询运行状态(前端轮询用, 必须保持轻量)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_run_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.analysis_api.run_state().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
