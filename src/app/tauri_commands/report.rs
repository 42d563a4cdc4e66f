use crate::app::state::AppState;
use crate::domain::report::ReportOptions;

use super::common::map_api_error;

// ==========================================
// 报告生成相关命令
// ==========================================

/// 触发报告生成
///
/// 未传入的选项取默认值(PDF/含图表/含对比)
#[tauri::command(rename_all = "snake_case")]
pub async fn generate_report(
    state: tauri::State<'_, AppState>,
    format: Option<String>,
    include_charts: Option<bool>,
    include_comparison: Option<bool>,
) -> Result<String, String> {
    let defaults = ReportOptions::default();
    let options = ReportOptions {
        format: format
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.format),
        include_charts: include_charts.unwrap_or(defaults.include_charts),
        include_comparison: include_comparison.unwrap_or(defaults.include_comparison),
    };

    let result = state
        .report_api
        .generate_report(options)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 重置报告面板(生成新报告前调用)
#[tauri::command(rename_all = "snake_case")]
pub async fn reset_report(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state.report_api.reset_report().map_err(map_api_error)?;

    let result = state.report_api.report_state().map_err(map_api_error)?;
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询报告面板状态(前端轮询用, 必须保持轻量)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_report_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.report_api.report_state().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询最近生成的报告
#[tauri::command(rename_all = "snake_case")]
pub async fn get_generated_report(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .report_api
        .generated_report()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
