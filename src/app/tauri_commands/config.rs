use crate::app::state::AppState;
use crate::i18n;

use super::common::map_api_error;
use crate::api::error::ApiError;

// ==========================================
// 配置查询与语言相关命令
// ==========================================

/// 查询LCA系数表(供前端展示计算口径)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_lca_profiles(state: tauri::State<'_, AppState>) -> Result<String, String> {
    serde_json::to_string(&state.profiles).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询运行配置
#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard_config(state: tauri::State<'_, AppState>) -> Result<String, String> {
    serde_json::to_string(&state.config).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询当前界面语言
#[tauri::command(rename_all = "snake_case")]
pub async fn get_ui_locale() -> Result<String, String> {
    serde_json::to_string(&i18n::current_locale()).map_err(|e| format!("序列化失败: {}", e))
}

/// 切换界面语言（"zh-CN" 或 "en"）
#[tauri::command(rename_all = "snake_case")]
pub async fn set_ui_locale(locale: String) -> Result<String, String> {
    let locale = locale.trim().to_string();
    if locale.is_empty() {
        return Err(map_api_error(ApiError::InvalidInput(
            "语言代码不能为空".to_string(),
        )));
    }

    i18n::set_locale(&locale);
    serde_json::to_string(&i18n::current_locale()).map_err(|e| format!("序列化失败: {}", e))
}
