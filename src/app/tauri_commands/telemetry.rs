use serde::{Deserialize, Serialize};

// ==========================================
// 前端遥测/错误上报
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFrontendEventResponse {
    pub success: bool,
    pub message: String,
}

/// 前端日志/错误上报：转入 tracing（无持久化层, 仅随应用日志输出）
///
/// 约定：
/// - level: error / warn / info / debug, 其余按 info 处理
/// - payload_json: 由前端组织, 后端仅做透传记录
#[tauri::command(rename_all = "snake_case")]
pub async fn report_frontend_event(
    level: String,
    message: String,
    payload_json: serde_json::Value,
) -> Result<String, String> {
    let level_norm = level.trim().to_lowercase();
    match level_norm.as_str() {
        "error" => tracing::error!(payload = %payload_json, "前端上报: {}", message),
        "warn" | "warning" => tracing::warn!(payload = %payload_json, "前端上报: {}", message),
        "debug" => tracing::debug!(payload = %payload_json, "前端上报: {}", message),
        _ => tracing::info!(payload = %payload_json, "前端上报: {}", message),
    }

    let resp = ReportFrontendEventResponse {
        success: true,
        message: "OK".to_string(),
    };
    serde_json::to_string(&resp).map_err(|e| format!("序列化失败: {}", e))
}
