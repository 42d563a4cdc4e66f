// ==========================================
// 金属生产LCA评估仪表盘 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod analysis;
mod common;
mod config;
mod report;
mod scenario;
mod telemetry;

pub use analysis::*;
pub use config::*;
pub use report::*;
pub use scenario::*;
pub use telemetry::*;
