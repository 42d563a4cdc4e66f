// ==========================================
// 金属生产LCA评估仪表盘 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 循环经济决策支持仪表盘
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use metal_lca_dashboard::app::tauri_commands::*;
    use metal_lca_dashboard::app::AppState;
    use metal_lca_dashboard::config::DashboardConfig;

    // 初始化日志系统
    metal_lca_dashboard::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", metal_lca_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", metal_lca_dashboard::VERSION);
    tracing::info!("==================================================");

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new(DashboardConfig::default()).expect("无法初始化AppState");

    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 方案管理相关命令 (8个)
            // ==========================================
            list_scenarios,
            get_scenario,
            get_selected_scenario,
            select_scenario,
            update_scenario_inputs,
            get_scenario_kpis,
            get_flow_diagram,
            compare_scenarios,
            // ==========================================
            // 分析运行相关命令 (2个)
            // ==========================================
            run_lca_analysis,
            get_run_state,
            // ==========================================
            // 报告生成相关命令 (4个)
            // ==========================================
            generate_report,
            reset_report,
            get_report_state,
            get_generated_report,
            // ==========================================
            // 配置与语言相关命令 (4个)
            // ==========================================
            get_lca_profiles,
            get_dashboard_config,
            get_ui_locale,
            set_ui_locale,
            // ==========================================
            // 前端遥测/错误上报 (1个)
            // ==========================================
            report_frontend_event,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", metal_lca_dashboard::APP_NAME);
    println!("系统版本: {}", metal_lca_dashboard::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use metal_lca_dashboard::app::AppState;");
}
