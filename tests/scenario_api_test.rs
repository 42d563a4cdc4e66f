// ==========================================
// ScenarioApi 集成测试
// ==========================================
// 测试目标: 验证双方案容器的查询/选择/编辑与派生计算
// ==========================================

use std::sync::Arc;

use metal_lca_dashboard::api::{ApiError, ScenarioApi};
use metal_lca_dashboard::domain::types::{
    EndOfLife, EnergySource, MaterialSource, Metal, ScenarioType, TransportMode,
};
use metal_lca_dashboard::domain::InputConfiguration;
use metal_lca_dashboard::engine::{FlowEngine, KpiEngine};

// ==========================================
// 测试辅助函数
// ==========================================

fn build_api() -> ScenarioApi {
    ScenarioApi::new(
        Arc::new(KpiEngine::with_default_profiles()),
        Arc::new(FlowEngine::with_default_profiles()),
    )
}

// ==========================================
// 方案容器
// ==========================================

#[test]
fn test_seeded_scenario_pair() {
    let api = build_api();

    let scenarios = api.list_scenarios().unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].scenario_type, ScenarioType::Conventional);
    assert_eq!(scenarios[1].scenario_type, ScenarioType::Circular);
    assert_eq!(api.selected_index().unwrap(), 0);
}

#[test]
fn test_select_and_query_selected() {
    let api = build_api();

    api.select_scenario(1).unwrap();
    assert_eq!(api.selected_index().unwrap(), 1);
    assert_eq!(
        api.selected_scenario().unwrap().scenario_type,
        ScenarioType::Circular
    );
}

#[test]
fn test_out_of_range_index_not_found() {
    let api = build_api();

    assert!(matches!(api.get_scenario(5), Err(ApiError::NotFound(_))));
    assert!(matches!(api.select_scenario(5), Err(ApiError::NotFound(_))));
    assert!(matches!(api.scenario_kpis(5), Err(ApiError::NotFound(_))));
}

#[test]
fn test_update_inputs_only_touches_target() {
    let api = build_api();

    let new_inputs = InputConfiguration {
        metal: Metal::Copper,
        material_source: MaterialSource::Primary,
        energy_source: EnergySource::Coal,
        transport_mode: TransportMode::Ship,
        transport_distance_km: 8000.0,
        end_of_life: EndOfLife::Landfill,
        quantity_kg: 5000.0,
    };

    let updated = api.update_scenario_inputs(0, new_inputs.clone()).unwrap();
    assert_eq!(updated.inputs, new_inputs);

    // 另一方案不受影响
    let circular = api.get_scenario(1).unwrap();
    assert_eq!(circular.inputs, InputConfiguration::circular_default());
}

// ==========================================
// 派生计算
// ==========================================

#[test]
fn test_kpis_recomputed_after_edit() {
    let api = build_api();

    let before = api.scenario_kpis(0).unwrap();

    let mut inputs = api.get_scenario(0).unwrap().inputs;
    inputs.quantity_kg *= 2.0;
    api.update_scenario_inputs(0, inputs).unwrap();

    let after = api.scenario_kpis(0).unwrap();
    assert!((after.co2_footprint_kg - 2.0 * before.co2_footprint_kg).abs() < 0.03);
}

#[test]
fn test_flow_edges_for_each_scenario() {
    let api = build_api();

    // 默认线性方案: 原生+填埋 → 5条边
    assert_eq!(api.scenario_flows(0).unwrap().len(), 5);
    // 默认循环方案: 再生+回收 → 8条边
    assert_eq!(api.scenario_flows(1).unwrap().len(), 8);
}

#[test]
fn test_compare_scenarios_delta() {
    let api = build_api();

    let comparison = api.compare_scenarios().unwrap();
    assert_eq!(
        comparison.conventional.scenario_type,
        ScenarioType::Conventional
    );
    assert_eq!(comparison.circular.scenario_type, ScenarioType::Circular);

    // 默认方案对: 线性(电网/原生/填埋) 对 循环(可再生/再生/回收), 循环应全面更优
    assert!(comparison.delta.co2_footprint_kg > 0.0);
    assert!(comparison.delta.energy_use_gj > 0.0);
    assert!(comparison.delta.water_use_l > 0.0);
    assert_eq!(comparison.circular.kpis.recycled_content_pct, 85.0);
    assert_eq!(comparison.conventional.kpis.recycled_content_pct, 0.0);
}
