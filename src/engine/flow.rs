// ==========================================
// 金属生产LCA评估仪表盘 - 物料流生成引擎
// ==========================================
// 职责: 输入配置 → 流程阶段之间的有序流量边列表
// 输入: InputConfiguration, LCA系数表
// 输出: Vec<FlowEdge>
// 纯函数引擎: 无状态、无副作用、无失败路径
// ==========================================

use crate::config::LcaProfileTable;
use crate::domain::flow::FlowEdge;
use crate::domain::scenario::InputConfiguration;
use crate::domain::types::{EndOfLife, FlowKind, MaterialSource, ProcessStage};

// ==========================================
// FlowEngine - 物料流生成引擎
// ==========================================
pub struct FlowEngine {
    profiles: LcaProfileTable,
}

impl FlowEngine {
    /// 构造函数
    ///
    /// # 参数
    /// - `profiles`: LCA系数表
    pub fn new(profiles: LcaProfileTable) -> Self {
        Self { profiles }
    }

    /// 使用默认系数表构造
    pub fn with_default_profiles() -> Self {
        Self::new(LcaProfileTable::default())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成物料/能源流量边
    ///
    /// # 规则
    /// - 原生料: 单条100%投入边; 再生料: 85%再生 + 15%原生补充
    ///   (再生占比不达100%, 体现材料损耗)
    /// - 能源边强度按金属查表(GJ/吨)
    /// - 回收: 使用阶段90%流向回收处理, 其中85%回流再生料,
    ///   剩余10%废弃; 填埋: 100%废弃
    pub fn generate(&self, inputs: &InputConfiguration) -> Vec<FlowEdge> {
        let tons = inputs.quantity_tons();
        let mut edges = Vec::new();

        // 1. 原料投入
        match inputs.material_source {
            MaterialSource::Primary => {
                edges.push(FlowEdge::new(
                    ProcessStage::RawMaterials,
                    ProcessStage::Production,
                    tons,
                    FlowKind::Primary,
                ));
            }
            MaterialSource::Recycled => {
                let recycled_share = self.profiles.recycled_input_share;
                edges.push(FlowEdge::new(
                    ProcessStage::RecycledMaterials,
                    ProcessStage::Production,
                    tons * recycled_share,
                    FlowKind::Recycled,
                ));
                edges.push(FlowEdge::new(
                    ProcessStage::RawMaterials,
                    ProcessStage::Production,
                    tons * (1.0 - recycled_share),
                    FlowKind::Primary,
                ));
            }
        }

        // 2. 能源投入 (数值口径为GJ)
        edges.push(FlowEdge::new(
            ProcessStage::EnergySupply,
            ProcessStage::Production,
            tons * self.profiles.energy_flow_gj_per_ton(inputs.metal),
            FlowKind::Energy,
        ));

        // 3. 生产 → 流通 → 使用
        edges.push(FlowEdge::new(
            ProcessStage::Production,
            ProcessStage::Distribution,
            tons,
            FlowKind::Transport,
        ));
        edges.push(FlowEdge::new(
            ProcessStage::Distribution,
            ProcessStage::UsePhase,
            tons,
            FlowKind::Transport,
        ));

        // 4. 报废去向
        match inputs.end_of_life {
            EndOfLife::Recycling => {
                let routed = tons * self.profiles.recycling_route_share;
                edges.push(FlowEdge::new(
                    ProcessStage::UsePhase,
                    ProcessStage::Recycling,
                    routed,
                    FlowKind::Circular,
                ));
                edges.push(FlowEdge::new(
                    ProcessStage::Recycling,
                    ProcessStage::RecycledMaterials,
                    routed * self.profiles.recycling_recovery_share,
                    FlowKind::Circular,
                ));
                edges.push(FlowEdge::new(
                    ProcessStage::UsePhase,
                    ProcessStage::Waste,
                    tons * (1.0 - self.profiles.recycling_route_share),
                    FlowKind::Waste,
                ));
            }
            EndOfLife::Landfill => {
                edges.push(FlowEdge::new(
                    ProcessStage::UsePhase,
                    ProcessStage::Waste,
                    tons,
                    FlowKind::Waste,
                ));
            }
        }

        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EnergySource, Metal, TransportMode};

    fn base_inputs() -> InputConfiguration {
        InputConfiguration {
            metal: Metal::Aluminum,
            material_source: MaterialSource::Primary,
            energy_source: EnergySource::Grid,
            transport_mode: TransportMode::Truck,
            transport_distance_km: 500.0,
            end_of_life: EndOfLife::Landfill,
            quantity_kg: 2000.0,
        }
    }

    #[test]
    fn test_primary_landfill_shape() {
        let engine = FlowEngine::with_default_profiles();
        let edges = engine.generate(&base_inputs());

        // 投入 + 能源 + 两段流转 + 废弃
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0].from, ProcessStage::RawMaterials);
        assert_eq!(edges[0].value_tons, 2.0);
        assert_eq!(edges[4].to, ProcessStage::Waste);
        assert_eq!(edges[4].value_tons, 2.0);
    }

    #[test]
    fn test_recycled_input_split() {
        let engine = FlowEngine::with_default_profiles();
        let mut inputs = base_inputs();
        inputs.material_source = MaterialSource::Recycled;

        let edges = engine.generate(&inputs);
        let recycled = &edges[0];
        let primary = &edges[1];

        assert_eq!(recycled.kind, FlowKind::Recycled);
        assert!((recycled.value_tons - 1.7).abs() < 1e-9);
        assert_eq!(primary.kind, FlowKind::Primary);
        assert!((primary.value_tons - 0.3).abs() < 1e-9);
        // 投入边合计守恒
        assert!((recycled.value_tons + primary.value_tons - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_edge_intensity() {
        let engine = FlowEngine::with_default_profiles();

        let aluminum = engine.generate(&base_inputs());
        let energy = aluminum
            .iter()
            .find(|e| e.kind == FlowKind::Energy)
            .unwrap();
        assert_eq!(energy.value_tons, 30.0); // 2吨 × 15

        let mut copper_inputs = base_inputs();
        copper_inputs.metal = Metal::Copper;
        let copper = engine.generate(&copper_inputs);
        let energy = copper.iter().find(|e| e.kind == FlowKind::Energy).unwrap();
        assert_eq!(energy.value_tons, 12.0); // 2吨 × 6
    }

    #[test]
    fn test_recycling_routing() {
        let engine = FlowEngine::with_default_profiles();
        let mut inputs = base_inputs();
        inputs.end_of_life = EndOfLife::Recycling;

        let edges = engine.generate(&inputs);
        let to_recycling = edges
            .iter()
            .find(|e| e.to == ProcessStage::Recycling)
            .unwrap();
        let recovered = edges
            .iter()
            .find(|e| e.from == ProcessStage::Recycling)
            .unwrap();
        let waste = edges.iter().find(|e| e.to == ProcessStage::Waste).unwrap();

        assert!((to_recycling.value_tons - 1.8).abs() < 1e-9); // 2 × 0.9
        assert!((recovered.value_tons - 1.53).abs() < 1e-9); // 1.8 × 0.85
        assert!((waste.value_tons - 0.2).abs() < 1e-9); // 2 × 0.1
    }
}
