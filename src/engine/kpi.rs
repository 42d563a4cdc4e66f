// ==========================================
// 金属生产LCA评估仪表盘 - KPI计算引擎
// ==========================================
// 职责: 输入配置 + 方案类型 → 六项可持续性指标
// 输入: InputConfiguration, ScenarioType, LCA系数表
// 输出: KpiResult
// 纯函数引擎: 无状态、无副作用、无失败路径
// ==========================================

use crate::config::LcaProfileTable;
use crate::domain::kpi::KpiResult;
use crate::domain::scenario::InputConfiguration;
use crate::domain::types::{MaterialSource, ScenarioType};

// ==========================================
// KpiEngine - KPI计算引擎
// ==========================================
pub struct KpiEngine {
    profiles: LcaProfileTable,
}

impl KpiEngine {
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

    /// 当前系数表
    pub fn profiles(&self) -> &LcaProfileTable {
        &self.profiles
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算六项KPI
    ///
    /// # 参数
    /// - `inputs`: 评估输入配置
    /// - `scenario_type`: 方案类型(仅影响循环性指数)
    ///
    /// # 返回
    /// KpiResult, 数值保留两位小数
    ///
    /// # 口径
    /// - CO2 = (基准CO2 × 材料系数 × 能源系数 + 运输加项) × 报废系数 × 吨数
    /// - 能耗/水耗 = 基准 × 材料系数 × 吨数 (不含运输/报废项)
    /// - 再生料占比/循环性指数/成本节约为查表常数
    pub fn calculate(&self, inputs: &InputConfiguration, scenario_type: ScenarioType) -> KpiResult {
        let profile = self.profiles.profile(inputs.metal);
        let quantity_tons = inputs.quantity_tons();

        // CO2: 材料与能源系数相乘, 运输为加项, 报废系数作用于总量
        let co2_multiplier = self.profiles.material_co2_factor(inputs.material_source)
            * self.profiles.energy_co2_factor(inputs.energy_source);
        let transport_term = inputs.transport_distance_km * self.profiles.transport_co2_per_km;
        let end_of_life_factor = self.profiles.end_of_life_co2_factor(inputs.end_of_life);

        let co2_footprint_kg = round2(
            (profile.co2_kg_per_ton * co2_multiplier + transport_term)
                * end_of_life_factor
                * quantity_tons,
        );

        // 能耗/水耗: 仅材料系数与数量缩放
        let energy_use_gj = round2(
            profile.energy_gj_per_ton
                * self.profiles.material_energy_factor(inputs.material_source)
                * quantity_tons,
        );
        let water_use_l = round2(
            profile.water_l_per_ton
                * self.profiles.material_water_factor(inputs.material_source)
                * quantity_tons,
        );

        // 常数指标
        let recycled_content_pct = match inputs.material_source {
            MaterialSource::Recycled => self.profiles.recycled_content_pct,
            MaterialSource::Primary => 0.0,
        };
        let circularity_index_pct = match scenario_type {
            ScenarioType::Circular => self.profiles.circular_index_pct,
            ScenarioType::Conventional => self.profiles.linear_index_pct,
        };
        let cost_savings_usd = match inputs.material_source {
            MaterialSource::Recycled => self.profiles.recycled_cost_savings_usd,
            MaterialSource::Primary => 0.0,
        };

        KpiResult {
            co2_footprint_kg,
            energy_use_gj,
            recycled_content_pct,
            water_use_l,
            circularity_index_pct,
            cost_savings_usd,
        }
    }
}

/// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EndOfLife, EnergySource, Metal, TransportMode};

    fn base_inputs() -> InputConfiguration {
        InputConfiguration {
            metal: Metal::Aluminum,
            material_source: MaterialSource::Primary,
            energy_source: EnergySource::Grid,
            transport_mode: TransportMode::Truck,
            transport_distance_km: 500.0,
            end_of_life: EndOfLife::Landfill,
            quantity_kg: 1000.0,
        }
    }

    #[test]
    fn test_conventional_aluminum_baseline() {
        // 铝/原生/电网/500km/填埋/1000kg: (11.9 + 0.05) × 1.0 × 1.0 = 11.95
        let engine = KpiEngine::with_default_profiles();
        let result = engine.calculate(&base_inputs(), ScenarioType::Conventional);

        assert_eq!(result.co2_footprint_kg, 11.95);
        assert_eq!(result.energy_use_gj, 170.0);
        assert_eq!(result.water_use_l, 1550.0);
        assert_eq!(result.recycled_content_pct, 0.0);
        assert_eq!(result.circularity_index_pct, 25.0);
        assert_eq!(result.cost_savings_usd, 0.0);
    }

    #[test]
    fn test_recycled_with_recycling_baseline() {
        // 同上但再生料+回收: (11.9×0.15 + 0.05) × 0.8 × 1.0 = 1.468 → 1.47
        let engine = KpiEngine::with_default_profiles();
        let mut inputs = base_inputs();
        inputs.material_source = MaterialSource::Recycled;
        inputs.end_of_life = EndOfLife::Recycling;

        let result = engine.calculate(&inputs, ScenarioType::Circular);

        assert_eq!(result.co2_footprint_kg, 1.47);
        assert_eq!(result.energy_use_gj, 8.5); // 170 × 0.05
        assert_eq!(result.water_use_l, 465.0); // 1550 × 0.30
        assert_eq!(result.recycled_content_pct, 85.0);
        assert_eq!(result.circularity_index_pct, 75.0);
        assert_eq!(result.cost_savings_usd, 1250.0);
    }

    #[test]
    fn test_copper_base_profile() {
        let engine = KpiEngine::with_default_profiles();
        let mut inputs = base_inputs();
        inputs.metal = Metal::Copper;
        inputs.transport_distance_km = 0.0;

        let result = engine.calculate(&inputs, ScenarioType::Conventional);
        assert_eq!(result.co2_footprint_kg, 4.2);
        assert_eq!(result.energy_use_gj, 65.0);
        assert_eq!(result.water_use_l, 440.0);
    }

    #[test]
    fn test_coal_raises_co2() {
        let engine = KpiEngine::with_default_profiles();
        let mut inputs = base_inputs();
        inputs.transport_distance_km = 0.0;

        inputs.energy_source = EnergySource::Coal;
        let coal = engine.calculate(&inputs, ScenarioType::Conventional);
        // 11.9 × 1.5 = 17.85
        assert_eq!(coal.co2_footprint_kg, 17.85);
    }
}
