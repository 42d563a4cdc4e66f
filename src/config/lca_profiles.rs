// ==========================================
// 金属生产LCA评估仪表盘 - LCA系数表
// ==========================================
// 职责: KPI/物料流计算的全部查表系数, 以显式配置数据形式提供
// 引擎不内置任何系数, 全部从本表读取
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{EndOfLife, EnergySource, MaterialSource, Metal};

// ==========================================
// MetalProfile - 单金属基准画像
// ==========================================

/// 单金属基准画像(每吨口径)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalProfile {
    /// CO2基准(kg CO2-eq/吨)
    pub co2_kg_per_ton: f64,

    /// 能耗基准(GJ口径/吨)
    pub energy_gj_per_ton: f64,

    /// 水耗基准(L/吨)
    pub water_l_per_ton: f64,
}

// ==========================================
// LcaProfileTable - 系数全集
// ==========================================

/// LCA系数全集
///
/// 默认值即评估口径; 序列化友好, 便于随配置快照下发前端
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcaProfileTable {
    /// 铝基准画像
    pub aluminum: MetalProfile,

    /// 铜基准画像
    pub copper: MetalProfile,

    /// 再生料CO2系数(原生料为1.0)
    pub recycled_co2_factor: f64,

    /// 再生料能耗系数
    pub recycled_energy_factor: f64,

    /// 再生料水耗系数
    pub recycled_water_factor: f64,

    /// 燃煤CO2系数
    pub coal_co2_factor: f64,

    /// 电网均值CO2系数
    pub grid_co2_factor: f64,

    /// 可再生能源CO2系数
    pub renewables_co2_factor: f64,

    /// 运输CO2加项(kg CO2/公里)
    pub transport_co2_per_km: f64,

    /// 回收再生报废系数(填埋为1.0), 作用于CO2总量
    pub recycling_end_of_life_factor: f64,

    /// 再生料方案的再生料占比(%)
    pub recycled_content_pct: f64,

    /// 循环方案循环性指数(%)
    pub circular_index_pct: f64,

    /// 线性方案循环性指数(%)
    pub linear_index_pct: f64,

    /// 再生料方案成本节约(USD, 与数量无关的常数)
    pub recycled_cost_savings_usd: f64,

    /// 再生料进入产线的占比(其余为原生料补充)
    pub recycled_input_share: f64,

    /// 使用阶段流向回收处理的占比
    pub recycling_route_share: f64,

    /// 回收处理回流再生料的占比(两段累计损耗)
    pub recycling_recovery_share: f64,

    /// 铝能源流强度(GJ/吨)
    pub aluminum_energy_flow_gj_per_ton: f64,

    /// 铜能源流强度(GJ/吨)
    pub copper_energy_flow_gj_per_ton: f64,
}

impl Default for LcaProfileTable {
    fn default() -> Self {
        Self {
            aluminum: MetalProfile {
                co2_kg_per_ton: 11.9,
                energy_gj_per_ton: 170.0,
                water_l_per_ton: 1550.0,
            },
            copper: MetalProfile {
                co2_kg_per_ton: 4.2,
                energy_gj_per_ton: 65.0,
                water_l_per_ton: 440.0,
            },
            recycled_co2_factor: 0.15,
            recycled_energy_factor: 0.05,
            recycled_water_factor: 0.30,
            coal_co2_factor: 1.5,
            grid_co2_factor: 1.0,
            renewables_co2_factor: 0.1,
            transport_co2_per_km: 0.0001,
            recycling_end_of_life_factor: 0.8,
            recycled_content_pct: 85.0,
            circular_index_pct: 75.0,
            linear_index_pct: 25.0,
            recycled_cost_savings_usd: 1250.0,
            recycled_input_share: 0.85,
            recycling_route_share: 0.9,
            recycling_recovery_share: 0.85,
            aluminum_energy_flow_gj_per_ton: 15.0,
            copper_energy_flow_gj_per_ton: 6.0,
        }
    }
}

impl LcaProfileTable {
    /// 按金属取基准画像
    pub fn profile(&self, metal: Metal) -> &MetalProfile {
        match metal {
            Metal::Aluminum => &self.aluminum,
            Metal::Copper => &self.copper,
        }
    }

    /// 材料来源的CO2系数
    pub fn material_co2_factor(&self, source: MaterialSource) -> f64 {
        match source {
            MaterialSource::Primary => 1.0,
            MaterialSource::Recycled => self.recycled_co2_factor,
        }
    }

    /// 材料来源的能耗系数
    pub fn material_energy_factor(&self, source: MaterialSource) -> f64 {
        match source {
            MaterialSource::Primary => 1.0,
            MaterialSource::Recycled => self.recycled_energy_factor,
        }
    }

    /// 材料来源的水耗系数
    pub fn material_water_factor(&self, source: MaterialSource) -> f64 {
        match source {
            MaterialSource::Primary => 1.0,
            MaterialSource::Recycled => self.recycled_water_factor,
        }
    }

    /// 能源结构的CO2系数(仅作用于CO2)
    pub fn energy_co2_factor(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::Coal => self.coal_co2_factor,
            EnergySource::Grid => self.grid_co2_factor,
            EnergySource::Renewables => self.renewables_co2_factor,
        }
    }

    /// 报废去向的CO2系数(作用于CO2总量)
    pub fn end_of_life_co2_factor(&self, end_of_life: EndOfLife) -> f64 {
        match end_of_life {
            EndOfLife::Landfill => 1.0,
            EndOfLife::Recycling => self.recycling_end_of_life_factor,
        }
    }

    /// 能源流强度(GJ/吨)
    pub fn energy_flow_gj_per_ton(&self, metal: Metal) -> f64 {
        match metal {
            Metal::Aluminum => self.aluminum_energy_flow_gj_per_ton,
            Metal::Copper => self.copper_energy_flow_gj_per_ton,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_profiles() {
        let table = LcaProfileTable::default();
        assert_eq!(table.profile(Metal::Aluminum).co2_kg_per_ton, 11.9);
        assert_eq!(table.profile(Metal::Copper).water_l_per_ton, 440.0);
    }

    #[test]
    fn test_renewables_is_lowest_co2_factor() {
        let table = LcaProfileTable::default();
        let renewables = table.energy_co2_factor(EnergySource::Renewables);
        assert!(renewables < table.energy_co2_factor(EnergySource::Grid));
        assert!(renewables < table.energy_co2_factor(EnergySource::Coal));
    }

    #[test]
    fn test_primary_factors_are_identity() {
        let table = LcaProfileTable::default();
        assert_eq!(table.material_co2_factor(MaterialSource::Primary), 1.0);
        assert_eq!(table.material_energy_factor(MaterialSource::Primary), 1.0);
        assert_eq!(table.material_water_factor(MaterialSource::Primary), 1.0);
        assert_eq!(table.end_of_life_co2_factor(EndOfLife::Landfill), 1.0);
    }
}
