// ==========================================
// 金属生产LCA评估仪表盘 - 评估方案实体
// ==========================================
// 职责: 评估输入配置与方案容器
// 生命周期: 仪表盘启动时播种两个默认方案, 用户编辑就地修改, 不落盘
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    EndOfLife, EnergySource, MaterialSource, Metal, ScenarioType, TransportMode,
};

// ==========================================
// InputConfiguration - 评估输入配置
// ==========================================

/// 评估输入配置
///
/// 软性约束(运行前校验, 数据层不强制):
/// - quantity_kg > 0
/// - transport_distance_km ∈ [0, 10000]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfiguration {
    /// 金属种类
    pub metal: Metal,

    /// 材料来源
    pub material_source: MaterialSource,

    /// 能源结构
    pub energy_source: EnergySource,

    /// 运输方式
    pub transport_mode: TransportMode,

    /// 运输距离(公里)
    pub transport_distance_km: f64,

    /// 报废去向
    pub end_of_life: EndOfLife,

    /// 评估数量(公斤)
    pub quantity_kg: f64,
}

impl InputConfiguration {
    /// 评估数量换算为吨
    pub fn quantity_tons(&self) -> f64 {
        self.quantity_kg / 1000.0
    }

    /// 线性(常规)方案默认输入
    pub fn conventional_default() -> Self {
        Self {
            metal: Metal::Aluminum,
            material_source: MaterialSource::Primary,
            energy_source: EnergySource::Grid,
            transport_mode: TransportMode::Truck,
            transport_distance_km: 500.0,
            end_of_life: EndOfLife::Landfill,
            quantity_kg: 1000.0,
        }
    }

    /// 循环经济方案默认输入
    pub fn circular_default() -> Self {
        Self {
            metal: Metal::Aluminum,
            material_source: MaterialSource::Recycled,
            energy_source: EnergySource::Renewables,
            transport_mode: TransportMode::Rail,
            transport_distance_km: 300.0,
            end_of_life: EndOfLife::Recycling,
            quantity_kg: 1000.0,
        }
    }
}

// ==========================================
// Scenario - 评估方案
// ==========================================

/// 评估方案
///
/// 任意时刻恰好存在两个方案(线性/循环), 各自独立可编辑,
/// 由用户选中其一作为当前工作方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 方案名称(用户可见)
    pub name: String,

    /// 方案类型
    pub scenario_type: ScenarioType,

    /// 评估输入配置
    pub inputs: InputConfiguration,
}

impl Scenario {
    /// 默认方案对: [线性方案, 循环经济方案]
    pub fn default_pair() -> Vec<Scenario> {
        vec![
            Scenario {
                name: "线性生产方案".to_string(),
                scenario_type: ScenarioType::Conventional,
                inputs: InputConfiguration::conventional_default(),
            },
            Scenario {
                name: "循环经济方案".to_string(),
                scenario_type: ScenarioType::Circular,
                inputs: InputConfiguration::circular_default(),
            },
        ]
    }
}
