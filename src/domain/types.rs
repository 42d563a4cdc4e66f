// ==========================================
// 金属生产LCA评估仪表盘 - 领域类型定义
// ==========================================
// 职责: 定义评估输入枚举、流程阶段与面板状态
// 序列化格式: SCREAMING_SNAKE_CASE (与前端约定一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 金属种类 (Metal)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metal {
    Aluminum, // 铝
    Copper,   // 铜
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metal::Aluminum => write!(f, "ALUMINUM"),
            Metal::Copper => write!(f, "COPPER"),
        }
    }
}

// ==========================================
// 材料来源 (Material Source)
// ==========================================
// 再生料进入产线时按85%计入, 剩余15%仍为原生料补充
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialSource {
    Primary,  // 原生料
    Recycled, // 再生料
}

impl fmt::Display for MaterialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialSource::Primary => write!(f, "PRIMARY"),
            MaterialSource::Recycled => write!(f, "RECYCLED"),
        }
    }
}

// ==========================================
// 能源结构 (Energy Source)
// ==========================================
// 仅作用于CO2系数, 不影响能耗/水耗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergySource {
    Coal,       // 燃煤
    Grid,       // 电网均值
    Renewables, // 可再生能源
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergySource::Coal => write!(f, "COAL"),
            EnergySource::Grid => write!(f, "GRID"),
            EnergySource::Renewables => write!(f, "RENEWABLES"),
        }
    }
}

// ==========================================
// 运输方式 (Transport Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Truck, // 公路
    Rail,  // 铁路
    Ship,  // 水运
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Truck => write!(f, "TRUCK"),
            TransportMode::Rail => write!(f, "RAIL"),
            TransportMode::Ship => write!(f, "SHIP"),
        }
    }
}

// ==========================================
// 报废去向 (End of Life)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndOfLife {
    Landfill,  // 填埋
    Recycling, // 回收再生
}

impl fmt::Display for EndOfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndOfLife::Landfill => write!(f, "LANDFILL"),
            EndOfLife::Recycling => write!(f, "RECYCLING"),
        }
    }
}

// ==========================================
// 方案类型 (Scenario Type)
// ==========================================
// 固定两个方案: 线性(常规)方案 与 循环经济方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioType {
    Conventional, // 线性/常规
    Circular,     // 循环经济
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioType::Conventional => write!(f, "CONVENTIONAL"),
            ScenarioType::Circular => write!(f, "CIRCULAR"),
        }
    }
}

// ==========================================
// 流程阶段 (Process Stage)
// ==========================================
// 物料/能源流图节点, 顺序: 原料 → 生产 → 流通 → 使用 → (回收 →) 再生料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStage {
    RawMaterials,      // 原生原料
    RecycledMaterials, // 再生原料
    EnergySupply,      // 能源供应
    Production,        // 生产
    Distribution,      // 流通
    UsePhase,          // 使用阶段
    Recycling,         // 回收处理
    Waste,             // 废弃
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStage::RawMaterials => write!(f, "RAW_MATERIALS"),
            ProcessStage::RecycledMaterials => write!(f, "RECYCLED_MATERIALS"),
            ProcessStage::EnergySupply => write!(f, "ENERGY_SUPPLY"),
            ProcessStage::Production => write!(f, "PRODUCTION"),
            ProcessStage::Distribution => write!(f, "DISTRIBUTION"),
            ProcessStage::UsePhase => write!(f, "USE_PHASE"),
            ProcessStage::Recycling => write!(f, "RECYCLING"),
            ProcessStage::Waste => write!(f, "WASTE"),
        }
    }
}

// ==========================================
// 流类型 (Flow Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowKind {
    Primary,   // 原生料投入
    Recycled,  // 再生料投入
    Energy,    // 能源投入
    Transport, // 运输/流转
    Waste,     // 废弃
    Circular,  // 循环回流
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Primary => write!(f, "PRIMARY"),
            FlowKind::Recycled => write!(f, "RECYCLED"),
            FlowKind::Energy => write!(f, "ENERGY"),
            FlowKind::Transport => write!(f, "TRANSPORT"),
            FlowKind::Waste => write!(f, "WASTE"),
            FlowKind::Circular => write!(f, "CIRCULAR"),
        }
    }
}

// ==========================================
// 报告面板状态 (Report Panel State)
// ==========================================
// 状态机: IDLE → GENERATING → GENERATED → IDLE
// 后端失败同样进入 GENERATED, 用户不可达错误态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportPanelState {
    Idle,       // 空闲
    Generating, // 生成中
    Generated,  // 已生成
}

impl fmt::Display for ReportPanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPanelState::Idle => write!(f, "IDLE"),
            ReportPanelState::Generating => write!(f, "GENERATING"),
            ReportPanelState::Generated => write!(f, "GENERATED"),
        }
    }
}

// ==========================================
// LCA运行状态 (Run State)
// ==========================================
// 状态机: IDLE → RUNNING → IDLE (固定延迟后回落, 与接口结果无关)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Idle,    // 空闲
    Running, // 运行中
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "IDLE"),
            RunState::Running => write!(f, "RUNNING"),
        }
    }
}
