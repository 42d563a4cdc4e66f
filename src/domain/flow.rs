// ==========================================
// 金属生产LCA评估仪表盘 - 物料流实体
// ==========================================
// 职责: 流程阶段之间的标注流量边
// 生命周期: 派生数据, 每次查询重新生成, 不缓存不落盘
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{FlowKind, ProcessStage};

/// 物料/能源流量边
///
/// value_tons 对物料边为吨; 能源边沿用该字段, 数值口径为 GJ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// 起始阶段
    pub from: ProcessStage,

    /// 目标阶段
    pub to: ProcessStage,

    /// 流量值
    pub value_tons: f64,

    /// 流类型
    pub kind: FlowKind,
}

impl FlowEdge {
    pub fn new(from: ProcessStage, to: ProcessStage, value_tons: f64, kind: FlowKind) -> Self {
        Self {
            from,
            to,
            value_tons,
            kind,
        }
    }
}
