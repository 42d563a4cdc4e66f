// ==========================================
// 金属生产LCA评估仪表盘 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 所有错误信息必须包含显式原因
// 校验失败携带逐字段违规明细, 供前端渲染行内提示
// ==========================================

use thiserror::Error;

use crate::gateway::GatewayError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 运行前输入校验失败(带逐字段违规明细)
    #[error("输入校验失败: {reason}")]
    InputValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 外部接口错误
    // ==========================================
    #[error("后端接口调用失败: {0}")]
    GatewayError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 GatewayError 转换
// 目的: 将网关层的传输错误转换为API层错误
// ==========================================
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::GatewayError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// 违规类型（QUANTITY_RANGE / DISTANCE_RANGE）
    pub violation_type: String,
    /// 违规字段
    pub field: String,
    /// 违规原因
    pub reason: String,
    /// 额外信息（可选）
    pub details: Option<serde_json::Value>,
}
