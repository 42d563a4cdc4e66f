// ==========================================
// 金属生产LCA评估仪表盘 - 输入校验器
// ==========================================
// 职责: LCA运行前的输入软性约束校验
// 约束: 数量 > 0, 运输距离 ∈ [0, 10000]
// 校验失败时运行不得启动, 违规明细逐字段回传
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::scenario::InputConfiguration;
use crate::i18n::{t, t_with_args};

/// 运输距离上限(公里)
const MAX_TRANSPORT_DISTANCE_KM: f64 = 10_000.0;

// ==========================================
// InputValidator - 输入校验器
// ==========================================

/// 输入校验器
///
/// 数据层不强制这些约束, 仅在触发运行前校验;
/// 违规通过 InputValidationError 携带明细返回
pub struct InputValidator {
    max_transport_distance_km: f64,
}

impl InputValidator {
    /// 创建新的InputValidator实例
    pub fn new() -> Self {
        Self {
            max_transport_distance_km: MAX_TRANSPORT_DISTANCE_KM,
        }
    }

    /// 校验评估输入配置
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ApiError::InputValidationError): 校验失败, 含逐字段违规
    pub fn validate(&self, inputs: &InputConfiguration) -> ApiResult<()> {
        let mut violations = Vec::new();

        if !inputs.quantity_kg.is_finite() || inputs.quantity_kg <= 0.0 {
            violations.push(ValidationViolation {
                violation_type: "QUANTITY_RANGE".to_string(),
                field: "quantity_kg".to_string(),
                reason: t("validation.quantity_positive"),
                details: Some(serde_json::json!({
                    "value": inputs.quantity_kg,
                })),
            });
        }

        if !inputs.transport_distance_km.is_finite() || inputs.transport_distance_km < 0.0 {
            violations.push(ValidationViolation {
                violation_type: "DISTANCE_RANGE".to_string(),
                field: "transport_distance_km".to_string(),
                reason: t("validation.distance_negative"),
                details: Some(serde_json::json!({
                    "value": inputs.transport_distance_km,
                })),
            });
        } else if inputs.transport_distance_km > self.max_transport_distance_km {
            violations.push(ValidationViolation {
                violation_type: "DISTANCE_RANGE".to_string(),
                field: "transport_distance_km".to_string(),
                reason: t_with_args(
                    "validation.distance_exceeds_limit",
                    &[("max", &format!("{}", self.max_transport_distance_km))],
                ),
                details: Some(serde_json::json!({
                    "value": inputs.transport_distance_km,
                    "max": self.max_transport_distance_km,
                })),
            });
        }

        if !violations.is_empty() {
            return Err(ApiError::InputValidationError {
                reason: format!("{}项输入不合法", violations.len()),
                violations,
            });
        }

        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
