use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::economics::CancellationPolicy;

/// Outcome of a cancellation refund calculation. `days_until_checkin` is the
/// value the decision was made on, recorded for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundResult {
    pub refund_amount: Decimal,
    /// 0-100. The flexible same-day branch reports the actual ratio after
    /// the first-night deduction.
    pub refund_percentage: u32,
    pub policy: CancellationPolicy,
    pub days_until_checkin: i64,
    pub explanation: String,
}

impl std::fmt::Display for RefundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${} ({}%) under the {} policy — {}",
            self.refund_amount, self.refund_percentage, self.policy, self.explanation
        )
    }
}
