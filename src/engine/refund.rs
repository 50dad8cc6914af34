use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::economics::CancellationPolicy;
use crate::domain::pricing::round_money;
use crate::domain::refund::RefundResult;
use crate::error::{EngineError, Result};

/// Computes the refund owed when a booking is cancelled
/// `days_until_checkin` whole days before check-in.
///
/// Flexible refunds everything down to one day out, then deducts the first
/// night (clamped at zero; a missing nightly rate deducts nothing).
/// Moderate steps 100% / 50% / 0% at five days and one day. Strict refunds
/// half at fourteen days out and nothing after.
pub fn calculate_refund(
    policy: CancellationPolicy,
    total_paid: Decimal,
    days_until_checkin: i64,
    nightly_rate: Option<Decimal>,
) -> Result<RefundResult> {
    if total_paid < Decimal::ZERO {
        return Err(EngineError::InvalidAmount { amount: total_paid });
    }

    let result = |amount: Decimal, percentage: u32, explanation: &str| RefundResult {
        refund_amount: round_money(amount),
        refund_percentage: percentage,
        policy,
        days_until_checkin,
        explanation: explanation.into(),
    };

    let refund = match policy {
        CancellationPolicy::Flexible if days_until_checkin >= 1 => result(
            total_paid,
            100,
            "Full refund: cancelled at least 1 day before check-in",
        ),
        CancellationPolicy::Flexible => {
            let deduction = nightly_rate.unwrap_or(Decimal::ZERO);
            let amount = (total_paid - deduction).max(Decimal::ZERO);
            let percentage = if total_paid.is_zero() {
                0
            } else {
                (amount / total_paid * dec!(100))
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or(0)
            };
            result(
                amount,
                percentage,
                "Partial refund: the first night is non-refundable within 1 day of check-in",
            )
        }
        CancellationPolicy::Moderate if days_until_checkin >= 5 => result(
            total_paid,
            100,
            "Full refund: cancelled at least 5 days before check-in",
        ),
        CancellationPolicy::Moderate if days_until_checkin >= 1 => result(
            total_paid * dec!(0.5),
            50,
            "50% refund: cancelled between 1 and 5 days before check-in",
        ),
        CancellationPolicy::Moderate => result(
            Decimal::ZERO,
            0,
            "No refund: cancelled less than 1 day before check-in",
        ),
        CancellationPolicy::Strict if days_until_checkin >= 14 => result(
            total_paid * dec!(0.5),
            50,
            "50% refund: cancelled at least 14 days before check-in",
        ),
        CancellationPolicy::Strict => result(
            Decimal::ZERO,
            0,
            "No refund: cancelled less than 14 days before check-in",
        ),
    };

    Ok(refund)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn flexible_full_refund_one_day_out() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(500), 1, Some(dec!(100)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(500));
        assert_eq!(r.refund_percentage, 100);
        assert!(r.explanation.contains("at least 1 day"));
    }

    #[test]
    fn flexible_same_day_deducts_first_night() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(500), 0, Some(dec!(100)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(400));
        assert_eq!(r.refund_percentage, 80);
        assert!(r.explanation.contains("first night"));
    }

    #[test]
    fn flexible_past_checkin_deducts_first_night() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(500), -3, Some(dec!(100)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(400));
        assert_eq!(r.days_until_checkin, -3);
    }

    #[test]
    fn flexible_deduction_clamps_at_zero() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(80), 0, Some(dec!(100)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(0));
        assert_eq!(r.refund_percentage, 0);
    }

    #[test]
    fn flexible_missing_nightly_rate_refunds_everything() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(500), 0, None).unwrap();
        assert_eq!(r.refund_amount, dec!(500));
        assert_eq!(r.refund_percentage, 100);
    }

    #[test]
    fn flexible_partial_percentage_rounds_half_up() {
        // 450/700 = 64.2857..% -> 64
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(700), 0, Some(dec!(250)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(450));
        assert_eq!(r.refund_percentage, 64);
    }

    #[test]
    fn moderate_boundaries() {
        let full = calculate_refund(CancellationPolicy::Moderate, dec!(500), 5, None).unwrap();
        assert_eq!(full.refund_percentage, 100);
        assert_eq!(full.refund_amount, dec!(500));

        let half = calculate_refund(CancellationPolicy::Moderate, dec!(500), 4, None).unwrap();
        assert_eq!(half.refund_percentage, 50);
        assert_eq!(half.refund_amount, dec!(250.00));

        let lower = calculate_refund(CancellationPolicy::Moderate, dec!(500), 1, None).unwrap();
        assert_eq!(lower.refund_percentage, 50);

        let none = calculate_refund(CancellationPolicy::Moderate, dec!(500), 0, None).unwrap();
        assert_eq!(none.refund_percentage, 0);
        assert_eq!(none.refund_amount, dec!(0));
    }

    #[test]
    fn strict_boundaries() {
        let half = calculate_refund(CancellationPolicy::Strict, dec!(500), 14, None).unwrap();
        assert_eq!(half.refund_percentage, 50);
        assert_eq!(half.refund_amount, dec!(250.00));

        let none = calculate_refund(CancellationPolicy::Strict, dec!(500), 13, None).unwrap();
        assert_eq!(none.refund_percentage, 0);
        assert_eq!(none.refund_amount, dec!(0));
    }

    #[test]
    fn moderate_half_refund_rounds_to_cents() {
        let r = calculate_refund(CancellationPolicy::Moderate, dec!(333.33), 3, None).unwrap();
        // 333.33 * 0.5 = 166.665 -> 166.67 half-up
        assert_eq!(r.refund_amount, dec!(166.67));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = calculate_refund(CancellationPolicy::Flexible, dec!(-1), 10, None);
        assert!(matches!(result, Err(EngineError::InvalidAmount { .. })));
    }

    #[test]
    fn zero_total_paid_partial_branch_reports_zero_percent() {
        let r = calculate_refund(CancellationPolicy::Flexible, dec!(0), 0, Some(dec!(100)))
            .unwrap();
        assert_eq!(r.refund_amount, dec!(0));
        assert_eq!(r.refund_percentage, 0);
    }

    #[test]
    fn result_records_policy_and_days() {
        let r = calculate_refund(CancellationPolicy::Strict, dec!(500), 20, None).unwrap();
        assert_eq!(r.policy, CancellationPolicy::Strict);
        assert_eq!(r.days_until_checkin, 20);
    }
}
