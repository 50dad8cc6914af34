use crate::domain::calendar::DateRange;
use crate::domain::stay::ExistingStay;
use crate::error::Result;

/// Returns the first active stay conflicting with `candidate`, scanning in
/// input order. Cancelled stays never conflict. A candidate touching an
/// existing stay only at a boundary day (same-day turnover) is not a
/// conflict.
pub fn find_conflict<'a>(
    stays: &'a [ExistingStay],
    candidate: &DateRange,
) -> Result<Option<&'a ExistingStay>> {
    candidate.validate()?;
    Ok(stays
        .iter()
        .filter(|s| s.is_active())
        .find(|s| s.range.overlaps(candidate)))
}

/// True iff no active stay conflicts with `candidate`.
pub fn is_available(stays: &[ExistingStay], candidate: &DateRange) -> Result<bool> {
    find_conflict(stays, candidate).map(|conflict| conflict.is_none())
}
