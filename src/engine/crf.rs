//! Capital recovery factor

/// Convert a present capital cost into an equivalent uniform annual
/// payment: `d(1+d)^n / ((1+d)^n - 1)` for discount rate `d` over `n`
/// periods.
///
/// `n` may be fractional (machine lives denominated in parts convert to
/// fractional years). A zero discount rate degenerates to straight-line
/// recovery, `1/n`.
pub fn capital_recovery_factor(discount: f64, periods: f64) -> f64 {
    if discount == 0.0 {
        return 1.0 / periods;
    }
    let growth = (1.0 + discount).powf(periods);
    (discount * growth) / (growth - 1.0)
}
