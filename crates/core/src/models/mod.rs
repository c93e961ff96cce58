pub mod gains;
pub mod holding;
pub mod lot;
pub mod portfolio;
pub mod quote;
pub mod series;
pub mod settings;

/// Round a currency amount to cents, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
