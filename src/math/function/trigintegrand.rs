use crate::math::function::scalarfunction::ScalarFunction;

/// f(x) = cos(x) / (ln(1+sin(x)) * sin(1+sin(x)))
///
/// Singular wherever ln(1+sin(x)) or sin(1+sin(x)) vanishes, in particular
/// at x = 0 and x = π. Evaluation never fails; near a singularity the
/// quotient is ±Infinity or NaN and the caller receives it as-is.
pub struct TrigLogRatio;

impl TrigLogRatio {
    pub fn formula(&self) -> &'static str {
        "f(x) = cos(x) / (ln(1+sin(x)) * sin(1+sin(x)))"
    }
}

impl ScalarFunction for TrigLogRatio {
    fn value(&self, x: f64) -> f64 {
        let shifted = 1.0 + x.sin();
        x.cos() / (shifted.ln() * shifted.sin())
    }
}
