/// Logistic sigmoid, `1 / (1 + e^-x)`.
///
/// Evaluated in a form that never exponentiates a large positive number, and
/// clamped so the result stays strictly inside (0, 1) even when `x` saturates
/// the f64 range.
pub fn sigmoid(x: f64) -> f64 {
    let s = if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    };
    s.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

/// Derivative of the sigmoid with respect to its pre-activation `x`.
pub fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}
