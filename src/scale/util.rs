use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Compute a small epsilon relative to the provided step.
/// Returns step / 10, which is used as a tolerance for floating-point comparisons.
pub fn epsilon_from_step<T: Float>(step: &T) -> T {
    *step / ten::<T>()
}

/// Linear interpolation between `a` and `b` at `t`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

pub fn ten<T: Float>() -> T {
    let two = T::one() + T::one();
    let five = two + two + T::one();
    five + five
}
