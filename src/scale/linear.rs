use super::{Scale, Tick, TickIter, util};
use crate::value::Value;
use num_traits::Float;

/// Continuous scale: linear interpolation from a numeric domain to an output range.
///
/// The domain is the `[d0, d1]` pair produced for continuous domains; only the
/// first two numeric entries are used. The range defaults to `[0, 1]` and is
/// usually set to `[0, width]` for the argument axis and `[height, 0]` for
/// value axes.
///
/// # Mapping Rules
///
/// - **No clamping**: values outside the domain map outside the range
/// - **Reversed domains and ranges** are kept exactly as set
/// - **Degenerate domain** (`d0 == d1`): every value maps to the range midpoint
/// - **Empty domain**: nothing can be mapped, [`Scale::map`] returns `None`
///
/// # Examples
///
/// ```rust
/// use omfang::{Value, scale::{LinearScale, Scale}};
///
/// let mut scale = LinearScale::default();
/// scale.set_domain(&[Value::from(0), Value::from(100)]);
/// scale.set_range([300.0, 0.0]);
///
/// assert_eq!(scale.map(&Value::from(0)), Some(300.0));
/// assert_eq!(scale.map(&Value::from(25)), Some(225.0));
/// assert_eq!(scale.map(&Value::from(150)), Some(-150.0));
/// assert_eq!(scale.invert(225.0), Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: Vec<f64>,
    range: [f64; 2],
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: vec![0.0, 1.0],
            range: [0.0, 1.0],
        }
    }
}

impl LinearScale {
    /// Creates a scale over `[min, max]` with the unit range.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            domain: vec![min, max],
            range: [0.0, 1.0],
        }
    }

    /// Chainable form of [`Scale::set_range`].
    pub fn with_range(mut self, range: [f64; 2]) -> Self {
        self.range = range;
        self
    }

    /// Numeric domain endpoints, `None` for an empty domain.
    pub fn extent(&self) -> Option<(f64, f64)> {
        match self.domain.as_slice() {
            [] => None,
            [only] => Some((*only, *only)),
            [d0, d1, ..] => Some((*d0, *d1)),
        }
    }

    /// Maps a number into the range.
    pub fn map_number(&self, value: f64) -> Option<f64> {
        let (d0, d1) = self.extent()?;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        Some(util::lerp(self.range[0], self.range[1], t))
    }

    /// Maps an output coordinate back into the domain.
    pub fn invert(&self, pixel: f64) -> Option<f64> {
        let (d0, d1) = self.extent()?;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (pixel - r0) / span };
        Some(util::lerp(d0, d1, t))
    }

    /// Major and minor ticks covering the domain, in ascending order.
    ///
    /// Major ticks (level 0) sit on "nice" round steps, nine minor ticks
    /// (level 1) subdivide each major interval.
    pub fn ticks(&self) -> TickIter<f64> {
        match self.extent() {
            Some((d0, d1)) => TickIter::from_linear(LinearTickIter::new(d0, d1)),
            None => TickIter::empty(),
        }
    }
}

impl Scale for LinearScale {
    fn set_domain(&mut self, domain: &[Value]) {
        self.domain = domain.iter().filter_map(Value::as_number).collect();
    }

    fn domain(&self) -> Vec<Value> {
        self.domain.iter().copied().map(Value::Number).collect()
    }

    fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }

    fn range(&self) -> [f64; 2] {
        self.range
    }

    fn map(&self, value: &Value) -> Option<f64> {
        self.map_number(value.as_number()?)
    }
}

/// Smallest value of the form `{1, 2, 5} * 10^k` not below `raw_step`.
fn nice_step<D: Float>(raw_step: D) -> D {
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    let ten = util::ten::<D>();

    let target = raw_step.abs();
    let mut base = one;
    while base * ten < target {
        base = base * ten;
    }
    while base > target {
        base = base / ten;
    }

    [base, base * two, base * five]
        .into_iter()
        .find(|candidate| *candidate >= target)
        .unwrap_or(base * ten)
}

const MAX_TICKS: i64 = 100_000;

/// Sweeps the multiples of the minor step that fall inside a domain.
pub struct LinearTickIter<D: Float> {
    minor_step: D,
    next_index: i64,
    last_index: i64,
    lo: D,
    hi: D,
    tolerance: D,
    single: Option<D>,
}

impl<D: Float> LinearTickIter<D> {
    pub(crate) fn new(a: D, b: D) -> Self {
        let (lo, hi) = util::sorted_pair(a, b);
        let span = hi - lo;
        let mut iter = Self {
            minor_step: D::zero(),
            next_index: 1,
            last_index: 0,
            lo,
            hi,
            tolerance: D::zero(),
            single: None,
        };
        if span == D::zero() || !span.is_finite() {
            iter.single = lo.is_finite().then_some(lo);
            return iter;
        }

        let major_step = nice_step(span / util::ten::<D>());
        let minor_step = major_step / util::ten::<D>();
        let tolerance = util::epsilon_from_step(&minor_step);
        let (Some(first), Some(last)) = (
            ((lo - tolerance) / minor_step).ceil().to_i64(),
            ((hi + tolerance) / minor_step).floor().to_i64(),
        ) else {
            iter.single = Some(lo);
            return iter;
        };

        iter.minor_step = minor_step;
        iter.tolerance = tolerance;
        iter.next_index = first;
        iter.last_index = last.min(first.saturating_add(MAX_TICKS));
        iter
    }
}

impl<D: Float> Iterator for LinearTickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.single.take() {
            return Some(Tick { value, level: 0 });
        }
        if self.next_index > self.last_index {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        let mut value = self.minor_step * D::from(index)?;
        // Snap float noise onto the domain bounds.
        if (value - self.lo).abs() <= self.tolerance {
            value = self.lo;
        } else if (value - self.hi).abs() <= self.tolerance {
            value = self.hi;
        }
        let level = if index % 10 == 0 { 0 } else { 1 };
        Some(Tick { value, level })
    }
}
