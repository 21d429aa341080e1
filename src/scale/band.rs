use indexmap::IndexSet;

use super::{Scale, Tick, TickIter};
use crate::value::Value;

/// Banded scale: splits the output range into equal-width bands, one per category.
///
/// Layout follows the usual band-scale arithmetic:
///
/// ```text
/// step      = |r1 - r0| / max(1, n - padding_inner + 2 * padding_outer)
/// bandwidth = step * (1 - padding_inner)
/// ```
///
/// The leftover space is distributed according to `align` (default `0.5`,
/// centred). A reversed range (`r1 < r0`) reverses the band order, so the
/// first category sits at the range start. Categories are kept in a hashed
/// ordered set, so mapping a value is a constant-time lookup.
///
/// # Examples
///
/// ```rust
/// use omfang::{Value, scale::{BandScale, Scale}};
///
/// let mut scale = BandScale::default().with_padding_inner(0.0).with_padding_outer(0.0);
/// scale.set_domain(&[Value::from("a"), Value::from("b"), Value::from("c"), Value::from("d")]);
/// scale.set_range([0.0, 400.0]);
///
/// assert_eq!(scale.bandwidth(), Some(100.0));
/// assert_eq!(scale.padding_inner(), Some(0.0));
/// assert_eq!(scale.map(&Value::from("c")), Some(200.0));
/// assert_eq!(scale.map(&Value::from("z")), None);
/// ```
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: IndexSet<Value>,
    range: [f64; 2],
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl Default for BandScale {
    fn default() -> Self {
        Self {
            domain: IndexSet::new(),
            range: [0.0, 1.0],
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }
}

/// Resolved positions for the current domain and range.
struct Layout {
    start: f64,
    step: f64,
    bandwidth: f64,
    reverse: bool,
}

impl BandScale {
    /// Sets the inner padding, the fraction of a step left empty between bands.
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.set_padding_inner(padding);
        self
    }

    /// Sets the outer padding, in steps, before the first and after the last band.
    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.set_padding_outer(padding);
        self
    }

    /// Sets how leftover space is distributed, `0.0` (start) to `1.0` (end).
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    pub fn set_padding_inner(&mut self, padding: f64) {
        self.padding_inner = padding.min(1.0);
    }

    pub fn set_padding_outer(&mut self, padding: f64) {
        self.padding_outer = padding;
    }

    /// Distance between the starts of two adjacent bands.
    pub fn step(&self) -> f64 {
        self.layout().step
    }

    /// One major tick per category, in domain order.
    pub fn ticks(&self) -> TickIter<Value> {
        TickIter::from_vec(
            self.domain
                .iter()
                .cloned()
                .map(|value| Tick { value, level: 0 })
                .collect(),
        )
    }

    fn layout(&self) -> Layout {
        let n = self.domain.len() as f64;
        let [r0, r1] = self.range;
        let reverse = r1 < r0;
        let (mut start, stop) = if reverse { (r1, r0) } else { (r0, r1) };

        let step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        start += (stop - start - step * (n - self.padding_inner)) * self.align;

        Layout {
            start,
            step,
            bandwidth: step * (1.0 - self.padding_inner),
            reverse,
        }
    }
}

impl Scale for BandScale {
    fn set_domain(&mut self, domain: &[Value]) {
        self.domain = domain.iter().cloned().collect();
    }

    fn domain(&self) -> Vec<Value> {
        self.domain.iter().cloned().collect()
    }

    fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }

    fn range(&self) -> [f64; 2] {
        self.range
    }

    fn map(&self, value: &Value) -> Option<f64> {
        let index = self.domain.get_index_of(value)?;
        let layout = self.layout();
        let slot = if layout.reverse {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(layout.start + layout.step * slot as f64)
    }

    fn bandwidth(&self) -> Option<f64> {
        Some(self.layout().bandwidth)
    }

    fn padding_inner(&self) -> Option<f64> {
        Some(self.padding_inner)
    }

    fn padding_outer(&self) -> Option<f64> {
        Some(self.padding_outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Value> {
        vec![Value::from("a"), Value::from("b"), Value::from("c")]
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be mapped");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_paddings_layout() {
        let mut scale = BandScale::default().with_padding_inner(0.3).with_padding_outer(0.15);
        scale.set_domain(&abc());
        scale.set_range([0.0, 300.0]);

        // step = 300 / (3 - 0.3 + 0.3) = 100
        assert_close(Some(scale.step()), 100.0);
        assert_close(scale.bandwidth(), 70.0);
        // start = (300 - 100 * 2.7) * 0.5 = 15
        assert_close(scale.map(&Value::from("a")), 15.0);
        assert_close(scale.map(&Value::from("b")), 115.0);
        assert_close(scale.map(&Value::from("c")), 215.0);
    }

    #[test]
    fn test_reversed_range_keeps_first_category_at_range_start() {
        let mut scale = BandScale::default();
        scale.set_domain(&abc());
        scale.set_range([300.0, 0.0]);

        assert_close(scale.map(&Value::from("a")), 200.0);
        assert_close(scale.map(&Value::from("c")), 0.0);
        assert_close(scale.bandwidth(), 100.0);
    }

    #[test]
    fn test_duplicate_domain_entries_are_dropped() {
        let mut scale = BandScale::default();
        scale.set_domain(&[Value::from("a"), Value::from("b"), Value::from("a")]);
        assert_eq!(scale.domain(), vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_numeric_categories_are_supported() {
        let mut scale = BandScale::default();
        scale.set_domain(&[Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
        scale.set_range([0.0, 40.0]);
        assert_close(scale.map(&Value::from(3)), 20.0);
        assert_eq!(scale.map(&Value::from(5)), None);
    }

    #[test]
    fn test_empty_domain_has_no_positions() {
        let scale = BandScale::default();
        assert_eq!(scale.map(&Value::from("a")), None);
        assert!(scale.bandwidth().is_some());
        assert_eq!(scale.ticks().count(), 0);
    }

    #[test]
    fn test_inner_padding_is_capped_at_one() {
        let scale = BandScale::default().with_padding_inner(3.0);
        assert_eq!(scale.padding_inner(), Some(1.0));
    }

    #[test]
    fn test_align_moves_leftover_space() {
        let mut scale = BandScale::default().with_padding_outer(1.0).with_align(0.0);
        scale.set_domain(&[Value::from("x")]);
        scale.set_range([0.0, 30.0]);
        // step = 30 / 3 = 10, all leftover space after the band
        assert_close(scale.map(&Value::from("x")), 0.0);
        assert_close(scale.bandwidth(), 10.0);
    }

    #[test]
    fn test_band_scale_merges_nan_categories() {
        let mut scale = BandScale::default();
        scale.set_domain(&[Value::from(f64::NAN), Value::from(f64::NAN), Value::from(1)]);
        scale.set_range([0.0, 20.0]);
        assert_eq!(scale.domain().len(), 2);
        assert_close(scale.map(&Value::from(f64::NAN)), 0.0);
        assert_close(scale.map(&Value::from(1)), 10.0);
    }

    #[test]
    fn test_band_scale_maps_many_categories() {
        let categories: Vec<Value> = (0..50_000).map(|i| Value::from(format!("c{i}"))).collect();
        let mut scale = BandScale::default();
        scale.set_domain(&categories);
        scale.set_range([0.0, 50_000.0]);
        for (i, category) in categories.iter().enumerate() {
            assert_close(scale.map(category), i as f64);
        }
    }

    #[test]
    fn test_ticks_follow_domain_order() {
        let mut scale = BandScale::default();
        scale.set_domain(&abc());
        let values: Vec<Value> = scale.ticks().map(|t| t.value).collect();
        assert_eq!(values, abc());
    }
}
