use super::{Tick, linear};
use num_traits::Float;

/// Boxed tick sequence returned by [`LinearScale::ticks`](super::LinearScale::ticks)
/// and [`BandScale::ticks`](super::BandScale::ticks).
pub struct TickIter<D> {
    inner: Box<dyn Iterator<Item = Tick<D>> + 'static>,
}

impl<D: 'static> TickIter<D> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Tick<D>> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Creates a `TickIter` over precomputed ticks.
    ///
    /// [`BandScale::ticks`](super::BandScale::ticks) builds one major tick per
    /// category this way, in domain order.
    ///
    /// # Examples
    ///
    /// ```
    /// use omfang::{Value, scale::{BandScale, Scale, Tick, TickIter}};
    ///
    /// let mut scale = BandScale::default();
    /// scale.set_domain(&[Value::from("q1"), Value::from("q2"), Value::from("q1")]);
    ///
    /// let ticks = TickIter::from_vec(
    ///     scale.domain().into_iter().map(|value| Tick { value, level: 0 }).collect(),
    /// );
    /// let labels: Vec<String> = ticks.map(|tick| tick.value.to_string()).collect();
    /// assert_eq!(labels, ["q1", "q2"]);
    /// assert_eq!(scale.ticks().count(), 2);
    /// ```
    pub fn from_vec(vec: Vec<Tick<D>>) -> Self {
        Self::new(vec.into_iter())
    }

    /// Creates a `TickIter` that produces no ticks.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<D: Float + 'static> TickIter<D> {
    pub(crate) fn from_linear(iter: linear::LinearTickIter<D>) -> Self {
        Self::new(iter)
    }
}

impl<D> Iterator for TickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
