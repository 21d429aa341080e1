//! Scales and the factories that create them.
//!
//! A [`Scale`] maps domain values to pixel coordinates. A [`ScaleFactory`]
//! creates fresh scales; every domain carries one, either configured
//! explicitly or picked by the domain computation from the data.
//!
//! Two factories are built in:
//! - [`LinearFactory`] creates [`LinearScale`]s for continuous numeric domains
//! - [`BandFactory`] creates [`BandScale`]s for discrete domains, with the
//!   default inner padding of 0.3 and outer padding of 0.15
//!
//! Anything implementing [`ScaleFactory`] can be configured per domain
//! instead, see [`CustomFactory`] for the closure-based form.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

pub mod band;
pub mod linear;
pub mod tick_iter;
pub(crate) mod util;

pub use band::BandScale;
pub use linear::LinearScale;
pub use tick_iter::TickIter;

/// Default inner padding of scales created by [`BandFactory`].
pub const DEFAULT_PADDING_INNER: f64 = 0.3;
/// Default outer padding of scales created by [`BandFactory`].
pub const DEFAULT_PADDING_OUTER: f64 = 0.15;

/// An axis tick produced by a scale.
///
/// Level `0` is a major tick, higher levels are progressively minor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<D> {
    pub value: D,
    pub level: u8,
}

/// Mapping from domain values to an output (pixel) range.
///
/// Domains are set as-is: a continuous scale reads the numeric entries of the
/// list (`[]` or `[min, max]`), a banded scale takes the whole ordered list.
pub trait Scale: fmt::Debug + Send + Sync {
    /// Replaces the scale's domain.
    fn set_domain(&mut self, domain: &[Value]);

    /// Returns the current domain.
    fn domain(&self) -> Vec<Value>;

    /// Replaces the output range `[start, end]`.
    fn set_range(&mut self, range: [f64; 2]);

    /// Returns the current output range.
    fn range(&self) -> [f64; 2];

    /// Maps a domain value into the output range.
    ///
    /// Returns `None` when the value has no position: a non-numeric value on a
    /// continuous scale, an unknown category on a banded scale, or an empty
    /// domain.
    fn map(&self, value: &Value) -> Option<f64>;

    /// Width of a band, for banded scales only.
    fn bandwidth(&self) -> Option<f64> {
        None
    }

    /// Fraction of a step left empty between bands, for banded scales only.
    fn padding_inner(&self) -> Option<f64> {
        None
    }

    /// Space before the first and after the last band, in steps, for banded
    /// scales only.
    fn padding_outer(&self) -> Option<f64> {
        None
    }
}

/// Creates fresh [`Scale`] instances.
pub trait ScaleFactory: fmt::Debug + Send + Sync {
    /// Name used in debug output and when comparing resolved domains.
    fn name(&self) -> &str;

    /// Creates a new, independent scale.
    fn create(&self) -> Box<dyn Scale>;

    /// Whether the scales created by this factory are banded.
    ///
    /// The default probes a fresh instance for a bandwidth.
    fn is_discrete(&self) -> bool {
        self.create().bandwidth().is_some()
    }
}

/// A factory shared between configuration, resolved domains and callers.
pub type SharedFactory = Arc<dyn ScaleFactory>;

/// Factory for [`LinearScale`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFactory;

impl ScaleFactory for LinearFactory {
    fn name(&self) -> &str {
        "linear"
    }

    fn create(&self) -> Box<dyn Scale> {
        Box::new(LinearScale::default())
    }

    fn is_discrete(&self) -> bool {
        false
    }
}

/// Factory for [`BandScale`] with the default paddings applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandFactory;

impl ScaleFactory for BandFactory {
    fn name(&self) -> &str {
        "band"
    }

    fn create(&self) -> Box<dyn Scale> {
        Box::new(
            BandScale::default()
                .with_padding_inner(DEFAULT_PADDING_INNER)
                .with_padding_outer(DEFAULT_PADDING_OUTER),
        )
    }

    fn is_discrete(&self) -> bool {
        true
    }
}

/// Shared handle to the built-in linear factory.
pub fn linear() -> SharedFactory {
    Arc::new(LinearFactory)
}

/// Shared handle to the built-in band factory.
pub fn band() -> SharedFactory {
    Arc::new(BandFactory)
}

/// Looks up a built-in factory by name.
pub fn builtin(name: &str) -> Option<SharedFactory> {
    match name {
        "linear" => Some(linear()),
        "band" => Some(band()),
        _ => None,
    }
}

type CreateFn = Box<dyn Fn() -> Box<dyn Scale> + Send + Sync>;

/// A factory backed by a closure.
///
/// # Examples
///
/// ```
/// use omfang::scale::{BandScale, CustomFactory, ScaleFactory};
///
/// let tight = CustomFactory::new("tight-band", || Box::new(BandScale::default()));
/// assert!(tight.is_discrete());
/// assert!(tight.create().bandwidth().is_some());
/// ```
pub struct CustomFactory {
    name: String,
    create: CreateFn,
}

impl CustomFactory {
    pub fn new<F>(name: impl Into<String>, create: F) -> Self
    where
        F: Fn() -> Box<dyn Scale> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            create: Box::new(create),
        }
    }

    pub fn shared<F>(name: impl Into<String>, create: F) -> SharedFactory
    where
        F: Fn() -> Box<dyn Scale> + Send + Sync + 'static,
    {
        Arc::new(Self::new(name, create))
    }
}

impl ScaleFactory for CustomFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self) -> Box<dyn Scale> {
        (self.create)()
    }
}

impl fmt::Debug for CustomFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
