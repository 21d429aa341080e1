//! Builds concrete scales from resolved domains.

use std::fmt;

use indexmap::IndexMap;

use crate::domain::{ARGUMENT_DOMAIN, ResolvedDomains, VALUE_DOMAIN};
use crate::scale::Scale;
use crate::transform::Size;

/// Scales keyed by domain name, in the order of the resolved domains.
pub struct ScaleMap {
    scales: IndexMap<String, Box<dyn Scale>>,
}

impl ScaleMap {
    pub fn get(&self, name: &str) -> Option<&dyn Scale> {
        self.scales.get(name).map(|scale| scale.as_ref())
    }

    /// Scale of the argument domain.
    pub fn argument(&self) -> Option<&dyn Scale> {
        self.get(ARGUMENT_DOMAIN)
    }

    /// Scale of the default value domain.
    pub fn value(&self) -> Option<&dyn Scale> {
        self.get(VALUE_DOMAIN)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Scale)> {
        self.scales
            .iter()
            .map(|(name, scale)| (name.as_str(), scale.as_ref()))
    }

    pub fn into_inner(self) -> IndexMap<String, Box<dyn Scale>> {
        self.scales
    }
}

impl fmt::Debug for ScaleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.scales.iter()).finish()
    }
}

/// Output range for a domain: left-to-right for the argument axis, bottom-to-top
/// (inverted screen y) for every other domain.
pub fn range_for(name: &str, size: Size) -> [f64; 2] {
    if name == ARGUMENT_DOMAIN {
        [0.0, size.width]
    } else {
        [size.height, 0.0]
    }
}

/// Creates one configured scale per resolved domain.
///
/// Each scale comes fresh from the domain's factory, then receives the domain
/// as-is and the range from [`range_for`]. Degenerate domains are passed
/// through unchanged.
///
/// # Examples
///
/// ```
/// use omfang::{DomainMap, Point, Series, Size, Value, build_scales, compute_domains};
///
/// let series = vec![Series::new(vec![Point::new("a", 1), Point::new("b", 3)])];
/// let domains = compute_domains(&DomainMap::default_domains(), &series);
/// let scales = build_scales(&domains, Size::new(400.0, 300.0));
///
/// let argument = scales.argument().unwrap();
/// assert_eq!(argument.range(), [0.0, 400.0]);
/// assert!(argument.bandwidth().is_some());
///
/// let value = scales.value().unwrap();
/// assert_eq!(value.range(), [300.0, 0.0]);
/// assert_eq!(value.map(&Value::from(3)), Some(0.0));
/// ```
pub fn build_scales(domains: &ResolvedDomains, size: Size) -> ScaleMap {
    let scales: IndexMap<String, Box<dyn Scale>> = domains
        .iter()
        .map(|(name, resolved)| {
            let mut scale = resolved.factory.create();
            scale.set_domain(&resolved.domain.values());
            scale.set_range(range_for(name, size));
            log::trace!(
                "built `{}` scale for domain `{name}` with range {:?}",
                resolved.factory.name(),
                scale.range()
            );
            (name.to_owned(), scale)
        })
        .collect();

    log::debug!(
        "built {} scale(s) for a {}x{} plot area",
        scales.len(),
        size.width,
        size.height
    );

    ScaleMap { scales }
}
