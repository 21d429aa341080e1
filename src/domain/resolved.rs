use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::registry::same_factory;
use crate::scale::SharedFactory;
use crate::value::Value;

/// The extent of a resolved domain.
///
/// Serializes as the plain domain array a scale is fed with: `[]`,
/// `[min, max]` or the ordered category list.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainExtent {
    /// A continuous domain with nothing to span, `[]`.
    Empty,
    /// A continuous numeric range.
    Continuous { min: f64, max: f64 },
    /// Distinct values in first-seen order.
    Discrete(Vec<Value>),
}

impl DomainExtent {
    /// The domain as the value list handed to [`Scale::set_domain`](crate::scale::Scale::set_domain).
    pub fn values(&self) -> Vec<Value> {
        match self {
            DomainExtent::Empty => Vec::new(),
            DomainExtent::Continuous { min, max } => vec![Value::Number(*min), Value::Number(*max)],
            DomainExtent::Discrete(values) => values.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DomainExtent::Empty => 0,
            DomainExtent::Continuous { .. } => 2,
            DomainExtent::Discrete(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `(min, max)` pair of a continuous domain.
    pub fn as_range(&self) -> Option<(f64, f64)> {
        match self {
            DomainExtent::Continuous { min, max } => Some((*min, *max)),
            _ => None,
        }
    }
}

impl Serialize for DomainExtent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

fn serialize_factory<S: Serializer>(factory: &SharedFactory, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(factory.name())
}

/// A domain after computation: its extent, scale type and factory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDomain {
    pub domain: DomainExtent,
    pub is_discrete: bool,
    #[serde(serialize_with = "serialize_factory")]
    pub factory: SharedFactory,
    /// Configured lower bound, echoed unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Configured upper bound, echoed unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(flatten)]
    pub hints: serde_json::Map<String, serde_json::Value>,
}

impl PartialEq for ResolvedDomain {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.is_discrete == other.is_discrete
            && same_factory(Some(&self.factory), Some(&other.factory))
            && self.min == other.min
            && self.max == other.max
            && self.hints == other.hints
    }
}

/// Resolved domains keyed by name, in configuration order followed by
/// domains first referenced by series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedDomains {
    entries: IndexMap<String, ResolvedDomain>,
}

impl ResolvedDomains {
    pub(crate) fn from_entries(entries: IndexMap<String, ResolvedDomain>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedDomain> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedDomain)> {
        self.entries.iter().map(|(name, domain)| (name.as_str(), domain))
    }
}

impl<K: Into<String>> FromIterator<(K, ResolvedDomain)> for ResolvedDomains {
    fn from_iter<I: IntoIterator<Item = (K, ResolvedDomain)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
