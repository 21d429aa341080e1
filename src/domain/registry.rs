//! Domain configuration and the registry of named domains.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::scale::{self, SharedFactory};

/// Name of the domain every series' arguments belong to.
pub const ARGUMENT_DOMAIN: &str = "argument-domain";
/// Name of the domain series' values belong to unless they name another one.
pub const VALUE_DOMAIN: &str = "value-domain";

/// Configuration of a single named domain.
///
/// Every field is optional: without a factory the scale type is inferred from
/// the data, without `min`/`max` the computed extent is used.
#[derive(Debug, Clone, Default)]
pub struct DomainConfig {
    pub factory: Option<SharedFactory>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Axis-specific settings carried through to the resolved domain untouched.
    pub hints: serde_json::Map<String, serde_json::Value>,
}

impl DomainConfig {
    pub fn with_factory(mut self, factory: SharedFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.hints.insert(key.into(), value.into());
        self
    }
}

impl PartialEq for DomainConfig {
    fn eq(&self, other: &Self) -> bool {
        same_factory(self.factory.as_ref(), other.factory.as_ref())
            && self.min == other.min
            && self.max == other.max
            && self.hints == other.hints
    }
}

pub(crate) fn same_factory(a: Option<&SharedFactory>, b: Option<&SharedFactory>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.name() == b.name(),
        _ => false,
    }
}

#[derive(Deserialize)]
struct RawDomainConfig {
    #[serde(default)]
    factory: Option<String>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(flatten)]
    hints: serde_json::Map<String, serde_json::Value>,
}

/// Ordered mapping from domain name to its configuration.
///
/// Values are never modified in place by the library: [`DomainMap::add_domain`]
/// returns a new map.
///
/// # Examples
///
/// ```
/// use omfang::{ARGUMENT_DOMAIN, DomainConfig, DomainMap, VALUE_DOMAIN};
///
/// let defaults = DomainMap::default_domains();
/// let extended = defaults.add_domain("temperature", DomainConfig::default().with_min(-40.0));
///
/// assert_eq!(defaults.len(), 2);
/// assert_eq!(
///     extended.names().collect::<Vec<_>>(),
///     vec![ARGUMENT_DOMAIN, VALUE_DOMAIN, "temperature"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainMap {
    entries: IndexMap<String, DomainConfig>,
}

impl DomainMap {
    /// An empty map, without even the default domains.
    pub fn new() -> Self {
        Self::default()
    }

    /// The argument and value domains, both with empty configuration.
    pub fn default_domains() -> Self {
        let mut entries = IndexMap::with_capacity(2);
        entries.insert(ARGUMENT_DOMAIN.to_owned(), DomainConfig::default());
        entries.insert(VALUE_DOMAIN.to_owned(), DomainConfig::default());
        Self { entries }
    }

    /// Returns a copy of this map with `name` set to `config`.
    ///
    /// An existing entry of the same name is overwritten in place; new names are
    /// appended.
    pub fn add_domain(&self, name: impl Into<String>, config: DomainConfig) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(name.into(), config);
        Self { entries }
    }

    /// Parses a JSON object of `name -> { factory?, min?, max?, ...hints }`.
    ///
    /// `factory` must name a built-in factory (`"linear"` or `"band"`). Key
    /// order is preserved.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, RawDomainConfig> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.len());
        for (name, raw) in raw {
            let factory = match raw.factory {
                Some(factory_name) => {
                    Some(scale::builtin(&factory_name).ok_or_else(|| Error::UnknownFactory {
                        domain: name.clone(),
                        factory: factory_name,
                    })?)
                }
                None => None,
            };
            let config = DomainConfig {
                factory,
                min: raw.min,
                max: raw.max,
                hints: raw.hints,
            };
            entries.insert(name, config);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&DomainConfig> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainConfig)> {
        self.entries.iter().map(|(name, config)| (name.as_str(), config))
    }
}

impl<K: Into<String>> FromIterator<(K, DomainConfig)> for DomainMap {
    fn from_iter<I: IntoIterator<Item = (K, DomainConfig)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The argument and value domains, both with empty configuration.
pub fn default_domains() -> DomainMap {
    DomainMap::default_domains()
}

/// Returns a copy of `domains` with `name` set to `config`.
pub fn add_domain(domains: &DomainMap, name: impl Into<String>, config: DomainConfig) -> DomainMap {
    domains.add_domain(name, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domains_hold_argument_and_value() {
        let domains = default_domains();
        assert_eq!(
            domains.names().collect::<Vec<_>>(),
            vec![ARGUMENT_DOMAIN, VALUE_DOMAIN]
        );
        assert!(domains.iter().all(|(_, config)| *config == DomainConfig::default()));
    }

    #[test]
    fn test_add_domain_appends_without_mutating_input() {
        let input: DomainMap = [
            ("domain-1", DomainConfig::default().with_hint("tag", "1")),
            ("domain-2", DomainConfig::default().with_hint("tag", "2")),
        ]
        .into_iter()
        .collect();
        let snapshot = input.clone();

        let output = add_domain(&input, "test-domain", DomainConfig::default().with_hint("tag", "test"));

        assert_eq!(input, snapshot);
        assert_eq!(output.len(), input.len() + 1);
        assert_eq!(
            output.names().collect::<Vec<_>>(),
            vec!["domain-1", "domain-2", "test-domain"]
        );
        assert_eq!(
            output.get("test-domain").and_then(|c| c.hints.get("tag")),
            Some(&serde_json::Value::from("test"))
        );
    }

    #[test]
    fn test_add_domain_overwrites_existing_name() {
        let input = default_domains();
        let output = input.add_domain(VALUE_DOMAIN, DomainConfig::default().with_max(7.0));

        assert_eq!(output.len(), input.len());
        assert_eq!(output.get(VALUE_DOMAIN).and_then(|c| c.max), Some(7.0));
        assert_eq!(input.get(VALUE_DOMAIN).and_then(|c| c.max), None);
    }

    #[test]
    fn test_from_json_resolves_builtin_factories_and_hints() {
        let domains = DomainMap::from_json(
            r#"{
                "argument-domain": { "factory": "band" },
                "value-domain": {},
                "domain1": { "min": 0, "max": 10, "tickCount": 5 }
            }"#,
        )
        .unwrap();

        assert_eq!(
            domains.names().collect::<Vec<_>>(),
            vec![ARGUMENT_DOMAIN, VALUE_DOMAIN, "domain1"]
        );
        let argument = domains.get(ARGUMENT_DOMAIN).unwrap();
        assert_eq!(argument.factory.as_ref().map(|f| f.name()), Some("band"));

        let custom = domains.get("domain1").unwrap();
        assert_eq!((custom.min, custom.max), (Some(0.0), Some(10.0)));
        assert_eq!(custom.hints.get("tickCount"), Some(&serde_json::Value::from(5)));
        assert!(!custom.hints.contains_key("min"));
    }

    #[test]
    fn test_from_json_rejects_unknown_factory() {
        let err = DomainMap::from_json(r#"{ "x": { "factory": "log" } }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownFactory { ref domain, ref factory } if domain == "x" && factory == "log"
        ));
    }

    #[test]
    fn test_from_json_reports_malformed_input() {
        let err = DomainMap::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
