//! Domain computation: merges every series into the domains it touches.

use indexmap::{IndexMap, IndexSet};

use super::registry::{ARGUMENT_DOMAIN, DomainConfig, DomainMap};
use super::resolved::{DomainExtent, ResolvedDomain, ResolvedDomains};
use crate::scale;
use crate::series::Series;
use crate::value::Value;

/// Values merged into a domain so far.
///
/// A domain without an explicit factory stays `Unclassified` until its first
/// contributing value arrives; that value's type fixes the classification for
/// the rest of the computation.
#[derive(Debug)]
enum Accumulator {
    Unclassified,
    Continuous(Option<(f64, f64)>),
    Discrete(IndexSet<Value>),
}

impl Accumulator {
    fn for_config(config: &DomainConfig) -> Self {
        match &config.factory {
            Some(factory) if factory.is_discrete() => Accumulator::Discrete(IndexSet::new()),
            Some(_) => Accumulator::Continuous(None),
            None => Accumulator::Unclassified,
        }
    }

    fn merge(&mut self, items: &[Value]) {
        if let Accumulator::Unclassified = self {
            let Some(first) = items.first() else {
                return;
            };
            *self = if first.is_numeric() {
                Accumulator::Continuous(None)
            } else {
                Accumulator::Discrete(IndexSet::new())
            };
        }

        match self {
            Accumulator::Continuous(extent) => {
                for n in items.iter().filter_map(Value::as_number).filter(|n| !n.is_nan()) {
                    *extent = Some(match *extent {
                        Some((lo, hi)) => (lo.min(n), hi.max(n)),
                        None => (n, n),
                    });
                }
            }
            Accumulator::Discrete(values) => values.extend(items.iter().cloned()),
            Accumulator::Unclassified => {}
        }
    }
}

struct DomainState {
    config: DomainConfig,
    accumulator: Accumulator,
}

impl DomainState {
    fn new(config: DomainConfig) -> Self {
        let accumulator = Accumulator::for_config(&config);
        Self {
            config,
            accumulator,
        }
    }

    fn resolve(self) -> ResolvedDomain {
        let DomainConfig {
            factory,
            min,
            max,
            hints,
        } = self.config;

        let (domain, is_discrete) = match self.accumulator {
            Accumulator::Discrete(values) => (DomainExtent::Discrete(values.into_iter().collect()), true),
            Accumulator::Continuous(extent) => (apply_bounds(extent, min, max), false),
            Accumulator::Unclassified => (apply_bounds(None, min, max), false),
        };
        let factory = factory.unwrap_or_else(|| {
            if is_discrete {
                scale::band()
            } else {
                scale::linear()
            }
        });

        ResolvedDomain {
            domain,
            is_discrete,
            factory,
            min,
            max,
            hints,
        }
    }
}

/// Applies configured bounds to a computed continuous extent.
///
/// Each configured bound replaces its computed counterpart. Without any data a
/// domain only gets a range when both bounds are configured.
fn apply_bounds(computed: Option<(f64, f64)>, min: Option<f64>, max: Option<f64>) -> DomainExtent {
    match (computed, min, max) {
        (_, Some(min), Some(max)) => DomainExtent::Continuous { min, max },
        (Some((lo, hi)), min, max) => DomainExtent::Continuous {
            min: min.unwrap_or(lo),
            max: max.unwrap_or(hi),
        },
        (None, _, _) => DomainExtent::Empty,
    }
}

/// Computes the resolved domain of every configured or referenced domain name.
///
/// Each series contributes its point arguments to the argument domain and its
/// values (or the output of its value-domain function, plus `0` when it starts
/// from zero) to its value domain. Contributions of all series are merged:
/// continuous domains keep the overall min/max, discrete domains keep the
/// distinct values in first-seen order.
///
/// Names referenced by a series but absent from `config` are added with an
/// empty configuration. Configured names nobody references resolve to an
/// empty domain.
///
/// # Examples
///
/// ```
/// use omfang::{ARGUMENT_DOMAIN, DomainExtent, DomainMap, Point, Series, VALUE_DOMAIN, compute_domains};
///
/// let series = vec![
///     Series::new(vec![Point::new(1, 9), Point::new(2, 2), Point::new(3, 7)]),
///     Series::new(vec![Point::new(2, 10), Point::new(4, 11)]),
/// ];
/// let domains = compute_domains(&DomainMap::default_domains(), &series);
///
/// let argument = domains.get(ARGUMENT_DOMAIN).unwrap();
/// assert_eq!(argument.domain, DomainExtent::Continuous { min: 1.0, max: 4.0 });
/// assert!(!argument.is_discrete);
///
/// let value = domains.get(VALUE_DOMAIN).unwrap();
/// assert_eq!(value.domain, DomainExtent::Continuous { min: 2.0, max: 11.0 });
/// ```
pub fn compute_domains(config: &DomainMap, series: &[Series]) -> ResolvedDomains {
    let mut states: IndexMap<String, DomainState> = config
        .iter()
        .map(|(name, config)| (name.to_owned(), DomainState::new(config.clone())))
        .collect();

    for (index, series) in series.iter().enumerate() {
        let value_domain = series.value_domain_name();
        let contributions = [
            (ARGUMENT_DOMAIN, series.argument_items()),
            (value_domain, series.value_items()),
        ];
        for (name, items) in contributions {
            log::trace!(
                "series {index}: {} item(s) into domain `{name}`",
                items.len()
            );
            states
                .entry(name.to_owned())
                .or_insert_with(|| DomainState::new(DomainConfig::default()))
                .accumulator
                .merge(&items);
        }
    }

    let resolved: IndexMap<String, ResolvedDomain> = states
        .into_iter()
        .map(|(name, state)| (name, state.resolve()))
        .collect();

    log::debug!(
        "resolved {} domain(s) from {} series: {:?}",
        resolved.len(),
        series.len(),
        resolved
            .iter()
            .map(|(name, domain)| (name.as_str(), domain.domain.len(), domain.is_discrete))
            .collect::<Vec<_>>()
    );

    ResolvedDomains::from_entries(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_accumulator_tracks_min_and_max() {
        let mut acc = Accumulator::Unclassified;
        acc.merge(&[Value::from(3), Value::from(-2)]);
        acc.merge(&[Value::from(8)]);
        assert!(matches!(acc, Accumulator::Continuous(Some((-2.0, 8.0)))));
    }

    #[test]
    fn test_empty_contribution_does_not_classify() {
        let mut acc = Accumulator::Unclassified;
        acc.merge(&[]);
        assert!(matches!(acc, Accumulator::Unclassified));
        acc.merge(&[Value::from("a")]);
        assert!(matches!(acc, Accumulator::Discrete(ref v) if v.iter().eq(&[Value::from("a")])));
    }

    #[test]
    fn test_first_seen_type_is_final() {
        let mut acc = Accumulator::Unclassified;
        acc.merge(&[Value::from(1)]);
        acc.merge(&[Value::from("late"), Value::from(5)]);
        assert!(matches!(acc, Accumulator::Continuous(Some((1.0, 5.0)))));
    }

    #[test]
    fn test_discrete_accumulator_deduplicates_in_order() {
        let mut acc = Accumulator::Discrete(IndexSet::new());
        acc.merge(&[Value::from("b"), Value::from("a")]);
        acc.merge(&[Value::from("a"), Value::from("c"), Value::from("b")]);
        let Accumulator::Discrete(values) = acc else {
            panic!("expected discrete accumulator");
        };
        assert!(values.iter().eq(&[Value::from("b"), Value::from("a"), Value::from("c")]));
    }

    #[test]
    fn test_discrete_accumulator_merges_repeated_nan() {
        let mut acc = Accumulator::Discrete(IndexSet::new());
        acc.merge(&[Value::from(f64::NAN), Value::from(f64::NAN), Value::from(1)]);
        let Accumulator::Discrete(values) = acc else {
            panic!("expected discrete accumulator");
        };
        assert_eq!(values.len(), 2);
        assert_eq!(values.get_index_of(&Value::from(f64::NAN)), Some(0));
    }

    #[test]
    fn test_discrete_accumulator_handles_many_categories() {
        let categories: Vec<Value> = (0..50_000).map(|i| Value::from(format!("c{i}"))).collect();
        let mut acc = Accumulator::Discrete(IndexSet::new());
        acc.merge(&categories);
        acc.merge(&categories);
        let Accumulator::Discrete(values) = acc else {
            panic!("expected discrete accumulator");
        };
        assert_eq!(values.len(), 50_000);
        assert_eq!(values.get_index_of(&Value::from("c49999")), Some(49_999));
    }

    #[test]
    fn test_nan_values_are_ignored() {
        let mut acc = Accumulator::Continuous(None);
        acc.merge(&[Value::from(f64::NAN), Value::from(2)]);
        assert!(matches!(acc, Accumulator::Continuous(Some((2.0, 2.0)))));
    }

    #[test]
    fn test_bounds_policy() {
        let computed = Some((3.0, 14.0));
        assert_eq!(
            apply_bounds(computed, Some(0.0), Some(10.0)),
            DomainExtent::Continuous { min: 0.0, max: 10.0 }
        );
        assert_eq!(
            apply_bounds(computed, None, Some(7.0)),
            DomainExtent::Continuous { min: 3.0, max: 7.0 }
        );
        assert_eq!(
            apply_bounds(computed, Some(1.0), None),
            DomainExtent::Continuous { min: 1.0, max: 14.0 }
        );
        assert_eq!(
            apply_bounds(computed, None, None),
            DomainExtent::Continuous { min: 3.0, max: 14.0 }
        );
        assert_eq!(apply_bounds(None, None, None), DomainExtent::Empty);
        assert_eq!(apply_bounds(None, Some(1.0), None), DomainExtent::Empty);
        assert_eq!(
            apply_bounds(None, Some(1.0), Some(2.0)),
            DomainExtent::Continuous { min: 1.0, max: 2.0 }
        );
    }
}
