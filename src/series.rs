//! Series descriptors consumed by the domain computation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One `(argument, value)` pair of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub argument: Value,
    pub value: Value,
}

impl Point {
    pub fn new(argument: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            argument: argument.into(),
            value: value.into(),
        }
    }
}

/// Point transformer configuration attached to a series.
///
/// Only the flags that influence domain computation are kept here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointTransformer {
    /// The series is drawn from zero (bars, areas), so its value domain must include 0.
    pub is_started_from_zero: bool,
}

impl PointTransformer {
    pub const fn started_from_zero() -> Self {
        Self {
            is_started_from_zero: true,
        }
    }
}

/// Computes the values a series contributes to its value domain from its points.
///
/// Used by series whose drawn extent differs from the raw point values (stacks).
pub type ValueDomainFn = Arc<dyn Fn(&[Point]) -> Vec<Value> + Send + Sync>;

/// A data series as seen by the domain computation.
///
/// # Examples
///
/// ```
/// use omfang::{Point, PointTransformer, Series};
///
/// let series = Series::new(vec![Point::new(1, 9), Point::new(2, 4)])
///     .with_scale_name("secondary")
///     .with_point_transformer(PointTransformer::started_from_zero());
///
/// assert_eq!(series.value_domain_name(), "secondary");
/// assert!(series.is_started_from_zero());
/// ```
#[derive(Clone, Default)]
pub struct Series {
    pub points: Vec<Point>,
    pub scale_name: Option<String>,
    pub point_transformer: Option<PointTransformer>,
    pub value_domain: Option<ValueDomainFn>,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_scale_name(mut self, name: impl Into<String>) -> Self {
        self.scale_name = Some(name.into());
        self
    }

    pub fn with_point_transformer(mut self, transformer: PointTransformer) -> Self {
        self.point_transformer = Some(transformer);
        self
    }

    pub fn with_value_domain<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Point]) -> Vec<Value> + Send + Sync + 'static,
    {
        self.value_domain = Some(Arc::new(f));
        self
    }

    /// Name of the domain this series' values are measured against.
    pub fn value_domain_name(&self) -> &str {
        self.scale_name.as_deref().unwrap_or(crate::VALUE_DOMAIN)
    }

    pub fn is_started_from_zero(&self) -> bool {
        self.point_transformer
            .is_some_and(|transformer| transformer.is_started_from_zero)
    }

    /// Values this series contributes to its argument domain.
    pub fn argument_items(&self) -> Vec<Value> {
        self.points.iter().map(|p| p.argument.clone()).collect()
    }

    /// Values this series contributes to its value domain.
    ///
    /// A custom value-domain function replaces the raw point values; a series
    /// started from zero always adds `0`.
    pub fn value_items(&self) -> Vec<Value> {
        let mut items = match &self.value_domain {
            Some(f) => f(&self.points),
            None => self.points.iter().map(|p| p.value.clone()).collect(),
        };
        if self.is_started_from_zero() {
            items.push(Value::Number(0.0));
        }
        items
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Series")
            .field("points", &self.points)
            .field("scale_name", &self.scale_name)
            .field("point_transformer", &self.point_transformer)
            .field("value_domain", &self.value_domain.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
