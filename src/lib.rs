//! Domain and scale computation for charts
//!
//! `omfang` turns chart series into ready-to-use scales. It focuses on the
//! data side of charting: working out what each axis has to show and how data
//! values map onto pixels. Rendering, layout and interaction are left to the
//! caller.
//!
//! # Core Concepts
//!
//! ## Domains
//!
//! A domain is the set of values one axis maps from. Every chart has an
//! argument domain ([`ARGUMENT_DOMAIN`]) and a value domain ([`VALUE_DOMAIN`]);
//! series may place their values on additional named domains. Domains are
//! configured through a [`DomainMap`]:
//! - an optional scale factory (otherwise inferred from the data)
//! - optional `min`/`max` bounds overriding the computed extent
//! - free-form hints passed through to the resolved domain
//!
//! [`compute_domains`] merges all series into [`ResolvedDomains`]:
//! - Continuous domains span the min/max over every contributing series
//! - Discrete domains list the distinct values in first-seen order
//!
//! ## Scales
//!
//! [`build_scales`] creates one [`Scale`](scale::Scale) per resolved domain:
//! - [`scale::LinearScale`] - Linear interpolation for numeric domains
//! - [`scale::BandScale`] - Equal-width bands for categorical domains
//!
//! The argument scale spans `[0, width]`; all other scales span `[height, 0]`,
//! since screen y grows downward while values grow upward.
//!
//! # Examples
//!
//! ## Continuous Domains
//!
//! ```rust
//! use omfang::{DomainExtent, DomainMap, Point, Series, VALUE_DOMAIN, compute_domains};
//!
//! let series = vec![
//!     Series::new(vec![Point::new(1, 9), Point::new(2, -10)]),
//! ];
//! let domains = compute_domains(&DomainMap::default_domains(), &series);
//!
//! let value = domains.get(VALUE_DOMAIN).unwrap();
//! assert_eq!(value.domain, DomainExtent::Continuous { min: -10.0, max: 9.0 });
//! ```
//!
//! ## Categorical Arguments
//!
//! ```rust
//! use omfang::{ARGUMENT_DOMAIN, DomainExtent, DomainMap, Point, Series, Value, compute_domains};
//!
//! let series = vec![Series::new(vec![
//!     Point::new("b", 1),
//!     Point::new("a", 2),
//!     Point::new("b", 3),
//! ])];
//! let domains = compute_domains(&DomainMap::default_domains(), &series);
//!
//! let argument = domains.get(ARGUMENT_DOMAIN).unwrap();
//! assert!(argument.is_discrete);
//! assert_eq!(argument.factory.name(), "band");
//! assert_eq!(
//!     argument.domain,
//!     DomainExtent::Discrete(vec![Value::from("b"), Value::from("a")])
//! );
//! ```
//!
//! ## Bounds and Scales
//!
//! ```rust
//! use omfang::{DomainConfig, DomainMap, Point, Series, Size, Value, build_scales, compute_domains};
//!
//! let config = DomainMap::default_domains()
//!     .add_domain("percent", DomainConfig::default().with_min(0.0).with_max(100.0));
//! let series = vec![
//!     Series::new(vec![Point::new(0, 12), Point::new(10, 48)]).with_scale_name("percent"),
//! ];
//!
//! let domains = compute_domains(&config, &series);
//! let scales = build_scales(&domains, Size::new(640.0, 480.0));
//!
//! let percent = scales.get("percent").unwrap();
//! assert_eq!(percent.map(&Value::from(50)), Some(240.0));
//! ```
//!

pub mod builder;
pub mod domain;
pub mod error;
pub mod scale;
pub mod series;
pub mod transform;
pub mod value;

pub use builder::{ScaleMap, build_scales};
pub use domain::{
    ARGUMENT_DOMAIN, DomainConfig, DomainExtent, DomainMap, ResolvedDomain, ResolvedDomains,
    VALUE_DOMAIN, add_domain, compute_domains, default_domains,
};
pub use error::{Error, Result};
pub use series::{Point, PointTransformer, Series, ValueDomainFn};
pub use transform::{ScreenPoint, Size};
pub use value::Value;
