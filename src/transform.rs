//! Plot-area geometry and projection of series points into screen space.
//!
//! Screen coordinates follow the usual convention:
//!
//! - Origin (0, 0) is the top-left corner of the plot area
//! - X increases to the right
//! - Y increases downward
//!
//! Value scales are built with an inverted range (`[height, 0]`), so larger
//! values end up higher on screen without any extra flipping here.
//!
//! # Examples
//!
//! ```rust
//! use omfang::{DomainMap, Point, Series, Size, build_scales, compute_domains, transform};
//!
//! let series = vec![Series::new(vec![Point::new(0, 0), Point::new(10, 50)])];
//! let domains = compute_domains(&DomainMap::default_domains(), &series);
//! let scales = build_scales(&domains, Size::new(800.0, 600.0));
//!
//! let points = transform::project(&scales, &series[0]);
//! let last = points[1].unwrap();
//! assert_eq!((last.x, last.y), (800.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::builder::ScaleMap;
use crate::scale::Scale;
use crate::series::{Point, Series};
use crate::value::Value;

/// Size of the plot area in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// X coordinate in pixels.
    pub x: f64,
    /// Y coordinate in pixels.
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position of `value` on `scale`; banded positions are moved to the band centre.
pub fn position(scale: &dyn Scale, value: &Value) -> Option<f64> {
    let start = scale.map(value)?;
    Some(match scale.bandwidth() {
        Some(width) => start + width / 2.0,
        None => start,
    })
}

/// Projects one point using the argument scale and the scale of `value_domain`.
pub fn project_point(scales: &ScaleMap, value_domain: &str, point: &Point) -> Option<ScreenPoint> {
    let x = position(scales.argument()?, &point.argument)?;
    let y = position(scales.get(value_domain)?, &point.value)?;
    Some(ScreenPoint::new(x, y))
}

/// Projects every point of a series; unplaceable points yield `None`.
pub fn project(scales: &ScaleMap, series: &Series) -> Vec<Option<ScreenPoint>> {
    let value_domain = series.value_domain_name();
    series
        .points
        .iter()
        .map(|point| project_point(scales, value_domain, point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainConfig, DomainMap, build_scales, compute_domains, scale};

    fn assert_point(actual: Option<ScreenPoint>, x: f64, y: f64) {
        let actual = actual.expect("point should be projected");
        assert!(
            (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_continuous_points_use_inverted_value_axis() {
        let series = Series::new(vec![Point::new(100, -50), Point::new(200, 50)]);
        let domains = compute_domains(&DomainMap::default_domains(), std::slice::from_ref(&series));
        let scales = build_scales(&domains, Size::new(800.0, 400.0));

        let points = project(&scales, &series);
        assert_point(points[0], 0.0, 400.0);
        assert_point(points[1], 800.0, 0.0);
    }

    #[test]
    fn test_banded_arguments_are_centred() {
        let series = Series::new(vec![
            Point::new("a", 0),
            Point::new("b", 10),
            Point::new("c", 5),
        ]);
        let domains = compute_domains(&DomainMap::default_domains(), std::slice::from_ref(&series));
        let scales = build_scales(&domains, Size::new(300.0, 100.0));

        // step 100, bandwidth 70, first band starts at 15
        let points = project(&scales, &series);
        assert_point(points[0], 50.0, 100.0);
        assert_point(points[1], 150.0, 0.0);
        assert_point(points[2], 250.0, 50.0);
    }

    #[test]
    fn test_series_on_custom_domain_uses_its_scale() {
        let config = DomainMap::default_domains().add_domain(
            "secondary",
            DomainConfig::default().with_factory(scale::linear()).with_min(0.0).with_max(10.0),
        );
        let series = Series::new(vec![Point::new(1, 5), Point::new(2, 10)]).with_scale_name("secondary");
        let domains = compute_domains(&config, std::slice::from_ref(&series));
        let scales = build_scales(&domains, Size::new(100.0, 200.0));

        let points = project(&scales, &series);
        assert_point(points[0], 0.0, 100.0);
        assert_point(points[1], 100.0, 0.0);
    }

    #[test]
    fn test_unknown_domains_and_values_are_skipped() {
        let series = Series::new(vec![Point::new(1, 1), Point::new(2, 2)]);
        let domains = compute_domains(&DomainMap::default_domains(), std::slice::from_ref(&series));
        let scales = build_scales(&domains, Size::new(100.0, 100.0));

        let elsewhere = series.clone().with_scale_name("missing");
        assert!(project(&scales, &elsewhere).iter().all(Option::is_none));

        let stray = Point::new("x", 1);
        assert_eq!(project_point(&scales, crate::VALUE_DOMAIN, &stray), None);
    }
}
