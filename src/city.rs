//! Cities and the registry that owns them.
//!
//! Tours never hold coordinates. They hold [`CityId`] handles into a
//! [`CityRegistry`], which is built once and read-only afterwards. Two
//! cities are "the same" only when their handles are equal, so coincident
//! coordinates never collide in a membership check.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Upper bound (exclusive) of randomly generated coordinates on both axes.
pub const RANDOM_COORDINATE_BOUND: u32 = 200;

/// An immutable 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Failure to parse a `"X,Y"` coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePointError {
    #[error("expected a coordinate pair `X,Y`, got {0:?}")]
    Format(String),
    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::Format(s.to_string()))?;
        let parse = |part: &str| -> Result<f64, ParsePointError> {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(ParsePointError::Coordinate(part.to_string())),
            }
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}

/// Handle to a city in a [`CityRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(usize);

impl CityId {
    /// Position of the city in its registry.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The ordered, read-only set of cities a run works on.
///
/// # Examples
///
/// ```
/// use u_salesman::city::{CityRegistry, Point};
///
/// let registry = CityRegistry::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// let ids: Vec<_> = registry.ids().collect();
/// assert_eq!(registry.count(), 2);
/// assert_eq!(registry.distance(ids[0], ids[1]), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityRegistry {
    points: Vec<Point>,
}

impl CityRegistry {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Generates `count` cities with integer coordinates drawn uniformly
    /// from `[0, 200)` on each axis.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| {
                let x = rng.random_range(0..RANDOM_COORDINATE_BOUND);
                let y = rng.random_range(0..RANDOM_COORDINATE_BOUND);
                Point::new(f64::from(x), f64::from(y))
            })
            .collect();
        Self { points }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinates of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn city_at(&self, id: CityId) -> Point {
        self.points[id.0]
    }

    /// Handle for the city at `index`, if it exists.
    pub fn id(&self, index: usize) -> Option<CityId> {
        (index < self.points.len()).then_some(CityId(index))
    }

    /// Handles in registry order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = CityId> {
        (0..self.points.len()).map(CityId)
    }

    /// Ordered snapshot of every city.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn distance(&self, a: CityId, b: CityId) -> f64 {
        self.city_at(a).distance_to(&self.city_at(b))
    }
}

impl FromIterator<Point> for CityRegistry {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
