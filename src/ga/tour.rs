//! Candidate tours.
//!
//! A [`Tour`] is an ordered sequence of city handles that visits each city
//! of its registry exactly once and closes back on its first city. The
//! total length is computed lazily and cached; any write to a slot drops
//! the cache.

use crate::city::{CityId, CityRegistry, Point};
use crate::error::GaError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::Cell;
use std::fmt;

/// A candidate solution: a closed tour over every city in a registry.
///
/// While crossover builds a child, some slots may still be empty. Such a
/// tour has no defined length; [`try_length`](Tour::try_length) reports
/// [`GaError::InvalidState`] and [`length`](Tour::length) panics.
///
/// # Examples
///
/// ```
/// use u_salesman::city::{CityRegistry, Point};
/// use u_salesman::ga::Tour;
///
/// let registry = CityRegistry::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ]);
/// let tour = Tour::in_registry_order(&registry);
/// assert_eq!(tour.length(), 40.0);
/// assert_eq!(tour.fitness(), 1.0 / 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    registry: &'a CityRegistry,
    slots: Vec<Option<CityId>>,
    length: Cell<Option<f64>>,
}

impl<'a> Tour<'a> {
    /// A tour with every slot empty.
    pub fn empty(registry: &'a CityRegistry) -> Self {
        Self {
            registry,
            slots: vec![None; registry.count()],
            length: Cell::new(None),
        }
    }

    /// A uniformly random permutation of the registry.
    pub fn random<R: Rng>(registry: &'a CityRegistry, rng: &mut R) -> Self {
        let mut tour = Self::in_registry_order(registry);
        tour.slots.shuffle(rng);
        tour
    }

    /// Visits the cities in the order they were registered.
    pub fn in_registry_order(registry: &'a CityRegistry) -> Self {
        Self {
            registry,
            slots: registry.ids().map(Some).collect(),
            length: Cell::new(None),
        }
    }

    /// Builds a tour from an explicit visiting order.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of the registry's cities.
    pub fn from_order(registry: &'a CityRegistry, order: Vec<CityId>) -> Self {
        let tour = Self {
            registry,
            slots: order.into_iter().map(Some).collect(),
            length: Cell::new(None),
        };
        assert!(
            tour.is_permutation(),
            "order must visit every registered city exactly once"
        );
        tour
    }

    pub fn registry(&self) -> &'a CityRegistry {
        self.registry
    }

    /// Number of slots (always the registry's city count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// City at `position`, or `None` if the slot has not been filled yet.
    pub fn get(&self, position: usize) -> Option<CityId> {
        self.slots[position]
    }

    /// Places `city` at `position`.
    ///
    /// Always invalidates the cached length, even when the slot already
    /// held `city`.
    pub fn set(&mut self, position: usize, city: CityId) {
        self.slots[position] = Some(city);
        self.length.set(None);
    }

    /// Identity-based membership test. O(n).
    pub fn contains(&self, city: CityId) -> bool {
        self.slots.contains(&Some(city))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True when every registered city appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.registry.count();
        if self.slots.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for slot in &self.slots {
            match slot {
                Some(id) if id.index() < n && !seen[id.index()] => seen[id.index()] = true,
                _ => return false,
            }
        }
        true
    }

    /// Filled slots in visiting order.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Coordinates of the filled slots in visiting order.
    pub fn points(&self) -> Vec<Point> {
        self.cities().map(|id| self.registry.city_at(id)).collect()
    }

    /// Total closed-tour length, including the edge from the last city
    /// back to the first.
    ///
    /// Returns [`GaError::InvalidState`] if any slot is empty.
    pub fn try_length(&self) -> Result<f64, GaError> {
        if let Some(length) = self.length.get() {
            return Ok(length);
        }
        let n = self.slots.len();
        let mut total = 0.0;
        for i in 0..n {
            let from = self.filled(i)?;
            let to = self.filled((i + 1) % n)?;
            total += self.registry.distance(from, to);
        }
        self.length.set(Some(total));
        Ok(total)
    }

    /// Total closed-tour length.
    ///
    /// # Panics
    /// Panics on an incomplete tour. Incomplete tours only exist inside
    /// crossover and are never handed out.
    pub fn length(&self) -> f64 {
        match self.try_length() {
            Ok(length) => length,
            Err(err) => panic!("{err}"),
        }
    }

    /// `1 / length`. Higher is better.
    pub fn fitness(&self) -> f64 {
        1.0 / self.length()
    }

    fn filled(&self, position: usize) -> Result<CityId, GaError> {
        self.slots[position].ok_or(GaError::InvalidState { position })
    }
}

impl PartialEq for Tour<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.slots == other.slots
    }
}

impl fmt::Display for Tour<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for slot in &self.slots {
            match slot {
                Some(id) => write!(f, "{}|", self.registry.city_at(*id))?,
                None => f.write_str("_|")?,
            }
        }
        Ok(())
    }
}
