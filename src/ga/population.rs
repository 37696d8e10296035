//! Fixed-size populations of tours.

use super::tour::Tour;
use crate::city::CityRegistry;
use rand::Rng;

/// An ordered, fixed-size collection of tours.
///
/// Each slot owns its tour. A new generation is a new `Population`; slots
/// are only ever replaced wholesale through [`save`](Population::save).
#[derive(Debug, Clone)]
pub struct Population<'a> {
    tours: Vec<Tour<'a>>,
}

impl<'a> Population<'a> {
    /// `size` independently shuffled tours.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn random<R: Rng>(registry: &'a CityRegistry, size: usize, rng: &mut R) -> Self {
        assert!(size > 0, "population must not be empty");
        let tours = (0..size).map(|_| Tour::random(registry, rng)).collect();
        Self { tours }
    }

    /// Wraps already-built tours.
    ///
    /// # Panics
    /// Panics if `tours` is empty.
    pub fn from_tours(tours: Vec<Tour<'a>>) -> Self {
        assert!(!tours.is_empty(), "population must not be empty");
        Self { tours }
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    pub fn get(&self, index: usize) -> &Tour<'a> {
        &self.tours[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Tour<'a> {
        &mut self.tours[index]
    }

    /// Replaces the tour in slot `index`.
    pub fn save(&mut self, index: usize, tour: Tour<'a>) {
        self.tours[index] = tour;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tour<'a>> {
        self.tours.iter()
    }

    /// Index of the fittest tour.
    ///
    /// Linear scan that only moves on a strictly greater fitness, so among
    /// equally fit tours the earliest slot wins.
    pub fn fittest_index(&self) -> usize {
        let mut best = 0;
        for (i, tour) in self.tours.iter().enumerate().skip(1) {
            if tour.fitness() > self.tours[best].fitness() {
                best = i;
            }
        }
        best
    }

    pub fn fittest(&self) -> &Tour<'a> {
        &self.tours[self.fittest_index()]
    }

    /// Mean tour length across all slots.
    pub fn mean_length(&self) -> f64 {
        self.tours.iter().map(Tour::length).sum::<f64>() / self.tours.len() as f64
    }
}

impl<'p, 'a> IntoIterator for &'p Population<'a> {
    type Item = &'p Tour<'a>;
    type IntoIter = std::slice::Iter<'p, Tour<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{CityId, Point};
    use crate::random::create_rng;

    fn square() -> CityRegistry {
        CityRegistry::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    fn crossing<'a>(registry: &'a CityRegistry) -> Tour<'a> {
        let c: Vec<CityId> = registry.ids().collect();
        Tour::from_order(registry, vec![c[0], c[2], c[1], c[3]])
    }

    #[test]
    fn test_random_population_size() {
        let registry = CityRegistry::random(10, &mut create_rng(1));
        let pop = Population::random(&registry, 25, &mut create_rng(2));
        assert_eq!(pop.len(), 25);
        assert!(pop.iter().all(Tour::is_permutation));
    }

    #[test]
    fn test_fittest_picks_shortest() {
        let registry = square();
        let pop = Population::from_tours(vec![
            crossing(&registry),
            crossing(&registry),
            Tour::in_registry_order(&registry),
            crossing(&registry),
        ]);
        assert_eq!(pop.fittest_index(), 2);
        assert!((pop.fittest().length() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_fittest_tie_keeps_earliest() {
        let registry = square();
        let c: Vec<CityId> = registry.ids().collect();
        // Same cycle, different starting city: equal length.
        let rotated = Tour::from_order(&registry, vec![c[1], c[2], c[3], c[0]]);
        let pop = Population::from_tours(vec![
            crossing(&registry),
            Tour::in_registry_order(&registry),
            crossing(&registry),
            Tour::in_registry_order(&registry),
            rotated,
        ]);
        assert_eq!(pop.fittest_index(), 1);
    }

    #[test]
    fn test_save_replaces_slot() {
        let registry = square();
        let mut pop = Population::from_tours(vec![crossing(&registry), crossing(&registry)]);
        pop.save(1, Tour::in_registry_order(&registry));
        assert_eq!(pop.get(1), &Tour::in_registry_order(&registry));
        assert_eq!(pop.fittest_index(), 1);
    }

    #[test]
    fn test_mean_length() {
        let registry = square();
        let pop = Population::from_tours(vec![
            Tour::in_registry_order(&registry),
            crossing(&registry),
        ]);
        let expected = (40.0 + 20.0 + 2.0 * 200f64.sqrt()) / 2.0;
        assert!((pop.mean_length() - expected).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_empty_population_panics() {
        Population::from_tours(Vec::new());
    }
}
