/// Action and observation spaces.

pub mod space;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

pub use space::Space;

/// A discrete space of integers in [0, n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: u32,
}

impl Discrete {
    pub fn new(n: u32) -> Self {
        assert!(n > 0, "Discrete space requires n > 0");
        Self { n }
    }

    pub fn n(&self) -> u32 { self.n }
}

impl Space for Discrete {
    type Element = u32;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        if self.n == 1 { return 0; }
        let dist = Uniform::from(0..self.n);
        dist.sample(rng)
    }

    fn contains(&self, elem: &Self::Element) -> bool { *elem < self.n }
}

/// A multi-dimensional discrete space with per-dimension sizes nvec[i] (values in [0, nvec[i])).
/// The gridworld observation space is `MultiDiscrete([rows, cols])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiscrete {
    nvec: Vec<u32>,
}

impl MultiDiscrete {
    pub fn new<I: Into<Vec<u32>>>(nvec: I) -> Self {
        let nvec = nvec.into();
        assert!(!nvec.is_empty(), "MultiDiscrete requires at least one dimension");
        for (i, &n) in nvec.iter().enumerate() {
            assert!(n > 0, "MultiDiscrete nvec[{i}] must be > 0");
        }
        Self { nvec }
    }

    pub fn nvec(&self) -> &[u32] { &self.nvec }
    pub fn ndim(&self) -> usize { self.nvec.len() }
}

impl Space for MultiDiscrete {
    type Element = Vec<u32>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.nvec
            .iter()
            .map(|&n| if n == 1 { 0 } else { Uniform::from(0..n).sample(rng) })
            .collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        if elem.len() != self.nvec.len() { return false; }
        elem.iter().zip(self.nvec.iter()).all(|(&v, &n)| v < n)
    }
}
