//! Named formation patterns
//!
//! Patterns exist for variety, not placement: the current pattern's name
//! decides timed cycling order and which pattern a respawned wave must not
//! reuse. Slot positions always derive from the circular layout, so the
//! outline points are descriptive data for hosts that want to visualize
//! the current pattern.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named shape definition with a normalized `[0, 1]` outline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub points: Vec<Vec2>,
}

impl Pattern {
    fn new(name: &str, points: &[(f32, f32)]) -> Self {
        Self {
            name: name.to_string(),
            points: points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        }
    }
}

/// Ordered catalog of the named patterns
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl PatternLibrary {
    /// The built-in catalog, in cycling order
    pub fn standard() -> Self {
        Self {
            patterns: vec![
                Pattern::new(
                    "infinity",
                    &[
                        (0.2, 0.3),
                        (0.35, 0.2),
                        (0.5, 0.3),
                        (0.65, 0.4),
                        (0.8, 0.3),
                        (0.65, 0.2),
                        (0.5, 0.3),
                        (0.35, 0.4),
                    ],
                ),
                Pattern::new(
                    "circle",
                    &[
                        (0.75, 0.3),
                        (0.68, 0.48),
                        (0.5, 0.55),
                        (0.32, 0.48),
                        (0.25, 0.3),
                        (0.32, 0.12),
                        (0.5, 0.05),
                        (0.68, 0.12),
                    ],
                ),
                Pattern::new(
                    "wave",
                    &[
                        (0.1, 0.3),
                        (0.3, 0.2),
                        (0.5, 0.3),
                        (0.7, 0.4),
                        (0.9, 0.3),
                        (0.7, 0.25),
                        (0.5, 0.35),
                        (0.3, 0.4),
                    ],
                ),
                Pattern::new(
                    "diamond",
                    &[(0.5, 0.1), (0.8, 0.3), (0.5, 0.5), (0.2, 0.3)],
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern(&self, index: usize) -> &Pattern {
        &self.patterns[index]
    }

    /// Catalog index of `name`, if known
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name == name)
    }

    /// Next catalog index in cycling order, wrapping
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.patterns.len()
    }

    /// Uniformly random index distinct from `current` (identity when the
    /// catalog has a single entry)
    pub fn random_other<R: Rng>(&self, rng: &mut R, current: usize) -> usize {
        if self.patterns.len() <= 1 {
            return current;
        }
        let mut index = rng.random_range(0..self.patterns.len() - 1);
        if index >= current {
            index += 1;
        }
        index
    }
}
