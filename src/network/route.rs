//! Presentation of a solved connection.

use core::fmt;
use serde::{Deserialize, Serialize};

/// An alternating actor / movie / actor ... sequence.
///
/// Even positions are actors, odd positions are movies. The first and last
/// entries are the two actors that were connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    steps: Vec<String>,
}

impl Route {
    /// Wraps a payload sequence produced by the solver.
    pub fn new(steps: Vec<String>) -> Self {
        debug_assert!(steps.len() % 2 == 1, "a route starts and ends with an actor");
        Self { steps }
    }

    /// Number of movies crossed.
    pub fn degrees(&self) -> usize {
        self.steps.len() / 2
    }

    /// Every entry, actors and movies interleaved.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Actors along the route.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().step_by(2).map(String::as_str)
    }

    /// Movies along the route.
    pub fn movies(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().skip(1).step_by(2).map(String::as_str)
    }

    /// One line per hop: "X acts in Y" for actor-to-movie, "Y features Z"
    /// for movie-to-actor.
    pub fn describe(&self) -> Vec<String> {
        self.steps
            .windows(2)
            .enumerate()
            .map(|(i, hop)| {
                if i % 2 == 0 {
                    format!("{} acts in {}", hop[0], hop[1])
                } else {
                    format!("{} features {}", hop[0], hop[1])
                }
            })
            .collect()
    }
}

impl fmt::Display for Route {
    /// Actors joined by ` --> `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, actor) in self.actors().enumerate() {
            if i > 0 {
                f.write_str(" --> ")?;
            }
            f.write_str(actor)?;
        }
        Ok(())
    }
}
