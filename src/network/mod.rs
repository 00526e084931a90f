//! The co-stardom network: actors and movies as vertices of one graph.
//!
//! Each credit becomes two edges, `actor -acts in-> movie` and
//! `movie -features-> actor`, so the graph is bipartite and symmetric. Name
//! lookup tables are kept next to the graph and map to vertex handles.

pub mod record;
pub mod route;

pub use record::{parse_record, CastMember, DatasetError, MovieRecord};
pub use route::Route;

use crate::graph::{Graph, GraphError, InsertionError, SparseGraph, VertexPos};
use crate::solver;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};

/// Edge payload of the co-stardom graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Actor to movie.
    ActsIn,
    /// Movie to actor.
    Features,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActsIn => f.write_str("acts in"),
            Self::Features => f.write_str("features"),
        }
    }
}

/// Errors from building or querying a [`CoStarNetwork`].
#[derive(Debug)]
pub enum NetworkError {
    /// No actor with this (case-insensitive) name.
    UnknownActor(String),
    /// The underlying graph rejected an operation.
    Graph(GraphError),
    /// The dataset could not be read.
    Dataset(DatasetError),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActor(name) => write!(f, "no such actor: {name}"),
            Self::Graph(err) => write!(f, "graph error: {err}"),
            Self::Dataset(err) => write!(f, "failed to read dataset: {err}"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownActor(_) => None,
            Self::Graph(err) => Some(err),
            Self::Dataset(err) => Some(err),
        }
    }
}

impl From<GraphError> for NetworkError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

impl From<DatasetError> for NetworkError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(err)
    }
}

/// Summary of a [`CoStarNetwork::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Rows turned into movies.
    pub movies: usize,
    /// Malformed rows that were skipped.
    pub skipped: usize,
}

/// Actors and movies in one graph, with name indexes.
#[derive(Debug, Default)]
pub struct CoStarNetwork {
    graph: SparseGraph<String, Relation>,
    movies: HashMap<String, VertexPos>,
    actors: HashMap<String, VertexPos>,
}

impl CoStarNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &SparseGraph<String, Relation> {
        &self.graph
    }

    /// Number of distinct movie titles.
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of distinct actors.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Handle of the actor called `name`, ignoring case.
    pub fn actor(&self, name: &str) -> Option<VertexPos> {
        self.actors.get(&normalize(name)).copied()
    }

    /// Handle of the movie titled exactly `title`.
    pub fn movie(&self, title: &str) -> Option<VertexPos> {
        self.movies.get(title).copied()
    }

    /// Adds a movie and links every cast member to it in both directions.
    ///
    /// Titles and actors seen before reuse their vertices. A cast member listed
    /// twice for the same movie is linked once.
    ///
    /// # Errors
    /// Propagates graph errors other than duplicate edges.
    pub fn add_movie(&mut self, record: &MovieRecord) -> Result<VertexPos, NetworkError> {
        let graph = &mut self.graph;
        let movie = *self
            .movies
            .entry(record.title.clone())
            .or_insert_with(|| graph.insert_vertex(record.title.clone()));

        for member in &record.cast {
            let name = normalize(&member.name);
            if name.is_empty() {
                continue;
            }
            let actor = match self.actors.get(&name) {
                Some(&actor) => actor,
                None => {
                    let actor = self.graph.insert_vertex(name.clone());
                    self.actors.insert(name, actor);
                    actor
                }
            };

            link(&mut self.graph, movie, actor, Relation::Features)?;
            link(&mut self.graph, actor, movie, Relation::ActsIn)?;
        }

        Ok(movie)
    }

    /// Reads a CSV dataset: a header row, then one movie per row.
    ///
    /// Malformed rows are logged and skipped.
    ///
    /// # Errors
    /// I/O failures and graph errors abort the load.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<LoadStats, NetworkError> {
        let mut stats = LoadStats::default();
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        for row in rows.records() {
            let (line, record) = match row {
                Ok(row) => (row.position().map(csv::Position::line), MovieRecord::from_row(&row)),
                Err(err) => (err.position().map(csv::Position::line), Err(err.into())),
            };
            match record {
                Ok(record) => {
                    self.add_movie(&record)?;
                    stats.movies += 1;
                }
                Err(err) if err.is_io() => return Err(err.into()),
                Err(err) => {
                    let line = line.unwrap_or_default();
                    warn!(line, error = %err, "skipping malformed record");
                    stats.skipped += 1;
                }
            }
        }

        info!(
            movies = self.movie_count(),
            actors = self.actor_count(),
            edges = self.graph.edge_count(),
            skipped = stats.skipped,
            "dataset loaded"
        );
        Ok(stats)
    }

    /// Shortest chain of co-stars from `from` to `to`.
    ///
    /// Returns `Ok(None)` when the two actors are not connected.
    ///
    /// # Errors
    /// [`NetworkError::UnknownActor`] if either name is not in the network.
    pub fn connect(&self, from: &str, to: &str) -> Result<Option<Route>, NetworkError> {
        let source = self.actor(from).ok_or_else(|| NetworkError::UnknownActor(from.to_owned()))?;
        let target = self.actor(to).ok_or_else(|| NetworkError::UnknownActor(to.to_owned()))?;

        let Some(path) = solver::shortest_path(&self.graph, source, target)? else {
            debug!(from, to, "actors are not connected");
            return Ok(None);
        };
        Ok(Some(Route::new(path.into_iter().cloned().collect())))
    }
}

/// Inserts `from -> to`, treating an existing edge as success.
fn link(
    graph: &mut SparseGraph<String, Relation>,
    from: VertexPos,
    to: VertexPos,
    relation: Relation,
) -> Result<(), GraphError> {
    match graph.insert_edge(from, to, relation) {
        Ok(_) | Err(GraphError::Insertion(InsertionError::Duplicate)) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Actor names are matched case-insensitively.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
