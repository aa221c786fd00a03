//! Identifier-level entry points.
//!
//! The adjacency structure is deliberately not symmetric: an edge between the
//! nodes at positions `i <= j` is stored once, as `adjacency[id_i][id_j] = true`.
//! Every identifier owns an outer entry, which is empty if the node has no edge
//! to itself or to a later node. A self loop `(id, id)` may be present.

use crate::algorithm::algo_sequential::AlgoSequential;
use crate::algorithm::Algorithm;
use crate::edge_writer::{EdgeCounter, EdgeWriter, Tee};
use crate::error::GeneratorError;
use crate::latent::LatentVariables;
use crate::parameters::{Hyperparameters, Model};
use crate::Node;
use fxhash::FxHashMap;
use rand::{Rng, SeedableRng};
use std::hash::Hash;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency<Id: Eq + Hash> {
    map: FxHashMap<Id, FxHashMap<Id, bool>>,
}

impl<Id: Eq + Hash> Default for Adjacency<Id> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<Id: Eq + Hash> Adjacency<Id> {
    /// True iff the edge is stored under `first`, i.e. `first` precedes (or equals)
    /// `second` in the input and the pair was connected.
    pub fn contains(&self, first: &Id, second: &Id) -> bool {
        self.map
            .get(first)
            .map_or(false, |row| row.contains_key(second))
    }

    /// Direction-agnostic lookup.
    pub fn is_adjacent(&self, a: &Id, b: &Id) -> bool {
        self.contains(a, b) || self.contains(b, a)
    }

    /// Edges stored under `id`.
    pub fn row(&self, id: &Id) -> Option<&FxHashMap<Id, bool>> {
        self.map.get(id)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.map.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.map.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &FxHashMap<Id, bool>)> {
        self.map.iter()
    }

    pub fn into_inner(self) -> FxHashMap<Id, FxHashMap<Id, bool>> {
        self.map
    }
}

/// Maps the index-level edges of an [`Algorithm`] onto node identifiers.
struct AdjacencyWriter<'a, Id: Eq + Hash> {
    ids: &'a [Id],
    adjacency: &'a mut Adjacency<Id>,
}

impl<'a, Id: Clone + Eq + Hash> AdjacencyWriter<'a, Id> {
    fn new(ids: &'a [Id], adjacency: &'a mut Adjacency<Id>) -> Self {
        for id in ids {
            adjacency.map.entry(id.clone()).or_default();
        }
        Self { ids, adjacency }
    }
}

impl<'a, Id: Clone + Eq + Hash> EdgeWriter for AdjacencyWriter<'a, Id> {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.adjacency
            .map
            .entry(self.ids[u].clone())
            .or_default()
            .insert(self.ids[v].clone(), true);
    }
}

/// Display-only polar position of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinate {
    /// `C - 3 ln(kappa)`
    pub radius: f64,
    /// `360 x`, in degrees
    pub angle: f64,
}

impl PolarCoordinate {
    pub fn from_latent(radial_offset: f64, position: f64, kappa: f64) -> Self {
        Self {
            radius: radial_offset - 3.0 * kappa.ln(),
            angle: 360.0 * position,
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.radius, self.angle)
    }
}

pub type Coordinates<Id> = FxHashMap<Id, PolarCoordinate>;

pub fn check_unique<Id: Eq + Hash>(node_ids: &[Id]) -> Result<(), GeneratorError> {
    let mut seen: FxHashMap<&Id, usize> = FxHashMap::default();
    seen.reserve(node_ids.len());

    for (second, id) in node_ids.iter().enumerate() {
        if let Some(first) = seen.insert(id, second) {
            return Err(GeneratorError::DuplicateIdentifier { first, second });
        }
    }

    Ok(())
}

/// Samples hidden variables for `node_ids` and materialises the graph with the
/// sequential algorithm. Any generator works; seed it for reproducible output.
/// See [`generate_with`] for the draw order.
pub fn generate<Id, R>(
    node_ids: &[Id],
    hyperparameters: &Hyperparameters,
    rng: &mut R,
) -> Result<(Adjacency<Id>, Coordinates<Id>), GeneratorError>
where
    Id: Clone + Eq + Hash,
    R: Rng,
{
    let model = hyperparameters.validate()?;
    check_unique(node_ids)?;

    let latents = LatentVariables::sample(rng, node_ids.len(), &model.pareto);
    materialise(node_ids, &latents, &model, false, |writer| {
        AlgoSequential::from_model(&model, 1).sample_edges(rng, &latents, writer);
        Ok(())
    })
}

/// Validates all inputs, then draws all angular positions, then all kappas, and
/// finally hands the pairs to algorithm `A`. Nothing is drawn from `rng` if
/// validation fails.
pub fn generate_with<A, Id, R>(
    node_ids: &[Id],
    hyperparameters: &Hyperparameters,
    rng: &mut R,
    num_threads: usize,
) -> Result<(Adjacency<Id>, Coordinates<Id>), GeneratorError>
where
    A: Algorithm,
    Id: Clone + Eq + Hash,
    R: Rng + SeedableRng,
{
    let model = hyperparameters.validate()?;
    check_unique(node_ids)?;

    let latents = LatentVariables::sample(rng, node_ids.len(), &model.pareto);
    materialise(node_ids, &latents, &model, A::IS_PARALLEL, |writer| {
        A::from_model(&model, num_threads).run(rng, &latents, writer)
    })
}

/// Materialises a graph from caller-supplied hidden variables with the sequential
/// algorithm. Only the pairwise draws are taken from `rng`.
pub fn build_graph<Id, R>(
    node_ids: &[Id],
    latents: &LatentVariables,
    hyperparameters: &Hyperparameters,
    rng: &mut R,
) -> Result<(Adjacency<Id>, Coordinates<Id>), GeneratorError>
where
    Id: Clone + Eq + Hash,
    R: Rng,
{
    let model = hyperparameters.validate()?;
    check_unique(node_ids)?;

    if node_ids.len() != latents.len() {
        return Err(GeneratorError::LengthMismatch {
            nodes: node_ids.len(),
            latents: latents.len(),
        });
    }

    materialise(node_ids, latents, &model, false, |writer| {
        AlgoSequential::from_model(&model, 1).sample_edges(rng, latents, writer);
        Ok(())
    })
}

fn materialise<Id, F>(
    node_ids: &[Id],
    latents: &LatentVariables,
    model: &Model,
    parallel: bool,
    sample_edges: F,
) -> Result<(Adjacency<Id>, Coordinates<Id>), GeneratorError>
where
    Id: Clone + Eq + Hash,
    F: FnOnce(&mut dyn EdgeWriter) -> Result<(), GeneratorError>,
{
    let start = Instant::now();

    let mut adjacency = Adjacency::default();
    let mut counter = EdgeCounter::default();
    {
        let mut writer = AdjacencyWriter::new(node_ids, &mut adjacency);
        let mut tee = Tee::new(&mut writer, &mut counter);
        sample_edges(&mut tee)?;
    }

    let coordinates = node_ids
        .iter()
        .enumerate()
        .map(|(u, id)| {
            let coord = PolarCoordinate::from_latent(
                model.radial_offset,
                latents.position(u),
                latents.kappa(u),
            );
            (id.clone(), coord)
        })
        .collect();

    tracing::info!(
        nodes = node_ids.len(),
        edges = counter.number_of_edges(),
        self_loops = counter.number_of_self_loops(),
        parallel,
        runtime_s = start.elapsed().as_secs_f64(),
        "graph materialised"
    );

    Ok((adjacency, coordinates))
}
