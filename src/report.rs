use crate::generator::{Adjacency, Coordinates};
use itertools::Itertools;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

/// Writes one `#E u v` line per stored edge, then one `#C id radius angle` line
/// per node. Both blocks follow the order of `node_ids`.
pub fn report_graph<Id: Display + Eq + Hash>(
    node_ids: &[Id],
    adjacency: &Adjacency<Id>,
    coordinates: &Coordinates<Id>,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    let edges = node_ids
        .iter()
        .enumerate()
        .flat_map(move |(i, u)| {
            node_ids[i..]
                .iter()
                .filter(move |v| adjacency.contains(u, v))
                .map(move |v| format!("#E {} {}\n", u, v))
        })
        .join("");

    let coords = node_ids
        .iter()
        .filter_map(|id| coordinates.get(id).map(|c| (id, c)))
        .map(|(id, c)| format!("#C {} {:.6} {:.6}\n", id, c.radius, c.angle))
        .join("");

    writer.write_all(edges.as_bytes())?;
    writer.write_all(coords.as_bytes())?;
    Ok(())
}
