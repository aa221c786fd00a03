use super::*;

/// Receives the index-level edges `(u, v)` with `u <= v` in materialisation order.
pub trait EdgeWriter {
    fn add_edge(&mut self, u: Node, v: Node);
}

#[derive(Default, Clone, Debug)]
pub struct EdgeCounter {
    number_of_edges: usize,
    number_of_self_loops: usize,
}

impl EdgeWriter for EdgeCounter {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.number_of_edges += 1;
        self.number_of_self_loops += (u == v) as usize;
    }
}

impl EdgeCounter {
    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    pub fn number_of_self_loops(&self) -> usize {
        self.number_of_self_loops
    }
}

impl EdgeWriter for Vec<Edge> {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.push((u, v));
    }
}

/// Forwards every edge to two writers.
pub struct Tee<'a, A: EdgeWriter, B: EdgeWriter> {
    first: &'a mut A,
    second: &'a mut B,
}

impl<'a, A: EdgeWriter, B: EdgeWriter> Tee<'a, A, B> {
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<'a, A: EdgeWriter, B: EdgeWriter> EdgeWriter for Tee<'a, A, B> {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.first.add_edge(u, v);
        self.second.add_edge(u, v);
    }
}
