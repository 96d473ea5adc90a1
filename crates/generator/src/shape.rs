use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::convert::TryFrom;
use std::fmt::Display;

use rand::Rng;

use crate::Error;

/// The shape of a generated connected component.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Path,
    Tree,
    Bipartite,
    Cycle,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Path, Shape::Tree, Shape::Bipartite, Shape::Cycle];

    /// The code the sampler draws for this shape.
    pub fn code(self) -> u8 {
        match self {
            Shape::Path => 1,
            Shape::Tree => 2,
            Shape::Bipartite => 3,
            Shape::Cycle => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Path => "path",
            Shape::Tree => "tree",
            Shape::Bipartite => "bipartite",
            Shape::Cycle => "cycle",
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Shape {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Shape::Path),
            2 => Ok(Shape::Tree),
            3 => Ok(Shape::Bipartite),
            4 => Ok(Shape::Cycle),
            code => Err(Error::InvalidShapeCode { code }),
        }
    }
}

/// A connected component with local, 0-based node ids.
///
/// The node ids of a component are `0..node_count`. Edges are undirected and
/// stored once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    shape: Shape,
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl Component {
    /// Creates a simple path `0 - 1 - ... - (n - 1)`.
    pub fn path(node_count: usize) -> Self {
        let edges = (1..node_count).map(|v| (v - 1, v)).collect();

        Self {
            shape: Shape::Path,
            node_count,
            edges,
        }
    }

    /// Creates a simple cycle on `node_count` nodes.
    ///
    /// With fewer than three nodes there is no simple cycle and the result
    /// degenerates to a path, still tagged as cycle.
    pub fn cycle(node_count: usize) -> Self {
        let mut edges = (1..node_count).map(|v| (v - 1, v)).collect::<Vec<_>>();
        if node_count >= 3 {
            edges.push((node_count - 1, 0));
        }

        Self {
            shape: Shape::Cycle,
            node_count,
            edges,
        }
    }

    /// Creates the complete bipartite graph `K(a, b)`.
    ///
    /// Nodes `0..a` form the first part, nodes `a..a + b` the second part.
    pub fn complete_bipartite(a: usize, b: usize) -> Self {
        let mut edges = Vec::with_capacity(a * b);
        for u in 0..a {
            for v in a..a + b {
                edges.push((u, v));
            }
        }

        Self {
            shape: Shape::Bipartite,
            node_count: a + b,
            edges,
        }
    }

    /// Creates a uniformly random labeled tree on `node_count` nodes.
    ///
    /// Every labeled tree corresponds to exactly one Prüfer sequence of
    /// length `n - 2`, so decoding a uniformly random sequence yields a
    /// uniformly random tree.
    pub fn random_tree<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Self {
        let sequence = if node_count >= 2 {
            (0..node_count - 2)
                .map(|_| rng.gen_range(0..node_count))
                .collect::<Vec<_>>()
        } else {
            Vec::new()
        };

        Self {
            shape: Shape::Tree,
            node_count,
            edges: decode_pruefer(node_count, &sequence),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];
        for &(u, v) in &self.edges {
            degrees[u] += 1;
            degrees[v] += 1;
        }
        degrees
    }

    pub fn max_degree(&self) -> usize {
        self.degrees().into_iter().max().unwrap_or(0)
    }

    /// Changes the shape tag without touching the edges.
    pub(crate) fn reclassify(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }
}

fn decode_pruefer(node_count: usize, sequence: &[usize]) -> Vec<(usize, usize)> {
    if node_count < 2 {
        return Vec::new();
    }

    let mut degree = vec![1_usize; node_count];
    for &v in sequence {
        degree[v] += 1;
    }

    let mut leaves = (0..node_count)
        .filter(|&v| degree[v] == 1)
        .map(Reverse)
        .collect::<BinaryHeap<_>>();

    let mut edges = Vec::with_capacity(node_count - 1);

    for &v in sequence {
        // A sequence of length n - 2 leaves at least two leaves in every step.
        if let Some(Reverse(leaf)) = leaves.pop() {
            edges.push((leaf, v));
            degree[v] -= 1;
            if degree[v] == 1 {
                leaves.push(Reverse(v));
            }
        }
    }

    if let (Some(Reverse(u)), Some(Reverse(v))) = (leaves.pop(), leaves.pop()) {
        edges.push((u, v));
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_connected(component: &Component) -> bool {
        let n = component.node_count();
        if n == 0 {
            return true;
        }
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in component.edges() {
            adj[u].push(v);
            adj[v].push(u);
        }
        let mut seen = vec![false; n];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(u) = stack.pop() {
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    #[test]
    fn shape_codes() {
        for shape in Shape::ALL {
            assert_eq!(Shape::try_from(shape.code()).unwrap(), shape);
        }
        assert!(matches!(
            Shape::try_from(0),
            Err(Error::InvalidShapeCode { code: 0 })
        ));
        assert!(matches!(
            Shape::try_from(5),
            Err(Error::InvalidShapeCode { code: 5 })
        ));
    }

    #[test]
    fn path() {
        let path = Component::path(5);
        assert_eq!(path.shape(), Shape::Path);
        assert_eq!(path.node_count(), 5);
        assert_eq!(path.edges(), &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(path.max_degree(), 2);
    }

    #[test]
    fn cycle() {
        let cycle = Component::cycle(5);
        assert_eq!(cycle.shape(), Shape::Cycle);
        assert_eq!(cycle.edge_count(), 5);
        assert_eq!(cycle.edges().last(), Some(&(4, 0)));
        assert!(cycle.degrees().into_iter().all(|d| d == 2));
    }

    #[test]
    fn complete_bipartite() {
        let k = Component::complete_bipartite(2, 3);
        assert_eq!(k.shape(), Shape::Bipartite);
        assert_eq!(k.node_count(), 5);
        assert_eq!(k.edge_count(), 6);
        assert_eq!(k.degrees(), vec![3, 3, 2, 2, 2]);
        assert!(k.edges().iter().all(|&(u, v)| u < 2 && v >= 2));
    }

    #[test]
    fn random_tree_is_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..40 {
            let tree = Component::random_tree(n, &mut rng);
            assert_eq!(tree.shape(), Shape::Tree);
            assert_eq!(tree.node_count(), n);
            assert_eq!(tree.edge_count(), n - 1);
            assert!(is_connected(&tree));
        }
    }

    #[test]
    fn pruefer_decoding() {
        // The star with center 0 is encoded by [0, 0, 0].
        let mut star = decode_pruefer(5, &[0, 0, 0])
            .into_iter()
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect::<Vec<_>>();
        star.sort_unstable();
        assert_eq!(star, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);

        assert_eq!(decode_pruefer(2, &[]), vec![(0, 1)]);
        assert!(decode_pruefer(1, &[]).is_empty());
    }

    #[test]
    fn reclassify_keeps_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let tree = Component::random_tree(8, &mut rng);
        let edges = tree.edges().to_vec();
        let path = tree.reclassify(Shape::Path);
        assert_eq!(path.shape(), Shape::Path);
        assert_eq!(path.edges(), edges.as_slice());
    }
}
