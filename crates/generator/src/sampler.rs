use std::convert::TryFrom;

use rand::Rng;

use crate::shape::{Component, Shape};
use crate::Error;

/// The smallest node count the sampler draws for paths, trees and cycles.
pub const MIN_COMPONENT_SIZE: usize = 5;

const MIN_PART_A: usize = 2;
const MIN_PART_B: usize = 3;

/// The sampled shape and size of a component whose edges are not built yet.
///
/// Node and edge counts are known before any edge is allocated, so a
/// component that does not fit into the remaining budget costs nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComponentDraft {
    Path(usize),
    Tree(usize),
    Bipartite(usize, usize),
    Cycle(usize),
}

impl ComponentDraft {
    pub fn shape(&self) -> Shape {
        match self {
            ComponentDraft::Path(_) => Shape::Path,
            ComponentDraft::Tree(_) => Shape::Tree,
            ComponentDraft::Bipartite(_, _) => Shape::Bipartite,
            ComponentDraft::Cycle(_) => Shape::Cycle,
        }
    }

    pub fn node_count(&self) -> usize {
        match *self {
            ComponentDraft::Path(n) | ComponentDraft::Tree(n) | ComponentDraft::Cycle(n) => n,
            ComponentDraft::Bipartite(a, b) => a.saturating_add(b),
        }
    }

    /// The edge count of the built component, `None` if it overflows `usize`.
    pub fn edge_count(&self) -> Option<usize> {
        match *self {
            ComponentDraft::Path(n) | ComponentDraft::Tree(n) => Some(n.saturating_sub(1)),
            ComponentDraft::Cycle(n) if n >= 3 => Some(n),
            ComponentDraft::Cycle(n) => Some(n.saturating_sub(1)),
            ComponentDraft::Bipartite(a, b) => a.checked_mul(b),
        }
    }

    /// Builds the edges of the component.
    ///
    /// A random tree whose maximum degree is at most two is a path and is
    /// tagged as such.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Component {
        match self {
            ComponentDraft::Path(n) => Component::path(n),
            ComponentDraft::Tree(n) => {
                let tree = Component::random_tree(n, rng);
                if tree.max_degree() <= 2 {
                    tree.reclassify(Shape::Path)
                } else {
                    tree
                }
            }
            ComponentDraft::Bipartite(a, b) => Component::complete_bipartite(a, b),
            ComponentDraft::Cycle(n) => Component::cycle(n),
        }
    }
}

/// Samples the shape and size of a random component bounded by `max_size`.
///
/// The shape is chosen uniformly. Paths, trees and cycles get a node count
/// drawn from `MIN_COMPONENT_SIZE..=max(max_size, MIN_COMPONENT_SIZE)`.
/// Bipartite graphs draw both part sizes from half of `max_size` instead.
pub fn sample_component<R: Rng + ?Sized>(
    rng: &mut R,
    max_size: usize,
) -> Result<ComponentDraft, Error> {
    let code = rng.gen_range(1..=4_u8);
    let node_count = rng.gen_range(MIN_COMPONENT_SIZE..=usize::max(max_size, MIN_COMPONENT_SIZE));

    draft_for_code(code, node_count, max_size, rng)
}

fn draft_for_code<R: Rng + ?Sized>(
    code: u8,
    node_count: usize,
    max_size: usize,
    rng: &mut R,
) -> Result<ComponentDraft, Error> {
    let draft = match Shape::try_from(code)? {
        Shape::Path => ComponentDraft::Path(node_count),
        Shape::Tree => ComponentDraft::Tree(node_count),
        Shape::Bipartite => {
            let half = max_size / 2;
            let a = rng.gen_range(MIN_PART_A..=usize::max(half, MIN_PART_A));
            let b = rng.gen_range(MIN_PART_B..=usize::max(half, MIN_PART_B));
            ComponentDraft::Bipartite(a, b)
        }
        Shape::Cycle => ComponentDraft::Cycle(node_count),
    };

    Ok(draft)
}
