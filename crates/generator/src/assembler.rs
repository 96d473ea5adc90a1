use std::ops::Range;
use std::time::Instant;

use log::{debug, info};
use num_format::{Locale, ToFormattedString};
use rand::Rng;

use crate::index::Idx;
use crate::sampler::{sample_component, ComponentDraft};
use crate::shape::{Component, Shape};
use crate::Error;

/// Number of rejected components after which assembly gives up.
pub const DEFAULT_STALL_LIMIT: usize = 50;

/// The largest accepted stall limit.
pub const MAX_STALL_LIMIT: usize = 1_000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AssemblerConfig {
    // Upper bound for the number of nodes in the assembled graph.
    pub max_num_nodes: usize,
    // Upper bound for the number of edges in the assembled graph.
    pub max_num_edges: usize,
    // Initial size ceiling for a single component, halved on every rejection.
    pub max_size: usize,
    // Assembly continues while both totals are below this fraction of
    // their budget. Components are always checked against the full budget.
    pub budget_fraction: f64,
    // Assembly stops once more than this many components were rejected.
    pub stall_limit: usize,
}

impl AssemblerConfig {
    pub fn new(max_num_nodes: usize, max_num_edges: usize, max_size: usize) -> Self {
        Self {
            max_num_nodes,
            max_num_edges,
            max_size,
            budget_fraction: 1.0,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }

    pub fn with_budget_fraction(self, budget_fraction: f64) -> Self {
        Self {
            budget_fraction,
            ..self
        }
    }

    pub fn with_stall_limit(self, stall_limit: usize) -> Self {
        Self {
            stall_limit,
            ..self
        }
    }
}

/// Number of committed components per shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub path: usize,
    pub tree: usize,
    pub bipartite: usize,
    pub cycle: usize,
}

impl ShapeCounts {
    pub fn get(&self, shape: Shape) -> usize {
        match shape {
            Shape::Path => self.path,
            Shape::Tree => self.tree,
            Shape::Bipartite => self.bipartite,
            Shape::Cycle => self.cycle,
        }
    }

    pub fn total(&self) -> usize {
        self.path + self.tree + self.bipartite + self.cycle
    }

    fn increment(&mut self, shape: Shape) {
        match shape {
            Shape::Path => self.path += 1,
            Shape::Tree => self.tree += 1,
            Shape::Bipartite => self.bipartite += 1,
            Shape::Cycle => self.cycle += 1,
        }
    }
}

/// The global id range a committed component occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComponentSpan {
    pub shape: Shape,
    // First global, 1-based node id of the component.
    pub first: usize,
    pub node_count: usize,
}

impl ComponentSpan {
    pub fn ids(&self) -> Range<usize> {
        self.first..self.first + self.node_count
    }
}

/// Accumulated state of a single assembly run.
#[derive(Debug)]
pub struct AssemblyState<NI: Idx> {
    num_nodes: usize,
    num_edges: usize,
    edges: Vec<(NI, NI)>,
    counts: ShapeCounts,
    spans: Vec<ComponentSpan>,
    stalls: usize,
    max_size: usize,
}

impl<NI: Idx> AssemblyState<NI> {
    pub fn new(max_size: usize) -> Self {
        Self {
            num_nodes: 0,
            num_edges: 0,
            edges: Vec::new(),
            counts: ShapeCounts::default(),
            spans: Vec::new(),
            stalls: 0,
            max_size,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn edges(&self) -> &[(NI, NI)] {
        &self.edges
    }

    pub fn counts(&self) -> ShapeCounts {
        self.counts
    }

    pub fn spans(&self) -> &[ComponentSpan] {
        &self.spans
    }

    pub fn stalls(&self) -> usize {
        self.stalls
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn into_parts(self) -> (usize, usize, Vec<(NI, NI)>, ShapeCounts, Vec<ComponentSpan>) {
        (
            self.num_nodes,
            self.num_edges,
            self.edges,
            self.counts,
            self.spans,
        )
    }

    fn below_threshold(&self, config: &AssemblerConfig) -> bool {
        let node_threshold = config.budget_fraction * config.max_num_nodes as f64;
        let edge_threshold = config.budget_fraction * config.max_num_edges as f64;

        (self.num_nodes as f64) < node_threshold && (self.num_edges as f64) < edge_threshold
    }

    fn fits(&self, draft: &ComponentDraft, config: &AssemblerConfig) -> bool {
        let nodes_fit = self
            .num_nodes
            .checked_add(draft.node_count())
            .map_or(false, |nodes| nodes <= config.max_num_nodes);
        let edges_fit = draft
            .edge_count()
            .and_then(|edges| self.num_edges.checked_add(edges))
            .map_or(false, |edges| edges <= config.max_num_edges);

        nodes_fit && edges_fit
    }

    /// Appends the component, shifting its local ids into the next free
    /// 1-based id range.
    fn commit(&mut self, component: &Component) {
        let offset = self.num_nodes + 1;

        self.edges.extend(
            component
                .edges()
                .iter()
                .map(|&(u, v)| (NI::new(u + offset), NI::new(v + offset))),
        );
        self.spans.push(ComponentSpan {
            shape: component.shape(),
            first: offset,
            node_count: component.node_count(),
        });
        self.num_nodes += component.node_count();
        self.num_edges += component.edge_count();
        self.counts.increment(component.shape());
    }

    // The stall counter is never reset by a commit.
    fn reject(&mut self) {
        self.stalls += 1;
        self.max_size /= 2;
    }
}

/// Samples components and adds them to `state` until one of the budgets is
/// met or too many components did not fit.
///
/// Every rejection halves the size ceiling, so the sampler eventually only
/// produces minimum sized components. Assembly stops as soon as more than
/// `stall_limit` components were rejected, which guarantees termination when
/// the remaining budget is smaller than any component.
pub fn assemble<NI, R>(
    mut state: AssemblyState<NI>,
    config: &AssemblerConfig,
    rng: &mut R,
) -> Result<AssemblyState<NI>, Error>
where
    NI: Idx,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    info!(
        "Max num nodes {}, max num edges {}",
        config.max_num_nodes.to_formatted_string(&Locale::en),
        config.max_num_edges.to_formatted_string(&Locale::en)
    );

    while state.below_threshold(config) {
        if state.stalls > config.stall_limit {
            debug!("Giving up after {} rejected components", state.stalls);
            break;
        }

        let draft = sample_component(rng, state.max_size)?;

        if state.fits(&draft, config) {
            let component = draft.build(rng);
            debug!(
                "Committing {} with {} nodes and {} edges",
                component.shape(),
                component.node_count(),
                component.edge_count()
            );
            state.commit(&component);
        } else {
            debug!(
                "Rejecting {} with {} nodes and {:?} edges",
                draft.shape(),
                draft.node_count(),
                draft.edge_count()
            );
            state.reject();
        }
    }

    info!(
        "Assembled {} nodes and {} edges from {} components in {:?}",
        state.num_nodes.to_formatted_string(&Locale::en),
        state.num_edges.to_formatted_string(&Locale::en),
        state.counts.total(),
        start.elapsed()
    );

    Ok(state)
}
