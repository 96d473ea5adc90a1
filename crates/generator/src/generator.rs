use std::ops::RangeInclusive;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assembler::{
    assemble, AssemblerConfig, AssemblyState, ComponentSpan, ShapeCounts, DEFAULT_STALL_LIMIT,
    MAX_STALL_LIMIT,
};
use crate::graph::GeneratedGraph;
use crate::index::Idx;
use crate::mapping::{build_mapping, MappingKind};
use crate::sampler::MIN_COMPONENT_SIZE;
use crate::Error;

pub const NODE_BUDGET_RANGE: RangeInclusive<usize> = 10..=100_000;
pub const EDGE_BUDGET_RANGE: RangeInclusive<usize> = 8..=1_000_000;

/// A builder to configure and validate a [`Generator`].
///
/// # Example
///
/// ```
/// use component_gen::prelude::*;
///
/// let generator = GeneratorBuilder::new()
///     .max_num_nodes(1000)
///     .max_num_edges(5000)
///     .max_size(50)
///     .seed(1337)
///     .mapping(MappingKind::Identity)
///     .build()
///     .expect("valid configuration");
///
/// let generation = generator.generate::<u32>().expect("generation failed");
///
/// assert!(generation
///     .graph()
///     .mapping()
///     .iter()
///     .all(|(original, mapped)| original == mapped));
/// ```
///
/// Invalid budgets are rejected before anything is generated:
///
/// ```
/// use component_gen::prelude::*;
///
/// let result = GeneratorBuilder::new().max_num_nodes(5).max_size(10).build();
///
/// assert!(matches!(result, Err(Error::InvalidConfig { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    max_num_nodes: usize,
    max_num_edges: usize,
    max_size: Option<usize>,
    seed: u64,
    mapping: MappingKind,
    budget_fraction: f64,
    stall_limit: usize,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            max_num_nodes: *NODE_BUDGET_RANGE.end(),
            max_num_edges: *EDGE_BUDGET_RANGE.end(),
            max_size: None,
            seed: 0,
            mapping: MappingKind::default(),
            budget_fraction: 1.0,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_num_nodes(mut self, max_num_nodes: usize) -> Self {
        self.max_num_nodes = max_num_nodes;
        self
    }

    pub fn max_num_edges(mut self, max_num_edges: usize) -> Self {
        self.max_num_edges = max_num_edges;
        self
    }

    /// Sets the initial size ceiling for a single component.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn mapping(mut self, mapping: MappingKind) -> Self {
        self.mapping = mapping;
        self
    }

    /// Stops assembly once the totals reach this fraction of the budgets.
    pub fn budget_fraction(mut self, budget_fraction: f64) -> Self {
        self.budget_fraction = budget_fraction;
        self
    }

    /// Sets how many rejected components end assembly, at most
    /// [`MAX_STALL_LIMIT`].
    pub fn stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    pub fn build(self) -> Result<Generator, Error> {
        if !NODE_BUDGET_RANGE.contains(&self.max_num_nodes) {
            return Err(Error::invalid_config(format!(
                "max_num_nodes must be >= {} and <= {}, got {}",
                NODE_BUDGET_RANGE.start(),
                NODE_BUDGET_RANGE.end(),
                self.max_num_nodes
            )));
        }

        if !EDGE_BUDGET_RANGE.contains(&self.max_num_edges) {
            return Err(Error::invalid_config(format!(
                "max_num_edges must be >= {} and <= {}, got {}",
                EDGE_BUDGET_RANGE.start(),
                EDGE_BUDGET_RANGE.end(),
                self.max_num_edges
            )));
        }

        let max_size = match self.max_size {
            Some(max_size) if max_size >= MIN_COMPONENT_SIZE => max_size,
            Some(max_size) => {
                return Err(Error::invalid_config(format!(
                    "max_ship_size must be >= {MIN_COMPONENT_SIZE}, got {max_size}"
                )))
            }
            None => return Err(Error::invalid_config("max_ship_size is required")),
        };

        if !(self.budget_fraction > 0.0 && self.budget_fraction <= 1.0) {
            return Err(Error::invalid_config(format!(
                "budget_fraction must be > 0 and <= 1, got {}",
                self.budget_fraction
            )));
        }

        if self.stall_limit > MAX_STALL_LIMIT {
            return Err(Error::invalid_config(format!(
                "stall_limit must be <= {MAX_STALL_LIMIT}, got {}",
                self.stall_limit
            )));
        }

        let config = AssemblerConfig::new(self.max_num_nodes, self.max_num_edges, max_size)
            .with_budget_fraction(self.budget_fraction)
            .with_stall_limit(self.stall_limit);

        Ok(Generator {
            config,
            seed: self.seed,
            mapping: self.mapping,
        })
    }
}

/// A validated generator configuration.
#[derive(Copy, Clone, Debug)]
pub struct Generator {
    config: AssemblerConfig,
    seed: u64,
    mapping: MappingKind,
}

impl Generator {
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mapping(&self) -> MappingKind {
        self.mapping
    }

    /// Generates a graph.
    ///
    /// A single random number generator is seeded once and drives both the
    /// component assembly and the mapping, so repeated calls return equal
    /// results.
    pub fn generate<NI: Idx>(&self) -> Result<Generation<NI>, Error> {
        info!(
            "Generating graph with seed {} and {:?} mapping",
            self.seed, self.mapping
        );

        let mut rng = StdRng::seed_from_u64(self.seed);

        let state = assemble(AssemblyState::new(self.config.max_size), &self.config, &mut rng)?;
        let (node_count, edge_count, edges, counts, spans) = state.into_parts();

        let mapping = build_mapping(self.mapping, node_count, &spans, &mut rng);

        Ok(Generation {
            graph: GeneratedGraph::new(node_count, edge_count, edges, mapping),
            counts,
            spans,
        })
    }
}

/// The result of a single generator run.
#[derive(Clone, Debug)]
pub struct Generation<NI: Idx> {
    graph: GeneratedGraph<NI>,
    counts: ShapeCounts,
    spans: Vec<ComponentSpan>,
}

impl<NI: Idx> Generation<NI> {
    pub fn graph(&self) -> &GeneratedGraph<NI> {
        &self.graph
    }

    /// Number of committed components per shape.
    pub fn counts(&self) -> ShapeCounts {
        self.counts
    }

    /// Id ranges of the committed components in commit order.
    pub fn spans(&self) -> &[ComponentSpan] {
        &self.spans
    }

    pub fn into_graph(self) -> GeneratedGraph<NI> {
        self.graph
    }
}
