use rand::seq::SliceRandom;
use rand::Rng;

use crate::assembler::ComponentSpan;
use crate::index::Idx;

/// Selects how the auxiliary per-node mapping of a generated graph is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MappingKind {
    /// Pairs every node id with a uniformly random permutation of all ids.
    #[default]
    Permutation,
    /// Pairs every node id with itself.
    Identity,
    /// Shuffles node ids within each component only.
    ComponentWise,
}

/// Builds the auxiliary mapping for the node ids `1..=node_count`.
///
/// The returned pairs are ordered by their first element, which covers every
/// node id exactly once. For every kind, the second elements are a
/// permutation of `1..=node_count`.
///
/// `spans` must cover `1..=node_count`; it is only used by
/// [`MappingKind::ComponentWise`].
pub fn build_mapping<NI, R>(
    kind: MappingKind,
    node_count: usize,
    spans: &[ComponentSpan],
    rng: &mut R,
) -> Vec<(NI, NI)>
where
    NI: Idx,
    R: Rng + ?Sized,
{
    match kind {
        MappingKind::Permutation => permutation(node_count, rng),
        MappingKind::Identity => identity(node_count),
        MappingKind::ComponentWise => component_wise(spans, rng),
    }
}

fn permutation<NI: Idx, R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Vec<(NI, NI)> {
    let mut shuffled = (1..=node_count).map(NI::new).collect::<Vec<_>>();
    shuffled.shuffle(rng);

    (1..=node_count).map(NI::new).zip(shuffled).collect()
}

fn identity<NI: Idx>(node_count: usize) -> Vec<(NI, NI)> {
    (1..=node_count).map(|id| (NI::new(id), NI::new(id))).collect()
}

fn component_wise<NI: Idx, R: Rng + ?Sized>(
    spans: &[ComponentSpan],
    rng: &mut R,
) -> Vec<(NI, NI)> {
    let node_count = spans.iter().map(|span| span.node_count).sum();
    let mut mapping = Vec::with_capacity(node_count);

    for span in spans {
        let mut shuffled = span.ids().map(NI::new).collect::<Vec<_>>();
        shuffled.shuffle(rng);
        mapping.extend(span.ids().map(NI::new).zip(shuffled));
    }

    mapping
}
