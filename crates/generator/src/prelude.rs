pub use crate::generator::Generation;
pub use crate::generator::Generator;
pub use crate::generator::GeneratorBuilder;

pub use crate::assembler::AssemblerConfig;
pub use crate::assembler::AssemblyState;
pub use crate::assembler::ComponentSpan;
pub use crate::assembler::ShapeCounts;

pub use crate::graph::GeneratedGraph;
pub use crate::index::Idx;
pub use crate::mapping::MappingKind;
pub use crate::sampler::ComponentDraft;
pub use crate::shape::Component;
pub use crate::shape::Shape;

pub use crate::Error;
