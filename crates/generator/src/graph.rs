use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::index::Idx;
use crate::Error;

/// A generated graph together with its auxiliary node mapping.
///
/// Node ids are 1-based. Edges of the graph reference nodes in
/// `1..=node_count` and the mapping contains one pair per node, ordered by
/// the first element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedGraph<NI: Idx> {
    node_count: usize,
    edge_count: usize,
    edges: Vec<(NI, NI)>,
    mapping: Vec<(NI, NI)>,
}

impl<NI: Idx> GeneratedGraph<NI> {
    pub fn new(
        node_count: usize,
        edge_count: usize,
        edges: Vec<(NI, NI)>,
        mapping: Vec<(NI, NI)>,
    ) -> Self {
        Self {
            node_count,
            edge_count,
            edges,
            mapping,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges(&self) -> &[(NI, NI)] {
        &self.edges
    }

    pub fn mapping(&self) -> &[(NI, NI)] {
        &self.mapping
    }

    /// Writes the graph in its plain text format.
    ///
    /// ```ignore
    /// <node_count> <edge_count>
    /// <source> <target>      one line per edge
    /// <original> <mapped>    one line per node
    /// ```
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writeln!(writer, "{} {}", self.node_count, self.edge_count)?;

        for (u, v) in &self.edges {
            writeln!(writer, "{u} {v}")?;
        }

        for (a, b) in &self.mapping {
            writeln!(writer, "{a} {b}")?;
        }

        writer.flush()?;

        Ok(())
    }

    /// Creates or truncates the file at `path` and writes the graph into it.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;

        info!(
            "Wrote {} nodes and {} edges to {}",
            self.node_count,
            self.edge_count,
            path.display()
        );

        Ok(())
    }
}
