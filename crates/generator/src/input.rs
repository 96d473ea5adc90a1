use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::GeneratedGraph;
use crate::index::Idx;
use crate::Error;

impl<NI: Idx> GeneratedGraph<NI> {
    /// Reads a graph from its plain text format.
    ///
    /// The header determines how many edge and mapping lines are expected.
    /// Trailing empty lines are ignored, any other trailing content is an
    /// error.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines().enumerate().map(|(n, line)| (n + 1, line));

        let header = match lines.next() {
            Some((_, line)) => line?,
            None => return Err(parse_error(1, "missing header")),
        };
        let (node_count, edge_count) = parse_pair::<usize>(1, &header)?;
        let line_count = edge_count
            .checked_add(node_count)
            .ok_or_else(|| parse_error(1, "node and edge count overflow"))?;

        // Capacity follows the lines actually read, never the header counts.
        let mut edges = Vec::new();
        let mut mapping = Vec::new();

        for _ in 0..line_count {
            let (n, line) = match lines.next() {
                Some((n, line)) => (n, line?),
                None => {
                    return Err(parse_error(
                        edges.len() + mapping.len() + 2,
                        "unexpected end of file",
                    ))
                }
            };

            let (a, b) = parse_pair::<NI>(n, &line)?;
            let ids = 1..=node_count;
            if !ids.contains(&a.index()) || !ids.contains(&b.index()) {
                return Err(parse_error(
                    n,
                    format!("node id out of range 1..={node_count}"),
                ));
            }

            if edges.len() < edge_count {
                edges.push((a, b));
            } else {
                mapping.push((a, b));
            }
        }

        for (n, line) in lines {
            if !line?.trim().is_empty() {
                return Err(parse_error(n, "unexpected trailing content"));
            }
        }

        Ok(Self::new(node_count, edge_count, edges, mapping))
    }

    /// Reads a graph from the file at `path`.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}

fn parse_pair<NI: Idx>(line: usize, text: &str) -> Result<(NI, NI), Error> {
    let mut tokens = text.split_ascii_whitespace();

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => Ok((parse_id(line, a)?, parse_id(line, b)?)),
        _ => Err(parse_error(line, "expected two space separated numbers")),
    }
}

fn parse_id<NI: Idx>(line: usize, token: &str) -> Result<NI, Error> {
    let bytes = token.as_bytes();
    match NI::parse(bytes) {
        (_, used) if used == 0 || used != bytes.len() => {
            Err(parse_error(line, format!("invalid number '{token}'")))
        }
        (None, _) => Err(parse_error(line, format!("number '{token}' is too large"))),
        (Some(id), _) => Ok(id),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
