//! Plain-text graph loader.
//!
//! The format is a whitespace-separated token stream; line breaks only matter
//! for error messages:
//!
//! ```text
//! <graph type: 0 undirected, 1 directed> <vertex count>
//! <u> <v> <weight>
//! ...
//! ```
//!
//! Edges are read until the input ends. Every check on the input happens
//! here, so a [`Graph`] handed to the algorithms is always well formed.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Weight};

type Token<'a> = (usize, &'a str);

fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)))
}

fn parse_token<T: FromStr>((line, token): Token<'_>) -> Result<T> {
    token.parse().map_err(|_| GraphError::Parse {
        token: token.to_string(),
        line,
    })
}

fn header_field<'a, I>(tokens: &mut I, name: &str) -> Result<i64>
where
    I: Iterator<Item = Token<'a>>,
{
    let token = tokens
        .next()
        .ok_or_else(|| GraphError::invalid_input(format!("missing {name}")))?;
    parse_token(token)
}

/// Parses a graph from its textual description.
///
/// # Errors
/// * `InvalidInput` if the header is missing or the last edge is incomplete
/// * `InvalidGraphType` if the graph type is neither 0 nor 1
/// * `InvalidVertexCount` if the vertex count is not positive
/// * `Parse` if a token is not a number of the expected kind
/// * `VertexOutOfRange` if an edge endpoint is not below the vertex count
pub fn parse_graph<W>(text: &str) -> Result<Graph<W>>
where
    W: Weight + FromStr,
{
    let mut tokens = tokens(text);

    let kind = match header_field(&mut tokens, "graph type")? {
        0 => GraphKind::Undirected,
        1 => GraphKind::Directed,
        other => return Err(GraphError::InvalidGraphType(other)),
    };

    let count = header_field(&mut tokens, "vertex count")?;
    let vertex_count = match usize::try_from(count) {
        Ok(n) if n > 0 => n,
        _ => return Err(GraphError::InvalidVertexCount(count)),
    };

    let mut graph = Graph::new(vertex_count).with_kind(kind);
    while let Some(first) = tokens.next() {
        let incomplete =
            || GraphError::invalid_input(format!("incomplete edge on line {}", first.0));
        let second = tokens.next().ok_or_else(incomplete)?;
        let third = tokens.next().ok_or_else(incomplete)?;

        let src: usize = parse_token(first)?;
        let dst: usize = parse_token(second)?;
        let weight: W = parse_token(third)?;
        graph.add_edge(src, dst, weight)?;
    }

    Ok(graph)
}

/// Reads and parses the graph stored at `path`.
///
/// # Errors
/// * `Io` if the file cannot be read
/// * any error of [`parse_graph`]
pub fn read_graph<W, P>(path: P) -> Result<Graph<W>>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        "loaded {:?} graph from {}: {} vertices, {} edges",
        graph.kind(),
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
