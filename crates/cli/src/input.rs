//! Whitespace-separated numeric input.

use crate::error::{CliError, Result};
use classics_graph::Edge;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Reads the whole input from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Pulls typed values out of whitespace-separated text.
pub struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    /// Parses the next token, naming `what` in the error.
    pub fn take<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| CliError::input(format!("missing {}", what)))?;
        token
            .parse()
            .map_err(|_| CliError::input(format!("{} must be a number, got {:?}", what, token)))
    }

    /// Parses the next token if there is one.
    pub fn take_opt<T: FromStr>(&mut self, what: &str) -> Result<Option<T>> {
        match self.inner.next() {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| CliError::input(format!("{} must be a number, got {:?}", what, token))),
        }
    }
}

/// A graph read as `V E` followed by `E` lines of `src dest weight`.
#[derive(Debug, PartialEq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    pub fn parse(tokens: &mut Tokens<'_>) -> Result<Self> {
        let vertex_count = tokens.take("vertex count")?;
        let edge_count: usize = tokens.take("edge count")?;

        let mut edges = Vec::with_capacity(edge_count.min(1024));
        for i in 0..edge_count {
            let from = tokens.take(&format!("source of edge {}", i))?;
            let to = tokens.take(&format!("destination of edge {}", i))?;
            let weight = tokens.take(&format!("weight of edge {}", i))?;
            edges.push(Edge::new(from, to, weight));
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }
}
