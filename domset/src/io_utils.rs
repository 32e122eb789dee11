// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains everything that is necessary to parse a graph instance
//! and turn it into a `Graph` usable by the solver.
//!
//! The instances are plain text files laid out as follows:
//! * the first two lines are free text (typically a banner and a comment);
//! * the third line holds the dimensions `n n m` of the (square) adjacency
//!   matrix: `n` is the number of vertices;
//! * every subsequent line holds one edge `u v` where `u > v` and both
//!   vertices are numbered from 1 to `n`.

use std::{fs, num::ParseIntError, path::{Path, PathBuf}};

use regex::Regex;

use crate::Graph;

/// The pattern the header line (third line of the file) must match
pub const HEADER_PATTERN: &str = r"^(\d+)\s+(\d+)\s+\d+\s*$";
/// The pattern every edge line must match
pub const EDGE_PATTERN: &str = r"^(\d+)\s+(\d+)\s*$";

/// This enumeration simply groups the kind of errors that might occur when
/// parsing a graph instance. Line numbers are counted from 1.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or read
    #[error("there is a problem with file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input has no line at all, or a single one
    #[error("there are no edges in the input")]
    Empty,
    /// The input stops before the header line
    #[error("the input has no header line (line 3)")]
    MissingHeader,
    /// A line does not match the pattern it is expected to match
    #[error("line {line_no}: '{line}' does not match {pattern}")]
    Format {
        line_no: usize,
        line   : String,
        pattern: &'static str,
    },
    /// The header declares a matrix which is not square
    #[error("line {line_no}: the adjacency matrix must be square, got {rows} x {cols}")]
    SizeMismatch {
        line_no: usize,
        rows   : usize,
        cols   : usize,
    },
    /// An edge is not listed as `u v` with `u > v`
    #[error("line {line_no}: edge '{u} {v}' must be listed with its larger endpoint first")]
    EdgeOrder {
        line_no: usize,
        u      : usize,
        v      : usize,
    },
    /// An edge references a vertex which does not exist
    #[error("line {line_no}: vertex {vertex} is out of range 1..={nb_vertices}")]
    VertexRange {
        line_no    : usize,
        vertex     : usize,
        nb_vertices: usize,
    },
    /// A number does not fit in an usize
    #[error("line {line_no}: {source}")]
    ParseInt {
        line_no: usize,
        #[source]
        source : ParseIntError,
    },
    /// One of the patterns failed to compile
    #[error("invalid pattern {0}")]
    Regex(#[from] regex::Error),
}

/// This function is used to read a graph instance from file. It returns either
/// the graph if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Graph, Error> {
    let path = fname.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse_instance(&text)
}

/// This function parses the textual description of a graph instance.
pub fn parse_instance(text: &str) -> Result<Graph, Error> {
    let lines = text.lines().collect::<Vec<_>>();
    match lines.len() {
        0 | 1 => return Err(Error::Empty),
        2     => return Err(Error::MissingHeader),
        _     => {}
    }

    let header = Regex::new(HEADER_PATTERN)?;
    let edge   = Regex::new(EDGE_PATTERN)?;

    let (rows, cols) = decode(&header, HEADER_PATTERN, lines[2], 3)?;
    if rows != cols {
        return Err(Error::SizeMismatch { line_no: 3, rows, cols });
    }

    let nb_vertices = rows;
    let mut graph   = Graph::new(nb_vertices);
    for (i, line) in lines.iter().enumerate().skip(3) {
        let line_no = i + 1;
        let (u, v)  = decode(&edge, EDGE_PATTERN, line, line_no)?;

        if u <= v {
            return Err(Error::EdgeOrder { line_no, u, v });
        }
        if u > nb_vertices {
            return Err(Error::VertexRange { line_no, vertex: u, nb_vertices });
        }
        if v == 0 {
            return Err(Error::VertexRange { line_no, vertex: v, nb_vertices });
        }

        graph.add_edge(u - 1, v - 1);
    }

    Ok(graph)
}

/// Extracts the two leading integers of `line`, which must match `regex`
/// (compiled from `pattern`).
fn decode(regex: &Regex, pattern: &'static str, line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    let caps = regex.captures(line)
        .ok_or_else(|| Error::Format { line_no, line: line.to_string(), pattern })?;

    let a = caps[1].parse::<usize>().map_err(|source| Error::ParseInt { line_no, source })?;
    let b = caps[2].parse::<usize>().map_err(|source| Error::ParseInt { line_no, source })?;
    Ok((a, b))
}
