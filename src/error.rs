// src/error.rs
//! Error types shared across the crate.
//!
//! `GraphError` covers the in-memory algorithm layer (not-found and
//! absent-source conditions); `DatasetError` covers everything that can go
//! wrong while reading the pipe-delimited input files. Dataset problems are
//! fatal at startup, graph problems are surfaced as session messages.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of queries against a `Graph` or a BFS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex is not in the graph")]
    VertexNotFound,

    #[error("edge is not in the graph")]
    EdgeNotFound,
}

/// Failures while loading the actor/movie/credit files.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: expected a pipe-delimited record, got {record:?}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        record: String,
    },

    #[error("{path}:{line}: credit references unknown movie ID {id:?}")]
    UnknownMovieId {
        path: PathBuf,
        line: usize,
        id: String,
    },

    #[error("{path}:{line}: credit references unknown actor ID {id:?}")]
    UnknownActorId {
        path: PathBuf,
        line: usize,
        id: String,
    },
}
