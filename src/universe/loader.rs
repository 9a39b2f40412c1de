// src/universe/loader.rs
//! Pipe-delimited dataset files and their lookup tables.
//!
//! Three files describe a universe: `actorID|actorName`,
//! `movieID|movieTitle`, and one `movieID|actorID` line per cast
//! membership. IDs exist only inside the files; everything downstream works
//! on resolved names.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::DatasetError;

/// The parsed input universe: every actor name in file order, and each
/// movie's cast keyed by title.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub actors: Vec<String>,
    pub casts: BTreeMap<String, Vec<String>>,
}

impl Dataset {
    /// Total cast memberships across all movies.
    #[must_use]
    pub fn num_credits(&self) -> usize {
        self.casts.values().map(Vec::len).sum()
    }
}

/// Reads the three data files and resolves credit IDs to names.
///
/// Blank lines are skipped. Duplicate IDs keep their last mapping.
///
/// # Errors
/// Any I/O failure, a record without a `|` separator, or a credit whose
/// movie or actor ID is missing from the ID tables. All are fatal; the game
/// cannot start on a partial universe.
pub fn load_dataset(
    actors: &Path,
    movies: &Path,
    credits: &Path,
) -> Result<Dataset, DatasetError> {
    let actor_table = read_id_table(actors)?;
    let movie_table = read_id_table(movies)?;

    let actor_names: HashMap<&str, &str> = actor_table
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();
    let movie_titles: HashMap<&str, &str> = movie_table
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();

    let mut casts: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (number, line) in read_lines(credits)? {
        let Some((movie_id, actor_id)) = line.split_once('|') else {
            return Err(DatasetError::MalformedRecord {
                path: credits.to_path_buf(),
                line: number,
                record: line,
            });
        };
        let title = movie_titles
            .get(movie_id)
            .ok_or_else(|| DatasetError::UnknownMovieId {
                path: credits.to_path_buf(),
                line: number,
                id: movie_id.to_string(),
            })?;
        let name = actor_names
            .get(actor_id)
            .ok_or_else(|| DatasetError::UnknownActorId {
                path: credits.to_path_buf(),
                line: number,
                id: actor_id.to_string(),
            })?;
        casts
            .entry((*title).to_string())
            .or_default()
            .push((*name).to_string());
    }

    // A re-used ID orphans its earlier name; only the winning mapping
    // becomes part of the universe.
    let actors = actor_table
        .iter()
        .filter(|(id, name)| actor_names.get(id.as_str()) == Some(&name.as_str()))
        .map(|(_, name)| name.clone())
        .collect();

    Ok(Dataset { actors, casts })
}

fn read_id_table(path: &Path) -> Result<Vec<(String, String)>, DatasetError> {
    let mut pairs = Vec::new();
    for (number, line) in read_lines(path)? {
        let Some((id, name)) = line.split_once('|') else {
            return Err(DatasetError::MalformedRecord {
                path: path.to_path_buf(),
                line: number,
                record: line,
            });
        };
        pairs.push((id.to_string(), name.to_string()));
    }
    Ok(pairs)
}

// Non-blank lines with their 1-based line numbers, for error reporting.
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| (number + 1, line.to_string()))
        .collect())
}
