//! Problem definition for the asymmetric TSP.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read-only source of directed travel costs between cities.
///
/// Costs may be asymmetric: `distance(i, j)` need not equal `distance(j, i)`.
/// Implementations are expected to be consistent; the algorithm never
/// re-validates indices or dimensions per call.
pub trait DistanceOracle {
    /// Number of cities `n`. Valid indices are `0..n`.
    fn city_count(&self) -> usize;

    /// Cost of travelling from `from` to `to`.
    fn distance(&self, from: usize, to: usize) -> u32;
}

/// Represents an ATSP instance backed by a full distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub distance_matrix: Vec<Vec<u32>>,
}

impl DistanceOracle for Problem {
    fn city_count(&self) -> usize {
        self.distance_matrix.len()
    }

    fn distance(&self, from: usize, to: usize) -> u32 {
        self.distance_matrix[from][to]
    }
}

impl Problem {
    /// Create a new problem from a square distance matrix.
    pub fn new(name: String, distance_matrix: Vec<Vec<u32>>) -> Result<Self> {
        let n = distance_matrix.len();
        if n == 0 {
            return Err(Error::EmptyProblem);
        }

        for (i, row) in distance_matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidInstance(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        Ok(Problem {
            name,
            distance_matrix,
        })
    }

    /// Load a problem from a file.
    ///
    /// See [`Problem::parse`] for the accepted formats. When the file carries
    /// no `NAME:` header the file stem is used as the name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::parse(&content, &fallback)
    }

    /// Parse a problem from text.
    ///
    /// Two formats are recognised:
    /// - TSPLIB `EXPLICIT` / `FULL_MATRIX` instances: a `DIMENSION:` header
    ///   followed by an `EDGE_WEIGHT_SECTION` of row-major values, which may
    ///   wrap across lines, optionally terminated by `EOF`.
    /// - A plain matrix: the city count on the first line, then one row of
    ///   whitespace-separated values per line.
    pub fn parse(content: &str, fallback_name: &str) -> Result<Self> {
        let first = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| Error::InvalidInstance("empty input".into()))?;

        if first.parse::<usize>().is_ok() {
            Self::parse_plain(content, fallback_name)
        } else {
            Self::parse_tsplib(content, fallback_name)
        }
    }

    fn parse_plain(content: &str, name: &str) -> Result<Self> {
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let dimension = match lines.next() {
            Some(line) => parse_value::<usize>(line)?,
            None => return Err(Error::InvalidInstance("missing city count".into())),
        };

        let mut matrix = Vec::new();
        for i in 0..dimension {
            let line = lines.next().ok_or_else(|| {
                Error::InvalidInstance(format!("expected {} rows, found {}", dimension, i))
            })?;
            let row = line
                .split_whitespace()
                .map(parse_value::<u32>)
                .collect::<Result<Vec<_>>>()?;
            matrix.push(row);
        }

        Problem::new(name.to_string(), matrix)
    }

    fn parse_tsplib(content: &str, fallback_name: &str) -> Result<Self> {
        let mut name = fallback_name.to_string();
        let mut dimension: Option<usize> = None;
        let mut values: Vec<u32> = Vec::new();
        let mut in_weights = false;

        for line in content.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            if in_weights {
                if line == "EOF" {
                    break;
                }
                for token in line.split_whitespace() {
                    values.push(parse_value::<u32>(token)?);
                }
                continue;
            }

            if line == "EDGE_WEIGHT_SECTION" {
                in_weights = true;
            } else if line == "EOF" {
                break;
            } else if let Some((key, value)) = line.split_once(':') {
                match key.trim() {
                    "NAME" => name = value.trim().to_string(),
                    "DIMENSION" => dimension = Some(parse_value::<usize>(value)?),
                    "EDGE_WEIGHT_FORMAT" if value.trim() != "FULL_MATRIX" => {
                        return Err(Error::InvalidInstance(format!(
                            "unsupported edge weight format {}",
                            value.trim()
                        )));
                    }
                    _ => {}
                }
            }
        }

        let dimension =
            dimension.ok_or_else(|| Error::InvalidInstance("missing DIMENSION header".into()))?;
        if !in_weights {
            return Err(Error::InvalidInstance(
                "missing EDGE_WEIGHT_SECTION".into(),
            ));
        }
        let expected = dimension.checked_mul(dimension).ok_or_else(|| {
            Error::InvalidInstance(format!("dimension {} is too large", dimension))
        })?;
        if values.len() != expected {
            return Err(Error::InvalidInstance(format!(
                "expected {}x{} = {} weights, found {}",
                dimension,
                dimension,
                expected,
                values.len()
            )));
        }

        let matrix = values
            .chunks(dimension.max(1))
            .map(|row| row.to_vec())
            .collect();

        Problem::new(name, matrix)
    }
}

fn parse_value<T: std::str::FromStr>(token: &str) -> Result<T> {
    token
        .trim()
        .parse::<T>()
        .map_err(|_| Error::InvalidInstance(format!("invalid number '{}'", token.trim())))
}
