//! Unit tests for problem construction and instance parsing.

use atsp_ga::error::Error;
use atsp_ga::problem::{DistanceOracle, Problem};
use std::fs;

const TSPLIB_INSTANCE: &str = "NAME: toy4
TYPE: ATSP
COMMENT: four city test instance
DIMENSION: 4
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: FULL_MATRIX
EDGE_WEIGHT_SECTION
 9999 3 5
 48 2 9999 7 8 1
 6 9999 4 3 9 5 9999
EOF
";

#[test]
fn test_problem_new_rejects_non_square() {
    let result = Problem::new("Bad".to_string(), vec![vec![0, 1], vec![1]]);

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_problem_new_rejects_empty() {
    let result = Problem::new("Empty".to_string(), vec![]);

    assert!(matches!(result, Err(Error::EmptyProblem)));
}

#[test]
fn test_problem_distance_is_directional() {
    let problem = Problem::new("Pair".to_string(), vec![vec![0, 4], vec![9, 0]]).unwrap();

    assert_eq!(problem.city_count(), 2);
    assert_eq!(problem.distance(0, 1), 4);
    assert_eq!(problem.distance(1, 0), 9);
}

#[test]
fn test_parse_tsplib_with_wrapped_rows() {
    let problem = Problem::parse(TSPLIB_INSTANCE, "fallback").unwrap();

    assert_eq!(problem.name, "toy4");
    assert_eq!(problem.city_count(), 4);
    assert_eq!(problem.distance_matrix[0], vec![9999, 3, 5, 48]);
    assert_eq!(problem.distance_matrix[1], vec![2, 9999, 7, 8]);
    assert_eq!(problem.distance_matrix[2], vec![1, 6, 9999, 4]);
    assert_eq!(problem.distance_matrix[3], vec![3, 9, 5, 9999]);
}

#[test]
fn test_parse_tsplib_without_eof() {
    let content = "DIMENSION : 2\nEDGE_WEIGHT_SECTION\n0 1\n2 0\n";

    let problem = Problem::parse(content, "pair").unwrap();

    assert_eq!(problem.name, "pair");
    assert_eq!(problem.distance_matrix, vec![vec![0, 1], vec![2, 0]]);
}

#[test]
fn test_parse_tsplib_incomplete_matrix() {
    let content = "DIMENSION: 3\nEDGE_WEIGHT_SECTION\n0 1 2\n3 0 4\nEOF\n";

    let result = Problem::parse(content, "broken");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_tsplib_too_many_values() {
    let content = "DIMENSION: 2\nEDGE_WEIGHT_SECTION\n0 1 2 0 5\nEOF\n";

    let result = Problem::parse(content, "broken");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_tsplib_dimension_too_large() {
    let content = "NAME: huge\nDIMENSION: 18446744073709551615\nEDGE_WEIGHT_SECTION\n0\nEOF\n";

    let result = Problem::parse(content, "huge");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_plain_matrix_huge_count() {
    let content = "18446744073709551615\n0 1\n1 0\n";

    let result = Problem::parse(content, "huge");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_tsplib_missing_dimension() {
    let content = "NAME: nodim\nEDGE_WEIGHT_SECTION\n0 1\n1 0\nEOF\n";

    let result = Problem::parse(content, "broken");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_tsplib_unsupported_format() {
    let content = "DIMENSION: 2\nEDGE_WEIGHT_FORMAT: UPPER_ROW\nEDGE_WEIGHT_SECTION\n1\nEOF\n";

    let result = Problem::parse(content, "broken");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_plain_matrix() {
    let content = "3\n0 1 2\n3 0 4\n5 6 0\n";

    let problem = Problem::parse(content, "plain").unwrap();

    assert_eq!(problem.name, "plain");
    assert_eq!(problem.city_count(), 3);
    assert_eq!(problem.distance(2, 1), 6);
    assert_eq!(problem.distance(1, 2), 4);
}

#[test]
fn test_parse_plain_matrix_missing_rows() {
    let content = "3\n0 1 2\n3 0 4\n";

    let result = Problem::parse(content, "plain");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_invalid_number() {
    let content = "2\n0 x\n1 0\n";

    let result = Problem::parse(content, "plain");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_parse_empty_input() {
    let result = Problem::parse("   \n\n", "empty");

    assert!(matches!(result, Err(Error::InvalidInstance(_))));
}

#[test]
fn test_from_file_uses_file_stem_as_fallback_name() {
    let dir = std::env::temp_dir().join(format!("atsp_ga_problem_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tiny.atsp");
    fs::write(&path, "2\n0 3\n4 0\n").unwrap();

    let problem = Problem::from_file(&path).unwrap();

    assert_eq!(problem.name, "tiny");
    assert_eq!(problem.distance(1, 0), 4);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_from_file_missing() {
    let result = Problem::from_file("/nonexistent/definitely/missing.atsp");

    assert!(matches!(result, Err(Error::Io(_))));
}
