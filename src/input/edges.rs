//! Edge-list parsing for graph algorithms

use super::errors::InputParseError;
use super::lexer::tokenize;
use super::matrix::{has_values, split_located_rows};

/// Parse directed pairs such as `[[1,0],[2,1]]` or `1 0; 2 1`
///
/// Every endpoint must name one of `node_count` nodes. Empty input is an
/// empty edge list, not an error: a graph may have no edges.
pub fn parse_edge_list(
    text: &str,
    node_count: usize,
    max_edges: usize,
) -> Result<Vec<(usize, usize)>, InputParseError> {
    let tokens = tokenize(text);
    if !has_values(&tokens) {
        return Ok(Vec::new());
    }

    let rows = split_located_rows(&tokens)?;
    if rows.len() > max_edges {
        return Err(InputParseError::TooLong {
            len: rows.len(),
            max: max_edges,
        });
    }

    let max_id = node_count as i64 - 1;
    let mut edges = Vec::with_capacity(rows.len());
    for (i, (location, row)) in rows.iter().enumerate() {
        let &[a, b] = row.as_slice() else {
            return Err(InputParseError::malformed(
                format!(
                    "pair {} has {} endpoint(s), expected exactly 2",
                    i + 1,
                    row.len()
                ),
                *location,
            ));
        };
        for endpoint in [a, b] {
            if endpoint < 0 || endpoint > max_id {
                return Err(InputParseError::OutOfRange {
                    value: endpoint,
                    min: 0,
                    max: max_id,
                });
            }
        }
        edges.push((a as usize, b as usize));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::lexer::Location;

    #[test]
    fn test_edge_formats() {
        assert_eq!(
            parse_edge_list("[[1,0],[2,1]]", 3, 10).unwrap(),
            vec![(1, 0), (2, 1)]
        );
        assert_eq!(
            parse_edge_list("1 0; 2 1", 3, 10).unwrap(),
            vec![(1, 0), (2, 1)]
        );
        assert!(parse_edge_list("", 3, 10).unwrap().is_empty());
        assert!(parse_edge_list("[]", 3, 10).unwrap().is_empty());
    }

    #[test]
    fn test_edge_errors() {
        assert_eq!(
            parse_edge_list("[[1,3]]", 3, 10),
            Err(InputParseError::OutOfRange {
                value: 3,
                min: 0,
                max: 2
            })
        );
        assert!(matches!(
            parse_edge_list("[[1,0,2]]", 3, 10),
            Err(InputParseError::Malformed { .. })
        ));
        assert_eq!(
            parse_edge_list("1 0; 2 1; 2 0", 3, 2),
            Err(InputParseError::TooLong { len: 3, max: 2 })
        );
        assert!(matches!(
            parse_edge_list("[[1,a]]", 3, 10),
            Err(InputParseError::NonNumeric { .. })
        ));
    }

    #[test]
    fn test_bad_pair_reports_its_own_location() {
        let err = parse_edge_list("[[1,0],[2,1,0]]", 3, 10).unwrap_err();
        assert_eq!(err.location(), Some(&Location::new(1, 8)));
        assert!(err.to_string().contains("pair 2 has 3 endpoint(s)"));

        let err = parse_edge_list("1 0\n2", 3, 10).unwrap_err();
        assert_eq!(err.location(), Some(&Location::new(2, 1)));
    }
}
