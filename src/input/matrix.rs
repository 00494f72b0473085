//! Matrix parsing
//!
//! Two layouts are accepted:
//!
//! ```text
//! [[1,2,3],[4,5,6]]        bracketed rows (outer brackets optional)
//! 1 2 3; 4 5 6             rows split by ';' or line breaks
//! ```
//!
//! The same row splitter backs the edge-list parser.

use super::errors::InputParseError;
use super::lexer::{tokenize, Location, Token};

/// Split tokens into rows of integers
///
/// When the text contains brackets, each innermost bracket group is a row;
/// otherwise rows are separated by `;` or line breaks and blank rows are
/// skipped.
pub(crate) fn split_rows(tokens: &[Token]) -> Result<Vec<Vec<i64>>, InputParseError> {
    Ok(split_located_rows(tokens)?
        .into_iter()
        .map(|(_, row)| row)
        .collect())
}

/// [`split_rows`], with each row's starting location
///
/// A bracketed row starts at its `[`, a plain row at its first value.
pub(crate) fn split_located_rows(
    tokens: &[Token],
) -> Result<Vec<(Location, Vec<i64>)>, InputParseError> {
    let max_depth = bracket_depth(tokens)?;
    if max_depth > 2 {
        let loc = tokens
            .iter()
            .find(|t| matches!(t, Token::LBracket(_)))
            .map(Token::location)
            .unwrap_or_else(|| tokens[0].location());
        return Err(InputParseError::malformed(
            "rows nest deeper than two levels",
            loc,
        ));
    }

    let mut rows = Vec::new();

    if max_depth == 0 {
        let mut current = Vec::new();
        let mut start = None;
        for token in tokens {
            match token {
                Token::Number(n, loc) => {
                    start.get_or_insert(*loc);
                    current.push(*n);
                }
                Token::Semicolon(_) | Token::Newline(_) | Token::Eof(_) => {
                    if let Some(loc) = start.take() {
                        rows.push((loc, std::mem::take(&mut current)));
                    }
                }
                Token::Comma(_) => {}
                other => return Err(non_numeric(other)),
            }
        }
        return Ok(rows);
    }

    let mut depth = 0;
    let mut current: Option<(Location, Vec<i64>)> = None;
    for token in tokens {
        match token {
            Token::LBracket(loc) => {
                depth += 1;
                if depth == max_depth {
                    current = Some((*loc, Vec::new()));
                }
            }
            Token::RBracket(_) => {
                if depth == max_depth {
                    if let Some(row) = current.take() {
                        rows.push(row);
                    }
                }
                depth -= 1;
            }
            Token::Number(n, loc) => match current.as_mut() {
                Some((_, row)) => row.push(*n),
                None => {
                    return Err(InputParseError::malformed(
                        "value outside of a bracketed row",
                        *loc,
                    ))
                }
            },
            Token::Comma(_) | Token::Semicolon(_) | Token::Newline(_) | Token::Eof(_) => {}
            other => return Err(non_numeric(other)),
        }
    }
    Ok(rows)
}

/// Deepest bracket nesting, rejecting unbalanced brackets
fn bracket_depth(tokens: &[Token]) -> Result<usize, InputParseError> {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for token in tokens {
        match token {
            Token::LBracket(_) => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            Token::RBracket(loc) => {
                if depth == 0 {
                    return Err(InputParseError::malformed("unmatched ']'", *loc));
                }
                depth -= 1;
            }
            Token::Eof(loc) if depth > 0 => {
                return Err(InputParseError::malformed("missing ']'", *loc));
            }
            _ => {}
        }
    }
    Ok(max_depth)
}

fn non_numeric(token: &Token) -> InputParseError {
    InputParseError::NonNumeric {
        token: token.text(),
        location: token.location(),
    }
}

/// Whether the token stream holds any value at all
pub(crate) fn has_values(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|t| matches!(t, Token::Number(..) | Token::Word(..) | Token::Null(_)))
}

/// Parse a rectangular integer matrix
///
/// Checks run in order: non-numeric values, ragged rows, the size bound, then
/// squareness when `square` is set.
pub fn parse_matrix(
    text: &str,
    max_rows: usize,
    max_cols: usize,
    square: bool,
) -> Result<Vec<Vec<i64>>, InputParseError> {
    let tokens = tokenize(text);
    if !has_values(&tokens) {
        return Err(InputParseError::Empty);
    }

    let rows = split_rows(&tokens)?;
    let Some(first) = rows.first() else {
        return Err(InputParseError::Empty);
    };
    let cols = first.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols || row.is_empty() {
            return Err(InputParseError::Ragged {
                row: i + 1,
                expected: cols,
                got: row.len(),
            });
        }
    }

    if rows.len() > max_rows || cols > max_cols {
        return Err(InputParseError::TooLarge {
            rows: rows.len(),
            cols,
            max_rows,
            max_cols,
        });
    }

    if square && rows.len() != cols {
        return Err(InputParseError::NotSquare {
            rows: rows.len(),
            cols,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_matrix() {
        let m = parse_matrix("[[1,2,3],[4,5,6],[7,8,9]]", 6, 6, true).unwrap();
        assert_eq!(m, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);

        let m = parse_matrix("[1,2],[3,4]", 6, 6, true).unwrap();
        assert_eq!(m, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_line_matrix() {
        let m = parse_matrix("1 2 3; 4 5 6", 6, 6, false).unwrap();
        assert_eq!(m, vec![vec![1, 2, 3], vec![4, 5, 6]]);

        let m = parse_matrix("1,2\n\n3,4\n", 6, 6, true).unwrap();
        assert_eq!(m, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_matrix_errors() {
        assert_eq!(parse_matrix("  ", 6, 6, false), Err(InputParseError::Empty));
        assert_eq!(parse_matrix("[[]]", 6, 6, false), Err(InputParseError::Empty));
        assert_eq!(
            parse_matrix("1 2; 3", 6, 6, false),
            Err(InputParseError::Ragged {
                row: 2,
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            parse_matrix("1 2 3; 4 5 6", 6, 6, true),
            Err(InputParseError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            parse_matrix("1 2 3; 4 5 6; 7 8 9", 2, 2, false),
            Err(InputParseError::TooLarge {
                rows: 3,
                cols: 3,
                max_rows: 2,
                max_cols: 2
            })
        );
        assert!(matches!(
            parse_matrix("[[1, a]]", 6, 6, false),
            Err(InputParseError::NonNumeric { .. })
        ));
        assert!(matches!(
            parse_matrix("[[[1]]]", 6, 6, false),
            Err(InputParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_matrix("[[1,2],[3,4]", 6, 6, false),
            Err(InputParseError::Malformed { .. })
        ));
    }
}
