//! Flat list parsers: number lists, single numbers and character sequences

use super::errors::InputParseError;
use super::lexer::{tokenize, Token};

/// Parse a flat list of integers
///
/// Accepts `1,2,3`, `[1, 2, 3]`, or whitespace/newline separated values. At
/// most one pair of enclosing brackets is allowed.
pub fn parse_number_list(text: &str, max_len: usize) -> Result<Vec<i64>, InputParseError> {
    let mut values = Vec::new();
    let mut open = false;
    let mut closed = false;

    for token in tokenize(text) {
        match token {
            Token::Number(n, loc) => {
                if closed {
                    return Err(InputParseError::malformed(
                        "value after closing ']'",
                        loc,
                    ));
                }
                values.push(n);
            }
            Token::LBracket(loc) => {
                if open || closed {
                    return Err(InputParseError::malformed(
                        "nested lists are not allowed here",
                        loc,
                    ));
                }
                if !values.is_empty() {
                    return Err(InputParseError::malformed("unexpected '['", loc));
                }
                open = true;
            }
            Token::RBracket(loc) => {
                if !open {
                    return Err(InputParseError::malformed("unmatched ']'", loc));
                }
                open = false;
                closed = true;
            }
            Token::Comma(_) | Token::Semicolon(_) | Token::Newline(_) => {}
            Token::Null(loc) | Token::Word(_, loc) => {
                return Err(InputParseError::NonNumeric {
                    token: token.text(),
                    location: loc,
                });
            }
            Token::Eof(loc) => {
                if open {
                    return Err(InputParseError::malformed("missing ']'", loc));
                }
            }
        }
    }

    if values.is_empty() {
        return Err(InputParseError::Empty);
    }
    if values.len() > max_len {
        return Err(InputParseError::TooLong {
            len: values.len(),
            max: max_len,
        });
    }
    Ok(values)
}

/// Parse a single integer parameter (a target sum, a node value, a count)
pub fn parse_number(text: &str) -> Result<i64, InputParseError> {
    let values = parse_number_list(text, 1)?;
    Ok(values[0])
}

/// Parse a character sequence for string algorithms
///
/// Surrounding whitespace and one pair of matching quotes are stripped. The
/// empty string is valid input.
pub fn parse_char_sequence(text: &str, max_len: usize) -> Result<Vec<char>, InputParseError> {
    let trimmed = text.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    let chars: Vec<char> = unquoted.chars().collect();
    if chars.len() > max_len {
        return Err(InputParseError::TooLong {
            len: chars.len(),
            max: max_len,
        });
    }
    Ok(chars)
}

/// Check every value lies within `min..=max`
pub fn ensure_range(values: &[i64], min: i64, max: i64) -> Result<(), InputParseError> {
    match values.iter().find(|v| **v < min || **v > max) {
        Some(&value) => Err(InputParseError::OutOfRange { value, min, max }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::lexer::Location;

    #[test]
    fn test_number_list_formats() {
        assert_eq!(parse_number_list("1,2,3", 10).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_number_list("[ -1, 0 ,4 ]", 10).unwrap(), vec![-1, 0, 4]);
        assert_eq!(parse_number_list("5 6\n7", 10).unwrap(), vec![5, 6, 7]);
    }

    #[test]
    fn test_number_list_errors() {
        assert_eq!(parse_number_list("", 10), Err(InputParseError::Empty));
        assert_eq!(parse_number_list("[]", 10), Err(InputParseError::Empty));
        assert_eq!(
            parse_number_list("1, x, 3", 10),
            Err(InputParseError::NonNumeric {
                token: "x".to_string(),
                location: Location::new(1, 4),
            })
        );
        assert_eq!(
            parse_number_list("1 2 3", 2),
            Err(InputParseError::TooLong { len: 3, max: 2 })
        );
        assert!(matches!(
            parse_number_list("[[1]]", 10),
            Err(InputParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_number_list("[1, 2", 10),
            Err(InputParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_number_list("[1] 2", 10),
            Err(InputParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_single_number() {
        assert_eq!(parse_number(" 7 "), Ok(7));
        assert_eq!(parse_number("[-3]"), Ok(-3));
        assert!(parse_number("1 2").is_err());
    }

    #[test]
    fn test_char_sequence() {
        assert_eq!(parse_char_sequence("abc", 5).unwrap(), vec!['a', 'b', 'c']);
        assert_eq!(parse_char_sequence("\"a b\"", 5).unwrap(), vec!['a', ' ', 'b']);
        assert_eq!(parse_char_sequence("''", 5).unwrap(), Vec::<char>::new());
        assert_eq!(parse_char_sequence("   ", 5).unwrap(), Vec::<char>::new());
        assert_eq!(
            parse_char_sequence("abcdef", 5),
            Err(InputParseError::TooLong { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_range_check() {
        assert!(ensure_range(&[0, 3, 5], 0, 5).is_ok());
        assert_eq!(
            ensure_range(&[1, -1], 0, 5),
            Err(InputParseError::OutOfRange {
                value: -1,
                min: 0,
                max: 5
            })
        );
    }
}
