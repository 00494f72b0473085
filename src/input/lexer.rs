//! Lexer for free-text algorithm input
//!
//! Converts what a user types into an input box (`[1, 2, 3]`, `1 2; 3 4`,
//! `[3,9,20,null,null,15,7]`) into a flat [`Token`] stream. The lexer itself
//! never fails: anything it does not recognise becomes a [`Token::Word`], and
//! the parser that receives it decides whether that is an error.

use std::fmt;

/// Position of a token in the input text (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 1 {
            write!(f, "column {}", self.column)
        } else {
            write!(f, "line {}, column {}", self.line, self.column)
        }
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64, Location),
    /// `null`, `None` or `nil`, case-insensitive
    Null(Location),
    Word(String, Location),

    LBracket(Location),  // [
    RBracket(Location),  // ]
    Comma(Location),     // ,
    Semicolon(Location), // ;
    Newline(Location),

    Eof(Location),
}

impl Token {
    /// Returns the location where this token appears.
    pub fn location(&self) -> Location {
        match self {
            Token::Number(_, loc)
            | Token::Word(_, loc)
            | Token::Null(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Comma(loc)
            | Token::Semicolon(loc)
            | Token::Newline(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// Whether this token only separates values
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Comma(_) | Token::Semicolon(_) | Token::Newline(_))
    }

    /// Text shown to the user when this token is rejected
    pub fn text(&self) -> String {
        match self {
            Token::Number(n, _) => n.to_string(),
            Token::Null(_) => "null".to_string(),
            Token::Word(w, _) => w.clone(),
            Token::LBracket(_) => "[".to_string(),
            Token::RBracket(_) => "]".to_string(),
            Token::Comma(_) => ",".to_string(),
            Token::Semicolon(_) => ";".to_string(),
            Token::Newline(_) => "\\n".to_string(),
            Token::Eof(_) => "end of input".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Null(_) => write!(f, "'null'"),
            Token::Word(w, _) => write!(f, "'{}'", w),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Newline(_) => write!(f, "line break"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer for algorithm input text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input; the last token is always [`Token::Eof`]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_blanks();

            let loc = self.current_location();
            let Some(ch) = self.peek() else {
                tokens.push(Token::Eof(loc));
                break;
            };

            let token = match ch {
                '[' => self.single(Token::LBracket(loc)),
                ']' => self.single(Token::RBracket(loc)),
                ',' => self.single(Token::Comma(loc)),
                ';' => self.single(Token::Semicolon(loc)),
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                    Token::Newline(loc)
                }
                _ => self.word_or_number(loc),
            };
            tokens.push(token);
        }

        tokens
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Consume a run of non-delimiter characters and classify it
    fn word_or_number(&mut self, loc: Location) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if is_delimiter(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }

        if text.eq_ignore_ascii_case("null")
            || text.eq_ignore_ascii_case("none")
            || text.eq_ignore_ascii_case("nil")
        {
            return Token::Null(loc);
        }

        let digits = text.strip_prefix(['-', '+']).unwrap_or(&text);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            // Overflowing literals fall through to Word and are reported as non-numeric
            if let Ok(n) = text.parse::<i64>() {
                return Token::Number(n, loc);
            }
        }

        Token::Word(text, loc)
    }

    fn skip_blanks(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        self.column += 1;
        Some(ch)
    }

    fn current_location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, '[' | ']' | ',' | ';' | '\n' | ' ' | '\t' | '\r')
}

/// Tokenize `text` in one call
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).tokenize()
}
