//! Minimal Go tokenizer.
//!
//! Only distinguishes what declaration discovery needs: identifiers,
//! literals (skipped as opaque), punctuation and comments, each with a
//! 1-based line and byte column. Malformed input never fails; an
//! unterminated literal or comment simply runs to the end of the line or
//! file.

use crate::declaration::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Literal,
    Punct,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: Position,
    /// Line of the last character; differs from `position.line` only for
    /// block comments and raw strings.
    pub end_line: usize,
}

impl Token<'_> {
    #[must_use]
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == punct
    }

    #[must_use]
    pub fn is_ident(&self, ident: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == ident
    }

    /// Whether a newline after this token terminates the statement, per
    /// Go's automatic semicolon rule.
    #[must_use]
    pub fn ends_statement(&self) -> bool {
        match self.kind {
            TokenKind::Literal => true,
            TokenKind::Ident => {
                !is_keyword(self.text)
                    || matches!(self.text, "break" | "continue" | "fallthrough" | "return")
            }
            TokenKind::Punct => matches!(self.text, ")" | "]" | "}" | "++" | "--"),
            TokenKind::Comment => false,
        }
    }
}

const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Split Go source into tokens, comments included.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

struct Lexer<'a> {
    src: &'a str,
    offset: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    const fn new(src: &'a str) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.offset;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    const fn current_position(&self) -> Position {
        Position::new(self.line, self.offset - self.line_start + 1)
    }

    fn skip_whitespace(&mut self) {
        self.bump_while(char::is_whitespace);
    }

    fn line_comment(&mut self) {
        self.bump_while(|c| c != '\n');
    }

    fn block_comment(&mut self) {
        self.bump();
        self.bump();
        while let Some(c) = self.bump() {
            if c == '*' && self.peek() == Some('/') {
                self.bump();
                return;
            }
        }
    }

    /// Interpreted string or rune literal; stops at the closing quote or
    /// the end of the line.
    fn quoted(&mut self, quote: char) {
        self.bump();
        while let Some(c) = self.peek() {
            if c == '\n' {
                return;
            }
            self.bump();
            if c == '\\' {
                if self.peek() != Some('\n') {
                    self.bump();
                }
            } else if c == quote {
                return;
            }
        }
    }

    fn raw_string(&mut self) {
        self.bump();
        while let Some(c) = self.bump() {
            if c == '`' {
                return;
            }
        }
    }

    fn number(&mut self) {
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
            if !(c.is_alphanumeric() || c == '_' || c == '.' || exponent_sign) {
                break;
            }
            prev = c;
            self.bump();
        }
    }

    fn punct(&mut self) {
        let first = self.bump();
        if matches!(first, Some('+' | '-')) && self.peek() == first {
            self.bump();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let c = self.peek()?;

        let start = self.offset;
        let position = self.current_position();

        let kind = match c {
            '/' if self.peek_second() == Some('/') => {
                self.line_comment();
                TokenKind::Comment
            }
            '/' if self.peek_second() == Some('*') => {
                self.block_comment();
                TokenKind::Comment
            }
            '"' | '\'' => {
                self.quoted(c);
                TokenKind::Literal
            }
            '`' => {
                self.raw_string();
                TokenKind::Literal
            }
            '.' if self.peek_second().is_some_and(|d| d.is_ascii_digit()) => {
                self.number();
                TokenKind::Literal
            }
            c if c.is_ascii_digit() => {
                self.number();
                TokenKind::Literal
            }
            c if c.is_alphabetic() || c == '_' => {
                self.bump_while(|c| c.is_alphanumeric() || c == '_');
                TokenKind::Ident
            }
            _ => {
                self.punct();
                TokenKind::Punct
            }
        };

        let mut text = &self.src[start..self.offset];
        if kind == TokenKind::Comment {
            text = text.strip_suffix('\r').unwrap_or(text);
        }

        Some(Token {
            kind,
            text,
            position,
            end_line: self.line_of_last_char(start),
        })
    }
}

impl Lexer<'_> {
    /// Line of the token's final character. A line comment stops before
    /// its newline, so only multi-line tokens move past `position.line`.
    fn line_of_last_char(&self, start: usize) -> usize {
        let consumed = &self.src[start..self.offset];
        if consumed.ends_with('\n') {
            self.line - 1
        } else {
            self.line
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
