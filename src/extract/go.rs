use std::path::Path;

use crate::comment::Comment;
use crate::declaration::{DeclKind, Declaration, Position, is_exported_name};

use super::lexer::{Token, TokenKind, tokenize};
use super::{DeclarationExtractor, has_test_role, is_test_file};

/// Extracts functions, structs and interfaces from Go source text.
///
/// Works on the token stream alone: bracket depth locates top-level
/// declarations and Go's comment grouping rules decide which comment
/// group is a declaration's doc.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoExtractor;

impl GoExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DeclarationExtractor for GoExtractor {
    fn extract(&self, path: &Path, source: &str) -> Vec<Declaration> {
        let tokens = attach_docs(tokenize(source));
        Parser {
            tokens: &tokens,
            pos: 0,
            test_file: is_test_file(path),
        }
        .parse()
    }
}

/// A non-comment token with the lead comment group directly above it.
#[derive(Debug)]
struct Significant<'a> {
    token: Token<'a>,
    doc: Option<Comment>,
}

/// Fold comments into the following token's doc slot.
///
/// Comments at most one line apart form a group. A group that starts on
/// the line of the previous token is a trailing comment and consists only
/// of comments on that line. The last group before a token is its doc
/// when it ends on the line right above the token.
fn attach_docs(tokens: Vec<Token<'_>>) -> Vec<Significant<'_>> {
    let mut out = Vec::new();
    let mut pending: Vec<Token<'_>> = Vec::new();
    let mut prev_line: Option<usize> = None;

    for token in tokens {
        if token.kind == TokenKind::Comment {
            pending.push(token);
            continue;
        }
        let doc = lead_group(&pending, prev_line, token.position.line);
        pending.clear();
        prev_line = Some(token.end_line);
        out.push(Significant { token, doc });
    }

    out
}

fn lead_group(
    comments: &[Token<'_>],
    prev_line: Option<usize>,
    next_line: usize,
) -> Option<Comment> {
    let mut idx = 0;

    if let (Some(prev), Some(first)) = (prev_line, comments.first())
        && first.position.line == prev
    {
        let mut end = prev;
        while let Some(c) = comments.get(idx)
            && c.position.line <= end
        {
            end = c.end_line;
            idx += 1;
        }
    }

    let mut last: Option<(&[Token<'_>], usize)> = None;
    while let Some(first) = comments.get(idx) {
        let start = idx;
        let mut end = first.position.line;
        while let Some(c) = comments.get(idx)
            && c.position.line <= end + 1
        {
            end = c.end_line;
            idx += 1;
        }
        last = Some((&comments[start..idx], end));
    }

    let (group, end) = last?;
    (end + 1 == next_line).then(|| Comment::new(group[0].position, group.iter().map(|c| c.text)))
}

struct Parser<'t, 'a> {
    tokens: &'t [Significant<'a>],
    pos: usize,
    test_file: bool,
}

impl Parser<'_, '_> {
    fn parse(mut self) -> Vec<Declaration> {
        let mut decls = Vec::new();
        let mut depth = 0usize;

        while let Some(sig) = self.tokens.get(self.pos) {
            let token = sig.token;
            if depth == 0 && self.starts_statement(self.pos) {
                if token.is_ident("func") {
                    if let Some(decl) = self.func_decl() {
                        decls.push(decl);
                    }
                    continue;
                }
                if token.is_ident("type") {
                    decls.extend(self.type_decl());
                    continue;
                }
            }
            depth = adjust_depth(depth, &token);
            self.pos += 1;
        }

        decls
    }

    fn token(&self, idx: usize) -> Option<&Token<'_>> {
        self.tokens.get(idx).map(|s| &s.token)
    }

    fn starts_statement(&self, idx: usize) -> bool {
        let Some(current) = self.token(idx) else {
            return false;
        };
        let Some(prev) = idx.checked_sub(1).and_then(|i| self.token(i)) else {
            return true;
        };
        prev.is_punct(";")
            || prev.is_punct("{")
            || prev.is_punct("(")
            || (prev.end_line < current.position.line && prev.ends_statement())
    }

    /// Index just past the bracket group opening at `open`.
    fn skip_group(&self, open: usize) -> usize {
        let mut depth = 0usize;
        let mut idx = open;
        while let Some(token) = self.token(idx) {
            depth = adjust_depth(depth, token);
            idx += 1;
            if depth == 0 {
                break;
            }
        }
        idx
    }

    /// `func [receiver] Name ...`, leaving `pos` just after the name.
    fn func_decl(&mut self) -> Option<Declaration> {
        let func = &self.tokens[self.pos];
        let position = func.token.position;
        let doc = func.doc.clone();
        self.pos += 1;

        let mut receiver = None;
        if self.token(self.pos).is_some_and(|t| t.is_punct("(")) {
            let end = self.skip_group(self.pos);
            let base = self.receiver_type(self.pos + 1, end.saturating_sub(1));
            receiver = Some(base.is_some_and(is_exported_name));
            self.pos = end;
        }

        let name = self.token(self.pos).filter(|t| t.kind == TokenKind::Ident)?;
        let name = name.text.to_string();
        self.pos += 1;

        let kind = if receiver.is_some() {
            DeclKind::ReceiverFunction
        } else {
            DeclKind::FreeFunction
        };
        let test_element = self.test_file && has_test_role(&name);

        let mut decl = Declaration::new(name, kind, position).with_test_element(test_element);
        if let Some(receiver_exported) = receiver {
            decl = decl.with_receiver_exported(receiver_exported);
        }
        if let Some(doc) = doc {
            decl = decl.with_doc(doc);
        }
        Some(decl)
    }

    /// Base type name of a receiver list spanning `start..end`: the last
    /// identifier outside any type argument brackets.
    fn receiver_type(&self, start: usize, end: usize) -> Option<&str> {
        let mut depth = 0usize;
        let mut base = None;
        for idx in start..end {
            let token = self.token(idx)?;
            if depth == 0 && token.kind == TokenKind::Ident {
                base = Some(token.text);
            }
            depth = adjust_depth(depth, token);
        }
        base
    }

    fn type_decl(&mut self) -> Vec<Declaration> {
        let position = self.tokens[self.pos].token.position;
        self.pos += 1;

        if self.token(self.pos).is_some_and(|t| t.is_punct("(")) {
            return self.type_group();
        }

        let doc = self.tokens[self.pos - 1].doc.clone();
        self.type_spec(position, doc).into_iter().collect()
    }

    /// `type ( spec; spec; ... )`: each spec carries its own doc and
    /// position. The doc above `type (` belongs to the group, not a spec.
    fn type_group(&mut self) -> Vec<Declaration> {
        let end = self.skip_group(self.pos).saturating_sub(1);
        self.pos += 1;

        let mut decls = Vec::new();
        while self.pos < end {
            let Some(sig) = self.tokens.get(self.pos) else {
                break;
            };
            if sig.token.kind == TokenKind::Ident && self.starts_statement(self.pos) {
                let position = sig.token.position;
                let doc = sig.doc.clone();
                let before = self.pos;
                decls.extend(self.type_spec(position, doc));
                if self.pos > before {
                    continue;
                }
            }
            self.pos = self.skip_one(self.pos);
        }

        self.pos = end + 1;
        decls
    }

    /// Advance past the token at `idx`, jumping over a whole bracket group
    /// when it opens one.
    fn skip_one(&self, idx: usize) -> usize {
        match self.token(idx) {
            Some(t) if is_open(t) => self.skip_group(idx),
            _ => idx + 1,
        }
    }

    /// `Name [TypeParams] [=] (struct {...} | interface {...} | other)`.
    ///
    /// Returns a declaration only for structs and interfaces, aliases
    /// included, leaving `pos` after their body. Other types stop at the
    /// first token of the type.
    fn type_spec(&mut self, position: Position, doc: Option<Comment>) -> Option<Declaration> {
        let name = self.token(self.pos).filter(|t| t.kind == TokenKind::Ident)?;
        let name = name.text.to_string();
        self.pos += 1;

        if self.token(self.pos).is_some_and(|t| t.is_punct("[")) {
            self.pos = self.skip_group(self.pos);
        }
        if self.token(self.pos).is_some_and(|t| t.is_punct("=")) {
            self.pos += 1;
        }

        let kind = match self.token(self.pos) {
            Some(t) if t.is_ident("struct") => DeclKind::Struct,
            Some(t) if t.is_ident("interface") => DeclKind::Interface,
            _ => return None,
        };
        self.pos += 1;

        let mut decl = Declaration::new(name, kind, position);
        if let Some(doc) = doc {
            decl = decl.with_doc(doc);
        }

        if self.token(self.pos).is_some_and(|t| t.is_punct("{")) {
            let end = self.skip_group(self.pos);
            if kind == DeclKind::Interface {
                let methods = self.interface_methods(self.pos + 1, end.saturating_sub(1));
                decl = decl.with_methods(methods);
            }
            self.pos = end;
        }

        Some(decl)
    }

    /// Method elements `Name(` of an interface body spanning `start..end`.
    /// Embedded interfaces and type unions are skipped.
    fn interface_methods(&self, start: usize, end: usize) -> Vec<Declaration> {
        let mut methods = Vec::new();
        let mut idx = start;

        while idx < end {
            let Some(sig) = self.tokens.get(idx) else {
                break;
            };
            let token = sig.token;
            if token.kind == TokenKind::Ident
                && self.starts_statement(idx)
                && self.token(idx + 1).is_some_and(|t| t.is_punct("("))
            {
                let mut method =
                    Declaration::new(token.text, DeclKind::InterfaceMethod, token.position);
                if let Some(doc) = sig.doc.clone() {
                    method = method.with_doc(doc);
                }
                methods.push(method);
            }
            idx = self.skip_one(idx);
        }

        methods
    }
}

fn is_open(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text, "(" | "[" | "{")
}

fn adjust_depth(depth: usize, token: &Token<'_>) -> usize {
    if token.kind != TokenKind::Punct {
        return depth;
    }
    match token.text {
        "(" | "[" | "{" => depth + 1,
        ")" | "]" | "}" => depth.saturating_sub(1),
        _ => depth,
    }
}

#[cfg(test)]
#[path = "go_tests.rs"]
mod tests;
