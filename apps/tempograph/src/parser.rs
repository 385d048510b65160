//! # Statement Parser Adapter
//!
//! A line-oriented N-Triples subset parser implementing the core's
//! `StatementParser` capability. One statement per line:
//!
//! ```text
//! <subject-iri> <predicate-iri> <object-iri> .
//! <subject-iri> <predicate-iri> "literal" .
//! <subject-iri> <predicate-iri> "literal"@en .
//! <subject-iri> <predicate-iri> "literal"^^<datatype-iri> .
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Any malformed
//! line abandons the whole document with `EngineError::Parse` — the
//! engine then treats the poll as a no-op, so malformed input never
//! crashes the loop or corrupts the history.

use tempograph_core::{EngineError, Iri, Statement, StatementParser, Term};

// =============================================================================
// LINE CURSOR
// =============================================================================

/// Byte cursor over one statement line.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, line_no: usize) -> Self {
        Self { line, pos: 0, line_no }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.line.len() - trimmed.len();
    }

    fn malformed(&self, what: &str) -> EngineError {
        EngineError::Parse(format!("line {}: {what}", self.line_no))
    }

    /// Consume `<iri>` and return the enclosed IRI.
    fn take_iri(&mut self) -> Result<Iri, EngineError> {
        self.skip_whitespace();
        let rest = self.rest();
        let Some(rest) = rest.strip_prefix('<') else {
            return Err(self.malformed("expected '<'"));
        };
        let Some(end) = rest.find('>') else {
            return Err(self.malformed("unterminated IRI"));
        };
        let iri = &rest[..end];
        self.pos += 1 + end + 1;
        Ok(Iri::new(iri))
    }

    /// Consume a quoted literal with optional `@lang` or `^^<datatype>`
    /// suffix. The datatype is accepted and discarded: typed literals
    /// are still literals to the projection.
    fn take_literal(&mut self) -> Result<Term, EngineError> {
        let rest = self.rest();
        let Some(body) = rest.strip_prefix('"') else {
            return Err(self.malformed("expected '\"'"));
        };

        let mut value = String::new();
        let mut chars = body.char_indices();
        let mut end = None;
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) => value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    }),
                    None => return Err(self.malformed("dangling escape in literal")),
                },
                '"' => {
                    end = Some(i);
                    break;
                }
                other => value.push(other),
            }
        }
        let Some(end) = end else {
            return Err(self.malformed("unterminated literal"));
        };
        self.pos += 1 + end + 1;

        let mut lang = None;
        if let Some(tail) = self.rest().strip_prefix('@') {
            let tag_len = tail
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(tail.len());
            if tag_len == 0 {
                return Err(self.malformed("empty language tag"));
            }
            lang = Some(tail[..tag_len].to_string());
            self.pos += 1 + tag_len;
        } else if self.rest().starts_with("^^") {
            self.pos += 2;
            let _datatype = self.take_iri()?;
        }

        Ok(Term::Literal { value, lang })
    }

    /// Consume the object position: IRI or literal.
    fn take_object(&mut self) -> Result<Term, EngineError> {
        self.skip_whitespace();
        if self.rest().starts_with('<') {
            Ok(Term::Resource(self.take_iri()?))
        } else {
            self.take_literal()
        }
    }

    /// Consume the closing `.` and verify nothing trails it.
    fn finish(&mut self) -> Result<(), EngineError> {
        self.skip_whitespace();
        let Some(rest) = self.rest().strip_prefix('.') else {
            return Err(self.malformed("expected terminating '.'"));
        };
        if !rest.trim().is_empty() {
            return Err(self.malformed("trailing content after '.'"));
        }
        Ok(())
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Line-oriented N-Triples subset parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct NTriplesParser;

impl NTriplesParser {
    /// Create a parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn parse_line(line: &str, line_no: usize) -> Result<Statement, EngineError> {
        let mut cursor = Cursor::new(line, line_no);
        let subject = cursor.take_iri()?;
        let predicate = cursor.take_iri()?;
        let object = cursor.take_object()?;
        cursor.finish()?;
        Ok(Statement::new(subject, predicate, object))
    }
}

impl StatementParser for NTriplesParser {
    fn parse(&self, text: &str) -> Result<Vec<Statement>, EngineError> {
        let mut statements = Vec::new();
        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            statements.push(Self::parse_line(line, index + 1)?);
        }
        Ok(statements)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<Statement> {
        NTriplesParser::new().parse(text).expect("valid document")
    }

    #[test]
    fn parses_resource_object() {
        let statements = parse("<http://ex.org/a> <http://ex.org/knows> <http://ex.org/b> .");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].subject, Iri::new("http://ex.org/a"));
        assert_eq!(statements[0].predicate, Iri::new("http://ex.org/knows"));
        assert_eq!(
            statements[0].object,
            Term::Resource(Iri::new("http://ex.org/b"))
        );
    }

    #[test]
    fn parses_plain_literal() {
        let statements = parse(r#"<http://ex.org/a> <http://ex.org/name> "Alice" ."#);
        assert_eq!(
            statements[0].object,
            Term::Literal {
                value: "Alice".to_string(),
                lang: None
            }
        );
    }

    #[test]
    fn parses_language_tagged_literal() {
        let statements = parse(r#"<http://ex.org/a> <http://ex.org/name> "Alice"@en ."#);
        assert_eq!(
            statements[0].object,
            Term::Literal {
                value: "Alice".to_string(),
                lang: Some("en".to_string())
            }
        );
    }

    #[test]
    fn datatype_suffix_is_discarded() {
        let statements = parse(
            r#"<http://ex.org/a> <http://ex.org/age> "42"^^<http://www.w3.org/2001/XMLSchema#integer> ."#,
        );
        assert_eq!(
            statements[0].object,
            Term::Literal {
                value: "42".to_string(),
                lang: None
            }
        );
    }

    #[test]
    fn unescapes_literal_escapes() {
        let statements = parse(r#"<http://ex.org/a> <http://ex.org/note> "line\none\t\"q\"" ."#);
        assert_eq!(
            statements[0].object,
            Term::Literal {
                value: "line\none\t\"q\"".to_string(),
                lang: None
            }
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let statements = parse(
            "# header comment\n\n<http://ex.org/a> <http://ex.org/knows> <http://ex.org/b> .\n\n",
        );
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn malformed_line_abandons_whole_document() {
        let parser = NTriplesParser::new();
        let err = parser
            .parse("<http://ex.org/a> <http://ex.org/knows> <http://ex.org/b> .\n<broken")
            .expect_err("malformed");
        assert!(matches!(err, EngineError::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_terminator_is_malformed() {
        let parser = NTriplesParser::new();
        assert!(
            parser
                .parse("<http://ex.org/a> <http://ex.org/knows> <http://ex.org/b>")
                .is_err()
        );
    }

    #[test]
    fn trailing_content_is_malformed() {
        let parser = NTriplesParser::new();
        assert!(
            parser
                .parse("<http://ex.org/a> <http://ex.org/knows> <http://ex.org/b> . extra")
                .is_err()
        );
    }

    #[test]
    fn unterminated_literal_is_malformed() {
        let parser = NTriplesParser::new();
        assert!(
            parser
                .parse(r#"<http://ex.org/a> <http://ex.org/name> "Alice ."#)
                .is_err()
        );
    }

    #[test]
    fn empty_document_parses_to_no_statements() {
        assert!(parse("").is_empty());
    }
}
