//! Named-placeholder substitution for the SQL templates.
//!
//! Placeholders are written `{name}`. `{{` and `}}` produce literal braces.
//! A placeholder that sits inside a single-quoted SQL literal has `'` in its
//! value doubled, so the value cannot terminate the string. Placeholders in
//! identifier positions are substituted unchanged.

use crate::error::TemplateError;

/// A static template with `{name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    source: &'static str,
}

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Names of all placeholders, in order of first appearance.
    pub fn placeholders(&self) -> Result<Vec<&'static str>, TemplateError> {
        let mut names = Vec::new();
        for segment in segments(self.source) {
            if let Segment::Placeholder(name) = segment? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    /// Substitute `values` into the template.
    ///
    /// Values not referenced by the template are ignored; a placeholder with
    /// no matching value is an error.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len() + 64);
        // Tracks whether the cursor is between an opening and closing `'`.
        // An empty literal `''` toggles twice and leaves it unchanged.
        let mut in_literal = false;
        for segment in segments(self.source) {
            match segment? {
                Segment::Literal(text) => {
                    if text.matches('\'').count() % 2 == 1 {
                        in_literal = !in_literal;
                    }
                    out.push_str(text);
                }
                Segment::Placeholder(name) => {
                    let value = values
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
                    if in_literal {
                        out.push_str(&escape_sql_literal(value));
                    } else {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Escape a value for use inside a single-quoted SQL string literal.
pub fn escape_sql_literal(s: &str) -> String {
    s.replace('\'', "''")
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn segments(source: &str) -> impl Iterator<Item = Result<Segment<'_>, TemplateError>> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos >= source.len() {
            return None;
        }
        let rest = &source[pos..];
        let Some(idx) = rest.find(['{', '}']) else {
            pos = source.len();
            return Some(Ok(Segment::Literal(rest)));
        };
        if idx > 0 {
            pos += idx;
            return Some(Ok(Segment::Literal(&rest[..idx])));
        }

        let start = pos;
        let tail = &rest[1..];
        if rest.starts_with('}') {
            return if tail.starts_with('}') {
                pos += 2;
                Some(Ok(Segment::Literal("}")))
            } else {
                pos = source.len();
                Some(Err(TemplateError::Unbalanced { offset: start }))
            };
        }
        if tail.starts_with('{') {
            pos += 2;
            return Some(Ok(Segment::Literal("{")));
        }
        match tail.find(['{', '}']) {
            Some(end) if tail[end..].starts_with('}') => {
                pos += end + 2;
                Some(Ok(Segment::Placeholder(&tail[..end])))
            }
            _ => {
                pos = source.len();
                Some(Err(TemplateError::Unbalanced { offset: start }))
            }
        }
    })
}
