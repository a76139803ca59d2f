//! Template parsing.
//!
//! Token syntax:
//!
//! - `${name}` or `${dotted.path}`
//! - `${name[2]}` element of a list, or character of a text
//! - `${name[0,2]}` slice of a list, or substring `[0, 2)` of a text
//! - `${name;renderer}` or `${name;renderer(args)}`
//!
//! An unterminated `${` is kept as literal text.

use std::ops::Range;

/// Index applied to a token value before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    At(usize),
    Range(usize, usize),
}

/// A `${...}` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenExpr<'t> {
    pub name: &'t str,
    pub index: Option<Index>,
    pub renderer: Option<&'t str>,
    pub args: Option<&'t str>,
    /// Byte range of the whole token, `${` to `}`, in the template.
    pub span: Range<usize>,
}

/// Part of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    Literal(&'t str),
    Token(TokenExpr<'t>),
}

/// Split a template into literal text and tokens.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(offset) = template[pos..].find("${") {
        let start = pos + offset;
        let Some(len) = template[start + 2..].find('}') else {
            break;
        };
        let end = start + 2 + len + 1;

        if start > pos {
            segments.push(Segment::Literal(&template[pos..start]));
        }
        segments.push(Segment::Token(parse_token(
            &template[start + 2..end - 1],
            start..end,
        )));
        pos = end;
    }

    if pos < template.len() {
        segments.push(Segment::Literal(&template[pos..]));
    }
    segments
}

/// Iterate over the tokens of a parsed template.
pub fn tokens<'a, 't>(segments: &'a [Segment<'t>]) -> impl Iterator<Item = &'a TokenExpr<'t>> {
    segments.iter().filter_map(|segment| match segment {
        Segment::Token(token) => Some(token),
        Segment::Literal(_) => None,
    })
}

fn parse_token(inner: &str, span: Range<usize>) -> TokenExpr<'_> {
    let (expr, renderer_spec) = match inner.split_once(';') {
        Some((expr, spec)) => (expr.trim(), Some(spec.trim())),
        None => (inner.trim(), None),
    };

    let (name, index) = split_index(expr);

    let (renderer, args) = match renderer_spec {
        Some(spec) => match spec.split_once('(') {
            Some((name, rest)) if rest.ends_with(')') => {
                (Some(name.trim()), Some(&rest[..rest.len() - 1]))
            }
            _ => (Some(spec), None),
        },
        None => (None, None),
    };

    TokenExpr {
        name,
        index,
        renderer,
        args,
        span,
    }
}

fn split_index(expr: &str) -> (&str, Option<Index>) {
    let Some(open) = expr.find('[') else {
        return (expr, None);
    };
    if !expr.ends_with(']') {
        return (expr, None);
    }

    let inner = &expr[open + 1..expr.len() - 1];
    let index = match inner.split_once(',') {
        Some((from, to)) => match (from.trim().parse(), to.trim().parse()) {
            (Ok(from), Ok(to)) => Some(Index::Range(from, to)),
            _ => None,
        },
        None => inner.trim().parse().ok().map(Index::At),
    };

    match index {
        Some(index) => (expr[..open].trim(), Some(index)),
        // keep the raw expression so it shows up as an unknown token
        None => (expr, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token<'t>(segments: &[Segment<'t>], n: usize) -> TokenExpr<'t> {
        tokens(segments).nth(n).cloned().expect("token")
    }

    #[test]
    fn test_parse_literals_and_tokens() {
        let segments = parse("${showTitle} (${showYear})");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1], Segment::Literal(" ("));
        assert_eq!(segments[3], Segment::Literal(")"));

        let title = token(&segments, 0);
        assert_eq!(title.name, "showTitle");
        assert_eq!(title.span, 0..12);
        assert_eq!(token(&segments, 1).span, 14..25);
    }

    #[test]
    fn test_parse_renderer() {
        let segments = parse("${airedDate;date(yyyy-MM-dd)}${title;upper}");
        let date = token(&segments, 0);
        assert_eq!(date.name, "airedDate");
        assert_eq!(date.renderer, Some("date"));
        assert_eq!(date.args, Some("yyyy-MM-dd"));

        let title = token(&segments, 1);
        assert_eq!(title.renderer, Some("upper"));
        assert_eq!(title.args, None);
    }

    #[test]
    fn test_parse_index() {
        let segments = parse("${audioCodecList[1]} ${title[0,3];upper} ${x[a]}");
        assert_eq!(token(&segments, 0).index, Some(Index::At(1)));
        assert_eq!(token(&segments, 0).name, "audioCodecList");
        assert_eq!(token(&segments, 1).index, Some(Index::Range(0, 3)));
        assert_eq!(token(&segments, 1).renderer, Some("upper"));
        assert_eq!(token(&segments, 2).name, "x[a]");
        assert_eq!(token(&segments, 2).index, None);
    }

    #[test]
    fn test_unterminated_token_is_literal() {
        let segments = parse("Show ${title");
        assert_eq!(segments, vec![Segment::Literal("Show ${title")]);
        assert!(parse("").is_empty());
    }
}
