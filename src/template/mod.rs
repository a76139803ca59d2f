//! Token template engine.
//!
//! Templates mix literal text with `${token}` expressions (see [`parse`] for
//! the syntax) and the single character `$X` tokens of older patterns (see
//! [`translate_legacy`]). Rendering never fails: unknown tokens, missing
//! values and out of range indices all render as an empty string.
//!
//! # Examples
//!
//! ```
//! use showforged::model::{Episode, TvShow};
//! use showforged::template::{TemplateEngine, TokenContext};
//!
//! let engine = TemplateEngine::new();
//! let show = TvShow::new("The Office", Some(2005));
//! let episode = Episode::new(2, 1, "The Dundies");
//! let ctx = TokenContext::for_show(&show).with_episode(&episode);
//!
//! assert_eq!(
//!     engine.render("${showTitle} - S${seasonNr2}E${episodeNr2} - ${title}", &ctx),
//!     "The Office - S02E01 - The Dundies"
//! );
//! assert_eq!(engine.render("${showTitleSortable;first}/$M", &ctx), "O/Office, The");
//! assert_eq!(engine.render("${title[0,3];upper}", &ctx), "THE");
//! ```

mod legacy;
mod parse;
mod renderers;
mod tokens;

pub use legacy::translate_legacy;
pub use parse::{parse, tokens as parsed_tokens, Index, Segment, TokenExpr};
pub use renderers::{first_character, Renderer};
pub use tokens::{sortable_title, Accessor, DEFAULT_TITLE_PREFIXES};

use crate::model::{Episode, MediaFile, TvShow};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Tokens holding folder paths; their values keep path separators.
const PATH_TOKENS: &[&str] = &["parent", "tvShow.parent"];

/// Value of a token before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Empty,
    Text(String),
    Number(i64),
    Date(NaiveDate),
    List(Vec<String>),
}

impl TokenValue {
    /// Text value, `Empty` for an empty string.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Number value, `Empty` for negative (unknown) numbers.
    pub fn number(value: impl Into<i64>) -> Self {
        let value = value.into();
        if value < 0 {
            Self::Empty
        } else {
            Self::Number(value)
        }
    }

    /// List value, `Empty` when the list has no elements.
    pub fn list(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::List(values)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Apply an index: list elements for lists, characters for everything
    /// else. Out of range indices yield `Empty`.
    pub fn index(&self, index: Index) -> TokenValue {
        match (self, index) {
            (Self::Empty, _) => Self::Empty,
            (Self::List(items), Index::At(i)) => items
                .get(i)
                .map(|item| Self::text(item.as_str()))
                .unwrap_or(Self::Empty),
            (Self::List(items), Index::Range(from, to)) => {
                let to = to.min(items.len());
                if from >= to {
                    Self::Empty
                } else {
                    Self::text(items[from..to].join(" "))
                }
            }
            (other, Index::At(i)) => other
                .to_string()
                .chars()
                .nth(i)
                .map(|c| Self::Text(c.to_string()))
                .unwrap_or(Self::Empty),
            (other, Index::Range(from, to)) => {
                if from >= to {
                    return Self::Empty;
                }
                Self::text(
                    other
                        .to_string()
                        .chars()
                        .skip(from)
                        .take(to - from)
                        .collect::<String>(),
                )
            }
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{}", n),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

/// Read-only view of the model a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    pub show: &'a TvShow,
    pub episode: Option<&'a Episode>,
    pub media_file: Option<&'a MediaFile>,
    /// Articles for `showTitleSortable`; the built-in list when `None`.
    pub title_prefixes: Option<&'a [String]>,
}

impl<'a> TokenContext<'a> {
    pub fn for_show(show: &'a TvShow) -> Self {
        Self {
            show,
            episode: None,
            media_file: None,
            title_prefixes: None,
        }
    }

    pub fn with_episode(mut self, episode: &'a Episode) -> Self {
        self.episode = Some(episode);
        self
    }

    pub fn with_media_file(mut self, media_file: &'a MediaFile) -> Self {
        self.media_file = Some(media_file);
        self
    }

    pub fn with_title_prefixes(mut self, prefixes: &'a [String]) -> Self {
        self.title_prefixes = Some(prefixes);
        self
    }

    /// Show title with its leading article moved to the end.
    pub fn sortable_show_title(&self) -> String {
        match self.title_prefixes {
            Some(prefixes) => sortable_title(&self.show.title, prefixes),
            None => sortable_title(&self.show.title, DEFAULT_TITLE_PREFIXES),
        }
    }
}

/// Registry of token accessors and renderers.
///
/// Built once and only read afterwards, so a single engine can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    tokens: HashMap<&'static str, Accessor>,
    renderers: HashMap<&'static str, Renderer>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut accessors = HashMap::new();
        for (names, accessor) in tokens::builtin() {
            for name in names {
                accessors.insert(*name, accessor);
            }
        }

        Self {
            tokens: accessors,
            renderers: renderers::builtin().into_iter().collect(),
        }
    }

    /// Render a template.
    pub fn render(&self, template: &str, ctx: &TokenContext<'_>) -> String {
        self.render_with(template, ctx, |value| value.to_string())
    }

    /// Render a template, passing every non-empty token value through `clean`.
    ///
    /// Values of folder path tokens (`${parent}`) are not cleaned.
    pub fn render_with<F>(&self, template: &str, ctx: &TokenContext<'_>, clean: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let template = translate_legacy(template);
        let mut out = String::with_capacity(template.len());

        for segment in parse(&template) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => {
                    let value = self.render_token(&token, ctx);
                    if value.is_empty() {
                        continue;
                    }
                    if PATH_TOKENS.contains(&token.name) {
                        out.push_str(&value);
                    } else {
                        out.push_str(&clean(&value));
                    }
                }
            }
        }
        out
    }

    fn render_token(&self, token: &TokenExpr<'_>, ctx: &TokenContext<'_>) -> String {
        let Some(accessor) = self.tokens.get(token.name) else {
            tracing::debug!(token = token.name, "unknown token");
            return String::new();
        };

        let mut value = accessor(ctx);
        if let Some(index) = token.index {
            value = value.index(index);
        }

        match token.renderer {
            None => value.to_string(),
            Some(name) => match self.renderers.get(name) {
                Some(renderer) => renderer(&value, token.args),
                None => {
                    tracing::warn!(renderer = name, token = token.name, "unknown renderer");
                    value.to_string()
                }
            },
        }
    }

    /// Whether `name` is a known token or alias.
    pub fn has_token(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// All token names and aliases, sorted.
    pub fn token_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tokens.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// All renderer names, sorted.
    pub fn renderer_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.renderers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Token names used in `template` that the engine does not know, in
    /// order of first use.
    pub fn unknown_tokens(&self, template: &str) -> Vec<String> {
        let template = translate_legacy(template);
        let segments = parse(&template);
        let mut unknown: Vec<String> = Vec::new();
        for token in parsed_tokens(&segments) {
            if !self.has_token(token.name) && !unknown.iter().any(|u| u == token.name) {
                unknown.push(token.name.to_string());
            }
        }
        unknown
    }
}
