//! Stock parser for highlight tag inline arguments.
//!
//! Hosts usually bring their own argument parsing; this resolver covers the
//! common `key=value` inline form so the overlay can run standalone.

use crate::resolve::ResolveOptions;
use pygopts_core::{OptValue, OptionsMap};

/// Option keys kept by safe mode.
const SAFE_KEYS: [&str; 5] = ["startinline", "hl_lines", "linenos", "encoding", "cssclass"];

/// Resolver parsing `key=value` inline arguments into an options mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgsResolver {
    /// Keep only the well-known highlighter option keys.
    pub safe: bool,
}

impl ArgsResolver {
    /// Resolver accepting any option key.
    pub fn new() -> Self {
        Self { safe: false }
    }

    /// Resolver restricted to the well-known highlighter option keys.
    pub fn safe() -> Self {
        Self { safe: true }
    }
}

impl ResolveOptions for ArgsResolver {
    fn resolve(&self, args: &str) -> OptionsMap {
        let opts = parse_args(args);
        if !self.safe {
            return opts;
        }
        opts.iter()
            .filter(|(name, _)| SAFE_KEYS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// Parse the inline argument text of a highlight tag into an options mapping.
///
/// Whitespace separates options; quoted values may contain whitespace. A bare
/// token is a switch and becomes `true`. Values coerce `true`/`false` to
/// booleans and integer literals to numbers; everything else stays text.
pub fn parse_args(args: &str) -> OptionsMap {
    let mut opts = OptionsMap::new();

    for token in tokenize(args) {
        match token.split_once('=') {
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                opts.insert(name, coerce_value(strip_quotes(value)));
            }
            None => {
                opts.insert(token, OptValue::Bool(true));
            }
        }
    }

    opts
}

/// Split arguments on whitespace, keeping quoted values intact.
fn tokenize(args: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut token_start: Option<usize> = None;
    let mut in_quotes = false;
    let mut quote_char = '"';

    for (i, c) in args.char_indices() {
        match c {
            '"' | '\'' if !in_quotes => {
                if token_start.is_none() {
                    token_start = Some(i);
                }
                in_quotes = true;
                quote_char = c;
            }
            c if c == quote_char && in_quotes => {
                in_quotes = false;
            }
            c if c.is_whitespace() && !in_quotes => {
                if let Some(start) = token_start.take() {
                    tokens.push(&args[start..i]);
                }
            }
            _ => {
                if token_start.is_none() {
                    token_start = Some(i);
                }
            }
        }
    }

    if let Some(start) = token_start {
        tokens.push(&args[start..]);
    }

    tokens
}

fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn coerce_value(value: &str) -> OptValue {
    match value {
        "true" => OptValue::Bool(true),
        "false" => OptValue::Bool(false),
        _ => match value.parse::<i64>() {
            Ok(number) => OptValue::Int(number),
            Err(_) => OptValue::Str(value.to_string()),
        },
    }
}
