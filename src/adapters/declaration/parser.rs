// Declaration string parsing
// Turns `add(a, b=10)` or `def method(self, x: int, *, flag=False) -> int:` into a Signature

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::call::Value;
use crate::domain::error::SignatureError;
use crate::domain::signature::{Parameter, ParameterKind, Signature};

/// Whole declaration: optional `def`, optional name, parenthesized list, optional return annotation.
fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:def\s+)?([A-Za-z_]\w*)?\s*\((.*)\)\s*(?:->[^:]*)?:?\s*$")
            .expect("declaration regex")
    })
}

/// One parameter: name, optional `: annotation`, optional `= default`.
fn parameter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z_]\w*)\s*(?::\s*[^=]+?)?\s*(?:=\s*(.+?))?\s*$")
            .expect("parameter regex")
    })
}

/// Parse a declaration into a validated [Signature].
pub fn parse_declaration(declaration: &str) -> Result<Signature, SignatureError> {
    let invalid = || SignatureError::InvalidDeclaration(declaration.to_string());
    let caps = declaration_regex().captures(declaration).ok_or_else(invalid)?;
    let name = caps.get(1).map(|m| m.as_str().to_string());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut parameters: Vec<Parameter> = Vec::new();
    let mut keyword_only = false;
    let mut positional_only_marked = false;
    // A bare `*` must be followed by at least one parameter.
    let mut bare_star_pending = false;
    for raw in split_top_level(body) {
        let raw = raw.trim();
        match raw {
            "" => return Err(invalid()),
            "/" => {
                if positional_only_marked || keyword_only || parameters.is_empty() {
                    return Err(invalid());
                }
                positional_only_marked = true;
                for param in &mut parameters {
                    param.kind = ParameterKind::PositionalOnly;
                }
            }
            "*" => {
                if keyword_only {
                    return Err(invalid());
                }
                keyword_only = true;
                bare_star_pending = true;
            }
            _ if raw.starts_with('*') => {
                return Err(SignatureError::Unsupported(raw.to_string()));
            }
            _ => {
                let caps = parameter_regex().captures(raw).ok_or_else(invalid)?;
                let param_name = caps[1].to_string();
                let default = caps
                    .get(2)
                    .map(|raw_default| parse_default(&param_name, raw_default.as_str()))
                    .transpose()?;
                let mut param = Parameter::required(param_name);
                param.default = default;
                if keyword_only {
                    param.kind = ParameterKind::KeywordOnly;
                }
                parameters.push(param);
                bare_star_pending = false;
            }
        }
    }

    if bare_star_pending {
        return Err(invalid());
    }

    let signature = Signature::new(parameters)?;
    Ok(match name {
        Some(name) => signature.named(name),
        None => signature,
    })
}

/// Split on commas that are not nested in brackets or quotes.
fn split_top_level(body: &str) -> Vec<&str> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = &body[start..];
    // A single trailing comma is legal: `f(a, b,)`
    if !tail.trim().is_empty() || parts.is_empty() {
        parts.push(tail);
    }
    parts
}

/// Defaults accept JSON literals plus `None`, `True`, `False` and single-quoted strings.
fn parse_default(name: &str, raw: &str) -> Result<Value, SignatureError> {
    let raw = raw.trim();
    match raw {
        "None" => return Ok(Value::Null),
        "True" => return Ok(Value::Bool(true)),
        "False" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Ok(Value::String(raw[1..raw.len() - 1].to_string()));
    }
    serde_json::from_str(raw).map_err(|_| SignatureError::InvalidDefault {
        name: name.to_string(),
        raw: raw.to_string(),
    })
}
