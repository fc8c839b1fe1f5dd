//! Declared parameter list of a mocked callable.
//!
//! A [Signature] is built once per mock and never changes: parameter order defines how
//! positional arguments bind to names, and declared defaults are what normalization fills
//! in for omitted parameters.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::call::{Kwargs, Value};
use crate::domain::error::{BindingError, SignatureError};

/// How a parameter may be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    PositionalOnly,
    #[default]
    PositionalOrKeyword,
    KeywordOnly,
}

impl ParameterKind {
    fn rank(self) -> u8 {
        match self {
            ParameterKind::PositionalOnly => 0,
            ParameterKind::PositionalOrKeyword => 1,
            ParameterKind::KeywordOnly => 2,
        }
    }

    pub fn accepts_positional(self) -> bool {
        self != ParameterKind::KeywordOnly
    }

    pub fn accepts_keyword(self) -> bool {
        self != ParameterKind::PositionalOnly
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub kind: ParameterKind,
    /// `None` means the parameter is required. `Some(Value::Null)` is a real `null` default.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Parameter {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::PositionalOrKeyword,
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::PositionalOrKeyword,
            default: Some(default.into()),
        }
    }

    pub fn keyword_only(mut self) -> Self {
        self.kind = ParameterKind::KeywordOnly;
        self
    }

    pub fn positional_only(mut self) -> Self {
        self.kind = ParameterKind::PositionalOnly;
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Ordered parameter list of the target callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl Signature {
    /// Validate and build a signature.
    ///
    /// Names must be unique, kinds must appear in declaration order (positional-only,
    /// positional-or-keyword, keyword-only), and a required positional parameter may not
    /// follow one with a default.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, SignatureError> {
        let signature = Self {
            name: None,
            parameters,
        };
        signature.validate()?;
        Ok(signature)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Deserialize from JSON and validate.
    pub fn from_json_str(json: &str) -> Result<Self, SignatureError> {
        let signature: Signature = serde_json::from_str(json)
            .map_err(|e| SignatureError::InvalidDeclaration(e.to_string()))?;
        signature.validate()?;
        Ok(signature)
    }

    fn validate(&self) -> Result<(), SignatureError> {
        let mut seen = HashSet::new();
        let mut last_rank = 0;
        let mut saw_positional_default = false;
        for param in &self.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(SignatureError::DuplicateParameter(param.name.clone()));
            }
            let rank = param.kind.rank();
            if rank < last_rank {
                return Err(SignatureError::ParameterOrder(param.name.clone()));
            }
            last_rank = rank;
            if param.kind.accepts_positional() {
                if param.is_required() && saw_positional_default {
                    return Err(SignatureError::RequiredAfterDefault(param.name.clone()));
                }
                saw_positional_default |= !param.is_required();
            }
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("function")
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters that can receive a positional argument, in declaration order.
    fn positional(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.kind.accepts_positional())
    }

    /// True if the first declared parameter carries one of the receiver names (`self`, `this`).
    ///
    /// The receiver is always supplied positionally, so a keyword-only first parameter never
    /// counts.
    pub fn has_receiver<I>(&self, receiver_names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(first) = self.parameters.first() else {
            return false;
        };
        if !first.kind.accepts_positional() {
            return false;
        }
        receiver_names
            .into_iter()
            .any(|r| r.as_ref() == first.name)
    }

    /// Check that the call could be bound to the declared parameters.
    pub fn bind(&self, args: &[Value], kwargs: &Kwargs) -> Result<(), BindingError> {
        self.check_bindable(args.len(), kwargs.keys(), true)
    }

    /// Like [Signature::bind] but tolerates unsupplied required parameters.
    ///
    /// Argument patterns only constrain the parameters they mention.
    pub fn bind_partial<'a>(
        &self,
        positional: usize,
        keywords: impl IntoIterator<Item = &'a String>,
    ) -> Result<(), BindingError> {
        self.check_bindable(positional, keywords, false)
    }

    fn check_bindable<'a>(
        &self,
        given: usize,
        keywords: impl IntoIterator<Item = &'a String>,
        require_all: bool,
    ) -> Result<(), BindingError> {
        let function = self.display_name().to_string();
        let positional: Vec<&Parameter> = self.positional().collect();
        if given > positional.len() {
            return Err(BindingError::TooManyPositional {
                function,
                max: positional.len(),
                given,
            });
        }

        let mut bound: HashSet<&str> = positional[..given]
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        for name in keywords {
            let Some(param) = self.parameter(name) else {
                return Err(BindingError::UnexpectedKeyword {
                    function,
                    name: name.clone(),
                });
            };
            if !param.kind.accepts_keyword() {
                return Err(BindingError::PositionalOnlyAsKeyword {
                    function,
                    name: name.clone(),
                });
            }
            if !bound.insert(param.name.as_str()) {
                return Err(BindingError::MultipleValues {
                    function,
                    name: name.clone(),
                });
            }
        }

        if require_all
            && let Some(missing) = self
                .parameters
                .iter()
                .find(|p| p.is_required() && !bound.contains(p.name.as_str()))
        {
            return Err(BindingError::MissingArgument {
                function,
                name: missing.name.clone(),
            });
        }
        Ok(())
    }

    /// Normalize a call into a keyword mapping.
    ///
    /// Positional values are assigned to parameters by position, supplied keywords are
    /// copied, then every parameter still unsupplied gets its declared default. A parameter
    /// supplied by keyword is never default-filled, wherever it sits in the declaration.
    /// Required parameters left unsupplied stay absent.
    pub fn fill_up_arg_list(&self, args: &[Value], kwargs: &Kwargs) -> Kwargs {
        self.normalize(args, kwargs, Value::clone)
    }

    /// [Signature::fill_up_arg_list] over any argument representation; `from_default`
    /// converts a declared default into that representation.
    pub fn normalize<T: Clone>(
        &self,
        args: &[T],
        kwargs: &BTreeMap<String, T>,
        from_default: impl Fn(&Value) -> T,
    ) -> BTreeMap<String, T> {
        let mut filled: BTreeMap<String, T> = self
            .positional()
            .zip(args)
            .map(|(param, value)| (param.name.clone(), value.clone()))
            .collect();

        for (name, value) in kwargs {
            filled
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        for param in &self.parameters {
            if filled.contains_key(&param.name) {
                continue;
            }
            if let Some(default) = &param.default {
                filled.insert(param.name.clone(), from_default(default));
            }
        }
        filled
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.parameters.len() + 2);
        let mut prev: Option<ParameterKind> = None;
        for param in &self.parameters {
            if param.kind == ParameterKind::KeywordOnly && prev != Some(ParameterKind::KeywordOnly) {
                if prev == Some(ParameterKind::PositionalOnly) {
                    parts.push("/".to_string());
                }
                parts.push("*".to_string());
            } else if prev == Some(ParameterKind::PositionalOnly)
                && param.kind != ParameterKind::PositionalOnly
            {
                parts.push("/".to_string());
            }
            match &param.default {
                Some(default) => parts.push(format!("{}={}", param.name, default)),
                None => parts.push(param.name.clone()),
            }
            prev = Some(param.kind);
        }
        if prev == Some(ParameterKind::PositionalOnly) {
            parts.push("/".to_string());
        }
        write!(f, "{}({})", self.display_name(), parts.join(", "))
    }
}
