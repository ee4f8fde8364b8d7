//! Tokenized content lines.

use super::Parameter;

/// One logical content line, split into key, parameters, and raw value.
///
/// Produced by the lexer and consumed immediately by the calendar state
/// machine; never stored in the output model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Property key (normalized to uppercase).
    pub key: String,
    /// Raw value with `\n` escape sequences decoded.
    pub value: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
}

impl Token {
    /// Creates a parameter-less token.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into().to_ascii_uppercase(),
            value: value.into(),
            params: Vec::new(),
        }
    }

    /// Creates a token with parameters.
    #[must_use]
    pub fn with_params(
        key: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into().to_ascii_uppercase(),
            value: value.into(),
            params,
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).map(|p| p.value.as_str())
    }

    /// Returns whether this token has a parameter with the given name.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.param_value("TZID")
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.param_value("VALUE")
    }
}
