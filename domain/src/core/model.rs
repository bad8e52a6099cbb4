//! Model value object representing an LLM model binding

use serde::{Deserialize, Serialize};

/// Identifier of the model a role talks to (Value Object)
///
/// Backends are OpenAI-compatible endpoints, so any model name the endpoint
/// accepts is valid. The binding is resolved once by the caller before a run
/// starts and then carried by each [`RoleDefinition`](crate::RoleDefinition).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Name of the model used when no profile overrides it
    pub const DEFAULT: &'static str = "gpt-4o";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::new(s.trim()))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(Model::default().as_str(), "gpt-4o");
    }

    #[test]
    fn test_parse_trims() {
        let model: Model = "  gpt-4.1-mini ".parse().unwrap();
        assert_eq!(model.to_string(), "gpt-4.1-mini");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Model::new("llama3")).unwrap();
        assert_eq!(json, "\"llama3\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::new("llama3"));
    }
}
