//! Raw TOML configuration data types
//!
//! These structs mirror the config file. They are deserialized directly and
//! turned into domain types (model bindings, topology, role definitions)
//! once, before a run starts.

mod profiles;
mod workflow;

pub use profiles::{FileProfileConfig, ResolvedProfile};
pub use workflow::{FileLoggingConfig, FileRoleConfig, FileWorkflowConfig};

use super::error::ConfigError;
use pecko_application::ExecutionParams;
use pecko_domain::{Model, RoleDefinition, RoleKind, Topology};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONFIG_VERSION: u32 = 1;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub version: u32,
    /// Profile used when none is given on the command line
    pub active_profile: String,
    pub profiles: BTreeMap<String, FileProfileConfig>,
    pub workflow: FileWorkflowConfig,
    pub logging: FileLoggingConfig,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub roles: BTreeMap<String, FileRoleConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            active_profile: "default".to_string(),
            profiles: BTreeMap::from([("default".to_string(), FileProfileConfig::default())]),
            workflow: FileWorkflowConfig::default(),
            logging: FileLoggingConfig::default(),
            roles: BTreeMap::new(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.version != CONFIG_VERSION {
            issues.push(ConfigIssue::warning(
                "version",
                format!(
                    "config version {} is not {}, some keys may be ignored",
                    self.version, CONFIG_VERSION
                ),
            ));
        }

        if !self.profiles.contains_key(&self.active_profile) {
            issues.push(ConfigIssue::error(
                "active_profile",
                format!("active profile '{}' is not defined", self.active_profile),
            ));
        }

        for (name, profile) in &self.profiles {
            if profile.model.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    format!("profiles.{}.model", name),
                    "model name is empty",
                ));
            }
            if profile.base_url.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    format!("profiles.{}.base_url", name),
                    "base_url is empty",
                ));
            }
        }

        if let Err(e) = self.workflow.topology.parse::<Topology>() {
            issues.push(ConfigIssue::error("workflow.topology", e.to_string()));
        }

        if self.workflow.max_steps == Some(0) {
            issues.push(ConfigIssue::error(
                "workflow.max_steps",
                "max_steps must be at least 1",
            ));
        }

        for (name, role) in &self.roles {
            if name.parse::<RoleKind>().is_err() {
                issues.push(ConfigIssue::warning(
                    format!("roles.{}", name),
                    format!("unknown role '{}' is ignored", name),
                ));
            }
            if role.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
                issues.push(ConfigIssue::error(
                    format!("roles.{}.model", name),
                    "model name is empty",
                ));
            }
        }

        issues
    }

    /// Fail on the first error-level issue
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        match self
            .validate()
            .into_iter()
            .find(|i| i.severity == Severity::Error)
        {
            Some(issue) => Err(ConfigError::Invalid(format!(
                "{}: {}",
                issue.field, issue.message
            ))),
            None => Ok(()),
        }
    }

    pub fn topology(&self) -> Result<Topology, ConfigError> {
        self.workflow
            .topology
            .parse()
            .map_err(|e: pecko_domain::DomainError| ConfigError::Invalid(e.to_string()))
    }

    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams {
            max_steps: self.workflow.max_steps,
        }
    }

    /// Resolve `name` (or the active profile) using the process environment
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<ResolvedProfile, ConfigError> {
        self.resolve_profile_with(name, |var| std::env::var(var).ok())
    }

    /// Resolve a profile, reading environment variables through `env`
    pub fn resolve_profile_with(
        &self,
        name: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedProfile, ConfigError> {
        let name = name.unwrap_or(&self.active_profile);
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
                available: self.profiles.keys().cloned().collect(),
            })?;

        let api_key = profile
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env(&profile.api_key_env).filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| ConfigError::MissingApiKey {
                profile: name.to_string(),
                env: profile.api_key_env.clone(),
            })?;

        Ok(ResolvedProfile {
            name: name.to_string(),
            model: Model::new(profile.model.trim()),
            base_url: profile.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Role definitions for `topology`, bound to `default_model` unless a
    /// `[roles.<name>]` section overrides it.
    pub fn role_definitions(&self, topology: Topology, default_model: &Model) -> Vec<RoleDefinition> {
        topology
            .roles()
            .iter()
            .map(|kind| {
                let model = self
                    .roles
                    .get(kind.as_str())
                    .and_then(|r| r.model.as_deref())
                    .map(Model::from)
                    .unwrap_or_else(|| default_model.clone());
                RoleDefinition::new(*kind, model)
            })
            .collect()
    }
}
