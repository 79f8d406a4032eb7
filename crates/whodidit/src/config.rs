use serde::Deserialize;
use whodidit_core::{Error, Result};

/// Settings for one policy attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Session key holding the authenticated user
    pub auth_session: String,

    /// Name of the actor model
    pub user_model: String,

    pub created_by_field: String,

    pub modified_by_field: String,

    /// Register the `Creator` / `Modifier` relations at attach time
    pub auto_bind: bool,
}

/// Caller-supplied settings merged over [`Config::default`].
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub auth_session: Option<String>,
    pub user_model: Option<String>,
    pub created_by_field: Option<String>,
    pub modified_by_field: Option<String>,
    pub auto_bind: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_session: "Auth".to_string(),
            user_model: "User".to_string(),
            created_by_field: "created_by".to_string(),
            modified_by_field: "modified_by".to_string(),
            auto_bind: true,
        }
    }
}

impl Config {
    pub fn merge(mut self, overrides: Overrides) -> Self {
        if let Some(auth_session) = overrides.auth_session {
            self.auth_session = auth_session;
        }

        if let Some(user_model) = overrides.user_model {
            self.user_model = user_model;
        }

        if let Some(created_by_field) = overrides.created_by_field {
            self.created_by_field = created_by_field;
        }

        if let Some(modified_by_field) = overrides.modified_by_field {
            self.modified_by_field = modified_by_field;
        }

        if let Some(auto_bind) = overrides.auto_bind {
            self.auto_bind = auto_bind;
        }

        self
    }

    /// Session path of the acting user's id.
    pub fn actor_path(&self) -> String {
        format!("{}.{}.id", self.auth_session, self.user_model)
    }
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates overrides from a JSON object.
    pub fn from_json(src: &str) -> Result<Self> {
        let overrides: Overrides = serde_json::from_str(src)
            .map_err(|err| Error::from(err).context(whodidit_core::err!("parsing overrides")))?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Rejects empty session keys and field names.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("auth_session", &self.auth_session),
            ("user_model", &self.user_model),
            ("created_by_field", &self.created_by_field),
            ("modified_by_field", &self.modified_by_field),
        ];

        for (key, value) in named {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(Error::invalid_config(format!("`{key}` must not be empty")));
                }
            }
        }

        Ok(())
    }

    pub fn auth_session(mut self, value: impl Into<String>) -> Self {
        self.auth_session = Some(value.into());
        self
    }

    pub fn user_model(mut self, value: impl Into<String>) -> Self {
        self.user_model = Some(value.into());
        self
    }

    pub fn created_by_field(mut self, value: impl Into<String>) -> Self {
        self.created_by_field = Some(value.into());
        self
    }

    pub fn modified_by_field(mut self, value: impl Into<String>) -> Self {
        self.modified_by_field = Some(value.into());
        self
    }

    pub fn auto_bind(mut self, value: bool) -> Self {
        self.auto_bind = Some(value);
        self
    }
}
