//! Portfolio entity and the user reference it belongs to
//!
//! Both types mirror the JSON the backend speaks (camelCase field names).
//! Every text field defaults to empty so a partially populated payload still
//! renders.

use serde::{Deserialize, Serialize};

/// Owner of a portfolio. Managed elsewhere; only the id and login are needed here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub login: String,
}

impl User {
    pub fn new(id: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
        }
    }

    /// Compare against a raw selector value (ids are matched as strings).
    pub fn matches_id(&self, raw: &str) -> bool {
        self.id == raw.trim()
    }
}

/// A Portfolio record.
///
/// `id` is `None` until the backend persists the record and assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Portfolio {
    /// Create an unsaved portfolio (no identifier yet)
    pub fn new(
        project_name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            project_name: project_name.into(),
            description: description.into(),
            image_url: image_url.into(),
            link: link.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Owner login, empty when no owner is attached
    pub fn user_login(&self) -> &str {
        self.user.as_ref().map(|u| u.login.as_str()).unwrap_or("")
    }

    /// Identifier rendered for display, empty for unsaved records
    pub fn id_label(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    /// Copy of this record without its identifier, used as a create body
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}
