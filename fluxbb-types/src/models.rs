use serde::{Deserialize, Serialize};

use crate::enums::OptionValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub title: String,
}

impl Group {
    pub const ADMIN: i64 = 1;
    pub const MODERATOR: i64 = 2;
    pub const MEMBER: i64 = 4;

    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub language: String,
    pub style: String,
    /// Unix timestamp
    pub registered: i64,
    pub registration_ip: String,
    /// Unix timestamp
    pub last_visit: i64,
    pub group_id: i64,
}

/// A user row that has not been saved yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub language: String,
    pub style: String,
    pub registered: i64,
    pub registration_ip: String,
    pub last_visit: i64,
    pub group_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub cat_name: String,
    pub disp_position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub id: i64,
    pub forum_name: String,
    pub forum_desc: Option<String>,
    pub disp_position: i64,
    pub cat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOption {
    pub name: String,
    pub value: OptionValue,
}

impl BoardOption {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: OptionValue::Null,
        }
    }
}

/// Board details collected by the setup flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    pub title: String,
    pub description: String,
    pub default_style: String,
    pub admin_email: String,
    /// Falls back to `admin_email` when unset
    #[serde(default)]
    pub webmaster_email: Option<String>,
    /// Falls back to `admin_email` when unset
    #[serde(default)]
    pub mailing_list: Option<String>,
}

impl BoardInfo {
    pub fn webmaster_email(&self) -> &str {
        self.webmaster_email.as_deref().unwrap_or(&self.admin_email)
    }

    pub fn mailing_list(&self) -> &str {
        self.mailing_list.as_deref().unwrap_or(&self.admin_email)
    }
}

/// Credentials for the first administrator account.
///
/// The password is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub email: String,
}
