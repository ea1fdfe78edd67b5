use dbauth_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Action scopes what a token allows its bearer to do.
///
/// Parsing from a string only accepts the known actions. Anything else has to
/// go through [`Action::custom`], which validates the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Connect as a regular database role.
    DbConnect,
    /// Connect as the admin role.
    DbConnectAdmin,
    /// Connect as the superuser role.
    DbConnectSuperuser,
    /// An action not listed above, validated by [`Action::custom`].
    Custom(CustomAction),
}

/// Name of an action outside the known set.
///
/// Can only be built through [`Action::custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomAction(String);

impl CustomAction {
    /// The action name as signed into the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Action {
    /// Build an action outside the known set.
    ///
    /// The name must be non-empty ASCII alphanumeric. Known names are mapped
    /// to their own variant.
    pub fn custom(name: &str) -> Result<Self> {
        if let Ok(action) = name.parse() {
            return Ok(action);
        }
        if name.is_empty() {
            return Err(Error::request_invalid("action must not be empty"));
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::request_invalid(format!(
                "action {name:?} contains characters other than ascii letters and digits"
            )));
        }

        Ok(Action::Custom(CustomAction(name.to_string())))
    }

    /// The action name as signed into the token.
    pub fn as_str(&self) -> &str {
        match self {
            Action::DbConnect => "DbConnect",
            Action::DbConnectAdmin => "DbConnectAdmin",
            Action::DbConnectSuperuser => "DbConnectSuperuser",
            Action::Custom(v) => v.as_str(),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DbConnect" => Ok(Action::DbConnect),
            "DbConnectAdmin" => Ok(Action::DbConnectAdmin),
            "DbConnectSuperuser" => Ok(Action::DbConnectSuperuser),
            "" => Err(Error::request_invalid("action must not be empty")),
            v => Err(Error::request_invalid(format!(
                "unknown action {v:?}, use Action::custom for actions outside the known set"
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
