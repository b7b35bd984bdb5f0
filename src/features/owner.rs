use super::account::AccountError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest owner name accepted, in characters
pub(crate) const MAX_OWNER_LENGTH: usize = 20;

/// The account holder's full name.
///
/// Only letters `A-Z` (either case) and spaces are allowed, at most
/// [`MAX_OWNER_LENGTH`] characters, and the name must not be blank.
/// The name is kept exactly as given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Owner(String);

impl Owner {
    pub fn parse(name: Option<&str>) -> Result<Self, AccountError> {
        let name = name.ok_or(AccountError::MissingOwner)?;

        if name.trim().is_empty() {
            return Err(AccountError::BlankOwner);
        }

        let length = name.chars().count();
        if length > MAX_OWNER_LENGTH {
            return Err(AccountError::OwnerTooLong {
                length,
                max: MAX_OWNER_LENGTH,
            });
        }

        if let Some(character) = name
            .chars()
            .find(|c| !(c.is_ascii_alphabetic() || *c == ' '))
        {
            return Err(AccountError::InvalidOwnerCharacter {
                name: name.to_owned(),
                character,
            });
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Owner {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Owner {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<String> for Owner {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(value.as_str()))
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> Self {
        owner.0
    }
}
