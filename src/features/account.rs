use super::owner::Owner;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Broad class of an [`AccountError`], for callers that only care how a call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required value was absent
    MissingValue,
    /// A value was present but not acceptable
    InvalidFormat,
    /// An amount fell outside the accepted range
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Owner name is missing")]
    MissingOwner,

    #[error("Owner name cannot be empty or whitespace")]
    BlankOwner,

    #[error("Owner name is {length} characters long, at most {max} are allowed")]
    OwnerTooLong { length: usize, max: usize },

    #[error("Owner name {name:?} contains {character:?}. Only letters and spaces are allowed")]
    InvalidOwnerCharacter { name: String, character: char },

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Amount {0} cannot be applied to the balance without losing precision")]
    AmountTooLarge(Decimal),

    #[error(
        "You cannot withdraw {requested}. It is more than {available} available in your account"
    )]
    InsufficientFund {
        requested: Decimal,
        available: Decimal,
    },
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        use AccountError::*;

        match self {
            MissingOwner => ErrorKind::MissingValue,
            BlankOwner | OwnerTooLong { .. } | InvalidOwnerCharacter { .. } => {
                ErrorKind::InvalidFormat
            }
            InsufficientFund { .. } => ErrorKind::InvalidFormat,
            NonPositiveAmount(_) | AmountTooLarge(_) => ErrorKind::OutOfRange,
        }
    }
}

pub type AccountResult<T> = anyhow::Result<T, AccountError>;

/// A single customer's bank account
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Account {
    owner: Owner,

    /// The amount of money currently in the account. Never negative
    #[serde(serialize_with = "round_serialize")]
    balance: Decimal,
}

fn round_serialize<S>(amount: &Decimal, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Serialize to 4 decimal
    let rounded_amount = amount.round_dp(4).to_string();
    s.serialize_str(rounded_amount.as_str())
}

impl Account {
    /// Opens an account for `owner` with a balance of 0
    pub fn new<'a>(owner: impl Into<Option<&'a str>>) -> AccountResult<Self> {
        Ok(Self {
            owner: Owner::parse(owner.into())?,
            balance: dec!(0),
        })
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replaces the owner name. The current owner is kept if `name` is rejected.
    pub fn set_owner<'a>(&mut self, name: impl Into<Option<&'a str>>) -> AccountResult<&Owner> {
        self.owner = Owner::parse(name.into())?;
        Ok(&self.owner)
    }

    /// Adds a positive `amount` and returns the new balance
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        ensure_positive(amount)?;

        let balance = self
            .balance
            .checked_add(amount)
            .filter(|balance| *balance - self.balance == amount)
            .ok_or(AccountError::AmountTooLarge(amount))?;

        self.balance = balance;
        Ok(self.balance)
    }

    /// Takes a positive `amount`, no larger than the balance, and returns the new balance
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        ensure_positive(amount)?;

        if self.balance < amount {
            return Err(AccountError::InsufficientFund {
                requested: amount,
                available: self.balance,
            });
        }

        let balance = self
            .balance
            .checked_sub(amount)
            .filter(|balance| self.balance - *balance == amount)
            .ok_or(AccountError::AmountTooLarge(amount))?;

        self.balance = balance;
        Ok(self.balance)
    }
}

fn ensure_positive(amount: Decimal) -> AccountResult<()> {
    if amount <= dec!(0) {
        return Err(AccountError::NonPositiveAmount(amount));
    }
    Ok(())
}
