use super::account::{Account, AccountError, ErrorKind};
use anyhow::Context;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Adds `amount` to the balance. The amount must be positive
    Deposit,

    /// Takes `amount` from the balance.
    ///
    /// The amount must be positive and no larger than the balance, otherwise
    /// the withdrawal fails and the balance does not change
    Withdrawal,

    /// Hands the account over to `owner`. A missing `owner` is passed on to
    /// the account as an absent name and rejected there
    Rename,
}

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Invalid operation - {0}")]
    AccountError(#[from] AccountError),

    #[error("Invalid input - {0:#}")]
    InvalidInput(#[from] anyhow::Error),
}

impl OperationError {
    /// The account-level kind of the failure, if the account rejected it
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::AccountError(e) => Some(e.kind()),
            Self::InvalidInput(_) => None,
        }
    }
}

type OperationResult<T> = anyhow::Result<T, OperationError>;

/// One row of an operation script
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Operation {
    #[serde(rename = "type")]
    operation_type: OperationType,

    amount: Option<Decimal>,

    owner: Option<String>,
}

impl Operation {
    /// Applies the operation to `account` and returns the balance afterwards
    pub fn apply(&self, account: &mut Account) -> OperationResult<Decimal> {
        use OperationType::*;

        let balance = match self.operation_type {
            Deposit => account.deposit(self.amount()?)?,
            Withdrawal => account.withdraw(self.amount()?)?,
            Rename => {
                account.set_owner(self.owner.as_deref())?;
                account.balance()
            }
        };

        Ok(balance)
    }

    fn amount(&self) -> anyhow::Result<Decimal> {
        self.amount
            .with_context(|| format!("{:?} needs an amount", self.operation_type))
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }
}
