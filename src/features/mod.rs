mod account;
mod operation;
mod owner;

pub use self::{account::Account, operation::Operation};
