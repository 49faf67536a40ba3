#![no_std]

mod access;
mod errors;
mod events;
mod joint_account;
mod registry;
mod types;

pub use crate::errors::JointAccountError;
pub use crate::joint_account::{JointAccount, JointAccountClient};
pub use crate::registry::RegistryClient;
pub use crate::types::Proposal;
