#![no_std]

mod errors;
mod events;
mod registry;
mod types;

pub use crate::errors::RegistryError;
pub use crate::registry::{JointAccountRegistry, JointAccountRegistryClient};
pub use crate::types::AccountEntry;
