use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::JointAccountError;
use crate::types::DataKey;

pub fn require_initialized(env: &Env) {
    if !env.storage().instance().has(&DataKey::Initialized) {
        panic_with_error!(env, JointAccountError::NotInitialized);
    }
}

/// Authenticates `caller` and rejects anyone outside the member set.
pub fn require_member(env: &Env, caller: &Address) {
    require_initialized(env);
    caller.require_auth();

    if !members(env).contains(caller) {
        panic_with_error!(env, JointAccountError::Unauthorized);
    }
}

/// A member set is valid when it is non-empty, has no duplicates and can
/// reach `threshold` approvals.
pub fn is_valid_config(members: &Vec<Address>, threshold: u32) -> bool {
    if members.is_empty() || threshold == 0 || threshold > members.len() {
        return false;
    }

    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            if members.get_unchecked(i) == members.get_unchecked(j) {
                return false;
            }
        }
    }

    true
}

pub fn members(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Members)
        .unwrap_or_else(|| panic_with_error!(env, JointAccountError::NotInitialized))
}

pub fn threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .unwrap_or_else(|| panic_with_error!(env, JointAccountError::NotInitialized))
}
