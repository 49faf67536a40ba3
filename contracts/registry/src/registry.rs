use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::errors::RegistryError;
use crate::events::AccountRegistered;
use crate::types::{AccountEntry, DataKey, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD};

/// Directory of deployed joint accounts, kept in registration order.
#[contract]
pub struct JointAccountRegistry;

#[contractimpl]
impl JointAccountRegistry {
    /// Records `account` as overseen by `manager`.
    ///
    /// Only the account itself may register, so a joint account contract
    /// calls this from its own `initialize`. An address can be registered once.
    pub fn register(env: Env, account: Address, manager: Address) {
        account.require_auth();

        let manager_key = DataKey::Manager(account.clone());
        if env.storage().persistent().has(&manager_key) {
            panic_with_error!(&env, RegistryError::AlreadyRegistered);
        }

        let index = Self::count(&env);
        let account_key = DataKey::Account(index);
        env.storage().persistent().set(&account_key, &account);
        env.storage().persistent().set(&manager_key, &manager);
        Self::bump(&env, &account_key);
        Self::bump(&env, &manager_key);

        env.storage().instance().set(&DataKey::Count, &(index + 1));
        env.storage()
            .instance()
            .extend_ttl(ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);

        AccountRegistered { account, manager }.publish(&env);
    }

    pub fn list_accounts(env: Env) -> Vec<Address> {
        let mut accounts = Vec::new(&env);
        for index in 0..Self::count(&env) {
            if let Some(account) = env.storage().persistent().get(&DataKey::Account(index)) {
                accounts.push_back(account);
            }
        }
        accounts
    }

    pub fn get_accounts(env: Env) -> Vec<AccountEntry> {
        let mut entries = Vec::new(&env);
        for account in Self::list_accounts(env.clone()) {
            let manager_key = DataKey::Manager(account.clone());
            if let Some(manager) = env.storage().persistent().get(&manager_key) {
                entries.push_back(AccountEntry { account, manager });
            }
        }
        entries
    }

    pub fn manager_of(env: Env, account: Address) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Manager(account))
    }

    pub fn is_registered(env: Env, account: Address) -> bool {
        env.storage().persistent().has(&DataKey::Manager(account))
    }

    pub fn account_count(env: Env) -> u32 {
        Self::count(&env)
    }

    fn count(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::Count).unwrap_or(0)
    }

    fn bump(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
    }
}
