use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// `Count` lives in instance storage. `Account` and `Manager` entries are
/// persistent so the instance entry does not grow with the registry.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Count,
    Account(u32),
    Manager(Address),
}

/// A registered joint account and the manager that oversees it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountEntry {
    pub account: Address,
    pub manager: Address,
}
