use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Registry,
    Creator,
    Members,
    Threshold,
    Nonce,
    Proposal,
    Votes,
}

/// The single pending spend of a joint account.
///
/// `token` is the address of the token contract whose balance is spent.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub amount: i128,
    pub destination: Address,
    pub token: Address,
}
