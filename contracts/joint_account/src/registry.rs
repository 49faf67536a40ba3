use soroban_sdk::{contractclient, Address, Env};

/// The part of the joint account registry an account talks to.
#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn register(env: Env, account: Address, manager: Address);
}
