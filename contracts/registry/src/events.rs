use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountRegistered {
    #[topic]
    pub account: Address,
    pub manager: Address,
}
