use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub proposer: Address,
    pub amount: i128,
    pub destination: Address,
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalApproved {
    #[topic]
    pub member: Address,
    pub votes: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MotionExecuted {
    #[topic]
    pub executor: Address,
    pub amount: i128,
    pub destination: Address,
    pub token: Address,
}
