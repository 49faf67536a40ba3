use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum JointAccountError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfiguration = 3,
    Unauthorized = 4,
    InvalidAmount = 5,
    InsufficientFunds = 6,
    NoActiveProposal = 7,
    DuplicateVote = 8,
    QuorumNotMet = 9,
    TransferFailed = 10,
}
