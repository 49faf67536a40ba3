use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, Vec};

use crate::access;
use crate::errors::JointAccountError;
use crate::events::{MotionExecuted, ProposalApproved, ProposalCreated};
use crate::registry::RegistryClient;
use crate::types::{DataKey, Proposal};

/// Funds held jointly by a fixed set of members.
///
/// At most one proposal is pending at a time. Any member may replace it, and it
/// is paid out once `threshold` members have approved it.
#[contract]
pub struct JointAccount;

#[contractimpl]
impl JointAccount {
    /// Sets the member set and threshold, then registers this account with
    /// `registry` under `creator`.
    pub fn initialize(
        env: Env,
        creator: Address,
        registry: Address,
        threshold: u32,
        members: Vec<Address>,
    ) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, JointAccountError::AlreadyInitialized);
        }

        creator.require_auth();

        if !access::is_valid_config(&members, threshold) {
            log!(
                &env,
                "rejected configuration: threshold {} for {} members",
                threshold,
                members.len()
            );
            panic_with_error!(&env, JointAccountError::InvalidConfiguration);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Registry, &registry);
        env.storage().instance().set(&DataKey::Creator, &creator);
        env.storage().instance().set(&DataKey::Members, &members);
        env.storage().instance().set(&DataKey::Threshold, &threshold);
        env.storage().instance().set(&DataKey::Nonce, &0u64);

        RegistryClient::new(&env, &registry)
            .register(&env.current_contract_address(), &creator);
    }

    /// Replaces the pending proposal, dropping every vote cast on it.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        amount: i128,
        destination: Address,
        token: Address,
    ) {
        access::require_member(&env, &caller);

        if amount <= 0 {
            panic_with_error!(&env, JointAccountError::InvalidAmount);
        }

        if Self::token_balance(&env, &token) < amount {
            panic_with_error!(&env, JointAccountError::InsufficientFunds);
        }

        let proposal = Proposal {
            amount,
            destination: destination.clone(),
            token: token.clone(),
        };
        env.storage().instance().set(&DataKey::Proposal, &proposal);
        env.storage().instance().set(&DataKey::Votes, &Vec::<Address>::new(&env));

        ProposalCreated {
            proposer: caller,
            amount,
            destination,
            token,
        }
        .publish(&env);
    }

    pub fn approve(env: Env, caller: Address) {
        access::require_member(&env, &caller);
        Self::active_proposal(&env);

        let mut votes = Self::current_votes(&env);
        if votes.contains(&caller) {
            panic_with_error!(&env, JointAccountError::DuplicateVote);
        }

        votes.push_back(caller.clone());
        env.storage().instance().set(&DataKey::Votes, &votes);

        ProposalApproved {
            member: caller,
            votes: votes.len(),
        }
        .publish(&env);
    }

    /// Pays out the pending proposal once it has reached the threshold.
    ///
    /// A failed transfer aborts the whole call, so the proposal and its votes
    /// remain in place and execution can be retried.
    pub fn execute_motion(env: Env, caller: Address) {
        access::require_member(&env, &caller);
        let proposal = Self::active_proposal(&env);

        let threshold = access::threshold(&env);
        if Self::current_votes(&env).len() < threshold {
            panic_with_error!(&env, JointAccountError::QuorumNotMet);
        }

        Self::execute_token_transfer(&env, &proposal);

        env.storage().instance().remove(&DataKey::Proposal);
        env.storage().instance().remove(&DataKey::Votes);

        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

        log!(
            &env,
            "motion executed: {} sent to {}",
            proposal.amount,
            proposal.destination
        );

        MotionExecuted {
            executor: caller,
            amount: proposal.amount,
            destination: proposal.destination,
            token: proposal.token,
        }
        .publish(&env);
    }

    pub fn get_proposal(env: Env) -> Option<Proposal> {
        access::require_initialized(&env);
        env.storage().instance().get(&DataKey::Proposal)
    }

    pub fn positive_vote_count(env: Env) -> u32 {
        access::require_initialized(&env);
        Self::current_votes(&env).len()
    }

    pub fn votes(env: Env) -> Vec<Address> {
        access::require_initialized(&env);
        Self::current_votes(&env)
    }

    pub fn has_voted(env: Env, member: Address) -> bool {
        access::require_initialized(&env);
        Self::current_votes(&env).contains(&member)
    }

    pub fn members(env: Env) -> Vec<Address> {
        access::require_initialized(&env);
        access::members(&env)
    }

    pub fn is_member(env: Env, address: Address) -> bool {
        access::require_initialized(&env);
        access::members(&env).contains(&address)
    }

    pub fn threshold(env: Env) -> u32 {
        access::require_initialized(&env);
        access::threshold(&env)
    }

    /// Number of motions executed so far.
    pub fn nonce(env: Env) -> u64 {
        access::require_initialized(&env);
        env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
    }

    pub fn registry(env: Env) -> Address {
        Self::stored_address(&env, &DataKey::Registry)
    }

    pub fn creator(env: Env) -> Address {
        Self::stored_address(&env, &DataKey::Creator)
    }

    pub fn balance(env: Env, token: Address) -> i128 {
        Self::token_balance(&env, &token)
    }

    fn active_proposal(env: &Env) -> Proposal {
        env.storage()
            .instance()
            .get(&DataKey::Proposal)
            .unwrap_or_else(|| panic_with_error!(env, JointAccountError::NoActiveProposal))
    }

    // Votes of the current proposal; empty when none is pending.
    fn current_votes(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Votes)
            .unwrap_or(Vec::new(env))
    }

    fn stored_address(env: &Env, key: &DataKey) -> Address {
        env.storage()
            .instance()
            .get(key)
            .unwrap_or_else(|| panic_with_error!(env, JointAccountError::NotInitialized))
    }

    fn token_balance(env: &Env, token: &Address) -> i128 {
        token::Client::new(env, token).balance(&env.current_contract_address())
    }

    fn execute_token_transfer(env: &Env, proposal: &Proposal) {
        let token_client = token::Client::new(env, &proposal.token);
        let account = env.current_contract_address();

        let transferred = matches!(
            token_client.try_transfer(&account, &proposal.destination, &proposal.amount),
            Ok(Ok(()))
        );
        if !transferred {
            log!(
                env,
                "transfer of {} to {} failed",
                proposal.amount,
                proposal.destination
            );
            panic_with_error!(env, JointAccountError::TransferFailed);
        }
    }
}
