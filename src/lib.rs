#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod eligibility_proxy;
pub mod errors;
pub mod events;
pub mod fund;
pub mod payload;
pub mod payload_proxy;
pub mod refresh;
pub mod registry;
pub mod storage;
pub mod subchain_base_proxy;
pub mod types;

use errors::{ERR_INVALID_FLUSH_PERIOD, ERR_INVALID_MEMBER_BOUNDS};

/// Upper bound on the refresh period, in blocks
pub const MAX_FLUSH_IN_ROUND: u64 = 1_000_000_000;

// ============================================================
// Contract
//
// Committee ("subchain") governance core: nodes register against
// an eligibility oracle, the committee periodically re-elects
// itself through proposal / dispute / vote cycles, and an owner
// funded pool keeps rewards for the seated committee reserved.
// ============================================================

#[multiversx_sc::contract]
pub trait SubchainBase:
    config::ConfigModule
    + storage::StorageModule
    + events::EventsModule
    + fund::FundModule
    + registry::RegistryModule
    + refresh::RefreshModule
    + payload::PayloadModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        eligibility_oracle: ManagedAddress,
        selector_ref: ManagedBuffer,
        min_member: u64,
        max_member: u64,
        flush_in_round: u64,
        block_reward: BigUint,
        tx_reward: BigUint,
        payload_address: ManagedAddress,
    ) {
        require!(
            min_member >= 1 && min_member <= max_member,
            ERR_INVALID_MEMBER_BOUNDS
        );
        require!(
            flush_in_round > 0 && flush_in_round <= MAX_FLUSH_IN_ROUND,
            ERR_INVALID_FLUSH_PERIOD
        );

        self.eligibility_oracle().set(&eligibility_oracle);
        self.selector_ref().set(&selector_ref);
        self.min_member().set(min_member);
        self.max_member().set(max_member);
        self.flush_in_round().set(flush_in_round);
        self.block_reward().set(&block_reward);
        self.tx_reward().set(&tx_reward);
        self.payload_address().set(&payload_address);
        self.registration_open().set(false);

        self.cycle().set(0u64);
        self.proposal_count().set(0u64);
        self.fund_balance().set(BigUint::zero());
        self.reserved_funds().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
