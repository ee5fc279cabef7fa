multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Registry ──

    #[event("registrationStatus")]
    fn registration_status_event(&self, #[indexed] open: bool);

    #[event("nodeRegistered")]
    fn node_registered_event(&self, #[indexed] node: &ManagedAddress, cycle: u64);

    #[event("nodeLeft")]
    fn node_left_event(&self, #[indexed] node: &ManagedAddress, cycle: u64);

    #[event("nodeExitRequested")]
    fn node_exit_requested_event(&self, #[indexed] node: &ManagedAddress, cycle: u64);

    #[event("nodeRemoved")]
    fn node_removed_event(&self, #[indexed] node: &ManagedAddress, cycle: u64);

    // ── Refresh ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] is_dispute: bool,
        deadline_block: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_count: u64,
    );

    #[event("voteRevoked")]
    fn vote_revoked_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_count: u64,
    );

    #[event("cycleExecuted")]
    fn cycle_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] cycle: u64,
        node_count: u64,
    );

    #[event("cycleExpired")]
    fn cycle_expired_event(&self, #[indexed] primary_proposal_id: u64, #[indexed] cycle: u64);

    // ── Fund ──

    #[event("fundAdded")]
    fn fund_added_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("fundWithdrawn")]
    fn fund_withdrawn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("rewardsUpdated")]
    fn rewards_updated_event(&self, #[indexed] block_reward: &BigUint, tx_reward: &BigUint);

    #[event("reservationUpdated")]
    fn reservation_updated_event(&self, #[indexed] balance: &BigUint, reserved: &BigUint);

    #[event("reservationShortfall")]
    fn reservation_shortfall_event(&self, #[indexed] required: &BigUint, shortfall: &BigUint);

    // ── Payload ──

    #[event("payloadExecuted")]
    fn payload_executed_event(&self, #[indexed] caller: &ManagedAddress, cycle: u64);
}
