multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Node Status: membership lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum NodeStatus {
    /// Registered and seated. Votes and proposes as a provisional member
    /// until an executed refresh includes it.
    Candidate,
    /// Confirmed by an executed refresh.
    Active,
    /// Dropped by a refresh, or left before being confirmed.
    Removed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct NodeRecord<M: ManagedTypeApi> {
    pub identity: ManagedAddress<M>,
    pub status: NodeStatus,
    pub joined_at_cycle: u64,
    /// Set by an Active node asking to leave; honored by the next refresh.
    pub exit_requested: bool,
}

// ============================================================
// Proposal: candidate committee for the next cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalKind {
    Primary,
    Dispute,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Cycle running. Members can vote until the deadline.
    Open,
    /// Winner of a cycle that can be acted upon. Only ever reported by
    /// `checkProposalStatus`, execution moves straight to Executed.
    Resolved,
    /// Candidate set applied as the new committee. Terminal state.
    Executed,
    /// Not acted upon within twice the refresh period. Terminal state.
    Expired,
    /// Lost to another proposal of the same cycle. Terminal state.
    Discarded,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub candidate_set: ManagedVec<M, ManagedAddress<M>>,
    pub kind: ProposalKind,
    pub cycle: u64,
    pub created_at_block: u64,
    /// Shared by every proposal of the cycle (Primary creation + flushInRound)
    pub deadline_block: u64,
    /// Past this block the cycle is abandoned (Primary creation + 2 * flushInRound)
    pub expiry_block: u64,
    pub vote_count: u64,
    pub status: ProposalStatus,
}

#[type_abi]
#[derive(
    ManagedVecItem, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug,
)]
pub struct ProposalTally {
    pub proposal_id: u64,
    pub votes: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalStatusView<M: ManagedTypeApi> {
    pub proposal_id: u64,
    pub status: ProposalStatus,
    pub cycle: u64,
    pub deadline_block: u64,
    pub expiry_block: u64,
    pub majority_threshold: u64,
    /// Proposal that would win if the cycle were resolved now (0 when the proposal is closed or the cycle has no proposals)
    pub leading_proposal: u64,
    pub tallies: ManagedVec<M, ProposalTally>,
    pub reservation_at_risk: bool,
}

// ============================================================
// Configuration & fund views
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProtocolConfig<M: ManagedTypeApi> {
    pub eligibility_oracle: ManagedAddress<M>,
    pub selector_ref: ManagedBuffer<M>,
    pub min_member: u64,
    pub max_member: u64,
    pub flush_in_round: u64,
    pub block_reward: BigUint<M>,
    pub tx_reward: BigUint<M>,
    pub payload_address: ManagedAddress<M>,
    pub registration_open: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct FundAccount<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub balance: BigUint<M>,
    pub reserved: BigUint<M>,
    /// Projected rewards the balance cannot cover; zero when fully reserved
    pub shortfall: BigUint<M>,
}
