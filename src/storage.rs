multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;
use crate::types::{NodeRecord, Proposal};

/// Committee and refresh-cycle state shared by the registry and the
/// refresh engine. Only the refresh engine removes seated nodes.
#[multiversx_sc::module]
pub trait StorageModule {
    fn seated_count(&self) -> u64 {
        self.nodes().len() as u64
    }

    fn require_seated(&self, address: &ManagedAddress) {
        require!(self.nodes().contains(address), ERR_UNAUTHORIZED);
    }

    /// Strict majority of the current committee: floor(n / 2) + 1
    fn majority_threshold(&self) -> u64 {
        self.seated_count() / 2 + 1
    }

    /// Primary proposal of the open cycle, unless it outlived its expiry block.
    fn live_primary(&self, block: u64) -> Option<Proposal<Self::Api>> {
        if self.primary_proposal_id().is_empty() {
            return None;
        }
        let primary = self.proposals(self.primary_proposal_id().get()).get();
        if block > primary.expiry_block {
            return None;
        }
        Some(primary)
    }

    // ── Committee ──

    #[storage_mapper("nodes")]
    fn nodes(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("nodeRecords")]
    fn node_records(&self, node: &ManagedAddress) -> SingleValueMapper<NodeRecord<Self::Api>>;

    // ── Refresh cycle ──

    /// Number of executed refreshes
    #[storage_mapper("cycle")]
    fn cycle(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Empty while the engine is Idle
    #[storage_mapper("primaryProposal")]
    fn primary_proposal_id(&self) -> SingleValueMapper<u64>;

    /// Proposal ids of the open cycle, in creation order
    #[storage_mapper("cycleProposals")]
    fn cycle_proposals(&self) -> VecMapper<u64>;

    #[storage_mapper("voteOf")]
    fn vote_of(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("cycleVoters")]
    fn cycle_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
