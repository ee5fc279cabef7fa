multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{
    NodeStatus, Proposal, ProposalKind, ProposalStatus, ProposalStatusView, ProposalTally,
};

// ============================================================
// Refresh engine: Idle -> Open -> Resolved -> Executed -> Idle
//
// One Primary proposal opens a cycle; any seated node may add
// Dispute proposals until the shared deadline. Each seated node
// holds a single vote per cycle. The cycle resolves on a strict
// majority or at the deadline, and is abandoned (Expired) if
// nobody acts on it within two refresh periods.
// ============================================================

#[multiversx_sc::module]
pub trait RefreshModule:
    crate::config::ConfigModule
    + crate::storage::StorageModule
    + crate::fund::FundModule
    + crate::events::EventsModule
{
    #[endpoint(createProposal)]
    fn create_proposal(&self, candidate_set: ManagedVec<ManagedAddress>) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_seated(&caller);

        let now = self.blockchain().get_block_nonce();
        self.expire_stale_cycle(now);
        require!(
            self.primary_proposal_id().is_empty(),
            ERR_DUPLICATE_PROPOSAL
        );
        self.require_valid_candidate_set(&candidate_set);

        let flush_in_round = self.flush_in_round().get();
        let deadline_block = now.checked_add(flush_in_round);
        let expiry_block = deadline_block.and_then(|deadline| deadline.checked_add(flush_in_round));
        let (deadline_block, expiry_block) = match (deadline_block, expiry_block) {
            (Some(deadline), Some(expiry)) => (deadline, expiry),
            _ => sc_panic!(ERR_INVALID_FLUSH_PERIOD),
        };
        let proposal_id = self.store_proposal(
            caller,
            candidate_set,
            ProposalKind::Primary,
            now,
            deadline_block,
            expiry_block,
        );
        self.primary_proposal_id().set(proposal_id);

        proposal_id
    }

    #[endpoint(disputeProposal)]
    fn dispute_proposal(&self, candidate_set: ManagedVec<ManagedAddress>) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_seated(&caller);

        let now = self.blockchain().get_block_nonce();
        self.expire_stale_cycle(now);
        require!(
            !self.primary_proposal_id().is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let primary = self.proposals(self.primary_proposal_id().get()).get();
        require!(now <= primary.deadline_block, ERR_DEADLINE_PASSED);
        // a majority settles the cycle until it is executed
        require!(self.majority_proposal().is_none(), ERR_DEADLINE_PASSED);
        self.require_valid_candidate_set(&candidate_set);

        self.store_proposal(
            caller,
            candidate_set,
            ProposalKind::Dispute,
            now,
            primary.deadline_block,
            primary.expiry_block,
        )
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // `approve` moves the caller's single vote for the cycle to
    // this proposal; `!approve` withdraws it if it sits here.
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self, proposal_id: u64, approve: bool) {
        let caller = self.blockchain().get_caller();
        self.require_seated(&caller);
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let proposal = self.proposals(proposal_id).get();
        require!(
            proposal.status == ProposalStatus::Open,
            ERR_DEADLINE_PASSED
        );
        let now = self.blockchain().get_block_nonce();
        require!(now <= proposal.deadline_block, ERR_VOTING_CLOSED);
        require!(self.majority_proposal().is_none(), ERR_DEADLINE_PASSED);

        let previous = self.vote_of(&caller);
        let previous_choice = if previous.is_empty() {
            None
        } else {
            Some(previous.get())
        };

        if approve {
            if previous_choice == Some(proposal_id) {
                return;
            }
            if let Some(previous_id) = previous_choice {
                self.proposals(previous_id)
                    .update(|p| p.vote_count -= 1);
            }
            let vote_count = self.proposals(proposal_id).update(|p| {
                p.vote_count += 1;
                p.vote_count
            });
            self.vote_of(&caller).set(proposal_id);
            self.cycle_voters().insert(caller.clone());

            self.vote_event(proposal_id, &caller, vote_count);
        } else if previous_choice == Some(proposal_id) {
            let vote_count = self.proposals(proposal_id).update(|p| {
                p.vote_count -= 1;
                p.vote_count
            });
            self.vote_of(&caller).clear();

            self.vote_revoked_event(proposal_id, &caller, vote_count);
        }
    }

    // ========================================================
    // ENDPOINT: requestProposalAction
    // Anyone can settle the open cycle once it is resolvable.
    // ========================================================

    #[endpoint(requestProposalAction)]
    fn request_proposal_action(&self) {
        require!(
            !self.primary_proposal_id().is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let now = self.blockchain().get_block_nonce();
        if self.expire_stale_cycle(now) {
            return;
        }

        let winner_id = match self.resolve_winner(now) {
            Some(winner_id) => winner_id,
            None => sc_panic!(ERR_INVALID_TRANSITION),
        };
        self.execute_refresh(winner_id);
    }

    // ========================================================
    // INTERNAL: cycle bookkeeping
    // ========================================================

    fn store_proposal(
        &self,
        proposer: ManagedAddress,
        candidate_set: ManagedVec<ManagedAddress>,
        kind: ProposalKind,
        now: u64,
        deadline_block: u64,
        expiry_block: u64,
    ) -> u64 {
        let proposal_id = self.proposal_count().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            candidate_set,
            kind,
            cycle: self.cycle().get(),
            created_at_block: now,
            deadline_block,
            expiry_block,
            vote_count: 0,
            status: ProposalStatus::Open,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.cycle_proposals().push(&proposal_id);

        self.proposal_created_event(
            proposal_id,
            &proposer,
            kind == ProposalKind::Dispute,
            deadline_block,
        );

        proposal_id
    }

    /// Size within [minMember, maxMember], no repeats, and only seated
    /// nodes that have not asked to leave.
    fn require_valid_candidate_set(&self, candidate_set: &ManagedVec<ManagedAddress>) {
        let size = candidate_set.len() as u64;
        require!(
            size >= self.min_member().get() && size <= self.max_member().get(),
            ERR_INVALID_CANDIDATE_SET
        );

        let mut seen: ManagedVec<ManagedAddress> = ManagedVec::new();
        for candidate in candidate_set.iter() {
            require!(!seen.contains(&candidate), ERR_DUPLICATE_CANDIDATE);
            require!(self.nodes().contains(&candidate), ERR_NOT_ELIGIBLE);
            require!(
                !self.node_records(&candidate).get().exit_requested,
                ERR_NOT_ELIGIBLE
            );
            seen.push((*candidate).clone());
        }
    }

    /// Marks every proposal of an abandoned cycle Expired and returns the
    /// engine to Idle. Membership is left untouched.
    fn expire_stale_cycle(&self, now: u64) -> bool {
        if self.primary_proposal_id().is_empty() || self.live_primary(now).is_some() {
            return false;
        }

        let primary_id = self.primary_proposal_id().get();
        self.close_cycle(None);
        self.cycle_expired_event(primary_id, self.cycle().get());
        true
    }

    /// Settles every proposal of the cycle: the winner is Executed, the
    /// rest Discarded; without a winner they all Expire.
    fn close_cycle(&self, winner_id: Option<u64>) {
        for proposal_id in self.cycle_proposals().iter() {
            let final_status = match winner_id {
                Some(id) if id == proposal_id => ProposalStatus::Executed,
                Some(_) => ProposalStatus::Discarded,
                None => ProposalStatus::Expired,
            };
            self.proposals(proposal_id)
                .update(|p| p.status = final_status);
        }
        for voter in self.cycle_voters().iter() {
            self.vote_of(&voter).clear();
        }
        self.cycle_voters().clear();
        self.cycle_proposals().clear();
        self.primary_proposal_id().clear();
    }

    /// Strict majority wins outright. From the deadline on, the proposal
    /// with most votes wins; ties go to the earliest created, so the
    /// Primary wins by default when nobody voted.
    fn resolve_winner(&self, now: u64) -> Option<u64> {
        if let Some(majority_id) = self.majority_proposal() {
            return Some(majority_id);
        }

        let primary = self.proposals(self.primary_proposal_id().get()).get();
        if now < primary.deadline_block {
            return None;
        }
        self.leading_proposal()
    }

    fn majority_proposal(&self) -> Option<u64> {
        let threshold = self.majority_threshold();
        self.cycle_proposals()
            .iter()
            .find(|proposal_id| self.proposals(*proposal_id).get().vote_count >= threshold)
    }

    fn leading_proposal(&self) -> Option<u64> {
        // (votes, created_at_block, id)
        let mut leader: Option<(u64, u64, u64)> = None;
        for proposal_id in self.cycle_proposals().iter() {
            let proposal = self.proposals(proposal_id).get();
            let ahead = match leader {
                None => true,
                Some((votes, created_at, id)) => {
                    proposal.vote_count > votes
                        || (proposal.vote_count == votes
                            && (proposal.created_at_block, proposal_id) < (created_at, id))
                }
            };
            if ahead {
                leader = Some((proposal.vote_count, proposal.created_at_block, proposal_id));
            }
        }
        leader.map(|(_, _, id)| id)
    }

    // ========================================================
    // INTERNAL: execution
    // Applies the winning candidate set as the committee.
    // ========================================================

    fn execute_refresh(&self, winner_id: u64) {
        let winner = self.proposals(winner_id).get();
        let next_cycle = self.cycle().get() + 1;

        let mut dropped: ManagedVec<ManagedAddress> = ManagedVec::new();
        for node in self.nodes().iter() {
            if !winner.candidate_set.contains(&node) {
                dropped.push(node);
            }
        }
        for node in dropped.iter() {
            self.nodes().swap_remove(&node);
            self.node_records(&node)
                .update(|record| record.status = NodeStatus::Removed);
            self.node_removed_event(&node, next_cycle);
        }
        for node in winner.candidate_set.iter() {
            require!(self.nodes().contains(&node), ERR_NOT_ELIGIBLE);
            self.node_records(&node)
                .update(|record| record.status = NodeStatus::Active);
        }

        self.close_cycle(Some(winner_id));
        self.cycle().set(next_cycle);
        self.recompute_reservation();

        self.cycle_executed_event(winner_id, next_cycle, self.seated_count());
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(checkProposalStatus)]
    fn check_proposal_status(&self, proposal_id: u64) -> ProposalStatusView<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_nonce();
        let mut tallies = ManagedVec::new();
        let mut leading_proposal = 0u64;

        let status = if proposal.status != ProposalStatus::Open {
            tallies.push(ProposalTally {
                proposal_id,
                votes: proposal.vote_count,
            });
            proposal.status
        } else if now > proposal.expiry_block {
            ProposalStatus::Expired
        } else {
            for id in self.cycle_proposals().iter() {
                tallies.push(ProposalTally {
                    proposal_id: id,
                    votes: self.proposals(id).get().vote_count,
                });
            }
            leading_proposal = self.leading_proposal().unwrap_or_default();
            match self.resolve_winner(now) {
                Some(winner_id) if winner_id == proposal_id => ProposalStatus::Resolved,
                Some(_) => ProposalStatus::Discarded,
                None => ProposalStatus::Open,
            }
        };

        ProposalStatusView {
            proposal_id,
            status,
            cycle: proposal.cycle,
            deadline_block: proposal.deadline_block,
            expiry_block: proposal.expiry_block,
            majority_threshold: self.majority_threshold(),
            leading_proposal,
            tallies,
            reservation_at_risk: self.is_reservation_at_risk(),
        }
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    #[view(getCycleProposals)]
    fn get_cycle_proposals(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.cycle_proposals().iter() {
            result.push(proposal_id);
        }
        result
    }

    #[view(getCurrentCycle)]
    fn get_current_cycle(&self) -> u64 {
        self.cycle().get()
    }

    /// Proposal the voter backs in the open cycle, 0 if none
    #[view(getVote)]
    fn get_vote(&self, voter: ManagedAddress) -> u64 {
        self.vote_of(&voter).get()
    }
}
