multiversx_sc::imports!();

use crate::eligibility_proxy;
use crate::errors::*;
use crate::types::{NodeRecord, NodeStatus};

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::config::ConfigModule
    + crate::storage::StorageModule
    + crate::fund::FundModule
    + crate::events::EventsModule
{
    #[only_owner]
    #[endpoint(registerOpen)]
    fn register_open(&self) {
        self.registration_open().set(true);
        self.registration_status_event(true);
    }

    #[only_owner]
    #[endpoint(registerClose)]
    fn register_close(&self) {
        self.registration_open().set(false);
        self.registration_status_event(false);
    }

    // ========================================================
    // ENDPOINT: registerAsNode
    // Seats the caller as a Candidate. Candidates vote and propose
    // right away; the next executed refresh confirms or drops them.
    // ========================================================

    #[endpoint(registerAsNode)]
    fn register_as_node(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.registration_open().get(), ERR_REGISTRATION_CLOSED);
        require!(!self.nodes().contains(&caller), ERR_ALREADY_REGISTERED);
        require!(
            self.seated_count() < self.max_member().get(),
            ERR_CAPACITY_EXCEEDED
        );
        require!(self.is_eligible(&caller), ERR_NOT_ELIGIBLE);

        let cycle = self.cycle().get();
        let record = NodeRecord {
            identity: caller.clone(),
            status: NodeStatus::Candidate,
            joined_at_cycle: cycle,
            exit_requested: false,
        };
        self.node_records(&caller).set(&record);
        self.nodes().insert(caller.clone());
        self.recompute_reservation();

        self.node_registered_event(&caller, cycle);
    }

    // ========================================================
    // ENDPOINT: leaveCommittee
    // Only between cycles. Candidates are unseated at once; Active
    // nodes flag an exit that the next refresh has to honor.
    // ========================================================

    #[endpoint(leaveCommittee)]
    fn leave_committee(&self) {
        let caller = self.blockchain().get_caller();
        self.require_seated(&caller);

        let now = self.blockchain().get_block_nonce();
        require!(self.live_primary(now).is_none(), ERR_CYCLE_IN_PROGRESS);

        let cycle = self.cycle().get();
        let mut record = self.node_records(&caller).get();
        match record.status {
            NodeStatus::Candidate => {
                record.status = NodeStatus::Removed;
                self.node_records(&caller).set(&record);
                self.nodes().swap_remove(&caller);
                self.recompute_reservation();
                self.node_left_event(&caller, cycle);
            }
            NodeStatus::Active => {
                require!(!record.exit_requested, ERR_EXIT_PENDING);
                record.exit_requested = true;
                self.node_records(&caller).set(&record);
                self.node_exit_requested_event(&caller, cycle);
            }
            NodeStatus::Removed => sc_panic!(ERR_UNAUTHORIZED),
        }
    }

    fn is_eligible(&self, identity: &ManagedAddress) -> bool {
        let oracle_addr = self.eligibility_oracle().get();
        self.tx()
            .to(&oracle_addr)
            .typed(eligibility_proxy::EligibilityOracleProxy)
            .matches(identity.clone(), self.selector_ref().get())
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(nodeList)]
    fn node_list(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for node in self.nodes().iter() {
            result.push(node);
        }
        result
    }

    #[view(nodeCount)]
    fn node_count(&self) -> u64 {
        self.seated_count()
    }

    #[view(getNodeRecord)]
    fn get_node_record(&self, node: ManagedAddress) -> NodeRecord<Self::Api> {
        require!(!self.node_records(&node).is_empty(), ERR_UNKNOWN_NODE);
        self.node_records(&node).get()
    }

    /// Blocks until the open cycle can be acted upon, or a full refresh
    /// period when no cycle is open. Defaults to the current block.
    #[view(estimateFlushWait)]
    fn estimate_flush_wait(&self, at_block: OptionalValue<u64>) -> u64 {
        let block = match at_block {
            OptionalValue::Some(block) => block,
            OptionalValue::None => self.blockchain().get_block_nonce(),
        };

        match self.live_primary(block) {
            Some(primary) => primary.deadline_block.saturating_sub(block),
            None => self.flush_in_round().get(),
        }
    }
}
