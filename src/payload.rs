multiversx_sc::imports!();

use crate::errors::{ERR_COMMITTEE_NOT_FORMED, ERR_UNAUTHORIZED};
use crate::payload_proxy;
use crate::types::NodeStatus;

/// Execution capability of a seated committee. The payload contract is
/// opaque: inputs are forwarded and outputs returned as they are.
#[multiversx_sc::module]
pub trait PayloadModule:
    crate::config::ConfigModule + crate::storage::StorageModule + crate::events::EventsModule
{
    #[endpoint(runPayload)]
    fn run_payload(
        &self,
        inputs: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<ManagedBuffer> {
        let caller = self.blockchain().get_caller();
        self.require_seated(&caller);
        require!(
            self.node_records(&caller).get().status == NodeStatus::Active,
            ERR_UNAUTHORIZED
        );
        require!(
            self.seated_count() >= self.min_member().get(),
            ERR_COMMITTEE_NOT_FORMED
        );

        let payload_addr = self.payload_address().get();
        let outputs: MultiValueEncoded<ManagedBuffer> = self
            .tx()
            .to(&payload_addr)
            .typed(payload_proxy::PayloadProxy)
            .run(inputs)
            .returns(ReturnsResult)
            .sync_call();

        self.payload_executed_event(&caller, self.cycle().get());
        outputs
    }
}
