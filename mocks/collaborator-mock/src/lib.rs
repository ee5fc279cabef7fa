#![no_std]

multiversx_sc::imports!();

pub mod collaborator_mock_proxy;

/// Stands in for both external collaborators of the committee contract in
/// scenario tests: the eligibility oracle (`matches`) and the business logic
/// payload (`run`).
#[multiversx_sc::contract]
pub trait CollaboratorMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Makes `matches` reject the identity from now on.
    #[endpoint(deny)]
    fn deny(&self, identity: ManagedAddress) {
        self.denied().insert(identity);
    }

    #[view(matches)]
    fn matches(&self, identity: ManagedAddress, selector_ref: ManagedBuffer) -> bool {
        !selector_ref.is_empty() && !self.denied().contains(&identity)
    }

    /// Echoes its inputs.
    #[endpoint(run)]
    fn run(&self, inputs: MultiValueEncoded<ManagedBuffer>) -> MultiValueEncoded<ManagedBuffer> {
        self.run_count().update(|count| *count += 1);
        inputs
    }

    #[view(getRunCount)]
    #[storage_mapper("runCount")]
    fn run_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("denied")]
    fn denied(&self) -> UnorderedSetMapper<ManagedAddress>;
}
