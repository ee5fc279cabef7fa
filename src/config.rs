multiversx_sc::imports!();

use crate::types::ProtocolConfig;

/// Deployment parameters of the committee. Only registration toggles and
/// reward rates change after `init`.
#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getProtocolConfig)]
    fn get_protocol_config(&self) -> ProtocolConfig<Self::Api> {
        ProtocolConfig {
            eligibility_oracle: self.eligibility_oracle().get(),
            selector_ref: self.selector_ref().get(),
            min_member: self.min_member().get(),
            max_member: self.max_member().get(),
            flush_in_round: self.flush_in_round().get(),
            block_reward: self.block_reward().get(),
            tx_reward: self.tx_reward().get(),
            payload_address: self.payload_address().get(),
            registration_open: self.registration_open().get(),
        }
    }

    #[storage_mapper("eligibilityOracle")]
    fn eligibility_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("selectorRef")]
    fn selector_ref(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("minMember")]
    fn min_member(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxMember")]
    fn max_member(&self) -> SingleValueMapper<u64>;

    /// Blocks a refresh cycle stays open for voting
    #[storage_mapper("flushInRound")]
    fn flush_in_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("blockReward")]
    fn block_reward(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("txReward")]
    fn tx_reward(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("payloadAddress")]
    fn payload_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("registrationOpen")]
    fn registration_open(&self) -> SingleValueMapper<bool>;
}
