#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{FundAccount, NodeRecord, Proposal, ProposalStatusView, ProtocolConfig};

pub struct SubchainBaseProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SubchainBaseProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SubchainBaseProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SubchainBaseProxyMethods { wrapped_tx: tx }
    }
}

pub struct SubchainBaseProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> SubchainBaseProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        eligibility_oracle: Arg0,
        selector_ref: Arg1,
        min_member: Arg2,
        max_member: Arg3,
        flush_in_round: Arg4,
        block_reward: Arg5,
        tx_reward: Arg6,
        payload_address: Arg7,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&eligibility_oracle)
            .argument(&selector_ref)
            .argument(&min_member)
            .argument(&max_member)
            .argument(&flush_in_round)
            .argument(&block_reward)
            .argument(&tx_reward)
            .argument(&payload_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> SubchainBaseProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> SubchainBaseProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Config ──

    pub fn get_protocol_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProtocolConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProtocolConfig")
            .original_result()
    }

    // ── Fund ──

    pub fn add_fund(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("addFund")
            .original_result()
    }

    pub fn withdraw<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .original_result()
    }

    pub fn set_rewards<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        block_reward: Arg0,
        tx_reward: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRewards")
            .argument(&block_reward)
            .argument(&tx_reward)
            .original_result()
    }

    pub fn get_fund_account(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, FundAccount<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundAccount")
            .original_result()
    }

    pub fn get_available_funds(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableFunds")
            .original_result()
    }

    // ── Registry ──

    pub fn register_open(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerOpen")
            .original_result()
    }

    pub fn register_close(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerClose")
            .original_result()
    }

    pub fn register_as_node(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerAsNode")
            .original_result()
    }

    pub fn leave_committee(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("leaveCommittee")
            .original_result()
    }

    pub fn node_list(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("nodeList")
            .original_result()
    }

    pub fn node_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("nodeCount")
            .original_result()
    }

    pub fn get_node_record<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        node: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, NodeRecord<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNodeRecord")
            .argument(&node)
            .original_result()
    }

    pub fn estimate_flush_wait<
        Arg0: ProxyArg<OptionalValue<u64>>,
    >(
        self,
        at_block: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("estimateFlushWait")
            .argument(&at_block)
            .original_result()
    }

    // ── Refresh ──

    pub fn create_proposal<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        candidate_set: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&candidate_set)
            .original_result()
    }

    pub fn dispute_proposal<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        candidate_set: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("disputeProposal")
            .argument(&candidate_set)
            .original_result()
    }

    pub fn vote_on_proposal<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        proposal_id: Arg0,
        approve: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteOnProposal")
            .argument(&proposal_id)
            .argument(&approve)
            .original_result()
    }

    pub fn request_proposal_action(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestProposalAction")
            .original_result()
    }

    pub fn check_proposal_status<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalStatusView<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkProposalStatus")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_cycle_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCycleProposals")
            .original_result()
    }

    pub fn get_current_cycle(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentCycle")
            .original_result()
    }

    pub fn get_vote<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&voter)
            .original_result()
    }

    // ── Payload ──

    pub fn run_payload<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        inputs: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("runPayload")
            .argument(&inputs)
            .original_result()
    }
}
