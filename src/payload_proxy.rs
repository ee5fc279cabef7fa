use multiversx_sc::proxy_imports::*;

/// Business logic executed by a seated committee. Inputs and outputs are opaque.
pub struct PayloadProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PayloadProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PayloadProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PayloadProxyMethods { wrapped_tx: tx }
    }
}

pub struct PayloadProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PayloadProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn run<Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>>(
        self,
        inputs: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("run")
            .argument(&inputs)
            .original_result()
    }
}
