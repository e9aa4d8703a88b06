use multiversx_sc::proxy_imports::*;

/// The single unit endpoint the stand-in calls back into.
pub struct UnitProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for UnitProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = UnitProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        UnitProxyMethods { wrapped_tx: tx }
    }
}

pub struct UnitProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> UnitProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn donate<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        to: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .raw_call("donate")
            .argument(&to)
            .original_result()
    }
}
