#![no_std]

multiversx_sc::imports!();

pub mod reentrant_organization_proxy;
mod unit_proxy;

/// Organization stand-in for tests: `mintTokens` immediately donates back
/// into the calling unit on behalf of the same recipient.
#[multiversx_sc::contract]
pub trait ReentrantOrganization {
    #[init]
    fn init(&self) {}

    #[endpoint(mintTokens)]
    fn mint_tokens(&self, to: ManagedAddress, _amount: BigUint) {
        let unit = self.blockchain().get_caller();
        self.tx()
            .to(&unit)
            .typed(unit_proxy::UnitProxy)
            .donate(to)
            .sync_call();
    }
}
