multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("schemePermissionsChanged")]
    fn scheme_permissions_changed_event(
        &self,
        #[indexed] scheme: &ManagedAddress,
        #[indexed] flags: u32,
    );

    #[event("tokensMinted")]
    fn tokens_minted_event(
        &self,
        #[indexed] scheme: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("reputationMinted")]
    fn reputation_minted_event(
        &self,
        #[indexed] scheme: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("reputationBurned")]
    fn reputation_burned_event(
        &self,
        #[indexed] scheme: &ManagedAddress,
        #[indexed] from: &ManagedAddress,
        amount: &BigUint,
    );
}
