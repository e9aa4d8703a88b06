multiversx_sc::imports!();

use crate::types::CampaignVersion;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("upgraded")]
    fn upgraded_event(
        &self,
        #[indexed] unit: &ManagedAddress,
        #[indexed] implementation: CampaignVersion,
    );

    #[event("campaignInitialized")]
    fn campaign_initialized_event(
        &self,
        #[indexed] organization: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] start_height: u64,
        #[indexed] end_height: u64,
        funding_cap: &BigUint,
    );

    /// Donation recorded by the v1 implementation.
    #[event("donationReceived")]
    fn donation_received_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    /// Donation recorded by the v2 implementation.
    #[event("newDonator")]
    fn new_donator_event(&self, #[indexed] donator: &ManagedAddress, amount: &BigUint);

    #[event("campaignHalted")]
    fn campaign_halted_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("campaignResumed")]
    fn campaign_resumed_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] beneficiary: &ManagedAddress, amount: &BigUint);
}
