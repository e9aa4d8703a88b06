multiversx_sc::imports!();

use crate::controller_proxy;
use crate::errors::{
    ERR_ALREADY_HALTED, ERR_ALREADY_INITIALIZED, ERR_CAP_EXCEEDED, ERR_ENDED, ERR_HALTED,
    ERR_INIT_INVALID_WINDOW, ERR_INIT_ZERO_ADDRESS, ERR_INIT_ZERO_RATE, ERR_NOTHING_TO_WITHDRAW,
    ERR_NOT_HALTED, ERR_NOT_INITIALIZED, ERR_NOT_STARTED, ERR_OVERFLOW, ERR_REENTRANT_DONATION,
    ERR_UNAUTHORIZED, ERR_ZERO_PAYMENT, ERR_ZERO_RECIPIENT,
};
use crate::events;
use crate::storage;
use crate::types::{CampaignConfig, CampaignPhase};
use crate::unit;

/// Token amounts are bounded to a 256-bit word.
const MAX_AMOUNT_BYTES: usize = 32;

/// Campaign logic shared by every implementation version: initialization,
/// the donation acceptance algorithm, and the admin/beneficiary surface.
#[multiversx_sc::module]
pub trait CampaignModule:
    storage::CampaignStorageModule + unit::UpgradeableUnitModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: initialize
    // One-time setup. Callable by anyone until it has run once;
    // the factory calls it in the same transaction as the deploy.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(
        &self,
        funding_cap: BigUint,
        units_per_payment: BigUint,
        start_height: u64,
        end_height: u64,
        organization: ManagedAddress,
        beneficiary: ManagedAddress,
        admin: ManagedAddress,
    ) {
        require!(!self.initialized().get(), ERR_ALREADY_INITIALIZED);

        require!(units_per_payment > 0u64, ERR_INIT_ZERO_RATE);
        require!(start_height <= end_height, ERR_INIT_INVALID_WINDOW);
        require!(
            !organization.is_zero() && !beneficiary.is_zero() && !admin.is_zero(),
            ERR_INIT_ZERO_ADDRESS
        );

        self.funding_cap().set(&funding_cap);
        self.units_per_payment().set(&units_per_payment);
        self.start_height().set(start_height);
        self.end_height().set(end_height);
        self.organization().set(&organization);
        self.beneficiary().set(&beneficiary);
        self.admin().set(&admin);
        self.total_raised().set(BigUint::zero());
        self.halted().set(false);
        self.initialized().set(true);

        self.campaign_initialized_event(
            &organization,
            &beneficiary,
            start_height,
            end_height,
            &funding_cap,
        );
    }

    // ========================================================
    // INTERNAL: donation acceptance
    // Capacity is reserved before the controller callout and the
    // lock rejects re-entry until the callout returns.
    // ========================================================

    fn accept_donation(&self, to: &ManagedAddress, amount: &BigUint) -> BigUint {
        self.require_initialized();
        require!(!self.donation_lock().get(), ERR_REENTRANT_DONATION);
        require!(!self.halted().get(), ERR_HALTED);

        match self.current_phase() {
            CampaignPhase::Pending => sc_panic!(ERR_NOT_STARTED),
            CampaignPhase::Closed => sc_panic!(ERR_ENDED),
            CampaignPhase::Active => {}
        }

        require!(*amount > 0u64, ERR_ZERO_PAYMENT);
        require!(!to.is_zero(), ERR_ZERO_RECIPIENT);

        let raised_after = &self.total_raised().get() + amount;
        let funding_cap = self.funding_cap().get();
        require!(
            funding_cap == 0u64 || raised_after <= funding_cap,
            ERR_CAP_EXCEEDED
        );

        let mint_amount = amount * &self.units_per_payment().get();
        require!(
            mint_amount.to_bytes_be_buffer().len() <= MAX_AMOUNT_BYTES,
            ERR_OVERFLOW
        );

        self.total_raised().set(&raised_after);
        self.donation_lock().set(true);

        let controller = self.organization().get();
        self.tx()
            .to(&controller)
            .typed(controller_proxy::ControllerProxy)
            .mint_tokens(to, &mint_amount)
            .sync_call();

        self.donation_lock().set(false);

        mint_amount
    }

    fn current_phase(&self) -> CampaignPhase {
        CampaignPhase::at(
            self.blockchain().get_block_nonce(),
            self.start_height().get(),
            self.end_height().get(),
        )
    }

    fn require_initialized(&self) {
        require!(self.initialized().get(), ERR_NOT_INITIALIZED);
    }

    // ========================================================
    // ENDPOINTS: admin halt / resume
    // ========================================================

    #[endpoint(haltCampaign)]
    fn halt_campaign(&self) {
        let admin = self.require_admin();
        require!(!self.halted().get(), ERR_ALREADY_HALTED);

        self.halted().set(true);
        self.campaign_halted_event(&admin);
    }

    #[endpoint(resumeCampaign)]
    fn resume_campaign(&self) {
        let admin = self.require_admin();
        require!(self.halted().get(), ERR_NOT_HALTED);

        self.halted().set(false);
        self.campaign_resumed_event(&admin);
    }

    fn require_admin(&self) -> ManagedAddress {
        self.require_initialized();
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);
        caller
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Beneficiary collects every EGLD payment held by the unit.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_initialized();
        let caller = self.blockchain().get_caller();
        require!(caller == self.beneficiary().get(), ERR_UNAUTHORIZED);

        let collected = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(collected > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.send().direct_egld(&caller, &collected);
        self.funds_withdrawn_event(&caller, &collected);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCampaignPhase)]
    fn get_campaign_phase(&self) -> CampaignPhase {
        self.require_initialized();
        self.current_phase()
    }

    #[view(isCampaignActive)]
    fn is_campaign_active(&self) -> bool {
        self.initialized().get()
            && !self.halted().get()
            && self.current_phase() == CampaignPhase::Active
    }

    #[view(getCampaignConfig)]
    fn get_campaign_config(&self) -> CampaignConfig<Self::Api> {
        self.require_initialized();
        CampaignConfig {
            funding_cap: self.funding_cap().get(),
            units_per_payment: self.units_per_payment().get(),
            start_height: self.start_height().get(),
            end_height: self.end_height().get(),
            organization: self.organization().get(),
            beneficiary: self.beneficiary().get(),
            admin: self.admin().get(),
        }
    }
}
