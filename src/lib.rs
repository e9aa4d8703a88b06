#![no_std]

multiversx_sc::imports!();

pub mod campaign;
pub mod controller_proxy;
pub mod errors;
pub mod events;
pub mod ico_scheme_proxy;
pub mod storage;
pub mod types;
pub mod unit;

use errors::{ERR_UNAUTHORIZED, ERR_ZERO_AUTHORITY};
use types::{CampaignVersion, EntryPoint};

// ============================================================
// Contract
// The unit owns all storage; the active CampaignVersion decides
// which entry points are exposed and how donations are reported.
// ============================================================

#[multiversx_sc::contract]
pub trait IcoScheme:
    unit::UpgradeableUnitModule
    + storage::CampaignStorageModule
    + campaign::CampaignModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, upgrade_authority: ManagedAddress, implementation: CampaignVersion) {
        require!(!upgrade_authority.is_zero(), ERR_ZERO_AUTHORITY);

        self.upgrade_authority().set(&upgrade_authority);
        self.implementation().set(implementation);
        self.initialized().set(false);
    }

    /// Native code upgrades are held to the same authority as `upgradeTo`,
    /// whoever owns the contract account.
    #[upgrade]
    fn upgrade(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.upgrade_authority().get(), ERR_UNAUTHORIZED);
    }

    // ========================================================
    // ENDPOINT: donate
    // Named entry point, exposed by V1 and V2.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(donate)]
    fn donate(&self, to: ManagedAddress) -> BigUint {
        let version = self.require_entry_point(EntryPoint::Donate);
        let amount = self.call_value().egld_value().clone_value();

        let minted = self.accept_donation(&to, &amount);
        self.record_donation(version, &to, &amount);

        minted
    }

    // ========================================================
    // ENDPOINT: donateDefault
    // Argument-less entry point, exposed by V2 only. Tokens go
    // to the caller.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(donateDefault)]
    fn donate_default(&self) -> BigUint {
        let version = self.require_entry_point(EntryPoint::DefaultDonate);
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        let minted = self.accept_donation(&caller, &amount);
        self.record_donation(version, &caller, &amount);

        minted
    }

    fn record_donation(&self, version: CampaignVersion, to: &ManagedAddress, amount: &BigUint) {
        match version {
            CampaignVersion::V1 => self.donation_received_event(to, amount),
            CampaignVersion::V2 => self.new_donator_event(to, amount),
        }
    }
}
