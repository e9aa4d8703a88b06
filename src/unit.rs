multiversx_sc::imports!();

use crate::errors::{ERR_ENTRY_POINT_NOT_SUPPORTED, ERR_IMPLEMENTATION_UNCHANGED, ERR_UNAUTHORIZED};
use crate::events;
use crate::types::{CampaignVersion, EntryPoint};

/// Management surface of the upgradeable unit: which campaign
/// implementation is active, who may swap it, and whether the one-time
/// initializer has run.
#[multiversx_sc::module]
pub trait UpgradeableUnitModule: events::EventsModule {
    /// Swaps the active implementation. Campaign storage and the
    /// `initialized` flag are left untouched.
    #[endpoint(upgradeTo)]
    fn upgrade_to(&self, new_implementation: CampaignVersion) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.upgrade_authority().get(), ERR_UNAUTHORIZED);
        require!(
            self.implementation().get() != new_implementation,
            ERR_IMPLEMENTATION_UNCHANGED
        );

        self.implementation().set(new_implementation);

        let unit = self.blockchain().get_sc_address();
        self.upgraded_event(&unit, new_implementation);
    }

    /// Resolves the implementation that handles `entry_point`, failing if
    /// the active version does not expose it.
    fn require_entry_point(&self, entry_point: EntryPoint) -> CampaignVersion {
        let version = self.implementation().get();
        require!(version.supports(entry_point), ERR_ENTRY_POINT_NOT_SUPPORTED);
        version
    }

    #[view(implementation)]
    #[storage_mapper("implementation")]
    fn implementation(&self) -> SingleValueMapper<CampaignVersion>;

    #[view(upgradeAuthority)]
    #[storage_mapper("upgradeAuthority")]
    fn upgrade_authority(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;
}
