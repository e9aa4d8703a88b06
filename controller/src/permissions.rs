multiversx_sc::imports!();

use crate::errors::{
    ERR_PERMISSION_DENIED, ERR_SCHEME_NOT_REGISTERED, ERR_UNAUTHORIZED, ERR_UNKNOWN_PERMISSION,
};
use crate::events;

// ============================================================
// Permission flags
// ============================================================

pub const MINT_TOKENS: u32 = 1 << 0;
pub const MINT_REPUTATION: u32 = 1 << 1;
pub const BURN_REPUTATION: u32 = 1 << 2;
pub const REGISTER_SCHEMES: u32 = 1 << 3;

pub const ALL_PERMISSIONS: u32 = MINT_TOKENS | MINT_REPUTATION | BURN_REPUTATION | REGISTER_SCHEMES;

/// Scheme registry. A scheme with no entry holds no permissions; the avatar
/// may write any entry, a scheme holding `REGISTER_SCHEMES` only entries
/// whose permissions are a subset of its own.
#[multiversx_sc::module]
pub trait PermissionsModule: events::EventsModule {
    #[endpoint(setSchemePermissions)]
    fn set_scheme_permissions(&self, scheme: ManagedAddress, flags: u32) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.avatar().get(), ERR_UNAUTHORIZED);
        require!(flags & !ALL_PERMISSIONS == 0, ERR_UNKNOWN_PERMISSION);

        self.write_permissions(&scheme, flags);
    }

    #[endpoint(registerScheme)]
    fn register_scheme(&self, scheme: ManagedAddress, flags: u32) {
        let caller = self.require_permission(REGISTER_SCHEMES);
        require!(flags & !ALL_PERMISSIONS == 0, ERR_UNKNOWN_PERMISSION);

        let caller_flags = self.scheme_permissions(&caller).get();
        require!(flags & !caller_flags == 0, ERR_PERMISSION_DENIED);
        require!(
            self.scheme_permissions(&scheme).get() & !caller_flags == 0,
            ERR_PERMISSION_DENIED
        );

        self.write_permissions(&scheme, flags);
    }

    #[endpoint(unregisterScheme)]
    fn unregister_scheme(&self, scheme: ManagedAddress) {
        let caller = self.require_permission(REGISTER_SCHEMES);
        require!(self.is_scheme_registered(&scheme), ERR_SCHEME_NOT_REGISTERED);

        let caller_flags = self.scheme_permissions(&caller).get();
        require!(
            self.scheme_permissions(&scheme).get() & !caller_flags == 0,
            ERR_PERMISSION_DENIED
        );

        self.write_permissions(&scheme, 0);
    }

    #[endpoint(unregisterSelf)]
    fn unregister_self(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_scheme_registered(&caller), ERR_SCHEME_NOT_REGISTERED);

        self.write_permissions(&caller, 0);
    }

    /// Authenticates the caller as a scheme holding `flag` and returns its
    /// address.
    fn require_permission(&self, flag: u32) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            self.scheme_permissions(&caller).get() & flag == flag,
            ERR_PERMISSION_DENIED
        );
        caller
    }

    fn write_permissions(&self, scheme: &ManagedAddress, flags: u32) {
        if flags == 0 {
            self.scheme_permissions(scheme).clear();
            self.schemes().swap_remove(scheme);
        } else {
            self.scheme_permissions(scheme).set(flags);
            self.schemes().insert(scheme.clone());
        }

        self.scheme_permissions_changed_event(scheme, flags);
    }

    #[view(isSchemeRegistered)]
    fn is_scheme_registered(&self, scheme: &ManagedAddress) -> bool {
        self.schemes().contains(scheme)
    }

    #[view(getAvatar)]
    #[storage_mapper("avatar")]
    fn avatar(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSchemePermissions)]
    #[storage_mapper("schemePermissions")]
    fn scheme_permissions(&self, scheme: &ManagedAddress) -> SingleValueMapper<u32>;

    #[view(getSchemes)]
    #[storage_mapper("schemes")]
    fn schemes(&self) -> UnorderedSetMapper<ManagedAddress>;
}
