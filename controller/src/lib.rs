#![no_std]

multiversx_sc::imports!();

pub mod controller_proxy;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod permissions;

use errors::{ERR_ZERO_ADDRESS, ERR_ZERO_AMOUNT};
use permissions::{BURN_REPUTATION, MINT_REPUTATION, MINT_TOKENS};

// ============================================================
// Contract
// Single gate for every privileged mutation of the organization's
// token and reputation ledgers. Schemes are authenticated by their
// caller address against the permission registry.
// ============================================================

#[multiversx_sc::contract]
pub trait OrgController:
    permissions::PermissionsModule + ledger::LedgerModule + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // Founder allocations are the organization's bootstrap and
    // bypass the scheme gate.
    // ========================================================

    #[init]
    fn init(
        &self,
        avatar: ManagedAddress,
        founders: MultiValueEncoded<MultiValue3<ManagedAddress, BigUint, BigUint>>,
    ) {
        require!(!avatar.is_zero(), ERR_ZERO_ADDRESS);
        self.avatar().set(&avatar);

        for founder in founders {
            let (account, tokens, reputation) = founder.into_tuple();
            require!(!account.is_zero(), ERR_ZERO_ADDRESS);

            if tokens > 0u64 {
                self.credit_tokens(&account, &tokens);
            }
            if reputation > 0u64 {
                self.credit_reputation(&account, &reputation);
            }
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Gated ledger mutations
    // ========================================================

    #[endpoint(mintTokens)]
    fn mint_tokens(&self, to: ManagedAddress, amount: BigUint) {
        let scheme = self.require_permission(MINT_TOKENS);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.credit_tokens(&to, &amount);
        self.tokens_minted_event(&scheme, &to, &amount);
    }

    #[endpoint(mintReputation)]
    fn mint_reputation(&self, to: ManagedAddress, amount: BigUint) {
        let scheme = self.require_permission(MINT_REPUTATION);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.credit_reputation(&to, &amount);
        self.reputation_minted_event(&scheme, &to, &amount);
    }

    /// Burns at most the holder's balance and returns the burned amount.
    #[endpoint(burnReputation)]
    fn burn_reputation(&self, from: ManagedAddress, amount: BigUint) -> BigUint {
        let scheme = self.require_permission(BURN_REPUTATION);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let burned = self.debit_reputation(&from, &amount);
        self.reputation_burned_event(&scheme, &from, &burned);
        burned
    }
}
