multiversx_sc::imports!();

/// Token and reputation balances of the organization. Only the controller's
/// gated endpoints call the mutators below.
#[multiversx_sc::module]
pub trait LedgerModule {
    fn credit_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        self.token_balance(to).update(|balance| *balance += amount);
        self.total_token_supply().update(|supply| *supply += amount);
    }

    fn credit_reputation(&self, to: &ManagedAddress, amount: &BigUint) {
        self.reputation(to).update(|balance| *balance += amount);
        self.total_reputation().update(|supply| *supply += amount);
    }

    /// Burns up to `amount`; returns what was actually burned.
    fn debit_reputation(&self, from: &ManagedAddress, amount: &BigUint) -> BigUint {
        let balance = self.reputation(from).get();
        let burned = if *amount > balance {
            balance
        } else {
            amount.clone()
        };

        self.reputation(from).update(|current| *current -= &burned);
        self.total_reputation().update(|supply| *supply -= &burned);
        burned
    }

    #[view(getTokenBalance)]
    #[storage_mapper("tokenBalance")]
    fn token_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalTokenSupply)]
    #[storage_mapper("totalTokenSupply")]
    fn total_token_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getReputation)]
    #[storage_mapper("reputation")]
    fn reputation(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalReputation)]
    #[storage_mapper("totalReputation")]
    fn total_reputation(&self) -> SingleValueMapper<BigUint>;
}
