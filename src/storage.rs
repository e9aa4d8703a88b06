multiversx_sc::imports!();

/// Campaign state persisted in the unit. Every campaign version reads and
/// writes these keys, so a key is never renamed or re-typed once released;
/// later versions only add keys below the existing ones.
#[multiversx_sc::module]
pub trait CampaignStorageModule {
    // ── Configuration (written once by initialize) ──

    #[storage_mapper("fundingCap")]
    fn funding_cap(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("unitsPerPayment")]
    fn units_per_payment(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("startHeight")]
    fn start_height(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("endHeight")]
    fn end_height(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("organization")]
    fn organization(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBeneficiary)]
    #[storage_mapper("beneficiary")]
    fn beneficiary(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Accumulator ──

    #[view(getTotalRaised)]
    #[storage_mapper("totalRaised")]
    fn total_raised(&self) -> SingleValueMapper<BigUint>;

    // ── Appended keys ──

    #[view(isHalted)]
    #[storage_mapper("halted")]
    fn halted(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("donationLock")]
    fn donation_lock(&self) -> SingleValueMapper<bool>;
}
