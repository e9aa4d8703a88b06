#![no_std]

multiversx_sc::imports!();

pub mod ico_factory_proxy;

use ico_scheme::ico_scheme_proxy::IcoSchemeProxy;
use ico_scheme::types::CampaignVersion;

pub const ERR_INVALID_TEMPLATE: &str = "Template must be a deployed contract";

#[multiversx_sc::contract]
pub trait IcoFactory {
    #[init]
    fn init(&self, template: ManagedAddress) {
        self.store_template(&template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProxy
    // Deploys a copy of the template and runs its initializer in
    // the same transaction. Nobody can reach the new unit before
    // it is initialized, and a failing initializer reverts the
    // deployment with it.
    // ========================================================

    #[endpoint(createProxy)]
    fn create_proxy(
        &self,
        upgrade_authority: ManagedAddress,
        implementation: CampaignVersion,
        funding_cap: BigUint,
        units_per_payment: BigUint,
        start_height: u64,
        end_height: u64,
        organization: ManagedAddress,
        beneficiary: ManagedAddress,
        admin: ManagedAddress,
    ) -> ManagedAddress {
        let template = self.template().get();

        let unit = self
            .tx()
            .typed(IcoSchemeProxy)
            .init(upgrade_authority, implementation)
            .from_source(template)
            .code_metadata(CodeMetadata::DEFAULT)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.tx()
            .to(&unit)
            .typed(IcoSchemeProxy)
            .initialize(
                funding_cap,
                units_per_payment,
                start_height,
                end_height,
                organization,
                beneficiary,
                admin,
            )
            .sync_call();

        self.created_units().insert(unit.clone());
        self.proxy_created_event(&unit, implementation);

        unit
    }

    #[only_owner]
    #[endpoint(setTemplate)]
    fn set_template(&self, template: ManagedAddress) {
        self.store_template(&template);
    }

    fn store_template(&self, template: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(template),
            ERR_INVALID_TEMPLATE
        );
        self.template().set(template);
    }

    #[view(isCreatedUnit)]
    fn is_created_unit(&self, unit: &ManagedAddress) -> bool {
        self.created_units().contains(unit)
    }

    #[event("proxyCreated")]
    fn proxy_created_event(
        &self,
        #[indexed] unit: &ManagedAddress,
        #[indexed] implementation: CampaignVersion,
    );

    #[view(getTemplate)]
    #[storage_mapper("template")]
    fn template(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCreatedUnits)]
    #[storage_mapper("createdUnits")]
    fn created_units(&self) -> UnorderedSetMapper<ManagedAddress>;
}
