use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::scenario_model::Log;

use org_controller::controller_proxy::OrgControllerProxy;
use org_controller::permissions::{
    ALL_PERMISSIONS, BURN_REPUTATION, MINT_REPUTATION, MINT_TOKENS, REGISTER_SCHEMES,
};

const AVATAR: TestAddress = TestAddress::new("avatar");
const FOUNDER: TestAddress = TestAddress::new("founder");
const SCHEME: TestAddress = TestAddress::new("scheme");
const REGISTRAR: TestAddress = TestAddress::new("registrar");
const STRANGER: TestAddress = TestAddress::new("stranger");

const CONTROLLER_ADDRESS: TestSCAddress = TestSCAddress::new("org-controller");
const CONTROLLER_CODE_PATH: MxscPath = MxscPath::new("output/org-controller.mxsc.json");

type Founder = MultiValue3<ManagedAddress<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>>;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CONTROLLER_CODE_PATH, org_controller::ContractBuilder);
    blockchain
}

fn find_event<'a>(logs: &'a [Log], identifier: &str) -> &'a Log {
    logs.iter()
        .find(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .unwrap_or_else(|| panic!("no {identifier} event"))
}

struct ControllerTestState {
    world: ScenarioWorld,
}

impl ControllerTestState {
    fn new() -> Self {
        let mut world = world();

        for account in [AVATAR, FOUNDER, SCHEME, REGISTRAR, STRANGER] {
            world.account(account).nonce(1);
        }

        let mut founders = MultiValueEncoded::<StaticApi, Founder>::new();
        founders.push(MultiValue3::from((
            FOUNDER.to_managed_address(),
            BigUint::from(1_000u64),
            BigUint::from(500u64),
        )));

        world
            .tx()
            .from(AVATAR)
            .typed(OrgControllerProxy)
            .init(AVATAR, founders)
            .code(CONTROLLER_CODE_PATH)
            .new_address(CONTROLLER_ADDRESS)
            .run();

        Self { world }
    }

    fn set_permissions(&mut self, scheme: TestAddress, flags: u32) {
        self.world
            .tx()
            .from(AVATAR)
            .to(CONTROLLER_ADDRESS)
            .typed(OrgControllerProxy)
            .set_scheme_permissions(scheme, flags)
            .run();
    }

    fn check_permissions(&mut self, scheme: TestAddress, expected: u32) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(OrgControllerProxy)
            .scheme_permissions(scheme)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_registered(&mut self, scheme: TestAddress, expected: bool) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(OrgControllerProxy)
            .is_scheme_registered(scheme)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_token_balance(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(OrgControllerProxy)
            .token_balance(account)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_reputation(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(CONTROLLER_ADDRESS)
            .typed(OrgControllerProxy)
            .reputation(account)
            .returns(ExpectValue(expected))
            .run();
    }
}

// ============================================================
// Bootstrap
// ============================================================

#[test]
fn init_mints_founder_allocations() {
    let mut state = ControllerTestState::new();

    state.check_token_balance(FOUNDER, 1_000);
    state.check_reputation(FOUNDER, 500);
    state
        .world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .total_token_supply()
        .returns(ExpectValue(1_000u64))
        .run();
    state
        .world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .total_reputation()
        .returns(ExpectValue(500u64))
        .run();
}

// ============================================================
// Registry
// ============================================================

#[test]
fn only_avatar_sets_permissions() {
    let mut state = ControllerTestState::new();

    state
        .world
        .tx()
        .from(STRANGER)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .set_scheme_permissions(STRANGER, ALL_PERMISSIONS)
        .returns(ExpectError(4, "Unauthorized"))
        .run();

    state.check_registered(STRANGER, false);
    state.check_permissions(STRANGER, 0);
}

#[test]
fn zero_flags_remove_scheme() {
    let mut state = ControllerTestState::new();

    state.set_permissions(SCHEME, MINT_TOKENS | MINT_REPUTATION);
    state.check_registered(SCHEME, true);
    state.check_permissions(SCHEME, MINT_TOKENS | MINT_REPUTATION);

    state.set_permissions(SCHEME, 0);
    state.check_registered(SCHEME, false);
    state.check_permissions(SCHEME, 0);
}

#[test]
fn set_permissions_emits_scheme_permissions_changed() {
    let mut state = ControllerTestState::new();

    let logs = state
        .world
        .tx()
        .from(AVATAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .set_scheme_permissions(SCHEME, MINT_TOKENS | MINT_REPUTATION)
        .returns(ReturnsLogs)
        .run();

    let event = find_event(&logs, "schemePermissionsChanged");
    assert_eq!(event.topics[1], SCHEME.to_address().as_bytes());
    assert_eq!(event.topics[2], vec![3u8]);
}

#[test]
fn unknown_flags_are_rejected() {
    let mut state = ControllerTestState::new();

    state
        .world
        .tx()
        .from(AVATAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .set_scheme_permissions(SCHEME, 1u32 << 7)
        .returns(ExpectError(4, "Unknown permission flag"))
        .run();
}

#[test]
fn registrar_grants_only_permissions_it_holds() {
    let mut state = ControllerTestState::new();
    state.set_permissions(REGISTRAR, REGISTER_SCHEMES | MINT_TOKENS);

    state
        .world
        .tx()
        .from(REGISTRAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .register_scheme(SCHEME, MINT_TOKENS | MINT_REPUTATION)
        .returns(ExpectError(4, "Permission denied"))
        .run();
    state.check_registered(SCHEME, false);

    state
        .world
        .tx()
        .from(REGISTRAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .register_scheme(SCHEME, MINT_TOKENS)
        .run();
    state.check_permissions(SCHEME, MINT_TOKENS);

    state
        .world
        .tx()
        .from(REGISTRAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .unregister_scheme(SCHEME)
        .run();
    state.check_registered(SCHEME, false);
}

#[test]
fn registrar_cannot_touch_more_privileged_scheme() {
    let mut state = ControllerTestState::new();
    state.set_permissions(REGISTRAR, REGISTER_SCHEMES);
    state.set_permissions(SCHEME, MINT_TOKENS);

    state
        .world
        .tx()
        .from(REGISTRAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .unregister_scheme(SCHEME)
        .returns(ExpectError(4, "Permission denied"))
        .run();

    state
        .world
        .tx()
        .from(REGISTRAR)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .register_scheme(SCHEME, REGISTER_SCHEMES)
        .returns(ExpectError(4, "Permission denied"))
        .run();

    state.check_permissions(SCHEME, MINT_TOKENS);
}

#[test]
fn unregistered_scheme_cannot_register_others() {
    let mut state = ControllerTestState::new();

    state
        .world
        .tx()
        .from(STRANGER)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .register_scheme(STRANGER, MINT_TOKENS)
        .returns(ExpectError(4, "Permission denied"))
        .run();
}

#[test]
fn scheme_can_unregister_itself() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, MINT_TOKENS);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .unregister_self()
        .run();
    state.check_registered(SCHEME, false);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .unregister_self()
        .returns(ExpectError(4, "Scheme not registered"))
        .run();
}

// ============================================================
// Gated mutations
// ============================================================

#[test]
fn unregistered_scheme_cannot_mint() {
    let mut state = ControllerTestState::new();

    state
        .world
        .tx()
        .from(STRANGER)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_tokens(STRANGER, 100u64)
        .returns(ExpectError(4, "Permission denied"))
        .run();

    state.check_token_balance(STRANGER, 0);
    state
        .world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .total_token_supply()
        .returns(ExpectValue(1_000u64))
        .run();
}

#[test]
fn mint_requires_the_matching_flag() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, MINT_REPUTATION);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_tokens(FOUNDER, 100u64)
        .returns(ExpectError(4, "Permission denied"))
        .run();

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_reputation(FOUNDER, 100u64)
        .run();

    state.check_token_balance(FOUNDER, 1_000);
    state.check_reputation(FOUNDER, 600);
}

#[test]
fn registered_scheme_mints_tokens() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, MINT_TOKENS);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_tokens(FOUNDER, 3u64)
        .run();

    state.check_token_balance(FOUNDER, 1_003);
}

#[test]
fn removed_scheme_loses_mint_rights() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, MINT_TOKENS);
    state.set_permissions(SCHEME, 0);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_tokens(FOUNDER, 3u64)
        .returns(ExpectError(4, "Permission denied"))
        .run();

    state.check_token_balance(FOUNDER, 1_000);
}

#[test]
fn burn_reputation_is_capped_at_balance() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, BURN_REPUTATION);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .burn_reputation(FOUNDER, 200u64)
        .returns(ExpectValue(200u64))
        .run();
    state.check_reputation(FOUNDER, 300);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .burn_reputation(FOUNDER, 1_000u64)
        .returns(ExpectValue(300u64))
        .run();
    state.check_reputation(FOUNDER, 0);
    state
        .world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .total_reputation()
        .returns(ExpectValue(0u64))
        .run();
}

#[test]
fn zero_amount_mint_fails() {
    let mut state = ControllerTestState::new();
    state.set_permissions(SCHEME, MINT_TOKENS);

    state
        .world
        .tx()
        .from(SCHEME)
        .to(CONTROLLER_ADDRESS)
        .typed(OrgControllerProxy)
        .mint_tokens(FOUNDER, 0u64)
        .returns(ExpectError(4, "Amount must be positive"))
        .run();
}
