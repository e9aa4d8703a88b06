// Contract-object and type-level checks for the ICO scheme. Endpoint
// behaviour, including the controller callout, is covered by the
// blackbox scenario tests next to this file.

use multiversx_sc_scenario::api::DebugApi;

use ico_scheme::types::{CampaignPhase, CampaignVersion, EntryPoint};

type IcoContract = ico_scheme::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> IcoContract = ico_scheme::contract_obj;
}

#[test]
fn phase_follows_inclusive_window() {
    assert_eq!(CampaignPhase::at(9, 10, 20), CampaignPhase::Pending);
    assert_eq!(CampaignPhase::at(10, 10, 20), CampaignPhase::Active);
    assert_eq!(CampaignPhase::at(20, 10, 20), CampaignPhase::Active);
    assert_eq!(CampaignPhase::at(21, 10, 20), CampaignPhase::Closed);
}

#[test]
fn single_height_window_is_active_only_at_that_height() {
    assert_eq!(CampaignPhase::at(6, 7, 7), CampaignPhase::Pending);
    assert_eq!(CampaignPhase::at(7, 7, 7), CampaignPhase::Active);
    assert_eq!(CampaignPhase::at(8, 7, 7), CampaignPhase::Closed);
}

#[test]
fn each_version_declares_its_entry_points() {
    assert!(CampaignVersion::V1.supports(EntryPoint::Donate));
    assert!(!CampaignVersion::V1.supports(EntryPoint::DefaultDonate));

    assert!(CampaignVersion::V2.supports(EntryPoint::Donate));
    assert!(CampaignVersion::V2.supports(EntryPoint::DefaultDonate));
}
