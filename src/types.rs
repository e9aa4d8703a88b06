multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Campaign Version: implementation tag held by the unit
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CampaignVersion {
    /// Named `donate` entry point only. Emits `donationReceived`.
    V1,
    /// Keeps `donate` and adds the argument-less `donateDefault`
    /// entry point (beneficiary is the caller). Emits `newDonator`.
    V2,
}

/// Entry points a campaign version may expose to callers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryPoint {
    Donate,
    DefaultDonate,
}

impl CampaignVersion {
    /// Each version declares its own calling convention; nothing is
    /// inherited implicitly across an upgrade.
    pub fn supports(self, entry_point: EntryPoint) -> bool {
        match self {
            CampaignVersion::V1 => matches!(entry_point, EntryPoint::Donate),
            CampaignVersion::V2 => {
                matches!(entry_point, EntryPoint::Donate | EntryPoint::DefaultDonate)
            }
        }
    }
}

// ============================================================
// Campaign Phase: derived from the block nonce, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CampaignPhase {
    /// Current height is below the start height.
    Pending,
    /// Current height is inside `[start, end]`.
    Active,
    /// Current height is past the end height.
    Closed,
}

impl CampaignPhase {
    pub fn at(height: u64, start_height: u64, end_height: u64) -> Self {
        if height < start_height {
            CampaignPhase::Pending
        } else if height > end_height {
            CampaignPhase::Closed
        } else {
            CampaignPhase::Active
        }
    }
}

// ============================================================
// Campaign Config: snapshot returned by getCampaignConfig
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CampaignConfig<M: ManagedTypeApi> {
    /// Zero means the campaign has no cap.
    pub funding_cap: BigUint<M>,
    pub units_per_payment: BigUint<M>,
    pub start_height: u64,
    pub end_height: u64,
    /// Controller contract of the organization the campaign mints for.
    pub organization: ManagedAddress<M>,
    pub beneficiary: ManagedAddress<M>,
    pub admin: ManagedAddress<M>,
}
