// Upgradeable unit
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_ZERO_AUTHORITY: &str = "Upgrade authority must not be the zero address";
pub const ERR_IMPLEMENTATION_UNCHANGED: &str = "Implementation is already active";
pub const ERR_ENTRY_POINT_NOT_SUPPORTED: &str =
    "Entry point not supported by the current implementation";

// Initialization
pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";
pub const ERR_NOT_INITIALIZED: &str = "Campaign not initialized";
pub const ERR_INIT_ZERO_RATE: &str = "Initialization failed: units per payment must be positive";
pub const ERR_INIT_INVALID_WINDOW: &str = "Initialization failed: start height after end height";
pub const ERR_INIT_ZERO_ADDRESS: &str = "Initialization failed: zero address";

// Donations
pub const ERR_NOT_STARTED: &str = "Campaign not started";
pub const ERR_ENDED: &str = "Campaign ended";
pub const ERR_CAP_EXCEEDED: &str = "Funding cap exceeded";
pub const ERR_OVERFLOW: &str = "Mint amount overflow";
pub const ERR_HALTED: &str = "Campaign halted";
pub const ERR_ZERO_PAYMENT: &str = "Payment must be positive";
pub const ERR_ZERO_RECIPIENT: &str = "Token recipient must not be the zero address";
pub const ERR_REENTRANT_DONATION: &str = "Donation already in progress";

// Administration
pub const ERR_ALREADY_HALTED: &str = "Campaign already halted";
pub const ERR_NOT_HALTED: &str = "Campaign not halted";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
