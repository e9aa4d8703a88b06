pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PERMISSION_DENIED: &str = "Permission denied";
pub const ERR_UNKNOWN_PERMISSION: &str = "Unknown permission flag";
pub const ERR_SCHEME_NOT_REGISTERED: &str = "Scheme not registered";
pub const ERR_ZERO_ADDRESS: &str = "Zero address";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
