use serde::{Deserialize, Serialize};

/// Active lease parsed from the Kea memfile lease state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    #[serde(rename = "ip-address")]
    pub ip_address: String,
    #[serde(rename = "hw-address")]
    pub hw_address: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(rename = "subnet-id", default)]
    pub subnet_id: u32,
    #[serde(rename = "valid_lft", default)]
    pub valid_lifetime: i64,
    #[serde(default)]
    pub expire: i64,
}

impl Lease {
    /// Only leases with remaining valid lifetime count as active.
    pub fn is_active(&self) -> bool {
        self.valid_lifetime > 0
    }
}
