use serde::{Deserialize, Serialize};

/// Address pool inside a subnet, e.g. `"10.0.0.10 - 10.0.0.200"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(rename = "pool")]
    pub range: String,
}

/// DHCP option attached to a subnet (`option-data` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionData {
    pub name: String,
    #[serde(rename = "data")]
    pub value: String,
}

/// A subnet as held in the Kea `Dhcp4.subnet4` collection.
///
/// This is a read projection: deserializing a live subnet drops keys the
/// bridge does not manage. Mutations of the live configuration therefore
/// never round-trip through this type (see [`crate::KeaConfig`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    pub id: u32,
    #[serde(rename = "subnet")]
    pub cidr: String,
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub reservations: Vec<crate::KeaReservation>,
    #[serde(rename = "option-data", default, skip_serializing_if = "Vec::is_empty")]
    pub option_data: Vec<OptionData>,
}

/// Caller-supplied subnet definition; the id is assigned by the accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetCandidate {
    pub cidr: String,
    pub pools: Vec<Pool>,
    pub option_data: Vec<OptionData>,
}

impl Subnet {
    pub fn from_candidate(id: u32, candidate: SubnetCandidate) -> Self {
        Self {
            id,
            cidr: candidate.cidr,
            pools: candidate.pools,
            reservations: Vec::new(),
            option_data: candidate.option_data,
        }
    }
}
