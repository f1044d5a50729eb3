use serde_json::{json, Value};
use std::collections::HashMap;

use crate::{BridgeError, KeaReservation, Subnet};

/// The Kea DHCPv4 configuration document.
///
/// Wraps the raw JSON tree instead of a typed schema: the document is owned by
/// the server and carries keys the bridge does not manage. All mutations edit
/// the tree in place so a fetch-modify-push cycle never drops unknown keys.
#[derive(Debug, Clone, PartialEq)]
pub struct KeaConfig(Value);

impl KeaConfig {
    pub const TOP_KEY: &'static str = "Dhcp4";
    const SUBNET_KEY: &'static str = "subnet4";

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Structurally valid empty configuration, used when no file exists yet.
    pub fn default_document() -> Self {
        Self(json!({
            "Dhcp4": {
                "valid-lifetime": 4000,
                "renew-timer": 1000,
                "rebind-timer": 2000,
                "interfaces-config": {
                    "interfaces": ["*"]
                },
                "lease-database": {
                    "type": "memfile",
                    "persist": true,
                    "name": "/var/lib/kea/dhcp4.leases"
                },
                "control-socket": {
                    "socket-type": "unix",
                    "socket-name": "/tmp/kea4-ctrl-socket"
                },
                "subnet4": [],
                "loggers": [
                    {
                        "name": "kea-dhcp4",
                        "output_options": [
                            { "output": "/var/log/kea/kea-dhcp4.log" }
                        ],
                        "severity": "INFO",
                        "debuglevel": 0
                    }
                ]
            }
        }))
    }

    /// Structural check only: the top-level key must be an object carrying
    /// `valid-lifetime` and `interfaces-config`. Subnet and pool semantics
    /// are the server's business.
    pub fn validate(&self) -> bool {
        let Some(dhcp4) = self.0.get(Self::TOP_KEY).and_then(Value::as_object) else {
            return false;
        };
        dhcp4.contains_key("valid-lifetime") && dhcp4.contains_key("interfaces-config")
    }

    fn subnet_array(&self) -> Option<&Vec<Value>> {
        self.0
            .get(Self::TOP_KEY)?
            .get(Self::SUBNET_KEY)?
            .as_array()
    }

    fn subnet_array_mut(&mut self) -> Result<&mut Vec<Value>, BridgeError> {
        let dhcp4 = self
            .0
            .get_mut(Self::TOP_KEY)
            .and_then(Value::as_object_mut)
            .ok_or(BridgeError::InvalidStructure)?;

        let entry = dhcp4
            .entry(Self::SUBNET_KEY.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));

        entry.as_array_mut().ok_or(BridgeError::InvalidStructure)
    }

    /// Typed read of the subnet collection. Unknown per-subnet keys are not
    /// represented; use the mutation methods to change the document.
    pub fn subnets(&self) -> Vec<Subnet> {
        self.subnet_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn subnet_ids(&self) -> Vec<u32> {
        self.subnet_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| v.get("id").and_then(Value::as_u64))
                    .map(|id| id as u32)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Next free subnet id: one past the current maximum, `1` when empty.
    pub fn next_subnet_id(&self) -> u32 {
        self.subnet_ids().into_iter().max().unwrap_or(0) + 1
    }

    pub fn push_subnet(&mut self, subnet: &Subnet) -> Result<(), BridgeError> {
        let value = serde_json::to_value(subnet)
            .map_err(|e| BridgeError::Protocol(format!("subnet serialization failed: {e}")))?;
        self.subnet_array_mut()?.push(value);
        Ok(())
    }

    /// Remove the subnet with the given id; `false` when nothing matched.
    pub fn remove_subnet(&mut self, id: u32) -> Result<bool, BridgeError> {
        let entries = self.subnet_array_mut()?;
        let before = entries.len();
        entries.retain(|v| v.get("id").and_then(Value::as_u64) != Some(id as u64));
        Ok(entries.len() != before)
    }

    /// Replace every subnet's reservation list with the projections for its
    /// id. Subnets with no matching reservations get an empty list rather
    /// than being left untouched, so database deletions propagate.
    pub fn apply_reservations(
        &mut self,
        by_subnet: &HashMap<u32, Vec<KeaReservation>>,
    ) -> Result<(), BridgeError> {
        for entry in self.subnet_array_mut()? {
            let Some(id) = entry.get("id").and_then(Value::as_u64) else {
                continue;
            };
            let projections = by_subnet
                .get(&(id as u32))
                .map(|r| serde_json::to_value(r))
                .transpose()
                .map_err(|e| {
                    BridgeError::Protocol(format!("reservation serialization failed: {e}"))
                })?
                .unwrap_or_else(|| Value::Array(Vec::new()));

            if let Some(obj) = entry.as_object_mut() {
                obj.insert("reservations".to_string(), projections);
            }
        }
        Ok(())
    }

    /// Total reservation and pool counts across all subnets.
    pub fn counts(&self) -> (usize, usize, usize) {
        let empty = Vec::new();
        let subnets = self.subnet_array().unwrap_or(&empty);
        let reservations = subnets
            .iter()
            .filter_map(|s| s.get("reservations").and_then(Value::as_array))
            .map(Vec::len)
            .sum();
        let pools = subnets
            .iter()
            .filter_map(|s| s.get("pools").and_then(Value::as_array))
            .map(Vec::len)
            .sum();
        (subnets.len(), reservations, pools)
    }

}

/// Read-only summary of the persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ConfigStats {
    pub total_subnets: usize,
    pub total_reservations: usize,
    pub total_pools: usize,
    pub config_file_size: u64,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}
