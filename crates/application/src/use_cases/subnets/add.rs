use kea_bridge_domain::{BridgeError, KeaConfig, Subnet, SubnetCandidate};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ControlChannel;

/// Append a subnet to the live configuration.
///
/// Fetch-modify-push: the control protocol's `config-set` replaces the whole
/// document, so the current configuration is fetched, the subnet appended
/// under a freshly allocated id, and the full document pushed back. Two
/// concurrent administrators can race this cycle; the second push wins.
pub struct AddSubnetUseCase {
    channel: Arc<dyn ControlChannel>,
}

impl AddSubnetUseCase {
    pub fn new(channel: Arc<dyn ControlChannel>) -> Self {
        Self { channel }
    }

    /// Returns the id assigned to the new subnet, only after the push
    /// succeeded. Ids are one past the current maximum and are not reused
    /// for ids below it, so a deleted-but-still-cached client cannot
    /// collide with a newcomer.
    #[instrument(skip(self, candidate), fields(cidr = %candidate.cidr))]
    pub async fn execute(&self, candidate: SubnetCandidate) -> Result<u32, BridgeError> {
        let mut config = KeaConfig::from_value(self.channel.send("config-get", None).await?);

        let id = config.next_subnet_id();
        let cidr = candidate.cidr.clone();
        config.push_subnet(&Subnet::from_candidate(id, candidate))?;

        self.channel
            .send("config-set", Some(config.into_value()))
            .await?;

        info!(subnet_id = id, cidr = %cidr, "Subnet added");
        Ok(id)
    }
}
