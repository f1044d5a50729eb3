use kea_bridge_domain::{project_reservations, BridgeError, Reservation};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{ConfigStore, ReservationRepository};

/// Write the database's reservations into the persisted configuration.
///
/// Every subnet's reservation list is replaced with the rows whose
/// `subnet_id` matches; a subnet with no rows gets an empty list so that
/// deletions in the database propagate to the file. The running server
/// picks the file up on the next reload.
pub struct SyncReservationsUseCase {
    store: Arc<dyn ConfigStore>,
    reservations: Arc<dyn ReservationRepository>,
}

impl SyncReservationsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self {
            store,
            reservations,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, BridgeError> {
        let mut config = self.store.load().await?;
        let rows = self.reservations.list().await?;
        let rows = dedupe(rows);
        let total = rows.len();

        let mut by_subnet: HashMap<u32, Vec<Reservation>> = HashMap::new();
        for row in rows {
            by_subnet.entry(row.subnet_id).or_default().push(row);
        }
        let projected = by_subnet
            .into_iter()
            .map(|(subnet_id, rows)| (subnet_id, project_reservations(&rows)))
            .collect();

        config.apply_reservations(&projected)?;
        self.store.save(&config).await?;

        info!(reservations = total, "Configuration updated with reservations");
        Ok(total)
    }
}

/// IP and MAC uniqueness is enforced at the store boundary; re-check here in
/// case the rows went stale, keeping the first occurrence.
fn dedupe(rows: Vec<Reservation>) -> Vec<Reservation> {
    let mut seen_ip = HashSet::new();
    let mut seen_mac = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen_ip.insert(row.ip_address.clone()) || !seen_mac.insert(row.hw_address.clone()) {
            warn!(
                ip = %row.ip_address,
                mac = %row.hw_address,
                "Duplicate reservation skipped during projection"
            );
            continue;
        }
        out.push(row);
    }
    out
}
