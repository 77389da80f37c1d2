//! Zone synthesis from one gathered weight table.
//!
//! Record order is fixed: SOA first, then one NS per table entry in
//! insertion order, then exactly one A record naming the minimum-weight
//! host. The minimum is tracked during the NS pass with strict `<`, so the
//! first-seen entry wins ties.

use crate::base::error::ZoneError;
use crate::config::ZoneConfig;
use crate::weights::table::{WeightEntry, WeightTable};
use crate::zone::record::{RecordType, ZoneRecord};

/// Renders the complete record set for one round.
///
/// The gatherer must have finished all inserts before this runs; the table
/// is read once and never mutated here. An empty table is an internal error
/// because the gatherer's local fold normally guarantees at least one
/// entry.
pub fn synthesize_zone(
    config: &ZoneConfig,
    table: &WeightTable,
) -> Result<Vec<ZoneRecord>, ZoneError> {
    let mut records = Vec::with_capacity(table.len() + 2);

    // SOA comes first, unconditionally. The rdata is a fixed simplification:
    // serial 1, with refresh/retry/expire/minimum all set to the zone TTL.
    records.push(ZoneRecord {
        name: config.zone.clone(),
        ttl: config.zone_ttl,
        rtype: RecordType::Soa,
        data: config.zone.as_deref().map(|zone| {
            let ttl = config.zone_ttl;
            format!("{zone}. mail.{zone}. 1 {ttl} {ttl} {ttl} {ttl}")
        }),
    });

    // One NS per known host, tracking the least-loaded entry in the same
    // pass. Strict less-than keeps the first-seen minimum on ties.
    let mut selected: Option<&WeightEntry> = None;
    for entry in table.iter() {
        records.push(ZoneRecord {
            name: config.zone.clone(),
            ttl: config.zone_ttl,
            rtype: RecordType::Ns,
            data: Some(entry.host().to_string()),
        });

        match selected {
            Some(best) if entry.weight() < best.weight() => selected = Some(entry),
            None => selected = Some(entry),
            _ => {}
        }
    }

    let selected = selected.ok_or(ZoneError::EmptyWeightTable)?;
    tracing::debug!(host = %selected.host(), weight = selected.weight(), "selected least-loaded host");

    records.push(ZoneRecord {
        name: match (config.record_name.as_deref(), config.zone.as_deref()) {
            (Some(name), Some(zone)) => Some(format!("{name}.{zone}")),
            _ => None,
        },
        ttl: config.record_ttl,
        rtype: RecordType::A,
        data: Some(selected.host().to_string()),
    });

    Ok(records)
}
