//! Per-round configuration.
//!
//! The original operator-facing knobs are plain fields on [`ZoneConfig`],
//! passed by reference into the gatherer and synthesizer at call time.
//! There is no process-wide mutable configuration state; a hosting system
//! that lets operators change these values at runtime rebuilds the struct
//! per request.

/// Configuration for a single zone-generation round.
///
/// Unset string fields degrade to null output fields in the rendered zone,
/// never to fabricated defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    /// TTL of the emitted A record (default: 0).
    pub record_ttl: u32,
    /// TTL of the SOA and NS records (default: 3600).
    pub zone_ttl: u32,
    /// The zone name, e.g. `"example.com"`. Unset nulls every field derived
    /// from it.
    pub zone: Option<String>,
    /// The A record's left-hand label, e.g. `"db"` for `db.example.com`.
    pub record_name: Option<String>,
    /// This node's own host identity as published to resolvers.
    pub host: Option<String>,
    /// Capacity hint for the weight table, sized to the expected coordinator
    /// count. A hint only; the table grows transparently past it.
    pub expected_coordinators: usize,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            record_ttl: 0,
            zone_ttl: 3600,
            zone: None,
            record_name: None,
            host: None,
            expected_coordinators: 16,
        }
    }
}

impl ZoneConfig {
    /// Sets the zone name.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Sets the A record's left-hand label.
    pub fn with_record_name(mut self, name: impl Into<String>) -> Self {
        self.record_name = Some(name.into());
        self
    }

    /// Sets the local host identity.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the A record TTL.
    pub fn with_record_ttl(mut self, ttl: u32) -> Self {
        self.record_ttl = ttl;
        self
    }

    /// Sets the SOA/NS record TTL.
    pub fn with_zone_ttl(mut self, ttl: u32) -> Self {
        self.zone_ttl = ttl;
        self
    }
}
