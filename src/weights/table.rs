//! The per-round weight table.
//!
//! Deduplicates hosts reported during one gather round and stores each
//! host's load weight. The table is created at the start of a round, filled
//! by the gatherer, read once by the synthesizer, and dropped; nothing is
//! shared across rounds.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// A host identity used as the table key.
///
/// Lightweight wrapper around the host string. Equality is byte equality of
/// the raw name; hashing is the standard well-distributed string hash, so
/// equal names always hash identically.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct HostName {
    host: Box<str>,
}

impl HostName {
    /// Creates a new [`HostName`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the host as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for HostName {
    fn from(value: &str) -> Self {
        HostName::new(value)
    }
}

impl From<String> for HostName {
    fn from(value: String) -> Self {
        HostName::new(value)
    }
}

impl fmt::Debug for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// One table entry: a host and its most recently recorded load weight.
///
/// At most one entry exists per distinct host per round. Weight is a 0-100
/// load percentage; producers should not emit negatives but the bound is
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightEntry {
    host: HostName,
    weight: i32,
}

impl WeightEntry {
    /// The host this entry was created for.
    #[inline]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// The recorded load weight.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Overwrites the weight field.
    #[inline]
    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }
}

/// The per-round host-to-weight accumulator.
///
/// Iteration order is insertion order, which makes downstream selection
/// deterministic for a given row sequence. The host string is copied into
/// owned storage on insert; nothing in the table borrows from the transient
/// row buffers the gatherer reads.
#[derive(Debug, Default)]
pub struct WeightTable {
    entries: HashMap<HostName, WeightEntry>,
    order: Vec<HostName>,
}

impl WeightTable {
    /// Creates an empty table sized for `hint` hosts.
    ///
    /// The hint should be the expected coordinator count; the table grows
    /// transparently if more hosts turn up.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(hint),
            order: Vec::with_capacity(hint),
        }
    }

    /// Looks up `host`, inserting a fresh entry with weight 0 if absent.
    ///
    /// Returns the entry and whether this call created it.
    pub fn get_or_create(&mut self, host: &str) -> (&mut WeightEntry, bool) {
        match self.entries.entry(HostName::new(host)) {
            Entry::Occupied(slot) => (slot.into_mut(), false),
            Entry::Vacant(slot) => {
                let host = slot.key().clone();
                self.order.push(host.clone());
                (slot.insert(WeightEntry { host, weight: 0 }), true)
            }
        }
    }

    /// Read-only iteration over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Number of distinct hosts recorded this round.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no hosts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
