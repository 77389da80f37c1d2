//! The rendered zone record.
//!
//! Records use four logical columns: name, ttl, record type, and data. A
//! `None` name or data field stands for an unset configuration value and
//! serializes as null; missing configuration degrades to null fields, never
//! to fabricated defaults.

use serde::Serialize;
use std::fmt;

/// The record types a rendered zone contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    #[serde(rename = "SOA")]
    Soa,
    #[serde(rename = "NS")]
    Ns,
    A,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordType::Soa => "SOA",
            RecordType::Ns => "NS",
            RecordType::A => "A",
        })
    }
}

/// One rendered zone record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRecord {
    pub name: Option<String>,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub rtype: RecordType,
    pub data: Option<String>,
}
