//! Zone record model and synthesis.
//!
//! A zone is the ordered record set returned for one resolution domain:
//! an SOA record first, one NS record per known coordinator, and a single
//! A record pointing at the least-loaded host.

pub mod record;
pub mod synth;

pub use record::{RecordType, ZoneRecord};
pub use synth::synthesize_zone;
