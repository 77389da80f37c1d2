//! Load-weight sampling, gathering, and the per-round weight table.
//!
//! A weight is a 0-100 load indicator; lower means less loaded and more
//! preferred. Each zone-generation round builds one [`table::WeightTable`]
//! from the cluster-wide fan-out plus the local sample, hands it to the
//! synthesizer, and drops it.

pub mod gather;
pub mod sampler;
pub mod table;

pub use gather::{gather_weights, ClusterQuery, RowStream, Rows, WeightRow};
pub use sampler::{sample_weight, SessionStats};
pub use table::{HostName, WeightEntry, WeightTable};
