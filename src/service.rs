//! The externally invocable operations.
//!
//! Two entry points exist: [`local_weight`], the per-node endpoint each
//! coordinator serves to the fan-out, and [`zone`], the top-level request
//! that gathers cluster weights and renders the record set. Everything else
//! in the crate is internal to these two.

use crate::base::error::ZoneError;
use crate::config::ZoneConfig;
use crate::weights::gather::{gather_weights, ClusterQuery, WeightRow};
use crate::weights::sampler::{sample_weight, SessionStats};
use crate::zone::record::ZoneRecord;
use crate::zone::synth::synthesize_zone;

/// The role a cluster node plays.
///
/// Only coordinators sample their own load and participate in the fan-out;
/// data nodes reject the weight endpoint outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Coordinator,
    DataNode,
}

/// Reports this node's host identity and current load weight.
///
/// This is the endpoint the fan-out invokes on every coordinator. It
/// returns exactly one row: the configured host (null when unset) and the
/// sampled weight. Invocation on a data node is a protocol violation.
pub fn local_weight(
    config: &ZoneConfig,
    stats: &dyn SessionStats,
    role: NodeRole,
) -> Result<WeightRow, ZoneError> {
    if role == NodeRole::DataNode {
        return Err(ZoneError::InvalidInvocation);
    }

    Ok(WeightRow {
        host: config.host.clone(),
        weight: Some(sample_weight(stats)?),
    })
}

/// Renders the zone for one resolution request.
///
/// Runs the gatherer, hands the populated weight table to the synthesizer,
/// and returns the ordered record set: SOA, one NS per known host, and one
/// A record naming the least-loaded coordinator. The table lives only for
/// this call; it is dropped on both the success and the error path.
pub async fn zone(
    config: &ZoneConfig,
    query: &dyn ClusterQuery,
    stats: &dyn SessionStats,
) -> Result<Vec<ZoneRecord>, ZoneError> {
    let table = gather_weights(config, query, stats).await?;
    synthesize_zone(config, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStats {
        active: u32,
        max: u32,
    }

    impl SessionStats for FixedStats {
        fn active_sessions(&self) -> u32 {
            self.active
        }

        fn max_sessions(&self) -> u32 {
            self.max
        }
    }

    #[test]
    fn test_local_weight_on_coordinator() {
        let config = ZoneConfig::default().with_host("node0");
        let stats = FixedStats { active: 50, max: 100 };

        let row = local_weight(&config, &stats, NodeRole::Coordinator).unwrap();
        assert_eq!(row.host.as_deref(), Some("node0"));
        assert_eq!(row.weight, Some(50));
    }

    #[test]
    fn test_local_weight_null_host_when_unset() {
        let stats = FixedStats { active: 0, max: 100 };

        let row = local_weight(&ZoneConfig::default(), &stats, NodeRole::Coordinator).unwrap();
        assert_eq!(row.host, None);
        assert_eq!(row.weight, Some(0));
    }

    #[test]
    fn test_local_weight_rejects_data_node() {
        let config = ZoneConfig::default().with_host("node0");
        let stats = FixedStats { active: 50, max: 100 };

        let err = local_weight(&config, &stats, NodeRole::DataNode).unwrap_err();
        assert_eq!(err, ZoneError::InvalidInvocation);
    }
}
