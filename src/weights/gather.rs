//! Cluster-wide weight gathering.
//!
//! One logical read-only statement is fanned out to every coordinator in
//! the cluster; the resulting rows are pulled one at a time and folded into
//! a fresh [`WeightTable`], followed by this node's own sample. Row
//! transport is behind the [`ClusterQuery`] seam so the hosting system
//! decides how the fan-out is actually executed; timeout and cancellation
//! policy live behind that seam too.
//!
//! Any mid-stream failure abandons the table and fails the round. A zone is
//! never rendered from a partial host set.

use crate::base::error::ZoneError;
use crate::config::ZoneConfig;
use crate::weights::sampler::{sample_weight, SessionStats};
use crate::weights::table::WeightTable;
use std::{future::Future, pin::Pin, sync::Arc};

/// One row of the fan-out result: a host identity and its reported weight.
///
/// `None` models a null column. A null host is a protocol violation; a null
/// weight is tolerated and leaves the entry at weight 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightRow {
    pub host: Option<String>,
    pub weight: Option<i32>,
}

/// Alias for the `Future` type returned by [`RowStream::next_row`].
pub type Rows<'a> = Pin<Box<dyn Future<Output = Result<Option<WeightRow>, ZoneError>> + Send + 'a>>;

/// Pull-based cursor over the fan-out result rows.
///
/// The stream is lazy, finite, and non-restartable; `Ok(None)` signals
/// exhaustion. Rows are consumed strictly sequentially, one `next_row`
/// await at a time.
pub trait RowStream: Send {
    /// Pulls the next row, or `None` once the stream is exhausted.
    fn next_row(&mut self) -> Rows<'_>;
}

/// The remote query executor.
///
/// `fan_out` submits the single weight-reporting statement for execution
/// against every coordinator-role node and returns the unified row stream.
/// Implementations must be thread-safe; the gatherer itself drives each
/// stream from one task only.
pub trait ClusterQuery: Send + Sync {
    /// Dispatches the fan-out and returns a cursor over its rows.
    fn fan_out(&self) -> Result<Box<dyn RowStream>, ZoneError>;
}

/// Blanket implementation for Arc-wrapped executors.
impl<Q: ClusterQuery + ?Sized> ClusterQuery for Arc<Q> {
    fn fan_out(&self) -> Result<Box<dyn RowStream>, ZoneError> {
        (**self).fan_out()
    }
}

/// Produces the fully populated weight table for one zone round.
///
/// Drives the fan-out cursor to exhaustion, recording each reported host,
/// then folds in the local sample under the configured host identity. The
/// caller owns the returned table and drops it once the synthesizer has
/// consumed it.
///
/// Only a freshly created entry takes the reported weight; later reports
/// for the same host within the round are ignored and keep the first-seen
/// value. The local fold is skipped when no local host identity is
/// configured.
pub async fn gather_weights(
    config: &ZoneConfig,
    query: &dyn ClusterQuery,
    stats: &dyn SessionStats,
) -> Result<WeightTable, ZoneError> {
    let mut table = WeightTable::with_capacity(config.expected_coordinators);

    let mut rows = query.fan_out()?;
    while let Some(row) = rows.next_row().await? {
        let host = row.host.ok_or(ZoneError::NullHostIdentity)?;

        let (entry, created) = table.get_or_create(&host);
        if created {
            if let Some(weight) = row.weight {
                entry.set_weight(weight);
            }
            tracing::trace!(host = %host, weight = entry.weight(), "recorded peer weight");
        } else {
            tracing::trace!(host = %host, "duplicate weight report ignored");
        }
    }

    // Fold in the local node after the remote rows are exhausted. The
    // fan-out targets the other coordinators, so this is normally what
    // guarantees the table is non-empty.
    match config.host.as_deref() {
        Some(host) => {
            let (entry, created) = table.get_or_create(host);
            if created {
                entry.set_weight(sample_weight(stats)?);
            }
        }
        None => tracing::debug!("local host identity unset, skipping local fold"),
    }

    tracing::debug!(hosts = table.len(), "weight gather complete");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecStream {
        rows: std::vec::IntoIter<Result<WeightRow, ZoneError>>,
    }

    impl RowStream for VecStream {
        fn next_row(&mut self) -> Rows<'_> {
            let next = self.rows.next();
            Box::pin(async move { next.transpose() })
        }
    }

    struct MockQuery {
        rows: Vec<Result<WeightRow, ZoneError>>,
    }

    impl MockQuery {
        fn reporting(rows: &[(&str, i32)]) -> Self {
            Self {
                rows: rows
                    .iter()
                    .map(|(host, weight)| {
                        Ok(WeightRow {
                            host: Some(host.to_string()),
                            weight: Some(*weight),
                        })
                    })
                    .collect(),
            }
        }
    }

    impl ClusterQuery for MockQuery {
        fn fan_out(&self) -> Result<Box<dyn RowStream>, ZoneError> {
            Ok(Box::new(VecStream {
                rows: self.rows.clone().into_iter(),
            }))
        }
    }

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

    fn local_config() -> ZoneConfig {
        ZoneConfig::default().with_host("node0")
    }

    #[tokio::test]
    async fn test_gathers_peers_and_local() {
        let query = MockQuery::reporting(&[("node1", 30), ("node2", 10)]);
        let stats = FixedStats { active: 20, max: 100 };

        let table = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap();

        let entries: Vec<_> = table.iter().map(|e| (e.host().to_string(), e.weight())).collect();
        assert_eq!(
            entries,
            [
                ("node1".to_string(), 30),
                ("node2".to_string(), 10),
                ("node0".to_string(), 20),
            ]
        );
    }

    #[tokio::test]
    async fn test_null_host_is_fatal() {
        let query = MockQuery {
            rows: vec![Ok(WeightRow {
                host: None,
                weight: Some(10),
            })],
        };
        let stats = FixedStats { active: 0, max: 100 };

        let err = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap_err();
        assert_eq!(err, ZoneError::NullHostIdentity);
    }

    #[tokio::test]
    async fn test_null_weight_leaves_zero() {
        let query = MockQuery {
            rows: vec![Ok(WeightRow {
                host: Some("node1".to_string()),
                weight: None,
            })],
        };
        let stats = FixedStats { active: 0, max: 100 };

        let table = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap();
        let entry = table.iter().find(|e| e.host() == "node1").unwrap();
        assert_eq!(entry.weight(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_report_keeps_first_weight() {
        let query = MockQuery::reporting(&[("node1", 30), ("node1", 80)]);
        let stats = FixedStats { active: 0, max: 100 };

        let table = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap();

        assert_eq!(table.len(), 2); // node1 + local node0
        let entry = table.iter().find(|e| e.host() == "node1").unwrap();
        assert_eq!(entry.weight(), 30);
    }

    #[tokio::test]
    async fn test_remote_error_aborts_round() {
        let query = MockQuery {
            rows: vec![
                Ok(WeightRow {
                    host: Some("node1".to_string()),
                    weight: Some(30),
                }),
                Err(ZoneError::remote("peer unreachable")),
            ],
        };
        let stats = FixedStats { active: 0, max: 100 };

        let err = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap_err();
        assert!(matches!(err, ZoneError::Remote { .. }));
    }

    #[tokio::test]
    async fn test_local_host_already_reported_keeps_remote_weight() {
        // Not expected from a real fan-out, but the fold must not clobber
        // an existing entry.
        let query = MockQuery::reporting(&[("node0", 70)]);
        let stats = FixedStats { active: 20, max: 100 };

        let table = gather_weights(&local_config(), &query, &stats)
            .await
            .unwrap();

        assert_eq!(table.len(), 1);
        let entry = table.iter().next().unwrap();
        assert_eq!(entry.weight(), 70);
    }

    #[tokio::test]
    async fn test_unset_local_host_skips_fold() {
        let query = MockQuery::reporting(&[("node1", 30)]);
        let stats = FixedStats { active: 20, max: 100 };

        let table = gather_weights(&ZoneConfig::default(), &query, &stats)
            .await
            .unwrap();
        assert_eq!(table.len(), 1);
    }
}
