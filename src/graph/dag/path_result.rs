//! Distances and parent links from one source, with path reconstruction.

use num_traits::Float;
use serde::Serialize;

use crate::error::{Error, Result};

/// Immutable single-source result: distances, parent links and the source.
///
/// A vertex is reached iff it is the source or has a parent link. Unreached
/// vertices carry an infinite distance, but a reached vertex may too when the
/// weights overflow, so the distance alone never decides reachability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<W> {
    distances: Vec<W>,
    parents: Vec<Option<usize>>,
    source: usize,
}

impl<W: Float> PathResult<W> {
    /// Bundles the arrays after checking they describe the same vertex set.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if the arrays differ in length
    /// - [`Error::SourceOutOfBounds`] if `source` is not a vertex
    /// - [`Error::ParentOutOfBounds`] if a parent link names a missing vertex
    pub fn new(distances: Vec<W>, parents: Vec<Option<usize>>, source: usize) -> Result<Self> {
        if distances.len() != parents.len() {
            return Err(Error::LengthMismatch {
                distances: distances.len(),
                parents: parents.len(),
            });
        }
        let node_count = distances.len();
        if source >= node_count {
            return Err(Error::SourceOutOfBounds {
                vertex: source,
                node_count,
            });
        }
        if let Some((vertex, parent)) = parents
            .iter()
            .enumerate()
            .find_map(|(v, p)| p.filter(|&p| p >= node_count).map(|p| (v, p)))
        {
            return Err(Error::ParentOutOfBounds {
                vertex,
                parent,
                node_count,
            });
        }

        Ok(Self {
            distances,
            parents,
            source,
        })
    }

    /// Distance of every vertex, indexed by vertex.
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Parent link of every vertex, indexed by vertex.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance of `target`.
    ///
    /// # Errors
    /// [`Error::TargetOutOfBounds`] if `target` is not a vertex.
    pub fn distance(&self, target: usize) -> Result<W> {
        self.check_target(target)?;
        Ok(self.distances[target])
    }

    /// Returns `true` if `target` was reached from the source.
    ///
    /// # Errors
    /// [`Error::TargetOutOfBounds`] if `target` is not a vertex.
    pub fn is_reachable(&self, target: usize) -> Result<bool> {
        self.check_target(target)?;
        Ok(self.reached(target))
    }

    /// Reconstructs the path from the source to `target`, both inclusive.
    ///
    /// Returns `Ok(None)` if `target` is unreached, or if its parent links do
    /// not lead back to the source. For the source itself the path is `[source]`.
    ///
    /// # Errors
    /// [`Error::TargetOutOfBounds`] if `target` is not a vertex.
    pub fn path(&self, target: usize) -> Result<Option<Vec<usize>>> {
        if !self.is_reachable(target)? {
            return Ok(None);
        }

        let n = self.node_count();
        let mut path = Vec::new();
        let mut cur = Some(target);
        while let Some(v) = cur {
            path.push(v);
            // A hand-built result may carry a parent cycle.
            if path.len() > n {
                return Ok(None);
            }
            cur = self.parents[v];
        }

        path.reverse();
        Ok((path.first() == Some(&self.source)).then_some(path))
    }

    /// The reached vertex with the greatest finite distance, and its path.
    ///
    /// On a longest-path result this is the critical path from the source.
    /// Ties go to the lowest vertex index.
    pub fn critical_path(&self) -> Option<(W, Vec<usize>)> {
        let mut best: Option<(usize, W)> = None;
        for (v, &d) in self.distances.iter().enumerate() {
            if self.reached(v) && d.is_finite() && best.map_or(true, |(_, bd)| d > bd) {
                best = Some((v, d));
            }
        }
        let (end, len) = best?;
        let path = self.path(end).ok().flatten()?;
        Some((len, path))
    }

    fn reached(&self, v: usize) -> bool {
        v == self.source || self.parents[v].is_some()
    }

    fn check_target(&self, target: usize) -> Result<()> {
        if target < self.node_count() {
            Ok(())
        } else {
            Err(Error::TargetOutOfBounds {
                vertex: target,
                node_count: self.node_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn path_result_rejects_inconsistent_arrays() {
        assert_eq!(
            PathResult::new(vec![0.0, 1.0], vec![None], 0),
            Err(Error::LengthMismatch {
                distances: 2,
                parents: 1
            })
        );
        assert_eq!(
            PathResult::new(vec![0.0], vec![None], 1),
            Err(Error::SourceOutOfBounds {
                vertex: 1,
                node_count: 1
            })
        );
        assert_eq!(
            PathResult::<f64>::new(vec![], vec![], 0),
            Err(Error::SourceOutOfBounds {
                vertex: 0,
                node_count: 0
            })
        );
        assert_eq!(
            PathResult::new(vec![0.0, 1.0], vec![None, Some(4)], 0),
            Err(Error::ParentOutOfBounds {
                vertex: 1,
                parent: 4,
                node_count: 2
            })
        );
    }

    #[test]
    fn path_reconstruction_walks_parents() {
        let r = PathResult::new(
            vec![0.0, 5.0, 3.0, 7.0],
            vec![None, Some(0), Some(0), Some(1)],
            0,
        )
        .unwrap();
        assert_eq!(r.path(3).unwrap(), Some(vec![0, 1, 3]));
        assert_eq!(r.path(2).unwrap(), Some(vec![0, 2]));
        assert_eq!(r.path(0).unwrap(), Some(vec![0]));
        assert_eq!(r.distance(3).unwrap(), 7.0);
        assert_eq!(
            r.path(4),
            Err(Error::TargetOutOfBounds {
                vertex: 4,
                node_count: 4
            })
        );
    }

    #[test]
    fn unreached_targets_have_no_path() {
        let r = PathResult::new(vec![0.0, INF, -INF], vec![None, None, None], 0).unwrap();
        assert_eq!(r.path(1).unwrap(), None);
        assert_eq!(r.path(2).unwrap(), None);
        assert!(!r.is_reachable(1).unwrap());
        assert!(r.is_reachable(0).unwrap());
    }

    #[test]
    fn reachability_follows_parent_links() {
        // Vertex 1 overflowed but is linked; vertex 2 is finite but orphaned.
        let r = PathResult::new(vec![0.0, -INF, 4.0], vec![None, Some(0), None], 0).unwrap();
        assert!(r.is_reachable(1).unwrap());
        assert_eq!(r.path(1).unwrap(), Some(vec![0, 1]));
        assert!(!r.is_reachable(2).unwrap());
        assert_eq!(r.path(2).unwrap(), None);
        assert_eq!(r.critical_path(), Some((0.0, vec![0])));
    }

    #[test]
    fn parent_chain_must_end_at_source() {
        let r = PathResult::new(vec![0.0, 1.0, 2.0], vec![None, None, Some(1)], 0).unwrap();
        assert_eq!(r.path(2).unwrap(), None);
    }

    #[test]
    fn malformed_parent_cycle_does_not_loop() {
        let r = PathResult::new(vec![0.0, 1.0, 2.0], vec![None, Some(2), Some(1)], 0).unwrap();
        assert_eq!(r.path(1).unwrap(), None);
    }

    #[test]
    fn critical_path_picks_farthest_vertex() {
        let r = PathResult::new(
            vec![0.0, 5.0, 3.0, 11.0, -INF],
            vec![None, Some(0), Some(0), Some(2), None],
            0,
        )
        .unwrap();
        assert_eq!(r.critical_path(), Some((11.0, vec![0, 2, 3])));
    }

    #[test]
    fn path_result_serializes() {
        let r = PathResult::new(vec![0.0, 2.0], vec![None, Some(0)], 0).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["source"], 0);
        assert_eq!(json["parents"][1], 0);
    }
}
