//! Decides which chunk starts each visual line, from measured geometry only.

use super::document::Document;
use indexmap::IndexMap;

/// `true` for chunks that start a new visual line.
///
/// A chunk starts a line when its offset is strictly below every chunk before it.
/// Offsets must be in document order.
///
/// ```
/// use sqv::libs::viewer::wrap::line_starts;
/// assert_eq!(
///     line_starts(&[10.0, 10.0, 40.0, 40.0, 70.0]),
///     vec![true, false, true, false, true]
/// );
/// ```
pub fn line_starts(tops: &[f64]) -> Vec<bool> {
    let mut max = f64::NEG_INFINITY;
    tops.iter()
        .map(|&top| {
            if top > max {
                max = top;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Registered viewers, swept in registration order on every layout change.
#[derive(Debug, Clone, Default)]
pub struct ResizeCoordinator {
    viewers: IndexMap<String, String>,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `viewer` mounted in `container`. Re-registering an id only updates its container.
    pub fn register(&mut self, viewer: &str, container: &str) {
        self.viewers.insert(viewer.to_string(), container.to_string());
    }

    pub fn unregister(&mut self, viewer: &str) -> bool {
        self.viewers.shift_remove(viewer).is_some()
    }

    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    pub fn contains(&self, viewer: &str) -> bool {
        self.viewers.contains_key(viewer)
    }

    /// Re-evaluates index visibility of every registered viewer.
    ///
    /// Viewers whose container or chunks can't be found are logged and skipped.
    /// Returns the visibility applied to each processed viewer.
    pub fn on_resize(&self, doc: &mut dyn Document) -> IndexMap<String, Vec<bool>> {
        let mut applied = IndexMap::new();

        for (viewer, container) in &self.viewers {
            let tops = match doc.chunk_tops(container) {
                Ok(tops) => tops,
                Err(err) => {
                    tracing::warn!(viewer = %viewer, "{}", err);
                    continue;
                }
            };

            let starts = line_starts(&tops);
            for (i, &start) in starts.iter().enumerate() {
                doc.set_index_visible(container, i, start);
            }
            tracing::debug!(
                viewer = %viewer,
                lines = starts.iter().filter(|&&s| s).count(),
                "index visibility updated"
            );
            applied.insert(viewer.clone(), starts);
        }

        applied
    }
}
