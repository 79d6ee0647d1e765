//! Chunked, indexed grids of aligned sequences.
//!
//! Data flows one way: a residue [`Matrix`](cell::Matrix), a [`LabelSet`](labels::LabelSet)
//! and [`DisplayOptions`](options::DisplayOptions) go into the
//! [`GridBuilder`](grid::GridBuilder), which produces a [`Grid`](node::Grid). The grid is
//! mounted into a [`Document`](document::Document) and the
//! [`ResizeCoordinator`](wrap::ResizeCoordinator) then reveals the lateral index of every
//! chunk that starts a visual line.

pub mod cell;
pub mod document;
pub mod error;
pub mod grid;
pub mod html;
pub mod labels;
pub mod node;
pub mod options;
pub mod text;
pub mod top_index;
pub mod wrap;

pub use cell::{CellKind, Matrix, ResidueCell, Row};
pub use document::{Document, FlowDocument};
pub use error::ViewerError;
pub use grid::GridBuilder;
pub use labels::LabelSet;
pub use node::Grid;
pub use options::DisplayOptions;
pub use wrap::ResizeCoordinator;

/// A viewer bound to one container of the host document.
#[derive(Debug, Clone)]
pub struct SequenceViewer {
    container: String,
}

impl SequenceViewer {
    pub fn new(container: &str) -> Self {
        Self {
            container: container.to_string(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Builds the grid, mounts it and re-runs the resize sweep for every registered viewer.
    ///
    /// Never fails: a missing container is logged and leaves both the document and the
    /// coordinator untouched.
    /// Returns whether the grid was mounted.
    pub fn draw(
        &self,
        doc: &mut dyn Document,
        coordinator: &mut ResizeCoordinator,
        matrix: &[Row],
        labels: &LabelSet,
        options: &DisplayOptions,
    ) -> bool {
        if !doc.has_container(&self.container) {
            tracing::warn!("{}", ViewerError::MissingContainer(self.container.clone()));
            return false;
        }

        let grid = GridBuilder::new(matrix, labels, options, &self.container).build();
        tracing::debug!(
            viewer = %self.container,
            chunks = grid.chunks.len(),
            rows = grid.rows,
            "grid built"
        );
        if let Err(err) = doc.mount(&self.container, grid) {
            tracing::warn!("{}", err);
            return false;
        }

        coordinator.register(&self.container, &self.container);
        coordinator.on_resize(doc);
        true
    }

    /// Stops tracking this viewer on layout changes.
    pub fn teardown(&self, coordinator: &mut ResizeCoordinator) {
        coordinator.unregister(&self.container);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Row>, LabelSet) {
        let matrix = vec![Row::from_text("AC-GT"), Row::from_text("ACGGT")];
        let mut labels = LabelSet::new();
        labels.push("S1", 1, "");
        labels.push("S2", 1, "");
        (matrix, labels)
    }

    #[test]
    fn test_draw_and_resize() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 1,
            lateral_indexes_gap: true,
            ..Default::default()
        };

        let mut doc = FlowDocument::new();
        doc.add_container("a", 1000);
        doc.add_container("b", 1000);
        let mut coordinator = ResizeCoordinator::new();

        let a = SequenceViewer::new("a");
        let b = SequenceViewer::new("b");
        assert!(a.draw(&mut doc, &mut coordinator, &matrix, &labels, &opt));
        assert!(b.draw(&mut doc, &mut coordinator, &matrix, &labels, &opt));
        // redraw does not duplicate the registration
        assert!(a.draw(&mut doc, &mut coordinator, &matrix, &labels, &opt));
        assert_eq!(coordinator.len(), 2);

        // everything fits on one line
        let visible = doc.grid("a").unwrap().index_visibility();
        assert_eq!(visible, vec![true, false, false, false, false]);

        // each chunk is "S1 " + "1 " + 1 card + 1 space = 7 wide
        doc.resize("a", 14);
        let applied = coordinator.on_resize(&mut doc);
        assert_eq!(applied["a"], vec![true, false, true, false, true]);
        assert_eq!(applied["b"], vec![true, false, false, false, false]);
        assert_eq!(
            doc.grid("a").unwrap().index_visibility(),
            vec![true, false, true, false, true]
        );

        b.teardown(&mut coordinator);
        assert_eq!(coordinator.on_resize(&mut doc).len(), 1);
    }

    #[test]
    fn test_missing_container() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions::default();

        let mut doc = FlowDocument::new();
        doc.add_container("a", 80);
        let mut coordinator = ResizeCoordinator::new();

        let ghost = SequenceViewer::new("ghost");
        assert!(!ghost.draw(&mut doc, &mut coordinator, &matrix, &labels, &opt));
        assert!(!coordinator.contains("ghost"));
        assert!(coordinator.is_empty());

        let a = SequenceViewer::new("a");
        assert!(a.draw(&mut doc, &mut coordinator, &matrix, &labels, &opt));
        let applied = coordinator.on_resize(&mut doc);
        assert_eq!(applied.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_empty_matrix() {
        let mut doc = FlowDocument::new();
        doc.add_container("a", 80);
        let mut coordinator = ResizeCoordinator::new();

        let a = SequenceViewer::new("a");
        let opt = DisplayOptions::default();
        assert!(a.draw(&mut doc, &mut coordinator, &[], &LabelSet::new(), &opt));
        assert!(doc.grid("a").unwrap().is_empty());
        assert!(coordinator.on_resize(&mut doc).is_empty());
    }
}
