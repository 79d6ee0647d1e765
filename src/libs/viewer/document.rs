//! Host document abstraction and an in-memory flow-layout implementation.

use super::error::ViewerError;
use super::node::Grid;
use indexmap::IndexMap;

/// Where grids are mounted and measured.
pub trait Document {
    fn has_container(&self, container: &str) -> bool;

    /// Replaces the container's content with `grid`.
    fn mount(&mut self, container: &str, grid: Grid) -> Result<(), ViewerError>;

    /// Vertical offset of every chunk in `container`, in document order.
    fn chunk_tops(&self, container: &str) -> Result<Vec<f64>, ViewerError>;

    fn set_index_visible(&mut self, container: &str, chunk: usize, visible: bool);
}

#[derive(Debug, Clone)]
struct Container {
    /// Available width, in character columns
    width: usize,
    grid: Option<Grid>,
}

/// Lays chunks out like inline blocks: left to right, wrapping when the next chunk overflows.
#[derive(Debug, Clone, Default)]
pub struct FlowDocument {
    containers: IndexMap<String, Container>,
}

/// Visual line of every chunk of `grid` inside a container `width` characters wide.
///
/// One-line grids never wrap. A chunk wider than the container still gets a line of its own.
pub fn flow_lines(grid: &Grid, width: usize) -> Vec<usize> {
    if grid.one_line.is_some() {
        return vec![0; grid.chunks.len()];
    }

    let space = grid.space();
    let mut lines = Vec::with_capacity(grid.chunks.len());
    let mut line = 0;
    let mut filled = 0;
    for chunk in &grid.chunks {
        let w = chunk.width(space);
        if filled > 0 && filled + w > width {
            line += 1;
            filled = 0;
        }
        lines.push(line);
        filled += w;
    }
    lines
}

impl FlowDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self, container: &str, width: usize) {
        self.containers.insert(container.to_string(), Container { width, grid: None });
    }

    /// Changes a container's width. Call the resize sweep afterwards.
    pub fn resize(&mut self, container: &str, width: usize) {
        if let Some(c) = self.containers.get_mut(container) {
            c.width = width;
        }
    }

    pub fn width(&self, container: &str) -> Option<usize> {
        self.containers.get(container).map(|c| c.width)
    }

    pub fn grid(&self, container: &str) -> Option<&Grid> {
        self.containers.get(container).and_then(|c| c.grid.as_ref())
    }
}

impl Document for FlowDocument {
    fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    fn mount(&mut self, container: &str, grid: Grid) -> Result<(), ViewerError> {
        let c = self
            .containers
            .get_mut(container)
            .ok_or_else(|| ViewerError::MissingContainer(container.to_string()))?;
        c.grid = Some(grid);
        Ok(())
    }

    fn chunk_tops(&self, container: &str) -> Result<Vec<f64>, ViewerError> {
        let c = self
            .containers
            .get(container)
            .ok_or_else(|| ViewerError::MissingContainer(container.to_string()))?;
        let grid = match &c.grid {
            Some(grid) if !grid.is_empty() => grid,
            _ => return Err(ViewerError::MissingChunkElements(container.to_string())),
        };

        let height = grid.line_height() as f64;
        Ok(flow_lines(grid, c.width)
            .into_iter()
            .map(|line| line as f64 * height)
            .collect())
    }

    fn set_index_visible(&mut self, container: &str, chunk: usize, visible: bool) {
        if let Some(grid) = self.containers.get_mut(container).and_then(|c| c.grid.as_mut()) {
            grid.set_index_visible(chunk, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::viewer::cell::Row;
    use crate::libs::viewer::grid::GridBuilder;
    use crate::libs::viewer::labels::LabelSet;
    use crate::libs::viewer::options::DisplayOptions;

    fn grid(one_line: bool) -> Grid {
        // 4 chunks of 5 columns, each 5 + 1 space wide
        let matrix = vec![Row::from_text(&"ACGT".repeat(5))];
        let opt = DisplayOptions {
            chunk_size: 5,
            one_line_setting: one_line,
            ..Default::default()
        };
        GridBuilder::new(&matrix, &LabelSet::new(), &opt, "v").build()
    }

    #[test]
    fn test_flow_lines() {
        let grid = grid(false);
        assert_eq!(flow_lines(&grid, 12), vec![0, 0, 1, 1]);
        assert_eq!(flow_lines(&grid, 20), vec![0, 0, 0, 1]);
        assert_eq!(flow_lines(&grid, 1), vec![0, 1, 2, 3]);
        assert_eq!(flow_lines(&grid, 100), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_one_line_never_wraps() {
        assert_eq!(flow_lines(&grid(true), 1), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_chunk_tops() {
        let mut doc = FlowDocument::new();
        doc.add_container("body", 12);

        assert_eq!(
            doc.chunk_tops("body"),
            Err(ViewerError::MissingChunkElements("body".to_string()))
        );
        assert_eq!(
            doc.chunk_tops("nope"),
            Err(ViewerError::MissingContainer("nope".to_string()))
        );

        doc.mount("body", grid(false)).unwrap();
        assert_eq!(doc.chunk_tops("body").unwrap(), vec![0.0, 0.0, 1.0, 1.0]);

        doc.resize("body", 6);
        assert_eq!(doc.chunk_tops("body").unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
    }
}
