//! Render tree produced by the grid builder and consumed by the renderers.

use super::cell::Classified;
use super::labels::LabelColumn;
use super::top_index::TopIndex;

/// One column of the grid: optional header plus one cell per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub top: Option<TopIndex>,
    pub cells: Vec<Classified>,
}

/// Labels and lateral indexes shown left of a chunk's cards.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexBlock {
    /// Hidden unless the chunk starts a visual line
    pub hidden: bool,
    pub columns: Vec<LabelColumn>,
}

impl IndexBlock {
    /// Terminal cells reserved by the block, one separator per column.
    pub fn text_width(&self) -> usize {
        self.columns.iter().map(|c| c.text_width() + 1).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// First position (1-based) covered by the chunk
    pub start: usize,
    pub index: IndexBlock,
    pub cards: Vec<Card>,
    /// The last chunk gets a trailing margin instead of padding
    pub last: bool,
}

impl Chunk {
    /// Width in terminal cells. Hidden indexes still reserve their room.
    pub fn width(&self, space: usize) -> usize {
        self.index.text_width() + self.cards.len() + space
    }
}

/// Single scrolling line: labels drawn once, left of a horizontal scroller.
#[derive(Debug, Clone, PartialEq)]
pub struct OneLine {
    pub labels: Option<LabelColumn>,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub viewer: String,
    pub chunks: Vec<Chunk>,
    pub one_line: Option<OneLine>,
    pub font_size: String,
    pub space_size: f64,
    pub rows: usize,
    pub top_indexes: bool,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Lines of text taken by one visual line of chunks.
    pub fn line_height(&self) -> usize {
        self.rows + usize::from(self.top_indexes)
    }

    /// Space between chunks, in whole characters.
    pub fn space(&self) -> usize {
        self.space_size.round().max(0.0) as usize
    }

    pub fn set_index_visible(&mut self, i: usize, visible: bool) {
        if let Some(chunk) = self.chunks.get_mut(i) {
            chunk.index.hidden = !visible;
        }
    }

    pub fn index_visibility(&self) -> Vec<bool> {
        self.chunks.iter().map(|c| !c.index.hidden).collect()
    }
}
