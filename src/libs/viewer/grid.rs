//! Assembles chunks from the residue matrix.

use super::cell::{classify, max_len, Row};
use super::labels::{generate_labels, LabelColumn, LabelSet};
use super::node::{Card, Chunk, Grid, IndexBlock, OneLine};
use super::options::{DisplayOptions, IndexMode};
use super::top_index::add_top_index;

pub struct GridBuilder<'a> {
    matrix: &'a [Row],
    labels: &'a LabelSet,
    options: &'a DisplayOptions,
    viewer: &'a str,
}

/// Length of the longest row, rounded up to a multiple of `chunk_size` when chunking.
///
/// ```
/// use sqv::libs::viewer::grid::padded_len;
/// assert_eq!(padded_len(5, 3), 6);
/// assert_eq!(padded_len(6, 3), 6);
/// assert_eq!(padded_len(5, 0), 5);
/// ```
pub fn padded_len(len: usize, chunk_size: usize) -> usize {
    if chunk_size > 0 {
        len + (chunk_size - len % chunk_size) % chunk_size
    } else {
        len
    }
}

impl<'a> GridBuilder<'a> {
    pub fn new(
        matrix: &'a [Row],
        labels: &'a LabelSet,
        options: &'a DisplayOptions,
        viewer: &'a str,
    ) -> Self {
        Self {
            matrix,
            labels,
            options,
            viewer,
        }
    }

    pub fn build(&self) -> Grid {
        let opt = self.options;
        let chunk_size = opt.chunk_size;

        let max_top = max_len(self.matrix);
        let index_width = opt.index_width(max_top);
        let max_idx = padded_len(max_top, chunk_size);

        let label_column = generate_labels(
            None,
            self.labels,
            opt.top_indexes,
            None,
            &index_width,
            true,
            self.matrix,
        );

        let mut chunks = vec![];
        let mut cards = vec![];
        let mut start = 1;
        let mut idx_num = 0;
        let mut idx = None;

        for x in 1..=max_idx {
            let cells = self
                .matrix
                .iter()
                .enumerate()
                .map(|(y, row)| classify(row.get(x), x, y, self.viewer))
                .collect();
            cards.push(Card {
                top: add_top_index(opt.top_indexes, chunk_size, x, max_top),
                cells,
            });

            if chunk_size > 0 && x % chunk_size == 0 {
                // the top index row already numbers the chunks
                if !opt.top_indexes {
                    idx_num += chunk_size;
                    idx = Some(idx_num - (chunk_size - 1));
                }

                chunks.push(Chunk {
                    start,
                    index: IndexBlock {
                        hidden: true,
                        columns: self.index_columns(idx, &label_column, &index_width),
                    },
                    cards: std::mem::take(&mut cards),
                    last: x == max_idx,
                });
                start = x + 1;
            }
        }

        // unchunked grids are a single block
        if !cards.is_empty() {
            chunks.push(Chunk {
                start,
                index: IndexBlock {
                    hidden: true,
                    columns: label_column.iter().cloned().collect(),
                },
                cards,
                last: true,
            });
        }

        Grid {
            viewer: self.viewer.to_string(),
            chunks,
            one_line: if opt.one_line_setting {
                Some(OneLine {
                    labels: label_column,
                    width: opt.one_line_width.clone(),
                })
            } else {
                None
            },
            font_size: opt.font_size.clone(),
            space_size: opt.space_size,
            rows: self.matrix.len(),
            top_indexes: opt.top_indexes,
        }
    }

    fn index_columns(
        &self,
        idx: Option<usize>,
        label_column: &Option<LabelColumn>,
        index_width: &str,
    ) -> Vec<LabelColumn> {
        let opt = self.options;
        let gap_chunk = match opt.index_mode() {
            IndexMode::Labels => return label_column.iter().cloned().collect(),
            IndexMode::Plain => None,
            IndexMode::GapAware => Some(opt.chunk_size),
        };

        // no counter runs while top indexes are shown
        let lateral = idx.and_then(|i| {
            generate_labels(
                Some(i),
                self.labels,
                opt.top_indexes,
                gap_chunk,
                index_width,
                false,
                self.matrix,
            )
        });

        if opt.one_line_setting {
            lateral.into_iter().collect()
        } else {
            label_column.iter().cloned().chain(lateral).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::viewer::cell::{Classified, ResidueCell};
    use crate::libs::viewer::labels::LabelEntry;
    use crate::libs::viewer::top_index::TopIndex;

    fn fixture() -> (Vec<Row>, LabelSet) {
        let matrix = vec![Row::from_text("AC-GT"), Row::from_text("ACGGT")];
        let mut labels = LabelSet::new();
        labels.push("S1", 1, "first");
        labels.push("S2", 1, "second");
        (matrix, labels)
    }

    fn index_at(chunk: &Chunk, column: usize, row: usize) -> LabelEntry {
        chunk.index.columns[column].entries[row].clone()
    }

    #[test]
    fn test_padding_and_chunks() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 3,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();

        assert_eq!(grid.chunks.len(), 2);
        assert_eq!(grid.chunks[0].cards.len(), 3);
        assert_eq!(grid.chunks[1].start, 4);
        assert!(grid.chunks[1].last);
        assert!(!grid.chunks[0].last);

        // position 6 is padding
        let card = &grid.chunks[1].cards[2];
        assert_eq!(card.cells, vec![Classified::Filler, Classified::Filler]);
        assert!(grid.chunks.iter().all(|c| c.index.hidden));
    }

    #[test]
    fn test_chunk_count() {
        let matrix = vec![Row::from_text(&"A".repeat(23))];
        let labels = LabelSet::new();
        for (chunk_size, expected) in [(1, 23), (5, 5), (10, 3), (23, 1), (30, 1), (0, 1)] {
            let opt = DisplayOptions {
                chunk_size,
                ..Default::default()
            };
            let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();
            assert_eq!(grid.chunks.len(), expected, "chunk_size {}", chunk_size);

            let positions: usize = grid.chunks.iter().map(|c| c.cards.len()).sum();
            assert_eq!(positions, padded_len(23, chunk_size));
        }
    }

    #[test]
    fn test_gap_aware_indexes() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 3,
            lateral_indexes_gap: true,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();

        // labels, then indexes of each chunk's first position
        assert_eq!(grid.chunks[0].index.columns.len(), 2);
        assert_eq!(index_at(&grid.chunks[0], 1, 0), LabelEntry::Index(1));
        // row 0 at position 4: A, C and G, the gap is skipped
        assert_eq!(index_at(&grid.chunks[1], 1, 0), LabelEntry::Index(3));
        assert_eq!(index_at(&grid.chunks[1], 1, 1), LabelEntry::Index(4));
    }

    #[test]
    fn test_plain_indexes_win() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 3,
            lateral_indexes: true,
            lateral_indexes_gap: true,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();
        assert_eq!(index_at(&grid.chunks[1], 1, 0), LabelEntry::Index(4));
    }

    #[test]
    fn test_top_indexes_suppress_counter() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 3,
            top_indexes: true,
            lateral_indexes: true,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();

        for chunk in &grid.chunks {
            assert_eq!(chunk.index.columns.len(), 1);
            assert!(chunk.index.columns[0].top_placeholder);
        }
        let tops: Vec<_> = grid
            .chunks
            .iter()
            .flat_map(|c| c.cards.iter().map(|card| card.top))
            .collect();
        assert_eq!(tops[2], Some(TopIndex::Numeral(3)));
        // 6 is past the unpadded length
        assert_eq!(tops[5], Some(TopIndex::Placeholder));
    }

    #[test]
    fn test_unchunked() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 0,
            lateral_indexes_gap: true,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();

        assert_eq!(grid.chunks.len(), 1);
        assert_eq!(grid.chunks[0].cards.len(), 5);
        // labels only, no lateral counter
        assert_eq!(grid.chunks[0].index.columns.len(), 1);
        assert!(matches!(
            index_at(&grid.chunks[0], 0, 0),
            LabelEntry::Label { .. }
        ));
    }

    #[test]
    fn test_one_line() {
        let (matrix, labels) = fixture();
        let opt = DisplayOptions {
            chunk_size: 3,
            lateral_indexes: true,
            one_line_setting: true,
            ..Default::default()
        };
        let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();

        let one_line = grid.one_line.clone().unwrap();
        assert_eq!(one_line.width, "300px");
        assert_eq!(one_line.labels.unwrap().entries.len(), 2);
        assert_eq!(grid.chunks[0].index.columns.len(), 1);
        assert_eq!(index_at(&grid.chunks[0], 0, 1), LabelEntry::Index(1));
    }

    #[test]
    fn test_icon_row() {
        let (mut matrix, labels) = fixture();
        let mut icons = Row::new();
        icons.insert(2, ResidueCell::icon("<svg/>"));
        matrix.insert(1, icons);

        for gap in [false, true] {
            let opt = DisplayOptions {
                chunk_size: 2,
                lateral_indexes: !gap,
                lateral_indexes_gap: gap,
                ..Default::default()
            };
            let grid = GridBuilder::new(&matrix, &labels, &opt, "sqv").build();
            for chunk in &grid.chunks {
                for column in &chunk.index.columns {
                    assert_eq!(column.entries[1], LabelEntry::Blank);
                }
            }
            assert!(matches!(
                grid.chunks[0].cards[1].cells[1],
                Classified::NonInteractive { .. }
            ));
        }
    }

    #[test]
    fn test_empty_matrix() {
        let opt = DisplayOptions::default();
        let grid = GridBuilder::new(&[], &LabelSet::new(), &opt, "sqv").build();
        assert!(grid.is_empty());
    }
}
