//! Plain-text layout of a render tree, one block of lines per visual line.

use super::cell::Classified;
use super::labels::{LabelColumn, LabelEntry};
use super::node::{Chunk, Grid};
use super::top_index::TopIndex;
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

/// Renders `grid`, given the visual line of each chunk (see `flow_lines`).
pub fn render_text(grid: &Grid, lines: &[usize]) -> String {
    let height = grid.line_height();
    let space = grid.space();

    let mut blocks = vec![];
    for (_, group) in &grid.chunks.iter().zip(lines).chunk_by(|&(_, &line)| line) {
        let mut buf = vec![String::new(); height];

        if let Some(labels) = grid.one_line.as_ref().and_then(|o| o.labels.as_ref()) {
            write_column(&mut buf, grid, labels, true);
        }
        for (chunk, _) in group {
            write_chunk(&mut buf, grid, chunk);
            for line in buf.iter_mut() {
                line.push_str(&" ".repeat(space));
            }
        }

        blocks.push(buf.iter().map(|l| l.trim_end()).join("\n"));
    }

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn write_chunk(buf: &mut [String], grid: &Grid, chunk: &Chunk) {
    for column in &chunk.index.columns {
        write_column(buf, grid, column, !chunk.index.hidden);
    }

    let top = usize::from(grid.top_indexes);
    if top == 1 {
        let mut header = vec![' '; chunk.cards.len()];
        for (i, card) in chunk.cards.iter().enumerate() {
            if let Some(TopIndex::Numeral(x)) = card.top {
                // numerals end at their own column
                let digits: Vec<char> = x.to_string().chars().collect();
                let first = (i + 1).saturating_sub(digits.len());
                let skip = digits.len() - (i + 1 - first);
                for (j, ch) in digits.into_iter().skip(skip).enumerate() {
                    header[first + j] = ch;
                }
            }
        }
        buf[0].extend(header);
    }

    for (y, line) in buf.iter_mut().skip(top).enumerate() {
        for card in &chunk.cards {
            line.push(match card.cells.get(y) {
                Some(Classified::Interactive { text, .. }) => text.chars().next().unwrap_or(' '),
                Some(Classified::NonInteractive { .. }) => '*',
                Some(Classified::Filler) | None => ' ',
            });
        }
    }
}

fn write_column(buf: &mut [String], grid: &Grid, column: &LabelColumn, visible: bool) {
    let width = column.text_width();
    let top = usize::from(grid.top_indexes);

    for (r, line) in buf.iter_mut().enumerate() {
        let entry = if r < top {
            None
        } else {
            column.entries.get(r - top)
        };
        let text = match entry {
            _ if !visible => String::new(),
            Some(LabelEntry::Label { text, .. }) => text.clone(),
            Some(LabelEntry::Index(i)) => align_right(&i.to_string(), width),
            Some(LabelEntry::Blank) | None => String::new(),
        };
        line.push_str(&align_left(&text, width));
        line.push(' ');
    }
}

/// Pads on the right up to `width` terminal cells.
fn align_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// Pads on the left up to `width` terminal cells.
fn align_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}
