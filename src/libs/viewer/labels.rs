//! Per-chunk label and lateral index columns.

use super::cell::Row;
use unicode_width::UnicodeWidthStr;

/// Names, first residue numbers and tooltips, one entry per non-icon row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    pub labels: Vec<String>,
    pub start_indexes: Vec<i64>,
    pub tooltips: Vec<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str, start: i64, tooltip: &str) {
        self.labels.push(label.to_string());
        self.start_indexes.push(start);
        self.tooltips.push(tooltip.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn start(&self, i: usize) -> i64 {
        self.start_indexes.get(i).copied().unwrap_or(1)
    }
}

/// One slot of a label column, aligned with a matrix row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEntry {
    /// Icon rows carry no label or index
    Blank,
    Label {
        text: String,
        tooltip: Option<String>,
    },
    Index(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelColumn {
    /// Hidden leading slot lining up with the top index row
    pub top_placeholder: bool,
    /// Reserved width for index columns
    pub width: Option<String>,
    pub entries: Vec<LabelEntry>,
}

impl LabelColumn {
    /// Widest entry, in terminal cells.
    pub fn text_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                LabelEntry::Blank => 0,
                LabelEntry::Label { text, .. } => text.width(),
                LabelEntry::Index(i) => i.to_string().len(),
            })
            .max()
            .unwrap_or(0)
    }
}

/// Builds one label column for the whole matrix.
///
/// * `idx == None` - label mode, names (plus tooltips when `tooltips` is set)
/// * `idx == Some(i)` and `chunk_size == None` - plain index `start - 1 + i`
/// * `idx == Some(i)` and `chunk_size == Some(_)` - gap-aware index,
///   `start - 1 + residues at positions <= i`
///
/// Rows containing an icon anywhere get a blank entry in every mode and don't consume a label.
/// Returns `None` when there are no labels at all.
pub fn generate_labels(
    idx: Option<usize>,
    label_set: &LabelSet,
    top_indexes: bool,
    chunk_size: Option<usize>,
    width: &str,
    tooltips: bool,
    matrix: &[Row],
) -> Option<LabelColumn> {
    if label_set.is_empty() {
        return None;
    }

    let mut entries = Vec::with_capacity(matrix.len());
    let mut count = 0;
    for row in matrix {
        if row.has_icon() {
            entries.push(LabelEntry::Blank);
            continue;
        }

        let entry = match (idx, chunk_size) {
            (None, _) => LabelEntry::Label {
                text: label_set.labels.get(count).cloned().unwrap_or_default(),
                tooltip: if tooltips {
                    label_set.tooltips.get(count).cloned()
                } else {
                    None
                },
            },
            (Some(i), None) => LabelEntry::Index(label_set.start(count) - 1 + i as i64),
            (Some(i), Some(_)) => {
                LabelEntry::Index(label_set.start(count) - 1 + row.count_residues(i) as i64)
            }
        };
        entries.push(entry);
        count += 1;
    }

    Some(LabelColumn {
        top_placeholder: top_indexes,
        width: idx.map(|_| width.to_string()),
        entries,
    })
}
