use std::collections::BTreeMap;

/// Character marking an alignment gap. Gaps are drawn but never counted by gap-aware indexes.
pub const GAP: &str = "-";

/// What a single grid position holds, as produced by data preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// A residue, including the gap character
    Residue(String),
    /// Pre-resolved icon markup (e.g. an inline svg)
    Icon(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueCell {
    pub kind: CellKind,
    /// Extra presentation metadata (a style fragment from the color collaborator)
    pub target: Option<String>,
}

impl ResidueCell {
    pub fn residue(text: &str) -> Self {
        Self {
            kind: CellKind::Residue(text.to_string()),
            target: None,
        }
    }

    pub fn icon(markup: &str) -> Self {
        Self {
            kind: CellKind::Icon(markup.to_string()),
            target: None,
        }
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn is_icon(&self) -> bool {
        matches!(self.kind, CellKind::Icon(_))
    }

    /// True for residues that advance a gap-aware index.
    pub fn is_counted(&self) -> bool {
        match &self.kind {
            CellKind::Residue(text) => text != GAP,
            CellKind::Icon(_) => true,
        }
    }
}

/// One sequence line: sparse map from 1-based position to cell. Absent positions are fillers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<usize, ResidueCell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dense row, one residue per char.
    ///
    /// ```
    /// use sqv::libs::viewer::cell::Row;
    /// let row = Row::from_text("AC-GT");
    /// assert_eq!(row.len(), 5);
    /// assert!(row.get(3).is_some());
    /// assert!(row.get(6).is_none());
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut row = Self::new();
        for (i, ch) in text.chars().enumerate() {
            row.insert(i + 1, ResidueCell::residue(&ch.to_string()));
        }
        row
    }

    pub fn insert(&mut self, pos: usize, cell: ResidueCell) {
        self.cells.insert(pos, cell);
    }

    pub fn get(&self, pos: usize) -> Option<&ResidueCell> {
        self.cells.get(&pos)
    }

    /// Highest occupied position, 0 for an empty row.
    pub fn len(&self) -> usize {
        self.cells.keys().next_back().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &ResidueCell)> {
        self.cells.iter()
    }

    /// Any icon anywhere in the row turns it into an icon row for labelling.
    pub fn has_icon(&self) -> bool {
        self.cells.values().any(|c| c.is_icon())
    }

    /// Non-gap, non-filler cells at positions `<= pos`.
    pub fn count_residues(&self, pos: usize) -> usize {
        self.cells
            .range(..=pos)
            .filter(|(_, c)| c.is_counted())
            .count()
    }
}

pub type Matrix = Vec<Row>;

/// Length of the longest row.
pub fn max_len(matrix: &[Row]) -> usize {
    matrix.iter().map(|r| r.len()).max().unwrap_or(0)
}

/// How a position is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Empty space keeping the column aligned
    Filler,
    /// Selectable residue, addressed by column `x`, row `y` and viewer id
    Interactive {
        text: String,
        x: usize,
        y: usize,
        viewer: String,
        target: Option<String>,
    },
    /// Rendered verbatim, not selectable
    NonInteractive {
        markup: String,
        target: Option<String>,
    },
}

pub fn classify(cell: Option<&ResidueCell>, x: usize, y: usize, viewer: &str) -> Classified {
    match cell {
        None => Classified::Filler,
        Some(ResidueCell {
            kind: CellKind::Residue(text),
            target,
        }) => Classified::Interactive {
            text: text.clone(),
            x,
            y,
            viewer: viewer.to_string(),
            target: target.clone(),
        },
        Some(ResidueCell {
            kind: CellKind::Icon(markup),
            target,
        }) => Classified::NonInteractive {
            markup: markup.clone(),
            target: target.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(None, 1, 0, "v"), Classified::Filler);

        let cell = ResidueCell::residue("A").with_target("background-color:red;");
        match classify(Some(&cell), 3, 1, "v") {
            Classified::Interactive {
                text,
                x,
                y,
                viewer,
                target,
            } => {
                assert_eq!(text, "A");
                assert_eq!((x, y), (3, 1));
                assert_eq!(viewer, "v");
                assert_eq!(target.as_deref(), Some("background-color:red;"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let icon = ResidueCell::icon("<svg></svg>");
        assert_eq!(
            classify(Some(&icon), 1, 0, "v"),
            Classified::NonInteractive {
                markup: "<svg></svg>".to_string(),
                target: None
            }
        );
    }

    #[test]
    fn test_count_residues() {
        let row = Row::from_text("AC-GT");
        let counts: Vec<usize> = (1..=6).map(|x| row.count_residues(x)).collect();
        assert_eq!(counts, vec![1, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn test_sparse_row() {
        let mut row = Row::new();
        row.insert(2, ResidueCell::residue("A"));
        row.insert(5, ResidueCell::residue("C"));
        assert_eq!(row.len(), 5);
        assert_eq!(row.count_residues(4), 1);
        assert!(!row.has_icon());

        row.insert(7, ResidueCell::icon("<svg/>"));
        assert!(row.has_icon());
        assert_eq!(max_len(&[Row::from_text("ACG"), row]), 7);
    }
}
