//! Block FA files: aligned sequences grouped in blocks separated by blank lines.
//!
//! ```text
//! >S1.chr1(+):101-107
//! AC-GTACG
//! >S2.chr1(+):201-209
//! ACGGTACGT
//!
//! >S1.chr2(-):1-5
//! ...
//! ```

use crate::libs::viewer::{LabelSet, Matrix, Row};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::BufRead;

lazy_static! {
    static ref RE_HEADER: Regex = Regex::new(
        r"^(?P<name>[^.(:\s]+)(?:\.(?P<chr>[^(:\s]+))?(?:\((?P<strand>[+-])\))?(?::(?P<start>\d+)(?:-(?P<end>\d+))?)?"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FasEntry {
    /// Full header line, without `>`
    pub header: String,
    /// Species or sequence name, the part before the first `.`
    pub name: String,
    /// First residue number, 1 when the header carries no range
    pub start: i64,
    pub seq: String,
}

impl FasEntry {
    /// ```
    /// use sqv::libs::fas::FasEntry;
    /// let entry = FasEntry::new("S1.chr1(+):101-107", "AC-GTACG");
    /// assert_eq!(entry.name, "S1");
    /// assert_eq!(entry.start, 101);
    ///
    /// let entry = FasEntry::new("consensus", "ACGT");
    /// assert_eq!(entry.name, "consensus");
    /// assert_eq!(entry.start, 1);
    /// ```
    pub fn new(header: &str, seq: &str) -> Self {
        let header = header.trim();
        let (name, start) = match RE_HEADER.captures(header) {
            Some(caps) => (
                caps.name("name").map_or(header, |m| m.as_str()).to_string(),
                caps.name("start")
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(1),
            ),
            None => (header.to_string(), 1),
        };

        Self {
            header: header.to_string(),
            name,
            start,
            seq: seq.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FasBlock {
    pub entries: Vec<FasEntry>,
}

impl FasBlock {
    pub fn to_matrix(&self) -> Matrix {
        self.entries.iter().map(|e| Row::from_text(&e.seq)).collect()
    }

    /// Names as labels, header ranges as first residue numbers, full headers as tooltips.
    pub fn to_label_set(&self) -> LabelSet {
        let mut labels = LabelSet::new();
        for entry in &self.entries {
            labels.push(&entry.name, entry.start, &entry.header);
        }
        labels
    }
}

/// Reads the next block. `Ok(None)` at the end of input.
///
/// Sequence lines may be wrapped; they are joined until the next header or blank line.
pub fn next_fas_block(reader: &mut dyn BufRead) -> anyhow::Result<Option<FasBlock>> {
    let mut block = FasBlock::default();
    let mut header: Option<String> = None;
    let mut seq = String::new();

    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        let trimmed = line.trim();

        if n == 0 || trimmed.is_empty() {
            if let Some(h) = header.take() {
                block.entries.push(FasEntry::new(&h, &seq));
                seq.clear();
            }
            if n == 0 || !block.entries.is_empty() {
                break;
            }
            // skip leading blank lines
            continue;
        }

        if let Some(h) = trimmed.strip_prefix('>') {
            if let Some(prev) = header.replace(h.to_string()) {
                block.entries.push(FasEntry::new(&prev, &seq));
                seq.clear();
            }
        } else if header.is_some() {
            seq.push_str(trimmed);
        } else {
            anyhow::bail!("Sequence line without a header: {}", trimmed);
        }
    }

    if block.entries.is_empty() {
        Ok(None)
    } else {
        Ok(Some(block))
    }
}
