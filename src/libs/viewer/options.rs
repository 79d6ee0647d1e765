use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolved display options.
///
/// Field names follow the JSON options file, e.g. `{"chunkSize": 10, "lateralIndexesGap": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Positions per chunk, 0 disables chunking
    pub chunk_size: usize,
    /// CSS font size, a number followed by a two-letter unit
    pub font_size: String,
    /// Space between chunks, in em
    pub space_size: f64,
    pub top_indexes: bool,
    pub lateral_indexes: bool,
    pub lateral_indexes_gap: bool,
    pub one_line_setting: bool,
    pub one_line_width: String,
    /// Passed through to the color collaborator, unused by the layout
    pub color_scheme: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            chunk_size: 10,
            font_size: "14px".to_string(),
            space_size: 1.0,
            top_indexes: false,
            lateral_indexes: false,
            lateral_indexes_gap: false,
            one_line_setting: false,
            one_line_width: "300px".to_string(),
            color_scheme: "clustal".to_string(),
        }
    }
}

/// Which lateral index, if any, is drawn next to each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    Labels,
    Plain,
    GapAware,
}

impl DisplayOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read options at {}: {e}", path.display()))?;
        let options = serde_json::from_str::<DisplayOptions>(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse options at {}: {e}", path.display()))?;
        Ok(options)
    }

    /// `lateralIndexes` wins when both lateral flags are set.
    pub fn index_mode(&self) -> IndexMode {
        if self.lateral_indexes {
            IndexMode::Plain
        } else if self.lateral_indexes_gap {
            IndexMode::GapAware
        } else {
            IndexMode::Labels
        }
    }

    /// Splits `font_size` into number and unit.
    ///
    /// ```
    /// use sqv::libs::viewer::options::DisplayOptions;
    /// let opt = DisplayOptions { font_size: "14px".to_string(), ..Default::default() };
    /// assert_eq!(opt.font_parts(), (14.0, "px".to_string()));
    /// ```
    pub fn font_parts(&self) -> (f64, String) {
        let size = self.font_size.trim();
        if size.len() < 2 || !size.is_char_boundary(size.len() - 2) {
            return (size.parse().unwrap_or(0.0), String::new());
        }
        let (num, unit) = size.split_at(size.len() - 2);
        (num.trim().parse().unwrap_or(0.0), unit.to_string())
    }

    /// Room reserved for a lateral index: one font size per digit of `max_idx`.
    pub fn index_width(&self, max_idx: usize) -> String {
        let (num, unit) = self.font_parts();
        let digits = max_idx.to_string().len();
        format!("{}{}", num * digits as f64, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_index_mode() {
        let mut opt = DisplayOptions::default();
        assert_eq!(opt.index_mode(), IndexMode::Labels);

        opt.lateral_indexes_gap = true;
        assert_eq!(opt.index_mode(), IndexMode::GapAware);

        opt.lateral_indexes = true;
        assert_eq!(opt.index_mode(), IndexMode::Plain);
    }

    #[test]
    fn test_index_width() {
        let opt = DisplayOptions {
            font_size: "1.5em".to_string(),
            ..Default::default()
        };
        assert_eq!(opt.index_width(120), "4.5em");
        assert_eq!(opt.index_width(9), "1.5em");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunkSize": 5, "topIndexes": true}}"#).unwrap();

        let opt = DisplayOptions::from_file(file.path()).unwrap();
        assert_eq!(opt.chunk_size, 5);
        assert!(opt.top_indexes);
        assert_eq!(opt.font_size, "14px");
    }

    #[test]
    fn test_from_file_broken() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{chunkSize").unwrap();
        assert!(DisplayOptions::from_file(file.path()).is_err());
    }
}
