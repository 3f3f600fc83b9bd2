//! Opening records as loaded from the JSON data directory, plus the
//! tiering/sorting pass that decides the order of the detail pages.

use crate::error::ChessbookError;
use serde::Deserialize;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One opening, one JSON file. Everything beyond the name and move list is
/// optional; pages render whatever is present.
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningRecord {
    pub name: String,
    pub moves: String,
    #[serde(default)]
    pub alt_name: Option<String>,
    /// the mainline as space-separated UCI moves, used to set up the diagram
    #[serde(default)]
    pub uci_moves: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub white_win: Option<f32>,
    #[serde(default)]
    pub black_win: Option<f32>,
    #[serde(default)]
    pub champions: Option<String>,
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub errors_white: Vec<String>,
    #[serde(default)]
    pub errors_black: Vec<String>,
    #[serde(default)]
    pub development: Vec<Development>,
    #[serde(default)]
    pub traps: Vec<Trap>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub highlights_green: Vec<String>,
    #[serde(default)]
    pub highlights_red: Vec<String>,
    /// file name the record came from, filled in after deserializing
    #[serde(skip)]
    pub source: String,
}

/// A piece-development goal. The data files use both the two-element array
/// form `["Knight", "to f3"]` and the object form, so accept either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Development {
    Pair(String, String),
    Named {
        #[serde(default)]
        piece_name: String,
        #[serde(default)]
        goal: String,
    },
}

impl Development {
    pub fn piece_name(&self) -> &str {
        match self {
            Development::Pair(piece, _) => piece,
            Development::Named { piece_name, .. } => piece_name,
        }
    }

    pub fn goal(&self) -> &str {
        match self {
            Development::Pair(_, goal) => goal,
            Development::Named { goal, .. } => goal,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trap {
    pub fen: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub moves: String,
    #[serde(default)]
    pub uci: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub white_plan: String,
    #[serde(default)]
    pub black_plan: String,
    #[serde(default)]
    pub white_win: Option<f32>,
    #[serde(default)]
    pub black_win: Option<f32>,
}

/// Load every `*.json` file in `dir`, in file-name order. A file that fails
/// to parse aborts the load with its path in the error.
pub fn load_openings<P: AsRef<Path>>(dir: P) -> Result<Vec<OpeningRecord>, ChessbookError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut openings = Vec::with_capacity(paths.len());
    for path in paths {
        let file = fs::File::open(&path)?;
        let mut record: OpeningRecord = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ChessbookError::Record {
                path: path.clone(),
                source,
            })?;
        record.source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        openings.push(record);
    }
    Ok(openings)
}

/// Difficulty tier of an opening, taken from its free-form complexity field
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// Anything that names neither Beginner nor Advanced is Intermediate
    pub fn of(complexity: Option<&str>) -> Tier {
        match complexity {
            Some(c) if c.contains("Beginner") => Tier::Beginner,
            Some(c) if c.contains("Advanced") => Tier::Advanced,
            _ => Tier::Intermediate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }
}

/// Openings grouped by tier, each group sorted by white's win rate
/// (descending, unknown treated as 50%)
#[derive(Debug, Default)]
pub struct TieredOpenings {
    pub beginner: Vec<OpeningRecord>,
    pub intermediate: Vec<OpeningRecord>,
    pub advanced: Vec<OpeningRecord>,
}

impl TieredOpenings {
    pub fn bucket(&self, tier: Tier) -> &[OpeningRecord] {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    pub fn total(&self) -> usize {
        self.beginner.len() + self.intermediate.len() + self.advanced.len()
    }
}

pub fn categorize(openings: Vec<OpeningRecord>) -> TieredOpenings {
    let mut tiers = TieredOpenings::default();
    for op in openings {
        match Tier::of(op.complexity.as_deref()) {
            Tier::Beginner => tiers.beginner.push(op),
            Tier::Intermediate => tiers.intermediate.push(op),
            Tier::Advanced => tiers.advanced.push(op),
        }
    }
    for bucket in [
        &mut tiers.beginner,
        &mut tiers.intermediate,
        &mut tiers.advanced,
    ] {
        bucket.sort_by(|a, b| {
            let (wa, wb) = (a.white_win.unwrap_or(50.0), b.white_win.unwrap_or(50.0));
            wb.partial_cmp(&wa).unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(name: &str, complexity: Option<&str>, white_win: Option<f32>) -> OpeningRecord {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "moves": "1.e4 e5",
            "complexity": complexity,
            "white_win": white_win,
        }))
        .unwrap()
    }

    #[test]
    fn tier_matches_on_substring() {
        assert_eq!(Tier::of(Some("Beginner friendly")), Tier::Beginner);
        assert_eq!(Tier::of(Some("Advanced")), Tier::Advanced);
        assert_eq!(Tier::of(Some("anything else")), Tier::Intermediate);
        assert_eq!(Tier::of(None), Tier::Intermediate);
    }

    #[test]
    fn buckets_sort_by_white_win_descending() {
        let tiers = categorize(vec![
            record("a", Some("Beginner"), Some(48.0)),
            record("b", Some("Beginner"), None),
            record("c", Some("Beginner"), Some(55.0)),
        ]);
        let names: Vec<&str> = tiers.beginner.iter().map(|o| o.name.as_str()).collect();
        // missing win rate counts as 50, landing between the other two
        assert_eq!(names, ["c", "b", "a"]);
        assert_eq!(tiers.total(), 3);
    }

    #[test]
    fn development_accepts_both_shapes() {
        let pair: Development = serde_json::from_str(r#"["Knight", "to f3"]"#).unwrap();
        assert_eq!(pair.piece_name(), "Knight");
        assert_eq!(pair.goal(), "to f3");

        let named: Development =
            serde_json::from_str(r#"{"piece_name": "Bishop", "goal": "to c4"}"#).unwrap();
        assert_eq!(named.piece_name(), "Bishop");
        assert_eq!(named.goal(), "to c4");
    }

    #[test]
    fn load_reads_json_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for (file, name) in [("b.json", "Second"), ("a.json", "First")] {
            let mut f = std::fs::File::create(dir.path().join(file)).unwrap();
            write!(f, r#"{{"name": "{name}", "moves": "1.d4"}}"#).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let openings = load_openings(dir.path()).unwrap();
        let names: Vec<&str> = openings.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(openings[0].source, "a.json");
    }

    #[test]
    fn record_without_required_fields_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nameless.json"), r#"{"moves": "1.e4"}"#).unwrap();

        let err = load_openings(dir.path()).unwrap_err();
        assert!(err.to_string().contains("nameless.json"), "got: {err}");
        assert!(err.to_string().contains("name"), "got: {err}");
    }

    #[test]
    fn malformed_record_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{").unwrap();

        let err = load_openings(dir.path()).unwrap_err();
        assert!(err.to_string().contains("bad.json"), "got: {err}");
    }
}
