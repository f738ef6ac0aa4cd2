//! Interval tiers in Praat TextGrid files, text format.
//!
//! Only the parts needed to read an interval tier are parsed:
//!
//! ```text
//! item [1]:
//!     class = "IntervalTier"
//!     name = "target"
//!     xmin = 0
//!     xmax = 3
//!     intervals: size = 3
//!     intervals [1]:
//!         xmin = 0
//!         xmax = 1
//!         text = "---"
//!     intervals [2]:
//!         ...
//! item [2]:
//!     ...
//! ```
//!
//! Each interval block is read as exactly four lines: the `intervals [n]:` marker,
//! followed by `xmin`, `xmax` and `text`, in that order. The index in the marker is ignored,
//! as is the declared size. Intervals are returned in file order, without
//! validating that `start <= end` or that they are contiguous.

use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Result, TextGridError},
    files::read_lines,
    text::{name_value, seconds, text_value},
};

/// Reported as path in errors for content parsed from a string.
const STRING_SOURCE: &str = "<string>";

/// A labeled time span on a tier. Times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
    /// Verbatim content of the quoted `text` field.
    pub label: String,
}

impl Interval {
    pub fn new(start: f64, end: f64, label: &str) -> Self {
        Self { start, end, label: label.to_owned() }
    }

    /// Duration in seconds.
    /// Negative if the source file has `xmax < xmin`.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the interval has an empty label.
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

impl From<Interval> for (f64, f64, String) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end, interval.label)
    }
}

/// Interval tier with its time bounds.
/// Bounds are taken from the tier header and are not
/// cross-checked against the intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub xmin: f64,
    pub xmax: f64,
    pub intervals: Vec<Interval>,
}

impl Tier {
    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval labels in file order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.intervals.iter().map(|i| i.label.as_str())
    }

    /// Returns `(xmin, xmax, intervals)` with intervals as `(start, end, label)`.
    pub fn into_parts(self) -> (f64, f64, Vec<(f64, f64, String)>) {
        (
            self.xmin,
            self.xmax,
            self.intervals.into_iter().map(Into::into).collect(),
        )
    }
}

/// How the `name = "..."` line of the requested tier is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierMatch {
    /// First line anywhere in the file containing `name =` with
    /// a matching quoted value. A matching `name =` line outside
    /// a tier header (e.g. a file level name) will be picked instead
    /// of the tier. With duplicate tier names, only the first tier is reachable.
    #[default]
    FirstNameLine,
    /// Only `name =` lines inside a tier header, i.e. after an `item [`
    /// line and before that tier's `intervals: size =` or `points: size =`.
    /// With duplicate tier names, only the first tier is reachable.
    ItemHeader,
}

/// Options for locating and reading a tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub tier_match: TierMatch,
    /// Fail with `TextGridError::FileTooLarge` for larger input.
    pub max_bytes: Option<u64>,
}

/// Parses the interval tier named `tier_name` and returns
/// `(xmin, xmax, intervals)`, with intervals as `(start, end, label)`.
///
/// Same as `parse_tier`, with the result as tuples.
pub fn parse_textgrid_intervals(
    path: impl AsRef<Path>,
    tier_name: &str,
) -> Result<(f64, f64, Vec<(f64, f64, String)>)> {
    parse_tier(path, tier_name).map(Tier::into_parts)
}

/// Parses the interval tier named `tier_name` with default options.
pub fn parse_tier(path: impl AsRef<Path>, tier_name: &str) -> Result<Tier> {
    parse_tier_with(path, tier_name, &ParseOptions::default())
}

/// Parses the interval tier named `tier_name`.
pub fn parse_tier_with(path: impl AsRef<Path>, tier_name: &str, options: &ParseOptions) -> Result<Tier> {
    let path = path.as_ref();
    let lines = read_lines(path, options.max_bytes)?;
    parse_lines(&lines, tier_name, options.tier_match, path)
}

/// Parses the interval tier named `tier_name` from TextGrid content
/// already in memory. Errors report the path as `<string>`.
pub fn parse_tier_str(content: &str, tier_name: &str, options: &ParseOptions) -> Result<Tier> {
    let path = PathBuf::from(STRING_SOURCE);
    if let Some(limit) = options.max_bytes {
        let size = content.len() as u64;
        if size > limit {
            return Err(TextGridError::FileTooLarge { path, size, limit })
        }
    }
    let lines: Vec<String> = content.lines().map(String::from).collect();
    parse_lines(&lines, tier_name, options.tier_match, &path)
}

/// Lists the names of all tiers declared in the file, in file order.
/// Includes point tiers.
pub fn tier_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let lines = read_lines(path.as_ref(), None)?;
    Ok(header_names(&lines)
        .map(|(_, name)| name.to_owned())
        .collect())
}

/// Yields `(line index, name)` for every `name = "..."` line
/// inside a tier header.
fn header_names(lines: &[String]) -> impl Iterator<Item = (usize, &str)> {
    let mut in_header = false;
    lines.iter()
        .enumerate()
        .filter_map(move |(i, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("item [") {
                in_header = true;
            } else if trimmed.starts_with("intervals: size =") || trimmed.starts_with("points: size =") {
                in_header = false;
            } else if in_header && line.contains("name =") {
                if let Some(name) = name_value(line) {
                    // first name only, tiers have one
                    in_header = false;
                    return Some((i, name))
                }
            }
            None
        })
}

fn find_tier(lines: &[String], tier_name: &str, tier_match: TierMatch) -> Option<usize> {
    match tier_match {
        TierMatch::FirstNameLine => lines.iter()
            .position(|line| line.contains("name =") && name_value(line) == Some(tier_name)),
        TierMatch::ItemHeader => header_names(lines)
            .find(|(_, name)| *name == tier_name)
            .map(|(i, _)| i),
    }
}

fn parse_lines(lines: &[String], tier_name: &str, tier_match: TierMatch, path: &Path) -> Result<Tier> {
    let tier_idx = find_tier(lines, tier_name, tier_match)
        .ok_or_else(|| TextGridError::TierNotFound {
            tier: tier_name.to_owned(),
            path: path.to_owned(),
        })?;
    debug!("Found tier '{tier_name}' at line {} in '{}'", tier_idx + 1, path.display());

    // Tier bounds, up to and including 'intervals: size = ...'
    let mut xmin: Option<f64> = None;
    let mut xmax: Option<f64> = None;
    let mut i = tier_idx;
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;
        if line.starts_with("xmin =") {
            xmin = Some(seconds(line)?);
        } else if line.starts_with("xmax =") {
            xmax = Some(seconds(line)?);
        } else if line.starts_with("intervals: size =") {
            break;
        }
    }

    let (xmin, xmax) = match (xmin, xmax) {
        (Some(x0), Some(x1)) => (x0, x1),
        _ => return Err(TextGridError::MissingBounds {
            tier: tier_name.to_owned(),
            path: path.to_owned(),
        })
    };
    debug!("Tier '{tier_name}' spans {xmin}-{xmax}s");

    // Intervals, up to next 'item [' or end of file
    let mut intervals: Vec<Interval> = Vec::new();
    while i < lines.len() {
        let line = lines[i].trim();
        if line.starts_with("intervals [") {
            if i + 3 >= lines.len() {
                return Err(TextGridError::TruncatedInterval {
                    line: i + 1,
                    path: path.to_owned(),
                })
            }
            let start = seconds(lines[i + 1].trim())?;
            let end = seconds(lines[i + 2].trim())?;
            let label = text_value(lines[i + 3].trim());
            trace!("Interval {start}-{end}s '{label}'");
            intervals.push(Interval::new(start, end, label));
            i += 4;
        } else if line.starts_with("item [") {
            break;
        } else {
            i += 1;
        }
    }
    debug!("Read {} intervals for tier '{tier_name}'", intervals.len());

    Ok(Tier {
        name: tier_name.to_owned(),
        xmin,
        xmax,
        intervals,
    })
}
