//! Selects the single labeled "target" interval of a tier,
//! where all other intervals are empty or carry a placeholder label, e.g.:
//!
//! ```text
//! |  ---  |  word  |  ---  |
//! ```

use std::path::Path;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Result, TextGridError},
    textgrid::{parse_tier_with, Interval, ParseOptions, Tier},
};

pub const DEFAULT_TIER_NAME: &str = "target";
pub const DEFAULT_NON_TARGET_LABEL: &str = "---";

/// Tier to read and the label marking non-target intervals.
/// Defaults to tier `target` with placeholder `---`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOptions {
    pub tier_name: String,
    pub non_target_label: String,
    pub parse: ParseOptions,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            tier_name: DEFAULT_TIER_NAME.to_owned(),
            non_target_label: DEFAULT_NON_TARGET_LABEL.to_owned(),
            parse: ParseOptions::default(),
        }
    }
}

impl TargetOptions {
    pub fn new(tier_name: &str, non_target_label: &str) -> Self {
        Self {
            tier_name: tier_name.to_owned(),
            non_target_label: non_target_label.to_owned(),
            ..Self::default()
        }
    }
}

/// Returns `true` if `label` is neither empty nor `non_target_label`.
/// Exact comparison, no trimming.
pub fn is_target_label(label: &str, non_target_label: &str) -> bool {
    !label.is_empty() && label != non_target_label
}

/// Returns the only interval in `tier` with a target label.
/// `path` is only used for the error.
pub fn single_target<'a>(tier: &'a Tier, non_target_label: &str, path: &Path) -> Result<&'a Interval> {
    tier.intervals.iter()
        .filter(|i| is_target_label(&i.label, non_target_label))
        .exactly_one()
        .map_err(|rest| TextGridError::AmbiguousOrMissingTarget {
            count: rest.count(),
            path: path.to_owned(),
        })
}

/// Returns `(start, end)` of the single target interval
/// in the tier specified in `options`.
pub fn get_single_target_interval(path: impl AsRef<Path>, options: &TargetOptions) -> Result<(f64, f64)> {
    let path = path.as_ref();
    let tier = parse_tier_with(path, &options.tier_name, &options.parse)?;
    let target = single_target(&tier, &options.non_target_label, path)?;
    debug!("Target '{}' at {}-{}s in '{}'", target.label, target.start, target.end, path.display());

    Ok((target.start, target.end))
}

/// Same as `get_single_target_interval` with `TargetOptions::default()`.
pub fn get_default_target_interval(path: impl AsRef<Path>) -> Result<(f64, f64)> {
    get_single_target_interval(path, &TargetOptions::default())
}
