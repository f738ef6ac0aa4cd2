//! Reads interval tiers from Praat TextGrid files (text format)
//! and extracts the single labeled "target" interval of a tier.
//!
//! ```no_run
//! use tgutil::{get_single_target_interval, TargetOptions};
//!
//! let (start, end) = get_single_target_interval("speaker01.TextGrid", &TargetOptions::default())?;
//! println!("target: {start}-{end}s");
//! # Ok::<(), tgutil::TextGridError>(())
//! ```

pub mod errors;
pub mod files;
pub mod json;
pub mod target;
pub mod text;
pub mod textgrid;

pub use errors::{Result, TextGridError};
pub use target::{get_default_target_interval, get_single_target_interval, single_target, TargetOptions};
pub use textgrid::{
    parse_textgrid_intervals,
    parse_tier,
    parse_tier_str,
    parse_tier_with,
    tier_names,
    Interval,
    ParseOptions,
    Tier,
    TierMatch,
};
