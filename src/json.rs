//! JSON export of parsed tiers.

use crate::{errors::Result, textgrid::Tier};

/// Serializes `tier` to JSON, e.g.
/// `{"name":"target","xmin":0.0,"xmax":3.0,"intervals":[{"start":0.0,"end":1.0,"label":"---"}, ...]}`.
pub fn to_json(tier: &Tier, pretty: bool) -> Result<String> {
    let json = match pretty {
        true => serde_json::to_string_pretty(tier)?,
        false => serde_json::to_string(tier)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textgrid::Interval;

    #[test]
    fn compact_json() {
        let tier = Tier {
            name: "target".to_owned(),
            xmin: 0.0,
            xmax: 1.5,
            intervals: vec![Interval::new(0.0, 1.5, "wörd")],
        };
        assert_eq!(
            to_json(&tier, false).unwrap(),
            r#"{"name":"target","xmin":0.0,"xmax":1.5,"intervals":[{"start":0.0,"end":1.5,"label":"wörd"}]}"#
        );
        let back: Tier = serde_json::from_str(&to_json(&tier, true).unwrap()).unwrap();
        assert_eq!(back, tier);
    }
}
