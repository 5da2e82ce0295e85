//! Parses the CLI's `instrument` argument: an integer id, a canonical
//! name, or one of the documented aliases.

use resynth_engine::INSTRUMENT_NAMES;

/// Resolves `raw` to an instrument id `0..=9`, or a user-facing error
/// message on failure ("unknown name → fatal" per the CLI contract).
pub fn parse_instrument(raw: &str) -> Result<u8, String> {
    let trimmed = raw.trim();

    if let Ok(id) = trimmed.parse::<u8>() {
        if (0..10).contains(&id) {
            return Ok(id);
        }
        return Err(format!("instrument id {} out of range 0..9", id));
    }

    let normalized = trimmed.to_lowercase();
    let canonical = match normalized.as_str() {
        "lush pad" => "pad",
        "plucked string" => "pluck",
        other => other,
    };

    INSTRUMENT_NAMES
        .iter()
        .position(|&name| name == canonical)
        .map(|id| id as u8)
        .ok_or_else(|| format!("unknown instrument name: '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_ids() {
        assert_eq!(parse_instrument("0").unwrap(), 0);
        assert_eq!(parse_instrument("9").unwrap(), 9);
        assert!(parse_instrument("10").is_err());
    }

    #[test]
    fn accepts_case_insensitive_names() {
        assert_eq!(parse_instrument("Pad").unwrap(), 0);
        assert_eq!(parse_instrument("ACID").unwrap(), 9);
    }

    #[test]
    fn accepts_documented_aliases() {
        assert_eq!(parse_instrument("lush pad").unwrap(), 0);
        assert_eq!(parse_instrument("Plucked String").unwrap(), 1);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(parse_instrument("kazoo").is_err());
    }
}
