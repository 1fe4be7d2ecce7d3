//! Case identifier format: `CASE-%04d`.

/// Prefix shared by every case identifier.
pub const PREFIX_CASE: &str = "CASE";

/// Format a sequence number as a case id, e.g. `7` → `"CASE-0007"`.
///
/// Numbers above 9999 keep all their digits (`"CASE-12345"`).
#[must_use]
pub fn format_case_id(sequence: u32) -> String {
    format!("{PREFIX_CASE}-{sequence:04}")
}

/// Extract the sequence number from a case id, if it follows the format.
#[must_use]
pub fn parse_case_sequence(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(PREFIX_CASE)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_four_digit_padding() {
        assert_eq!(format_case_id(1), "CASE-0001");
        assert_eq!(format_case_id(42), "CASE-0042");
        assert_eq!(format_case_id(12345), "CASE-12345");
    }

    #[test]
    fn parses_formatted_ids() {
        assert_eq!(parse_case_sequence("CASE-0001"), Some(1));
        assert_eq!(parse_case_sequence("CASE-12345"), Some(12345));
    }

    #[test]
    fn rejects_foreign_ids() {
        assert_eq!(parse_case_sequence("TEST-0001"), None);
        assert_eq!(parse_case_sequence("CASE-"), None);
        assert_eq!(parse_case_sequence("CASE-00a1"), None);
        assert_eq!(parse_case_sequence("CASE-+001"), None);
        assert_eq!(parse_case_sequence("CASE0001"), None);
    }
}
