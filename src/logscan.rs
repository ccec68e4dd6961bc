// Pulls failed-fetch subject ids back out of a scraper log so they can be
// fed into a retry run.

use once_cell::sync::Lazy;
use regex::Regex;

static FETCH_ERROR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Error fetching ID (\d+)").unwrap());

/// Collect the id of the first `Error fetching ID <digits>` match on each
/// line, in input order.
pub fn extract_ids(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| FETCH_ERROR_RE.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_a_noisy_line() {
        assert_eq!(extract_ids("2025 Error fetching ID 4821 retry"), vec!["4821"]);
    }

    #[test]
    fn skips_lines_without_a_match() {
        let log = "starting up\nError fetching ID 10\ndone\nError fetching ID 11 (timeout)\n";
        assert_eq!(extract_ids(log), vec!["10", "11"]);
    }

    #[test]
    fn empty_log_yields_nothing() {
        assert!(extract_ids("").is_empty());
    }
}
