//! Line-oriented process descriptor parsing.
//!
//! Accepts records of the form `id arrival burst [priority]`, separated by
//! whitespace or commas. Blank lines and comment lines (`//` or `#`) are
//! ignored, a missing priority defaults to 1, and malformed lines are
//! silently discarded — tolerance is this layer's policy, not the engine's.
//! The engine's own contract starts at the descriptor level; run
//! [`crate::validation::validate_input`] on the output before scheduling.

use crate::models::Process;

/// Parses process descriptors from free-form text.
pub fn parse_processes(text: &str) -> Vec<Process> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Process> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
        return None;
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < 3 {
        return None;
    }

    let id = tokens[0];
    let arrival: i64 = tokens[1].parse().ok()?;
    let burst: i64 = tokens[2].parse().ok()?;
    let priority: i32 = match tokens.get(3) {
        Some(tok) => tok.parse().ok()?,
        None => 1,
    };

    Some(Process::new(id, arrival, burst).with_priority(priority))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_records() {
        let procs = parse_processes("P1 0 4 3\nP2 1 5 1\n");
        assert_eq!(procs.len(), 2);
        assert_eq!(procs[0].id, "P1");
        assert_eq!(procs[0].arrival_time, 0);
        assert_eq!(procs[0].burst_time, 4);
        assert_eq!(procs[0].priority, 3);
    }

    #[test]
    fn test_parse_default_priority() {
        let procs = parse_processes("P1 2 6");
        assert_eq!(procs[0].priority, 1);
    }

    #[test]
    fn test_parse_comma_separated() {
        let procs = parse_processes("P1,0,4,3\nP2, 1, 5");
        assert_eq!(procs.len(), 2);
        assert_eq!(procs[1].burst_time, 5);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "// Format: pid arrival burst priority\n\n# also a comment\nP1 0 4\n";
        let procs = parse_processes(text);
        assert_eq!(procs.len(), 1);
    }

    #[test]
    fn test_parse_discards_malformed_lines() {
        let text = "P1 0 4\nP2 zero 4\nP3 1\nP4 1 3 high\nP5 2 2 2\n";
        let procs = parse_processes(text);
        let ids: Vec<&str> = procs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P5"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_processes("").is_empty());
    }
}
