//! Combat narration
//!
//! Entities describe what happens to them by recording lines here. The
//! driver decides where the lines go (stdout, JSON).

use serde::Serialize;

/// Ordered narration of an encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CombatLog {
    entries: Vec<String>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a narration line
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "dungeon_sim::narration", "{}", line);
        self.entries.push(line);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any recorded line contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.entries.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut log = CombatLog::new();
        assert!(log.is_empty());

        log.record("first");
        log.record(String::from("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries(), ["first", "second"]);
        assert_eq!(log.last(), Some("second"));
    }

    #[test]
    fn test_mentions_matches_substrings() {
        let mut log = CombatLog::new();
        log.record("The Spike Pit springs on Sir Bugsalot!");
        assert!(log.mentions("springs on"));
        assert!(!log.mentions("extra effective"));
    }

    #[test]
    fn test_serializes_as_list() {
        let mut log = CombatLog::new();
        log.record("a");
        log.record("b");
        assert_eq!(serde_json::to_string(&log).unwrap(), r#"["a","b"]"#);
    }
}
