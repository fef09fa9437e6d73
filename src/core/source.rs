use crate::domain::model::RawEvent;
use crate::utils::error::{FlatTreeError, Result};
use std::io::BufRead;

/// Read JSON-lines events. Blank lines are skipped; line numbers in errors
/// are 1-based.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<RawEvent>> {
    let mut events = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: RawEvent = serde_json::from_str(&line)
            .map_err(|source| FlatTreeError::EventParse { line: i + 1, source })?;
        events.push(event);
    }

    tracing::debug!("Read {} events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_events_skips_blank_lines() {
        let input = r#"{"event_number":1,"f125_wraw":[{"roc":1,"slot":2,"channel":3,"invalid_samples":false,"overflow":false,"itrigger":9,"samples":[4,5]}]}

{"event_number":2}
"#;
        let events = read_events(input.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].f125_wraw[0].samples, vec![4, 5]);
        assert!(events[1].f125_wraw.is_empty());
        assert!(events[1].srs.is_empty());
    }

    #[test]
    fn test_read_events_reports_line() {
        let input = "{\"event_number\":1}\n{\"event_number\":\"x\"}\n";
        let err = read_events(input.as_bytes()).unwrap_err();
        assert!(matches!(err, FlatTreeError::EventParse { line: 2, .. }));
    }

    #[test]
    fn test_read_events_empty_input() {
        assert!(read_events("".as_bytes()).unwrap().is_empty());
    }
}
