//! Heuristic classification of child output lines.
//!
//! The external executable's output format is undocumented, so this is
//! a best-effort text classifier: case-insensitive substring checks with
//! a fixed precedence, first match wins. The mapping is authoritative
//! only for the patterns enumerated here, not a general log parser.
//! Ambiguous lines that match several categories resolve through the
//! fixed order to stay deterministic.

use schedviz_types::{ThreadState, ThreadUpdate};

/// Classify one line of child output into a structured update.
///
/// Precedence, checked in this order on the lowercased line:
///
/// 1. `created` -- Ready / `Created`
/// 2. `yield` or `switch` -- Ready / `Yielded`
/// 3. `running` or `context to` -- Running / `Running`
/// 4. `exit` or `finished` -- Finished / `Exited`
///
/// Returns `None` when no category matches, or when a category matches
/// but the line contains no decimal digits to use as a thread id. The
/// caller still echoes the raw line in both cases.
pub fn classify(line: &str) -> Option<ThreadUpdate> {
    let lower = line.to_lowercase();

    let (state, details) = if lower.contains("created") {
        (ThreadState::Ready, "Created")
    } else if lower.contains("yield") || lower.contains("switch") {
        (ThreadState::Ready, "Yielded")
    } else if lower.contains("running") || lower.contains("context to") {
        (ThreadState::Running, "Running")
    } else if lower.contains("exit") || lower.contains("finished") {
        (ThreadState::Finished, "Exited")
    } else {
        return None;
    };

    let id = first_digit_run(line)?;

    Some(ThreadUpdate {
        id,
        state,
        details: details.to_owned(),
    })
}

/// Extract the first maximal run of ASCII decimal digits from a line.
///
/// `"Switching context to Thread 12"` yields `"12"`. Returns `None`
/// when the line contains no digits.
fn first_digit_run(line: &str) -> Option<String> {
    let digits: String = line
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() { None } else { Some(digits) }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn created_line_maps_to_ready() {
        let update = classify("Thread 3 created").unwrap();
        assert_eq!(update.id, "3");
        assert_eq!(update.state, ThreadState::Ready);
        assert_eq!(update.details, "Created");
    }

    #[test]
    fn created_is_case_insensitive() {
        let update = classify("THREAD 7 CREATED").unwrap();
        assert_eq!(update.state, ThreadState::Ready);
        assert_eq!(update.details, "Created");
    }

    #[test]
    fn yield_line_maps_to_ready_yielded() {
        let update = classify("Thread 1 yields").unwrap();
        assert_eq!(update.id, "1");
        assert_eq!(update.state, ThreadState::Ready);
        assert_eq!(update.details, "Yielded");
    }

    #[test]
    fn switch_takes_precedence_over_context_to() {
        // "Switching" contains "switch", which is checked before
        // "context to" in the fixed precedence order.
        let update = classify("Switching context to Thread 2").unwrap();
        assert_eq!(update.id, "2");
        assert_eq!(update.state, ThreadState::Ready);
        assert_eq!(update.details, "Yielded");
    }

    #[test]
    fn context_to_line_maps_to_running() {
        let update = classify("Handing context to Thread 2").unwrap();
        assert_eq!(update.id, "2");
        assert_eq!(update.state, ThreadState::Running);
        assert_eq!(update.details, "Running");
    }

    #[test]
    fn running_line_maps_to_running() {
        let update = classify("Thread 4 is now running").unwrap();
        assert_eq!(update.id, "4");
        assert_eq!(update.state, ThreadState::Running);
    }

    #[test]
    fn exit_line_maps_to_finished() {
        let update = classify("Thread 5 exits").unwrap();
        assert_eq!(update.id, "5");
        assert_eq!(update.state, ThreadState::Finished);
        assert_eq!(update.details, "Exited");
    }

    #[test]
    fn finished_line_maps_to_finished() {
        let update = classify("Thread 6 finished").unwrap();
        assert_eq!(update.state, ThreadState::Finished);
    }

    #[test]
    fn created_wins_over_finished() {
        // First match wins: a line matching several categories uses
        // the fixed precedence, never the later category.
        let update = classify("Thread 9 created after Thread 8 finished").unwrap();
        assert_eq!(update.id, "9");
        assert_eq!(update.state, ThreadState::Ready);
        assert_eq!(update.details, "Created");
    }

    #[test]
    fn matched_category_without_digits_is_suppressed() {
        assert!(classify("A thread was created").is_none());
    }

    #[test]
    fn unmatched_line_is_suppressed() {
        assert!(classify("Scheduler initialized").is_none());
    }

    #[test]
    fn first_digit_run_is_maximal() {
        let update = classify("Thread 12 created at tick 345").unwrap();
        assert_eq!(update.id, "12");
    }

    #[test]
    fn digits_before_keyword_still_count() {
        let update = classify("[0] worker created").unwrap();
        assert_eq!(update.id, "0");
    }

    #[test]
    fn empty_line_is_suppressed() {
        assert!(classify("").is_none());
    }
}
