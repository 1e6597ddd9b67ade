//! Priority-chained field derivation.
//!
//! Several output fields (day title, accommodation label, hero image, day
//! image) are the first usable value from an ordered list of sources. Each
//! source is an attempt closure so later, costlier sources are only
//! evaluated when every earlier one came up empty.

/// A single step of a priority chain.
pub type Attempt<'a, T> = &'a dyn Fn() -> Option<T>;

/// Return the first `Some` produced by `attempts`, evaluated in order.
pub fn first_of<T>(attempts: &[Attempt<'_, T>]) -> Option<T> {
    attempts.iter().find_map(|attempt| attempt())
}

/// Treat empty or whitespace-only text as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn first_defined_attempt_wins() {
        let result = first_of::<&str>(&[&|| None, &|| Some("second"), &|| Some("third")]);
        assert_eq!(result, Some("second"));
    }

    #[test]
    fn later_attempts_are_not_evaluated() {
        let calls = Cell::new(0);
        let counted = || {
            calls.set(calls.get() + 1);
            Some(2)
        };
        let result = first_of::<i32>(&[&|| Some(1), &counted]);
        assert_eq!(result, Some(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_chain_is_none() {
        assert_eq!(first_of::<u8>(&[]), None);
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("Day 1")), Some("Day 1"));
    }
}
