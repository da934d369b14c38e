//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Sequence sizes
pub const FIELD_ORIGIN_LEN: &str = "origin_len";
pub const FIELD_DESTINATION_LEN: &str = "destination_len";
pub const FIELD_EDIT_COUNT: &str = "edit_count";
pub const FIELD_MOVE_COUNT: &str = "move_count";

// Addressing
pub const FIELD_SECTION: &str = "section";
pub const FIELD_STEP: &str = "step";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_EDIT_COUNT.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_size_fields_are_distinct() {
        assert_ne!(FIELD_ORIGIN_LEN, FIELD_DESTINATION_LEN);
        assert_ne!(FIELD_EDIT_COUNT, FIELD_MOVE_COUNT);
    }
}
