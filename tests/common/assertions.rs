//! Custom assertion macros and utilities

/// Assert that a response has the given status, showing the body otherwise
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status,
            $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert that an error response carries the given message
#[macro_export]
macro_rules! assert_error_message {
    ($response:expr, $message:expr) => {
        assert_eq!(
            $response.body["error"], $message,
            "unexpected error body: {}",
            $response.body
        );
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
