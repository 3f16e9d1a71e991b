//! Input validation utilities
//!
//! Provides input sanitation checks shared by login and catalog forms.

/// Validate that input is not blank, fits `max_length` bytes and carries no control line breaks or NULs
pub fn is_valid_input(input: &str, max_length: usize) -> bool {
    !is_blank(input) && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Whether the input is empty once surrounding whitespace is removed
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
