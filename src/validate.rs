//! Pure field validators shared by the registration, contact, and chatbot
//! forms.
//!
//! Every function is a synchronous check on a borrowed string; the form
//! records in [`crate::state`] turn these verdicts into per-field error
//! messages. Optional fields are handled by the callers (empty input is
//! skipped before the validator runs).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A person's name: at least 3 characters after trimming, letters and
/// whitespace only.
pub fn name(value: &str) -> bool {
    value.trim().chars().count() >= 3
        && value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// An email address of the shape `local@domain.tld`: no whitespace, exactly
/// one `@`, a non-empty local part, and a dot strictly inside the domain.
pub fn email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// A phone number: exactly 10 digits once every non-digit character
/// (spaces, dashes, parentheses) is stripped.
pub fn phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

/// An age: an integer between 1 and 120 inclusive. Non-numeric input is
/// rejected outright.
pub fn age(value: &str) -> bool {
    value
        .trim()
        .parse::<u32>()
        .is_ok_and(|n| (1..=120).contains(&n))
}

/// Free text with a minimum trimmed length (subject, message, address,
/// medical condition, experience all use this with their own threshold).
pub fn min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// A comma-separated skill list: every entry must have at least 2
/// characters after trimming.
pub fn skills(value: &str) -> bool {
    value.split(',').all(|skill| skill.trim().chars().count() >= 2)
}

/// An outgoing chatbot message: non-blank, at least 3 characters trimmed,
/// at most 500 characters raw.
///
/// # Errors
///
/// Returns the user-facing rejection text when the message is out of
/// bounds.
pub fn chat_message(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Message cannot be empty");
    }
    if trimmed.chars().count() < 3 {
        return Err("Message must be at least 3 characters");
    }
    if value.chars().count() > 500 {
        return Err("Message cannot exceed 500 characters");
    }
    Ok(())
}
