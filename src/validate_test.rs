use super::*;

// =============================================================
// name
// =============================================================

#[test]
fn name_accepts_letters_and_spaces() {
    assert!(name("Asha Rao"));
    assert!(name("Lee"));
}

#[test]
fn name_rejects_short_or_non_letter_input() {
    assert!(!name(""));
    assert!(!name("Al"));
    assert!(!name("  A  "));
    assert!(!name("R2D2"));
    assert!(!name("Anne-Marie"));
}

// =============================================================
// email
// =============================================================

#[test]
fn email_accepts_local_at_domain_tld() {
    assert!(email("a@b.co"));
    assert!(email("first.last@sub.example.org"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!email(""));
    assert!(!email("plainaddress"));
    assert!(!email("@example.com"));
    assert!(!email("user@nodot"));
    assert!(!email("user@.com"));
    assert!(!email("user@domain."));
    assert!(!email("two@@example.com"));
    assert!(!email("has space@example.com"));
}

// =============================================================
// phone
// =============================================================

#[test]
fn phone_accepts_exactly_ten_digits_after_stripping() {
    assert!(phone("1234567890"));
    assert!(phone("(123) 456-7890"));
    assert!(phone("123-456-7890"));
}

#[test]
fn phone_rejects_wrong_digit_counts() {
    assert!(!phone("12345"));
    assert!(!phone("12345678901"));
    assert!(!phone(""));
    assert!(!phone("phone number"));
}

// =============================================================
// age
// =============================================================

#[test]
fn age_accepts_one_through_one_twenty() {
    assert!(age("1"));
    assert!(age("42"));
    assert!(age("120"));
    assert!(age(" 65 "));
}

#[test]
fn age_rejects_out_of_range_and_non_numeric() {
    assert!(!age("0"));
    assert!(!age("121"));
    assert!(!age("-3"));
    assert!(!age("12abc"));
    assert!(!age("abc"));
    assert!(!age(""));
}

// =============================================================
// min_len / skills
// =============================================================

#[test]
fn min_len_counts_trimmed_characters() {
    assert!(min_len("hello", 5));
    assert!(!min_len("  hi  ", 5));
    assert!(!min_len("", 1));
}

#[test]
fn skills_requires_two_characters_per_entry() {
    assert!(skills("First Aid, Counseling"));
    assert!(skills("CPR"));
    assert!(!skills("First Aid, X"));
    assert!(!skills("First Aid,,Counseling"));
}

// =============================================================
// chat_message
// =============================================================

#[test]
fn chat_message_rejects_blank_input() {
    assert_eq!(chat_message(""), Err("Message cannot be empty"));
    assert_eq!(chat_message("   "), Err("Message cannot be empty"));
}

#[test]
fn chat_message_enforces_length_bounds() {
    assert_eq!(chat_message("hi"), Err("Message must be at least 3 characters"));
    assert_eq!(
        chat_message(&"x".repeat(501)),
        Err("Message cannot exceed 500 characters")
    );
    assert_eq!(chat_message("How do I register?"), Ok(()));
    assert_eq!(chat_message(&"x".repeat(500)), Ok(()));
}
