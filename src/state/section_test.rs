use super::*;

#[test]
fn default_section_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

#[test]
fn nav_order_starts_at_home_and_covers_every_section() {
    assert_eq!(Section::ALL[0], Section::Home);
    assert_eq!(Section::ALL.len(), 5);
    for section in Section::ALL {
        assert!(!section.label().is_empty());
    }
}
