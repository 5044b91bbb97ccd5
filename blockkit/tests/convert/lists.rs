//! Nested lists, indentation and ordinals

use super::single_section;

#[test]
fn test_two_level_bullets() {
    assert_eq!(single_section("- a\n  - b\n"), "- a\n   - b\n");
}

#[test]
fn test_three_level_bullets() {
    assert_eq!(
        single_section("- a\n  - b\n    - c\n"),
        "- a\n   - b\n      - c\n"
    );
}

#[test]
fn test_nested_ordered_lists_count_per_level() {
    let md = "1. one\n2. two\n   1. inner one\n   2. inner two\n3. three\n";
    assert_eq!(
        single_section(md),
        "1. one\n2. two\n   1. inner one\n   2. inner two\n3. three\n"
    );
}

#[test]
fn test_sibling_sublists_restart_numbering() {
    let md = "1. a\n   1. x\n   2. y\n2. b\n   1. z\n";
    assert_eq!(single_section(md), "1. a\n   1. x\n   2. y\n2. b\n   1. z\n");
}

#[test]
fn test_lists_separated_by_paragraph_restart_numbering() {
    let md = "1. a\n2. b\n\ntext\n\n1. c\n";
    assert_eq!(single_section(md), "1. a\n2. b\n\ntext\n\n1. c\n");
}

#[test]
fn test_numbering_starts_at_one() {
    assert_eq!(single_section("5. five\n6. six\n"), "1. five\n2. six\n");
}

#[test]
fn test_paren_delimiter() {
    assert_eq!(single_section("1) a\n2) b\n"), "1) a\n2) b\n");
}

#[test]
fn test_mixed_nesting() {
    let md = "1. a\n   - b\n     1. c\n2. d\n";
    assert_eq!(single_section(md), "1. a\n   - b\n      1. c\n2. d\n");
}

#[test]
fn test_loose_list_renders_like_tight_list() {
    assert_eq!(single_section("- a\n\n- b\n"), "- a\n- b\n");
}

#[test]
fn test_item_inline_formatting() {
    assert_eq!(
        single_section("- *a* and `b`\n- [c](https://c.example)\n"),
        "- _a_ and `b`\n- <https://c.example|c>\n"
    );
}

#[test]
fn test_paragraph_after_list_is_separated() {
    assert_eq!(single_section("- a\n\nafter\n"), "- a\n\nafter\n\n");
}
