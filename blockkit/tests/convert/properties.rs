//! Properties that hold for any input

use blockkit::escape::escape;
use blockkit::markdown::parse_markdown;
use blockkit::{Block, Converter, ParseOptions};
use comrak::Arena;
use proptest::prelude::*;

fn strip_reserved(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '&' | '<' | '>')).collect()
}

fn strip_entities(text: &str) -> String {
    text.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "")
}

/// Markdown-flavoured noise: block markers, inline markers and plain words.
fn markdown_source() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("# ".to_string()),
            Just("- ".to_string()),
            Just("1. ".to_string()),
            Just("> ".to_string()),
            Just("   ".to_string()),
            Just("\n".to_string()),
            Just("\n\n".to_string()),
            Just("*".to_string()),
            Just("**".to_string()),
            Just("~~".to_string()),
            Just("`".to_string()),
            Just("```\n".to_string()),
            Just("---\n".to_string()),
            Just("[x](https://x.example)".to_string()),
            Just("&<>".to_string()),
            "[a-z]{1,8}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn escaping_replaces_only_reserved_characters(text in any::<String>()) {
        let escaped = escape(&text);

        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert_eq!(strip_entities(&escaped), strip_reserved(&text));
        prop_assert_eq!(
            escaped.matches("&amp;").count(),
            text.matches('&').count()
        );
    }

    #[test]
    fn conversion_is_pure(source in markdown_source()) {
        let arena = Arena::new();
        let root = parse_markdown(&arena, &source, &ParseOptions::default());

        let first = Converter::new().convert(root).unwrap();
        let second = Converter::new().convert(root).unwrap();
        prop_assert_eq!(&first, &second);

        let reparsed_arena = Arena::new();
        let reparsed = parse_markdown(&reparsed_arena, &source, &ParseOptions::default());
        prop_assert_eq!(first, Converter::new().convert(reparsed).unwrap());
    }

    #[test]
    fn sections_never_touch_and_headers_carry_a_divider(source in markdown_source()) {
        let layout = blockkit::markdown_to_layout(&source, &ParseOptions::default()).unwrap();

        for pair in layout.blocks.windows(2) {
            let both_sections = matches!(
                (&pair[0], &pair[1]),
                (Block::Section { .. }, Block::Section { .. })
            );
            prop_assert!(!both_sections, "adjacent sections in {:?}", layout.blocks);
        }

        for (index, block) in layout.blocks.iter().enumerate() {
            if let Block::Header { .. } = block {
                prop_assert_eq!(layout.blocks.get(index + 1), Some(&Block::Divider));
            }
        }
    }
}
