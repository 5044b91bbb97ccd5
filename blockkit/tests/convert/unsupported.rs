//! Node kinds outside the supported set abort the conversion

use blockkit::{convert, ConvertError};
use comrak::{parse_document, Arena, ComrakOptions};

fn convert_with(source: &str, options: &ComrakOptions) -> Result<blockkit::Layout, ConvertError> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, options);
    convert(root)
}

#[test]
fn test_footnote_reference_aborts_conversion() {
    let mut options = ComrakOptions::default();
    options.extension.footnotes = true;

    assert_eq!(
        convert_with("a[^1]\n\n[^1]: n\n", &options),
        Err(ConvertError::UnsupportedNode {
            kind: "footnote_reference"
        })
    );
}

#[test]
fn test_task_item_aborts_conversion() {
    let mut options = ComrakOptions::default();
    options.extension.tasklist = true;

    assert_eq!(
        convert_with("intro\n\n- [x] done\n", &options),
        Err(ConvertError::UnsupportedNode { kind: "taskitem" })
    );
}

#[test]
fn test_front_matter_aborts_conversion() {
    let mut options = ComrakOptions::default();
    options.extension.front_matter_delimiter = Some("---".to_string());

    assert_eq!(
        convert_with("---\ntitle: x\n---\n\nbody\n", &options),
        Err(ConvertError::UnsupportedNode {
            kind: "frontmatter"
        })
    );
}

#[test]
fn test_error_message_names_the_kind() {
    let mut options = ComrakOptions::default();
    options.extension.footnotes = true;

    let err = convert_with("a[^1]\n\n[^1]: n\n", &options).unwrap_err();
    assert_eq!(err.to_string(), "Unknown node type 'footnote_reference'");
}

#[test]
fn test_same_input_converts_without_the_extension() {
    let layout = convert_with("a[^1]\n\n[^1]: n\n", &ComrakOptions::default()).unwrap();
    assert!(!layout.is_empty());
}
