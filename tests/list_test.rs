//! List formatting through the public API

use pokeprose::{display_name, format_list, ListFormatter, NameStyle, NamedReference, Segment};

fn link(text: &str, target: &str) -> Segment {
    Segment::Link {
        text: text.to_string(),
        target: target.to_string(),
    }
}

fn text(t: &str) -> Segment {
    Segment::Text {
        text: t.to_string(),
    }
}

#[test]
fn test_empty_list_has_no_segments() {
    let fragment = format_list(&[], "/x");
    assert_eq!(fragment.len(), 0);
    assert_eq!(fragment.plain_text(), "");
}

#[test]
fn test_single_item_has_no_trailing_separator() {
    let fragment = format_list(&[NamedReference::new("fire-red", "/t")], "/x");
    assert_eq!(fragment.segments(), &[link("Fire Red", "/x?name=fire-red")]);
}

#[test]
fn test_three_items() {
    let items: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|n| NamedReference::named(*n))
        .collect();
    let fragment = format_list(&items, "/x");
    assert_eq!(
        fragment.segments(),
        &[
            link("A", "/x?name=a"),
            text(", "),
            link("B", "/x?name=b"),
            text(" and "),
            link("C", "/x?name=c"),
        ]
    );
}

#[test]
fn test_link_count_matches_items() {
    for n in 1..12 {
        let items: Vec<_> = (0..n)
            .map(|i| NamedReference::named(format!("item-{}", i)))
            .collect();
        let fragment = format_list(&items, "/x");
        assert_eq!(fragment.links().count(), n);
        // links and separators alternate
        assert_eq!(fragment.len(), 2 * n - 1);
    }
}

#[test]
fn test_sorting_is_caller_responsibility() {
    let mut items = vec![NamedReference::named("steel"), NamedReference::named("rock")];
    assert_eq!(format_list(&items, "/t").plain_text(), "Steel and Rock");
    items.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(format_list(&items, "/t").plain_text(), "Rock and Steel");
}

#[test]
fn test_empty_name_does_not_panic() {
    let items = vec![NamedReference::named(""), NamedReference::named("  ")];
    let fragment = format_list(&items, "/x");
    assert_eq!(fragment.plain_text(), "unknown and unknown");
}

#[test]
fn test_same_input_same_output() {
    let items = vec![
        NamedReference::named("red-blue"),
        NamedReference::named("gold-silver"),
    ];
    let formatter = ListFormatter::new("/pokemon/game").with_style(NameStyle::Capitalized);
    assert_eq!(formatter.format(&items), formatter.format(&items));
}

#[test]
fn test_display_name_idempotence() {
    for x in ["Fire Red", "Ice", "Lets Go Pikachu", "Mr Mime Jr", ""] {
        assert_eq!(display_name(&display_name(x)), display_name(x));
        assert_eq!(display_name(x), x);
    }
}
