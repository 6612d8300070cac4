//! Conformance tests for the emitted dialect, line by line: every form
//! documented in `inigen::format` appears here with its exact spelling.

use inigen::{from_str, ini, to_string, to_string_with_options, IniOptions, IniValue};

#[test]
fn test_scalar_assignment_forms() {
    let text = to_string(&ini!({
        "flag": true,
        "level": 3,
        "ratio": 0.25,
        "name": "app",
        "unset": null
    }))
    .unwrap();
    assert_eq!(
        text,
        "flag = true\nlevel = 3\nratio = 0.25\nname = \"app\"\nunset = null\n"
    );
}

#[test]
fn test_booleans_are_words_not_digits() {
    let text = to_string(&ini!({"a": true, "b": false})).unwrap();
    assert_eq!(text, "a = true\nb = false\n");
}

#[test]
fn test_blank_line_precedes_section_header() {
    let text = to_string(&ini!({"x": 1, "s": {"y": 2}})).unwrap();
    assert_eq!(text, "x = 1\n\n[s]\ny = 2\n");
}

#[test]
fn test_flatten_sequential_preserves_item_order() {
    let text = to_string(&ini!({"l": ["a", "b", "c"]})).unwrap();
    assert_eq!(text, "\n[l]\nl[] = \"a\"\nl[] = \"b\"\nl[] = \"c\"\n");
}

#[test]
fn test_flatten_numeric_keeps_indices() {
    let text = to_string(&ini!({"s": {"slots": {"0": "a", "2": "c"}}})).unwrap();
    assert_eq!(text, "\n[s]\nslots[0] = \"a\"\nslots[2] = \"c\"\n");
}

#[test]
fn test_flatten_associative_uses_keys() {
    let text = to_string(&ini!({"s": {"m": {"left": 1, "right": 2}}})).unwrap();
    assert_eq!(text, "\n[s]\nm[left] = 1\nm[right] = 2\n");
}

#[test]
fn test_joined_list_is_quoted_scalar() {
    let text = to_string(&ini!({"s": {"m": {"list": ["x", "y"]}}})).unwrap();
    assert_eq!(text, "\n[s]\nm[list] = \"x#y\"\n");
}

#[test]
fn test_top_level_mapping_opens_section_body() {
    // a top-level mapping is a section body whatever its key shape
    let text = to_string(&ini!({"l": {"0": "a", "1": "b"}})).unwrap();
    assert_eq!(text, "\n[l]\n0 = \"a\"\n1 = \"b\"\n");
}

#[test]
fn test_sequential_mapping_inside_section_flattens_like_a_list() {
    let as_map = to_string(&ini!({"s": {"l": {"0": "a", "1": "b"}}})).unwrap();
    let as_list = to_string(&ini!({"s": {"l": ["a", "b"]}})).unwrap();
    assert_eq!(as_map, as_list);
    assert_eq!(as_map, "\n[s]\nl[] = \"a\"\nl[] = \"b\"\n");
}

#[test]
fn test_orderer_groups_scalars_first() {
    let text = to_string(&ini!({
        "n1": {"a": 1},
        "s1": 1,
        "n2": {"b": 2},
        "s2": 2
    }))
    .unwrap();
    assert_eq!(text, "s1 = 1\ns2 = 2\n\n[n1]\na = 1\n\n[n2]\nb = 2\n");
}

#[test]
fn test_reader_accepts_ini_boolean_words() {
    let back: IniValue = from_str("a = yes\nb = off\nc = ON\n").unwrap();
    assert_eq!(back, ini!({"a": true, "b": false, "c": true}));
}

#[test]
fn test_reader_types_bare_literals() {
    let back: IniValue = from_str("i = 42\nf = 1.5\nn = null\ns = bare text\n").unwrap();
    assert_eq!(
        back,
        ini!({"i": 42, "f": 1.5, "n": null, "s": "bare text"})
    );
}

#[test]
fn test_quoting_keeps_literals_as_strings() {
    let back: IniValue = from_str("a = \"42\"\nb = \"true\"\nc = \"null\"\n").unwrap();
    assert_eq!(back, ini!({"a": "42", "b": "true", "c": "null"}));
}

#[test]
fn test_whole_float_normalizes_to_integer_literal() {
    let text = to_string(&ini!({"x": 3.0})).unwrap();
    assert_eq!(text, "x = 3\n");
    // cross-variant numeric equality keeps the round trip intact
    let back: IniValue = from_str(&text).unwrap();
    assert_eq!(back, ini!({"x": 3.0}));
}

#[test]
fn test_custom_delimiter_both_directions() {
    let options = IniOptions::new().with_delimiter('|');
    let tree = ini!({"s": {"m": {"list": ["a#b", "c"]}}});
    let text = to_string_with_options(&tree, options.clone()).unwrap();
    assert_eq!(text, "\n[s]\nm[list] = \"a#b|c\"\n");

    let back: IniValue =
        inigen::from_str_with_options(&text, options).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_empty_nested_values_emit_nothing() {
    let text = to_string(&ini!({"kept": 1, "gone": {}, "also_gone": []})).unwrap();
    assert_eq!(text, "kept = 1\n");
}
