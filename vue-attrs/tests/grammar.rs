//! Attribute-name grammar: bound names, value-less events, name filters.

use vue_attrs::case::{to_camel_case, to_kebab_case};
use vue_attrs::{ConfigError, Grammar, Modifiers, NameFilter};

#[test]
fn bound_name_strips_prefix_and_modifier() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();

    for row in grammar.prefixes() {
        let modifiers: Vec<&str> = match row.modifiers() {
            Modifiers::Listed(listed) => listed.iter().map(String::as_str).collect(),
            Modifiers::Any => vec![".stop", ".native", ".enter"],
        };
        for base in ["value", "my-prop", "modelValue", "x"] {
            let plain = format!("{}{base}", row.prefix());
            assert_eq!(grammar.bound_name(&plain), Some(base), "{plain}");
            for modifier in &modifiers {
                let name = format!("{}{base}{modifier}", row.prefix());
                assert_eq!(grammar.bound_name(&name), Some(base), "{name}");
            }
        }
    }
}

#[test]
fn bound_name_examples() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();
    assert_eq!(grammar.bound_name(":value.sync"), Some("value"));
    assert_eq!(grammar.bound_name("v-bind:value.camel"), Some("value"));
    assert_eq!(grammar.bound_name("v-on:click"), Some("click"));
    assert_eq!(grammar.bound_name("@click.stop.prevent"), Some("click"));
    assert_eq!(grammar.bound_name("plain-attr"), None);
    assert_eq!(grammar.bound_name("v-if"), None);
}

#[test]
fn value_less_event_listeners() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();
    assert!(grammar.allows_no_value("@click.stop"));
    assert!(grammar.allows_no_value("v-on:submit.prevent"));
    assert!(grammar.allows_no_value("@click.native.once"));
    assert!(!grammar.allows_no_value("v-on:click"));
    assert!(!grammar.allows_no_value(":value.sync"));
    assert!(!grammar.allows_no_value("@.stop.native"));
    assert!(!grammar.allows_no_value("click.stop"));
}

#[test]
fn value_less_requires_something_after_prefix() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();
    assert!(!grammar.allows_no_value("@"));
    assert!(grammar.allows_no_value("@.stop"));
}

#[test]
fn name_filter_accepts_every_spelling() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();

    for written in ["my-prop", ":my-prop", "v-bind:my-prop", "myProp", ":myProp"] {
        let filter = grammar.name_filter(written);
        assert!(filter.matches("my-prop"), "{written}");
        assert!(filter.matches("myProp"), "{written}");
        assert!(!filter.matches("my-props"), "{written}");
    }
}

#[test]
fn name_filter_keeps_modifiers() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();
    let filter = grammar.name_filter(":value.sync");
    assert!(filter.matches("value.sync"));
    assert!(!filter.matches("value"));
}

#[test]
fn unprefixed_filter_is_just_spellings() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::default();
    assert_eq!(grammar.name_filter("title"), NameFilter::spellings_of("title"));
}

#[test]
fn kebab_camel_round_trip() {
    vue_attrs_testhelpers::setup();
    for kebab in ["my-prop", "a", "model-value", "x1-y2-z3", "on-update"] {
        let camel = to_camel_case(kebab);
        assert_eq!(to_kebab_case(&camel), kebab);
    }
    assert_eq!(to_camel_case("my-prop"), "myProp");
    assert_eq!(to_kebab_case("myProp"), "my-prop");
}

#[test]
fn custom_grammar_from_json() {
    vue_attrs_testhelpers::setup();
    let grammar = Grammar::from_json(
        r#"{
            "prefixes": [
                { "prefix": "bind:", "modifiers": [".once"] },
                { "prefix": "on:", "modifiers": null }
            ],
            "no_value": [{ "prefix": "on:", "modifiers": [".silent"] }],
            "bind_variant_prefixes": ["bind:"]
        }"#,
    )
    .unwrap();

    assert_eq!(grammar.bound_name("bind:title.once"), Some("title"));
    assert_eq!(grammar.bound_name("on:press.long"), Some("press"));
    assert_eq!(grammar.bound_name(":title"), None);
    assert!(grammar.allows_no_value("on:press.silent"));
    assert!(!grammar.allows_no_value("@click.stop"));
    assert_eq!(grammar.variant_prefixes().collect::<Vec<_>>(), ["bind:"]);
}

#[test]
fn json_optional_tables_default_to_empty() {
    vue_attrs_testhelpers::setup();
    let grammar =
        Grammar::from_json(r#"{ "prefixes": [{ "prefix": ":", "modifiers": null }] }"#).unwrap();
    assert_eq!(grammar.variant_prefixes().len(), 0);
    assert!(!grammar.allows_no_value(":x.stop"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    vue_attrs_testhelpers::setup();
    let err = Grammar::from_json("{ \"prefixes\": ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
    assert!(err.to_string().starts_with("invalid grammar configuration: "));
}

#[test]
fn invalid_tables_are_rejected_after_parsing() {
    vue_attrs_testhelpers::setup();
    let err = Grammar::from_json(
        r#"{ "prefixes": [{ "prefix": ":", "modifiers": null }, { "prefix": ":", "modifiers": null }] }"#,
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::DuplicatePrefix(":".to_string()));
}
