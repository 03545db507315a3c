use formtree::{
    Field, FieldType,
    share::{
        DEFAULT_FORM_NAME, ShareConfig, StaticEnvironment, decode_url_to_form, encode_form,
        encode_form_to_url, extract_token, is_url_safe,
    },
    templates::example_form,
};
use serde_json::{Value, json};

use crate::helpers::*;

fn round_trip(fields: &[Field]) -> Vec<Field> {
    let env = StaticEnvironment::default();
    let link = encode_form_to_url(&env, fields, Some("Round trip"), None).unwrap();
    decode_url_to_form(extract_token(&link)).unwrap().fields
}

#[test]
fn test_zero_value_scenario() {
    let fields = vec![Field::new("x", FieldType::Number).with_value(0)];
    let token = encode_form(&fields, Some("F"), None).unwrap();
    let form = decode_url_to_form(&token).unwrap();
    assert_eq!(form.name, "F");
    assert_eq!(form.description, None);
    assert_eq!(form.fields, fields);
}

#[test]
fn test_round_trip_shapes() {
    let trees = vec![
        vec![],
        service_config(),
        example_form(),
        vec![
            Field::new("zero", FieldType::Number).with_value(0),
            Field::new("no", FieldType::Boolean).with_value(false),
            Field::new("blank", FieldType::Text).with_value(""),
            Field::new("null", FieldType::Text).with_value(Value::Null),
            Field::new("unset", FieldType::Text),
            Field::new("float", FieldType::Number).with_value(0.25),
        ],
        vec![
            text("emoji", "🚀 launch"),
            text("cjk", "設定ファイル"),
            text("rtl", "مرحبا"),
            text("escapes", "quote \" backslash \\ newline \n tab \t"),
        ],
        vec![Field::new("deep", FieldType::Object).with_children(vec![
            Field::new("deeper", FieldType::Object).with_children(vec![
                text_array("list", &["x", "y"]),
                Field::new("raw", FieldType::Multiselect).with_value(json!([1, "two", null])),
            ]),
        ])],
    ];

    for tree in trees {
        assert_eq!(round_trip(&tree), tree);
    }
}

#[test]
fn test_link_shape_and_length() {
    let env = StaticEnvironment::new("https://forms.example.com").unwrap();
    let link = encode_form_to_url(&env, &example_form(), None, Some("demo")).unwrap();
    assert!(link.starts_with("https://forms.example.com/builder#"));
    assert!(!link.contains('?'));
    assert!(is_url_safe(&link));

    let form = decode_url_to_form(extract_token(&link)).unwrap();
    assert_eq!(form.name, DEFAULT_FORM_NAME);
    assert_eq!(form.description.as_deref(), Some("demo"));
}

#[test]
fn test_custom_route_from_config() {
    let config: ShareConfig =
        serde_json::from_value(json!({"origin": "https://x.dev", "route": "/forms/"})).unwrap();
    let link = encode_form_to_url(&config, &[], None, None).unwrap();
    assert!(link.starts_with("https://x.dev/forms#"));
}

#[test]
fn test_tampered_tokens_decode_to_none() {
    let token = encode_form(&service_config(), None, None).unwrap();
    let truncated = &token[..token.len() / 2];
    assert!(decode_url_to_form(truncated).is_none());

    let padded = format!("{token}==");
    assert!(decode_url_to_form(&padded).is_none());

    let standard_alphabet = token.replace('-', "+").replace('_', "/");
    if standard_alphabet != token {
        assert!(decode_url_to_form(&standard_alphabet).is_none());
    }
}

#[test]
fn test_large_form_exceeds_limit() {
    let fields: Vec<Field> = (0..2_000)
        .map(|i| text(&format!("field{i}"), &format!("{i:x}-{}", i * 7919)))
        .collect();
    let link = encode_form_to_url(&StaticEnvironment::default(), &fields, None, None).unwrap();
    assert!(!is_url_safe(&link));
    assert_eq!(decode_url_to_form(extract_token(&link)).unwrap().fields, fields);
}
