//! Tests for wire payload serialization shape.

use serde_json::json;

use super::types::{Embed, EmbedAuthor, EmbedField, EmbedFooter, Payload};

mod payload_shape {
    use super::*;

    #[test]
    fn default_payload_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Payload::default()).unwrap(), "{}");
    }

    #[test]
    fn absent_fields_produce_no_keys() {
        let payload = Payload {
            content: Some("hello".to_string()),
            ..Payload::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"content": "hello"})
        );
    }

    #[test]
    fn tts_serializes_only_when_true() {
        let silent = Payload::default();
        let spoken = Payload {
            tts: true,
            ..Payload::default()
        };

        assert!(serde_json::to_value(&silent).unwrap().get("tts").is_none());
        assert_eq!(
            serde_json::to_value(&spoken).unwrap(),
            json!({"tts": true})
        );
    }

    #[test]
    fn embeds_array_carries_nested_blocks() {
        let payload = Payload {
            embeds: Some(vec![Embed {
                title: Some("T".to_string()),
                author: Some(EmbedAuthor {
                    name: Some("A".to_string()),
                    ..EmbedAuthor::default()
                }),
                footer: Some(EmbedFooter {
                    text: Some("F".to_string()),
                    ..EmbedFooter::default()
                }),
                ..Embed::default()
            }]),
            ..Payload::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "embeds": [{
                    "title": "T",
                    "author": {"name": "A"},
                    "footer": {"text": "F"}
                }]
            })
        );
    }
}

mod embed_fields {
    use super::*;

    #[test]
    fn field_deserializes_from_name_value_object() {
        let field: EmbedField =
            serde_json::from_str(r#"{"name": "status", "value": "green"}"#).unwrap();

        assert_eq!(field.name, "status");
        assert_eq!(field.value, "green");
        assert_eq!(field.inline, None);
    }

    #[test]
    fn field_accepts_inline_flag() {
        let field: EmbedField =
            serde_json::from_str(r#"{"name": "n", "value": "v", "inline": true}"#).unwrap();

        assert_eq!(field.inline, Some(true));
    }

    #[test]
    fn field_without_inline_omits_the_key() {
        let field = EmbedField {
            name: "n".to_string(),
            value: "v".to_string(),
            inline: None,
        };

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({"name": "n", "value": "v"})
        );
    }

    #[test]
    fn field_missing_name_is_rejected() {
        let result: Result<EmbedField, _> = serde_json::from_str(r#"{"value": "v"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn field_order_is_preserved() {
        let fields: Vec<EmbedField> = serde_json::from_str(
            r#"[{"name": "first", "value": "1"}, {"name": "second", "value": "2"}]"#,
        )
        .unwrap();

        assert_eq!(fields[0].name, "first");
        assert_eq!(fields[1].name, "second");
    }
}
