/**
 * Evaluate Tests
 *
 * Rendering compiled messages against named and positional values
 */

use i18n_compiler::render::{Fragment, FragmentRenderer, Layered, StringRenderer};
use i18n_compiler::{evaluate, CompiledMessage, Interpolation, Key, Renderer};
use indexmap::IndexMap;
use serde_json::json;
use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    fn interpolated(parts: &[&str], keys: Vec<Key>) -> CompiledMessage {
        CompiledMessage::Interpolated(Interpolation::new(
            parts.iter().map(|p| p.to_string()).collect(),
            keys,
        ))
    }

    fn greeting() -> CompiledMessage {
        interpolated(
            &["Hello ", "! You have ", " new messages."],
            vec![Key::from("name"), Key::from(0)],
        )
    }

    #[test]
    fn should_return_static_text_unchanged() {
        assert_eq!(evaluate(&CompiledMessage::from("Plain"), &()), "Plain");
    }

    #[test]
    fn should_interleave_segments_and_values() {
        let ctx = json!({ "name": "Ada", "0": 3 });
        assert_eq!(evaluate(&greeting(), &ctx), "Hello Ada! You have 3 new messages.");
    }

    #[test]
    fn should_render_missing_values_as_nothing() {
        assert_eq!(evaluate(&greeting(), &()), "Hello ! You have  new messages.");
        let message = interpolated(&["Hello ", ""], vec![Key::from("name")]);
        assert_eq!(evaluate(&message, &json!({})), "Hello ");
    }

    #[test]
    fn should_read_positional_values_from_sequences() {
        let message = interpolated(&["", " and ", ""], vec![Key::from(0), Key::from(1)]);
        assert_eq!(evaluate(&message, &vec!["tea", "cake"]), "tea and cake");
        assert_eq!(evaluate(&message, &["x"]), "x and ");
        assert_eq!(evaluate(&message, &json!(["a", 1])), "a and 1");
    }

    #[test]
    fn should_read_named_values_from_maps() {
        let message = interpolated(&["", " is ", ""], vec![Key::from("who"), Key::from("age")]);

        let mut hash = HashMap::new();
        hash.insert("who".to_string(), "Ada".to_string());
        hash.insert("age".to_string(), "36".to_string());
        assert_eq!(evaluate(&message, &hash), "Ada is 36");

        let mut ordered: IndexMap<&str, i32> = IndexMap::new();
        ordered.insert("who", 7);
        ordered.insert("age", 8);
        assert_eq!(evaluate(&message, &ordered), "7 is 8");
    }

    #[test]
    fn should_render_json_scalars_without_quotes() {
        let message = interpolated(&["", "/", "/", "."], vec!["s".into(), "b".into(), "z".into()]);
        assert_eq!(
            evaluate(&message, &json!({ "s": "str", "b": true, "z": null })),
            "str/true/."
        );
    }

    #[test]
    fn should_prefer_the_first_layer() {
        let message = interpolated(&["", " ", ""], vec!["n".into(), "unit".into()]);
        let defaults = json!({ "n": 1, "unit": "kg" });
        let overrides = json!({ "n": 2 });
        assert_eq!(evaluate(&message, &Layered(&overrides, &defaults)), "2 kg");
    }

    #[test]
    fn should_render_fragments_with_slots() {
        let fragments = greeting().render(&mut FragmentRenderer::new());
        assert_eq!(
            fragments,
            vec![
                Fragment::Text("Hello ".to_string()),
                Fragment::Slot(Key::from("name")),
                Fragment::Text("! You have ".to_string()),
                Fragment::Slot(Key::from(0)),
                Fragment::Text(" new messages.".to_string()),
            ]
        );
    }

    #[test]
    fn should_drop_empty_fragments() {
        let message = interpolated(&["", "", ""], vec!["a".into(), "b".into()]);
        assert_eq!(
            message.render(&mut FragmentRenderer),
            vec![Fragment::Slot(Key::from("a")), Fragment::Slot(Key::from("b"))]
        );
        assert!(CompiledMessage::from("").render(&mut FragmentRenderer).is_empty());
    }

    #[test]
    fn should_accept_closures_as_renderers() {
        let mut calls = 0;
        let mut count_keys = |parts: &[String], keys: &[Key]| {
            calls += 1;
            assert_eq!(parts.len(), keys.len() + 1);
            keys.len()
        };
        assert_eq!(greeting().render(&mut count_keys), 2);
        assert_eq!(CompiledMessage::from("x").render(&mut count_keys), 0);
        assert_eq!(calls, 2);
    }

    #[test]
    fn should_match_evaluate_with_a_string_renderer() {
        let ctx = json!({ "name": "Bo", "0": 1 });
        let mut renderer = StringRenderer::new(&ctx);
        assert_eq!(greeting().render(&mut renderer), evaluate(&greeting(), &ctx));
    }

    #[test]
    fn should_implement_custom_renderers() {
        struct Upper;
        impl Renderer for Upper {
            type Output = String;
            fn render(&mut self, parts: &[String], keys: &[Key]) -> String {
                let mut out = parts.concat().to_uppercase();
                for key in keys {
                    out.push_str(&format!("[{}]", key));
                }
                out
            }
        }
        assert_eq!(greeting().render(&mut Upper), "HELLO ! YOU HAVE  NEW MESSAGES.[name][0]");
    }
}
