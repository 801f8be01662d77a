/**
 * Plural Selector Tests
 *
 * Form selection by count and clamping for short groups
 */

use i18n_compiler::runtime::plural::{select, select_index};
use i18n_compiler::{evaluate, jit_message, CompiledMessage, Translation};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_singular_or_plural_from_two_forms() {
        let forms = ["one", "many"];
        assert_eq!(select(&forms, 1), Some(&"one"));
        assert_eq!(select(&forms, 5), Some(&"many"));
        assert_eq!(select(&forms, 0), Some(&"many"));
        assert_eq!(select(&forms, -1), Some(&"many"));
    }

    #[test]
    fn should_pick_zero_one_or_many_from_three_forms() {
        let forms = ["zero", "one", "many"];
        assert_eq!(select(&forms, 0), Some(&"zero"));
        assert_eq!(select(&forms, 1), Some(&"one"));
        assert_eq!(select(&forms, 7), Some(&"many"));
        assert_eq!(select(&forms, -3), Some(&"zero"));
        assert_eq!(select(&forms, i64::MAX), Some(&"many"));
    }

    #[test]
    fn should_ignore_the_count_for_one_form() {
        for count in [-1, 0, 1, 2, 100] {
            assert_eq!(select(&["only"], count), Some(&"only"));
        }
    }

    #[test]
    fn should_use_the_first_form_for_other_lengths() {
        assert_eq!(select_index(4, 3), 0);
        assert_eq!(select(&["a", "b", "c", "d"], 2), Some(&"a"));
        assert_eq!(select::<&str>(&[], 2), None);
    }

    #[test]
    fn should_select_compiled_plural_groups() {
        let translation = jit_message("One card | {n} cards");
        assert!(translation.is_plural());
        assert_eq!(translation.select(1), Some(&CompiledMessage::from("One card")));
        let many = translation.select(13).unwrap();
        assert_eq!(evaluate(many, &json!({ "n": 13 })), "13 cards");
    }

    #[test]
    fn should_return_single_messages_for_any_count() {
        let translation = Translation::from(CompiledMessage::from("Always"));
        assert_eq!(translation.select(0), translation.select(99));
        assert_eq!(translation.first(), Some(&CompiledMessage::from("Always")));
    }
}
