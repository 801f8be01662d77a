/**
 * Translator Tests
 *
 * `t`, `tc` and scoped lookups on top of the resolver
 */

use i18n_compiler::logging::{MemoryLogger, NullLogger};
use i18n_compiler::{FallbackLocale, I18nOptions, Messages, Resolved, Translator};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Messages {
        Messages::from_json(
            &json!({
                "en": {
                    "message": {
                        "hello": "Hello {name}, welcome!",
                        "list": "{0} and {1}",
                        "plain": "Just text"
                    },
                    "car": "car | cars",
                    "apple": "no apples | one apple | {count} apples",
                    "banana": "no bananas | {n} banana | {n} bananas",
                    "only": "English only"
                },
                "nl": {
                    "message": { "hello": "Hallo {name}, welkom!" },
                    "car": "auto | auto's"
                },
                "en-GB": {
                    "message": { "plain": "Just text, innit" }
                }
            }),
            &NullLogger,
        )
        .unwrap()
    }

    fn translator(locale: &str) -> Translator<NullLogger> {
        let options = I18nOptions {
            locale: locale.to_string(),
            ..I18nOptions::default()
        };
        Translator::new(options, catalog()).with_logger(NullLogger)
    }

    #[test]
    fn should_translate_named_placeholders() {
        let i18n = translator("en");
        assert_eq!(i18n.t("message.hello", &json!({ "name": "Ada" })), "Hello Ada, welcome!");
    }

    #[test]
    fn should_translate_positional_placeholders() {
        let i18n = translator("en");
        assert_eq!(i18n.t("message.list", &["tea", "cake"]), "tea and cake");
    }

    #[test]
    fn should_leave_missing_values_empty() {
        let i18n = translator("en");
        assert_eq!(i18n.t("message.hello", &()), "Hello , welcome!");
    }

    #[test]
    fn should_follow_the_active_locale() {
        let mut i18n = translator("en");
        i18n.set_locale("nl");
        assert_eq!(i18n.locale(), "nl");
        assert_eq!(i18n.t("message.hello", &json!({ "name": "Bo" })), "Hallo Bo, welkom!");
        // Missing in nl, found through the default fallback locale.
        assert_eq!(i18n.t("only", &()), "English only");
    }

    #[test]
    fn should_resolve_dialects_before_fallbacks() {
        let i18n = translator("en-GB");
        assert_eq!(i18n.t("message.plain", &()), "Just text, innit");
        assert_eq!(i18n.t("message.hello", &json!({ "name": "Cy" })), "Hello Cy, welcome!");
    }

    #[test]
    fn should_return_the_key_when_untranslated() {
        let mut i18n = translator("nl");
        i18n.set_fallback_locale(FallbackLocale::none());
        assert_eq!(i18n.t("only", &()), "only");
        assert_eq!(i18n.tc("nowhere.to.be.found", 3, &()), "nowhere.to.be.found");
    }

    #[test]
    fn should_render_the_first_case_without_a_count() {
        let i18n = translator("en");
        assert_eq!(i18n.t("car", &()), "car");
    }

    #[test]
    fn should_pluralize_two_forms() {
        let i18n = translator("en");
        assert_eq!(i18n.tc("car", 1, &()), "car");
        assert_eq!(i18n.tc("car", 2, &()), "cars");
        assert_eq!(i18n.tc("car", 0, &()), "cars");
    }

    #[test]
    fn should_pluralize_three_forms_with_count_defaults() {
        let i18n = translator("en");
        assert_eq!(i18n.tc("apple", 0, &()), "no apples");
        assert_eq!(i18n.tc("apple", 1, &()), "one apple");
        assert_eq!(i18n.tc("apple", 10, &()), "10 apples");
        assert_eq!(i18n.tc("banana", 1, &()), "1 banana");
        assert_eq!(i18n.tc("banana", 2, &()), "2 bananas");
    }

    #[test]
    fn should_let_the_context_override_count_defaults() {
        let i18n = translator("en");
        assert_eq!(
            i18n.tc("banana", 10, &json!({ "n": "too many" })),
            "too many bananas"
        );
        assert_eq!(i18n.tc("apple", 3, &json!({ "count": "three" })), "three apples");
    }

    #[test]
    fn should_pluralize_in_the_active_locale() {
        let i18n = translator("nl");
        assert_eq!(i18n.tc("car", 1, &()), "auto");
        assert_eq!(i18n.tc("car", 4, &()), "auto's");
    }

    #[test]
    fn should_prefer_scoped_messages() {
        let i18n = translator("en");
        let local = Messages::from_json(
            &json!({ "en": { "message": { "plain": "Component text" } }, "nl": { "only": "Alleen" } }),
            &NullLogger,
        )
        .unwrap();
        let scoped = i18n.scope(&local);
        assert_eq!(scoped.t("message.plain", &()), "Component text");
        assert_eq!(scoped.t("message.hello", &json!({ "name": "Di" })), "Hello Di, welcome!");
        assert_eq!(scoped.tc("car", 2, &()), "cars");

        let dutch = i18n.scope(&local).with_locale("nl");
        assert_eq!(dutch.locale(), "nl");
        assert_eq!(dutch.t("only", &()), "Alleen");
        assert!(matches!(dutch.lookup("car"), Resolved::Message(_)));
        assert_eq!(dutch.lookup("absent"), Resolved::Key("absent"));
    }

    #[test]
    fn should_report_resolution_warnings_to_its_logger() {
        let logger = MemoryLogger::default();
        let options = I18nOptions {
            locale: "nl".to_string(),
            ..I18nOptions::default()
        };
        let i18n = Translator::new(options, catalog()).with_logger(&logger);
        assert_eq!(i18n.t("only", &()), "English only");
        assert_eq!(logger.warnings().len(), 2);
    }

    #[test]
    fn should_honor_silent_options() {
        let logger = MemoryLogger::default();
        let options = I18nOptions::from_json(
            r#"{ "locale": "nl", "fallbackLocale": ["de", "en"], "silentTranslationWarn": true, "silentFallbackWarn": true }"#,
        )
        .unwrap();
        let i18n = Translator::new(options, catalog()).with_logger(&logger);
        assert_eq!(i18n.t("only", &()), "English only");
        assert_eq!(i18n.t("absent", &()), "absent");
        assert!(logger.is_empty());
    }

    #[test]
    fn should_accept_merged_catalogs() {
        let mut i18n = translator("en");
        let mut extra = Messages::new();
        extra.insert("en", "late", i18n_compiler::jit_message("Added {x}"));
        i18n.messages_mut().merge(extra);
        assert_eq!(i18n.t("late", &json!({ "x": 1 })), "Added 1");
        assert!(i18n.messages().locales().any(|locale| locale == "en-GB"));
    }
}
