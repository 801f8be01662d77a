/**
 * Message Parser Tests
 *
 * Plural splitting, placeholder tokenizing and literal tokens
 */

use i18n_compiler::message::{parse, parse_single, split_plural, Item, Message, ParsedTemplate};

#[cfg(test)]
mod tests {
    use super::*;

    fn items(template: &str) -> Vec<Item> {
        match parse(template) {
            ParsedTemplate::Single(message) => message.items,
            ParsedTemplate::Plural(cases) => panic!("unexpected plural: {:?}", cases),
        }
    }

    #[test]
    fn should_parse_plain_text_as_one_text_item() {
        assert_eq!(items("This is a message"), vec![Item::text("This is a message")]);
    }

    #[test]
    fn should_parse_empty_template_as_empty_text() {
        assert_eq!(items(""), vec![Item::text("")]);
    }

    #[test]
    fn should_parse_named_placeholders() {
        assert_eq!(
            items("Hello {name}!"),
            vec![Item::text("Hello "), Item::named("name"), Item::text("!")]
        );
    }

    #[test]
    fn should_trim_whitespace_inside_placeholders() {
        assert_eq!(items("{  name }"), vec![Item::named("name")]);
    }

    #[test]
    fn should_parse_dotted_and_mixed_identifiers_as_named() {
        assert_eq!(
            items("{user.name} {a1} {_x}"),
            vec![
                Item::named("user.name"),
                Item::text(" "),
                Item::named("a1"),
                Item::text(" "),
                Item::named("_x"),
            ]
        );
    }

    #[test]
    fn should_parse_numeric_identifiers_as_list_items() {
        assert_eq!(
            items("Hello {0}! Welcome to {1}!"),
            vec![
                Item::text("Hello "),
                Item::list(0),
                Item::text("! Welcome to "),
                Item::list(1),
                Item::text("!"),
            ]
        );
    }

    #[test]
    fn should_parse_adjacent_placeholders_without_empty_text() {
        assert_eq!(items("{a}{b}"), vec![Item::named("a"), Item::named("b")]);
    }

    #[test]
    fn should_parse_literal_tokens() {
        assert_eq!(items("{'{'}"), vec![Item::literal("{")]);
        assert_eq!(
            items("Use {'{'}name{'}'} syntax"),
            vec![
                Item::text("Use "),
                Item::literal("{"),
                Item::text("name"),
                Item::literal("}"),
                Item::text(" syntax"),
            ]
        );
    }

    #[test]
    fn should_keep_malformed_placeholders_as_text() {
        assert_eq!(items("{ unclosed"), vec![Item::text("{ unclosed")]);
        assert_eq!(items("{not valid!}"), vec![Item::text("{not valid!}")]);
        assert_eq!(items("{}"), vec![Item::text("{}")]);
        assert_eq!(items("{'abc}"), vec![Item::text("{'abc}")]);
        assert_eq!(items("{'a'b'}"), vec![Item::text("{'a'b'}")]);
    }

    #[test]
    fn should_keep_backticks_as_text() {
        assert_eq!(
            items("Hello `{name}`!"),
            vec![Item::text("Hello `"), Item::named("name"), Item::text("`!")]
        );
    }

    #[test]
    fn should_split_plural_cases() {
        let parsed = parse("One card | {n} cards");
        assert!(parsed.is_plural());
        assert_eq!(
            parsed,
            ParsedTemplate::Plural(vec![
                Message::new(vec![Item::text("One card")]),
                Message::new(vec![Item::named("n"), Item::text(" cards")]),
            ])
        );
    }

    #[test]
    fn should_split_three_cases_and_trim_each() {
        assert_eq!(
            split_plural("  no apples |one apple|   {n} apples  "),
            vec!["no apples", "one apple", "{n} apples"]
        );
        assert_eq!(parse("a | b | c").cases().len(), 3);
    }

    #[test]
    fn should_not_split_on_escaped_bars() {
        assert_eq!(split_plural(r"a \| b"), vec![r"a \| b"]);
        assert_eq!(items(r"a \| b"), vec![Item::text("a | b")]);
    }

    #[test]
    fn should_not_split_inside_literal_tokens() {
        assert_eq!(
            items("a {'|'} b"),
            vec![Item::text("a "), Item::literal("|"), Item::text(" b")]
        );
    }

    #[test]
    fn should_keep_empty_plural_cases() {
        let parsed = parse("| x");
        assert_eq!(parsed.cases().len(), 2);
        assert_eq!(parsed.cases()[0], Message::new(vec![Item::text("")]));
    }

    #[test]
    fn should_parse_single_case_without_splitting() {
        assert_eq!(
            parse_single("{n} | items").items,
            vec![Item::named("n"), Item::text(" | items")]
        );
    }

    #[test]
    fn should_handle_multibyte_text() {
        assert_eq!(
            items("Eén banaan voor {naam} → ✓"),
            vec![Item::text("Eén banaan voor "), Item::named("naam"), Item::text(" → ✓")]
        );
        assert_eq!(split_plural("één | {n} ✓"), vec!["één", "{n} ✓"]);
    }
}
