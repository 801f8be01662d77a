/**
 * Abstract Emitter Tests
 *
 * String and template escaping, indentation and expression printing
 */

use i18n_compiler::output::abstract_emitter::{
    emit_expression, emit_statements, escape_string, escape_template_text,
    EmitterVisitorContext,
};
use i18n_compiler::output::output_ast as o;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_double_quotes() {
        assert_eq!(escape_string("\""), "\"\\\"\"");
    }

    #[test]
    fn should_escape_backslash() {
        assert_eq!(escape_string("\\"), "\"\\\\\"");
    }

    #[test]
    fn should_escape_newlines() {
        assert_eq!(escape_string("\n"), "\"\\n\"");
        assert_eq!(escape_template_text("\n"), "\\n");
    }

    #[test]
    fn should_escape_carriage_returns() {
        assert_eq!(escape_string("\r"), "\"\\r\"");
        assert_eq!(escape_template_text("\r"), "\\r");
    }

    #[test]
    fn should_escape_template_delimiters() {
        assert_eq!(escape_template_text("`"), "\\`");
        assert_eq!(escape_template_text("${"), "\\${");
        assert_eq!(escape_template_text("\\"), "\\\\");
    }

    #[test]
    fn should_not_escape_lone_dollars() {
        assert_eq!(escape_template_text("$"), "$");
        assert_eq!(escape_template_text("$ {"), "$ {");
        assert_eq!(escape_string("$"), "\"$\"");
    }

    #[test]
    fn should_always_quote_map_keys() {
        let map = o::literal_map(vec![
            ("valid_id".into(), o::literal(1)),
            ("my-key".into(), o::literal(2)),
            ("0".into(), o::literal(3)),
        ]);
        assert_eq!(
            emit_expression(&map),
            "{\n  \"valid_id\": 1,\n  \"my-key\": 2,\n  \"0\": 3\n}"
        );
    }

    #[test]
    fn should_indent_printed_lines() {
        let mut ctx = EmitterVisitorContext::create_root();
        ctx.println("{");
        ctx.inc_indent();
        ctx.println("a");
        ctx.dec_indent();
        ctx.print("}", false);
        assert_eq!(ctx.to_source(), "{\n  a\n}");
        assert!(!ctx.line_is_empty());
    }

    #[test]
    fn should_emit_arrow_functions() {
        let expr = o::arrow_fn(
            vec!["i".to_string()],
            o::tagged_template(
                o::variable("i"),
                vec!["a".to_string(), "b".to_string()],
                vec![o::literal(1)],
            ),
        );
        assert_eq!(emit_expression(&expr), "i => i`a${1}b`");

        let multi = o::arrow_fn(vec!["a".into(), "b".into()], o::variable("a"));
        assert_eq!(emit_expression(&multi), "(a, b) => a");
    }

    #[test]
    fn should_emit_arrays_inline() {
        let expr = o::literal_arr(vec![o::literal("x"), o::literal(true), o::literal_arr(vec![])]);
        assert_eq!(emit_expression(&expr), "[\"x\", true, []]");
    }

    #[test]
    fn should_emit_statements_on_separate_lines() {
        let source = emit_statements(&[
            o::Statement::Expression(o::variable("a")),
            o::Statement::ExportDefault(o::literal_map(vec![("k".into(), o::literal("v"))])),
        ]);
        assert_eq!(source, "a;\nexport default {\n  \"k\": \"v\"\n};\n");
    }
}
