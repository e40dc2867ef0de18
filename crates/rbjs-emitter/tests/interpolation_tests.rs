use rbjs_ast::{Node, Part, Sexp};
use rbjs_emitter::{CompilationUnit, CompileContext, CompileHost};

fn emit(node: &Node, ctx: CompileContext) -> String {
    rbjs_common::tracing_config::init_tracing();
    let mut unit = CompilationUnit::default();
    unit.recurse(node, ctx).unwrap().to_string()
}

fn emit_json(json: &str, ctx: CompileContext) -> String {
    let node = Node::from_sexp(&Sexp::from_json(json).unwrap()).unwrap();
    emit(&node, ctx)
}

fn lit(text: &str) -> Part {
    Part::literal(text)
}

fn nested(node: Node) -> Part {
    Part::Nested(node)
}

// =============================================================================
// Interpolated strings
// =============================================================================

#[test]
fn test_dstr_three_operands_in_order() {
    let node = Node::DStr(vec![lit("a"), nested(Node::lvar("x")), lit("b")]);
    assert_eq!(emit(&node, CompileContext::expression()), "\"a\" + (x) + \"b\"");
}

#[test]
fn test_dstr_reordered_parts_reorder_output() {
    let node = Node::DStr(vec![lit("b"), lit("a"), nested(Node::lvar("x"))]);
    assert_eq!(emit(&node, CompileContext::expression()), "\"b\" + \"a\" + (x)");
}

#[test]
fn test_dstr_from_sexp_with_str_part() {
    assert_eq!(
        emit_json(
            r#"["dstr", "x = ", ["evstr", ["int", 1]], ["str", "!"]]"#,
            CompileContext::expression()
        ),
        "\"x = \" + (1) + \"!\""
    );
}

#[test]
fn test_dstr_receiver_wrapped_once() {
    let node = Node::DStr(vec![lit("a"), nested(Node::lvar("x")), lit("b")]);
    assert_eq!(
        emit(&node, CompileContext::receiver()),
        "(\"a\" + (x) + \"b\")"
    );
}

#[test]
fn test_dstr_leading_expression_is_seeded_with_empty_string() {
    let node = Node::DStr(vec![nested(Node::Int(1)), nested(Node::Int(2))]);
    assert_eq!(emit(&node, CompileContext::expression()), "\"\" + (1) + (2)");
}

#[test]
fn test_dstr_without_parts_is_empty_string() {
    assert_eq!(emit(&Node::DStr(vec![]), CompileContext::expression()), "\"\"");
}

#[test]
fn test_dstr_escapes_literal_fragments() {
    let node = Node::DStr(vec![lit("say \"hi\"\n"), nested(Node::lvar("name"))]);
    assert_eq!(
        emit(&node, CompileContext::expression()),
        "\"say \\\"hi\\\"\\n\" + (name)"
    );
}

#[test]
fn test_dstr_nested_interpolation() {
    let inner = Node::DStr(vec![lit("<"), nested(Node::lvar("x")), lit(">")]);
    let outer = Node::DStr(vec![lit("["), nested(inner), lit("]")]);
    assert_eq!(
        emit(&outer, CompileContext::expression()),
        "\"[\" + (\"<\" + (x) + \">\") + \"]\""
    );
}

// =============================================================================
// Interpolated symbols
// =============================================================================

#[test]
fn test_dsym_coerces_nested_with_to_s() {
    let node = Node::DSym(vec![lit("get_"), nested(Node::lvar("name"))]);
    assert_eq!(
        emit(&node, CompileContext::expression()),
        "(\"get_\" + name.$to_s())"
    );
}

#[test]
fn test_dsym_numeric_nested_is_wrapped_receiver() {
    let node = Node::DSym(vec![nested(Node::Int(1)), lit("x")]);
    assert_eq!(emit(&node, CompileContext::expression()), "((1).$to_s() + \"x\")");
}

#[test]
fn test_dsym_always_parenthesized() {
    let node = Node::DSym(vec![lit("a")]);
    assert_eq!(emit(&node, CompileContext::expression()), "(\"a\")");
    assert_eq!(emit(&node, CompileContext::statement()), "(\"a\")");
    assert_eq!(emit(&node, CompileContext::receiver()), "(\"a\")");
    assert_eq!(emit(&Node::DSym(vec![]), CompileContext::expression()), "(\"\")");
}

// =============================================================================
// Interpolated raw JavaScript
// =============================================================================

#[test]
fn test_dxstr_splices_expressions_unquoted() {
    let node = Node::DXStr(vec![lit("console.log("), nested(Node::lvar("x")), lit(")")]);
    assert_eq!(
        emit(&node, CompileContext::expression()),
        "console.log(x)"
    );
}

#[test]
fn test_dxstr_statement_terminator_added_once() {
    let node = Node::DXStr(vec![lit("f("), nested(Node::Int(1)), lit(")")]);
    assert_eq!(emit(&node, CompileContext::statement()), "f(1);");
}

#[test]
fn test_dxstr_terminator_when_any_fragment_lacks_one() {
    let node = Node::DXStr(vec![lit("a();"), nested(Node::lvar("x")), lit("b()")]);
    assert_eq!(emit(&node, CompileContext::statement()), "a();xb();");

    let node = Node::DXStr(vec![lit("a();"), nested(Node::lvar("x"))]);
    assert_eq!(emit(&node, CompileContext::statement()), "a();x");
}

#[test]
fn test_dxstr_nested_code_does_not_count_for_terminator() {
    let node = Node::DXStr(vec![nested(Node::xstr("x = 1"))]);
    assert_eq!(emit(&node, CompileContext::statement()), "x = 1");
}

#[test]
fn test_dxstr_receiver() {
    let node = Node::DXStr(vec![lit("a + "), nested(Node::lvar("b"))]);
    assert_eq!(emit(&node, CompileContext::receiver()), "(a + b)");
}

// =============================================================================
// Interpolated regexps
// =============================================================================

#[test]
fn test_dregx_constructor_call() {
    let node = Node::DRegx(vec![lit("^"), nested(Node::lvar("prefix")), lit("\\d+")]);
    assert_eq!(
        emit(&node, CompileContext::expression()),
        "(new RegExp(\"^\" + (prefix) + \"\\\\d+\"))"
    );
}

#[test]
fn test_dregx_from_sexp_mixes_part_forms() {
    assert_eq!(
        emit_json(
            r#"["dregx", ["str", "a"], ["evstr", ["lvar", "x"]], ["lvar", "y"]]"#,
            CompileContext::statement()
        ),
        "(new RegExp(\"a\" + (x) + (y)))"
    );
}

#[test]
fn test_dregx_leading_expression_and_empty() {
    let node = Node::DRegx(vec![nested(Node::lvar("x"))]);
    assert_eq!(
        emit(&node, CompileContext::expression()),
        "(new RegExp(\"\" + (x)))"
    );
    assert_eq!(
        emit(&Node::DRegx(vec![]), CompileContext::expression()),
        "(new RegExp(\"\"))"
    );
}

#[test]
fn test_dregx_nested_raw_code_keeps_precedence() {
    assert_eq!(
        emit_json(
            r#"["dregx", "a", ["evstr", ["xstr", "p || q"]]]"#,
            CompileContext::expression()
        ),
        "(new RegExp(\"a\" + (p || q)))"
    );
}

// =============================================================================
// Side-effect order
// =============================================================================

#[test]
fn test_nested_helpers_requested_in_part_order() {
    use rbjs_ast::RangeKind;

    let mut unit = CompilationUnit::default();
    let node = Node::DStr(vec![
        lit("r="),
        nested(Node::range(RangeKind::Exclusive, Node::Int(1), Node::Int(2))),
    ]);
    let text = unit.compile_expression(&node).unwrap();
    assert_eq!(text.to_string(), "\"r=\" + ($range(1, 2, false))");
    assert_eq!(unit.helpers().len(), 1);
}
