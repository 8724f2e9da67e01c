//! Grammar shapes the rules rely on, checked against the real C grammar.

use cguard_domain::query::{callee_name, child_by_field, function_name, ident_of, walk};
use cguard_domain::{NodeKind, SyntaxNode, SyntaxTree};
use cguard_parser::parse_c;

fn parse(src: &str) -> SyntaxTree {
    parse_c(src.as_bytes()).expect("parse C")
}

fn nodes_of(tree: &SyntaxTree, kind: NodeKind) -> Vec<&SyntaxNode> {
    walk(tree.root()).filter(|n| n.kind == kind).collect()
}

#[test]
fn function_names_through_pointer_declarators() {
    let src = "int main(void) { return 0; }\nchar *name(int x) { return 0; }\n";
    let tree = parse(src);

    let names: Vec<Option<&str>> = nodes_of(&tree, NodeKind::FunctionDefinition)
        .into_iter()
        .map(|def| function_name(def, src.as_bytes()))
        .collect();
    assert_eq!(names, vec![Some("main"), Some("name")]);
}

#[test]
fn prototypes_are_not_definitions() {
    let tree = parse("int helper(int x);\n");
    assert!(nodes_of(&tree, NodeKind::FunctionDefinition).is_empty());
}

#[test]
fn increments_are_anonymous_tokens() {
    let tree = parse("void f(void) { int a = 0; a++; --a; a += 2; }");

    assert_eq!(nodes_of(&tree, NodeKind::Increment).len(), 1);
    assert_eq!(nodes_of(&tree, NodeKind::Decrement).len(), 1);
    assert_eq!(nodes_of(&tree, NodeKind::AssignmentExpression).len(), 1);
    assert_eq!(nodes_of(&tree, NodeKind::InitDeclarator).len(), 1);
}

#[test]
fn else_clause_wraps_the_alternative() {
    let src = "void f(int x) { if (x) { } else if (x > 1) return; else { } }";
    let tree = parse(src);

    let ifs = nodes_of(&tree, NodeKind::IfStatement);
    assert_eq!(ifs.len(), 2);

    let outer = ifs[0];
    let consequence = child_by_field(outer, "consequence").expect("consequence");
    assert_eq!(consequence.kind, NodeKind::CompoundStatement);

    let alternative = child_by_field(outer, "alternative").expect("alternative");
    assert_eq!(alternative.kind, NodeKind::ElseClause);

    let inner = ifs[1];
    let inner_consequence = child_by_field(inner, "consequence").expect("consequence");
    assert_eq!(inner_consequence.grammar_name, "return_statement");
}

#[test]
fn loop_bodies_are_fields() {
    let tree = parse("void f(void) { while (1) x(); for (;;) { } do y(); while (0); }");

    for kind in [
        NodeKind::WhileStatement,
        NodeKind::ForStatement,
        NodeKind::DoStatement,
    ] {
        let node = nodes_of(&tree, kind)[0];
        assert!(child_by_field(node, "body").is_some(), "{kind:?} has a body");
    }
}

#[test]
fn callee_identifiers() {
    let src = "void f(void) { printf(\"hi\"); (*g)(1); }";
    let tree = parse(src);

    let callees: Vec<Option<&str>> = nodes_of(&tree, NodeKind::CallExpression)
        .into_iter()
        .map(|call| callee_name(call, src.as_bytes()))
        .collect();
    assert_eq!(callees, vec![Some("printf"), None]);
}

#[test]
fn array_declarators_in_declarations_and_parameters() {
    let tree = parse("int xs[3] = {1, 2, 3};\nint sum(int ys[]) { return 0; }\nint *p;\n");
    assert_eq!(nodes_of(&tree, NodeKind::ArrayDeclarator).len(), 2);
}

#[test]
fn define_values_are_preproc_args() {
    let src = "#define N 10000\n#define EMPTY\n#define SQ(x) ((x) * (x))\n";
    let tree = parse(src);

    let defs = nodes_of(&tree, NodeKind::PreprocDef);
    assert_eq!(defs.len(), 2);

    let value = child_by_field(defs[0], "value").expect("value");
    assert_eq!(value.kind, NodeKind::PreprocArg);
    assert_eq!(ident_of(value, src.as_bytes()).trim(), "10000");
    assert!(child_by_field(defs[1], "value").is_none());

    assert_eq!(nodes_of(&tree, NodeKind::PreprocFunctionDef).len(), 1);
}

#[test]
fn include_paths() {
    let tree = parse("#include <stdio.h>\n#include \"local.h\"\n");
    let includes = nodes_of(&tree, NodeKind::PreprocInclude);

    let kinds: Vec<NodeKind> = includes
        .iter()
        .map(|inc| child_by_field(inc, "path").expect("path").kind)
        .collect();
    assert_eq!(kinds, vec![NodeKind::SystemLibString, NodeKind::StringLiteral]);
}

#[test]
fn goto_and_labels() {
    let tree = parse("void f(void) { again: goto again; }");
    assert_eq!(nodes_of(&tree, NodeKind::LabeledStatement).len(), 1);
    assert_eq!(nodes_of(&tree, NodeKind::GotoStatement).len(), 1);
}

#[test]
fn inline_assembly_spellings() {
    let tree = parse("void f(void) { asm(\"nop\"); __asm__(\"nop\"); __asm__ volatile (\"nop\"); }");
    assert_eq!(nodes_of(&tree, NodeKind::GnuAsmExpression).len(), 3);
}

#[test]
fn malformed_source_still_parses() {
    let tree = parse("int main( { return");
    assert_eq!(tree.root().kind, NodeKind::TranslationUnit);
    // Recovery shows up as ERROR nodes or zero-width MISSING tokens.
    assert!(walk(tree.root()).any(|n| n.kind == NodeKind::Error || n.start == n.end));
}
