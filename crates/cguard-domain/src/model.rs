use std::ops::Range;

/// Syntactic categories the rules distinguish.
///
/// Everything else collapses into [`NodeKind::Other`]; the grammar name is still kept on
/// the node for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TranslationUnit,
    FunctionDefinition,
    FunctionDeclarator,
    PointerDeclarator,
    ParenthesizedDeclarator,
    AttributedDeclarator,
    ArrayDeclarator,
    InitDeclarator,
    Identifier,
    AssignmentExpression,
    /// The `++` token of an update expression.
    Increment,
    /// The `--` token of an update expression.
    Decrement,
    CallExpression,
    IfStatement,
    ElseClause,
    ForStatement,
    WhileStatement,
    DoStatement,
    CompoundStatement,
    GotoStatement,
    LabeledStatement,
    GnuAsmExpression,
    PreprocInclude,
    SystemLibString,
    StringLiteral,
    PreprocDef,
    PreprocFunctionDef,
    PreprocArg,
    Comment,
    Error,
    Other,
}

impl NodeKind {
    /// Map a tree-sitter C grammar node type onto a kind.
    pub fn from_grammar_name(name: &str) -> Self {
        match name {
            "translation_unit" => NodeKind::TranslationUnit,
            "function_definition" => NodeKind::FunctionDefinition,
            "function_declarator" => NodeKind::FunctionDeclarator,
            "pointer_declarator" => NodeKind::PointerDeclarator,
            "parenthesized_declarator" => NodeKind::ParenthesizedDeclarator,
            "attributed_declarator" => NodeKind::AttributedDeclarator,
            "array_declarator" => NodeKind::ArrayDeclarator,
            "init_declarator" => NodeKind::InitDeclarator,
            "identifier" => NodeKind::Identifier,
            "assignment_expression" => NodeKind::AssignmentExpression,
            "++" => NodeKind::Increment,
            "--" => NodeKind::Decrement,
            "call_expression" => NodeKind::CallExpression,
            "if_statement" => NodeKind::IfStatement,
            "else_clause" => NodeKind::ElseClause,
            "for_statement" => NodeKind::ForStatement,
            "while_statement" => NodeKind::WhileStatement,
            "do_statement" => NodeKind::DoStatement,
            "compound_statement" => NodeKind::CompoundStatement,
            "goto_statement" => NodeKind::GotoStatement,
            "labeled_statement" => NodeKind::LabeledStatement,
            "gnu_asm_expression" => NodeKind::GnuAsmExpression,
            "preproc_include" => NodeKind::PreprocInclude,
            "system_lib_string" => NodeKind::SystemLibString,
            "string_literal" => NodeKind::StringLiteral,
            "preproc_def" => NodeKind::PreprocDef,
            "preproc_function_def" => NodeKind::PreprocFunctionDef,
            "preproc_arg" => NodeKind::PreprocArg,
            "comment" => NodeKind::Comment,
            "ERROR" => NodeKind::Error,
            _ => NodeKind::Other,
        }
    }

    pub fn is_loop(self) -> bool {
        matches!(
            self,
            NodeKind::ForStatement | NodeKind::WhileStatement | NodeKind::DoStatement
        )
    }

    /// `++`, `--` and assignment expressions: mutation of an existing binding.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            NodeKind::AssignmentExpression | NodeKind::Increment | NodeKind::Decrement
        )
    }
}

/// One node of a parsed compilation unit.
///
/// Read-only once built. Children are stored in source order and include anonymous tokens
/// (`if`, `(`, `++`, ...) and comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Node type as spelled by the grammar (`"if_statement"`, `"("`).
    pub grammar_name: String,
    /// Role this node plays in its parent (`"body"`, `"consequence"`), when the grammar names one.
    pub field: Option<&'static str>,
    pub named: bool,
    pub start: usize,
    pub end: usize,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(grammar_name: &str, named: bool, range: Range<usize>) -> Self {
        Self {
            kind: NodeKind::from_grammar_name(grammar_name),
            grammar_name: grammar_name.to_string(),
            field: None,
            named,
            start: range.start,
            end: range.end,
            children: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A whole compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    pub fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }
}
