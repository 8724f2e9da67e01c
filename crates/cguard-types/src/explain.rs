//! Explain registry for constraint tags and policy fields.
//!
//! Maps a tag (e.g. `loops`) or field (e.g. `require_includes`) to a human-readable explanation
//! with a before/after C example.

use crate::ids;

/// Explanation entry for a tag or policy field.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the constraint.
    pub title: &'static str,
    /// What the constraint rejects.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would be rejected.
    pub before: &'static str,
    /// Code that passes.
    pub after: &'static str,
}

/// Look up an explanation by tag or policy field name.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Tags
        ids::TAG_MAIN => Some(explain_main()),
        ids::TAG_ASSIGNMENT => Some(explain_assignment()),
        ids::TAG_REASSIGNMENT => Some(explain_reassignment()),
        ids::TAG_LOOPS => Some(explain_loops()),
        ids::TAG_IF_STATEMENTS => Some(explain_if_statements()),
        ids::TAG_HELPER_FUNCTIONS => Some(explain_helper_functions()),
        ids::TAG_PRINTING => Some(explain_printing()),
        ids::TAG_DIRECT_RECURSION => Some(explain_direct_recursion()),
        ids::TAG_ARRAYS => Some(explain_arrays()),
        ids::TAG_NONNUMERIC_DEFINES => Some(explain_nonnumeric_defines()),
        ids::TAG_FUNCTION_POINTERS => Some(explain_function_pointers()),
        ids::TAG_ATYPICAL_CONTROL_FLOW => Some(explain_atypical_control_flow()),
        ids::TAG_BRACELESS_BLOCKS => Some(explain_braceless_blocks()),
        ids::TAG_ASM => Some(explain_asm()),

        // Fields
        ids::FIELD_REQUIRE_INCLUDES => Some(explain_require_includes()),
        ids::FIELD_ALLOW_INCLUDES => Some(explain_allow_includes()),
        ids::FIELD_REQUIRE_FUNCTIONS => Some(explain_require_functions()),
        ids::FIELD_DISALLOW_SYMBOLS => Some(explain_disallow_symbols()),
        ids::FIELD_LIMIT_SOURCE_BYTES => Some(explain_limit_source_bytes()),
        ids::FIELD_LIMIT_DEFINED_FUNCTIONS => Some(explain_limit_defined_functions()),

        _ => None,
    }
}

/// List all known `disallow` tags.
pub fn all_tags() -> &'static [&'static str] {
    &[
        ids::TAG_MAIN,
        ids::TAG_ASSIGNMENT,
        ids::TAG_REASSIGNMENT,
        ids::TAG_LOOPS,
        ids::TAG_IF_STATEMENTS,
        ids::TAG_HELPER_FUNCTIONS,
        ids::TAG_PRINTING,
        ids::TAG_DIRECT_RECURSION,
        ids::TAG_ARRAYS,
        ids::TAG_NONNUMERIC_DEFINES,
        ids::TAG_FUNCTION_POINTERS,
        ids::TAG_ATYPICAL_CONTROL_FLOW,
        ids::TAG_BRACELESS_BLOCKS,
        ids::TAG_ASM,
    ]
}

/// List all policy fields other than `disallow`.
pub fn all_fields() -> &'static [&'static str] {
    &[
        ids::FIELD_REQUIRE_INCLUDES,
        ids::FIELD_ALLOW_INCLUDES,
        ids::FIELD_REQUIRE_FUNCTIONS,
        ids::FIELD_DISALLOW_SYMBOLS,
        ids::FIELD_LIMIT_SOURCE_BYTES,
        ids::FIELD_LIMIT_DEFINED_FUNCTIONS,
    ]
}

// --- Tag explanations ---

fn explain_main() -> Explanation {
    Explanation {
        title: "No main Function",
        description: "\
Rejects a function definition named exactly `main`.

The grading harness links its own `main`; a submission that defines one would clash with it.
Only the exact name matches: `main_helper` is fine.",
        remediation: "Remove the `main` function and keep only the requested functions.",
        examples: ExamplePair {
            before: "int main() {\n    return solve(3);\n}",
            after: "int solve(int n) {\n    return n * 2;\n}",
        },
    }
}

fn explain_assignment() -> Explanation {
    Explanation {
        title: "No Assignment",
        description: "\
Rejects every declaration with an initializer, every assignment expression (including compound
forms like `*=`), and every `++`/`--` operator.

This is the strictest form: even first-time initialization such as `int a = 1;` is rejected.",
        remediation: "Express the computation with parameters, return values and pure expressions.",
        examples: ExamplePair {
            before: "int twice(int a) {\n    int b = a * 2;\n    return b;\n}",
            after: "int twice(int a) {\n    return a * 2;\n}",
        },
    }
}

fn explain_reassignment() -> Explanation {
    Explanation {
        title: "No Reassignment",
        description: "\
Rejects assignment expressions and `++`/`--` operators.

Declarations with an initializer are allowed: only mutation of an already-bound name is rejected.",
        remediation: "Bind each value once, at its declaration.",
        examples: ExamplePair {
            before: "int f(int a) {\n    a = a + 1;\n    return a;\n}",
            after: "int f(int a) {\n    int b = a + 1;\n    return b;\n}",
        },
    }
}

fn explain_loops() -> Explanation {
    Explanation {
        title: "No Loops",
        description: "Rejects `for`, `while` and `do`/`while` statements at any nesting depth.",
        remediation: "Use recursion instead of iteration.",
        examples: ExamplePair {
            before: "int sum(int n) {\n    int s = 0;\n    for (int i = 1; i <= n; i++) {\n        s += i;\n    }\n    return s;\n}",
            after: "int sum(int n) {\n    return n == 0 ? 0 : n + sum(n - 1);\n}",
        },
    }
}

fn explain_if_statements() -> Explanation {
    Explanation {
        title: "No if Statements",
        description: "\
Rejects `if` statements and every kind of loop.

Loops are conditional control flow, so banning conditionals bans them too.",
        remediation: "Use conditional expressions (`?:`) or arithmetic instead of branching statements.",
        examples: ExamplePair {
            before: "int max(int a, int b) {\n    if (a > b) {\n        return a;\n    }\n    return b;\n}",
            after: "int max(int a, int b) {\n    return a > b ? a : b;\n}",
        },
    }
}

fn explain_helper_functions() -> Explanation {
    Explanation {
        title: "No Helper Functions",
        description: "\
Rejects any function definition whose name is not listed in `require_functions`.

When `require_functions` is not set, every function definition counts as a helper.",
        remediation: "Inline the helper into one of the required functions.",
        examples: ExamplePair {
            before: "static int sq(int x) { return x * x; }\nint f(int x) { return sq(x) + 1; }",
            after: "int f(int x) { return x * x + 1; }",
        },
    }
}

fn explain_printing() -> Explanation {
    Explanation {
        title: "No Printing",
        description: "\
Rejects direct calls to `printf`, `vprintf`, `fprintf`, `vfprintf`, `fputc` and `putc`.",
        remediation: "Return the value instead of printing it; the harness prints results.",
        examples: ExamplePair {
            before: "void answer(int x) {\n    printf(\"%d\\n\", x);\n}",
            after: "int answer(int x) {\n    return x;\n}",
        },
    }
}

fn explain_direct_recursion() -> Explanation {
    Explanation {
        title: "No Direct Recursion",
        description: "\
Rejects a call to the function currently being defined.

Mutual recursion through a second function is not detected.",
        remediation: "Use iteration instead.",
        examples: ExamplePair {
            before: "int fact(int n) {\n    return n <= 1 ? 1 : n * fact(n - 1);\n}",
            after: "int fact(int n) {\n    int r = 1;\n    while (n > 1) {\n        r *= n--;\n    }\n    return r;\n}",
        },
    }
}

fn explain_arrays() -> Explanation {
    Explanation {
        title: "No Arrays",
        description: "\
Rejects any declarator written with `[...]`, including unsized arrays, parameters and struct
members. A pointer initialized from a brace list is not an array declarator and passes.",
        remediation: "Use scalar variables, pointers or recursion.",
        examples: ExamplePair {
            before: "int first(void) {\n    int xs[3] = {1, 2, 3};\n    return xs[0];\n}",
            after: "int first(void) {\n    return 1;\n}",
        },
    }
}

fn explain_nonnumeric_defines() -> Explanation {
    Explanation {
        title: "Numeric Defines Only",
        description: "\
Rejects function-like macros and object-like macros whose replacement text is anything other than
a plain number (optional sign, digits, optional fraction).",
        remediation: "Write the code the macro would expand to, or use a numeric constant.",
        examples: ExamplePair {
            before: "#define SQ(x) ((x) * (x))\n#define ull unsigned long long",
            after: "#define LIMIT 10000\n#define PI 3.14159",
        },
    }
}

fn explain_function_pointers() -> Explanation {
    Explanation {
        title: "No Function Pointers (reserved)",
        description: "\
Recognized tag reserved for a future check. It is accepted in policies but reports nothing yet.",
        remediation: "No action needed.",
        examples: ExamplePair {
            before: "int apply(int (*f)(int), int x) {\n    return f(x);\n}",
            after: "int apply(int x) {\n    return x + 1;\n}",
        },
    }
}

fn explain_atypical_control_flow() -> Explanation {
    Explanation {
        title: "No Atypical Control Flow",
        description: "\
Rejects `goto` statements, statement labels and calls to `longjmp`.

Identifiers merely named `goto` or `longjmp` elsewhere are not affected.",
        remediation: "Use structured control flow: loops, `break`, `continue` and `return`.",
        examples: ExamplePair {
            before: "void f(int n) {\nagain:\n    if (n-- > 0) goto again;\n}",
            after: "void f(int n) {\n    while (n-- > 0) {\n    }\n}",
        },
    }
}

fn explain_braceless_blocks() -> Explanation {
    Explanation {
        title: "Braces Required",
        description: "\
Rejects an `if`, `else`, `while`, `do` or `for` whose body is a single statement instead of a
brace-delimited block. Every clause of an `if`/`else if`/`else` chain is checked on its own.",
        remediation: "Wrap every control-flow body in `{ ... }`.",
        examples: ExamplePair {
            before: "if (x > 0)\n    x--;\nelse\n    x++;",
            after: "if (x > 0) {\n    x--;\n} else {\n    x++;\n}",
        },
    }
}

fn explain_asm() -> Explanation {
    Explanation {
        title: "No Inline Assembly",
        description: "Rejects `asm`, `__asm__` and `__asm` inline-assembly expressions.",
        remediation: "Write the logic in C.",
        examples: ExamplePair {
            before: "void f(void) {\n    __asm__(\"nop\");\n}",
            after: "void f(void) {\n}",
        },
    }
}

// --- Field explanations ---

fn explain_require_includes() -> Explanation {
    Explanation {
        title: "Required Includes",
        description: "\
Every listed header must appear in an `#include` directive, with either `<...>` or `\"...\"`
syntax. All missing headers are reported in a single message.",
        remediation: "Add the missing `#include` lines.",
        examples: ExamplePair {
            before: "int f(void) { return 0; }",
            after: "#include <stdio.h>\n\nint f(void) { return 0; }",
        },
    }
}

fn explain_allow_includes() -> Explanation {
    Explanation {
        title: "Allowed Includes",
        description: "\
When set, only the listed headers (plus the required ones) may be included. An empty list allows
nothing beyond the required headers. Each offending directive is reported separately.",
        remediation: "Remove the `#include` lines for headers that are not allowed.",
        examples: ExamplePair {
            before: "#include <stdlib.h>\n#include <stdio.h>",
            after: "#include <stdio.h>",
        },
    }
}

fn explain_require_functions() -> Explanation {
    Explanation {
        title: "Required Functions",
        description: "\
Every listed name must be defined as a function. Only the name is checked, not the signature.
All missing functions are reported in a single message.",
        remediation: "Define the missing functions.",
        examples: ExamplePair {
            before: "int helper(int x) { return x; }",
            after: "int solve(int x) { return x; }",
        },
    }
}

fn explain_disallow_symbols() -> Explanation {
    Explanation {
        title: "Forbidden Symbols",
        description: "\
Rejects any identifier whose text matches a forbidden name: declarations, uses, macro names and
parameters alike.",
        remediation: "Avoid the forbidden identifier entirely.",
        examples: ExamplePair {
            before: "void f(void) {\n    int *p = malloc(sizeof(int));\n}",
            after: "void f(void) {\n    int x = 0;\n}",
        },
    }
}

fn explain_limit_source_bytes() -> Explanation {
    Explanation {
        title: "Source Size Limit",
        description: "Rejects a submission whose raw byte length exceeds the limit.",
        remediation: "Shorten the solution.",
        examples: ExamplePair {
            before: "/* limit 16 */ int f(void) { return 0; }",
            after: "int f(){return 0;}",
        },
    }
}

fn explain_limit_defined_functions() -> Explanation {
    Explanation {
        title: "Defined Function Limit",
        description: "\
Rejects a submission that defines more functions than the limit. The limit must be at least the
number of required functions, otherwise the policy itself is invalid.",
        remediation: "Merge or remove functions.",
        examples: ExamplePair {
            before: "int a(void) { return 1; }\nint b(void) { return a(); }",
            after: "int b(void) { return 1; }",
        },
    }
}
