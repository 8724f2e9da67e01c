//! Stable identifiers for constraint tags and policy fields.
//!
//! Tags are the snake_case strings accepted in the `disallow` list of a policy file.

// Tags: disallow
pub const TAG_MAIN: &str = "main";
pub const TAG_ASSIGNMENT: &str = "assignment";
pub const TAG_REASSIGNMENT: &str = "reassignment";
pub const TAG_LOOPS: &str = "loops";
pub const TAG_IF_STATEMENTS: &str = "if_statements";
pub const TAG_HELPER_FUNCTIONS: &str = "helper_functions";
pub const TAG_PRINTING: &str = "printing";
pub const TAG_DIRECT_RECURSION: &str = "direct_recursion";
pub const TAG_ARRAYS: &str = "arrays";
pub const TAG_NONNUMERIC_DEFINES: &str = "nonnumeric_defines";
pub const TAG_FUNCTION_POINTERS: &str = "function_pointers";
pub const TAG_ATYPICAL_CONTROL_FLOW: &str = "atypical_control_flow";
pub const TAG_BRACELESS_BLOCKS: &str = "braceless_blocks";
pub const TAG_ASM: &str = "asm";

// Policy fields outside `disallow`
pub const FIELD_REQUIRE_INCLUDES: &str = "require_includes";
pub const FIELD_ALLOW_INCLUDES: &str = "allow_includes";
pub const FIELD_REQUIRE_FUNCTIONS: &str = "require_functions";
pub const FIELD_DISALLOW_SYMBOLS: &str = "disallow_symbols";
pub const FIELD_LIMIT_SOURCE_BYTES: &str = "limit_source_bytes";
pub const FIELD_LIMIT_DEFINED_FUNCTIONS: &str = "limit_defined_functions";
