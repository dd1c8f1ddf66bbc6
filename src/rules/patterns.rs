//! Built-in failure signatures
//!
//! Order is priority: the scanner stops at the first signature that
//! matches, and the generic fallback is only consulted when none do. A new
//! build tool failure mode is supported by adding one entry here.
//!
//! Line-anchored patterns use CRLF mode (`R`) so `^` and `$` also work on
//! logs produced on Windows agents.

use super::rule::RuleDefinition;

pub const JAVA_COMPILATION_COMMENT: &str = "Bambot detected a Java compilation error!";
pub const JAVA_TEST_COMMENT: &str = "Bambot detected a Java unit test failure!";
pub const CSHARP_TEST_COMMENT: &str = "Bambot detected a C# unit test/integration test failure!";
pub const CSHARP_BUILD_COMMENT: &str = "Bambot detected a C# build error!";
pub const PYTHON_TEST_COMMENT: &str = "Bambot detected a Python (sdk?) unit test test failure!";
pub const PYTHON_ERROR_COMMENT: &str = "Bambot detected a Python error!";
pub const GRUNT_COMMENT: &str = "Bambot detected a front-end Grunt build error!";
pub const NPM_COMMENT: &str = "Bambot detected an npm error!";
pub const GENERIC_COMMENT: &str = "Bambot detected an error!";

/// Name of the generic fallback rule
pub const GENERIC_RULE: &str = "generic";

/// Specific signatures, highest priority first
pub fn builtin_signatures() -> Vec<RuleDefinition> {
    vec![
        // Maven compiler plugin
        RuleDefinition::region(
            "java-compilation",
            JAVA_COMPILATION_COMMENT,
            r"\[ERROR\] COMPILATION ERROR",
            r"\[INFO\] -{20,}",
        ),
        // Maven surefire summary
        RuleDefinition::window(
            "java-test",
            JAVA_TEST_COMMENT,
            r"(?mR)^\[ERROR\] (?:Failures|Errors):[ \t]*$",
        )
        .with_context(0, 15),
        // dotnet test / vstest
        RuleDefinition::window(
            "csharp-test",
            CSHARP_TEST_COMMENT,
            r"(?mR)^[ \t]*Error Message:[ \t]*$",
        )
        .with_context(1, 10),
        // csc / msbuild
        RuleDefinition::window(
            "csharp-build",
            CSHARP_BUILD_COMMENT,
            r": error (?:CS|MSB)\d{4}:",
        )
        .with_context(0, 5),
        // pytest failure section
        RuleDefinition::region(
            "python-test",
            PYTHON_TEST_COMMENT,
            r"(?mR)^=+ FAILURES =+[ \t]*$",
            r"(?mR)^=+ (?:short test summary info|.*\bfailed\b.*) =+[ \t]*$",
        ),
        // Header, indented frames, then the unindented exception line
        RuleDefinition::window(
            "python-error",
            PYTHON_ERROR_COMMENT,
            r"(?mR)^Traceback \(most recent call last\):[ \t]*$(?:\r?\n[ \t]+.*$)*(?:\r?\n\S.*$)?",
        )
        .with_context(0, 0)
        .last_occurrence(),
        RuleDefinition::window(
            "grunt",
            GRUNT_COMMENT,
            r"(?mR)^Aborted due to warnings\.[ \t]*$",
        )
        .with_context(8, 0)
        .last_occurrence(),
        RuleDefinition::window("npm", NPM_COMMENT, r"(?mR)^npm ERR! code \S+").with_context(0, 10),
    ]
}

/// Catch-all rule evaluated after every signature.
///
/// Extraction starts at the last error-like word and never looks above it,
/// so benign mentions earlier in the log stay out of the snippet.
pub fn generic_fallback() -> RuleDefinition {
    RuleDefinition::window(GENERIC_RULE, GENERIC_COMMENT, r"(?i)\b(?:error|fatal)\b")
        .with_context(0, 10)
        .last_occurrence()
}
