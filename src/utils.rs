//! Common utility functions shared across the codebase.

use colored::Colorize;

/// Prints a single-line warning to stderr, prefixed with a colored `warning:`.
///
/// Non-fatal conditions (skipped dependencies, parse errors, unresolvable
/// calls) are reported this way and never change the process exit code.
/// Used directly for summary-level lines, which always print regardless of
/// `--verbose`.
pub fn warn(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Per-dependency / per-file detail warning, gated by `--verbose`.
///
/// Summary-level warnings (skip counts, parse-error counts) always print
/// through [`warn`] directly; the individual lines they summarize only
/// print when the caller opted into verbose output.
pub fn verbose_warn(verbose: bool, message: impl std::fmt::Display) {
    if verbose {
        warn(message);
    }
}

/// Escapes the uppercase ASCII letters in a module path the way Go's module
/// cache does, so a module path can be joined under a cache root.
///
/// Each uppercase ASCII letter is replaced with `!` followed by its
/// lowercase form; all other bytes (including non-ASCII ones) pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use callmap::utils::escape_module_path;
///
/// assert_eq!(escape_module_path("github.com/BurntSushi/toml"), "github.com/!burnt!sushi/toml");
/// assert_eq!(escape_module_path("golang.org/x/sync"), "golang.org/x/sync");
/// ```
pub fn escape_module_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            out.push('!');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
