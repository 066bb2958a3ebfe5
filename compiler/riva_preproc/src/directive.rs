//! Recognition of `#include` directives.
//!
//! The directive grammar is deliberately line-oriented and dumb: a line
//! whose first non-blank characters are the token `#include`, followed by
//! at least one blank, followed by a target path that runs to the end of
//! the line. No quoting, no comments, no macro expansion. Anything that
//! does not match exactly is ordinary program text and flows through the
//! flattener untouched.

/// The literal directive token.
pub const INCLUDE_TOKEN: &str = "#include";

/// Blank characters accepted around the token and the target.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Extract the include target from a line, if the line is a directive.
///
/// Leading indentation before the token is accepted. The token must be
/// followed by at least one blank so that identifiers like `#included`
/// are not misread. The target is the rest of the line with surrounding
/// blanks (and the line terminator) trimmed; an empty target disqualifies
/// the line.
///
/// ```
/// use riva_preproc::include_target;
///
/// assert_eq!(include_target("#include helpers.rvfunc\n"), Some("helpers.rvfunc"));
/// assert_eq!(include_target("  #include  lib/ode.rvfunc  "), Some("lib/ode.rvfunc"));
/// assert_eq!(include_target("#include"), None);
/// assert_eq!(include_target("x = y; // #include nope"), None);
/// ```
pub fn include_target(line: &str) -> Option<&str> {
    let rest = line
        .trim_start_matches(is_blank)
        .strip_prefix(INCLUDE_TOKEN)?;
    // Token boundary: `#includefoo` is not a directive.
    if !rest.starts_with(is_blank) {
        return None;
    }
    let target = rest.trim_matches(|c: char| is_blank(c) || c == '\n' || c == '\r');
    if target.is_empty() {
        None
    } else {
        Some(target)
    }
}
