//! Message template rendering
//!
//! Renders a template with positional `{}` substitutions into a single
//! string. The function is pure and safe to call from any thread; it never
//! truncates oversized output and never fails.

use std::fmt::{self, Write};

/// Initial working-buffer size for a rendered message.
const INITIAL_BUFFER_SIZE: usize = 1024;

/// Fallback buffer size reserved when the estimate outgrows the initial
/// buffer. Oversized messages grow the buffer instead of being cut short.
const LARGE_BUFFER_SIZE: usize = 1024 * 1024;

/// Render `template`, replacing each `{}` token with the next argument.
///
/// Tokens beyond the argument list are kept literally; arguments beyond the
/// last token are ignored.
///
/// # Examples
///
/// ```
/// use rolling_logger::core::format::render;
///
/// let line = render("error code {} from {}", &[&-13936, &"peer"]);
/// assert_eq!(line, "error code -13936 from peer");
/// ```
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    // Rough estimate of 32 bytes per argument, as a capacity hint only.
    let estimate = template.len() + args.len() * 32;
    let capacity = if estimate > INITIAL_BUFFER_SIZE {
        LARGE_BUFFER_SIZE.max(estimate)
    } else {
        INITIAL_BUFFER_SIZE
    };

    let mut out = String::with_capacity(capacity);
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", arg);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_no_tokens() {
        assert_eq!(render("plain message", &[]), "plain message");
    }

    #[test]
    fn test_render_empty_template() {
        assert_eq!(render("", &[&1, &2]), "");
    }

    #[test]
    fn test_render_positional_substitution() {
        assert_eq!(
            render("user {} performed {} at {}", &[&42, &"login", &"10:30"]),
            "user 42 performed login at 10:30"
        );
    }

    #[test]
    fn test_render_extra_tokens_stay_literal() {
        assert_eq!(render("{} and {}", &[&"one"]), "one and {}");
    }

    #[test]
    fn test_render_extra_args_ignored() {
        assert_eq!(render("only {}", &[&1, &2, &3]), "only 1");
    }

    #[test]
    fn test_render_adjacent_tokens() {
        assert_eq!(render("{}{}{}", &[&"a", &"b", &"c"]), "abc");
    }

    #[test]
    fn test_render_oversized_output_not_truncated() {
        let big = "x".repeat(4 * INITIAL_BUFFER_SIZE);
        let out = render("payload: {}", &[&big]);
        assert_eq!(out.len(), "payload: ".len() + big.len());
        assert!(out.ends_with('x'));
    }

    #[test]
    fn test_render_mixed_display_types() {
        let out = render("{} {} {}", &[&1.5f64, &true, &'z']);
        assert_eq!(out, "1.5 true z");
    }
}
