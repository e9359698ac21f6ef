use crate::level::Severity;

/// Builds the final tagged, leveled line delivered to the sink.
///
/// The layout is `[<tag>]<severity label><message>`, e.g.
/// `"[Net][WARN] timeout after 5s"`. No escaping is performed; the tag and
/// message are trusted to be printable text. Delivery is the caller's next
/// step, not this function's concern.
///
/// # Examples
///
/// ```
/// # use diagkit::{compose_line, Severity};
/// let line = compose_line("Net", Severity::Warn, "timeout after 5s");
/// assert_eq!(line, "[Net][WARN] timeout after 5s");
/// ```
pub fn compose_line(tag: &str, severity: Severity, message: &str) -> String {
    let label = severity.label();
    let mut line = String::with_capacity(tag.len() + label.len() + message.len() + 2);
    line.push('[');
    line.push_str(tag);
    line.push(']');
    line.push_str(label);
    line.push_str(message);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(
            compose_line("Net", Severity::Warn, "timeout after 5s"),
            "[Net][WARN] timeout after 5s"
        );
        assert_eq!(compose_line("IO", Severity::Debug, ""), "[IO][DEBUG] ");
    }

    #[test]
    fn test_no_escaping() {
        assert_eq!(
            compose_line("a]b", Severity::Error, "x[y"),
            "[a]b][ERROR] x[y"
        );
    }
}
