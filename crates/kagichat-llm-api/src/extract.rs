//! Recovery of JSON objects embedded in the assistant's text stream.
//!
//! The endpoint answers with free-form text in which descriptors appear as
//! `<marker> {...}`. Markers may repeat; the last occurrence is authoritative.

/// Marker preceding the thread descriptor
pub const THREAD_MARKER: &str = "thread.json:";

/// Marker preceding the message descriptor
pub const MESSAGE_MARKER: &str = "new_message.json:";

/// Return the balanced JSON object that follows the last occurrence of `marker`.
///
/// Returns `None` when the marker is absent, when the first non-whitespace
/// character after it is not `{`, or when the text ends before the braces balance.
/// Braces inside string literals are ignored and `\"` does not close a string.
pub fn extract<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let marker_pos = text.rfind(marker)?;
    let rest = text[marker_pos + marker.len()..].trim_start();
    if !rest.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in rest.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..idx + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
