use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

static IMAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("image tag pattern is valid"));

// An unescaped opening, closing or declaration tag.
// `\<`, `< b` and autolinks such as `<https://x>` are not tags.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\\])<(?:/?[A-Za-z][A-Za-z0-9-]*(?:[\s/][^<>]*)?|![^<>]*)>")
        .expect("markup tag pattern is valid")
});

// Code that markdown output carries verbatim, e.g. `Vec<String>` in a fenced block
static MARKDOWN_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```|`[^`\n]*`").expect("code span pattern is valid"));

/// True when the text contains a markup tag outside markdown code
pub fn looks_like_html(text: &str) -> bool {
    if !(text.contains('<') && text.contains('>')) {
        return false;
    }
    let outside_code = MARKDOWN_CODE.replace_all(text, "");
    MARKUP_TAG.is_match(&outside_code)
}

/// Convert an HTML reply into markdown-flavoured plain text.
///
/// Text without markup tags is only trimmed, so the result of a previous
/// pass comes back unchanged. HTML has its entities decoded, images dropped,
/// markup converted to markdown (links keep their targets) and blank-line
/// runs collapsed.
pub fn normalize(text: &str) -> String {
    if !looks_like_html(text) {
        return text.trim().to_string();
    }

    let unescaped = html_escape::decode_html_entities(text);
    let without_images = IMAGE_TAG.replace_all(&unescaped, "");
    let markdown = html2md::parse_html(&without_images);
    collapse_blank_lines(&markdown)
}

/// Collapse any run of blank lines into a single blank line and trim.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").trim().to_string()
}
