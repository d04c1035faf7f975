//! Template transforms for the offline build.
//!
//! All markup surgery happens here, through pattern matching rather than a
//! full HTML parser. Templates come from the site's own toolchain and follow
//! fixed conventions:
//!
//! - the language switcher is an element with class `language-switcher` (or
//!   `lang-switcher`) that contains no nested element of the same tag
//! - cross-tool navigation is a `<nav>` with class `tool-nav`
//! - the banner goes into the first element with class `container`, else the
//!   first `<main>`
//!
//! Callers only see the functions below, so the implementation can move to
//! a structural parser without touching them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").expect("valid regex"));

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("valid regex")
});

static SRC_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsrc\s*=").expect("valid regex"));

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").expect("valid regex"));

static BODY_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b([^>]*)>").expect("valid regex"));

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid regex"));

static REL_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\brel\s*=\s*["']([^"']*)["']"#).expect("valid regex"));

static LANGUAGE_SWITCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?is)<(?:div|nav|ul)\b[^>]*"#,
        r#"\bclass\s*=\s*"[^"]*\b(?:language-switcher|lang-switcher)\b[^"]*"[^>]*>"#,
        r#".*?</(?:div|nav|ul)\s*>"#,
    ))
    .expect("valid regex")
});

static TOOL_NAVIGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<nav\b[^>]*\bclass\s*=\s*"[^"]*\btool-nav\b[^"]*"[^>]*>.*?</nav\s*>"#)
        .expect("valid regex")
});

static LANGUAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*"(?:\.\.?/|/)*(?:de|fr)(?:/[^"]*)?""#).expect("valid regex")
});

static FAVICON_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<link\b[^>]*\brel\s*=\s*["'](?:shortcut\s+)?icon["'][^>]*>"#)
        .expect("valid regex")
});

static CONTAINER_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?is)<(?:div|main|section)\b[^>]*"#,
        r#"\bclass\s*=\s*"(?:[^"]*\s)?container(?:\s[^"]*)?"[^>]*>"#,
    ))
    .expect("valid regex")
});

static MAIN_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<main\b[^>]*>").expect("valid regex"));

static SCRIPT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script").expect("valid regex"));

/// Marker of structured-data (JSON-LD) scripts, which carry metadata only.
const STRUCTURED_DATA_MARKER: &str = "@context";

/// Inline favicon: a glyph rendered from an SVG data URI.
pub const FAVICON_TAG: &str = concat!(
    r#"<link rel="icon" href="data:image/svg+xml,"#,
    r#"%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E"#,
    r#"%3Ctext y='.9em' font-size='90'%3E%F0%9F%A7%AE%3C/text%3E%3C/svg%3E">"#
);

/// Link relations that point at resources unavailable offline.
const EXTERNAL_RELS: [&str; 5] = [
    "stylesheet",
    "preconnect",
    "dns-prefetch",
    "preload",
    "prefetch",
];

/// Contents of every `<style>` block, in document order.
pub fn extract_styles(html: &str) -> Vec<String> {
    STYLE_BLOCK
        .captures_iter(html)
        .map(|c| c[1].trim().to_string())
        .filter(|css| !css.is_empty())
        .collect()
}

/// Contents of every inline `<script>` block, in document order.
///
/// Scripts with a `src` attribute and structured-data scripts (containing
/// `@context`) are skipped.
pub fn extract_scripts(html: &str) -> Vec<String> {
    SCRIPT_BLOCK
        .captures_iter(html)
        .filter(|c| !SRC_ATTRIBUTE.is_match(&c[1]))
        .map(|c| c[2].trim().to_string())
        .filter(|js| !js.is_empty() && !js.contains(STRUCTURED_DATA_MARKER))
        .collect()
}

/// Inner markup of `<body>`, or the whole input if there is no body element.
pub fn extract_body(html: &str) -> &str {
    match BODY.captures(html).and_then(|c| c.get(1)) {
        Some(body) => body.as_str(),
        None => {
            log::debug!("Template has no <body> element, using full markup");
            html
        }
    }
}

/// Value of the `class` attribute on `<body>`, if present and non-empty.
pub fn body_class(html: &str) -> Option<String> {
    let attributes = BODY_OPEN.captures(html)?.get(1)?.as_str();
    let caps = CLASS_ATTRIBUTE.captures(attributes)?;
    let class = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let class = class.split_ascii_whitespace().collect::<Vec<_>>().join(" ");
    (!class.is_empty()).then_some(class)
}

/// Removes every `<style>` element; their rules are inlined into the head.
pub fn strip_styles(markup: &str) -> String {
    STYLE_BLOCK.replace_all(markup, "").into_owned()
}

/// Removes every `<script>` element, external or inline.
pub fn strip_scripts(markup: &str) -> String {
    SCRIPT_BLOCK.replace_all(markup, "").into_owned()
}

/// Removes stylesheet links and connection hints (`preconnect`, `dns-prefetch`, ...).
pub fn strip_external_stylesheets(markup: &str) -> String {
    LINK_TAG
        .replace_all(markup, |caps: &Captures| {
            let tag = &caps[0];
            let external = REL_ATTRIBUTE.captures(tag).is_some_and(|rel| {
                rel[1]
                    .split_ascii_whitespace()
                    .any(|value| EXTERNAL_RELS.iter().any(|r| value.eq_ignore_ascii_case(r)))
            });
            if external { String::new() } else { tag.to_string() }
        })
        .into_owned()
}

/// Removes the language switcher.
pub fn strip_language_switcher(markup: &str) -> String {
    LANGUAGE_SWITCHER.replace_all(markup, "").into_owned()
}

/// Removes the navigation between calculator tools.
pub fn strip_tool_navigation(markup: &str) -> String {
    TOOL_NAVIGATION.replace_all(markup, "").into_owned()
}

/// Turns relative links to other language versions into inert `#` anchors.
pub fn rewrite_language_links(markup: &str) -> String {
    LANGUAGE_LINK.replace_all(markup, r##"href="#""##).into_owned()
}

/// Replaces favicon links with the inline [`FAVICON_TAG`].
pub fn replace_favicon(markup: &str) -> String {
    FAVICON_LINK.replace_all(markup, FAVICON_TAG).into_owned()
}

/// Inserts `banner` right after the opening tag of the main container.
///
/// Falls back to the first `<main>`, then to prepending the banner.
pub fn inject_banner(markup: &str, banner: &str) -> String {
    let anchor = CONTAINER_OPEN.find(markup).or_else(|| MAIN_OPEN.find(markup));
    match anchor {
        Some(open) => {
            let mut out = String::with_capacity(markup.len() + banner.len());
            out.push_str(&markup[..open.end()]);
            out.push_str(banner);
            out.push_str(&markup[open.end()..]);
            out
        }
        None => {
            log::debug!("No container element found, prepending offline banner");
            format!("{banner}{markup}")
        }
    }
}

/// Escapes `</script` so inlined code cannot terminate its `<script>` block.
pub fn escape_script_close(code: &str) -> String {
    SCRIPT_CLOSE.replace_all(code, r"<\/script").into_owned()
}

/// Full body rewrite for the offline document, banner excluded.
pub fn rewrite_body(body: &str) -> String {
    let markup = strip_scripts(body);
    let markup = strip_styles(&markup);
    let markup = strip_external_stylesheets(&markup);
    let markup = strip_language_switcher(&markup);
    let markup = strip_tool_navigation(&markup);
    let markup = rewrite_language_links(&markup);
    replace_favicon(&markup)
}
