//! Stylesheets and markup generated at build time.
//!
//! The offline document cannot load web fonts or an icon font, so the body
//! font is embedded as base64 data URLs and icon classes are mapped to
//! literal Unicode glyphs.

use super::{
    assets::{AssetKind, AssetLoader},
    settings::{AssetPaths, Language},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::NaiveDate;
use std::fmt::Write;

/// Font family the site stylesheet refers to.
pub const FONT_FAMILY: &str = "Inter";

/// Icon classes used by the templates and the glyph that replaces each.
pub const ICON_GLYPHS: &[(&str, &str)] = &[
    ("fa-calculator", "\u{1F9EE}"),
    ("fa-calendar", "\u{1F4C5}"),
    ("fa-calendar-alt", "\u{1F4C5}"),
    ("fa-file-pdf", "\u{1F4C4}"),
    ("fa-print", "\u{1F5A8}"),
    ("fa-download", "\u{2B07}"),
    ("fa-redo", "\u{21BB}"),
    ("fa-copy", "\u{29C9}"),
    ("fa-info-circle", "\u{2139}"),
    ("fa-question-circle", "?"),
    ("fa-exclamation-triangle", "\u{26A0}"),
    ("fa-check", "\u{2713}"),
    ("fa-times", "\u{2715}"),
    ("fa-percent", "%"),
    ("fa-coins", "\u{1FA99}"),
    ("fa-chevron-down", "\u{25BE}"),
    ("fa-chevron-up", "\u{25B4}"),
    ("fa-wifi", "\u{1F4F6}"),
];

/// Styles for the offline banner injected into every document.
pub const OFFLINE_BANNER_CSS: &str = r#".offline-banner {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem 0.75rem;
  align-items: baseline;
  margin: 0 0 1.5rem;
  padding: 0.75rem 1rem;
  border-left: 4px solid #c8102e;
  border-radius: 4px;
  background: #fdf2f4;
  color: #3a3a3a;
  font-size: 0.9rem;
}
.offline-banner__title { font-weight: 600; color: #c8102e; }
.offline-banner__date { margin-left: auto; color: #6b6b6b; }
@media print { .offline-banner { display: none; } }"#;

/// `@font-face` rules embedding the regular and semibold weights.
///
/// A missing font file yields a comment instead of a rule, plus a warning
/// recorded on `loader`.
pub fn font_face_css(loader: &mut AssetLoader<'_>, assets: &AssetPaths) -> String {
    let mut css = String::new();
    for (weight, path) in [(400, &assets.font_regular), (600, &assets.font_semibold)] {
        match loader.bytes(path, AssetKind::Font) {
            Some(bytes) => {
                let _ = writeln!(
                    css,
                    "@font-face {{\n  font-family: '{FONT_FAMILY}';\n  font-style: normal;\n  \
                     font-weight: {weight};\n  font-display: swap;\n  \
                     src: url(data:font/woff2;base64,{}) format('woff2');\n}}",
                    STANDARD.encode(bytes)
                );
            }
            None => {
                let _ = writeln!(
                    css,
                    "/* {FONT_FAMILY} {weight} not embedded: font file missing */"
                );
            }
        }
    }
    css
}

/// Icon-font replacement: one `::before` rule per entry in [`ICON_GLYPHS`].
pub fn icon_css() -> String {
    let mut css = String::from(
        ".fa, .fas, .far, .fab {\n  display: inline-block;\n  font-style: normal;\n  \
         font-variant: normal;\n  line-height: 1;\n}\n",
    );
    for (class, glyph) in ICON_GLYPHS {
        let _ = writeln!(css, ".{class}::before {{ content: \"{glyph}\"; }}");
    }
    css
}

/// Localised "offline version" banner markup.
pub fn banner_html(language: Language, generated_on: NaiveDate) -> String {
    let text = language.banner();
    format!(
        concat!(
            r#"<div class="offline-banner" role="note">"#,
            r#"<span class="offline-banner__title">{title}</span>"#,
            r#"<span class="offline-banner__subtitle">{subtitle}</span>"#,
            r#"<span class="offline-banner__date">{generated} {date}</span>"#,
            "</div>"
        ),
        title = text.title,
        subtitle = text.subtitle,
        generated = text.generated,
        date = language.format_date(generated_on),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::BundleWarning;
    use std::path::Path;

    #[test]
    fn embeds_fonts_as_base64() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetPaths::default();
        std::fs::create_dir_all(dir.path().join("assets/fonts")).unwrap();
        std::fs::write(dir.path().join(&assets.font_regular), b"wOF2regular").unwrap();

        let mut loader = AssetLoader::new(dir.path());
        let css = font_face_css(&mut loader, &assets);

        assert!(css.contains("font-weight: 400;"));
        assert!(css.contains(&format!("base64,{}", STANDARD.encode(b"wOF2regular"))));
        assert!(css.contains("/* Inter 600 not embedded: font file missing */"));
        assert!(!css.contains("font-weight: 600;"));
        assert_eq!(
            loader.warnings(),
            &[BundleWarning::MissingAsset {
                kind: AssetKind::Font,
                path: assets.font_semibold.clone(),
            }]
        );
    }

    #[test]
    fn missing_fonts_degrade_to_comments() {
        let mut loader = AssetLoader::new(Path::new("/nonexistent-root"));
        let css = font_face_css(&mut loader, &AssetPaths::default());
        assert!(!css.contains("@font-face"));
        assert_eq!(loader.warnings().len(), 2);
    }

    #[test]
    fn icon_rules_use_literal_glyphs() {
        let css = icon_css();
        assert!(css.contains(".fa-calculator::before { content: \"🧮\"; }"));
        assert!(css.contains(".fa-check::before { content: \"✓\"; }"));
        assert_eq!(css.matches("::before").count(), ICON_GLYPHS.len());
    }

    #[test]
    fn banner_is_localised() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let de = banner_html(Language::De, date);
        assert!(de.contains("Offline-Version"));
        assert!(de.contains("Erstellt am 31.01.2024"));

        let fr = banner_html(Language::Fr, date);
        assert!(fr.contains("Version hors ligne"));
        assert!(fr.contains("Générée le 31.01.2024"));
    }
}
