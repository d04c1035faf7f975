//! Assembly of one self-contained offline HTML document.

use super::{
    assets::{AssetKind, AssetLoader, BundleWarning},
    error::{Context, Error, ErrorExt, Result},
    generated::{OFFLINE_BANNER_CSS, banner_html, font_face_css, icon_css},
    settings::{Language, Settings, ToolDescriptor},
    template,
};
use std::io;

/// Separator between concatenated scripts, guarding against missing semicolons.
const SCRIPT_SEPARATOR: &str = "\n;\n";

/// A fully inlined document for one (tool, language) pair.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub tool_id: String,
    pub language: Language,
    pub html: String,
    /// Degraded inputs, in the order they were encountered.
    pub warnings: Vec<BundleWarning>,
}

/// Inlines templates, stylesheets, fonts and scripts into single documents.
#[derive(Debug, Clone)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds the offline document for `tool` in `language`.
    ///
    /// Only a missing template fails the pair. Every other missing input is
    /// replaced by a placeholder and reported in
    /// [`AssembledDocument::warnings`].
    ///
    /// # Errors
    ///
    /// - [`Error::MissingTemplate`] if the template file does not exist
    /// - [`Error::Fs`] if the template exists but cannot be read
    pub fn assemble(
        &self,
        tool: &ToolDescriptor,
        language: Language,
    ) -> Result<AssembledDocument> {
        let settings = &self.settings;
        let template_rel = tool
            .template(language)
            .context(format!("tool {} has no template for {language}", tool.id()))?;
        let template_path = settings.resolve(template_rel);

        let html = match std::fs::read_to_string(&template_path) {
            Ok(html) => html,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::MissingTemplate {
                    tool: tool.id().to_string(),
                    language,
                    path: template_path,
                });
            }
            Err(e) => return Err(e).fs_context("reading template", &template_path),
        };
        log::debug!(
            "Assembling {} ({language}) from {}",
            tool.id(),
            template_path.display()
        );

        let assets = settings.assets();
        let mut loader = AssetLoader::new(settings.root());

        // Styles: fonts, icons, date picker, site, inline, banner
        let mut styles = vec![
            font_face_css(&mut loader, assets),
            icon_css(),
            loader.text_or_placeholder(&assets.datepicker_css, AssetKind::VendorStylesheet),
            loader.text_or_placeholder(&assets.stylesheet, AssetKind::Stylesheet),
        ];
        styles.extend(template::extract_styles(&html));
        styles.push(OFFLINE_BANNER_CSS.to_string());

        // Scripts: PDF library, date picker, application scripts, inline
        let mut scripts = vec![
            loader.text_or_placeholder(&assets.pdf_js, AssetKind::VendorScript),
            loader.text_or_placeholder(&assets.datepicker_js, AssetKind::VendorScript),
        ];
        for script in tool.script_paths() {
            scripts.push(loader.text_or_placeholder(script, AssetKind::AppScript));
        }
        scripts.extend(template::extract_scripts(&html));

        let banner = banner_html(language, settings.generated_on());
        let body = template::rewrite_body(template::extract_body(&html));
        let body = template::inject_banner(&body, &banner);
        let body_class = template::body_class(&html);

        let document = render_document(&DocumentParts {
            language,
            title: tool.title(language).unwrap_or_else(|| tool.id()),
            styles: &styles.join("\n\n"),
            body_class: body_class.as_deref(),
            body: body.trim(),
            scripts: &template::escape_script_close(&scripts.join(SCRIPT_SEPARATOR)),
        });

        let warnings = loader.into_warnings();
        log::debug!(
            "Assembled {} ({language}): {} bytes, {} warnings",
            tool.id(),
            document.len(),
            warnings.len()
        );

        Ok(AssembledDocument {
            tool_id: tool.id().to_string(),
            language,
            html: document,
            warnings,
        })
    }
}

struct DocumentParts<'a> {
    language: Language,
    title: &'a str,
    styles: &'a str,
    /// Class list carried over from the template's `<body>`
    body_class: Option<&'a str>,
    body: &'a str,
    scripts: &'a str,
}

fn render_document(parts: &DocumentParts<'_>) -> String {
    let body_open = match parts.body_class {
        Some(class) => format!(r#"<body class="{}">"#, escape_attribute(class)),
        None => "<body>".to_string(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
{favicon}
<style>
{styles}
</style>
</head>
{body_open}
{body}
<script>
{scripts}
</script>
</body>
</html>
"#,
        lang = parts.language.code(),
        title = escape_text(parts.title),
        favicon = template::FAVICON_TAG,
        styles = parts.styles,
        body = parts.body,
        scripts = parts.scripts,
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
