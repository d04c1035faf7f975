//! Bundle config file loading (TOML).
//!
//! ```toml
//! root = "public"
//! output = "public/offline"
//! languages = ["de", "fr"]
//! generated_on = "2024-06-01"
//!
//! [assets]
//! stylesheet = "assets/css/site.css"
//!
//! [[tools]]
//! id = "verzugszins"
//! scripts = ["assets/js/interest.js", "assets/js/verzugszins.js"]
//! de = { name = "Verzugszinsrechner", title = "Verzugszins", template = "verzugszins/index.html" }
//! fr = { name = "Intérêts moratoires", title = "Intérêts", template = "fr/verzugszins.html" }
//! ```
//!
//! Every key is optional. Without `[[tools]]` the built-in tools are used.
//! Relative `root` and `output` paths are resolved against the directory of
//! the config file.

use super::{AssetPaths, Language, SettingsBuilder, ToolDescriptor};
use crate::bundler::error::{Error, ErrorExt, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleConfigFile {
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    languages: Option<Vec<String>>,
    generated_on: Option<NaiveDate>,
    #[serde(default)]
    assets: AssetPaths,
    tools: Option<Vec<ToolEntry>>,
}

#[derive(Debug, Deserialize)]
struct ToolEntry {
    id: String,
    #[serde(default)]
    scripts: Vec<PathBuf>,
    /// Per-language tables keyed by language code.
    #[serde(flatten)]
    localized: BTreeMap<String, LocalizedEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocalizedEntry {
    name: String,
    title: String,
    template: PathBuf,
}

/// Reads a bundle config file into a [`SettingsBuilder`].
///
/// The builder still has to be built (and thereby validated) by the caller,
/// which allows command line flags to override file values first.
pub fn load_settings_file(path: &Path) -> Result<SettingsBuilder> {
    log::info!("Loading bundle config from {}", path.display());
    let text = std::fs::read_to_string(path).fs_context("reading bundle config", path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    parse_settings(&text, base)
}

/// Parses bundle config text, resolving relative directories against `base`.
pub fn parse_settings(text: &str, base: &Path) -> Result<SettingsBuilder> {
    let file: BundleConfigFile = toml::from_str(text)?;

    let mut builder = SettingsBuilder::builtin().assets(file.assets);

    if let Some(root) = file.root {
        builder = builder.root(base.join(root));
    }
    if let Some(output) = file.output {
        builder = builder.output_dir(base.join(output));
    }
    if let Some(codes) = file.languages {
        let languages = codes
            .iter()
            .map(|code| code.parse::<Language>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::InvalidSettings)?;
        builder = builder.languages(languages);
    }
    if let Some(date) = file.generated_on {
        builder = builder.generated_on(date);
    }
    if let Some(entries) = file.tools {
        let tools = entries
            .into_iter()
            .map(tool_from_entry)
            .collect::<Result<Vec<_>>>()?;
        builder = builder.tools(tools);
    }

    Ok(builder)
}

fn tool_from_entry(entry: ToolEntry) -> Result<ToolDescriptor> {
    let mut tool = ToolDescriptor::new(entry.id).scripts(entry.scripts);
    for (code, localized) in entry.localized {
        let language = code.parse::<Language>().map_err(|reason| {
            Error::InvalidSettings(format!("tool {}: {reason}", tool.id()))
        })?;
        tool = tool.localized(language, localized.name, localized.title, localized.template);
    }
    Ok(tool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_builtin() {
        let settings = parse_settings("", Path::new("")).unwrap().build().unwrap();
        assert_eq!(settings.pair_count(), 4);
        assert_eq!(settings.assets(), &AssetPaths::default());
    }

    #[test]
    fn overrides_and_custom_tools() {
        let text = r#"
            root = "public"
            output = "dist"
            languages = ["fr"]
            generated_on = "2024-06-01"

            [assets]
            stylesheet = "css/site.css"

            [[tools]]
            id = "rechner"
            scripts = ["js/a.js", "js/b.js"]
            fr = { name = "Calculateur", title = "Titre", template = "fr/index.html" }
        "#;
        let settings = parse_settings(text, Path::new("/srv/site"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(settings.root(), Path::new("/srv/site/public"));
        assert_eq!(settings.output_dir(), Path::new("/srv/site/dist"));
        assert_eq!(settings.languages(), &[Language::Fr]);
        assert_eq!(settings.generated_on(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(settings.assets().stylesheet, PathBuf::from("css/site.css"));
        assert_eq!(settings.assets().pdf_js, AssetPaths::default().pdf_js);

        let tool = &settings.tools()[0];
        assert_eq!(tool.id(), "rechner");
        assert_eq!(tool.script_paths(), &[PathBuf::from("js/a.js"), PathBuf::from("js/b.js")]);
        assert_eq!(tool.template(Language::Fr), Some(Path::new("fr/index.html")));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(matches!(
            parse_settings("languages = [\"it\"]", Path::new("")),
            Err(Error::InvalidSettings(_))
        ));

        let text = r#"
            [[tools]]
            id = "rechner"
            it = { name = "a", title = "b", template = "c" }
        "#;
        let err = parse_settings(text, Path::new("")).unwrap_err();
        assert!(err.to_string().contains("tool rechner"));
    }

    #[test]
    fn language_codes_are_case_insensitive() {
        let text = r#"
            languages = ["FR", "De"]

            [[tools]]
            id = "rechner"
            DE = { name = "Rechner", title = "Rechner", template = "de.html" }
            fr = { name = "Calculateur", title = "Calculateur", template = "fr.html" }
        "#;
        let settings = parse_settings(text, Path::new("")).unwrap().build().unwrap();
        assert_eq!(settings.languages(), &[Language::Fr, Language::De]);
        assert_eq!(settings.tools()[0].template(Language::De), Some(Path::new("de.html")));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            parse_settings("outptu = \"x\"", Path::new("")),
            Err(Error::Config(_))
        ));
    }
}
