//! Shared fixture site for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use std::{fs, path::Path};
use tempfile::TempDir;
use zinsrechner_offline::bundler::{Language, Settings, SettingsBuilder, builtin_tools};

/// Banner date used by every fixture run.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn template(language: Language, title: &str) -> String {
    let other = match language {
        Language::De => "fr",
        Language::Fr => "de",
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="stylesheet" href="/assets/css/style.css">
  <link rel="icon" href="/favicon.ico">
  <style>.result {{ color: green; }}</style>
  <script type="application/ld+json">{{"@context": "https://schema.org"}}</script>
</head>
<body class="page-tool">
  <nav class="tool-nav"><a href="/zinseszins/">Zinseszins</a></nav>
  <div class="language-switcher"><a href="/{other}/">{other}</a></div>
  <main class="container">
    <h1>{title}</h1>
    <a href="../{other}/index.html">{other}</a>
    <i class="fa fa-calculator"></i>
  </main>
  <style>.chart {{ height: 12rem; }}</style>
  <script src="/assets/js/interest.js"></script>
  <script>window.inlineInit = true;</script>
</body>
</html>
"#,
        lang = language.code(),
    )
}

pub fn write(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Writes every built-in template, without any assets.
pub fn write_templates(root: &Path) {
    for tool in builtin_tools() {
        for language in Language::ALL {
            let relative = tool.template(language).unwrap();
            write(
                root,
                relative.to_str().unwrap(),
                template(language, tool.title(language).unwrap()),
            );
        }
    }
}

/// Writes the shared assets and every script the built-in tools reference.
pub fn write_assets(root: &Path) {
    write(root, "assets/css/style.css", "body { font-family: 'Inter'; }");
    write(root, "assets/fonts/inter-regular.woff2", b"wOF2-regular");
    write(root, "assets/fonts/inter-semibold.woff2", b"wOF2-semibold");
    write(root, "assets/vendor/flatpickr.min.css", ".flatpickr-calendar{}");
    write(root, "assets/vendor/flatpickr.min.js", "window.flatpickr = function () {};");
    write(root, "assets/vendor/jspdf.umd.min.js", "window.jspdf = {};");
    for tool in builtin_tools() {
        for script in tool.script_paths() {
            let name = script.file_name().unwrap().to_string_lossy().into_owned();
            write(
                root,
                script.to_str().unwrap(),
                format!("/* {name} */ console.log('{name}');"),
            );
        }
    }
}

/// A complete site: all templates and assets.
pub fn full_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path());
    write_assets(dir.path());
    dir
}

pub fn settings(root: &Path) -> Settings {
    SettingsBuilder::builtin()
        .root(root)
        .output_dir(root.join("offline"))
        .generated_on(fixed_date())
        .build()
        .unwrap()
}
