//! Calculator tool descriptors.

use super::Language;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// One calculator variant and its per-language inputs.
///
/// Templates and scripts are paths relative to the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    id: String,
    names: BTreeMap<Language, String>,
    titles: BTreeMap<Language, String>,
    templates: BTreeMap<Language, PathBuf>,
    scripts: Vec<PathBuf>,
}

impl ToolDescriptor {
    /// Starts a descriptor with no localised entries.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: BTreeMap::new(),
            titles: BTreeMap::new(),
            templates: BTreeMap::new(),
            scripts: Vec::new(),
        }
    }

    /// Adds the display name, page title and template for one language.
    pub fn localized(
        mut self,
        language: Language,
        name: impl Into<String>,
        title: impl Into<String>,
        template: impl Into<PathBuf>,
    ) -> Self {
        self.names.insert(language, name.into());
        self.titles.insert(language, title.into());
        self.templates.insert(language, template.into());
        self
    }

    /// Sets the application scripts, inlined in this order.
    pub fn scripts<I, P>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.scripts = scripts.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self, language: Language) -> Option<&str> {
        self.names.get(&language).map(String::as_str)
    }

    pub fn title(&self, language: Language) -> Option<&str> {
        self.titles.get(&language).map(String::as_str)
    }

    pub fn template(&self, language: Language) -> Option<&Path> {
        self.templates.get(&language).map(PathBuf::as_path)
    }

    pub fn script_paths(&self) -> &[PathBuf] {
        &self.scripts
    }

    /// Languages this tool has any localised entry for.
    pub(super) fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.names
            .keys()
            .chain(self.titles.keys())
            .chain(self.templates.keys())
            .copied()
    }
}

const SHARED_SCRIPTS: [&str; 3] = [
    "assets/js/swiss-format.js",
    "assets/js/interest.js",
    "assets/js/pdf-export.js",
];

/// The two calculators shipped as offline bundles.
pub fn builtin_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new("verzugszins")
            .localized(
                Language::De,
                "Verzugszinsrechner",
                "Verzugszinsrechner Schweiz | Verzugszins nach Art. 104 OR berechnen",
                "verzugszins/index.html",
            )
            .localized(
                Language::Fr,
                "Calculateur d'intérêts moratoires",
                "Calculateur d'intérêts moratoires | Intérêt moratoire selon l'art. 104 CO",
                "fr/interets-moratoires/index.html",
            )
            .scripts(
                SHARED_SCRIPTS
                    .iter()
                    .copied()
                    .chain(["assets/js/verzugszins.js"]),
            ),
        ToolDescriptor::new("zinseszins")
            .localized(
                Language::De,
                "Zinseszinsrechner",
                "Zinseszinsrechner Schweiz | Zins und Zinseszins berechnen",
                "zinseszins/index.html",
            )
            .localized(
                Language::Fr,
                "Calculateur d'intérêts composés",
                "Calculateur d'intérêts composés | Intérêts simples et composés",
                "fr/interets-composes/index.html",
            )
            .scripts(
                SHARED_SCRIPTS
                    .iter()
                    .copied()
                    .chain(["assets/js/zinseszins.js"]),
            ),
    ]
}
