//! Supported page languages and their offline banner strings.

use chrono::NaiveDate;
use std::{fmt, str::FromStr};

/// Page language of a tool variant.
///
/// Parsed from config files and command lines through [`FromStr`], so codes
/// are accepted in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    De,
    Fr,
}

/// Localised strings for the "offline version" banner.
#[derive(Debug, Clone, Copy)]
pub struct BannerText {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Prefix placed before the generation date.
    pub generated: &'static str,
}

impl Language {
    /// All supported languages in default iteration order.
    pub const ALL: [Language; 2] = [Language::De, Language::Fr];

    /// ISO 639-1 code, used for `lang` attributes and file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    pub fn banner(&self) -> BannerText {
        match self {
            Language::De => BannerText {
                title: "Offline-Version",
                subtitle: "Dieser Rechner funktioniert ohne Internetverbindung.",
                generated: "Erstellt am",
            },
            Language::Fr => BannerText {
                title: "Version hors ligne",
                subtitle: "Ce calculateur fonctionne sans connexion Internet.",
                generated: "Générée le",
            },
        }
    }

    /// Formats a date the way both Swiss locales write it (`31.01.2024`).
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d.%m.%Y").to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            other => Err(format!(
                "unsupported language: {other} (supported: {})",
                Language::ALL.map(|l| l.code()).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert_eq!(" FR ".parse::<Language>(), Ok(Language::Fr));
        assert!("it".parse::<Language>().unwrap_err().contains("de, fr"));
    }

    #[test]
    fn formats_swiss_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(Language::De.format_date(date), "07.03.2024");
        assert_eq!(Language::Fr.format_date(date), "07.03.2024");
    }
}
