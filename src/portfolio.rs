mod normalize;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub use normalize::normalize;

pub const DATA_FILE: &str = "portfolio-data.json";

/// The process-wide record, normalized on first access.
///
/// The server calls [`load_record`] at startup and refuses to run on bad data,
/// so by the time a page touches this the file is known to be good.
pub static PORTFOLIO: LazyLock<PortfolioRecord> =
    LazyLock::new(|| load_record().expect("portfolio data should normalize"));

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("data file {0} is not embedded")]
    Missing(String),
    #[error("data file is not valid JSON: {0}")]
    Syntax(String),
    #[error("{path}: expected {expected}, found {found}")]
    Coerce {
        path: String,
        expected: &'static str,
        found: String,
    },
    #[error("{path}: level {value} is outside 0-100")]
    LevelRange { path: String, value: f64 },
    #[error("data does not match the portfolio shape: {0}")]
    Shape(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub bio: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    pub name: String,
    pub level: f64,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Framework {
    pub name: String,
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interest {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub icon: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exploring {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub period: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub gradient: String,
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub date: String,
    pub description: String,
    pub skills: Vec<String>,
    pub link: String,
    pub gradient: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub experience: String,
    pub projects: String,
    pub certifications: String,
    pub commitment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioRecord {
    pub personal: Personal,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
    pub frameworks: Vec<Framework>,
    pub tools: Vec<Tool>,
    pub interests: Vec<Interest>,
    pub skills: Vec<Skill>,
    pub exploring: Vec<Exploring>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub stats: Stats,
}

pub fn parse_record(content: &str) -> Result<PortfolioRecord, DataError> {
    let raw = serde_json::from_str::<serde_json::Value>(content)
        .map_err(|e| DataError::Syntax(e.to_string()))?;
    normalize(raw)
}

/// Reads the embedded data file and normalizes it.
pub fn load_record() -> Result<PortfolioRecord, DataError> {
    let file =
        DataAssets::get(DATA_FILE).ok_or_else(|| DataError::Missing(DATA_FILE.to_string()))?;
    let content =
        std::str::from_utf8(&file.data).map_err(|e| DataError::Syntax(e.to_string()))?;
    parse_record(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_data_loads() {
        let record = load_record().expect("shipped data should normalize");
        assert!(!record.personal.name.is_empty());
        assert!(record.personal.email.contains('@'));
        assert!(!record.experiences.is_empty());
        assert!(record
            .languages
            .iter()
            .all(|l| (0.0..=100.0).contains(&l.level)));
    }

    #[test]
    fn test_shipped_data_keeps_source_order() {
        let file = DataAssets::get(DATA_FILE).unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&file.data).unwrap();
        let record = load_record().unwrap();

        let raw_companies = raw["experiences"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["company"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        let companies = record
            .experiences
            .iter()
            .map(|e| e.company.clone())
            .collect::<Vec<_>>();
        assert_eq!(raw_companies, companies);

        let raw_languages = raw["languages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        let languages = record
            .languages
            .iter()
            .map(|l| l.name.clone())
            .collect::<Vec<_>>();
        assert_eq!(raw_languages, languages);
    }

    #[test]
    fn test_static_record_matches_loader() {
        assert_eq!(*PORTFOLIO, load_record().unwrap());
    }

    #[test]
    fn test_parse_record_rejects_bad_json() {
        let err = parse_record("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Syntax(_)));
    }
}
