//! Closed label sets for normalized qualifications.
//!
//! Both enums serialize as their human-readable labels, which are also the
//! string literals used in the generated TypeScript module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualification level classified from the NQF level and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualificationLevel {
    /// NQF 5.
    #[serde(rename = "Higher Certificate")]
    HigherCertificate,

    /// NQF 6.
    #[serde(rename = "Advanced Certificate")]
    AdvancedCertificate,

    /// NQF 7, and the fallback for unknown or missing levels.
    #[serde(rename = "Undergraduate Degree")]
    UndergraduateDegree,

    /// NQF 8 without "honours" in the title.
    #[serde(rename = "Postgraduate Diploma")]
    PostgraduateDiploma,

    /// NQF 8 with "honours" in the title.
    #[serde(rename = "Honours Degree")]
    HonoursDegree,

    /// NQF 9.
    #[serde(rename = "Masters Degree")]
    MastersDegree,

    /// NQF 10.
    #[serde(rename = "Doctoral Degree")]
    DoctoralDegree,
}

impl QualificationLevel {
    /// Every level, in ascending NQF order.
    pub const ALL: [QualificationLevel; 7] = [
        QualificationLevel::HigherCertificate,
        QualificationLevel::AdvancedCertificate,
        QualificationLevel::UndergraduateDegree,
        QualificationLevel::PostgraduateDiploma,
        QualificationLevel::HonoursDegree,
        QualificationLevel::MastersDegree,
        QualificationLevel::DoctoralDegree,
    ];

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationLevel::HigherCertificate => "Higher Certificate",
            QualificationLevel::AdvancedCertificate => "Advanced Certificate",
            QualificationLevel::UndergraduateDegree => "Undergraduate Degree",
            QualificationLevel::PostgraduateDiploma => "Postgraduate Diploma",
            QualificationLevel::HonoursDegree => "Honours Degree",
            QualificationLevel::MastersDegree => "Masters Degree",
            QualificationLevel::DoctoralDegree => "Doctoral Degree",
        }
    }
}

impl fmt::Display for QualificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QualificationLevel {
    type Err = String;

    /// Parse a level label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        QualificationLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown qualification level: {s}"))
    }
}

/// Subject-area label inferred from title keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faculty {
    #[serde(rename = "Business Management")]
    BusinessManagement,
    #[serde(rename = "Public Management")]
    PublicManagement,
    #[serde(rename = "Accounting and Finance")]
    AccountingAndFinance,
    #[serde(rename = "Marketing and Communication")]
    MarketingAndCommunication,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    #[serde(rename = "Supply Chain Management")]
    SupplyChainManagement,
    #[serde(rename = "Tourism and Hospitality")]
    TourismAndHospitality,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Legal Studies")]
    LegalStudies,
    /// Fallback when no keyword rule matches.
    #[serde(rename = "Business and Commerce")]
    BusinessAndCommerce,
}

impl Faculty {
    pub const ALL: [Faculty; 12] = [
        Faculty::BusinessManagement,
        Faculty::PublicManagement,
        Faculty::AccountingAndFinance,
        Faculty::MarketingAndCommunication,
        Faculty::HumanResources,
        Faculty::InformationTechnology,
        Faculty::ProjectManagement,
        Faculty::SupplyChainManagement,
        Faculty::TourismAndHospitality,
        Faculty::Education,
        Faculty::LegalStudies,
        Faculty::BusinessAndCommerce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faculty::BusinessManagement => "Business Management",
            Faculty::PublicManagement => "Public Management",
            Faculty::AccountingAndFinance => "Accounting and Finance",
            Faculty::MarketingAndCommunication => "Marketing and Communication",
            Faculty::HumanResources => "Human Resources",
            Faculty::InformationTechnology => "Information Technology",
            Faculty::ProjectManagement => "Project Management",
            Faculty::SupplyChainManagement => "Supply Chain Management",
            Faculty::TourismAndHospitality => "Tourism and Hospitality",
            Faculty::Education => "Education",
            Faculty::LegalStudies => "Legal Studies",
            Faculty::BusinessAndCommerce => "Business and Commerce",
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Faculty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Faculty::ALL
            .into_iter()
            .find(|faculty| faculty.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| format!("Unknown faculty: {s}"))
    }
}
