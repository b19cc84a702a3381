//! Level and faculty inference from NQF level and title text.
//!
//! Faculty rules are evaluated top to bottom and the first rule with any
//! matching keyword wins. A title can contain keywords from several rules,
//! so the order of [`FACULTY_RULES`] is part of the behavior.

use qualcat_model::{Faculty, QualificationLevel};

/// Ordered keyword rules for faculty inference. Keywords are lowercase.
pub const FACULTY_RULES: &[(&[&str], Faculty)] = &[
    (&["business administration"], Faculty::BusinessManagement),
    (&["public administration"], Faculty::PublicManagement),
    (&["accounting"], Faculty::AccountingAndFinance),
    (
        &[
            "marketing",
            "digital marketing",
            "social media",
            "corporate communication",
        ],
        Faculty::MarketingAndCommunication,
    ),
    (&["human resource"], Faculty::HumanResources),
    (
        &["information", "technology", "coding", "artificial intelligence"],
        Faculty::InformationTechnology,
    ),
    (&["project management"], Faculty::ProjectManagement),
    (&["supply chain", "logistics"], Faculty::SupplyChainManagement),
    (&["financial", "tax"], Faculty::AccountingAndFinance),
    (
        &["entrepreneurship", "retail", "family business"],
        Faculty::BusinessManagement,
    ),
    (
        &["tourism", "hospitality", "events"],
        Faculty::TourismAndHospitality,
    ),
    (&["education"], Faculty::Education),
    (&["paralegal"], Faculty::LegalStudies),
];

/// Faculty assigned when no rule matches.
pub const DEFAULT_FACULTY: Faculty = Faculty::BusinessAndCommerce;

/// Level assigned when the NQF level is missing or outside the lookup table.
pub const DEFAULT_LEVEL: QualificationLevel = QualificationLevel::UndergraduateDegree;

/// Classify a qualification level.
///
/// NQF 8 covers both postgraduate diplomas and honours degrees; the title
/// decides between them.
pub fn classify_level(nqf_level: Option<u32>, title: &str) -> QualificationLevel {
    match nqf_level {
        Some(5) => QualificationLevel::HigherCertificate,
        Some(6) => QualificationLevel::AdvancedCertificate,
        Some(7) => QualificationLevel::UndergraduateDegree,
        Some(8) if title.to_lowercase().contains("honours") => QualificationLevel::HonoursDegree,
        Some(8) => QualificationLevel::PostgraduateDiploma,
        Some(9) => QualificationLevel::MastersDegree,
        Some(10) => QualificationLevel::DoctoralDegree,
        _ => DEFAULT_LEVEL,
    }
}

/// Infer the faculty from title keywords (case-insensitive, first match wins).
pub fn infer_faculty(title: &str) -> Faculty {
    let lower = title.to_lowercase();
    FACULTY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(DEFAULT_FACULTY, |(_, faculty)| *faculty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_levels() {
        assert_eq!(
            classify_level(Some(5), "Higher Certificate in Business Management"),
            QualificationLevel::HigherCertificate
        );
        assert_eq!(
            classify_level(Some(6), "Advanced Certificate in Marketing"),
            QualificationLevel::AdvancedCertificate
        );
        assert_eq!(
            classify_level(Some(7), "Bachelor of Commerce"),
            QualificationLevel::UndergraduateDegree
        );
        assert_eq!(
            classify_level(Some(9), "Master of Commerce"),
            QualificationLevel::MastersDegree
        );
        assert_eq!(
            classify_level(Some(10), "Doctor of Business Administration"),
            QualificationLevel::DoctoralDegree
        );
    }

    #[test]
    fn nqf_eight_depends_on_honours_in_title() {
        assert_eq!(
            classify_level(Some(8), "Bachelor of Commerce Honours in Marketing"),
            QualificationLevel::HonoursDegree
        );
        assert_eq!(
            classify_level(Some(8), "BACHELOR OF EDUCATION HONOURS"),
            QualificationLevel::HonoursDegree
        );
        assert_eq!(
            classify_level(Some(8), "Postgraduate Diploma in Management"),
            QualificationLevel::PostgraduateDiploma
        );
    }

    #[test]
    fn honours_outside_nqf_eight_is_ignored() {
        assert_eq!(
            classify_level(Some(7), "Honours Bachelor"),
            QualificationLevel::UndergraduateDegree
        );
    }

    #[test]
    fn unknown_or_missing_level_defaults() {
        assert_eq!(classify_level(None, "Anything"), DEFAULT_LEVEL);
        assert_eq!(classify_level(Some(3), "Anything"), DEFAULT_LEVEL);
        assert_eq!(classify_level(Some(11), "Anything"), DEFAULT_LEVEL);
    }

    #[test]
    fn faculty_first_match_wins() {
        // "accounting" (rule 3) is checked before "tax" (rule 9).
        assert_eq!(
            infer_faculty("Bachelor of Accounting and Tax Administration"),
            Faculty::AccountingAndFinance
        );
        // "business administration" outranks "information".
        assert_eq!(
            infer_faculty("Master of Business Administration in Information Systems"),
            Faculty::BusinessManagement
        );
        // "technology" (rule 6) outranks "project management" (rule 7).
        assert_eq!(
            infer_faculty("Higher Certificate in Technology Project Management"),
            Faculty::InformationTechnology
        );
    }

    #[test]
    fn faculty_keywords() {
        let cases = [
            ("Bachelor of Public Administration", Faculty::PublicManagement),
            ("Higher Certificate in Social Media", Faculty::MarketingAndCommunication),
            ("Bachelor of Human Resource Management", Faculty::HumanResources),
            ("Advanced Certificate in Coding", Faculty::InformationTechnology),
            ("Higher Certificate in Logistics", Faculty::SupplyChainManagement),
            ("Postgraduate Diploma in Tax", Faculty::AccountingAndFinance),
            ("Higher Certificate in Retail Management", Faculty::BusinessManagement),
            ("Bachelor of Hospitality Management", Faculty::TourismAndHospitality),
            ("Bachelor of Education in Foundation Phase", Faculty::Education),
            ("Higher Certificate in Paralegal Studies", Faculty::LegalStudies),
        ];
        for (title, expected) in cases {
            assert_eq!(infer_faculty(title), expected, "title: {title}");
        }
    }

    #[test]
    fn every_keyword_selects_its_faculty() {
        let expected = [
            ("business administration", Faculty::BusinessManagement),
            ("public administration", Faculty::PublicManagement),
            ("accounting", Faculty::AccountingAndFinance),
            ("marketing", Faculty::MarketingAndCommunication),
            ("digital marketing", Faculty::MarketingAndCommunication),
            ("social media", Faculty::MarketingAndCommunication),
            ("corporate communication", Faculty::MarketingAndCommunication),
            ("human resource", Faculty::HumanResources),
            ("information", Faculty::InformationTechnology),
            ("technology", Faculty::InformationTechnology),
            ("coding", Faculty::InformationTechnology),
            ("artificial intelligence", Faculty::InformationTechnology),
            ("project management", Faculty::ProjectManagement),
            ("supply chain", Faculty::SupplyChainManagement),
            ("logistics", Faculty::SupplyChainManagement),
            ("financial", Faculty::AccountingAndFinance),
            ("tax", Faculty::AccountingAndFinance),
            ("entrepreneurship", Faculty::BusinessManagement),
            ("retail", Faculty::BusinessManagement),
            ("family business", Faculty::BusinessManagement),
            ("tourism", Faculty::TourismAndHospitality),
            ("hospitality", Faculty::TourismAndHospitality),
            ("events", Faculty::TourismAndHospitality),
            ("education", Faculty::Education),
            ("paralegal", Faculty::LegalStudies),
        ];
        for (keyword, faculty) in expected {
            let title = format!("Higher Certificate in {keyword}");
            assert_eq!(infer_faculty(&title), faculty, "title: {title}");
            assert_eq!(
                infer_faculty(&title.to_uppercase()),
                faculty,
                "title: {title}"
            );
        }

        let rule_keywords: Vec<&str> = FACULTY_RULES
            .iter()
            .flat_map(|(keywords, _)| keywords.iter().copied())
            .collect();
        let covered: Vec<&str> = expected.iter().map(|(keyword, _)| *keyword).collect();
        assert_eq!(rule_keywords, covered);
    }

    #[test]
    fn project_management_titles() {
        assert_eq!(
            infer_faculty("Advanced Certificate in Project Management"),
            Faculty::ProjectManagement
        );
        // Rule 1 fires before rule 7.
        assert_eq!(
            infer_faculty("Bachelor of Business Administration in Project Management"),
            Faculty::BusinessManagement
        );
    }

    #[test]
    fn faculty_defaults_when_nothing_matches() {
        assert_eq!(
            infer_faculty("Bachelor of Commerce in Law"),
            Faculty::BusinessAndCommerce
        );
        assert_eq!(infer_faculty(""), DEFAULT_FACULTY);
    }
}
