//! Read-only queries over a normalized catalogue.
//!
//! These mirror the helpers exported by the generated module, so the CLI can
//! answer the same questions without a JavaScript runtime.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::enums::{Faculty, QualificationLevel};
use crate::qualification::Qualification;

/// Normalized qualifications in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    qualifications: Vec<Qualification>,
}

impl Catalogue {
    pub fn new(qualifications: Vec<Qualification>) -> Self {
        Self { qualifications }
    }

    pub fn len(&self) -> usize {
        self.qualifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualifications.is_empty()
    }

    pub fn as_slice(&self) -> &[Qualification] {
        &self.qualifications
    }

    pub fn iter(&self) -> impl Iterator<Item = &Qualification> {
        self.qualifications.iter()
    }

    /// First qualification with the given identifier.
    pub fn by_id(&self, id: &str) -> Option<&Qualification> {
        self.qualifications.iter().find(|q| q.id == id)
    }

    pub fn by_level(&self, level: QualificationLevel) -> Vec<&Qualification> {
        self.qualifications
            .iter()
            .filter(|q| q.level == level)
            .collect()
    }

    pub fn by_nqf_level(&self, nqf_level: u32) -> Vec<&Qualification> {
        self.qualifications
            .iter()
            .filter(|q| q.nqf_level == Some(nqf_level))
            .collect()
    }

    pub fn by_faculty(&self, faculty: Faculty) -> Vec<&Qualification> {
        self.qualifications
            .iter()
            .filter(|q| q.faculty == faculty)
            .collect()
    }

    /// Case-insensitive substring search across name, description and faculty.
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Qualification> {
        self.qualifications
            .iter()
            .filter(|q| q.matches_query(query))
            .collect()
    }

    /// Distinct faculties present, sorted by label.
    pub fn faculties(&self) -> Vec<Faculty> {
        let mut faculties: Vec<Faculty> = Vec::new();
        for qualification in &self.qualifications {
            if !faculties.contains(&qualification.faculty) {
                faculties.push(qualification.faculty);
            }
        }
        faculties.sort_by_key(Faculty::as_str);
        faculties
    }

    /// Distinct levels present, in order of first appearance.
    pub fn levels(&self) -> Vec<QualificationLevel> {
        let mut levels: Vec<QualificationLevel> = Vec::new();
        for qualification in &self.qualifications {
            if !levels.contains(&qualification.level) {
                levels.push(qualification.level);
            }
        }
        levels
    }

    /// Identifiers shared by more than one record, with the record indices.
    pub fn duplicate_ids(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, qualification) in self.qualifications.iter().enumerate() {
            seen.entry(qualification.id.as_str())
                .or_default()
                .push(index);
        }
        seen.into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .collect()
    }

    pub fn summary(&self) -> CatalogueSummary {
        let mut summary = CatalogueSummary {
            total: self.qualifications.len(),
            ..CatalogueSummary::default()
        };
        for qualification in &self.qualifications {
            *summary
                .by_level
                .entry(qualification.level.as_str().to_string())
                .or_default() += 1;
            *summary
                .by_faculty
                .entry(qualification.faculty.as_str().to_string())
                .or_default() += 1;
        }
        summary
    }

    pub fn into_inner(self) -> Vec<Qualification> {
        self.qualifications
    }
}

impl From<Vec<Qualification>> for Catalogue {
    fn from(qualifications: Vec<Qualification>) -> Self {
        Self::new(qualifications)
    }
}

/// Record counts per level and per faculty, keyed by label in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogueSummary {
    pub total: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_faculty: BTreeMap<String, usize>,
}
