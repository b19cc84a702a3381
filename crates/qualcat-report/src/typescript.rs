//! TypeScript module generation.
//!
//! The module is assembled from fixed text plus the pretty-printed record
//! array. Nothing time- or environment-dependent goes into it, so the same
//! catalogue always renders to the same bytes.

use qualcat_model::{Catalogue, QualificationLevel};

use crate::error::{ReportError, Result};

/// NQF levels accepted by the generated `NqfLevel` type.
pub const NQF_LEVELS: [u32; 6] = [5, 6, 7, 8, 9, 10];

/// Options for the generated module header.
#[derive(Debug, Clone)]
pub struct ModuleOptions {
    /// First line of the header comment.
    pub title: String,
    /// Source file name mentioned in the header, if any.
    pub source_name: Option<String>,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            title: "Qualification Catalogue".to_string(),
            source_name: None,
        }
    }
}

impl ModuleOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: Option<String>) -> Self {
        self.source_name = name;
        self
    }
}

const INTERFACE: &str = "\
export interface Qualification {
  id: string;
  name: string;
  level: QualificationLevel;
  nqf_level: NqfLevel | null;
  saqa_id: string;
  total_credits: number;
  duration_years: number;
  faculty: string;
  description: string;
  coordinator: string | null;
  career_outcomes: string[];
  programme_url?: string;
  saqa_url?: string;
}
";

const QUERY_HELPERS: &str = "\
export function getQualificationById(id: string): Qualification | undefined {
  return QUALIFICATIONS.find(q => q.id === id);
}

export function getQualificationsByLevel(level: QualificationLevel): Qualification[] {
  return QUALIFICATIONS.filter(q => q.level === level);
}

export function getQualificationsByNQF(nqf_level: number): Qualification[] {
  return QUALIFICATIONS.filter(q => q.nqf_level === nqf_level);
}

export function getQualificationsByFaculty(faculty: string): Qualification[] {
  return QUALIFICATIONS.filter(q => q.faculty === faculty);
}

export function searchQualifications(query: string): Qualification[] {
  const lowerQuery = query.toLowerCase();
  return QUALIFICATIONS.filter(q =>
    q.name.toLowerCase().includes(lowerQuery) ||
    q.description.toLowerCase().includes(lowerQuery) ||
    q.faculty.toLowerCase().includes(lowerQuery)
  );
}

export function getAllFaculties(): string[] {
  return Array.from(new Set(QUALIFICATIONS.map(q => q.faculty))).sort();
}

export function getAllLevels(): QualificationLevel[] {
  return Array.from(new Set(QUALIFICATIONS.map(q => q.level)));
}
";

/// Render the complete TypeScript module for a catalogue.
pub fn render_module(catalogue: &Catalogue, options: &ModuleOptions) -> Result<String> {
    let records = serde_json::to_string_pretty(catalogue.as_slice())
        .map_err(|source| ReportError::Serialize { source })?;

    let mut out = String::new();
    out.push_str(&render_header(options));
    out.push('\n');
    out.push_str(&render_declarations());
    out.push('\n');
    out.push_str(&format!(
        "export const QUALIFICATIONS: Qualification[] = {records};\n\n"
    ));
    out.push_str(QUERY_HELPERS);

    tracing::debug!(
        records = catalogue.len(),
        bytes = out.len(),
        "Rendered TypeScript module"
    );
    Ok(out)
}

/// Header doc comment.
pub fn render_header(options: &ModuleOptions) -> String {
    let notice = match &options.source_name {
        Some(name) => format!("Auto-generated from {name}. Do not edit by hand."),
        None => "Auto-generated. Do not edit by hand.".to_string(),
    };
    format!("/**\n * {}\n * {notice}\n */\n", options.title)
}

/// Type aliases and the `Qualification` interface.
pub fn render_declarations() -> String {
    let level_union = QualificationLevel::ALL
        .iter()
        .map(|level| format!("  | '{}'", level.as_str()))
        .collect::<Vec<_>>()
        .join("\n");
    let mut out = format!("export type QualificationLevel =\n{level_union};\n\n");

    let nqf_union = NQF_LEVELS
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("export type NqfLevel = {nqf_union};\n\n"));
    out.push_str(INTERFACE);
    out
}
