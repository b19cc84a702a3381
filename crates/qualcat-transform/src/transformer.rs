//! Record-level transformation.

use tracing::{debug, info, warn};

use qualcat_model::{
    Catalogue, DEFAULT_TOTAL_CREDITS, Qualification, RawQualification, SAQA_ID_PLACEHOLDER,
};

use crate::error::{Result, TransformError};
use crate::identifier::synthesize_id;
use crate::inference::{classify_level, infer_faculty};
use crate::normalization::{derive_description, parse_duration_years};

/// Transform every record, preserving input order.
///
/// Fails on the first record without a title; no partial catalogue is
/// returned. Identifier collisions are logged but not rejected.
pub fn transform_catalogue(records: &[RawQualification]) -> Result<Catalogue> {
    let qualifications = records
        .iter()
        .enumerate()
        .map(|(index, raw)| transform_record(index, raw))
        .collect::<Result<Vec<_>>>()?;
    let catalogue = Catalogue::new(qualifications);

    for (id, indices) in catalogue.duplicate_ids() {
        warn!(id, records = ?indices, "identifier shared by multiple records");
    }
    info!(records = catalogue.len(), "transformed catalogue");
    Ok(catalogue)
}

/// Transform a single record. `index` is only used for error reporting.
pub fn transform_record(index: usize, raw: &RawQualification) -> Result<Qualification> {
    let title = raw
        .title
        .as_deref()
        .filter(|title| !title.trim().is_empty())
        .ok_or(TransformError::MissingTitle { index })?;

    let qualification = Qualification {
        id: synthesize_id(title),
        name: title.to_string(),
        level: classify_level(raw.nqf_level, title),
        nqf_level: raw.nqf_level,
        saqa_id: non_blank(raw.saqa_id.as_deref())
            .unwrap_or(SAQA_ID_PLACEHOLDER)
            .to_string(),
        total_credits: raw.credits.unwrap_or(DEFAULT_TOTAL_CREDITS),
        duration_years: parse_duration_years(raw.duration.as_deref()),
        faculty: infer_faculty(title),
        description: derive_description(raw.short_description.as_deref(), raw.about.as_deref()),
        coordinator: non_blank(raw.programme_manager.as_deref()).map(str::to_string),
        career_outcomes: raw.career_paths.clone(),
        programme_url: non_blank(raw.programme_url.as_deref()).map(str::to_string),
        saqa_url: non_blank(raw.saqa_url.as_deref()).map(str::to_string),
    };

    debug!(
        index,
        id = %qualification.id,
        qualification_level = %qualification.level,
        faculty = %qualification.faculty,
        "transformed record"
    );
    Ok(qualification)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
