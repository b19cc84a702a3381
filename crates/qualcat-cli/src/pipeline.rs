//! Catalogue processing pipeline with explicit stages.
//!
//! 1. **Ingest**: Read the JSON catalogue
//! 2. **Transform**: Normalize and classify every record
//! 3. **Output**: Render the TypeScript module and write it atomically
//!
//! Any stage failure aborts the run before the output file is touched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use qualcat_ingest::load_catalogue;
use qualcat_model::{Catalogue, CatalogueSummary, Faculty, Qualification, QualificationLevel};
use qualcat_report::{ModuleOptions, render_module, write_module};
use qualcat_transform::transform_catalogue;

/// File name of the generated module when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "qualifications.ts";

/// Options for a full generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub module: ModuleOptions,
}

impl GenerateOptions {
    /// Options with the output placed next to the input.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        let module = ModuleOptions::default().with_source_name(source_name(&input));
        Self {
            input,
            output,
            dry_run: false,
            module,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.module = self.module.with_title(title);
        }
        self
    }
}

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateResult {
    pub input: PathBuf,
    /// Path written, or `None` on a dry run.
    pub output: Option<PathBuf>,
    pub summary: CatalogueSummary,
    /// Identifiers shared by more than one record.
    pub duplicate_ids: Vec<String>,
}

/// `qualifications.ts` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DEFAULT_OUTPUT_FILE)
}

fn source_name(input: &Path) -> Option<String> {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Ingest and transform a catalogue file.
pub fn load_and_transform(input: &Path) -> Result<Catalogue> {
    let ingest_span = info_span!("ingest", input = %input.display());
    let records = ingest_span
        .in_scope(|| load_catalogue(input))
        .with_context(|| format!("load catalogue {}", input.display()))?;

    let transform_span = info_span!("transform", records = records.len());
    let catalogue = transform_span
        .in_scope(|| transform_catalogue(&records))
        .with_context(|| format!("transform catalogue {}", input.display()))?;
    Ok(catalogue)
}

/// Run the full pipeline: ingest, transform, render and write.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult> {
    let start = Instant::now();
    let catalogue = load_and_transform(&options.input)?;

    let module = render_module(&catalogue, &options.module).context("render module")?;
    let output = if options.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let output_span = info_span!("output", path = %options.output.display());
        output_span
            .in_scope(|| write_module(&options.output, &module))
            .with_context(|| format!("write {}", options.output.display()))?;
        Some(options.output.clone())
    };

    let duplicate_ids = catalogue
        .duplicate_ids()
        .into_keys()
        .map(str::to_string)
        .collect();
    let summary = catalogue.summary();
    info!(
        records = summary.total,
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );
    Ok(GenerateResult {
        input: options.input.clone(),
        output,
        summary,
        duplicate_ids,
    })
}

/// Conjunctive record filter used by `list`.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub level: Option<QualificationLevel>,
    pub nqf_level: Option<u32>,
    pub faculty: Option<Faculty>,
    pub search: Option<String>,
}

impl QueryFilter {
    pub fn matches(&self, qualification: &Qualification) -> bool {
        self.level.is_none_or(|level| qualification.level == level)
            && self
                .nqf_level
                .is_none_or(|nqf| qualification.nqf_level == Some(nqf))
            && self
                .faculty
                .is_none_or(|faculty| qualification.faculty == faculty)
            && self
                .search
                .as_deref()
                .is_none_or(|query| qualification.matches_query(query))
    }

    /// Matching records in catalogue order.
    pub fn apply<'a>(&self, catalogue: &'a Catalogue) -> Vec<&'a Qualification> {
        catalogue.iter().filter(|q| self.matches(q)).collect()
    }
}
