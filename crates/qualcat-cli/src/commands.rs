use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::info;

use qualcat_cli::pipeline::{
    GenerateOptions, GenerateResult, QueryFilter, generate, load_and_transform,
};

use crate::cli::{CatalogueArgs, GenerateArgs, ListArgs, ShowArgs};
use crate::summary::{apply_table_style, qualification_table};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let options = GenerateOptions::new(&args.input)
        .with_output(args.output.clone())
        .with_title(args.title.clone())
        .with_dry_run(args.dry_run);
    let result = generate(&options)?;
    info!(
        total = result.summary.total,
        by_level = ?result.summary.by_level,
        by_faculty = ?result.summary.by_faculty,
        "catalogue summary"
    );
    Ok(result)
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let catalogue = load_and_transform(&args.input)?;
    let filter = QueryFilter {
        level: args.level,
        nqf_level: args.nqf,
        faculty: args.faculty,
        search: args.search.clone(),
    };
    let matches = filter.apply(&catalogue);
    println!("{}", qualification_table(&matches));
    println!("{} of {} qualifications", matches.len(), catalogue.len());
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let catalogue = load_and_transform(&args.input)?;
    let qualification = catalogue
        .by_id(&args.id)
        .ok_or_else(|| anyhow!("no qualification with id {}", args.id))?;
    let json = serde_json::to_string_pretty(qualification).context("serialize qualification")?;
    println!("{json}");
    Ok(())
}

pub fn run_faculties(args: &CatalogueArgs) -> Result<()> {
    let catalogue = load_and_transform(&args.input)?;
    let mut table = Table::new();
    table.set_header(vec!["Faculty", "Qualifications"]);
    apply_table_style(&mut table);
    for faculty in catalogue.faculties() {
        let count = catalogue.by_faculty(faculty).len();
        table.add_row(vec![faculty.to_string(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_levels(args: &CatalogueArgs) -> Result<()> {
    let catalogue = load_and_transform(&args.input)?;
    let mut table = Table::new();
    table.set_header(vec!["Level", "Qualifications"]);
    apply_table_style(&mut table);
    for level in catalogue.levels() {
        let count = catalogue.by_level(level).len();
        table.add_row(vec![level.to_string(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}
