use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qualcat_cli::pipeline::GenerateResult;
use qualcat_model::Qualification;

pub fn print_summary(result: &GenerateResult) {
    println!(
        "Successfully transformed {} qualifications",
        result.summary.total
    );
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    println!("{}", count_table("Level", &result.summary.by_level));
    println!("{}", count_table("Faculty", &result.summary.by_faculty));
    if !result.duplicate_ids.is_empty() {
        eprintln!("Duplicate identifiers:");
        for id in &result.duplicate_ids {
            eprintln!("- {id}");
        }
    }
}

/// Records as an id, name, level, NQF and faculty table.
pub fn qualification_table(qualifications: &[&Qualification]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Level"),
        header_cell("NQF"),
        header_cell("Faculty"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for qualification in qualifications {
        let nqf = qualification
            .nqf_level
            .map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![
            Cell::new(&qualification.id).add_attribute(Attribute::Bold),
            Cell::new(&qualification.name),
            Cell::new(qualification.level),
            nqf,
            Cell::new(qualification.faculty),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn count_table(label: &str, counts: &BTreeMap<String, usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Count")]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, count) in counts {
        table.add_row(vec![Cell::new(key), Cell::new(count)]);
    }
    let total: usize = counts.values().sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
