//! Terminal rendering of estimates and the baseline table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lifespan_core::CountryBaseline;
use lifespan_model::{Adjustments, PredictionResult};

pub fn print_summary(result: &PredictionResult) {
    println!("{}", summary_table(result));
    println!("Rough heuristic only. Not medical advice.");
}

pub fn print_countries(baselines: &[CountryBaseline]) {
    println!("{}", countries_table(baselines));
}

pub fn summary_table(result: &PredictionResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Estimate"), header_cell("Value")]);
    apply_table_style(&mut table);

    if let Some(name) = &result.name {
        table.add_row(vec![Cell::new("Name"), Cell::new(name)]);
    }
    table.add_row(vec![
        Cell::new("Birth date"),
        Cell::new(result.birth_date.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Current age"),
        years_cell(result.current_age_years),
    ]);
    table.add_row(vec![
        Cell::new("Predicted lifespan"),
        years_cell(result.predicted_lifespan_years).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Remaining"),
        years_cell(result.remaining_years),
    ]);
    table.add_row(vec![
        Cell::new("Predicted death date"),
        Cell::new(result.predicted_death_date.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(format!("{}%", result.confidence)).fg(confidence_color(result.confidence)),
    ]);
    table.add_row(vec![
        Cell::new("Factors"),
        if result.factors.is_empty() {
            dim_cell("none")
        } else {
            Cell::new(render_factors(&result.factors))
        },
    ]);
    table
}

/// One line per factor, names padded to a common width, signed years.
pub fn render_factors(factors: &Adjustments) -> String {
    let width = factors
        .iter()
        .map(|adjustment| adjustment.factor.as_str().len())
        .max()
        .unwrap_or(0);
    factors
        .iter()
        .map(|adjustment| {
            format!(
                "{:<width$}  {:+.2}",
                adjustment.factor.as_str(),
                adjustment.years
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn countries_table(baselines: &[CountryBaseline]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Male"),
        header_cell("Female"),
        header_cell("Unspecified"),
    ]);
    apply_table_style(&mut table);
    for baseline in baselines {
        table.add_row(vec![
            Cell::new(baseline.country.as_str()),
            Cell::new(format!("{:.1}", baseline.male)),
            Cell::new(format!("{:.1}", baseline.female)),
            dim_cell(format!("{:.1}", baseline.unspecified)),
        ]);
    }
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn years_cell(years: f64) -> Cell {
    Cell::new(format!("{years:.2} years"))
}

fn confidence_color(confidence: u8) -> Color {
    match confidence {
        80.. => Color::Green,
        65..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
