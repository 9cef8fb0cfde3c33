//! Rendering of command results as tables, headlines or JSON.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use estimator_core::{format_numeric, format_reading};
use estimator_model::{BedtimeEstimate, BillSplit, TemperatureScale};

use crate::types::{Conversion, QuizReport, SessionReport};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize result")
}

pub fn split_headline(split: &BillSplit) -> String {
    format!(
        "Each of {} pays {:.2}",
        split.party_size,
        split.per_person
    )
}

pub fn split_table(split: &BillSplit) -> Table {
    let mut table = key_value_table();
    table.add_row(vec![Cell::new("Amount"), money_cell(split.amount)]);
    table.add_row(vec![
        Cell::new(format!("Tip ({}%)", format_numeric(split.tip_percent))),
        money_cell(split.tip_amount),
    ]);
    table.add_row(vec![Cell::new("Total"), money_cell(split.grand_total)]);
    table.add_row(vec![
        Cell::new("People"),
        Cell::new(split.party_size).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Per person").add_attribute(Attribute::Bold),
        money_cell(split.per_person)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Per-person share at each preset tip.
pub fn tip_presets_table(splits: &[BillSplit]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tip"),
        header_cell("Total"),
        header_cell("Per person"),
    ]);
    apply_table_style(&mut table);
    for split in splits {
        table.add_row(vec![
            Cell::new(format!("{}%", format_numeric(split.tip_percent)))
                .set_alignment(CellAlignment::Right),
            money_cell(split.grand_total),
            money_cell(split.per_person),
        ]);
    }
    table
}

pub fn conversion_headline(conversion: &Conversion) -> String {
    format!(
        "{} = {}",
        format_reading(conversion.value, conversion.from),
        format_reading(conversion.converted, conversion.to)
    )
}

pub fn scales_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Scale"), header_cell("Symbol")]);
    apply_table_style(&mut table);
    for scale in TemperatureScale::ALL {
        table.add_row(vec![Cell::new(scale.as_str()), Cell::new(scale.symbol())]);
    }
    table
}

pub fn bedtime_headline(estimate: &BedtimeEstimate) -> String {
    format!(
        "Go to bed at {} to wake up at {} ({} h of sleep)",
        estimate.bedtime_of_day().format("%H:%M"),
        estimate.wake_time.format("%H:%M on %Y-%m-%d"),
        format_numeric((estimate.sleep_need_hours * 100.0).round() / 100.0)
    )
}

pub fn session_headline(report: &SessionReport) -> String {
    let state = if report.finished { "Game ends!" } else { "Game paused." };
    format!(
        "{state} Your score is {} after {} rounds.",
        report.score,
        report.rounds.len()
    )
}

pub fn session_table(report: &SessionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Round"),
        header_cell("App"),
        header_cell("Should"),
        header_cell("You"),
        header_cell("Points"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    for outcome in &report.rounds {
        let should = if outcome.player_should_win { "Win" } else { "Lose" };
        table.add_row(vec![
            Cell::new(outcome.round).set_alignment(CellAlignment::Right),
            Cell::new(outcome.app_move),
            Cell::new(should),
            Cell::new(outcome.player_move),
            points_cell(outcome.points),
            Cell::new(outcome.score).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn quiz_headline(report: &QuizReport) -> String {
    format!("Your score is {} out of {}.", report.score, report.asked)
}

pub fn quiz_table(report: &QuizReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Flag of"),
        header_cell("Choices"),
        header_cell("Picked"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    for (position, question) in report.questions.iter().enumerate() {
        let verdict = question.answer.verdict;
        let color = if verdict.is_correct() { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(position + 1).set_alignment(CellAlignment::Right),
            Cell::new(&question.answer.target),
            Cell::new(question.choices.join(", ")),
            Cell::new(&question.answer.chosen),
            Cell::new(verdict).fg(color).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn money_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

fn points_cell(points: i32) -> Cell {
    let cell = Cell::new(format!("{points:+}")).set_alignment(CellAlignment::Right);
    if points > 0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}
