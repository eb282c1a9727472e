//! Console rendering of a pipeline report

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use llm_eval_metrics::SummaryGroup;
use llm_eval_workflow::PipelineReport;
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format }
    }

    pub fn write_report(&self, report: &PipelineReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Table => self.write_table(report),
        }
        Ok(())
    }

    fn write_table(&self, report: &PipelineReport) {
        if report.groups.is_empty() {
            println!("{}", "No records evaluated.".dimmed());
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.apply_modifier(UTF8_ROUND_CORNERS);

            let headers = [
                "Model",
                "Task",
                "Count",
                "Accuracy",
                "Avg latency",
                "p95 latency",
                "Avg tokens",
                "Failures",
            ];
            let header_cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            table.set_header(header_cells);

            for group in &report.groups {
                table.add_row(group_row(group));
            }

            println!("{table}");
        }

        println!(
            "\n{} {} evaluated, {} skipped ({} schema, {} unknown task)",
            "Records:".bold(),
            report.evaluated.to_string().green(),
            report.skipped.total().to_string().yellow(),
            report.skipped.schema,
            report.skipped.unknown_task,
        );
        println!(
            "{} {:.2}%",
            "Overall accuracy:".bold(),
            percent(report.overall_accuracy.to_f64().unwrap_or(0.0)),
        );
        println!(
            "{} {}",
            "Total failures found:".bold(),
            report.total_failures().to_string().red()
        );
        for (failure_type, count) in &report.failures_by_type {
            println!("  {:<28} {}", failure_type.to_string(), count);
        }
        if report.degenerate_references > 0 {
            println!(
                "{} {} record(s) had an empty reference and scored 0.0",
                "⚠".yellow(),
                report.degenerate_references
            );
        }
        if report.classifier_disagreements > 0 {
            println!(
                "{} {} incorrect record(s) were labelled correct by the classifier",
                "⚠".yellow(),
                report.classifier_disagreements
            );
        }
    }
}

fn percent(fraction: f64) -> f64 {
    fraction * 100.0
}

fn group_row(group: &SummaryGroup) -> Vec<Cell> {
    let accuracy = percent(group.accuracy_f64());
    let accuracy_color = if accuracy >= 50.0 { Color::Green } else { Color::Red };

    vec![
        Cell::new(&group.model),
        Cell::new(group.task),
        Cell::new(group.count),
        Cell::new(format!("{:.2}%", accuracy)).fg(accuracy_color),
        Cell::new(format!("{:.2}s", group.mean_latency_sec)),
        Cell::new(format!("{:.2}s", group.latency.p95)),
        Cell::new(format!("{:.2}", group.mean_output_tokens)),
        Cell::new(group.failure_total()),
    ]
}
