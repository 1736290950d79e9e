//! `imagery-schedule fetch [COUNTRY...]` — download and save schedules.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::pipeline::{Pipeline, RunSummary};
use anyhow::{bail, Context, Result};
use std::time::Instant;

pub async fn run(config: &Config, countries: &[String]) -> Result<()> {
    let start = Instant::now();
    let pipeline = Pipeline::new(config)?;

    let countries = if countries.is_empty() {
        pipeline
            .countries()
            .await
            .context("failed to load the country directory")?
    } else {
        countries.to_vec()
    };

    if countries.is_empty() {
        bail!("no countries to fetch");
    }

    if !output::is_quiet() && !output::is_json() {
        let s = Styled::new();
        output::print_header(&s);
        eprintln!(
            "  Fetching {} into {}",
            output::count(countries.len(), "country", "countries"),
            pipeline.store().dir().display()
        );
        eprintln!();
    }

    let summary = pipeline.run(&countries).await;

    if output::is_json() {
        output::print_json(&summary);
    } else if !output::is_quiet() {
        print_summary(&summary, start.elapsed().as_secs_f64());
    }

    if !summary.failed.is_empty() {
        bail!(
            "{} of {} failed",
            summary.failed.len(),
            output::count(countries.len(), "country", "countries")
        );
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, secs: f64) {
    let s = Styled::new();

    for report in &summary.succeeded {
        let sym = if report.skipped.is_empty() {
            s.ok_sym()
        } else {
            s.warn_sym()
        };
        output::print_check(
            sym,
            &report.country,
            &format!(
                "{} ({})",
                output::count(report.records, "record", "records"),
                report.layout
            ),
        );
        for item in &report.skipped {
            output::print_detail(&s.yellow(&format!("skipped {item}")));
        }
    }

    for failure in &summary.failed {
        output::print_check(s.fail_sym(), &failure.country, &s.red(&failure.error));
    }

    eprintln!();
    eprintln!(
        "  {}: {} saved, {} failed, {} in {secs:.1}s",
        s.bold("Done"),
        summary.succeeded.len(),
        summary.failed.len(),
        output::count(summary.total_records(), "record", "records"),
    );
}
