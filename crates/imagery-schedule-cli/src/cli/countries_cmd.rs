//! `imagery-schedule countries` — list country identifiers.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};

pub async fn run(config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(config)?;
    let countries = pipeline
        .countries()
        .await
        .context("failed to load the country directory")?;

    if output::is_json() {
        output::print_json(&countries);
        return Ok(());
    }

    for country in &countries {
        println!("{country}");
    }

    if !output::is_quiet() {
        let s = Styled::new();
        eprintln!(
            "  {} {}",
            s.ok_sym(),
            output::count(countries.len(), "country", "countries")
        );
    }

    Ok(())
}
