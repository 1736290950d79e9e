//! Fetch, extract and persist schedules country by country.

use crate::config::Config;
use crate::fetch::{FetchError, Fetcher};
use crate::store::ScheduleStore;
use anyhow::{Context, Result};
use imagery_schedule::{countries_from_html, extract_document};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// What happened to one country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryReport {
    pub country: String,
    pub layout: String,
    pub records: usize,
    /// Rows or sections left out, as messages.
    pub skipped: Vec<String>,
    pub path: PathBuf,
}

/// A country that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct CountryFailure {
    pub country: String,
    pub error: String,
}

/// Totals for a pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub succeeded: Vec<CountryReport>,
    pub failed: Vec<CountryFailure>,
}

impl RunSummary {
    pub fn total_records(&self) -> usize {
        self.succeeded.iter().map(|r| r.records).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.succeeded.iter().map(|r| r.skipped.len()).sum()
    }
}

/// Sequential fetch → extract → save loop.
pub struct Pipeline {
    fetcher: Fetcher,
    store: ScheduleStore,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            store: ScheduleStore::new(config.out_dir.clone()),
        })
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Country identifiers from the directory page.
    pub async fn countries(&self) -> Result<Vec<String>, FetchError> {
        let html = self.fetcher.directory().await?;
        Ok(countries_from_html(&html))
    }

    /// Process every country in order. A failing country is recorded
    /// and the run moves on.
    pub async fn run(&self, countries: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();

        for (i, country) in countries.iter().enumerate() {
            match self.process(country).await {
                Ok(report) => {
                    info!(
                        "[{}/{}] {country}: {} record(s), {} layout",
                        i + 1,
                        countries.len(),
                        report.records,
                        report.layout
                    );
                    summary.succeeded.push(report);
                }
                Err(e) => {
                    warn!("[{}/{}] {country}: {e:#}", i + 1, countries.len());
                    summary.failed.push(CountryFailure {
                        country: country.clone(),
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        summary
    }

    /// Fetch one country's page, extract it and save the result.
    pub async fn process(&self, country: &str) -> Result<CountryReport> {
        let html = self
            .fetcher
            .country(country)
            .await
            .with_context(|| format!("fetching {country}"))?;

        let (layout, extraction) = extract_document(&html);
        for item in &extraction.skipped {
            warn!("{country}: skipped {item}");
        }

        let path = self
            .store
            .save(country, &extraction.records)
            .with_context(|| format!("saving {country}"))?;

        Ok(CountryReport {
            country: country.to_string(),
            layout: layout.to_string(),
            records: extraction.records.len(),
            skipped: extraction.skipped.iter().map(|e| e.to_string()).collect(),
            path,
        })
    }
}
