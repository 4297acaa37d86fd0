//! Load drivers posting certificates against a running render service.
//!
//! Retry policy matches the service's operational envelope: a bounded number
//! of attempts per certificate with a fixed delay between attempts, where a
//! non-200 response and a transport failure count the same. An exhausted
//! certificate is skipped, never fatal to the batch.

use crate::synth;
use chrono::Local;
use clap::Args;
use gsp_cert::certificate::{CertificateFields, CertificateImporter};
use gsp_cert::config::AppConfig;
use gsp_cert::error::AppError;
use gsp_cert::telemetry;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const DEFAULT_RENDER_URL: &str = "http://127.0.0.1:3000/generate-gsp-certificate-pdf/";

#[derive(Args, Debug)]
pub(crate) struct SyntheticBatchArgs {
    /// Render endpoint to post certificates to
    #[arg(long, default_value = DEFAULT_RENDER_URL)]
    pub(crate) url: String,
    /// Number of certificates to render
    #[arg(long, default_value_t = 50)]
    pub(crate) count: usize,
    /// Directory receiving the rendered PDFs
    #[arg(long, default_value = "rendered_gsp_pdfs")]
    pub(crate) output_dir: PathBuf,
    /// Attempts per certificate before it is skipped
    #[arg(long, default_value_t = 5)]
    pub(crate) max_retries: u32,
    /// Seconds between attempts for the same certificate
    #[arg(long, default_value_t = 3)]
    pub(crate) retry_delay_secs: u64,
    /// Seconds between certificates
    #[arg(long, default_value_t = 2)]
    pub(crate) pacing_secs: u64,
}

#[derive(Args, Debug)]
pub(crate) struct CsvBatchArgs {
    /// CSV file with one certificate per row, headers named after the fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Render endpoint to post certificates to
    #[arg(long, default_value = DEFAULT_RENDER_URL)]
    pub(crate) url: String,
    /// Directory receiving the rendered PDFs
    #[arg(long, default_value = "gsp_pdfs_from_csv")]
    pub(crate) output_dir: PathBuf,
    /// Attempts per certificate before it is skipped
    #[arg(long, default_value_t = 3)]
    pub(crate) max_retries: u32,
    /// Seconds between attempts for the same certificate
    #[arg(long, default_value_t = 3)]
    pub(crate) retry_delay_secs: u64,
    /// Seconds between certificates
    #[arg(long, default_value_t = 2)]
    pub(crate) pacing_secs: u64,
}

pub(crate) async fn run_synthetic_batch(args: SyntheticBatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    std::fs::create_dir_all(&args.output_dir)?;
    let client = reqwest::Client::new();
    let retry_delay = Duration::from_secs(args.retry_delay_secs);
    let pacing = Duration::from_secs(args.pacing_secs);

    let mut rendered = 0usize;
    for index in 1..=args.count {
        let fields = synth::synthetic_certificate(index);
        let started = Instant::now();

        match post_with_retries(&client, &args.url, &fields, args.max_retries, retry_delay).await {
            Some(document) => {
                let path = output_path(&args.output_dir, index);
                std::fs::write(&path, &document)?;
                rendered += 1;
                info!(
                    index,
                    total = args.count,
                    path = %path.display(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "certificate rendered"
                );
            }
            None => {
                warn!(index, attempts = args.max_retries, "skipped certificate after retries");
            }
        }

        tokio::time::sleep(pacing).await;
    }

    info!(rendered, requested = args.count, "synthetic batch complete");
    Ok(())
}

pub(crate) async fn run_csv_batch(args: CsvBatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let rows = CertificateImporter::from_path(&args.input).map_err(AppError::from)?;

    std::fs::create_dir_all(&args.output_dir)?;
    let client = reqwest::Client::new();
    let retry_delay = Duration::from_secs(args.retry_delay_secs);
    let pacing = Duration::from_secs(args.pacing_secs);

    let total = rows.len();
    let mut rendered = 0usize;
    for row in rows {
        let fields = match row.fields {
            Ok(fields) => fields,
            Err(err) => {
                warn!(row = row.number, error = %err, "skipping unparseable row");
                continue;
            }
        };

        let started = Instant::now();
        match post_with_retries(&client, &args.url, &fields, args.max_retries, retry_delay).await {
            Some(document) => {
                let path = output_path(&args.output_dir, row.number);
                std::fs::write(&path, &document)?;
                rendered += 1;
                info!(
                    row = row.number,
                    total,
                    path = %path.display(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "certificate rendered"
                );
            }
            None => {
                warn!(row = row.number, attempts = args.max_retries, "skipped row after retries");
            }
        }

        tokio::time::sleep(pacing).await;
    }

    info!(rendered, total, "csv batch complete");
    Ok(())
}

/// Post one certificate, retrying on any non-200 response or transport
/// failure. Returns the document bytes, or `None` once attempts run out.
async fn post_with_retries(
    client: &reqwest::Client,
    url: &str,
    fields: &CertificateFields,
    max_retries: u32,
    delay: Duration,
) -> Option<Vec<u8>> {
    for attempt in 1..=max_retries {
        match client.post(url).json(fields).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => {
                match response.bytes().await {
                    Ok(bytes) => return Some(bytes.to_vec()),
                    Err(err) => warn!(attempt, error = %err, "failed to read response body"),
                }
            }
            Ok(response) => {
                warn!(attempt, status = %response.status(), "render request rejected");
            }
            Err(err) => {
                warn!(attempt, error = %err, "render request failed");
            }
        }
        tokio::time::sleep(delay).await;
    }
    None
}

fn output_path(dir: &Path, index: usize) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    dir.join(format!("gsp_certificate_{index}_{timestamp}.pdf"))
}
