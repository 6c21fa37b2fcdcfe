//! Batch command - extract fields column-wise from CSV files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use csv::StringRecord;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use jdx_core::{JobFields, JobPostingParser, JdxConfig};

use super::config::load_config;
use super::{FIELD_COLUMNS, field_cells};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input CSV files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Column holding job description text (repeatable, default from config)
    #[arg(short = 'c', long = "column")]
    columns: Vec<String>,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of parallel workers
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// VND per USD for salary conversion (overrides config)
    #[arg(long)]
    vnd_per_usd: Option<u32>,
}

/// Marker between the input stem and `.csv` in output file names.
const OUTPUT_SUFFIX: &str = ".extracted";

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    output: Option<PathBuf>,
    rows: usize,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_input_csv(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching CSV files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let parser = Arc::new(JobPostingParser::from_config(&config.extraction));
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = process_file(&path, &parser, &config, args.output_dir.as_deref()).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok((output, rows)) => {
                debug!("Wrote {} rows to {}", rows, output.display());
                results.push(FileResult {
                    path,
                    output: Some(output),
                    rows,
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if config.batch.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        output: None,
                        rows: 0,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
    }

    print_summary(&results, start);

    Ok(())
}

fn apply_overrides(config: &mut JdxConfig, args: &BatchArgs) {
    if !args.columns.is_empty() {
        config.batch.text_columns = args.columns.clone();
    }
    if let Some(jobs) = args.jobs {
        config.batch.jobs = jobs;
    }
    if args.continue_on_error {
        config.batch.continue_on_error = true;
    }
    if let Some(rate) = args.vnd_per_usd {
        config.extraction.vnd_per_usd = rate;
    }
}

/// Extract fields for every row of one CSV file and write the augmented copy.
async fn process_file(
    path: &Path,
    parser: &Arc<JobPostingParser>,
    config: &JdxConfig,
    output_dir: Option<&Path>,
) -> anyhow::Result<(PathBuf, usize)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let columns = &config.batch.text_columns;
    let column_indices = columns
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == name.as_str())
                .ok_or_else(|| anyhow::anyhow!("Column '{}' not found in {}", name, path.display()))
        })
        .collect::<anyhow::Result<Vec<usize>>>()?;

    let records = reader.records().collect::<Result<Vec<StringRecord>, _>>()?;
    info!("Processing {} rows from {}", records.len(), path.display());

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows {msg}")?
            .progress_chars("=>-"),
    );
    pb.set_message(
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string(),
    );

    let extracted = extract_rows(
        Arc::clone(parser),
        records.clone(),
        Arc::new(column_indices),
        config.batch.jobs,
        &pb,
    )
    .await?;
    pb.finish_and_clear();

    let output_path = output_path_for(path, output_dir);
    let mut wtr = csv::Writer::from_path(&output_path)?;

    let mut out_headers = headers.clone();
    for column in columns {
        for field in FIELD_COLUMNS {
            if columns.len() > 1 {
                out_headers.push_field(&format!("{}_{}", column, field));
            } else {
                out_headers.push_field(field);
            }
        }
    }
    wtr.write_record(&out_headers)?;

    for (record, row_fields) in records.iter().zip(&extracted) {
        let mut out = record.clone();
        for fields in row_fields {
            for cell in field_cells(fields) {
                out.push_field(&cell);
            }
        }
        wtr.write_record(&out)?;
    }
    wtr.flush()?;

    Ok((output_path, records.len()))
}

/// Run the parser over all rows in parallel chunks, keeping row order.
///
/// Each row yields one `JobFields` per text column; empty cells count as absent.
async fn extract_rows(
    parser: Arc<JobPostingParser>,
    records: Vec<StringRecord>,
    column_indices: Arc<Vec<usize>>,
    jobs: usize,
    pb: &ProgressBar,
) -> anyhow::Result<Vec<Vec<JobFields>>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = records.len().div_ceil(jobs.max(1));
    let mut tasks = JoinSet::new();

    for (chunk_index, chunk) in records.chunks(chunk_size).enumerate() {
        let chunk = chunk.to_vec();
        let parser = Arc::clone(&parser);
        let column_indices = Arc::clone(&column_indices);
        let pb = pb.clone();

        tasks.spawn_blocking(move || {
            let rows: Vec<Vec<JobFields>> = chunk
                .iter()
                .map(|record| {
                    let row = column_indices
                        .iter()
                        .map(|&idx| {
                            let cell = record.get(idx).filter(|s| !s.trim().is_empty());
                            parser.parse_opt(cell)
                        })
                        .collect();
                    pb.inc(1);
                    row
                })
                .collect();
            (chunk_index, rows)
        });
    }

    let mut chunks = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        chunks.push(joined?);
    }
    chunks.sort_by_key(|(chunk_index, _)| *chunk_index);

    Ok(chunks.into_iter().flat_map(|(_, rows)| rows).collect())
}

/// CSV files to process. Outputs of earlier runs are skipped.
fn is_input_csv(path: &Path) -> bool {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let is_output = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));

    is_csv && !is_output
}

fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("postings");
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    dir.join(format!("{}{}.csv", stem, OUTPUT_SUFFIX))
}

fn print_summary(results: &[FileResult], start: Instant) {
    let successful: Vec<_> = results.iter().filter(|r| r.error.is_none()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let total_rows: usize = successful.iter().map(|r| r.rows).sum();

    println!();
    for result in &successful {
        if let Some(output) = &result.output {
            println!(
                "{} {} -> {} ({} rows, {}ms)",
                style("✓").green(),
                result.path.display(),
                output.display(),
                result.rows,
                result.processing_time_ms
            );
        }
    }

    println!(
        "{} Processed {} files ({} rows) in {:?}",
        style("✓").green(),
        results.len(),
        total_rows,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("data/jobs.csv"), None),
            PathBuf::from("data/jobs.extracted.csv")
        );
        assert_eq!(
            output_path_for(Path::new("data/jobs.csv"), Some(Path::new("out"))),
            PathBuf::from("out/jobs.extracted.csv")
        );
    }

    #[test]
    fn test_is_input_csv_skips_outputs() {
        assert!(is_input_csv(Path::new("data/jobs.csv")));
        assert!(is_input_csv(Path::new("data/JOBS.CSV")));
        assert!(!is_input_csv(Path::new("data/jobs.extracted.csv")));
        assert!(!is_input_csv(Path::new("data/jobs.json")));
    }

    #[tokio::test]
    async fn test_extract_rows_keeps_order() {
        let parser = Arc::new(JobPostingParser::new());
        let records: Vec<StringRecord> = ["Fresher", "Junior", "", "Senior", "Director"]
            .iter()
            .map(|text| StringRecord::from(vec![*text]))
            .collect();

        let rows = extract_rows(parser, records, Arc::new(vec![0]), 3, &ProgressBar::hidden())
            .await
            .unwrap();

        let levels: Vec<String> = rows.iter().map(|r| r[0].level.to_string()).collect();
        assert_eq!(levels, vec!["fresher", "junior", "unknown", "senior", "director"]);
    }
}
