//! Extract command - pull fields from a single job description.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use jdx_core::extract::{ExperienceExtractor, SalaryExtractor, SeniorityExtractor};
use jdx_core::{JobFields, JobPostingParser};

use super::config::load_config;
use super::{FIELD_COLUMNS, field_cells};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Job description text (reads --file or stdin when omitted)
    text: Option<String>,

    /// Read the job description from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// VND per USD for salary conversion (overrides config)
    #[arg(long)]
    vnd_per_usd: Option<u32>,

    /// Show which rules decided each field
    #[arg(long)]
    explain: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(rate) = args.vnd_per_usd {
        config.extraction.vnd_per_usd = rate;
    }
    config.validate()?;

    let text = read_input(&args)?;
    info!("Extracting fields from {} characters", text.len());

    let parser = JobPostingParser::from_config(&config.extraction);
    let fields = parser.parse(&text);

    let output = format_fields(&fields, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.explain {
        explain(&parser, &text);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Print the rule behind each rule-driven field to stderr.
///
/// Works on the same prepared text the parser extracted from.
fn explain(parser: &JobPostingParser, text: &str) {
    let text = parser.prepare(text);
    let vnd_per_usd = parser.vnd_per_usd();

    eprintln!();
    match ExperienceExtractor::new().extract_match(&text) {
        Some(m) => eprintln!(
            "{} Experience: rule '{}' -> {} years",
            style("ℹ").blue(),
            m.rule,
            m.value
        ),
        None => eprintln!("{} Experience: no rule matched", style("ℹ").blue()),
    }

    match SeniorityExtractor::new().extract_match(&text) {
        Some(m) => eprintln!(
            "{} Level: rule '{}' -> {}",
            style("ℹ").blue(),
            m.rule,
            m.value
        ),
        None => eprintln!("{} Level: no keyword or experience found", style("ℹ").blue()),
    }

    let salary = SalaryExtractor::new().with_vnd_per_usd(vnd_per_usd);
    let candidates = salary.candidates(&text);
    eprintln!(
        "{} Salary: {} candidates at {} VND/USD",
        style("ℹ").blue(),
        candidates.len(),
        vnd_per_usd
    );
    for candidate in candidates {
        eprintln!("    {:?}: {} USD", candidate.family, candidate.usd);
    }
}

fn format_fields(fields: &JobFields, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(fields)?),
        OutputFormat::Csv => format_csv(fields),
        OutputFormat::Text => Ok(format_text(fields)),
    }
}

fn format_csv(fields: &JobFields) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(FIELD_COLUMNS)?;
    wtr.write_record(field_cells(fields))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(fields: &JobFields) -> String {
    let mut output = String::new();

    match fields.years_experience {
        Some(years) => output.push_str(&format!("Experience: {} years\n", years)),
        None => output.push_str("Experience: -\n"),
    }
    match fields.salary_usd {
        Some(usd) => output.push_str(&format!("Salary: {} USD/month\n", usd)),
        None => output.push_str("Salary: -\n"),
    }
    if fields.skills.is_empty() {
        output.push_str("Skills: -\n");
    } else {
        output.push_str(&format!("Skills: {}\n", fields.skills.join(", ")));
    }
    output.push_str(&format!("Level: {}\n", fields.level));
    output.push_str(&format!("Languages: {}\n", fields.languages));

    output
}
