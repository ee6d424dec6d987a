//! Command-line front end for scalefind.
//!
//! ```text
//! scalefind search 3/2 5/4 --sort related --page 2
//! scalefind show "Just Major"
//! scalefind related "Pythagorean Major"
//! scalefind play "Just Major Triad" --mode chord --base-freq 432 --out triad.wav
//! scalefind list
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hound::{SampleFormat, WavSpec, WavWriter};
use scalefind::audio::{render_samples, PlaybackData, PlaybackMode};
use scalefind::render::view_to_text;
use scalefind::{
    preview, render_results_html, render_results_text, Catalog, ScaleView, SearchSession,
    Settings, SortMethod,
};

#[derive(Parser, Debug)]
#[command(
    name = "scalefind",
    author,
    version,
    about = "Find just-intonation scales by the ratios they contain"
)]
pub struct Cli {
    /// Catalog JSON file. Defaults to the bundled catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Settings YAML file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find scales containing every given ratio.
    Search(SearchArgs),
    /// Show one scale in full.
    Show {
        name: String,
    },
    /// Search for the notes of a related scale.
    Related(RelatedArgs),
    /// Print or render the audio preview of a scale.
    Play(PlayArgs),
    /// List every scale in the catalog.
    List,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Ratio tokens, e.g. `3/2 5/4` or `"3/2, 5/4"`.
    pub tokens: Vec<String>,
    /// Sort key: name, length, dimension or related.
    #[arg(long)]
    pub sort: Option<String>,
    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct RelatedArgs {
    pub name: String,
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    pub name: String,
    /// `arpeggio` or `chord`.
    #[arg(long, default_value = "arpeggio")]
    pub mode: String,
    /// Reference pitch for 1/1. Unusable values fall back to the configured default.
    #[arg(long)]
    pub base_freq: Option<String>,
    /// Write the preview to a WAV file.
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, default_value_t = 44_100)]
    pub sample_rate: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let catalog = Arc::new(load_catalog(cli.catalog.as_deref()));

    match cli.command {
        Command::Search(args) => {
            let mut session = SearchSession::with_settings(catalog, &settings);
            if let Some(sort) = &args.sort {
                session.set_sort(SortMethod::from_name(sort));
            }
            session.set_query(&args.tokens.join(" "));
            session.go_to_page(args.page);
            write_results(out, &session, args.format)
        }
        Command::Show { name } => {
            let view = ScaleView::new(&catalog, &name)
                .with_context(|| format!("{} is not in the catalog", name))?;
            write!(out, "{}", view_to_text(&view))?;
            Ok(())
        }
        Command::Related(args) => {
            let mut session = SearchSession::with_settings(catalog, &settings);
            if let Some(sort) = &args.sort {
                session.set_sort(SortMethod::from_name(sort));
            }
            if !session.follow_related(&args.name) {
                bail!("{} is not in the catalog", args.name);
            }
            writeln!(out, "query: {}", session.query())?;
            write_results(out, &session, args.format)
        }
        Command::Play(args) => {
            let mode = PlaybackMode::from_name(&args.mode);
            let data = preview(&catalog, &args.name, mode, args.base_freq.as_deref(), &settings)?;
            write_schedule(out, &data)?;
            if let Some(path) = &args.out {
                write_wav(path, &data, args.sample_rate)?;
                writeln!(out, "wrote {}", path.display())?;
            }
            Ok(())
        }
        Command::List => {
            writeln!(out, "{} scales", catalog.len())?;
            for (name, entry) in catalog.iter() {
                if entry.dimension.is_empty() {
                    writeln!(out, "  {}", name)?;
                } else {
                    writeln!(out, "  {} ({})", name, entry.dimension)?;
                }
            }
            Ok(())
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    Settings::from_yaml(&content)
        .with_context(|| format!("{} is not a valid settings file", path.display()))
}

/// Catalog from `path`, or the bundled one. A catalog that cannot be read or
/// parsed is logged and replaced by an empty one.
fn load_catalog(path: Option<&Path>) -> Catalog {
    match path {
        Some(path) => Catalog::from_path(path).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            Catalog::empty()
        }),
        None => Catalog::from_json_or_empty(scalefind_catalog::default_catalog_json()),
    }
}

fn write_results(out: &mut dyn Write, session: &SearchSession, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_results_text(session))?,
        OutputFormat::Html => write!(out, "{}", render_results_html(session))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&session.view())?)?,
    }
    Ok(())
}

fn write_schedule(out: &mut dyn Write, data: &PlaybackData) -> Result<()> {
    writeln!(
        out,
        "{} ({:?}, base {} Hz, {:.2}s)",
        data.scale,
        data.mode,
        data.base_frequency,
        data.total_duration()
    )?;
    for tone in &data.tones {
        writeln!(
            out,
            "  {:>8}  {:>9.3} Hz  at {:.2}s for {:.2}s",
            tone.ratio, tone.frequency, tone.start_time, tone.duration
        )?;
    }
    if data.tones.is_empty() {
        writeln!(out, "  (no playable ratios)")?;
    }
    Ok(())
}

fn write_wav(path: &Path, data: &PlaybackData, sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        bail!("sample rate must be positive");
    }
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for sample in render_samples(data, sample_rate) {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", path.display()))?;
    tracing::info!("wrote preview of {} to {}", data.scale, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_args() {
        let cli = Cli::try_parse_from(["scalefind", "search", "3/2", "5/4", "--sort", "related", "--page", "2"]).unwrap();
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.tokens, vec!["3/2", "5/4"]);
                assert_eq!(args.sort.as_deref(), Some("related"));
                assert_eq!(args.page, 2);
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_catalog_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["scalefind", "list", "--catalog", "my.json"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("my.json")));
    }

    #[test]
    fn test_missing_catalog_file_degrades_to_empty() {
        let catalog = load_catalog(Some(Path::new("/no/such/catalog.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_bundled_catalog_loads() {
        assert!(!load_catalog(None).is_empty());
    }
}
