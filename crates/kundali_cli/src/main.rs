use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use kundali_chart::{BirthInput, ChartOptions, compute_chart};
use kundali_config::KundaliConfig;
use kundali_ephemeris::Resolver;
use kundali_time::{CivilDateTime, JulianDay, jd_to_calendar};
use kundali_vedic_base::dasha::{DashaIter, DashaOptions, dasha_snapshot};
use kundali_vedic_base::{Amsha, Rashi, VargaScheme, to_sidereal, varga_from_sign_position};
use tracing::debug;

mod render;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal birth chart calculator", version)]
struct Cli {
    /// Extra TOML config layered above ./kundali.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ignore any configured ephemeris service
    #[arg(long, global = true)]
    offline: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(clap::Args)]
struct Birth {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth clock time, already normalized (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: positions, houses, vargas, dasha, ashtakavarga
    Chart {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        place: Option<String>,
        /// Date marking the active dasha chain (default: now)
        #[arg(long)]
        at: Option<String>,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// Vimshottari periods from birth
    Dasha {
        #[command(flatten)]
        birth: Birth,
        /// Print only the chain active at this date (YYYY-MM-DD)
        #[arg(long)]
        at: Option<String>,
        /// Deepest level, 0 (Mahadasha) to 4 (Pranadasha)
        #[arg(long)]
        max_level: Option<u8>,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Divisional sign for a sign and degree
    Varga {
        /// Sign number 1-12
        #[arg(long)]
        sign: u8,
        /// Degree within the sign, [0, 30)
        #[arg(long)]
        degree: f64,
        /// Division factor
        #[arg(long)]
        n: u16,
        #[arg(long, value_enum, default_value = "harmonic")]
        scheme: SchemeArg,
    },
    /// Julian Day for a date and clock time
    Jd {
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "00:00")]
        time: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Harmonic,
    Parashari,
}

impl From<SchemeArg> for VargaScheme {
    fn from(s: SchemeArg) -> Self {
        match s {
            SchemeArg::Harmonic => Self::Harmonic,
            SchemeArg::Parashari => Self::Parashari,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("kundali error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Chart {
            birth,
            name,
            place,
            at,
            format,
        } => {
            let config = KundaliConfig::load_with_file(cli.config.as_deref())?;
            let mut input = birth_input(&birth)?;
            input.name = name;
            input.place = place;
            let mut options = ChartOptions::from_config(&config)?;
            if let Some(at) = at.as_deref() {
                options = options.with_reference(parse_day(at)?);
            }
            let resolver = resolver(&config, cli.offline)?;
            let chart = compute_chart(&input, &options, &resolver)?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                Format::Text => print!("{}", render::chart_text(&chart)),
            }
        }

        Commands::Dasha {
            birth,
            at,
            max_level,
            format,
        } => {
            let config = KundaliConfig::load_with_file(cli.config.as_deref())?;
            let input = birth_input(&birth)?;
            let jd = input.julian_day();
            let resolver = resolver(&config, cli.offline)?;
            let moon_trop = resolver
                .resolve_positions(jd)
                .value
                .get(kundali_vedic_base::Graha::Chandra)
                .longitude;
            let moon = to_sidereal(moon_trop, config.ayanamsa.ayanamsa().degrees_at(jd));
            let options = DashaOptions {
                max_level: max_level.unwrap_or(config.dasha.max_level),
                cycles: config.dasha.cycles,
            };
            debug!(moon, ?options, "dasha request");

            if let Some(at) = at.as_deref() {
                let snapshot = dasha_snapshot(jd.value(), moon, parse_day(at)?.value(), &options)?;
                match format {
                    Format::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                    Format::Text => {
                        for p in &snapshot.periods {
                            println!("{}", render::period_line(p));
                        }
                    }
                }
            } else {
                let periods = DashaIter::new(jd.value(), moon, &options)?;
                match format {
                    Format::Json => {
                        let all: Vec<_> = periods.collect();
                        println!("{}", serde_json::to_string_pretty(&all)?);
                    }
                    Format::Text => {
                        for p in periods {
                            let indent = "  ".repeat(usize::from(p.level.depth()));
                            println!("{indent}{}", render::period_line(&p));
                        }
                    }
                }
            }
        }

        Commands::Varga {
            sign,
            degree,
            n,
            scheme,
        } => {
            let amsha = Amsha::from_divisions(n)?;
            let p = varga_from_sign_position(sign, degree, amsha, scheme.into())?;
            let natal = Rashi::from_number(sign)?;
            println!(
                "{} ({}) {degree:.4}° in {amsha} {}: {} (sign {}), part {} of {n}",
                natal.name(),
                natal.western_name(),
                amsha.name(),
                p.rashi().name(),
                p.sign,
                p.part
            );
        }

        Commands::Jd { date, time } => {
            let dt = CivilDateTime::parse(&date, &time)?;
            let jd = dt.julian_day();
            let (y, m, d) = jd_to_calendar(jd.value());
            println!("{dt}  JD {:.6}", jd.value());
            println!("Inverse: {y:04}-{m:02} day {d:.6}");
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn birth_input(b: &Birth) -> anyhow::Result<BirthInput> {
    BirthInput::parse(&b.date, &b.time, b.lat, b.lon).context("invalid birth data")
}

fn parse_day(date: &str) -> anyhow::Result<JulianDay> {
    Ok(CivilDateTime::parse(date, "00:00")
        .with_context(|| format!("invalid --at date {date:?}"))?
        .julian_day())
}

fn resolver(config: &KundaliConfig, offline: bool) -> anyhow::Result<Resolver> {
    if offline {
        return Ok(Resolver::fallback_only());
    }
    Ok(Resolver::new(config.ephemeris.provider()?))
}
