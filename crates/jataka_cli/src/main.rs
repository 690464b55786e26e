use std::process::ExitCode;

use clap::{Parser, Subcommand};

use jataka_ephem::{AnalyticEphemeris, NodeMode};
use jataka_kp::{
    Ayanamsha, BirthInput, HouseSystem, SiderealDeg, compute_chart, deg_to_dms, lordship,
    nakshatra_from_longitude, rashi_from_longitude,
};
use jataka_time::CivilDateTime;

#[derive(Parser)]
#[command(name = "jataka", about = "KP sidereal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full KP chart and print it as JSON
    Chart {
        /// Birth date-time, local civil time (YYYY-MM-DDThh:mm or
        /// YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours, east positive (e.g. 9 or 5.5)
        #[arg(long)]
        offset: f64,
        /// Geographic latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Geographic longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Ayanamsha: LAHIRI (default) or KP_NEW
        #[arg(long, default_value = "LAHIRI")]
        ayanamsha: String,
        /// House system: P/PLACIDUS (default) or EQUAL
        #[arg(long, default_value = "P")]
        houses: String,
        /// Use the true (perturbed) lunar node instead of the mean node
        #[arg(long)]
        true_node: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Lordship breakdown for a sidereal longitude
    Lords {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

/// Parse "YYYY-MM-DDThh:mm[:ss]" into a validated CivilDateTime.
fn parse_date(s: &str) -> Result<CivilDateTime, String> {
    let (date, time) = s
        .split_once('T')
        .ok_or_else(|| format!("expected YYYY-MM-DDThh:mm[:ss], got {s}"))?;

    let mut date_parts = date.split('-');
    let year: i32 = next_number(&mut date_parts, "year")?;
    let month: u32 = next_number(&mut date_parts, "month")?;
    let day: u32 = next_number(&mut date_parts, "day")?;

    let mut time_parts = time.split(':');
    let hour: u32 = next_number(&mut time_parts, "hour")?;
    let minute: u32 = next_number(&mut time_parts, "minute")?;
    let second: f64 = match time_parts.next() {
        Some(s) => s.parse().map_err(|_| format!("bad second: {s}"))?,
        None => 0.0,
    };

    CivilDateTime::new(year, month, day, hour, minute, second).map_err(|e| e.to_string())
}

fn next_number<'a, T: std::str::FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, String> {
    parts
        .next()
        .ok_or_else(|| format!("missing {what}"))?
        .parse()
        .map_err(|_| format!("bad {what}"))
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Chart {
            date,
            offset,
            lat,
            lon,
            ayanamsha,
            houses,
            true_node,
            pretty,
        } => {
            let input = BirthInput {
                date: parse_date(&date)?,
                utc_offset_hours: offset,
                latitude_deg: lat,
                longitude_deg: lon,
                ayanamsha: ayanamsha.parse::<Ayanamsha>().map_err(|e| e.to_string())?,
                house_system: houses.parse::<HouseSystem>().map_err(|e| e.to_string())?,
            };
            let node_mode = if true_node {
                NodeMode::True
            } else {
                NodeMode::Mean
            };
            let provider = AnalyticEphemeris::new(node_mode);

            let chart = compute_chart(&provider, &input).map_err(|e| e.to_string())?;
            let json = if pretty {
                serde_json::to_string_pretty(&chart)
            } else {
                serde_json::to_string(&chart)
            }
            .map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Commands::Lords { lon } => {
            let sidereal = SiderealDeg::new(lon);
            let rashi = rashi_from_longitude(sidereal);
            let nak = nakshatra_from_longitude(sidereal);
            let chain = lordship(sidereal);
            println!("longitude : {}", deg_to_dms(sidereal.degrees()));
            println!("sign      : {}", rashi.rashi.western_name());
            println!("nakshatra : {} (pada {})", nak.nakshatra.name(), nak.pada);
            println!("star lord : {}", chain.star_lord.english_name());
            println!("sub lord  : {}", chain.sub_lord.english_name());
            println!("sub-sub   : {}", chain.sub_sub_lord.english_name());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
