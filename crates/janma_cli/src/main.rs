use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use janma_config::RectifyConfig;
use janma_ephem::{AnalyticEphemeris, AyanamshaSystem};
use janma_search::{
    Candidate, GeoTime, RectificationReport, SearchOptions, SearchRequest, SearchWindow,
    gulika_for_date, rectify, sunrise_sunset,
};
use janma_time::{local_to_jd, parse_clock_time, parse_date};
use janma_vedic_base::{
    Build, ChildrenEvents, Complexion, Height, LifeEvents, PhysicalTraits,
    divisional_longitude, format_longitude, madhya_pranapada, nakshatra_from_longitude,
    running_period_at_date, sphuta_pranapada, vimshottari_birth,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "janma", about = "BPHS birth-time rectification", version)]
struct Cli {
    /// TOML configuration file (falls back to $JANMA_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Birth date and place.
#[derive(Args)]
struct Place {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (e.g. 5.5)
    #[arg(long, allow_negative_numbers = true)]
    tz: f64,
}

impl Place {
    fn geo(&self) -> Result<GeoTime> {
        let date = parse_date(&self.date)?;
        GeoTime::new(date, self.lat, self.lon, self.tz).context("invalid birth place")
    }
}

#[derive(Args)]
struct RectifyArgs {
    #[command(flatten)]
    place: Place,
    /// Window start (HH:MM); needs --end
    #[arg(long, requires = "end", conflicts_with = "approx")]
    start: Option<String>,
    /// Window end (HH:MM); at or before --start crosses midnight
    #[arg(long, requires = "start")]
    end: Option<String>,
    /// Approximate birth time (HH:MM); searches around it
    #[arg(long)]
    approx: Option<String>,
    /// Half-width of the --approx window in hours
    #[arg(long, requires = "approx")]
    approx_hours: Option<f64>,
    /// Candidate spacing in minutes
    #[arg(long)]
    step: Option<u32>,
    /// Verification orb in degrees
    #[arg(long)]
    orb: Option<f64>,
    /// lahiri, raman, krishnamurti or fagan_bradley
    #[arg(long)]
    ayanamsha: Option<AyanamshaSystem>,
    /// Keep only the best N candidates
    #[arg(long)]
    max: Option<usize>,
    /// tall, medium or short
    #[arg(long)]
    height: Option<Height>,
    /// athletic, slim or heavy
    #[arg(long)]
    build: Option<Build>,
    /// fair, wheatish or dark
    #[arg(long)]
    complexion: Option<Complexion>,
    /// Marriage date (YYYY-MM-DD)
    #[arg(long)]
    marriage: Option<String>,
    /// Birth date of a child (repeatable)
    #[arg(long = "child")]
    children: Vec<String>,
    /// Career milestone date (repeatable)
    #[arg(long)]
    career: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the birth date for candidate times
    Rectify(RectifyArgs),
    /// Day and night Gulika for a date
    Gulika {
        #[command(flatten)]
        place: Place,
        /// lahiri, raman, krishnamurti or fagan_bradley
        #[arg(long)]
        ayanamsha: Option<AyanamshaSystem>,
    },
    /// Local sunrise and sunset for a date
    Sunrise {
        #[command(flatten)]
        place: Place,
    },
    /// Madhya and sphuta Pranapada from ishta-kala
    Pranapada {
        /// Whole ghatis since sunrise
        #[arg(long)]
        ghatis: u32,
        /// Palas past the last whole ghati (0-59)
        #[arg(long, default_value = "0")]
        palas: u32,
        /// Sidereal Sun longitude in degrees
        #[arg(long)]
        sun: f64,
    },
    /// Vimshottari balance at birth and the running period on a date
    Dasha {
        /// Sidereal Moon longitude at birth in degrees
        #[arg(long)]
        moon: f64,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// UTC offset of the birth time in hours
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz: f64,
        /// Date to evaluate (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Longitude in a divisional chart
    Varga {
        /// Sidereal longitude in degrees
        lon: f64,
        /// Division (9 = navamsha, 10 = dashamsha, ...)
        #[arg(long, short = 'd', default_value = "9")]
        division: u16,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Rectify(args) => cmd_rectify(&cli, args),
        Commands::Gulika { place, ayanamsha } => cmd_gulika(&cli, place, *ayanamsha),
        Commands::Sunrise { place } => cmd_sunrise(&cli, place),
        Commands::Pranapada { ghatis, palas, sun } => cmd_pranapada(&cli, *ghatis, *palas, *sun),
        Commands::Dasha {
            moon,
            birth,
            time,
            tz,
            on,
        } => cmd_dasha(&cli, *moon, birth, time, *tz, on.as_deref()),
        Commands::Varga { lon, division } => cmd_varga(&cli, *lon, *division),
    }
}

fn load_config(cli: &Cli) -> Result<RectifyConfig> {
    RectifyConfig::load(cli.config.as_deref()).context("failed to load configuration")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn parse_dates(values: &[String]) -> Result<Vec<NaiveDate>> {
    values
        .iter()
        .map(|s| parse_date(s).with_context(|| format!("invalid event date '{s}'")))
        .collect()
}

fn cmd_rectify(cli: &Cli, args: &RectifyArgs) -> Result<()> {
    let RectifyArgs {
        place,
        start,
        end,
        approx,
        approx_hours,
        step,
        orb,
        ayanamsha,
        max,
        height,
        build,
        complexion,
        marriage,
        children,
        career,
    } = args;

    let mut config = load_config(cli)?;
    if let Some(a) = ayanamsha {
        config.ayanamsha = *a;
    }
    let mut options = SearchOptions::from_config(&config);
    if let Some(s) = step {
        options.step_minutes = *s;
    }
    if let Some(o) = orb {
        options.orb_deg = *o;
    }
    if max.is_some() {
        options.max_candidates = *max;
    }

    let window = match (start, end, approx) {
        (Some(s), Some(e), _) => SearchWindow::parse(s, e)?,
        (_, _, Some(center)) => {
            SearchWindow::around(center, approx_hours.unwrap_or(config.approx_window_hours))?
        }
        _ => SearchWindow::WholeDay,
    };

    let traits = PhysicalTraits {
        height: *height,
        build: *build,
        complexion: *complexion,
    };
    let child_dates = parse_dates(children)?;
    let events = LifeEvents {
        marriage: marriage
            .as_deref()
            .map(parse_date)
            .transpose()
            .context("invalid marriage date")?,
        children: (!child_dates.is_empty()).then(|| ChildrenEvents {
            count: child_dates.len(),
            dates: child_dates,
        }),
        career: parse_dates(career)?,
    };

    let mut request = SearchRequest::new(place.geo()?, window);
    if !traits.is_empty() {
        request = request.with_traits(traits);
    }
    if !events.is_empty() {
        request = request.with_events(events);
    }

    let eph = AnalyticEphemeris::new(config.ayanamsha);
    let report = rectify(&eph, &request, &options).context("rectification failed")?;
    tracing::debug!(candidates = report.candidates.len(), "rectify finished");

    if cli.json {
        print_json(&report)
    } else {
        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &RectificationReport) {
    println!(
        "{} {} window {}-{} step {} min",
        report.engine_version,
        report.date,
        report.window_start,
        report.window_end,
        report.step_minutes
    );
    if report.candidates.is_empty() {
        println!("No candidate passes the trine rule in this window.");
        return;
    }
    println!("{} candidates", report.candidates.len());
    for (rank, c) in report.candidates.iter().enumerate() {
        print_candidate(rank + 1, c);
    }
}

fn print_candidate(rank: usize, c: &Candidate) {
    println!(
        "{rank:>3}. {}  score {:6.2}  lagna {}  pranapada {}  gulika {} ({})",
        c.time.format("%H:%M"),
        c.composite_score,
        format_longitude(c.lagna),
        format_longitude(c.pranapada),
        format_longitude(c.gulika),
        if c.is_daytime { "day" } else { "night" },
    );
    println!(
        "      degree {:5.1}  gulika {:5.1}  moon {:5.1}  nisheka {:.1} months ({:.0})",
        c.verification.degree_match,
        c.verification.gulika_alignment,
        c.verification.moon_alignment,
        c.nisheka.gestation_months,
        c.nisheka.plausibility_score,
    );
    if let Some(t) = &c.traits {
        println!("      traits {:.1}", t.overall);
    }
    if let Some(e) = &c.events {
        println!("      events {:.1}", e.overall);
    }
}

#[derive(Serialize)]
struct GulikaOutput {
    date: NaiveDate,
    ayanamsha: AyanamshaSystem,
    day_degree: f64,
    night_degree: f64,
    day_khanda: u8,
    night_khanda: u8,
    day_mid_time: NaiveDateTime,
    night_mid_time: NaiveDateTime,
}

fn cmd_gulika(cli: &Cli, place: &Place, ayanamsha: Option<AyanamshaSystem>) -> Result<()> {
    let config = load_config(cli)?;
    let system = ayanamsha.unwrap_or(config.ayanamsha);
    let geo = place.geo()?;
    let g = gulika_for_date(&AnalyticEphemeris::new(system), &geo)
        .context("failed to compute Gulika")?;

    if cli.json {
        return print_json(&GulikaOutput {
            date: geo.date,
            ayanamsha: system,
            day_degree: g.day_degree,
            night_degree: g.night_degree,
            day_khanda: g.day_khanda,
            night_khanda: g.night_khanda,
            day_mid_time: g.day_mid_time,
            night_mid_time: g.night_mid_time,
        });
    }
    println!(
        "Day Gulika:   {} ({:.4} deg), khanda {} mid {}",
        format_longitude(g.day_degree),
        g.day_degree,
        g.day_khanda + 1,
        g.day_mid_time.format("%Y-%m-%d %H:%M:%S"),
    );
    println!(
        "Night Gulika: {} ({:.4} deg), khanda {} mid {}",
        format_longitude(g.night_degree),
        g.night_degree,
        g.night_khanda + 1,
        g.night_mid_time.format("%Y-%m-%d %H:%M:%S"),
    );
    Ok(())
}

#[derive(Serialize)]
struct SunriseOutput {
    date: NaiveDate,
    sunrise: NaiveDateTime,
    sunset: NaiveDateTime,
    day_length_hours: f64,
}

fn cmd_sunrise(cli: &Cli, place: &Place) -> Result<()> {
    let geo = place.geo()?;
    let (sunrise, sunset) = sunrise_sunset(&AnalyticEphemeris::default(), &geo)
        .context("failed to compute sunrise")?;
    let out = SunriseOutput {
        date: geo.date,
        sunrise,
        sunset,
        day_length_hours: (sunset - sunrise).num_seconds() as f64 / 3600.0,
    };
    if cli.json {
        return print_json(&out);
    }
    println!("Sunrise: {}", sunrise.format("%H:%M:%S"));
    println!("Sunset:  {}", sunset.format("%H:%M:%S"));
    println!("Day:     {:.2} h", out.day_length_hours);
    Ok(())
}

#[derive(Serialize)]
struct PranapadaOutput {
    ghatis: u32,
    palas: u32,
    madhya: f64,
    sphuta: f64,
}

fn cmd_pranapada(cli: &Cli, ghatis: u32, palas: u32, sun: f64) -> Result<()> {
    if palas >= 60 {
        bail!("palas must be below 60, got {palas}");
    }
    if !sun.is_finite() {
        bail!("sun longitude must be finite");
    }
    let total_palas = f64::from(ghatis) * 60.0 + f64::from(palas);
    let out = PranapadaOutput {
        ghatis,
        palas,
        madhya: madhya_pranapada(ghatis, palas),
        sphuta: sphuta_pranapada(total_palas, sun),
    };
    if cli.json {
        return print_json(&out);
    }
    println!("Madhya Pranapada: {} ({:.4} deg)", format_longitude(out.madhya), out.madhya);
    println!("Sphuta Pranapada: {} ({:.4} deg)", format_longitude(out.sphuta), out.sphuta);
    Ok(())
}

#[derive(Serialize)]
struct DashaOutput {
    nakshatra: &'static str,
    nakshatra_index: u8,
    birth_lord: &'static str,
    balance_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    running: Option<RunningOutput>,
}

#[derive(Serialize)]
struct RunningOutput {
    on: NaiveDate,
    major_lord: &'static str,
    sub_lord: &'static str,
    years_into_major: f64,
    years_into_sub: f64,
}

fn cmd_dasha(
    cli: &Cli,
    moon: f64,
    birth: &str,
    time: &str,
    tz: f64,
    on: Option<&str>,
) -> Result<()> {
    if !moon.is_finite() {
        bail!("moon longitude must be finite");
    }
    janma_time::validate_utc_offset(tz)?;
    let birth_local = parse_date(birth)?.and_time(parse_clock_time(time)?);
    let birth_jd = local_to_jd(birth_local, tz);

    let natal = vimshottari_birth(moon);
    let running = on
        .map(|s| -> Result<RunningOutput> {
            let date = parse_date(s)?;
            let rp = running_period_at_date(birth_jd, date, moon);
            Ok(RunningOutput {
                on: date,
                major_lord: rp.major_lord.english_name(),
                sub_lord: rp.sub_lord.english_name(),
                years_into_major: rp.years_into_major,
                years_into_sub: rp.years_into_sub,
            })
        })
        .transpose()?;
    let out = DashaOutput {
        nakshatra: nakshatra_from_longitude(moon).name(),
        nakshatra_index: natal.nakshatra_index,
        birth_lord: natal.lord.english_name(),
        balance_years: natal.remaining_years,
        running,
    };

    if cli.json {
        return print_json(&out);
    }
    println!(
        "Moon in {} (#{}), birth dasha {} with {:.4} years remaining",
        out.nakshatra,
        out.nakshatra_index + 1,
        out.birth_lord,
        out.balance_years
    );
    if let Some(r) = &out.running {
        println!(
            "On {}: {}/{} ({:.4} y into major, {:.4} y into sub)",
            r.on, r.major_lord, r.sub_lord, r.years_into_major, r.years_into_sub
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct VargaOutput {
    division: u16,
    longitude: f64,
    divisional_longitude: f64,
    sign: &'static str,
}

fn cmd_varga(cli: &Cli, lon: f64, division: u16) -> Result<()> {
    let d_lon = divisional_longitude(lon, division)?;
    let out = VargaOutput {
        division,
        longitude: lon,
        divisional_longitude: d_lon,
        sign: janma_vedic_base::Rashi::from_longitude(d_lon).name(),
    };
    if cli.json {
        return print_json(&out);
    }
    println!("D{division}: {} ({:.4} deg)", format_longitude(d_lon), d_lon);
    Ok(())
}
