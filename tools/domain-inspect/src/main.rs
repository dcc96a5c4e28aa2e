//! Prints the derived bounds of an engine configuration and converts single
//! values with it.
//!
//! ```text
//! domain-inspect --year i16 --rata-die i32 --epoch unix
//! domain-inspect --year u32 --rata-die u32 --to-date 719468
//! domain-inspect --year i64 --to-rata-die=-1912-6-23 --json
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use std::{fmt, str::FromStr};

use clap::{Parser, ValueEnum};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use gregorian_eaf::{
    Calendar, CommonEraEpoch, ComputationalEpoch, Date, Gregorian, UnixEpoch, UnsignedGregorian,
};
use log::{debug, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;

macro_rules! format_line(
    ($a:expr, $b:expr, $c:expr) => {
        println!("{:<22} {:<28} {}", $a, $b, $c)
    };
    ($a:expr, $b:expr) => {
        println!("{:<22} {}", $a, $b)
    };
);

/// Year storage of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum YearStorage {
    U8,
    U16,
    U32,
    U64,
    I16,
    I32,
    I64,
}

impl YearStorage {
    fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }
}

/// Rata die storage of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RataDieStorage {
    U32,
    U64,
    I32,
    I64,
}

/// Date mapped to rata die zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EpochKind {
    /// 1970-01-01
    Unix,
    /// 0001-01-01
    CommonEra,
    /// 0000-03-01, the only epoch of the unsigned engine
    Computational,
}

macro_rules! impl_value_display {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.to_possible_value() {
                        Some(value) => f.write_str(value.get_name()),
                        None => write!(f, "{self:?}"),
                    }
                }
            }
        )*
    };
}

impl_value_display!(YearStorage, RataDieStorage, EpochKind);

#[derive(Debug, Parser)]
#[command(about = "Inspect the domain of a Gregorian calendar engine configuration")]
struct Args {
    /// Year storage type.
    #[arg(long, value_enum, default_value_t = YearStorage::I32)]
    year: YearStorage,

    /// Rata die storage type. Defaults to the year storage widened to 32 bits.
    #[arg(long, value_enum)]
    rata_die: Option<RataDieStorage>,

    /// Epoch of the signed engine. Defaults to `unix` for signed storage and
    /// `computational` for unsigned storage.
    #[arg(long, value_enum)]
    epoch: Option<EpochKind>,

    /// Convert a rata die to a date.
    #[arg(long, value_name = "RATA_DIE", allow_hyphen_values = true)]
    to_date: Option<String>,

    /// Convert a `year-month-day` date to a rata die.
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    to_rata_die: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Configuration {
    year: String,
    rata_die: String,
    epoch: String,
}

#[derive(Debug, Serialize)]
struct Report {
    configuration: Configuration,
    epoch: String,
    date_min: String,
    date_max: String,
    rata_die_min: String,
    rata_die_max: String,
    round_date_min: String,
    round_date_max: String,
    round_rata_die_min: String,
    round_rata_die_max: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conversions: Vec<Conversion>,
}

#[derive(Debug, Serialize)]
struct Conversion {
    input: String,
    output: String,
}

/// Parses `year-month-day`, where the year may carry a leading minus sign.
fn parse_date<Y>(source: &str) -> Result<Date<Y>>
where
    Y: gregorian_eaf::primitives::Year + FromStr,
    <Y as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut parts = source.rsplitn(3, '-');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(eyre!("expected a `year-month-day` date, found `{source}`"));
    };
    let year = year.parse::<Y>().wrap_err_with(|| format!("invalid year `{year}`"))?;
    let month = month.parse::<u8>().wrap_err_with(|| format!("invalid month `{month}`"))?;
    let day = day.parse::<u8>().wrap_err_with(|| format!("invalid day `{day}`"))?;
    Ok(Date::try_new(year, month, day)?)
}

fn inspect<C>(configuration: Configuration, args: &Args) -> Result<Report>
where
    C: Calendar,
    C::Year: FromStr,
    C::RataDie: FromStr,
    <C::Year as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    <C::RataDie as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    debug!("inspecting {configuration:?}");

    let mut conversions = Vec::new();
    if let Some(source) = &args.to_date {
        let rata_die = source
            .parse::<C::RataDie>()
            .wrap_err_with(|| format!("invalid rata die `{source}`"))?;
        let date = C::try_to_date(rata_die)
            .wrap_err_with(|| format!("cannot convert rata die {rata_die}"))?;
        conversions.push(Conversion {
            input: rata_die.to_string(),
            output: date.to_string(),
        });
    }
    if let Some(source) = &args.to_rata_die {
        let date = parse_date::<C::Year>(source)?;
        let rata_die =
            C::try_to_rata_die(date).wrap_err_with(|| format!("cannot convert date {date}"))?;
        conversions.push(Conversion {
            input: date.to_string(),
            output: rata_die.to_string(),
        });
    }

    let bounds = C::BOUNDS;
    Ok(Report {
        configuration,
        epoch: bounds.epoch.to_string(),
        date_min: bounds.date_min.to_string(),
        date_max: bounds.date_max.to_string(),
        rata_die_min: bounds.rata_die_min.to_string(),
        rata_die_max: bounds.rata_die_max.to_string(),
        round_date_min: bounds.round_date_min.to_string(),
        round_date_max: bounds.round_date_max.to_string(),
        round_rata_die_min: bounds.round_rata_die_min.to_string(),
        round_rata_die_max: bounds.round_rata_die_max.to_string(),
        conversions,
    })
}

macro_rules! dispatch {
    ($args:expr, $configuration:expr; $(($year:ident, $rata_die:ident, $epoch:ident) => $engine:ty),* $(,)?) => {
        match ($configuration.year, $configuration.rata_die, $configuration.epoch) {
            $(
                (YearStorage::$year, RataDieStorage::$rata_die, EpochKind::$epoch) => {
                    inspect::<$engine>($configuration.into(), $args)
                }
            )*
            (year, rata_die, epoch) => Err(eyre!(
                "unsupported configuration: {year} years, {rata_die} rata dies, {epoch} epoch"
            )),
        }
    };
}

#[derive(Debug, Clone, Copy)]
struct Selected {
    year: YearStorage,
    rata_die: RataDieStorage,
    epoch: EpochKind,
}

impl From<Selected> for Configuration {
    fn from(selected: Selected) -> Self {
        Self {
            year: selected.year.to_string(),
            rata_die: selected.rata_die.to_string(),
            epoch: selected.epoch.to_string(),
        }
    }
}

fn select(args: &Args) -> Selected {
    let unsigned = args.year.is_unsigned();
    let rata_die = args.rata_die.unwrap_or(match args.year {
        YearStorage::U8 | YearStorage::U16 | YearStorage::U32 => RataDieStorage::U32,
        YearStorage::U64 => RataDieStorage::U64,
        YearStorage::I16 | YearStorage::I32 => RataDieStorage::I32,
        YearStorage::I64 => RataDieStorage::I64,
    });
    let epoch = args.epoch.unwrap_or(if unsigned {
        EpochKind::Computational
    } else {
        EpochKind::Unix
    });
    Selected {
        year: args.year,
        rata_die,
        epoch,
    }
}

fn run(args: &Args) -> Result<Report> {
    let selected = select(args);
    dispatch!(args, selected;
        (U8, U32, Computational) => UnsignedGregorian<u8, u32>,
        (U16, U32, Computational) => UnsignedGregorian<u16, u32>,
        (U32, U32, Computational) => UnsignedGregorian<u32, u32>,
        (U16, U64, Computational) => UnsignedGregorian<u16, u64>,
        (U32, U64, Computational) => UnsignedGregorian<u32, u64>,
        (U64, U64, Computational) => UnsignedGregorian<u64, u64>,
        (I16, I32, Unix) => Gregorian<i16, i32, UnixEpoch>,
        (I16, I32, CommonEra) => Gregorian<i16, i32, CommonEraEpoch>,
        (I16, I32, Computational) => Gregorian<i16, i32, ComputationalEpoch>,
        (I32, I32, Unix) => Gregorian<i32, i32, UnixEpoch>,
        (I32, I32, CommonEra) => Gregorian<i32, i32, CommonEraEpoch>,
        (I32, I32, Computational) => Gregorian<i32, i32, ComputationalEpoch>,
        (I16, I64, Unix) => Gregorian<i16, i64, UnixEpoch>,
        (I16, I64, CommonEra) => Gregorian<i16, i64, CommonEraEpoch>,
        (I16, I64, Computational) => Gregorian<i16, i64, ComputationalEpoch>,
        (I32, I64, Unix) => Gregorian<i32, i64, UnixEpoch>,
        (I32, I64, CommonEra) => Gregorian<i32, i64, CommonEraEpoch>,
        (I32, I64, Computational) => Gregorian<i32, i64, ComputationalEpoch>,
        (I64, I64, Unix) => Gregorian<i64, i64, UnixEpoch>,
        (I64, I64, CommonEra) => Gregorian<i64, i64, CommonEraEpoch>,
        (I64, I64, Computational) => Gregorian<i64, i64, ComputationalEpoch>,
    )
}

fn print_text(report: &Report) {
    let configuration = &report.configuration;
    format_line!(
        "Configuration",
        format!(
            "{} years, {} rata dies",
            configuration.year, configuration.rata_die
        ),
        format!("{} epoch", configuration.epoch)
    );
    format_line!("Epoch", &report.epoch);
    println!();
    format_line!("", "Minimum", "Maximum");
    format_line!("Date", &report.date_min, &report.date_max);
    format_line!("Rata die", &report.rata_die_min, &report.rata_die_max);
    format_line!("Round trip date", &report.round_date_min, &report.round_date_max);
    format_line!(
        "Round trip rata die",
        &report.round_rata_die_min,
        &report.round_rata_die_max
    );
    if !report.conversions.is_empty() {
        println!();
        for conversion in &report.conversions {
            format_line!("Conversion", &conversion.input, &conversion.output);
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let report = run(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}
