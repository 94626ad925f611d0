//! Command implementations for GWM CLI.
//!
//! Every subcommand loads one dataset (the default file served by the
//! dashboard, or a local upload), applies the requested selection and prints
//! what the dashboard would show.

use clap::{Args, Subcommand};
use gwm_dwlr::source::DataSource;
use std::path::PathBuf;

pub mod dates;
pub mod export;
pub mod load;
pub mod show;
pub mod stations;

/// Origin used when fetching the default dataset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where to load the dataset from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Local CSV file to load instead of the default dataset
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Dashboard origin serving /data/dwlr_data.csv
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl SourceArgs {
    pub fn data_source(&self) -> DataSource {
        match &self.file {
            Some(path) => DataSource::Upload(path.clone()),
            None => DataSource::Default {
                base_url: self.base_url.clone(),
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stations with their status and per-tier counts
    Stations {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the dashboard for one station
    Show {
        /// Station ID (defaults to the first station in the file)
        #[arg(short = 's', long)]
        station: Option<String>,

        /// Show this date instead of the latest record (time-series view)
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the dates available for a station
    Dates {
        /// Station ID (defaults to the first station in the file)
        #[arg(short = 's', long)]
        station: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a station's last ten records to <Location>_groundwater_data.csv
    Export {
        /// Station ID (defaults to the first station in the file)
        #[arg(short = 's', long)]
        station: Option<String>,

        /// Directory to write the export into
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,
    },
}

pub async fn run(source: SourceArgs, command: Command) -> anyhow::Result<()> {
    let state = load::load_state(&source.data_source()).await?;
    let output = match command {
        Command::Stations { json } => stations::run_stations(&state, json)?,
        Command::Show {
            station,
            date,
            json,
        } => show::run_show(state, station.as_deref(), date.as_deref(), json)?,
        Command::Dates { station, json } => dates::run_dates(state, station.as_deref(), json)?,
        Command::Export { station, out_dir } => {
            export::run_export(state, station.as_deref(), &out_dir)?
        }
    };
    println!("{}", output);
    Ok(())
}
