//! MobiDziennik lesson plan exporter
//!
//! Logs in, scrapes the weekly lesson plan and prints it as JSON. Failures
//! are reported as `{"error": "..."}` on stderr with exit code 1.

mod cli;

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde_json::json;

use mobi_core::day::school_day;
use mobi_core::{DayOffset, DayView, ExtractOptions, MobiScraper, Schedule};

use crate::cli::{init_logging, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Credentials may come from a .env file through the env-backed flags.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args, Local::now().date_naive()).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Failed: {:?}", e);
            eprintln!("{}", error_json(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, today: NaiveDate) -> anyhow::Result<String> {
    let day = args.day.as_deref().map(str::parse::<DayOffset>).transpose()?;

    let Some(offset) = day else {
        let schedule = fetch_schedule(args).await?;
        return render(&schedule, args.pretty);
    };

    let date = offset.target_date(today);
    let view = match school_day(date) {
        Some(weekday) => {
            let schedule = fetch_schedule(args).await?;
            DayView::for_weekday(date, weekday, &schedule)
        }
        None => {
            log::info!("{} falls on a weekend, skipping login", date);
            DayView::weekend(date)
        }
    };
    render(&view, args.pretty)
}

async fn fetch_schedule(args: &Args) -> anyhow::Result<Schedule> {
    let options = ExtractOptions {
        skip_unparseable: args.lenient,
    };
    let scraper = MobiScraper::login(&args.user, &args.password)
        .await?
        .options(options);
    Ok(scraper.schedule().await?)
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

fn error_json(error: &anyhow::Error) -> String {
    json!({ "error": error.to_string() }).to_string()
}
