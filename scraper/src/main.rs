//! Careers-Page Job Scraper
//!
//! Drives headless Chrome through the Mastercard careers search results,
//! collects title/link/location for every posting, filters by location,
//! and prints each match with a TinyURL-shortened link.

mod browser;
mod config;
mod extract;
mod paginate;
mod shorten;

use std::env;
use std::path::Path;

use anyhow::Result;
use common::filter_by_location;

use crate::browser::BrowserSession;
use crate::paginate::StopReason;
use crate::shorten::shorten_url;

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = config::load_config(Path::new(&config_path))?;
    let url = config.search_url();

    println!("🔍 Scraping job listings from {url}\n");

    let report = {
        let mut session = BrowserSession::open(&config.chrome_path, &url)?;
        paginate::collect_listings(&mut session)
    }; // session dropped here; Chrome is gone before any shortening calls

    println!(
        "\n📊 Collected {} listings across {} pages ({} skipped).",
        report.jobs.len(),
        report.pages,
        report.skipped
    );
    if let StopReason::NavigationFailed(reason) = &report.stop {
        eprintln!("⚠️  Stopped before the last page ({reason}); results may be incomplete.");
    }

    let matching = filter_by_location(&report.jobs, &config.location);
    println!(
        "📋 {} listings match location \"{}\".\n",
        matching.len(),
        config.location
    );

    for job in &matching {
        println!("{}: {}", job.title, shorten_url(&job.link));
    }

    Ok(())
}
