use anyhow::Result;
use common::JobListing;

/// One source of paged listing results. The browser session implements this
/// for the live site; tests drive the loop with canned pages.
pub trait PageSource {
    /// Extraction results for every listing element on the current page.
    /// An outer `Err` means the page itself could not be read.
    fn current_listings(&mut self) -> Result<Vec<Result<JobListing>>>;

    /// Moves to the next results page. `Err` means no further page could
    /// be reached.
    fn advance(&mut self) -> Result<()>;
}

/// Why the pagination loop stopped.
#[derive(Debug, PartialEq)]
pub enum StopReason {
    /// A page showed zero listings: the site ran out of results.
    Exhausted,
    /// Advancing (or reading) a page failed; whatever was collected up to
    /// that point is still returned.
    NavigationFailed(String),
}

/// Everything one scraping run produced.
#[derive(Debug)]
pub struct ScrapeReport {
    pub jobs: Vec<JobListing>,
    pub pages: usize,
    pub skipped: usize,
    pub stop: StopReason,
}

/// The extract-then-advance loop. Listings accumulate in page order with no
/// deduplication and no page cap; the loop only ends when a page comes back
/// empty or navigation breaks.
pub fn collect_listings(source: &mut impl PageSource) -> ScrapeReport {
    let mut jobs: Vec<JobListing> = Vec::new();
    let mut pages = 0;
    let mut skipped = 0;

    let stop = loop {
        let extracted = match source.current_listings() {
            Ok(extracted) => extracted,
            Err(e) => break StopReason::NavigationFailed(format!("{e:#}")),
        };
        pages += 1;
        println!("Found {} job listings on page {}.", extracted.len(), pages);

        if extracted.is_empty() {
            break StopReason::Exhausted;
        }

        for result in extracted {
            match result {
                Ok(job) => jobs.push(job),
                Err(e) => {
                    eprintln!("Error extracting job details: {e:#}");
                    skipped += 1;
                }
            }
        }

        if let Err(e) = source.advance() {
            eprintln!("Error advancing to next page, breaking: {e:#}");
            break StopReason::NavigationFailed(format!("{e:#}"));
        }
    };

    ScrapeReport {
        jobs,
        pages,
        skipped,
        stop,
    }
}
