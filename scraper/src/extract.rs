use anyhow::{Context, Result};
use common::JobListing;
use scraper::{ElementRef, Html, Selector};

/// CSS marker for one job posting in the results list. The browser side
/// waits on this selector too, so the page is only mined once it is present.
pub const LISTING: &str = ".jobs-list-item";

/// The structural selectors for one careers site. Swapping this set out is
/// enough to point the scraper at different markup; the pagination loop
/// never sees selectors.
pub struct ListingSelectors {
    listing: Selector,
    title_link: Selector,
    title: Selector,
    location: Selector,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            listing: Selector::parse(LISTING).unwrap(),
            title_link: Selector::parse("a[data-ph-at-id='job-link']").unwrap(),
            title: Selector::parse(".job-title").unwrap(),
            location: Selector::parse("span.job-location").unwrap(),
        }
    }
}

/// Mines every listing element out of a captured results page. Each element
/// yields either a record or the reason it had to be skipped, so one broken
/// listing never costs the rest of the page.
pub fn extract_listings(html: &str, selectors: &ListingSelectors) -> Vec<Result<JobListing>> {
    let document = Html::parse_document(html);
    document
        .select(&selectors.listing)
        .map(|item| extract_one(item, selectors))
        .collect()
}

fn extract_one(item: ElementRef<'_>, selectors: &ListingSelectors) -> Result<JobListing> {
    let link_element = item
        .select(&selectors.title_link)
        .next()
        .context("listing has no job link")?;
    let title = link_element
        .select(&selectors.title)
        .next()
        .context("job link has no title")?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    let link = link_element
        .value()
        .attr("href")
        .context("job link has no href")?
        .to_string();
    let location = item
        .select(&selectors.location)
        .next()
        .context("listing has no location")?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    Ok(JobListing {
        title,
        link,
        location,
    })
}
