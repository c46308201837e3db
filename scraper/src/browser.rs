use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use common::JobListing;
use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};

use crate::extract::{self, ListingSelectors};
use crate::paginate::PageSource;

const LISTING_WAIT: Duration = Duration::from_secs(20);
const NEXT_WAIT: Duration = Duration::from_secs(10);
const OVERLAY_WAIT: Duration = Duration::from_secs(5);

const OVERLAY: &str = "div.onetrust-pc-dark-filter";
const NEXT_LINK: &str = "a[data-ph-at-id='pagination-next-link']";

/// One exclusive Chrome session pointed at the search results. Dropping the
/// session tears the Chrome process down, on every exit path.
pub struct BrowserSession {
    // Never read after startup, but dropping it would kill Chrome while the
    // tab is still in use.
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
    selectors: ListingSelectors,
}

impl BrowserSession {
    /// Launches headless Chrome, opens the search page, and waits for the
    /// first listing element to show up. Any failure here is fatal.
    pub fn open(chrome_path: &str, url: &str) -> Result<Self> {
        let options = LaunchOptionsBuilder::default()
            .headless(true)
            .sandbox(false)
            .window_size(Some((1920, 1080)))
            .path(Some(PathBuf::from(chrome_path)))
            .args(vec![
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
            ])
            .build()
            .map_err(|e| anyhow!("bad browser launch options: {e}"))?;

        let browser = Browser::new(options).context("failed to launch Chrome")?;
        let tab = browser.new_tab().context("failed to open a browser tab")?;

        tab.navigate_to(url)
            .with_context(|| format!("failed to open search page {url}"))?;
        tab.wait_for_element_with_custom_timeout(extract::LISTING, LISTING_WAIT)
            .context("no job listings appeared on the search page")?;

        Ok(Self {
            browser,
            tab,
            selectors: ListingSelectors::default(),
        })
    }

    /// The consent overlay can sit on top of the pagination controls; hide
    /// it if it shows up. Best effort, failures ignored.
    fn hide_overlay(&self) {
        if let Ok(overlay) = self
            .tab
            .wait_for_element_with_custom_timeout(OVERLAY, OVERLAY_WAIT)
        {
            let _ = overlay.call_js_fn(
                "function() { this.style.visibility = 'hidden'; }",
                vec![],
                false,
            );
        }
    }
}

impl PageSource for BrowserSession {
    fn current_listings(&mut self) -> Result<Vec<Result<JobListing>>> {
        let html = self
            .tab
            .get_content()
            .context("failed to capture page content")?;
        Ok(extract::extract_listings(&html, &self.selectors))
    }

    fn advance(&mut self) -> Result<()> {
        self.hide_overlay();

        let next = self
            .tab
            .wait_for_element_with_custom_timeout(NEXT_LINK, NEXT_WAIT)
            .context("no next-page control")?;
        next.click().context("failed to click next-page control")?;

        self.tab
            .wait_for_element_with_custom_timeout(extract::LISTING, LISTING_WAIT)
            .context("job listings never appeared after paging")?;
        Ok(())
    }
}
