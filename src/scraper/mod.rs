//! Scraper for the bout query service on sumodb.sumogames.de
//!
//! Provides the transport seam, the result page parser, and the paginated
//! query runner.

pub mod bouts;
pub mod client;

pub use bouts::{run_query, BoutParser};
pub use client::{Fetch, HttpClient};

use crate::error::{Error, Result};

/// Bout query endpoint
pub const BOUT_QUERY_URL: &str = "http://sumodb.sumogames.de/Query_bout.aspx";

/// Query base with form rendering disabled; `rowcount=5` selects the
/// maximum 1000-row page size so pagination offsets align to [`PAGE_SIZE`].
pub const BOUT_QUERY_URL_BASE: &str =
    "http://sumodb.sumogames.de/Query_bout.aspx?show_form=0&rowcount=5";

/// Rows per result page
pub const PAGE_SIZE: usize = 1000;

/// Build the URL for a later result page
pub fn offset_url(url: &str, offset: usize) -> String {
    format!("{url}&offset={offset}")
}

/// Reject URLs that do not target the bout query endpoint in its
/// form-disabled mode.
pub fn ensure_bout_query_url(url: &str) -> Result<()> {
    if !url.starts_with(BOUT_QUERY_URL) || !url.contains("show_form=0") {
        return Err(Error::EndpointMismatch {
            url: url.to_string(),
        });
    }
    Ok(())
}
