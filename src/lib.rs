//! Client for the SumoDB bout query service.
//!
//! Builds canonical bout query URLs from structured parameters and
//! extracts fixed-schema bout records from the service's HTML result
//! pages, following pagination past the 1000-row page cap.
//!
//! ```no_run
//! use sumodb_client::{run_query, BoutQuery, ClientConfig, HttpClient, RikishiFilter};
//!
//! # async fn example() -> sumodb_client::Result<()> {
//! let query = BoutQuery::new()
//!     .basho(202301)
//!     .division_alias("m")?
//!     .rikishi1(RikishiFilter::new().set("shikona", "Terunofuji"));
//!
//! let client = HttpClient::new(&ClientConfig::default())?;
//! if let Some(bouts) = run_query(&query, &client).await? {
//!     for bout in &bouts {
//!         println!("{} day {}: {}", bout.date, bout.day, bout.kimarite);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod query;
pub mod scraper;
pub mod types;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use query::{BoutQuery, RikishiFilter};
pub use scraper::{run_query, BoutParser, Fetch, HttpClient};
pub use types::{BoutRecord, BoutResult, RikishiBout, COLUMNS};
