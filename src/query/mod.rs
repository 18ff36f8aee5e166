//! Bout query construction.
//!
//! A [`BoutQuery`] describes one search against the bout database; its
//! [`build_url`](BoutQuery::build_url) method is the single place every
//! parameter encoding rule lives, so the full wire contract is testable
//! without network access.

pub mod enums;
pub mod rikishi;

pub use enums::{Debut, Division, DivisionCompare, Heya, Kimarite, Sansho, Shusshin, WinsOption, Yusho};
pub use rikishi::{AttrValue, RikishiFilter};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scraper::BOUT_QUERY_URL_BASE;

/// Exact number or verbatim expression, for fields where the service
/// understands range syntax such as `196001-196212`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Num(i64),
    Text(String),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Num(n) => write!(f, "{n}"),
            Term::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Num(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Num(value as i64)
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Self {
        Term::Num(value as i64)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

/// Structured description of one bout database search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoutQuery {
    basho: Option<Term>,
    day: Option<Term>,
    divisions: Vec<Division>,
    kimarite: Option<Kimarite>,
    east_side_only: bool,
    wins_only: bool,
    losses_only: bool,
    rikishi1: Option<RikishiFilter>,
    rikishi2: Option<RikishiFilter>,
}

impl BoutQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Basho date as `YYYYMM`, a bare year, or a verbatim range expression
    pub fn basho(mut self, basho: impl Into<Term>) -> Self {
        self.basho = Some(basho.into());
        self
    }

    /// Basho day (16 addresses playoffs) or a verbatim range expression
    pub fn day(mut self, day: impl Into<Term>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn division(mut self, division: Division) -> Self {
        self.divisions.push(division);
        self
    }

    /// Add a division by alias, e.g. `ms` or `makushita`
    pub fn division_alias(self, alias: &str) -> Result<Self> {
        Ok(self.division(Division::from_alias(alias)?))
    }

    /// Add several divisions by alias
    pub fn division_aliases<'a>(mut self, aliases: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        for alias in aliases {
            self = self.division_alias(alias)?;
        }
        Ok(self)
    }

    pub fn kimarite(mut self, kimarite: Kimarite) -> Self {
        self.kimarite = Some(kimarite);
        self
    }

    /// Restrict to bouts where rikishi 1 fought from the east side
    pub fn east_side_only(mut self, set: bool) -> Self {
        self.east_side_only = set;
        self
    }

    /// Restrict to bouts rikishi 1 won
    pub fn wins_only(mut self, set: bool) -> Self {
        self.wins_only = set;
        self
    }

    /// Restrict to bouts rikishi 1 lost
    ///
    /// Independent of [`wins_only`](Self::wins_only); the service accepts
    /// both flags at once and no mutual exclusion is enforced here.
    pub fn losses_only(mut self, set: bool) -> Self {
        self.losses_only = set;
        self
    }

    pub fn rikishi1(mut self, filter: RikishiFilter) -> Self {
        self.rikishi1 = Some(filter);
        self
    }

    pub fn rikishi2(mut self, filter: RikishiFilter) -> Self {
        self.rikishi2 = Some(filter);
        self
    }

    /// Build the canonical query URL
    ///
    /// Deterministic: segments appear in a fixed order (basho, day,
    /// divisions, kimarite, flags, rikishi 1, rikishi 2) and every segment
    /// corresponds to a field actually set on the query.
    pub fn build_url(&self) -> Result<String> {
        let mut url = String::from(BOUT_QUERY_URL_BASE);
        if let Some(basho) = &self.basho {
            url.push_str(&format!("&year={basho}"));
        }
        if let Some(day) = &self.day {
            url.push_str(&format!("&day={day}"));
        }
        for division in &self.divisions {
            url.push_str(&format!("&{}=on", division.param()));
        }
        if let Some(kimarite) = self.kimarite {
            url.push_str(&format!("&kimarite={}", kimarite.value()));
        }
        if self.east_side_only {
            url.push_str("&east1=on");
        }
        if self.wins_only {
            url.push_str("&onlyw1=on");
        }
        if self.losses_only {
            url.push_str("&onlyl1=on");
        }
        if let Some(filter) = &self.rikishi1 {
            url.push_str(&filter.encode(1)?);
        }
        if let Some(filter) = &self.rikishi2 {
            url.push_str(&filter.encode(2)?);
        }
        Ok(url)
    }
}
