//! Rikishi filter attributes and their URL encodings.
//!
//! A filter is an ordered list of attribute assignments; attributes are
//! emitted in the order the caller set them, one encoding rule per
//! attribute kind.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::enums::{Debut, DivisionCompare, Heya, Sansho, Shusshin, WinsOption, Yusho};

/// Value assigned to a rikishi filter attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    Text(String),
    Flag(bool),
    Num(i64),
    List(Vec<String>),
    Heya(Heya),
    Shusshin(Shusshin),
    WinsOption(WinsOption),
    Yusho(Vec<Yusho>),
    Sansho(Vec<Sansho>),
    Division(Vec<DivisionCompare>),
    Debut(Vec<Debut>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Num(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Num(value as i64)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Heya> for AttrValue {
    fn from(value: Heya) -> Self {
        AttrValue::Heya(value)
    }
}

impl From<Shusshin> for AttrValue {
    fn from(value: Shusshin) -> Self {
        AttrValue::Shusshin(value)
    }
}

impl From<WinsOption> for AttrValue {
    fn from(value: WinsOption) -> Self {
        AttrValue::WinsOption(value)
    }
}

impl From<Yusho> for AttrValue {
    fn from(value: Yusho) -> Self {
        AttrValue::Yusho(vec![value])
    }
}

impl From<Vec<Yusho>> for AttrValue {
    fn from(value: Vec<Yusho>) -> Self {
        AttrValue::Yusho(value)
    }
}

impl From<Sansho> for AttrValue {
    fn from(value: Sansho) -> Self {
        AttrValue::Sansho(vec![value])
    }
}

impl From<Vec<Sansho>> for AttrValue {
    fn from(value: Vec<Sansho>) -> Self {
        AttrValue::Sansho(value)
    }
}

impl From<DivisionCompare> for AttrValue {
    fn from(value: DivisionCompare) -> Self {
        AttrValue::Division(vec![value])
    }
}

impl From<Vec<DivisionCompare>> for AttrValue {
    fn from(value: Vec<DivisionCompare>) -> Self {
        AttrValue::Division(value)
    }
}

impl From<Debut> for AttrValue {
    fn from(value: Debut) -> Self {
        AttrValue::Debut(vec![value])
    }
}

impl From<Vec<Debut>> for AttrValue {
    fn from(value: Vec<Debut>) -> Self {
        AttrValue::Debut(value)
    }
}

/// Recognized rikishi filter attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrKind {
    Shikona,
    ShikonaChanges,
    Heya,
    Shusshin,
    Rank,
    Wins,
    WinsOption,
    Yusho,
    Sansho,
    Division,
    Debut,
}

impl AttrKind {
    /// Resolve a case-insensitive attribute key, including its alias forms
    fn resolve(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "shikona" => Some(AttrKind::Shikona),
            "changes" | "include changes" | "include-changes" | "shikona-changes"
            | "shikona changes" => Some(AttrKind::ShikonaChanges),
            "heya" => Some(AttrKind::Heya),
            "shusshin" => Some(AttrKind::Shusshin),
            "rank" => Some(AttrKind::Rank),
            "wins" => Some(AttrKind::Wins),
            "wins-options" | "wins options" | "winsopt" | "wins option" | "wins-option" => {
                Some(AttrKind::WinsOption)
            }
            "yusho" => Some(AttrKind::Yusho),
            "sansho" => Some(AttrKind::Sansho),
            "division" => Some(AttrKind::Division),
            "debut" => Some(AttrKind::Debut),
            _ => None,
        }
    }

    /// Value kind this attribute accepts, for error messages
    fn expected(self) -> &'static str {
        match self {
            AttrKind::Shikona => "a string",
            AttrKind::ShikonaChanges => "a bool",
            AttrKind::Heya => "a Heya value",
            AttrKind::Shusshin => "a Shusshin value",
            AttrKind::Rank => "a string or a list of strings",
            AttrKind::Wins => "an integer or a string",
            AttrKind::WinsOption => "a WinsOption value",
            AttrKind::Yusho => "Yusho values",
            AttrKind::Sansho => "Sansho values",
            AttrKind::Division => "DivisionCompare values",
            AttrKind::Debut => "Debut values",
        }
    }

    /// Encode one attribute assignment as its URL segment(s)
    fn encode(self, slot: u8, key: &str, value: &AttrValue) -> Result<String> {
        let mut out = String::new();
        match (self, value) {
            (AttrKind::Shikona, AttrValue::Text(name)) => {
                write!(out, "&shikona{slot}={name}").unwrap();
            }
            (AttrKind::ShikonaChanges, AttrValue::Flag(set)) => {
                if *set {
                    write!(out, "&shikona_changes{slot}=on").unwrap();
                }
            }
            (AttrKind::Heya, AttrValue::Heya(heya)) => {
                write!(out, "&heya{slot}={}", heya.value()).unwrap();
            }
            (AttrKind::Shusshin, AttrValue::Shusshin(shusshin)) => {
                write!(out, "&shusshin{slot}={}", shusshin.value()).unwrap();
            }
            (AttrKind::Rank, AttrValue::Text(rank)) => {
                write!(out, "&rank{slot}={rank}").unwrap();
            }
            (AttrKind::Rank, AttrValue::List(ranks)) => {
                write!(out, "&rank{slot}={}", ranks.join(",")).unwrap();
            }
            (AttrKind::Wins, AttrValue::Num(wins)) => {
                write!(out, "&wins{slot}={wins}").unwrap();
            }
            (AttrKind::Wins, AttrValue::Text(wins)) => {
                write!(out, "&wins{slot}={wins}").unwrap();
            }
            (AttrKind::WinsOption, AttrValue::WinsOption(option)) => {
                // AfterBout is the service default and emits nothing
                if *option != WinsOption::AfterBout {
                    write!(out, "&winsopt{slot}={}", option.value()).unwrap();
                }
            }
            (AttrKind::Yusho, AttrValue::Yusho(values)) => {
                for yusho in values {
                    write!(out, "&{}{slot}=on", yusho.param()).unwrap();
                }
            }
            (AttrKind::Sansho, AttrValue::Sansho(values)) => {
                for sansho in values {
                    write!(out, "&{}{slot}=on", sansho.param()).unwrap();
                }
            }
            (AttrKind::Division, AttrValue::Division(_)) => {
                return Err(Error::UnsupportedAttribute {
                    slot,
                    key: key.to_string(),
                });
            }
            (AttrKind::Debut, AttrValue::Debut(values)) => {
                for debut in values {
                    write!(out, "&{}{slot}=on", debut.param()).unwrap();
                }
            }
            _ => {
                return Err(Error::AttributeType {
                    slot,
                    key: key.to_string(),
                    expected: self.expected(),
                });
            }
        }
        Ok(out)
    }
}

/// Filter on one rikishi of the bout
///
/// Attributes are encoded in the order they were set; setting the same key
/// twice emits both assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RikishiFilter {
    attrs: Vec<(String, AttrValue)>,
}

impl RikishiFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute assignment
    ///
    /// The key is validated when the query URL is built, so unknown keys
    /// are reported together with the rikishi slot they were set on.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Encode all attributes for the given rikishi slot (1 or 2)
    pub(crate) fn encode(&self, slot: u8) -> Result<String> {
        let mut out = String::new();
        for (key, value) in &self.attrs {
            let kind = AttrKind::resolve(key).ok_or_else(|| Error::UnknownAttribute {
                slot,
                key: key.clone(),
            })?;
            out.push_str(&kind.encode(slot, key, value)?);
        }
        Ok(out)
    }
}
