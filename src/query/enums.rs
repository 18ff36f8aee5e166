//! Closed enumerations for bout query parameters.
//!
//! Each variant carries its canonical wire encoding: a parameter name for
//! the checkbox-style filters, or a numeric id for the dropdown-style ones.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Banzuke division of a bout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Maezumo,
    Jonokuchi,
    Jonidan,
    Sandanme,
    Makushita,
    Juryo,
    Makuuchi,
}

impl Division {
    /// Query parameter name for this division
    pub fn param(self) -> &'static str {
        match self {
            Division::Maezumo => "mz",
            Division::Jonokuchi => "jk",
            Division::Jonidan => "jd",
            Division::Sandanme => "sd",
            Division::Makushita => "ms",
            Division::Juryo => "j",
            Division::Makuuchi => "m",
        }
    }

    /// Resolve a case-insensitive alias such as `ms` or `makushita`
    pub fn from_alias(alias: &str) -> Result<Self> {
        match alias.to_lowercase().as_str() {
            "mz" | "mae-zumo" | "maezumo" => Ok(Division::Maezumo),
            "jk" | "jonokuchi" => Ok(Division::Jonokuchi),
            "jd" | "jonidan" => Ok(Division::Jonidan),
            "sd" | "sandanme" => Ok(Division::Sandanme),
            "ms" | "makushita" => Ok(Division::Makushita),
            "j" | "juryo" => Ok(Division::Juryo),
            "m" | "makuuchi" | "makunouchi" => Ok(Division::Makuuchi),
            _ => Err(Error::UnknownDivision {
                alias: alias.to_string(),
            }),
        }
    }
}

/// Winning technique, encoded as the service's dropdown id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kimarite {
    Abisetaoshi = 1,
    Amiuchi = 2,
    Ashitori = 3,
    Chongake = 4,
    Fusen = 5,
    Gasshohineri = 6,
    Hansoku = 7,
    Harimanage = 8,
    Hatakikomi = 9,
    Hikiotoshi = 10,
    Hikkake = 11,
    Ipponzeoi = 12,
    Isamiashi = 13,
    Izori = 14,
    Kainahineri = 15,
    Kakenage = 16,
    Kakezori = 17,
    Katasukashi = 18,
    Kawazugake = 19,
    Kekaeshi = 20,
    Ketaguri = 21,
    Kimedashi = 22,
    Kimetaoshi = 23,
    Kirikaeshi = 24,
    Komatasukui = 25,
    Koshikudake = 26,
    Koshinage = 27,
    Kotehineri = 28,
    Kotenage = 29,
    Kozumatori = 30,
    Kubihineri = 31,
    Kubinage = 32,
    Makiotoshi = 33,
    Mitokorozeme = 34,
    Nichonage = 35,
    Nimaigeri = 36,
    Okuridashi = 37,
    Okurigake = 38,
    Okurihikiotoshi = 39,
    Okurinage = 40,
    Okuritaoshi = 41,
    Okuritsuridashi = 42,
    Okuritsuriotoshi = 43,
    Omata = 44,
    Osakate = 45,
    Oshidashi = 46,
    Oshitaoshi = 47,
    Sabaori = 48,
    Sakatottari = 49,
    Shitatedashinage = 50,
    Shitatehineri = 51,
    Shitatenage = 52,
    Shumokuzori = 53,
    Sokubiotoshi = 54,
    Sotogake = 55,
    Sotokomata = 56,
    Sotomuso = 57,
    Susoharai = 58,
    Susotori = 59,
    Tasukizori = 60,
    Tokkurinage = 61,
    Tottari = 62,
    Tsukaminage = 63,
    Tsukidashi = 64,
    Tsukihiza = 65,
    Tsukiotoshi = 66,
    Tsukitaoshi = 67,
    Tsukite = 68,
    Tsumatori = 69,
    Tsuridashi = 70,
    Tsuriotoshi = 71,
    Uchigake = 72,
    Uchimuso = 73,
    Utchari = 74,
    Uwatedashinage = 75,
    Uwatehineri = 76,
    Uwatenage = 77,
    Waridashi = 78,
    Watashikomi = 79,
    Yaguranage = 80,
    Yobimodoshi = 81,
    Yorikiri = 82,
    Yoritaoshi = 83,
    Zubuneri = 84,
}

impl Kimarite {
    pub fn value(self) -> u16 {
        self as u16
    }
}

/// Training stable, encoded as the service's dropdown id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heya {
    Ajigawa = 1,
    Arashio = 2,
    Asahiyama = 3,
    Asakayama = 4,
    Azumazeki = 5,
    Dewanoumi = 6,
    Fujishima = 7,
    Futagoyama = 8,
    Hakkaku = 9,
    Hanaregoma = 10,
    Hidenoyama = 11,
    Ikazuchi = 12,
    Irumagawa = 13,
    Isegahama = 14,
    Isenoumi = 15,
    Kasugano = 16,
    Kataonami = 17,
    Kise = 18,
    Kokonoe = 19,
    Michinoku = 20,
    Minato = 21,
    Miyagino = 22,
    Musashigawa = 23,
    Naruto = 24,
    Nishiiwa = 25,
    Nishikido = 26,
    Nishonoseki = 27,
    Oitekaze = 28,
    Onomatsu = 29,
    Oshima = 30,
    Oshiogawa = 31,
    Otake = 32,
    Otowayama = 33,
    Sadogatake = 34,
    Sakaigawa = 35,
    Shibatayama = 36,
    Shikihide = 37,
    Shikoroyama = 38,
    Tagonoura = 39,
    Takadagawa = 40,
    Takasago = 41,
    Tamanoi = 42,
    Tatsunami = 43,
    Tokitsukaze = 44,
    Tomozuna = 45,
    Yamahibiki = 46,
}

impl Heya {
    pub fn value(self) -> u16 {
        self as u16
    }
}

/// Region of origin, encoded as the service's dropdown id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shusshin {
    Aichi = 1,
    Akita = 2,
    Aomori = 3,
    Chiba = 4,
    Ehime = 5,
    Fukui = 6,
    Fukuoka = 7,
    Fukushima = 8,
    Gifu = 9,
    Gunma = 10,
    Hiroshima = 11,
    Hokkaido = 12,
    Hyogo = 13,
    Ibaraki = 14,
    Ishikawa = 15,
    Iwate = 16,
    Kagawa = 17,
    Kagoshima = 18,
    Kanagawa = 19,
    Kochi = 20,
    Kumamoto = 21,
    Kyoto = 22,
    Mie = 23,
    Miyagi = 24,
    Miyazaki = 25,
    Nagano = 26,
    Nagasaki = 27,
    Nara = 28,
    Niigata = 29,
    Oita = 30,
    Okayama = 31,
    Okinawa = 32,
    Osaka = 33,
    Saga = 34,
    Saitama = 35,
    Shiga = 36,
    Shimane = 37,
    Shizuoka = 38,
    Tochigi = 39,
    Tokushima = 40,
    Tokyo = 41,
    Tottori = 42,
    Toyama = 43,
    Wakayama = 44,
    Yamagata = 45,
    Yamaguchi = 46,
    Yamanashi = 47,
    Brazil = 48,
    Bulgaria = 49,
    China = 50,
    Egypt = 51,
    Estonia = 52,
    Georgia = 53,
    Hungary = 54,
    Kazakhstan = 55,
    Mongolia = 56,
    Philippines = 57,
    Russia = 58,
    SouthKorea = 59,
    Ukraine = 60,
    UnitedStates = 61,
}

impl Shusshin {
    pub fn value(self) -> u16 {
        self as u16
    }
}

/// Reference point for a rikishi's win count
///
/// `AfterBout` is the service default and emits no parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinsOption {
    AfterBout = 0,
    BeforeBout = 1,
}

impl WinsOption {
    pub fn value(self) -> u16 {
        self as u16
    }
}

/// Tournament championship outcome filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Yusho {
    Yusho,
    YushoPlayoff,
    JunYusho,
    Other,
}

impl Yusho {
    pub fn param(self) -> &'static str {
        match self {
            Yusho::Yusho => "y",
            Yusho::YushoPlayoff => "yd",
            Yusho::JunYusho => "jy",
            Yusho::Other => "oy",
        }
    }
}

/// Special prize outcome filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sansho {
    NoSansho,
    ShukunSho,
    KantoSho,
    GinoSho,
}

impl Sansho {
    pub fn param(self) -> &'static str {
        match self {
            Sansho::NoSansho => "ns",
            Sansho::ShukunSho => "ss",
            Sansho::KantoSho => "ks",
            Sansho::GinoSho => "gs",
        }
    }
}

/// Division comparison mode for a rikishi filter
///
/// No wire encoding is currently known for these values; using them in a
/// filter is rejected at URL construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionCompare {
    FromLower,
    SameAsBout,
}

/// Debut comparison mode for a rikishi filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Debut {
    Division,
    Rank,
}

impl Debut {
    pub fn param(self) -> &'static str {
        match self {
            Debut::Division => "debutd",
            Debut::Rank => "debutr",
        }
    }
}
