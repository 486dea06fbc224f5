//! Built-in entity families.
//!
//! Each submodule owns one family's pattern table and, where the family
//! needs one, its validator, run filter or post-processor:
//!
//! ```text
//! Family       extra policy
//! ───────────  ──────────────────────────────────────────────
//! phone        post-processor (prefix absorption + hex filter)
//! ip           run filter (IPv6 "::" ambiguity)
//! url          validator (ambiguous time terms like "7.am")
//! email, guid, hashtag, mention   base merge only
//! ```
//!
//! Extractors are compiled lazily on first use and shared afterwards.

pub mod email;
pub mod guid;
pub mod hashtag;
pub mod ip;
pub mod mention;
pub mod phone;
pub mod url;

#[cfg(test)]
mod tests;

use crate::engine::Extractor;
use crate::Error;
use bitflags::bitflags;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

static PHONE_NUMBER: Lazy<Extractor> = Lazy::new(phone::extractor);
static EMAIL: Lazy<Extractor> = Lazy::new(email::extractor);
static HASHTAG: Lazy<Extractor> = Lazy::new(hashtag::extractor);
static GUID: Lazy<Extractor> = Lazy::new(guid::extractor);
static IP: Lazy<Extractor> = Lazy::new(ip::extractor);
static MENTION: Lazy<Extractor> = Lazy::new(mention::extractor);
static URL: Lazy<Extractor> = Lazy::new(url::extractor);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    PhoneNumber,
    Email,
    Hashtag,
    Guid,
    Ip,
    Mention,
    Url,
}

bitflags! {
    /// Selection of families to run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FamilyMask: u32 {
        const PHONE_NUMBER = 1 << 0;
        const EMAIL        = 1 << 1;
        const HASHTAG      = 1 << 2;
        const GUID         = 1 << 3;
        const IP           = 1 << 4;
        const MENTION      = 1 << 5;
        const URL          = 1 << 6;
    }
}

impl Family {
    /// All families, in output tie-break order.
    pub const ALL: [Family; 7] =
        [Family::PhoneNumber, Family::Email, Family::Hashtag, Family::Guid, Family::Ip, Family::Mention, Family::Url];

    /// Entity type string reported on extracted entities.
    pub fn name(self) -> &'static str {
        match self {
            Family::PhoneNumber => "phonenumber",
            Family::Email => "email",
            Family::Hashtag => "hashtag",
            Family::Guid => "guid",
            Family::Ip => "ip",
            Family::Mention => "mention",
            Family::Url => "url",
        }
    }

    pub fn mask(self) -> FamilyMask {
        match self {
            Family::PhoneNumber => FamilyMask::PHONE_NUMBER,
            Family::Email => FamilyMask::EMAIL,
            Family::Hashtag => FamilyMask::HASHTAG,
            Family::Guid => FamilyMask::GUID,
            Family::Ip => FamilyMask::IP,
            Family::Mention => FamilyMask::MENTION,
            Family::Url => FamilyMask::URL,
        }
    }

    /// The shared built-in extractor for this family.
    pub fn extractor(self) -> &'static Extractor {
        match self {
            Family::PhoneNumber => &PHONE_NUMBER,
            Family::Email => &EMAIL,
            Family::Hashtag => &HASHTAG,
            Family::Guid => &GUID,
            Family::Ip => &IP,
            Family::Mention => &MENTION,
            Family::Url => &URL,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    /// Accepts the entity type string plus a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phonenumber" | "phone" => Ok(Family::PhoneNumber),
            "email" => Ok(Family::Email),
            "hashtag" => Ok(Family::Hashtag),
            "guid" => Ok(Family::Guid),
            "ip" => Ok(Family::Ip),
            "mention" => Ok(Family::Mention),
            "url" => Ok(Family::Url),
            _ => Err(Error::UnknownFamily(s.to_string())),
        }
    }
}

impl FamilyMask {
    /// Families selected by this mask, in [`Family::ALL`] order.
    pub fn families(self) -> impl Iterator<Item = Family> {
        Family::ALL.into_iter().filter(move |f| self.contains(f.mask()))
    }
}

impl FromIterator<Family> for FamilyMask {
    fn from_iter<I: IntoIterator<Item = Family>>(iter: I) -> Self {
        iter.into_iter().fold(FamilyMask::empty(), |mask, f| mask | f.mask())
    }
}
