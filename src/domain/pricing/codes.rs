//! Pricing codes for cities, venues, catering styles and add-on services.
//!
//! Each code enum lists the values the rule table knows about and keeps any
//! other input verbatim in an `Other` variant, so unrecognized values reach
//! the calculator and fall back to default rates instead of failing.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Turns a kebab-case code into display words: hyphens become spaces and the
/// first character of every word is upper-cased.
///
/// `"av-equipment"` becomes `"Av Equipment"`.
pub fn humanize_code(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut prev_is_word = false;
    for ch in code.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

macro_rules! pricing_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $variant, )+
            /// A code outside the known set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every known value, in display order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Returns the kebab-case code.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code.as_str(),
                }
            }

            /// Returns a human readable label.
            pub fn label(&self) -> String {
                match self {
                    $( $name::$variant => $label.to_string(), )+
                    $name::Other(code) => humanize_code(code),
                }
            }

            /// Returns true unless this is an unrecognized code.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                match code.as_str() {
                    $( $code => $name::$variant, )+
                    _ => $name::Other(code),
                }
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::from(code.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(code) => code,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

pricing_code! {
    /// Supported event cities.
    City {
        NewYork => ("new-york", "New York, NY"),
        LosAngeles => ("los-angeles", "Los Angeles, CA"),
        Chicago => ("chicago", "Chicago, IL"),
        Houston => ("houston", "Houston, TX"),
        Phoenix => ("phoenix", "Phoenix, AZ"),
        Philadelphia => ("philadelphia", "Philadelphia, PA"),
        SanAntonio => ("san-antonio", "San Antonio, TX"),
        SanDiego => ("san-diego", "San Diego, CA"),
        Dallas => ("dallas", "Dallas, TX"),
        Austin => ("austin", "Austin, TX"),
    }
}

pricing_code! {
    /// Venue categories, each with a base rental rate.
    VenueType {
        HotelBallroom => ("hotel-ballroom", "Hotel Ballroom"),
        ConferenceCenter => ("conference-center", "Conference Center"),
        Restaurant => ("restaurant", "Restaurant"),
        OutdoorVenue => ("outdoor-venue", "Outdoor Venue"),
        CommunityCenter => ("community-center", "Community Center"),
        UniversityHall => ("university-hall", "University Hall"),
        BanquetHall => ("banquet-hall", "Banquet Hall"),
        RooftopVenue => ("rooftop-venue", "Rooftop Venue"),
    }
}

pricing_code! {
    /// Catering styles, each with a per-attendee rate.
    CateringType {
        FullService => ("full-service", "Full Service Catering"),
        Buffet => ("buffet", "Buffet Style"),
        Cocktail => ("cocktail", "Cocktail Reception"),
        PlatedDinner => ("plated-dinner", "Plated Dinner"),
        BoxLunch => ("box-lunch", "Box Lunch"),
        CoffeeBreak => ("coffee-break", "Coffee Break"),
        NoCatering => ("no-catering", "No Catering"),
    }
}

pricing_code! {
    /// Flat-rate add-on services.
    AddOnService {
        AvEquipment => ("av-equipment", "AV Equipment"),
        Photography => ("photography", "Photography"),
        Music => ("music", "Music/DJ"),
        Flowers => ("flowers", "Flowers & Decor"),
        Security => ("security", "Security"),
        Parking => ("parking", "Parking"),
        Registration => ("registration", "Registration"),
        Transportation => ("transportation", "Transportation"),
    }
}
