use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

/// Supported destination country for map rendering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    #[default]
    Rwanda,
    Tanzania,
    Botswana,
}

impl Country {
    /// Every supported country, in inference priority order.
    pub const ALL: [Country; 3] = [Self::Tanzania, Self::Botswana, Self::Rwanda];

    /// Capitalized name used in client-facing labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rwanda => "Rwanda",
            Self::Tanzania => "Tanzania",
            Self::Botswana => "Botswana",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rwanda => "rwanda",
            Self::Tanzania => "tanzania",
            Self::Botswana => "botswana",
        };
        f.write_str(s)
    }
}

impl FromStr for Country {
    type Err = CountryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rwanda" => Ok(Self::Rwanda),
            "tanzania" => Ok(Self::Tanzania),
            "botswana" => Ok(Self::Botswana),
            _ => Err(CountryParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Country`] string.
#[derive(Debug, Clone)]
pub struct CountryParseError(pub String);

impl fmt::Display for CountryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported country: {:?}", self.0)
    }
}

impl std::error::Error for CountryParseError {}

// ---------------------------------------------------------------------------
// Moment
// ---------------------------------------------------------------------------

/// Coarse time of day attached to an activity that has no explicit clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moment {
    Morning,
    Afternoon,
    Evening,
    HalfDay,
    FullDay,
    Night,
}

impl Moment {
    /// Default clock time shown for activities scheduled at this moment.
    pub fn default_time(&self) -> &'static str {
        match self {
            Self::Morning => "08:00",
            Self::Afternoon => "14:00",
            Self::Evening => "18:00",
            Self::HalfDay => "09:00",
            Self::FullDay => "08:00",
            Self::Night => "20:00",
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::HalfDay => "Half Day",
            Self::FullDay => "Full Day",
            Self::Night => "Night",
        };
        f.write_str(s)
    }
}

impl FromStr for Moment {
    type Err = MomentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Afternoon" => Ok(Self::Afternoon),
            "Evening" => Ok(Self::Evening),
            "Half Day" => Ok(Self::HalfDay),
            "Full Day" => Ok(Self::FullDay),
            "Night" => Ok(Self::Night),
            other => Err(MomentParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Moment`] string.
#[derive(Debug, Clone)]
pub struct MomentParseError(pub String);

impl fmt::Display for MomentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid moment of day: {:?}", self.0)
    }
}

impl std::error::Error for MomentParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_roundtrips_through_display() {
        for country in Country::ALL {
            let parsed: Country = country.to_string().parse().unwrap();
            assert_eq!(parsed, country);
        }
    }

    #[test]
    fn country_parse_is_case_insensitive() {
        assert_eq!(" Tanzania ".parse::<Country>().unwrap(), Country::Tanzania);
        assert!("kenya".parse::<Country>().is_err());
    }

    #[test]
    fn country_serializes_snake_case() {
        let json = serde_json::to_string(&Country::Botswana).unwrap();
        assert_eq!(json, "\"botswana\"");
    }

    #[test]
    fn moment_parses_spaced_labels() {
        assert_eq!("Half Day".parse::<Moment>().unwrap(), Moment::HalfDay);
        assert_eq!("Full Day".parse::<Moment>().unwrap(), Moment::FullDay);
        assert_eq!(Moment::HalfDay.to_string(), "Half Day");
    }

    #[test]
    fn moment_default_times() {
        assert_eq!(Moment::Morning.default_time(), "08:00");
        assert_eq!(Moment::Afternoon.default_time(), "14:00");
        assert_eq!(Moment::Evening.default_time(), "18:00");
        assert_eq!(Moment::HalfDay.default_time(), "09:00");
        assert_eq!(Moment::FullDay.default_time(), "08:00");
        assert_eq!(Moment::Night.default_time(), "20:00");
    }

    #[test]
    fn unknown_moment_is_an_error() {
        let err = "Dawn".parse::<Moment>().unwrap_err();
        assert!(err.to_string().contains("Dawn"));
    }
}
