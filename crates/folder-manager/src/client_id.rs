use crate::InvalidClientId;
use core::{fmt, str::FromStr};
use regex::Regex;
use std::sync::LazyLock;

/// `SERIAL(YY)`, e.g. `12345(67)`.
static SHORT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{5,})\(([0-9]{2})\)").expect("valid short-year pattern"));

/// `YYYY-SERIAL`, e.g. `1967-12345`.
static FULL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})-([0-9]{5,})").expect("valid full-year pattern"));

/// Earliest year accepted by the `YYYY-SERIAL` syntax.
pub const FIRST_YEAR: u16 = 1901;

/// Latest year accepted by the `YYYY-SERIAL` syntax.
pub const LAST_YEAR: u16 = 2000;

/// A validated client identifier, normalized to a four-digit year and a serial
/// of at least five digits.
///
/// Two surface syntaxes are accepted and tried in this order:
///
/// 1. `SERIAL(YY)`: a two-digit year. `00` maps to `2000`, every other value
///    maps to `19YY`.
/// 2. `YYYY-SERIAL`: a four-digit year, accepted only within
///    [`FIRST_YEAR`]..=[`LAST_YEAR`].
///
/// Each syntax is searched for anywhere in the input and the leftmost match
/// is used, so surrounding text is ignored. Input containing both syntaxes
/// resolves to `SERIAL(YY)`. A `YYYY-SERIAL` match outside the year window
/// rejects the input; later matches are not tried. Only ASCII digits are
/// accepted, and the year of a parsed `ClientId` is always within 1901-2000.
///
/// # Example
///
/// ```
/// use folder_manager::ClientId;
///
/// let id = ClientId::parse("12345(00)").unwrap();
/// assert_eq!((id.year(), id.serial()), ("2000", "12345"));
///
/// assert!(ClientId::parse("2001-12345").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId {
    year: String,
    serial: String,
}

impl ClientId {
    /// Parses a raw identifier, returning `None` if it is not a valid client
    /// id.
    ///
    /// A `None` is a validation failure to report back to the caller, not a
    /// fault.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_short_year(raw).or_else(|| Self::parse_full_year(raw))
    }

    fn parse_short_year(raw: &str) -> Option<Self> {
        let caps = SHORT_YEAR.captures(raw)?;
        let yy = &caps[2];
        let century = if yy == "00" { "20" } else { "19" };
        Some(Self {
            year: format!("{century}{yy}"),
            serial: caps[1].to_owned(),
        })
    }

    fn parse_full_year(raw: &str) -> Option<Self> {
        let caps = FULL_YEAR.captures(raw)?;
        // Four ASCII digits always fit.
        let year: u16 = caps[1].parse().ok()?;
        (FIRST_YEAR..=LAST_YEAR)
            .contains(&year)
            .then(|| Self {
                year: caps[1].to_owned(),
                serial: caps[2].to_owned(),
            })
    }

    /// The four-digit year, used as the year folder's name.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The serial, used as the client folder's name.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Formats this id in the `SERIAL(YY)` syntax.
    pub fn to_short_form(&self) -> String {
        format!("{}({})", self.serial, &self.year[2..])
    }
}

/// Formats in the `YYYY-SERIAL` syntax.
impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.serial)
    }
}

impl FromStr for ClientId {
    type Err = InvalidClientId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidClientId(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(raw: &str) -> Option<(String, String)> {
        ClientId::parse(raw).map(|id| (id.year().to_owned(), id.serial().to_owned()))
    }

    fn pair(year: &str, serial: &str) -> Option<(String, String)> {
        Some((year.to_owned(), serial.to_owned()))
    }

    #[test]
    fn parses_full_year_syntax() {
        assert_eq!(parsed("1967-12345"), pair("1967", "12345"));
        assert_eq!(parsed("1901-12345"), pair("1901", "12345"));
        assert_eq!(parsed("2000-12345"), pair("2000", "12345"));
    }

    #[test]
    fn parses_short_year_syntax() {
        assert_eq!(parsed("12345(67)"), pair("1967", "12345"));
        assert_eq!(parsed("12345(99)"), pair("1999", "12345"));
        assert_eq!(parsed("12345(01)"), pair("1901", "12345"));
    }

    #[test]
    fn short_year_00_maps_to_2000() {
        assert_eq!(parsed("12345(00)"), pair("2000", "12345"));
    }

    #[test]
    fn rejects_full_years_outside_window() {
        assert_eq!(parsed("1900-12345"), None);
        assert_eq!(parsed("2001-12345"), None);
        assert_eq!(parsed("0000-12345"), None);
        assert_eq!(parsed("9999-12345"), None);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("undefined"), None);
        assert_eq!(parsed("ABC"), None);
        assert_eq!(parsed("12345"), None);
    }

    #[test]
    fn rejects_short_serials() {
        assert_eq!(parsed("1234(67)"), None);
        assert_eq!(parsed("1967-1234"), None);
    }

    #[test]
    fn rejects_malformed_years() {
        assert_eq!(parsed("12345(6)"), None);
        assert_eq!(parsed("12345(678)"), None);
        assert_eq!(parsed("967-12345"), None);
    }

    #[test]
    fn finds_identifier_inside_surrounding_text() {
        assert_eq!(parsed("x12345(67)"), pair("1967", "12345"));
        assert_eq!(parsed("abc12345(67)"), pair("1967", "12345"));
        assert_eq!(parsed("12345(67)x"), pair("1967", "12345"));
        assert_eq!(parsed(" 1967-12345"), pair("1967", "12345"));
        assert_eq!(parsed("1967-12345abc"), pair("1967", "12345"));
        assert_eq!(parsed("1967-12345\n"), pair("1967", "12345"));
        assert_eq!(parsed("ref 12345(67) end"), pair("1967", "12345"));
    }

    #[test]
    fn short_year_syntax_wins_when_both_match() {
        assert_eq!(parsed("1967-12345(67)"), pair("1967", "12345"));
        assert_eq!(parsed("1999-12345(67)"), pair("1967", "12345"));
        assert_eq!(parsed("1999-54321 12345(00)"), pair("2000", "12345"));
    }

    #[test]
    fn full_year_uses_leftmost_match_only() {
        // Leftmost match is `9670-12345`, out of the window.
        assert_eq!(parsed("19670-12345"), None);
        assert_eq!(parsed("2001-12345 1967-12345"), None);
        assert_eq!(parsed("1967-12345 2001-12345"), pair("1967", "12345"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert_eq!(parsed("١٢٣٤٥(٦٧)"), None);
    }

    #[test]
    fn keeps_long_serials_and_leading_zeros() {
        assert_eq!(parsed("0001234567(45)"), pair("1945", "0001234567"));
        assert_eq!(parsed("1999-00000"), pair("1999", "00000"));
    }

    #[test]
    fn from_str_reports_raw_input() {
        let err = "ABC".parse::<ClientId>().unwrap_err();
        assert_eq!(err, InvalidClientId("ABC".to_string()));
        assert_eq!(err.to_string(), "Invalid client id 'ABC'");

        let id: ClientId = "12345(67)".parse().unwrap();
        assert_eq!(id.year(), "1967");
    }

    #[test]
    fn formats_both_syntaxes() {
        let id = ClientId::parse("12345(67)").unwrap();
        assert_eq!(id.to_string(), "1967-12345");
        assert_eq!(id.to_short_form(), "12345(67)");

        let id = ClientId::parse("2000-54321").unwrap();
        assert_eq!(id.to_short_form(), "54321(00)");
    }

    proptest! {
        #[test]
        fn short_year_century(serial in "[0-9]{5,12}", yy in "[0-9]{2}") {
            let id = ClientId::parse(&format!("{serial}({yy})")).unwrap();
            let century = if yy == "00" { "20" } else { "19" };
            prop_assert_eq!(id.year(), format!("{century}{yy}"));
            prop_assert_eq!(id.serial(), serial.as_str());
        }

        #[test]
        fn full_year_window(year in 0u16..10_000, serial in "[0-9]{5,12}") {
            let raw = format!("{year:04}-{serial}");
            let id = ClientId::parse(&raw);
            if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
                let id = id.unwrap();
                prop_assert_eq!(id.year(), format!("{year:04}"));
                prop_assert_eq!(id.serial(), serial.as_str());
            } else {
                prop_assert!(id.is_none());
            }
        }

        #[test]
        fn reparsing_either_form_is_stable(
            year in FIRST_YEAR..=LAST_YEAR,
            serial in "[0-9]{5,12}",
        ) {
            let id = ClientId::parse(&format!("{year}-{serial}")).unwrap();
            prop_assert_eq!(ClientId::parse(&id.to_string()), Some(id.clone()));
            prop_assert_eq!(ClientId::parse(&id.to_short_form()), Some(id));
        }
    }
}
