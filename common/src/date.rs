//! Calendar day utilities.

#[cfg(feature = "postgres")]
use std::error::Error as StdError;
use std::{cmp::Ordering, marker::PhantomData, ops};

use derive_more::{Debug, Display, Error};
#[cfg(feature = "postgres")]
use postgres_types::{
    accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type,
};
use time::macros::format_description;

use crate::DateTimeOf;

/// Untyped calendar day.
pub type Date = DateOf;

/// Brazilian-Portuguese month abbreviations, in calendar order.
///
/// Used as chart bucket labels by the dashboard.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", //
    "jul", "ago", "set", "out", "nov", "dez",
];

/// Calendar day without a time-of-day component.
///
/// All comparisons are day-precision by construction, so dates read from
/// different stores never disagree on sub-day noise.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the calendar day.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] representing the current calendar day (UTC).
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid ISO calendar day.
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(Into::into)
            .map_err(ParseError)
    }

    /// Returns the [`Date`] as an ISO `YYYY-MM-DD` string.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.inner
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|e| panic!("cannot format `Date` as ISO: {e}"))
    }

    /// Returns the calendar number of the month this [`Date`] falls in,
    /// `1` through `12`.
    #[must_use]
    pub fn month_number(&self) -> u8 {
        u8::from(self.inner.month())
    }

    /// Returns the Brazilian-Portuguese abbreviation of the month this
    /// [`Date`] falls in.
    #[must_use]
    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.month_number()) - 1]
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid ISO calendar day: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(date: time::Date) -> Self {
        Self {
            inner: date,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> ops::Sub for DateOf<Of> {
    type Output = time::Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.inner - rhs.inner
    }
}

#[cfg(feature = "postgres")]
impl<Of: ?Sized> FromSql<'_> for DateOf<Of> {
    accepts!(DATE);

    fn from_sql(
        ty: &Type,
        raw: &[u8],
    ) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        time::Date::from_sql(ty, raw).map(Into::into)
    }
}

#[cfg(feature = "postgres")]
impl<Of: ?Sized> ToSql for DateOf<Of> {
    accepts!(DATE);
    to_sql_checked!();

    fn to_sql(
        &self,
        ty: &Type,
        w: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        self.inner.to_sql(ty, w)
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar day in ISO `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = crate::Date;

    impl Date {
        fn to_output<S: ScalarValue>(date: &Date) -> Value<S> {
            Value::scalar(date.to_iso8601())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from non-string \
                         value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_iso8601(s).map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}

/// Inclusive calendar-month window `[first day, last day]`.
///
/// Resolved from an optional `YYYY-MM` token, falling back to the current
/// month. The last day accounts for variable month lengths and leap years.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    /// First day of the month.
    first: time::Date,

    /// Last day of the month.
    last: time::Date,
}

impl Window {
    /// Resolves a [`Window`] from the provided `YYYY-MM` token, or to the
    /// current calendar month if no token is given.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if the token is malformed or names an
    /// impossible month.
    pub fn resolve(token: Option<&str>) -> Result<Self, TokenError> {
        use TokenError as E;

        let Some(token) = token else {
            let today = time::OffsetDateTime::now_utc().date();
            return Self::of_month(today.year(), today.month());
        };

        let (year, month) = token.split_once('-').ok_or(E::Format)?;
        let year = year.parse::<i32>().map_err(|_| E::Format)?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .ok_or(E::Month)?;

        Self::of_month(year, month)
    }

    /// Creates a [`Window`] spanning the given month of the given year.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if the year is out of the supported calendar
    /// range.
    pub fn of_month(year: i32, month: time::Month) -> Result<Self, TokenError> {
        let first = time::Date::from_calendar_date(year, month, 1)
            .map_err(|_| TokenError::Year)?;
        let last =
            time::Date::from_calendar_date(year, month, month.length(year))
                .map_err(|_| TokenError::Year)?;

        Ok(Self { first, last })
    }

    /// Returns this [`Window`] as an inclusive range of calendar days.
    #[must_use]
    pub fn dates<Of: ?Sized>(&self) -> ops::RangeInclusive<DateOf<Of>> {
        ops::RangeInclusive::new(self.first.into(), self.last.into())
    }

    /// Returns this [`Window`] as an inclusive range of timestamps, from
    /// midnight of the first day to the last representable instant of the
    /// last day.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn datetimes<Of: ?Sized>(
        &self,
    ) -> ops::RangeInclusive<DateTimeOf<Of>> {
        let start = time::PrimitiveDateTime::new(
            self.first,
            time::Time::MIDNIGHT,
        )
        .assume_utc()
        .try_into()
        .expect("infallible");
        let end = time::PrimitiveDateTime::new(self.last, time::Time::MAX)
            .assume_utc()
            .try_into()
            .expect("infallible");
        ops::RangeInclusive::new(start, end)
    }
}

/// Error of resolving a [`Window`] from a `YYYY-MM` token.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum TokenError {
    /// Token is not of a `YYYY-MM` shape.
    #[display("expected `YYYY-MM` token")]
    Format,

    /// Month component is not in the `1..=12` range.
    #[display("month must be in `1..=12` range")]
    Month,

    /// Year component is out of the supported calendar range.
    #[display("year is out of the supported range")]
    Year,
}

#[cfg(test)]
mod spec {
    use super::{Date, Window};

    fn date(s: &str) -> Date {
        Date::from_iso8601(s).unwrap()
    }

    #[test]
    fn resolves_token_to_month_bounds() {
        let window = Window::resolve(Some("2025-03")).unwrap();

        assert_eq!(*window.dates::<()>().start(), date("2025-03-01"));
        assert_eq!(*window.dates::<()>().end(), date("2025-03-31"));
    }

    #[test]
    fn resolves_short_months() {
        let window = Window::resolve(Some("2025-04")).unwrap();

        assert_eq!(*window.dates::<()>().end(), date("2025-04-30"));
    }

    #[test]
    fn respects_leap_years() {
        let leap = Window::resolve(Some("2024-02")).unwrap();
        assert_eq!(*leap.dates::<()>().end(), date("2024-02-29"));

        let common = Window::resolve(Some("2025-02")).unwrap();
        assert_eq!(*common.dates::<()>().end(), date("2025-02-28"));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(Window::resolve(Some("2025")).is_err());
        assert!(Window::resolve(Some("2025-13")).is_err());
        assert!(Window::resolve(Some("2025-00")).is_err());
        assert!(Window::resolve(Some("march-2025")).is_err());
        assert!(Window::resolve(Some("")).is_err());
    }

    #[test]
    fn no_token_means_current_month() {
        let window = Window::resolve(None).unwrap();
        let today = Date::today();

        assert!(window.dates::<()>().contains(&today));
    }

    #[test]
    fn datetimes_cover_the_whole_last_day() {
        let window = Window::resolve(Some("2025-03")).unwrap();
        let range = window.datetimes::<()>();

        let last_moment = common_datetime("2025-03-31T23:59:59Z");
        assert!(range.contains(&last_moment));

        let next_month = common_datetime("2025-04-01T00:00:00Z");
        assert!(!range.contains(&next_month));
    }

    #[test]
    fn day_subtraction_spans_inclusively() {
        let days =
            (date("2025-03-10") - date("2025-03-01")).whole_days() + 1;
        assert_eq!(days, 10);
    }

    #[test]
    fn month_abbreviations_follow_calendar_order() {
        assert_eq!(date("2025-01-15").month_abbreviation(), "jan");
        assert_eq!(date("2025-02-15").month_abbreviation(), "fev");
        assert_eq!(date("2025-12-15").month_abbreviation(), "dez");
    }

    fn common_datetime(s: &str) -> crate::DateTime {
        crate::DateTime::from_rfc3339(s).unwrap()
    }
}
