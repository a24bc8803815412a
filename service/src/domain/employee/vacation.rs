//! [`Vacation`] definitions.

use common::{unit, DateOf, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::employee;
#[cfg(doc)]
use crate::domain::Employee;

pub use super::dismissal::Reason;

/// Paid vacation period of a single [`Employee`].
#[derive(Clone, Debug)]
pub struct Vacation {
    /// ID of this [`Vacation`].
    pub id: Id,

    /// ID of the vacationing [`Employee`].
    pub employee_id: employee::Id,

    /// First day of this [`Vacation`].
    pub starts_on: StartDate,

    /// Last day of this [`Vacation`], inclusive.
    pub ends_on: EndDate,

    /// Number of calendar days this [`Vacation`] spans.
    pub days_count: DaysCount,

    /// Vacation pay amount.
    pub amount: Money,

    /// [`Reason`] of this [`Vacation`], if recorded.
    pub reason: Option<Reason>,

    /// [`DateTime`] when this [`Vacation`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Vacation {
    /// Derives the inclusive [`DaysCount`] between the given boundary days.
    ///
    /// [`None`] is returned if `ends_on` precedes `starts_on`.
    #[must_use]
    pub fn span_days(
        starts_on: StartDate,
        ends_on: EndDate,
    ) -> Option<DaysCount> {
        let days = (ends_on.coerce() - starts_on).whole_days();
        (days >= 0).then(|| DaysCount(days + 1))
    }
}

/// ID of a [`Vacation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Number of calendar days a [`Vacation`] spans, boundaries included.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct DaysCount(i64);

/// Marker type describing a [`Vacation`] starting.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a [`Vacation`] ending.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// [`Date`] when a [`Vacation`] starts.
///
/// [`Date`]: common::Date
pub type StartDate = DateOf<(Vacation, Start)>;

/// [`Date`] when a [`Vacation`] ends, inclusive.
///
/// [`Date`]: common::Date
pub type EndDate = DateOf<(Vacation, End)>;

/// [`DateTime`] when a [`Vacation`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Vacation, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{DaysCount, Vacation};

    fn date(s: &str) -> Date {
        Date::from_iso8601(s).unwrap()
    }

    #[test]
    fn span_is_inclusive() {
        assert_eq!(
            Vacation::span_days(
                date("2025-03-01").coerce(),
                date("2025-03-01").coerce(),
            ),
            Some(DaysCount(1)),
        );
        assert_eq!(
            Vacation::span_days(
                date("2025-03-01").coerce(),
                date("2025-03-30").coerce(),
            ),
            Some(DaysCount(30)),
        );
    }

    #[test]
    fn span_crosses_month_boundary() {
        assert_eq!(
            Vacation::span_days(
                date("2025-01-20").coerce(),
                date("2025-02-03").coerce(),
            ),
            Some(DaysCount(15)),
        );
    }

    #[test]
    fn inverted_span_is_rejected() {
        assert_eq!(
            Vacation::span_days(
                date("2025-03-10").coerce(),
                date("2025-03-09").coerce(),
            ),
            None,
        );
    }
}
