//! [`MonthlyRecord`] definitions.

use common::{unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::contract;
#[cfg(doc)]
use crate::domain::Contract;

/// Reporting-period entry of a single [`Contract`].
///
/// At most one [`MonthlyRecord`] exists per [`Contract`] per [`Period`].
#[derive(Clone, Debug)]
pub struct MonthlyRecord {
    /// ID of this [`MonthlyRecord`].
    pub id: Id,

    /// ID of the [`Contract`] this [`MonthlyRecord`] belongs to.
    pub contract_id: contract::Id,

    /// [`Period`] this [`MonthlyRecord`] reports.
    pub period: Period,

    /// Revenue of the [`Contract`] within the [`Period`].
    pub revenue: Money,

    /// Expenses of the [`Contract`] within the [`Period`].
    pub expenses: Money,

    /// Number of employees working the [`Contract`] within the [`Period`].
    pub employees_count: EmployeesCount,

    /// Free-form [`Notes`], if any.
    pub notes: Option<Notes>,

    /// [`DateTime`] when this [`MonthlyRecord`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`MonthlyRecord`] was last updated, if ever.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: Option<UpdateDateTime>,
}

/// ID of a [`MonthlyRecord`].
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

/// Calendar month a [`MonthlyRecord`] reports.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{year}-{month:02}")]
pub struct Period {
    /// Month of the [`Period`], `1` through `12`.
    month: u8,

    /// Year of the [`Period`].
    year: i32,
}

impl Period {
    /// Creates a new [`Period`] if the given `month` is a valid calendar
    /// month number.
    #[must_use]
    pub fn new(month: u8, year: i32) -> Option<Self> {
        ((1..=12).contains(&month)).then_some(Self { month, year })
    }

    /// Returns the month number of this [`Period`], `1` through `12`.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year of this [`Period`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Number of employees reported by a [`MonthlyRecord`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Into, PartialEq, Ord,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct EmployeesCount(i32);

/// Free-form notes of a [`MonthlyRecord`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Notes(String);

impl Notes {
    /// Creates a new [`Notes`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `notes` are not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }

    /// Creates a new [`Notes`] if the given `notes` are valid.
    #[must_use]
    pub fn new(notes: impl Into<String>) -> Option<Self> {
        let notes = notes.into();
        Self::check(&notes).then_some(Self(notes))
    }

    /// Checks whether the given `notes` are valid [`Notes`].
    fn check(notes: impl AsRef<str>) -> bool {
        let notes = notes.as_ref();
        !notes.trim().is_empty() && notes.len() <= 2048
    }
}

impl FromStr for Notes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Notes`")
    }
}

/// [`DateTime`] when a [`MonthlyRecord`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(MonthlyRecord, unit::Creation)>;

/// [`DateTime`] when a [`MonthlyRecord`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type UpdateDateTime = DateTimeOf<(MonthlyRecord, unit::Update)>;

#[cfg(test)]
mod spec {
    use super::{Notes, Period};

    #[test]
    fn period_accepts_calendar_months_only() {
        assert!(Period::new(1, 2025).is_some());
        assert!(Period::new(12, 2025).is_some());
        assert!(Period::new(0, 2025).is_none());
        assert!(Period::new(13, 2025).is_none());
    }

    #[test]
    fn period_displays_as_token() {
        let period = Period::new(3, 2025).unwrap();

        assert_eq!(period.to_string(), "2025-03");
    }

    #[test]
    fn blank_notes_are_rejected() {
        assert!(Notes::new("  ").is_none());
        assert!(Notes::new("fechamento parcial").is_some());
    }
}
