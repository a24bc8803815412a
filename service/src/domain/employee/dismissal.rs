//! [`Dismissal`] definitions.

use common::{unit, DateOf, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::employee;
#[cfg(doc)]
use crate::domain::Employee;

/// Termination of a single [`Employee`].
///
/// Registering a [`Dismissal`] deactivates the [`Employee`] it refers to.
#[derive(Clone, Debug)]
pub struct Dismissal {
    /// ID of this [`Dismissal`].
    pub id: Id,

    /// ID of the dismissed [`Employee`].
    pub employee_id: employee::Id,

    /// Day the [`Employee`] was dismissed.
    pub dismissed_on: DismissalDate,

    /// Severance amount paid out.
    pub amount: Money,

    /// Contractual penalty paid on top, if any.
    pub penalty: Option<Money>,

    /// [`Reason`] of this [`Dismissal`], if recorded.
    pub reason: Option<Reason>,

    /// [`DateTime`] when this [`Dismissal`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Dismissal {
    /// Returns the full cost of this [`Dismissal`].
    ///
    /// A missing penalty counts as zero.
    #[must_use]
    pub fn total_cost(&self) -> Money {
        let penalty =
            self.penalty.map(|p| p.amount).unwrap_or_default();
        Money::brl(self.amount.amount + penalty)
    }
}

/// ID of a [`Dismissal`].
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

/// Reason of a [`Dismissal`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Reason(String);

impl Reason {
    /// Creates a new [`Reason`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `reason` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Creates a new [`Reason`] if the given `reason` is valid.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Option<Self> {
        let reason = reason.into();
        Self::check(&reason).then_some(Self(reason))
    }

    /// Checks whether the given `reason` is a valid [`Reason`].
    fn check(reason: impl AsRef<str>) -> bool {
        let reason = reason.as_ref();
        !reason.trim().is_empty() && reason.len() <= 1024
    }
}

impl FromStr for Reason {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Reason`")
    }
}

/// [`Date`] when an [`Employee`] was dismissed.
///
/// [`Date`]: common::Date
pub type DismissalDate = DateOf<Dismissal>;

/// [`DateTime`] when a [`Dismissal`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Dismissal, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use super::{Dismissal, DismissalDate, Id};
    use crate::domain::employee;

    fn dismissal(amount: Money, penalty: Option<Money>) -> Dismissal {
        Dismissal {
            id: Id::new(),
            employee_id: employee::Id::new(),
            dismissed_on: DismissalDate::today(),
            amount,
            penalty,
            reason: None,
            created_at: common::DateTime::now().coerce(),
        }
    }

    #[test]
    fn total_cost_includes_penalty() {
        let d = dismissal(
            Money::brl(Decimal::new(2000, 0)),
            Some(Money::brl(Decimal::new(500, 0))),
        );

        assert_eq!(d.total_cost().amount, Decimal::new(2500, 0));
    }

    #[test]
    fn missing_penalty_counts_as_zero() {
        let d = dismissal(Money::brl(Decimal::new(2000, 0)), None);

        assert_eq!(d.total_cost().amount, Decimal::new(2000, 0));
    }
}
