//! [`Contract`] definitions.

use common::{define_kind, unit, DateOf, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Employee;

/// Municipal cleaning-services contract.
///
/// Referenced by monthly records, suppliers and [`Employee`]s, so it's never
/// hard-deleted while active [`Employee`]s are still linked to it.
#[derive(Clone, Debug)]
pub struct Contract {
    /// ID of this [`Contract`].
    pub id: Id,

    /// [`MunicipalityName`] this [`Contract`] is signed with.
    pub municipality_name: MunicipalityName,

    /// [`Description`] of this [`Contract`].
    pub description: Description,

    /// Day this [`Contract`] takes effect.
    pub starts_on: StartDate,

    /// Day this [`Contract`] runs out.
    pub ends_on: EndDate,

    /// [`Status`] of this [`Contract`].
    pub status: Status,

    /// [`DateTime`] when this [`Contract`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Contract`] was last updated, if ever.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: Option<UpdateDateTime>,
}

impl Contract {
    /// Returns whether this [`Contract`] is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// ID of a [`Contract`].
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

/// Name of the municipality a [`Contract`] is signed with.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct MunicipalityName(String);

impl MunicipalityName {
    /// Creates a new [`MunicipalityName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`MunicipalityName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`MunicipalityName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for MunicipalityName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `MunicipalityName`")
    }
}

/// Description of a [`Contract`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 512
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

define_kind! {
    #[doc = "Status of a [`Contract`]."]
    enum Status {
        #[doc = "[`Contract`] is in force."]
        Active = 1,

        #[doc = "[`Contract`] is suspended or ran out."]
        Inactive = 2,
    }
}

/// Marker type describing a [`Contract`] taking effect.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a [`Contract`] running out.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// [`Date`] when a [`Contract`] takes effect.
///
/// [`Date`]: common::Date
pub type StartDate = DateOf<(Contract, Start)>;

/// [`Date`] when a [`Contract`] runs out.
///
/// [`Date`]: common::Date
pub type EndDate = DateOf<(Contract, End)>;

/// [`DateTime`] when a [`Contract`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Contract, unit::Creation)>;

/// [`DateTime`] when a [`Contract`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type UpdateDateTime = DateTimeOf<(Contract, unit::Update)>;
