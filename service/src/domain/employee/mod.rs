//! [`Employee`] definitions.

pub mod dismissal;
pub mod vacation;

use common::{unit, DateOf, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::supplier::Linkage;
#[cfg(doc)]
use crate::domain::Contract;

pub use self::{dismissal::Dismissal, vacation::Vacation};

/// Worker employed by the company.
#[derive(Clone, Debug)]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// [`Name`] of this [`Employee`].
    pub name: Name,

    /// [`Role`] of this [`Employee`].
    pub role: Role,

    /// [`Linkage`] of this [`Employee`].
    pub linkage: Linkage,

    /// Whether this [`Employee`] is still employed.
    ///
    /// Flips to `false` once a [`Dismissal`] is registered.
    pub active: bool,

    /// Day this [`Employee`] was hired.
    pub hired_on: HireDate,

    /// [`DateTime`] when this [`Employee`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Employee`] was last updated, if ever.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: Option<UpdateDateTime>,
}

/// ID of an [`Employee`].
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

/// Full name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Role an [`Employee`] works in.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Role(String);

impl Role {
    /// Creates a new [`Role`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `role` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Creates a new [`Role`] if the given `role` is valid.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Option<Self> {
        let role = role.into();
        Self::check(&role).then_some(Self(role))
    }

    /// Checks whether the given `role` is a valid [`Role`].
    fn check(role: impl AsRef<str>) -> bool {
        let role = role.as_ref();
        role.trim() == role && !role.is_empty() && role.len() <= 256
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Role`")
    }
}

/// Marker type describing an [`Employee`] being hired.
#[derive(Clone, Copy, Debug)]
pub struct Hire;

/// [`Date`] when an [`Employee`] was hired.
///
/// [`Date`]: common::Date
pub type HireDate = DateOf<(Employee, Hire)>;

/// [`DateTime`] when an [`Employee`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Employee, unit::Creation)>;

/// [`DateTime`] when an [`Employee`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type UpdateDateTime = DateTimeOf<(Employee, unit::Update)>;
