//! [`Transaction`] definitions.

use common::{define_kind, unit, DateOf, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal ledger line of the headquarters.
///
/// Tracks operating costs (rent, power, internet, maintenance) that are not
/// attributable to any single contract.
#[derive(Clone, Debug)]
pub struct Transaction {
    /// ID of this [`Transaction`].
    pub id: Id,

    /// [`Kind`] of this [`Transaction`].
    pub kind: Kind,

    /// [`Category`] of this [`Transaction`].
    pub category: Category,

    /// [`PaymentMethod`] of this [`Transaction`].
    pub payment_method: PaymentMethod,

    /// [`Description`] of this [`Transaction`].
    pub description: Description,

    /// Amount of this [`Transaction`].
    pub amount: Money,

    /// Day this [`Transaction`] is due.
    pub due_on: DueDate,

    /// [`DateTime`] when this [`Transaction`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Transaction`] was last updated, if ever.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: Option<UpdateDateTime>,
}

/// ID of a [`Transaction`].
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

define_kind! {
    #[doc = "Kind of a [`Transaction`]."]
    enum Kind {
        #[doc = "Incoming [`Transaction`]."]
        Income = 1,

        #[doc = "Outgoing [`Transaction`]."]
        Expense = 2,
    }
}

define_kind! {
    #[doc = "Category of a [`Transaction`]."]
    enum Category {
        #[doc = "Office rent."]
        Rent = 1,

        #[doc = "Electric power."]
        Power = 2,

        #[doc = "Internet access."]
        Internet = 3,

        #[doc = "Maintenance of the headquarters."]
        Maintenance = 4,

        #[doc = "Anything else."]
        Other = 5,
    }
}

impl Category {
    /// Internal cost [`Category`]ies broken down by the dashboard.
    pub const INTERNAL: [Self; 4] =
        [Self::Rent, Self::Power, Self::Internet, Self::Maintenance];

    /// Returns whether this [`Category`] is an internal cost one.
    #[must_use]
    pub fn is_internal(self) -> bool {
        Self::INTERNAL.contains(&self)
    }
}

define_kind! {
    #[doc = "Method a payment is made with."]
    enum PaymentMethod {
        #[doc = "Instant PIX transfer."]
        Pix = 1,

        #[doc = "Regular bank transfer."]
        BankTransfer = 2,

        #[doc = "Boleto bank slip."]
        Boleto = 3,

        #[doc = "Payment card."]
        Card = 4,

        #[doc = "Cash."]
        Cash = 5,
    }
}

/// Description of a [`Transaction`].
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

/// Marker type describing a [`Transaction`] falling due.
#[derive(Clone, Copy, Debug)]
pub struct Due;

/// [`Date`] when a [`Transaction`] is due.
///
/// [`Date`]: common::Date
pub type DueDate = DateOf<(Transaction, Due)>;

/// [`DateTime`] when a [`Transaction`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Transaction, unit::Creation)>;

/// [`DateTime`] when a [`Transaction`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type UpdateDateTime = DateTimeOf<(Transaction, unit::Update)>;
