//! [`Supplier`] definitions.

use common::{unit, DateOf, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{contract, transaction::PaymentMethod};
#[cfg(doc)]
use crate::domain::Contract;

/// Payment record of an outside supplier.
#[derive(Clone, Debug)]
pub struct Supplier {
    /// ID of this [`Supplier`].
    pub id: Id,

    /// [`Name`] of this [`Supplier`].
    pub name: Name,

    /// [`Service`] this [`Supplier`] provides.
    pub service: Service,

    /// [`Document`] (CPF/CNPJ) of this [`Supplier`].
    pub document: Document,

    /// [`PaymentMethod`] this [`Supplier`] is paid with.
    pub payment_method: PaymentMethod,

    /// Contracted value of the provided [`Service`].
    pub contract_value: Money,

    /// Value actually paid so far.
    pub paid_value: Money,

    /// Day the payment was made, if it was.
    pub paid_on: Option<PaymentDate>,

    /// [`Linkage`] of this [`Supplier`].
    pub linkage: Linkage,

    /// [`DateTime`] when this [`Supplier`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Supplier`] was last updated, if ever.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: Option<UpdateDateTime>,
}

/// Cost attribution of a [`Supplier`] or an employee.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Linkage {
    /// Headquarters-level cost, not attributable to any [`Contract`].
    Headquarters,

    /// Cost of servicing the specified [`Contract`].
    Contract(contract::Id),
}

impl Linkage {
    /// Returns ID of the linked [`Contract`], if any.
    #[must_use]
    pub fn contract_id(&self) -> Option<contract::Id> {
        match self {
            Self::Headquarters => None,
            Self::Contract(id) => Some(*id),
        }
    }

    /// Restores a [`Linkage`] from its stored parts.
    ///
    /// [`None`] is returned if the parts contradict each other.
    #[must_use]
    pub fn from_parts(
        is_headquarter: bool,
        contract_id: Option<contract::Id>,
    ) -> Option<Self> {
        match (is_headquarter, contract_id) {
            (true, None) => Some(Self::Headquarters),
            (false, Some(id)) => Some(Self::Contract(id)),
            (true, Some(_)) | (false, None) => None,
        }
    }
}

/// ID of a [`Supplier`].
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

/// Name of a [`Supplier`].
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

/// Service a [`Supplier`] provides.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Service(String);

impl Service {
    /// Creates a new [`Service`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `service` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(service: impl Into<String>) -> Self {
        Self(service.into())
    }

    /// Creates a new [`Service`] if the given `service` is valid.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Option<Self> {
        let service = service.into();
        Self::check(&service).then_some(Self(service))
    }

    /// Checks whether the given `service` is a valid [`Service`].
    fn check(service: impl AsRef<str>) -> bool {
        let service = service.as_ref();
        service.trim() == service
            && !service.is_empty()
            && service.len() <= 512
    }
}

impl FromStr for Service {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Service`")
    }
}

/// CPF or CNPJ document of a [`Supplier`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Document(String);

impl Document {
    /// Creates a new [`Document`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `document` is an 11-digit CPF
    /// or a 14-digit CNPJ.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(document: impl Into<String>) -> Self {
        Self(document.into())
    }

    /// Creates a new [`Document`] if the given `document` is valid.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Option<Self> {
        let document = document.into();
        Self::check(&document).then_some(Self(document))
    }

    /// Checks whether the given `document` is an 11-digit CPF or a 14-digit
    /// CNPJ.
    fn check(document: impl AsRef<str>) -> bool {
        let document = document.as_ref();
        matches!(document.len(), 11 | 14)
            && document.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for Document {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Document`")
    }
}

/// Marker type describing a [`Supplier`] payment.
#[derive(Clone, Copy, Debug)]
pub struct Payment;

/// [`Date`] when a [`Supplier`] was paid.
///
/// [`Date`]: common::Date
pub type PaymentDate = DateOf<(Supplier, Payment)>;

/// [`DateTime`] when a [`Supplier`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Supplier, unit::Creation)>;

/// [`DateTime`] when a [`Supplier`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type UpdateDateTime = DateTimeOf<(Supplier, unit::Update)>;

#[cfg(test)]
mod spec {
    use super::Linkage;
    use crate::domain::contract;

    #[test]
    fn linkage_restores_from_consistent_parts() {
        let id = contract::Id::new();

        assert_eq!(Linkage::from_parts(true, None), Some(Linkage::Headquarters));
        assert_eq!(
            Linkage::from_parts(false, Some(id)),
            Some(Linkage::Contract(id)),
        );
    }

    #[test]
    fn contradictory_linkage_parts_are_rejected() {
        assert_eq!(Linkage::from_parts(false, None), None);
        assert_eq!(
            Linkage::from_parts(true, Some(contract::Id::new())),
            None,
        );
    }
}
