//! [`Supplier`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Payment record of an outside supplier.
#[derive(Clone, Debug, From)]
pub struct Supplier(domain::Supplier);

/// Payment record of an outside supplier.
#[graphql_object(context = Context)]
impl Supplier {
    /// Unique identifier of this `Supplier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of this `Supplier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Service this `Supplier` provides.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.service",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn service(&self) -> Service {
        self.0.service.clone().into()
    }

    /// CPF/CNPJ document of this `Supplier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.document",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn document(&self) -> Document {
        self.0.document.clone().into()
    }

    /// Method this `Supplier` is paid with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.paymentMethod",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn payment_method(&self) -> api::transaction::PaymentMethod {
        self.0.payment_method.into()
    }

    /// Contracted value of the provided service.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.contractValue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract_value(&self) -> Money {
        self.0.contract_value
    }

    /// Value actually paid so far.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.paidValue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn paid_value(&self) -> Money {
        self.0.paid_value
    }

    /// Day the payment was made, if it was.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.paidOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn paid_on(&self) -> Option<Date> {
        self.0.paid_on.map(|on| on.coerce())
    }

    /// Indicator whether this `Supplier` serves the headquarters rather than
    /// any single `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.isHeadquarter",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn is_headquarter(&self) -> bool {
        self.0.linkage == domain::supplier::Linkage::Headquarters
    }

    /// `Contract` this `Supplier` serves, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.contract",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract(&self) -> Option<api::Contract> {
        self.0.linkage.contract_id().map(|id| {
            #[expect(
                unsafe_code,
                reason = "`Supplier` loaded from repository guarantees \
                          `Contract` existence"
            )]
            unsafe {
                api::Contract::new_unchecked(id)
            }
        })
    }

    /// `DateTime` when this `Supplier` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Supplier` was last updated, if ever.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Supplier.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|at| at.coerce())
    }
}

/// Unique identifier of a `Supplier`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::supplier::Id)]
#[into(domain::supplier::Id)]
#[graphql(name = "SupplierId", transparent)]
pub struct Id(Uuid);

/// Name of a `Supplier`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "SupplierName",
    with = scalar::Via::<domain::supplier::Name>,
)]
pub struct Name(domain::supplier::Name);

/// Service a `Supplier` provides.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "SupplierService",
    with = scalar::Via::<domain::supplier::Service>,
)]
pub struct Service(domain::supplier::Service);

/// CPF or CNPJ document of a `Supplier`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "SupplierDocument",
    with = scalar::Via::<domain::supplier::Document>,
)]
pub struct Document(domain::supplier::Document);
