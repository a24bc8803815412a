//! [`Transaction`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Internal ledger line of the headquarters.
#[derive(Clone, Debug, From)]
pub struct Transaction(domain::Transaction);

/// Internal ledger line of the headquarters.
#[graphql_object(context = Context)]
impl Transaction {
    /// Unique identifier of this `Transaction`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Kind of this `Transaction`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Category of this `Transaction`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.category",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn category(&self) -> Category {
        self.0.category.into()
    }

    /// Method this `Transaction` is paid with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.paymentMethod",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        self.0.payment_method.into()
    }

    /// Description of this `Transaction`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn description(&self) -> Description {
        self.0.description.clone().into()
    }

    /// Amount of this `Transaction`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.amount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.amount
    }

    /// Day this `Transaction` is due.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.dueOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn due_on(&self) -> Date {
        self.0.due_on.coerce()
    }

    /// `DateTime` when this `Transaction` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Transaction` was last updated, if ever.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Transaction.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|at| at.coerce())
    }
}

/// Unique identifier of a `Transaction`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::transaction::Id)]
#[into(domain::transaction::Id)]
#[graphql(name = "TransactionId", transparent)]
pub struct Id(Uuid);

/// Description of a `Transaction`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "TransactionDescription",
    with = scalar::Via::<domain::transaction::Description>,
)]
pub struct Description(domain::transaction::Description);

/// Kind of a `Transaction`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "TransactionKind")]
pub enum Kind {
    /// Incoming `Transaction`.
    Income,

    /// Outgoing `Transaction`.
    Expense,
}

impl From<domain::transaction::Kind> for Kind {
    fn from(kind: domain::transaction::Kind) -> Self {
        use domain::transaction::Kind as K;
        match kind {
            K::Income => Self::Income,
            K::Expense => Self::Expense,
        }
    }
}

impl From<Kind> for domain::transaction::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => Self::Income,
            Kind::Expense => Self::Expense,
        }
    }
}

/// Category of a `Transaction`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "TransactionCategory")]
pub enum Category {
    /// Office rent.
    Rent,

    /// Electric power.
    Power,

    /// Internet access.
    Internet,

    /// Maintenance of the headquarters.
    Maintenance,

    /// Anything else.
    Other,
}

impl From<domain::transaction::Category> for Category {
    fn from(category: domain::transaction::Category) -> Self {
        use domain::transaction::Category as C;
        match category {
            C::Rent => Self::Rent,
            C::Power => Self::Power,
            C::Internet => Self::Internet,
            C::Maintenance => Self::Maintenance,
            C::Other => Self::Other,
        }
    }
}

impl From<Category> for domain::transaction::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Rent => Self::Rent,
            Category::Power => Self::Power,
            Category::Internet => Self::Internet,
            Category::Maintenance => Self::Maintenance,
            Category::Other => Self::Other,
        }
    }
}

/// Method a payment is made with.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum PaymentMethod {
    /// Instant PIX transfer.
    Pix,

    /// Regular bank transfer.
    BankTransfer,

    /// Boleto bank slip.
    Boleto,

    /// Payment card.
    Card,

    /// Cash.
    Cash,
}

impl From<domain::transaction::PaymentMethod> for PaymentMethod {
    fn from(method: domain::transaction::PaymentMethod) -> Self {
        use domain::transaction::PaymentMethod as M;
        match method {
            M::Pix => Self::Pix,
            M::BankTransfer => Self::BankTransfer,
            M::Boleto => Self::Boleto,
            M::Card => Self::Card,
            M::Cash => Self::Cash,
        }
    }
}

impl From<PaymentMethod> for domain::transaction::PaymentMethod {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Pix => Self::Pix,
            PaymentMethod::BankTransfer => Self::BankTransfer,
            PaymentMethod::Boleto => Self::Boleto,
            PaymentMethod::Card => Self::Card,
            PaymentMethod::Cash => Self::Cash,
        }
    }
}
