//! [`Dismissal`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, read};
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Termination of a single `Employee`.
#[derive(Clone, Debug, From)]
pub struct Dismissal(read::dismissal::Named);

/// Termination of a single `Employee`.
#[graphql_object(context = Context)]
impl Dismissal {
    /// Unique identifier of this `Dismissal`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.dismissal.id.into()
    }

    /// `Employee` this `Dismissal` refers to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.employeeId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employee_id(&self) -> api::employee::Id {
        self.0.dismissal.employee_id.into()
    }

    /// Name of the dismissed `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.employeeName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employee_name(&self) -> api::employee::Name {
        self.0.employee_name.clone().into()
    }

    /// Municipality of the `Contract` the dismissed `Employee` worked, if
    /// any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.contractMunicipality",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract_municipality(
        &self,
    ) -> Option<api::contract::MunicipalityName> {
        self.0.contract_municipality.clone().map(Into::into)
    }

    /// Day the `Employee` was dismissed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.dismissedOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn dismissed_on(&self) -> Date {
        self.0.dismissal.dismissed_on.coerce()
    }

    /// Severance amount paid out.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.amount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.dismissal.amount
    }

    /// Contractual penalty paid on top, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.penalty",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn penalty(&self) -> Option<Money> {
        self.0.dismissal.penalty
    }

    /// Full cost of this `Dismissal`, penalty included.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.totalCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.0.dismissal.total_cost()
    }

    /// Reason of this `Dismissal`, if recorded.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.reason",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        self.0.dismissal.reason.clone().map(Into::into)
    }

    /// `DateTime` when this `Dismissal` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Dismissal.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.dismissal.created_at.coerce()
    }
}

/// Unique identifier of a `Dismissal`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::employee::dismissal::Id)]
#[into(domain::employee::dismissal::Id)]
#[graphql(name = "DismissalId", transparent)]
pub struct Id(Uuid);

/// Reason of a `Dismissal` or a `Vacation`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "DismissalReason",
    with = scalar::Via::<domain::employee::dismissal::Reason>,
)]
pub struct Reason(domain::employee::dismissal::Reason);
