//! [`Vacation`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, read};
use uuid::Uuid;

use crate::{api, Context};

/// Paid vacation period of a single `Employee`.
#[derive(Clone, Debug, From)]
pub struct Vacation(read::vacation::Named);

/// Paid vacation period of a single `Employee`.
#[graphql_object(context = Context)]
impl Vacation {
    /// Unique identifier of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.vacation.id.into()
    }

    /// `Employee` this `Vacation` refers to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.employeeId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employee_id(&self) -> api::employee::Id {
        self.0.vacation.employee_id.into()
    }

    /// Name of the vacationing `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.employeeName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employee_name(&self) -> api::employee::Name {
        self.0.employee_name.clone().into()
    }

    /// First day of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.startsOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn starts_on(&self) -> Date {
        self.0.vacation.starts_on.coerce()
    }

    /// Last day of this `Vacation`, inclusive.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.endsOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn ends_on(&self) -> Date {
        self.0.vacation.ends_on.coerce()
    }

    /// Number of calendar days this `Vacation` spans.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.daysCount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn days_count(&self) -> i32 {
        i32::try_from(i64::from(self.0.vacation.days_count))
            .unwrap_or(i32::MAX)
    }

    /// Vacation pay amount.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.amount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.vacation.amount
    }

    /// Reason of this `Vacation`, if recorded.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.reason",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn reason(&self) -> Option<api::employee::dismissal::Reason> {
        self.0.vacation.reason.clone().map(Into::into)
    }

    /// `DateTime` when this `Vacation` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.vacation.created_at.coerce()
    }
}

/// Unique identifier of a `Vacation`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::employee::vacation::Id)]
#[into(domain::employee::vacation::Id)]
#[graphql(name = "VacationId", transparent)]
pub struct Id(Uuid);
