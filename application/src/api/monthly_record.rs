//! [`MonthlyRecord`]-related definitions.

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Reporting-period entry of a single `Contract`.
#[derive(Clone, Debug, From)]
pub struct MonthlyRecord(domain::MonthlyRecord);

/// Reporting-period entry of a single `Contract`.
#[graphql_object(context = Context)]
impl MonthlyRecord {
    /// Unique identifier of this `MonthlyRecord`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Contract` this `MonthlyRecord` belongs to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.contract",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract(&self) -> api::Contract {
        #[expect(
            unsafe_code,
            reason = "`MonthlyRecord` loaded from repository guarantees \
                      `Contract` existence"
        )]
        unsafe {
            api::Contract::new_unchecked(self.0.contract_id)
        }
    }

    /// Month this `MonthlyRecord` reports, `1` through `12`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.month",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn month(&self) -> i32 {
        self.0.period.month().into()
    }

    /// Year this `MonthlyRecord` reports.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.year",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.period.year()
    }

    /// Revenue of the `Contract` within the reported period.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.revenue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.0.revenue
    }

    /// Expenses of the `Contract` within the reported period.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.expenses",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn expenses(&self) -> Money {
        self.0.expenses
    }

    /// Number of employees working the `Contract` within the reported period.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.employeesCount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employees_count(&self) -> i32 {
        self.0.employees_count.into()
    }

    /// Free-form notes of this `MonthlyRecord`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.notes",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn notes(&self) -> Option<Notes> {
        self.0.notes.clone().map(Into::into)
    }

    /// `DateTime` when this `MonthlyRecord` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `MonthlyRecord` was last updated, if ever.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyRecord.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|at| at.coerce())
    }
}

/// Unique identifier of a `MonthlyRecord`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::monthly_record::Id)]
#[into(domain::monthly_record::Id)]
#[graphql(name = "MonthlyRecordId", transparent)]
pub struct Id(Uuid);

/// Free-form notes of a `MonthlyRecord`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "MonthlyRecordNotes",
    with = scalar::Via::<domain::monthly_record::Notes>,
)]
pub struct Notes(domain::monthly_record::Notes);
