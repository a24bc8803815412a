//! [`Employee`]-related definitions.

pub mod dismissal;
pub mod vacation;

use common::{Date, DateTime};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

pub use self::{dismissal::Dismissal, vacation::Vacation};

/// Worker employed by the company.
#[derive(Clone, Debug, From)]
pub struct Employee(domain::Employee);

/// Worker employed by the company.
#[graphql_object(context = Context)]
impl Employee {
    /// Unique identifier of this `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Full name of this `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Role this `Employee` works in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.role",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn role(&self) -> Role {
        self.0.role.clone().into()
    }

    /// Indicator whether this `Employee` works at the headquarters rather
    /// than any single `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.isHeadquarter",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn is_headquarter(&self) -> bool {
        self.0.linkage == domain::supplier::Linkage::Headquarters
    }

    /// `Contract` this `Employee` works, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.contract",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract(&self) -> Option<api::Contract> {
        self.0.linkage.contract_id().map(|id| {
            #[expect(
                unsafe_code,
                reason = "`Employee` loaded from repository guarantees \
                          `Contract` existence"
            )]
            unsafe {
                api::Contract::new_unchecked(id)
            }
        })
    }

    /// Indicator whether this `Employee` is still employed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.active",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn active(&self) -> bool {
        self.0.active
    }

    /// Day this `Employee` was hired.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.hiredOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn hired_on(&self) -> Date {
        self.0.hired_on.coerce()
    }

    /// `DateTime` when this `Employee` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Employee` was last updated, if ever.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|at| at.coerce())
    }
}

/// Unique identifier of an `Employee`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::employee::Id)]
#[into(domain::employee::Id)]
#[graphql(name = "EmployeeId", transparent)]
pub struct Id(Uuid);

/// Full name of an `Employee`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "EmployeeName",
    with = scalar::Via::<domain::employee::Name>,
)]
pub struct Name(domain::employee::Name);

/// Role an `Employee` works in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "EmployeeRole",
    with = scalar::Via::<domain::employee::Role>,
)]
pub struct Role(domain::employee::Role);
