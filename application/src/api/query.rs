//! GraphQL [`Query`]s definitions.

use common::date::Window;
use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Contract` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "contract",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn contract(
        id: api::contract::Id,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(query::contract::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ContractError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all `Contract`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "contracts",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn contracts(ctx: &Context) -> Result<Vec<api::Contract>, Error> {
        ctx.service()
            .execute(query::contracts::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|contracts| {
                contracts.into_iter().map(Into::into).collect()
            })
    }

    /// Returns all `MonthlyRecord`s of the specified `Contract`, newest
    /// period first.
    #[tracing::instrument(
        skip_all,
        fields(
            contract_id = %contract_id,
            gql.name = "monthlyRecords",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn monthly_records(
        contract_id: api::contract::Id,
        ctx: &Context,
    ) -> Result<Vec<api::MonthlyRecord>, Error> {
        ctx.service()
            .execute(query::monthly_records::OfContract::by(
                contract_id.into(),
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|records| records.into_iter().map(Into::into).collect())
    }

    /// Returns all `Supplier`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "suppliers",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn suppliers(ctx: &Context) -> Result<Vec<api::Supplier>, Error> {
        ctx.service()
            .execute(query::suppliers::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|suppliers| {
                suppliers.into_iter().map(Into::into).collect()
            })
    }

    /// Returns all `Transaction`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "transactions",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn transactions(
        ctx: &Context,
    ) -> Result<Vec<api::Transaction>, Error> {
        ctx.service()
            .execute(query::transactions::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|transactions| {
                transactions.into_iter().map(Into::into).collect()
            })
    }

    /// Returns the `Employee` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "employee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(query::employee::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| EmployeeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all `Employee`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "employees",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employees(ctx: &Context) -> Result<Vec<api::Employee>, Error> {
        ctx.service()
            .execute(query::employees::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|employees| {
                employees.into_iter().map(Into::into).collect()
            })
    }

    /// Returns all `Dismissal`s with the dismissed employees' names, newest
    /// first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "dismissals",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn dismissals(
        ctx: &Context,
    ) -> Result<Vec<api::employee::Dismissal>, Error> {
        ctx.service()
            .execute(query::dismissals::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|dismissals| {
                dismissals.into_iter().map(Into::into).collect()
            })
    }

    /// Returns all `Vacation`s with the vacationing employees' names, newest
    /// first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "vacations",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn vacations(
        ctx: &Context,
    ) -> Result<Vec<api::employee::Vacation>, Error> {
        ctx.service()
            .execute(query::vacations::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|vacations| {
                vacations.into_iter().map(Into::into).collect()
            })
    }

    /// Assembles the financial dashboard of a single calendar month.
    ///
    /// The `month` is a `YYYY-MM` token, defaulting to the current calendar
    /// month when omitted.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_MONTH_TOKEN` - the provided `month` is not a valid
    ///                           `YYYY-MM` token.
    #[tracing::instrument(
        skip_all,
        fields(
            month = ?month,
            gql.name = "financialSummary",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn financial_summary(
        month: Option<String>,
        ctx: &Context,
    ) -> Result<api::report::Dashboard, Error> {
        let window = Window::resolve(month.as_deref())
            .map_err(|_| MonthError::InvalidToken.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::report::FinancialSummary { window })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum ContractError {
        #[code = "CONTRACT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Contract` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum EmployeeError {
        #[code = "EMPLOYEE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Employee` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum MonthError {
        #[code = "INVALID_MONTH_TOKEN"]
        #[status = BAD_REQUEST]
        #[message = "Month must be a valid `YYYY-MM` token"]
        InvalidToken,
    }
}
