//! [`Dashboard`] report definition.

use common::{Date, Money, Percent};
use derive_more::From;
use juniper::graphql_object;
use service::query::report::financial_summary;

use crate::{api, Context};

/// Financial dashboard of a single calendar month.
#[derive(Clone, Debug, From)]
pub struct Dashboard(financial_summary::Output);

/// Financial dashboard of a single calendar month.
#[graphql_object(name = "FinancialSummary", context = Context)]
impl Dashboard {
    /// Total income of the month.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.totalIncome",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_income(&self) -> Money {
        self.0.total_income
    }

    /// Total expenses of the month, across every cost source.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.totalExpenses",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_expenses(&self) -> Money {
        self.0.total_expenses
    }

    /// Total income minus total expenses.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.balance",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn balance(&self) -> Money {
        self.0.balance
    }

    /// Headquarters operating costs, broken down by category.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.internalCosts",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn internal_costs(&self) -> InternalCosts {
        self.0.internal_costs.into()
    }

    /// Total paid to `Supplier`s within the month.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.suppliersCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn suppliers_cost(&self) -> Money {
        self.0.suppliers_cost
    }

    /// Total cost of `Dismissal`s within the month, penalties included.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.dismissalsCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn dismissals_cost(&self) -> Money {
        self.0.dismissals_cost
    }

    /// Total cost of `Vacation`s starting within the month.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.vacationsCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn vacations_cost(&self) -> Money {
        self.0.vacations_cost
    }

    /// Chart series of net values bucketed by month, in calendar order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.monthlyData",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn monthly_data(&self) -> Vec<MonthlyBucket> {
        self.0.monthly_data.iter().copied().map(Into::into).collect()
    }

    /// Revenue of all `Contract`s, with a per-`Contract` breakdown.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.contractsRevenue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contracts_revenue(&self) -> ContractsRevenue {
        self.0.contracts_revenue.clone().into()
    }

    /// Single financial events of the month, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.monthlyDetails",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn monthly_details(&self) -> Vec<MonthlyDetail> {
        self.0.monthly_details.iter().cloned().map(Into::into).collect()
    }

    /// Percentage breakdown of the month's money flows.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinancialSummary.shares",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn shares(&self) -> Shares {
        self.0.shares.into()
    }
}

/// Headquarters operating costs of a month.
#[derive(Clone, Copy, Debug, From)]
pub struct InternalCosts(financial_summary::InternalCosts);

/// Headquarters operating costs of a month.
#[graphql_object(name = "InternalCosts", context = Context)]
impl InternalCosts {
    /// Office rent costs.
    #[must_use]
    pub fn rent(&self) -> Money {
        self.0.rent
    }

    /// Electric power costs.
    #[must_use]
    pub fn power(&self) -> Money {
        self.0.power
    }

    /// Internet access costs.
    #[must_use]
    pub fn internet(&self) -> Money {
        self.0.internet
    }

    /// Headquarters maintenance costs.
    #[must_use]
    pub fn maintenance(&self) -> Money {
        self.0.maintenance
    }

    /// Sum of all categories.
    #[must_use]
    pub fn total(&self) -> Money {
        self.0.total()
    }
}

/// Net value of a single month bucket in the chart series.
#[derive(Clone, Copy, Debug, From)]
pub struct MonthlyBucket(financial_summary::MonthlyBucket);

/// Net value of a single month bucket in the chart series.
#[graphql_object(name = "MonthlyBucket", context = Context)]
impl MonthlyBucket {
    /// Brazilian-Portuguese month abbreviation.
    #[must_use]
    pub fn month(&self) -> &str {
        self.0.month
    }

    /// Net value of the bucket. Negative when expenses dominate.
    #[must_use]
    pub fn value(&self) -> Money {
        self.0.value
    }
}

/// Revenue of all `Contract`s within a month.
#[derive(Clone, Debug, From)]
pub struct ContractsRevenue(financial_summary::ContractsRevenue);

/// Revenue of all `Contract`s within a month.
#[graphql_object(name = "ContractsRevenue", context = Context)]
impl ContractsRevenue {
    /// Sum of revenue over all rows.
    #[must_use]
    pub fn total(&self) -> Money {
        self.0.total
    }

    /// One row per existing `Contract`, zero-valued rows included.
    #[must_use]
    pub fn by_contract(&self) -> Vec<ByContract> {
        self.0.by_contract.iter().cloned().map(Into::into).collect()
    }
}

/// Per-`Contract` row of a `ContractsRevenue` breakdown.
#[derive(Clone, Debug)]
pub struct ByContract {
    /// Underlying [`financial_summary::ByContract`] row.
    row: financial_summary::ByContract,

    /// `Contract` this row is about.
    contract: api::Contract,
}

impl From<financial_summary::ByContract> for ByContract {
    fn from(row: financial_summary::ByContract) -> Self {
        Self {
            // SAFETY: `ByContract` is constructed from a valid `contract_id`.
            #[expect(unsafe_code, reason = "invariants are preserved")]
            contract: unsafe { api::Contract::new_unchecked(row.contract_id) },
            row,
        }
    }
}

/// Per-`Contract` row of a `ContractsRevenue` breakdown.
#[graphql_object(name = "ContractsRevenueRow", context = Context)]
impl ByContract {
    /// `Contract` this row is about.
    #[must_use]
    pub fn contract(&self) -> &api::Contract {
        &self.contract
    }

    /// Municipality of the `Contract`.
    #[must_use]
    pub fn municipality_name(&self) -> api::contract::MunicipalityName {
        self.row.municipality_name.clone().into()
    }

    /// Revenue reported for the `Contract` within the month.
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.row.revenue
    }

    /// Expenses reported for the `Contract` within the month.
    #[must_use]
    pub fn expenses(&self) -> Money {
        self.row.expenses
    }

    /// Revenue minus expenses.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.row.balance
    }
}

/// Single financial event of a month.
#[derive(Clone, Debug, From)]
pub struct MonthlyDetail(financial_summary::MonthlyDetail);

/// Single financial event of a month.
#[graphql_object(name = "MonthlyDetail", context = Context)]
impl MonthlyDetail {
    /// Day the event happened.
    #[must_use]
    pub fn date(&self) -> Date {
        self.0.date
    }

    /// Human-readable description of the event.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0.description
    }

    /// Category label of the event.
    #[must_use]
    pub fn category(&self) -> String {
        self.0.category.to_string()
    }

    /// Whether the event is an income or an expense.
    #[must_use]
    pub fn kind(&self) -> api::transaction::Kind {
        self.0.kind.into()
    }

    /// Amount of the event.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.amount
    }
}

/// Percentage breakdown of a month's money flows.
///
/// All six shares are re-normalized together to sum to `100`.
#[derive(Clone, Copy, Debug, From)]
pub struct Shares(financial_summary::Shares);

/// Percentage breakdown of a month's money flows.
#[graphql_object(name = "FinancialSummaryShares", context = Context)]
impl Shares {
    /// Share of income coming from `Contract`s.
    #[must_use]
    pub fn revenue_by_contracts(&self) -> Percent {
        self.0.revenue_by_contracts
    }

    /// Share of expenses reported by `Contract`s.
    #[must_use]
    pub fn expenses_by_contracts(&self) -> Percent {
        self.0.expenses_by_contracts
    }

    /// Share of expenses paid to `Supplier`s.
    #[must_use]
    pub fn expenses_by_suppliers(&self) -> Percent {
        self.0.expenses_by_suppliers
    }

    /// Share of expenses spent on the headquarters.
    #[must_use]
    pub fn expenses_by_internal(&self) -> Percent {
        self.0.expenses_by_internal
    }

    /// Share of expenses spent on `Dismissal`s.
    #[must_use]
    pub fn expenses_by_dismissals(&self) -> Percent {
        self.0.expenses_by_dismissals
    }

    /// Share of expenses spent on `Vacation`s.
    #[must_use]
    pub fn expenses_by_vacations(&self) -> Percent {
        self.0.expenses_by_vacations
    }
}
