//! [`FinancialSummary`] definition.

use std::{collections::BTreeMap, ops::RangeInclusive};

use common::{
    date::{Window, MONTH_ABBREVIATIONS},
    operations::{By, Select},
    Date, Money, Percent,
};
use derive_more::Display;
use futures::future;
use rust_decimal::Decimal;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{Dismissal, Employee, Vacation};
use crate::{
    domain::{
        contract,
        employee::{dismissal, vacation},
        monthly_record, supplier, transaction, Contract, MonthlyRecord,
        Supplier, Transaction,
    },
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] to assemble the financial dashboard of a single calendar month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FinancialSummary {
    /// Calendar-month [`Window`] to aggregate.
    pub window: Window,
}

/// Output of the [`FinancialSummary`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Total income of the month.
    pub total_income: Money,

    /// Total expenses of the month, across every cost source.
    pub total_expenses: Money,

    /// `total_income` minus `total_expenses`.
    pub balance: Money,

    /// Headquarters operating costs, broken down by category.
    pub internal_costs: InternalCosts,

    /// Total paid to [`Supplier`]s within the month.
    pub suppliers_cost: Money,

    /// Total cost of [`Dismissal`]s within the month, penalties included.
    pub dismissals_cost: Money,

    /// Total cost of [`Vacation`]s starting within the month.
    pub vacations_cost: Money,

    /// Chart series of net values bucketed by month, in calendar order.
    pub monthly_data: Vec<MonthlyBucket>,

    /// Revenue of all [`Contract`]s, with a per-[`Contract`] breakdown.
    pub contracts_revenue: ContractsRevenue,

    /// Flat list of the month's financial events, newest first.
    pub monthly_details: Vec<MonthlyDetail>,

    /// Percentage breakdown of the month's money flows.
    pub shares: Shares,
}

/// Headquarters operating costs of a month, by [`transaction::Category`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InternalCosts {
    /// Office rent.
    pub rent: Money,

    /// Electric power.
    pub power: Money,

    /// Internet access.
    pub internet: Money,

    /// Maintenance of the headquarters.
    pub maintenance: Money,
}

impl InternalCosts {
    /// Returns the sum of all categories.
    #[must_use]
    pub fn total(&self) -> Money {
        Money::brl(
            self.rent.amount
                + self.power.amount
                + self.internet.amount
                + self.maintenance.amount,
        )
    }
}

/// Net value of a single month bucket in the chart series.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthlyBucket {
    /// Brazilian-Portuguese month abbreviation.
    pub month: &'static str,

    /// Net value of the bucket. Negative when expenses dominate.
    pub value: Money,
}

/// Revenue of all [`Contract`]s within a month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractsRevenue {
    /// Sum of `revenue` over all rows.
    pub total: Money,

    /// One row per existing [`Contract`], zero-valued rows included.
    pub by_contract: Vec<ByContract>,
}

/// Per-[`Contract`] row of a [`ContractsRevenue`] breakdown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ByContract {
    /// ID of the [`Contract`].
    pub contract_id: contract::Id,

    /// Municipality of the [`Contract`].
    pub municipality_name: contract::MunicipalityName,

    /// Revenue reported for the [`Contract`] within the month.
    pub revenue: Money,

    /// Expenses reported for the [`Contract`] within the month.
    pub expenses: Money,

    /// `revenue` minus `expenses`.
    pub balance: Money,
}

/// Single financial event of a month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthlyDetail {
    /// Day the event happened.
    pub date: Date,

    /// Human-readable description of the event.
    pub description: String,

    /// [`DetailCategory`] of the event.
    pub category: DetailCategory,

    /// Whether the event is an income or an expense.
    pub kind: transaction::Kind,

    /// Amount of the event.
    pub amount: Money,
}

/// Category of a [`MonthlyDetail`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum DetailCategory {
    /// Headquarters operating cost.
    #[display("{_0}")]
    Internal(transaction::Category),

    /// [`Supplier`] payment.
    #[display("Fornecedor")]
    Supplier,

    /// [`Dismissal`] of an [`Employee`].
    #[display("Baixa de Funcionário")]
    Dismissal,

    /// [`Vacation`] of an [`Employee`].
    #[display("Férias de Funcionário")]
    Vacation,

    /// [`Contract`] revenue or expenses.
    #[display("Contrato")]
    Contract,
}

/// Percentage breakdown of a month's money flows.
///
/// `revenue_by_contracts` is a share of total income; the rest are shares of
/// total expenses. All six are re-normalized together to sum to `100`, so
/// individual values are not meaningful against their own denominators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shares {
    /// Share of income coming from [`Contract`]s.
    pub revenue_by_contracts: Percent,

    /// Share of expenses reported by [`Contract`]s.
    pub expenses_by_contracts: Percent,

    /// Share of expenses paid to [`Supplier`]s.
    pub expenses_by_suppliers: Percent,

    /// Share of expenses spent on the headquarters.
    pub expenses_by_internal: Percent,

    /// Share of expenses spent on [`Dismissal`]s.
    pub expenses_by_dismissals: Percent,

    /// Share of expenses spent on [`Vacation`]s.
    pub expenses_by_vacations: Percent,
}

impl<Db> Query<FinancialSummary> for Service<Db>
where
    Db: Database<
            Select<
                By<Vec<Transaction>, RangeInclusive<transaction::DueDate>>,
            >,
            Ok = Vec<Transaction>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Supplier>, RangeInclusive<supplier::PaymentDate>>>,
            Ok = Vec<Supplier>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<
                    Vec<read::dismissal::Named>,
                    RangeInclusive<dismissal::DismissalDate>,
                >,
            >,
            Ok = Vec<read::dismissal::Named>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<
                    Vec<read::vacation::Named>,
                    RangeInclusive<vacation::StartDate>,
                >,
            >,
            Ok = Vec<read::vacation::Named>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Contract>, ()>>,
            Ok = Vec<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<
                    Vec<MonthlyRecord>,
                    (
                        contract::Id,
                        RangeInclusive<monthly_record::CreationDateTime>,
                    ),
                >,
            >,
            Ok = Vec<MonthlyRecord>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    #[expect(clippy::too_many_lines, reason = "single fold over all stores")]
    async fn execute(
        &self,
        FinancialSummary { window }: FinancialSummary,
    ) -> Result<Self::Ok, Self::Err> {
        let db = self.database();

        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut contracts_expenses = Decimal::ZERO;
        let mut suppliers_cost = Decimal::ZERO;
        let mut dismissals_cost = Decimal::ZERO;
        let mut vacations_cost = Decimal::ZERO;
        let mut internal = [Decimal::ZERO; 4];
        let mut series = BTreeMap::<u8, Decimal>::new();
        let mut details = Vec::new();

        let mut transactions = db
            .execute(Select(By::<Vec<Transaction>, _>::new(window.dates())))
            .await
            .map_err(tracerr::wrap!())?;
        transactions.sort_by(|a, b| b.due_on.cmp(&a.due_on));
        for t in &transactions {
            if t.kind != transaction::Kind::Expense || !t.category.is_internal()
            {
                continue;
            }
            let amount = t.amount.amount;
            let slot = transaction::Category::INTERNAL
                .iter()
                .position(|c| *c == t.category)
                .unwrap_or_default();
            internal[slot] += amount;
            total_expenses += amount;
            details.push(MonthlyDetail {
                date: t.due_on.coerce(),
                description: t.description.to_string(),
                category: DetailCategory::Internal(t.category),
                kind: transaction::Kind::Expense,
                amount: Money::brl(amount),
            });
            *series.entry(t.due_on.month_number()).or_default() -= amount;
        }

        let (mut suppliers, mut dismissals, mut vacations) = futures::try_join!(
            db.execute(Select(By::<Vec<Supplier>, _>::new(window.dates()))),
            db.execute(Select(By::<Vec<read::dismissal::Named>, _>::new(
                window.dates(),
            ))),
            db.execute(Select(By::<Vec<read::vacation::Named>, _>::new(
                window.dates(),
            ))),
        )
        .map_err(tracerr::wrap!())?;

        suppliers.sort_by(|a, b| b.paid_on.cmp(&a.paid_on));
        for s in &suppliers {
            let Some(paid_on) = s.paid_on else {
                continue;
            };
            let amount = s.paid_value.amount;
            suppliers_cost += amount;
            total_expenses += amount;
            details.push(MonthlyDetail {
                date: paid_on.coerce(),
                description: format!("{} - {}", s.service, s.name),
                category: DetailCategory::Supplier,
                kind: transaction::Kind::Expense,
                amount: Money::brl(amount),
            });
            *series.entry(paid_on.month_number()).or_default() -= amount;
        }

        dismissals.sort_by(|a, b| {
            b.dismissal.dismissed_on.cmp(&a.dismissal.dismissed_on)
        });
        for d in &dismissals {
            let cost = d.dismissal.total_cost().amount;
            dismissals_cost += cost;
            total_expenses += cost;
            let municipality = d
                .contract_municipality
                .as_ref()
                .map_or("Sede", AsRef::<str>::as_ref);
            details.push(MonthlyDetail {
                date: d.dismissal.dismissed_on.coerce(),
                description: format!(
                    "Baixa - {} ({municipality})",
                    d.employee_name,
                ),
                category: DetailCategory::Dismissal,
                kind: transaction::Kind::Expense,
                amount: Money::brl(cost),
            });
            *series
                .entry(d.dismissal.dismissed_on.month_number())
                .or_default() -= cost;
        }

        vacations.sort_by(|a, b| {
            b.vacation.starts_on.cmp(&a.vacation.starts_on)
        });
        for v in &vacations {
            let amount = v.vacation.amount.amount;
            vacations_cost += amount;
            total_expenses += amount;
            details.push(MonthlyDetail {
                date: v.vacation.starts_on.coerce(),
                description: format!("Férias - {}", v.employee_name),
                category: DetailCategory::Vacation,
                kind: transaction::Kind::Expense,
                amount: Money::brl(amount),
            });
            *series
                .entry(v.vacation.starts_on.month_number())
                .or_default() -= amount;
        }

        let contracts = db
            .execute(Select(By::<Vec<Contract>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        let records = future::try_join_all(contracts.iter().map(|c| {
            db.execute(Select(By::<Vec<MonthlyRecord>, _>::new((
                c.id,
                window.datetimes(),
            ))))
        }))
        .await
        .map_err(tracerr::wrap!())?;

        let mut contracts_total = Decimal::ZERO;
        let mut by_contract = Vec::with_capacity(contracts.len());
        for (contract, mut records) in contracts.iter().zip(records) {
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            let mut revenue = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;
            for r in &records {
                revenue += r.revenue.amount;
                expenses += r.expenses.amount;

                if r.revenue.amount > Decimal::ZERO {
                    details.push(MonthlyDetail {
                        date: r.created_at.date().coerce(),
                        description: format!(
                            "Receita - {}",
                            contract.municipality_name,
                        ),
                        category: DetailCategory::Contract,
                        kind: transaction::Kind::Income,
                        amount: Money::brl(r.revenue.amount),
                    });
                }
                if r.expenses.amount > Decimal::ZERO {
                    details.push(MonthlyDetail {
                        date: r.created_at.date().coerce(),
                        description: format!(
                            "Despesas - {}",
                            contract.municipality_name,
                        ),
                        category: DetailCategory::Contract,
                        kind: transaction::Kind::Expense,
                        amount: Money::brl(r.expenses.amount),
                    });
                }
                *series
                    .entry(r.created_at.date().month_number())
                    .or_default() += r.revenue.amount - r.expenses.amount;
            }

            contracts_total += revenue;
            total_income += revenue;
            contracts_expenses += expenses;
            total_expenses += expenses;

            by_contract.push(ByContract {
                contract_id: contract.id,
                municipality_name: contract.municipality_name.clone(),
                revenue: Money::brl(revenue),
                expenses: Money::brl(expenses),
                balance: Money::brl(revenue - expenses),
            });
        }

        // Stable sort, so same-day events keep per-store processing order.
        details.sort_by(|a, b| b.date.cmp(&a.date));

        let internal_total = internal.iter().copied().sum::<Decimal>();
        let shares = Shares::normalized([
            share(contracts_total, total_income),
            share(contracts_expenses, total_expenses),
            share(suppliers_cost, total_expenses),
            share(internal_total, total_expenses),
            share(dismissals_cost, total_expenses),
            share(vacations_cost, total_expenses),
        ]);

        Ok(Output {
            total_income: Money::brl(total_income),
            total_expenses: Money::brl(total_expenses),
            balance: Money::brl(total_income - total_expenses),
            internal_costs: InternalCosts {
                rent: Money::brl(internal[0]),
                power: Money::brl(internal[1]),
                internet: Money::brl(internal[2]),
                maintenance: Money::brl(internal[3]),
            },
            suppliers_cost: Money::brl(suppliers_cost),
            dismissals_cost: Money::brl(dismissals_cost),
            vacations_cost: Money::brl(vacations_cost),
            monthly_data: series
                .into_iter()
                .map(|(month, value)| MonthlyBucket {
                    month: MONTH_ABBREVIATIONS[usize::from(month) - 1],
                    value: Money::brl(value),
                })
                .collect(),
            contracts_revenue: ContractsRevenue {
                total: Money::brl(contracts_total),
                by_contract,
            },
            monthly_details: details,
            shares,
        })
    }
}

/// Computes the raw percentage `numerator` takes of `denominator`, or zero
/// when the `denominator` is not positive.
fn share(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

impl Shares {
    /// Builds [`Shares`] from raw per-denominator percentages, re-normalizing
    /// them proportionally to sum to `100`.
    ///
    /// An all-zero input stays all-zero.
    fn normalized(raw: [Decimal; 6]) -> Self {
        let sum = raw.iter().copied().sum::<Decimal>();
        let scaled = |v: Decimal| {
            if sum > Decimal::ZERO {
                Percent::clamping(v * Decimal::ONE_HUNDRED / sum)
            } else {
                Percent::ZERO
            }
        };

        Self {
            revenue_by_contracts: scaled(raw[0]),
            expenses_by_contracts: scaled(raw[1]),
            expenses_by_suppliers: scaled(raw[2]),
            expenses_by_internal: scaled(raw[3]),
            expenses_by_dismissals: scaled(raw[4]),
            expenses_by_vacations: scaled(raw[5]),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::ops::RangeInclusive;

    use common::{
        date::Window,
        operations::{By, Select},
        Date, DateTime, Handler, Money,
    };
    use rust_decimal::Decimal;
    use tracerr::Traced;

    use super::{DetailCategory, FinancialSummary};
    use crate::{
        domain::{
            contract, employee, monthly_record, supplier, transaction,
            Contract, Dismissal, MonthlyRecord, Supplier, Transaction,
            Vacation,
        },
        infra::database,
        read, Service,
    };

    /// In-memory stand-in for the database, filtering rows the way the
    /// real selectors do.
    #[derive(Clone, Debug, Default)]
    struct InMemory {
        transactions: Vec<Transaction>,
        suppliers: Vec<Supplier>,
        dismissals: Vec<read::dismissal::Named>,
        vacations: Vec<read::vacation::Named>,
        contracts: Vec<Contract>,
        records: Vec<MonthlyRecord>,
    }

    impl
        Handler<
            Select<By<Vec<Transaction>, RangeInclusive<transaction::DueDate>>>,
        > for InMemory
    {
        type Ok = Vec<Transaction>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<
                By<Vec<Transaction>, RangeInclusive<transaction::DueDate>>,
            >,
        ) -> Result<Self::Ok, Self::Err> {
            let range = by.into_inner();
            Ok(self
                .transactions
                .iter()
                .filter(|t| range.contains(&t.due_on))
                .cloned()
                .collect())
        }
    }

    impl
        Handler<
            Select<By<Vec<Supplier>, RangeInclusive<supplier::PaymentDate>>>,
        > for InMemory
    {
        type Ok = Vec<Supplier>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<
                By<Vec<Supplier>, RangeInclusive<supplier::PaymentDate>>,
            >,
        ) -> Result<Self::Ok, Self::Err> {
            let range = by.into_inner();
            Ok(self
                .suppliers
                .iter()
                .filter(|s| s.paid_on.is_some_and(|d| range.contains(&d)))
                .cloned()
                .collect())
        }
    }

    impl
        Handler<
            Select<
                By<
                    Vec<read::dismissal::Named>,
                    RangeInclusive<employee::dismissal::DismissalDate>,
                >,
            >,
        > for InMemory
    {
        type Ok = Vec<read::dismissal::Named>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<
                By<
                    Vec<read::dismissal::Named>,
                    RangeInclusive<employee::dismissal::DismissalDate>,
                >,
            >,
        ) -> Result<Self::Ok, Self::Err> {
            let range = by.into_inner();
            Ok(self
                .dismissals
                .iter()
                .filter(|d| range.contains(&d.dismissal.dismissed_on))
                .cloned()
                .collect())
        }
    }

    impl
        Handler<
            Select<
                By<
                    Vec<read::vacation::Named>,
                    RangeInclusive<employee::vacation::StartDate>,
                >,
            >,
        > for InMemory
    {
        type Ok = Vec<read::vacation::Named>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<
                By<
                    Vec<read::vacation::Named>,
                    RangeInclusive<employee::vacation::StartDate>,
                >,
            >,
        ) -> Result<Self::Ok, Self::Err> {
            let range = by.into_inner();
            Ok(self
                .vacations
                .iter()
                .filter(|v| range.contains(&v.vacation.starts_on))
                .cloned()
                .collect())
        }
    }

    impl Handler<Select<By<Vec<Contract>, ()>>> for InMemory {
        type Ok = Vec<Contract>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<Contract>, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.contracts.clone())
        }
    }

    impl
        Handler<
            Select<
                By<
                    Vec<MonthlyRecord>,
                    (
                        contract::Id,
                        RangeInclusive<monthly_record::CreationDateTime>,
                    ),
                >,
            >,
        > for InMemory
    {
        type Ok = Vec<MonthlyRecord>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<
                By<
                    Vec<MonthlyRecord>,
                    (
                        contract::Id,
                        RangeInclusive<monthly_record::CreationDateTime>,
                    ),
                >,
            >,
        ) -> Result<Self::Ok, Self::Err> {
            let (contract_id, range) = by.into_inner();
            Ok(self
                .records
                .iter()
                .filter(|r| {
                    r.contract_id == contract_id
                        && range.contains(&r.created_at)
                })
                .cloned()
                .collect())
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(s: &str) -> Date {
        Date::from_iso8601(s).unwrap()
    }

    fn dt(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn window(token: &str) -> Window {
        Window::resolve(Some(token)).unwrap()
    }

    fn contract(municipality: &str) -> Contract {
        Contract {
            id: contract::Id::new(),
            municipality_name: contract::MunicipalityName::new(municipality)
                .unwrap(),
            description: contract::Description::new("Limpeza urbana")
                .unwrap(),
            starts_on: date("2024-01-01").coerce(),
            ends_on: date("2026-12-31").coerce(),
            status: contract::Status::Active,
            created_at: dt("2024-01-01T08:00:00Z").coerce(),
            updated_at: None,
        }
    }

    fn record(
        contract_id: contract::Id,
        revenue: &str,
        expenses: &str,
        created_at: &str,
    ) -> MonthlyRecord {
        MonthlyRecord {
            id: monthly_record::Id::new(),
            contract_id,
            period: monthly_record::Period::new(3, 2025).unwrap(),
            revenue: Money::brl(dec(revenue)),
            expenses: Money::brl(dec(expenses)),
            employees_count: 12.into(),
            notes: None,
            created_at: dt(created_at).coerce(),
            updated_at: None,
        }
    }

    fn expense(
        category: transaction::Category,
        amount: &str,
        due_on: &str,
    ) -> Transaction {
        Transaction {
            id: transaction::Id::new(),
            kind: transaction::Kind::Expense,
            category,
            payment_method: transaction::PaymentMethod::Pix,
            description: transaction::Description::new("Conta mensal")
                .unwrap(),
            amount: Money::brl(dec(amount)),
            due_on: date(due_on).coerce(),
            created_at: dt("2025-03-01T09:00:00Z").coerce(),
            updated_at: None,
        }
    }

    fn paid_supplier(
        name: &str,
        amount: &str,
        paid_on: &str,
    ) -> Supplier {
        Supplier {
            id: supplier::Id::new(),
            name: supplier::Name::new(name).unwrap(),
            service: supplier::Service::new("Coleta de entulho").unwrap(),
            document: supplier::Document::new("12345678000190").unwrap(),
            payment_method: transaction::PaymentMethod::Boleto,
            contract_value: Money::brl(dec(amount)),
            paid_value: Money::brl(dec(amount)),
            paid_on: Some(date(paid_on).coerce()),
            linkage: supplier::Linkage::Headquarters,
            created_at: dt("2025-03-01T09:00:00Z").coerce(),
            updated_at: None,
        }
    }

    fn dismissal(
        employee_name: &str,
        amount: &str,
        penalty: Option<&str>,
        dismissed_on: &str,
    ) -> read::dismissal::Named {
        read::dismissal::Named {
            dismissal: Dismissal {
                id: employee::dismissal::Id::new(),
                employee_id: employee::Id::new(),
                dismissed_on: date(dismissed_on).coerce(),
                amount: Money::brl(dec(amount)),
                penalty: penalty.map(|p| Money::brl(dec(p))),
                reason: None,
                created_at: dt("2025-03-01T09:00:00Z").coerce(),
            },
            employee_name: employee::Name::new(employee_name).unwrap(),
            contract_municipality: None,
        }
    }

    fn vacation(
        employee_name: &str,
        amount: &str,
        starts_on: &str,
    ) -> read::vacation::Named {
        let starts: employee::vacation::StartDate =
            date(starts_on).coerce();
        let ends: employee::vacation::EndDate =
            date(starts_on).coerce();
        read::vacation::Named {
            vacation: Vacation {
                id: employee::vacation::Id::new(),
                employee_id: employee::Id::new(),
                starts_on: starts,
                ends_on: ends,
                days_count: Vacation::span_days(starts, ends).unwrap(),
                amount: Money::brl(dec(amount)),
                reason: None,
                created_at: dt("2025-03-01T09:00:00Z").coerce(),
            },
            employee_name: employee::Name::new(employee_name).unwrap(),
        }
    }

    async fn summarize(db: InMemory, token: &str) -> super::Output {
        Service::new(db)
            .execute(FinancialSummary {
                window: window(token),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn empty_window_yields_zeroes() {
        let db = InMemory {
            contracts: vec![contract("Itaberaba")],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(out.total_income, Money::brl(Decimal::ZERO));
        assert_eq!(out.total_expenses, Money::brl(Decimal::ZERO));
        assert_eq!(out.balance, Money::brl(Decimal::ZERO));
        assert!(out.monthly_data.is_empty());
        assert!(out.monthly_details.is_empty());

        // The breakdown still carries a zero-valued row per contract.
        assert_eq!(out.contracts_revenue.by_contract.len(), 1);
        let row = &out.contracts_revenue.by_contract[0];
        assert_eq!(row.revenue, Money::brl(Decimal::ZERO));
        assert_eq!(row.expenses, Money::brl(Decimal::ZERO));
        assert_eq!(row.balance, Money::brl(Decimal::ZERO));

        let s = out.shares;
        for p in [
            s.revenue_by_contracts,
            s.expenses_by_contracts,
            s.expenses_by_suppliers,
            s.expenses_by_internal,
            s.expenses_by_dismissals,
            s.expenses_by_vacations,
        ] {
            assert_eq!(p.as_decimal(), Decimal::ZERO);
        }
    }

    #[tokio::test]
    async fn sums_every_cost_source_into_the_balance() {
        let c = contract("Feira de Santana");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Rent,
                "3000",
                "2025-03-05",
            )],
            suppliers: vec![paid_supplier(
                "Transportes Silva",
                "5000",
                "2025-03-10",
            )],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "50000",
                "35000",
                "2025-03-15T12:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(out.total_income, Money::brl(dec("50000")));
        assert_eq!(out.total_expenses, Money::brl(dec("43000")));
        assert_eq!(out.balance, Money::brl(dec("7000")));
        assert_eq!(out.suppliers_cost, Money::brl(dec("5000")));
        assert_eq!(out.internal_costs.rent, Money::brl(dec("3000")));
        assert_eq!(out.internal_costs.total(), Money::brl(dec("3000")));
        assert_eq!(out.contracts_revenue.total, Money::brl(dec("50000")));

        let row = &out.contracts_revenue.by_contract[0];
        assert_eq!(row.revenue, Money::brl(dec("50000")));
        assert_eq!(row.expenses, Money::brl(dec("35000")));
        assert_eq!(row.balance, Money::brl(dec("15000")));
    }

    #[tokio::test]
    async fn dismissal_penalty_defaults_to_zero() {
        let db = InMemory {
            dismissals: vec![
                dismissal("Maria Souza", "2000", Some("500"), "2025-03-07"),
                dismissal("João Lima", "1500", None, "2025-03-09"),
            ],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(out.dismissals_cost, Money::brl(dec("4000")));
        assert_eq!(out.total_expenses, Money::brl(dec("4000")));
        assert_eq!(out.balance, Money::brl(dec("-4000")));
    }

    #[tokio::test]
    async fn shares_are_renormalized_to_sum_one_hundred() {
        let c = contract("Ilhéus");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Power,
                "1000",
                "2025-03-03",
            )],
            suppliers: vec![paid_supplier("Limpadora Azul", "1000", "2025-03-04")],
            dismissals: vec![dismissal("Ana Dias", "1000", None, "2025-03-05")],
            vacations: vec![vacation("Rui Costa", "1000", "2025-03-06")],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "8000",
                "4000",
                "2025-03-10T12:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;
        let s = out.shares;

        let sum = s.revenue_by_contracts.as_decimal()
            + s.expenses_by_contracts.as_decimal()
            + s.expenses_by_suppliers.as_decimal()
            + s.expenses_by_internal.as_decimal()
            + s.expenses_by_dismissals.as_decimal()
            + s.expenses_by_vacations.as_decimal();
        assert!(
            (sum - Decimal::ONE_HUNDRED).abs() < dec("0.0000001"),
            "shares sum to {sum}",
        );

        // Raw shares: 100 of income, 50/12.5/12.5/12.5/12.5 of expenses.
        // Re-normalized, income keeps the largest slice.
        assert!(
            s.revenue_by_contracts.as_decimal()
                > s.expenses_by_contracts.as_decimal(),
        );
        assert!(
            s.expenses_by_contracts.as_decimal()
                > s.expenses_by_suppliers.as_decimal(),
        );
        assert_eq!(
            s.expenses_by_suppliers.as_decimal(),
            s.expenses_by_internal.as_decimal(),
        );
    }

    #[tokio::test]
    async fn details_are_sorted_date_descending_despite_store_order() {
        let c = contract("Jequié");
        let contract_id = c.id;
        let db = InMemory {
            // Deliberately unordered inputs.
            transactions: vec![
                expense(transaction::Category::Internet, "100", "2025-03-02"),
                expense(transaction::Category::Rent, "200", "2025-03-20"),
            ],
            suppliers: vec![
                paid_supplier("Fornecedor A", "300", "2025-03-01"),
                paid_supplier("Fornecedor B", "400", "2025-03-25"),
            ],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "1000",
                "0",
                "2025-03-10T12:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        let dates = out
            .monthly_details
            .iter()
            .map(|d| d.date)
            .collect::<Vec<_>>();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(out.monthly_details.len(), 5);
        assert_eq!(out.monthly_details[0].date, date("2025-03-25"));
    }

    #[tokio::test]
    async fn same_day_details_keep_store_processing_order() {
        let c = contract("Ipiaú");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Maintenance,
                "100",
                "2025-03-10",
            )],
            suppliers: vec![paid_supplier("Empreiteira Sul", "200", "2025-03-10")],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "1000",
                "0",
                "2025-03-10T12:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        let categories = out
            .monthly_details
            .iter()
            .map(|d| d.category)
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                DetailCategory::Internal(transaction::Category::Maintenance),
                DetailCategory::Supplier,
                DetailCategory::Contract,
            ],
        );
    }

    #[tokio::test]
    async fn monthly_series_is_in_calendar_order() {
        // Window selects March, but record creation noise may not matter:
        // all contributions land in their own calendar buckets.
        let c = contract("Itabuna");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Rent,
                "500",
                "2025-03-28",
            )],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "2000",
                "700",
                "2025-03-02T12:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(out.monthly_data.len(), 1);
        assert_eq!(out.monthly_data[0].month, "mar");
        assert_eq!(out.monthly_data[0].value, Money::brl(dec("800")));
    }

    #[tokio::test]
    async fn is_idempotent() {
        let c = contract("Camaçari");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Power,
                "350",
                "2025-03-12",
            )],
            dismissals: vec![dismissal("Pedro Reis", "900", None, "2025-03-14")],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "4000",
                "1500",
                "2025-03-20T12:00:00Z",
            )],
            ..InMemory::default()
        };
        let svc = Service::new(db);

        let first = svc
            .execute(FinancialSummary {
                window: window("2025-03"),
            })
            .await
            .unwrap();
        let second = svc
            .execute(FinancialSummary {
                window: window("2025-03"),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn out_of_window_rows_are_ignored() {
        let c = contract("Eunápolis");
        let contract_id = c.id;
        let db = InMemory {
            transactions: vec![expense(
                transaction::Category::Rent,
                "999",
                "2025-04-01",
            )],
            suppliers: vec![paid_supplier("Fora do Mês", "999", "2025-02-28")],
            contracts: vec![c],
            records: vec![record(
                contract_id,
                "999",
                "999",
                "2025-04-01T00:00:00Z",
            )],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(out.total_income, Money::brl(Decimal::ZERO));
        assert_eq!(out.total_expenses, Money::brl(Decimal::ZERO));
        assert!(out.monthly_details.is_empty());
    }

    #[tokio::test]
    async fn headquarters_dismissal_is_labeled_sede() {
        let db = InMemory {
            dismissals: vec![dismissal("Carla Nunes", "800", None, "2025-03-03")],
            ..InMemory::default()
        };

        let out = summarize(db, "2025-03").await;

        assert_eq!(
            out.monthly_details[0].description,
            "Baixa - Carla Nunes (Sede)",
        );
    }
}
