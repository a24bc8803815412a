//! [`MonthlyRecord`]-related [`Database`] implementations.

use std::ops::RangeInclusive;

use common::{
    money,
    operations::{By, Delete, Insert, Lock, Select, Update},
    Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{contract, monthly_record, MonthlyRecord},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Restores a [`MonthlyRecord`] from the provided [`Row`].
///
/// Monetary columns are coerced to non-negative amounts.
///
/// [`Row`]: tokio_postgres::Row
fn from_row(row: &tokio_postgres::Row) -> MonthlyRecord {
    let period = u8::try_from(row.get::<_, i16>("month"))
        .ok()
        .and_then(|m| monthly_record::Period::new(m, row.get("year")))
        .expect("stored `month` is a valid calendar month");
    MonthlyRecord {
        id: row.get("id"),
        contract_id: row.get("contract_id"),
        period,
        revenue: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("revenue"),
        )),
        expenses: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("expenses"),
        )),
        employees_count: row.get("employees_count"),
        notes: row.get("notes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl<C> Database<Select<By<Vec<MonthlyRecord>, contract::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<MonthlyRecord>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<MonthlyRecord>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let contract_id: contract::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, contract_id, month, year, \
                   revenue, expenses, employees_count, notes, \
                   created_at, updated_at \
            FROM monthly_records \
            WHERE contract_id = $1::UUID \
            ORDER BY year DESC, month DESC";
        Ok(self
            .query(SQL, &[&contract_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C>
    Database<
        Select<
            By<
                Vec<MonthlyRecord>,
                (
                    contract::Id,
                    RangeInclusive<monthly_record::CreationDateTime>,
                ),
            >,
        >,
    > for Postgres<C>
where
    C: Connection,
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
        let (start, end) = (*range.start(), *range.end());

        const SQL: &str = "\
            SELECT id, contract_id, month, year, \
                   revenue, expenses, employees_count, notes, \
                   created_at, updated_at \
            FROM monthly_records \
            WHERE contract_id = $1::UUID \
                  AND created_at BETWEEN $2::TIMESTAMPTZ \
                                     AND $3::TIMESTAMPTZ \
            ORDER BY created_at DESC";
        Ok(self
            .query(SQL, &[&contract_id, &start, &end])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Option<MonthlyRecord>, monthly_record::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<MonthlyRecord>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<MonthlyRecord>, monthly_record::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: monthly_record::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, contract_id, month, year, \
                   revenue, expenses, employees_count, notes, \
                   created_at, updated_at \
            FROM monthly_records \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C>
    Database<
        Select<
            By<Option<MonthlyRecord>, (contract::Id, monthly_record::Period)>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<MonthlyRecord>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<MonthlyRecord>, (contract::Id, monthly_record::Period)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (contract_id, period) = by.into_inner();
        let month = i16::from(period.month());
        let year = period.year();

        const SQL: &str = "\
            SELECT id, contract_id, month, year, \
                   revenue, expenses, employees_count, notes, \
                   created_at, updated_at \
            FROM monthly_records \
            WHERE contract_id = $1::UUID \
                  AND month = $2::INT2 \
                  AND year = $3::INT4";
        Ok(self
            .query_opt(SQL, &[&contract_id, &month, &year])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Insert<MonthlyRecord>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<MonthlyRecord>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(record): Insert<MonthlyRecord>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(record)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<MonthlyRecord>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(record): Update<MonthlyRecord>,
    ) -> Result<Self::Ok, Self::Err> {
        let MonthlyRecord {
            id,
            contract_id,
            period,
            revenue,
            expenses,
            employees_count,
            notes,
            created_at,
            updated_at,
        } = record;
        let month = i16::from(period.month());
        let year = period.year();

        const SQL: &str = "\
            INSERT INTO monthly_records (\
                id, contract_id, month, year, \
                revenue, expenses, employees_count, notes, \
                created_at, updated_at\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, \
                $3::INT2, $4::INT4, \
                $5::NUMERIC, $6::NUMERIC, $7::INT4, $8::VARCHAR, \
                $9::TIMESTAMPTZ, $10::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET revenue = excluded.revenue, \
                expenses = excluded.expenses, \
                employees_count = excluded.employees_count, \
                notes = excluded.notes, \
                updated_at = excluded.updated_at";
        self.query(
            SQL,
            &[
                &id,
                &contract_id,
                &month,
                &year,
                &revenue.amount,
                &expenses.amount,
                &employees_count,
                &notes,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<MonthlyRecord, monthly_record::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<MonthlyRecord, monthly_record::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: monthly_record::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM monthly_records \
            WHERE id = $1::UUID";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<MonthlyRecord, monthly_record::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<MonthlyRecord, monthly_record::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: monthly_record::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO monthly_records_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
