//! [`Employee`]-related [`Database`] implementations.

use std::ops::RangeInclusive;

use common::{
    money,
    operations::{By, Delete, Insert, Lock, Select, Update},
    Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{
        contract,
        employee::{self, dismissal, vacation},
        supplier::Linkage,
        Dismissal, Employee, Vacation,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Restores an [`Employee`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn from_row(row: &tokio_postgres::Row) -> Employee {
    Employee {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        linkage: Linkage::from_parts(
            row.get("is_headquarter"),
            row.get("contract_id"),
        )
        .expect("`is_headquarter` and `contract_id` columns are consistent"),
        active: row.get("active"),
        hired_on: row.get("hired_on"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl<C> Database<Select<By<Option<Employee>, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Employee>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, name, role, is_headquarter, contract_id, \
                   active, hired_on, \
                   created_at, updated_at \
            FROM employees \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Select<By<Vec<Employee>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Employee>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, role, is_headquarter, contract_id, \
                   active, hired_on, \
                   created_at, updated_at \
            FROM employees \
            ORDER BY created_at DESC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Employee>, contract::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Employee>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let contract_id: contract::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, name, role, is_headquarter, contract_id, \
                   active, hired_on, \
                   created_at, updated_at \
            FROM employees \
            WHERE contract_id = $1::UUID \
                  AND active \
            ORDER BY created_at DESC";
        Ok(self
            .query(SQL, &[&contract_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Employee>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Employee>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(employee): Insert<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(employee))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Employee>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(employee): Update<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        let Employee {
            id,
            name,
            role,
            linkage,
            active,
            hired_on,
            created_at,
            updated_at,
        } = employee;
        let is_headquarter = linkage == Linkage::Headquarters;
        let contract_id = linkage.contract_id();

        const SQL: &str = "\
            INSERT INTO employees (\
                id, name, role, is_headquarter, contract_id, \
                active, hired_on, \
                created_at, updated_at\
            ) \
            VALUES (\
                $1::UUID, \
                $2::VARCHAR, $3::VARCHAR, $4::BOOL, $5::UUID, \
                $6::BOOL, $7::DATE, \
                $8::TIMESTAMPTZ, $9::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET name = excluded.name, \
                role = excluded.role, \
                is_headquarter = excluded.is_headquarter, \
                contract_id = excluded.contract_id, \
                active = excluded.active, \
                hired_on = excluded.hired_on, \
                updated_at = excluded.updated_at";
        self.query(
            SQL,
            &[
                &id,
                &name,
                &role,
                &is_headquarter,
                &contract_id,
                &active,
                &hired_on,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Employee, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Employee, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM employees \
            WHERE id = $1::UUID";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Employee, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Employee, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO employees_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

/// Restores a [`Dismissal`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn dismissal_from_row(row: &tokio_postgres::Row) -> Dismissal {
    Dismissal {
        id: row.get("id"),
        employee_id: row.get("employee_id"),
        dismissed_on: row.get("dismissed_on"),
        amount: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("amount"),
        )),
        penalty: row
            .get::<_, Option<Decimal>>("penalty")
            .map(|p| Money::brl(money::non_negative(Some(p)))),
        reason: row.get("reason"),
        created_at: row.get("created_at"),
    }
}

/// Restores a [`read::dismissal::Named`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn named_dismissal_from_row(
    row: &tokio_postgres::Row,
) -> read::dismissal::Named {
    read::dismissal::Named {
        dismissal: dismissal_from_row(row),
        employee_name: row.get("employee_name"),
        contract_municipality: row.get("contract_municipality"),
    }
}

impl<C> Database<Insert<Dismissal>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(dismissal): Insert<Dismissal>,
    ) -> Result<Self::Ok, Self::Err> {
        let Dismissal {
            id,
            employee_id,
            dismissed_on,
            amount,
            penalty,
            reason,
            created_at,
        } = dismissal;
        let penalty = penalty.map(|p| p.amount);

        const SQL: &str = "\
            INSERT INTO employee_dismissals (\
                id, employee_id, dismissed_on, \
                amount, penalty, reason, \
                created_at\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, $3::DATE, \
                $4::NUMERIC, $5::NUMERIC, $6::VARCHAR, \
                $7::TIMESTAMPTZ\
            )";
        self.query(
            SQL,
            &[
                &id,
                &employee_id,
                &dismissed_on,
                &amount.amount,
                &penalty,
                &reason,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Select<By<Option<Dismissal>, dismissal::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Dismissal>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Dismissal>, dismissal::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: dismissal::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, employee_id, dismissed_on, \
                   amount, penalty, reason, created_at \
            FROM employee_dismissals \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(dismissal_from_row))
    }
}

impl<C> Database<Select<By<Vec<Dismissal>, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Dismissal>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Dismissal>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let employee_id: employee::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, employee_id, dismissed_on, \
                   amount, penalty, reason, created_at \
            FROM employee_dismissals \
            WHERE employee_id = $1::UUID \
            ORDER BY dismissed_on DESC";
        Ok(self
            .query(SQL, &[&employee_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(dismissal_from_row)
            .collect())
    }
}

impl<C> Database<Update<Dismissal>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(dismissal): Update<Dismissal>,
    ) -> Result<Self::Ok, Self::Err> {
        let Dismissal {
            id,
            employee_id: _,
            dismissed_on,
            amount,
            penalty,
            reason,
            created_at: _,
        } = dismissal;
        let penalty = penalty.map(|p| p.amount);

        const SQL: &str = "\
            UPDATE employee_dismissals \
            SET dismissed_on = $2::DATE, \
                amount = $3::NUMERIC, \
                penalty = $4::NUMERIC, \
                reason = $5::VARCHAR \
            WHERE id = $1::UUID";
        self.query(
            SQL,
            &[&id, &dismissed_on, &amount.amount, &penalty, &reason],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Dismissal, dismissal::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Dismissal, dismissal::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: dismissal::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM employee_dismissals \
            WHERE id = $1::UUID";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<Vec<read::dismissal::Named>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::dismissal::Named>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<read::dismissal::Named>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT d.id, d.employee_id, d.dismissed_on, \
                   d.amount, d.penalty, d.reason, d.created_at, \
                   e.name AS employee_name, \
                   c.municipality_name AS contract_municipality \
            FROM employee_dismissals AS d \
            JOIN employees AS e ON e.id = d.employee_id \
            LEFT JOIN contracts AS c ON c.id = e.contract_id \
            ORDER BY d.dismissed_on DESC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(named_dismissal_from_row)
            .collect())
    }
}

impl<C>
    Database<
        Select<
            By<
                Vec<read::dismissal::Named>,
                RangeInclusive<dismissal::DismissalDate>,
            >,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::dismissal::Named>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                Vec<read::dismissal::Named>,
                RangeInclusive<dismissal::DismissalDate>,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let range = by.into_inner();
        let (start, end) = (*range.start(), *range.end());

        const SQL: &str = "\
            SELECT d.id, d.employee_id, d.dismissed_on, \
                   d.amount, d.penalty, d.reason, d.created_at, \
                   e.name AS employee_name, \
                   c.municipality_name AS contract_municipality \
            FROM employee_dismissals AS d \
            JOIN employees AS e ON e.id = d.employee_id \
            LEFT JOIN contracts AS c ON c.id = e.contract_id \
            WHERE d.dismissed_on BETWEEN $1::DATE AND $2::DATE \
            ORDER BY d.dismissed_on DESC";
        Ok(self
            .query(SQL, &[&start, &end])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(named_dismissal_from_row)
            .collect())
    }
}

/// Restores a [`Vacation`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn vacation_from_row(row: &tokio_postgres::Row) -> Vacation {
    Vacation {
        id: row.get("id"),
        employee_id: row.get("employee_id"),
        starts_on: row.get("starts_on"),
        ends_on: row.get("ends_on"),
        days_count: row.get("days_count"),
        amount: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("amount"),
        )),
        reason: row.get("reason"),
        created_at: row.get("created_at"),
    }
}

/// Restores a [`read::vacation::Named`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn named_vacation_from_row(
    row: &tokio_postgres::Row,
) -> read::vacation::Named {
    read::vacation::Named {
        vacation: vacation_from_row(row),
        employee_name: row.get("employee_name"),
    }
}

impl<C> Database<Select<By<Vec<Vacation>, employee::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Vacation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Vacation>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let employee_id: employee::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, employee_id, starts_on, ends_on, \
                   days_count, amount, reason, created_at \
            FROM employee_vacations \
            WHERE employee_id = $1::UUID \
            ORDER BY starts_on DESC";
        Ok(self
            .query(SQL, &[&employee_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(vacation_from_row)
            .collect())
    }
}

impl<C> Database<Insert<Vacation>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(vacation): Insert<Vacation>,
    ) -> Result<Self::Ok, Self::Err> {
        let Vacation {
            id,
            employee_id,
            starts_on,
            ends_on,
            days_count,
            amount,
            reason,
            created_at,
        } = vacation;

        const SQL: &str = "\
            INSERT INTO employee_vacations (\
                id, employee_id, starts_on, ends_on, days_count, \
                amount, reason, \
                created_at\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, $3::DATE, $4::DATE, $5::INT8, \
                $6::NUMERIC, $7::VARCHAR, \
                $8::TIMESTAMPTZ\
            )";
        self.query(
            SQL,
            &[
                &id,
                &employee_id,
                &starts_on,
                &ends_on,
                &days_count,
                &amount.amount,
                &reason,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Select<By<Vec<read::vacation::Named>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::vacation::Named>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<read::vacation::Named>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT v.id, v.employee_id, v.starts_on, v.ends_on, \
                   v.days_count, v.amount, v.reason, v.created_at, \
                   e.name AS employee_name \
            FROM employee_vacations AS v \
            JOIN employees AS e ON e.id = v.employee_id \
            ORDER BY v.starts_on DESC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(named_vacation_from_row)
            .collect())
    }
}

impl<C>
    Database<
        Select<
            By<Vec<read::vacation::Named>, RangeInclusive<vacation::StartDate>>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::vacation::Named>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<read::vacation::Named>, RangeInclusive<vacation::StartDate>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let range = by.into_inner();
        let (start, end) = (*range.start(), *range.end());

        const SQL: &str = "\
            SELECT v.id, v.employee_id, v.starts_on, v.ends_on, \
                   v.days_count, v.amount, v.reason, v.created_at, \
                   e.name AS employee_name \
            FROM employee_vacations AS v \
            JOIN employees AS e ON e.id = v.employee_id \
            WHERE v.starts_on BETWEEN $1::DATE AND $2::DATE \
            ORDER BY v.starts_on DESC";
        Ok(self
            .query(SQL, &[&start, &end])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(named_vacation_from_row)
            .collect())
    }
}
