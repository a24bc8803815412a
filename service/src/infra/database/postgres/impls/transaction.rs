//! [`Transaction`]-related [`Database`] implementations.

use std::ops::RangeInclusive;

use common::{
    money,
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{transaction, Transaction},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Restores a [`Transaction`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn from_row(row: &tokio_postgres::Row) -> Transaction {
    Transaction {
        id: row.get("id"),
        kind: row.get("kind"),
        category: row.get("category"),
        payment_method: row.get("payment_method"),
        description: row.get("description"),
        amount: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("amount"),
        )),
        due_on: row.get("due_on"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl<C> Database<Select<By<Vec<Transaction>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Transaction>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Transaction>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, kind, category, payment_method, description, \
                   amount, due_on, \
                   created_at, updated_at \
            FROM transactions \
            ORDER BY due_on DESC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C>
    Database<
        Select<By<Vec<Transaction>, RangeInclusive<transaction::DueDate>>>,
    > for Postgres<C>
where
    C: Connection,
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
        let (start, end) = (*range.start(), *range.end());

        const SQL: &str = "\
            SELECT id, kind, category, payment_method, description, \
                   amount, due_on, \
                   created_at, updated_at \
            FROM transactions \
            WHERE due_on BETWEEN $1::DATE AND $2::DATE \
            ORDER BY due_on DESC";
        Ok(self
            .query(SQL, &[&start, &end])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Transaction>, transaction::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Transaction>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Transaction>, transaction::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: transaction::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, kind, category, payment_method, description, \
                   amount, due_on, \
                   created_at, updated_at \
            FROM transactions \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Insert<Transaction>> for Postgres<C>
where
    C: Connection,
    Self:
        Database<Update<Transaction>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(transaction): Insert<Transaction>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(transaction))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Transaction>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(transaction): Update<Transaction>,
    ) -> Result<Self::Ok, Self::Err> {
        let Transaction {
            id,
            kind,
            category,
            payment_method,
            description,
            amount,
            due_on,
            created_at,
            updated_at,
        } = transaction;

        const SQL: &str = "\
            INSERT INTO transactions (\
                id, kind, category, payment_method, description, \
                amount, due_on, \
                created_at, updated_at\
            ) \
            VALUES (\
                $1::UUID, \
                $2::INT2, $3::INT2, $4::INT2, $5::VARCHAR, \
                $6::NUMERIC, $7::DATE, \
                $8::TIMESTAMPTZ, $9::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET kind = excluded.kind, \
                category = excluded.category, \
                payment_method = excluded.payment_method, \
                description = excluded.description, \
                amount = excluded.amount, \
                due_on = excluded.due_on, \
                updated_at = excluded.updated_at";
        self.query(
            SQL,
            &[
                &id,
                &kind,
                &category,
                &payment_method,
                &description,
                &amount.amount,
                &due_on,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Transaction, transaction::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Transaction, transaction::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: transaction::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM transactions \
            WHERE id = $1::UUID";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
