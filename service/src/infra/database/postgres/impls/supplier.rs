//! [`Supplier`]-related [`Database`] implementations.

use std::ops::RangeInclusive;

use common::{
    money,
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{supplier, Supplier},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Restores a [`Supplier`] from the provided [`Row`].
///
/// [`Row`]: tokio_postgres::Row
fn from_row(row: &tokio_postgres::Row) -> Supplier {
    Supplier {
        id: row.get("id"),
        name: row.get("name"),
        service: row.get("service"),
        document: row.get("document"),
        payment_method: row.get("payment_method"),
        contract_value: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("contract_value"),
        )),
        paid_value: Money::brl(money::non_negative(
            row.get::<_, Option<Decimal>>("paid_value"),
        )),
        paid_on: row.get("paid_on"),
        linkage: supplier::Linkage::from_parts(
            row.get("is_headquarter"),
            row.get("contract_id"),
        )
        .expect("`is_headquarter` and `contract_id` columns are consistent"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl<C> Database<Select<By<Vec<Supplier>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Supplier>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Supplier>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, service, document, payment_method, \
                   contract_value, paid_value, paid_on, \
                   is_headquarter, contract_id, \
                   created_at, updated_at \
            FROM suppliers \
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

impl<C>
    Database<
        Select<By<Vec<Supplier>, RangeInclusive<supplier::PaymentDate>>>,
    > for Postgres<C>
where
    C: Connection,
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
        let (start, end) = (*range.start(), *range.end());

        const SQL: &str = "\
            SELECT id, name, service, document, payment_method, \
                   contract_value, paid_value, paid_on, \
                   is_headquarter, contract_id, \
                   created_at, updated_at \
            FROM suppliers \
            WHERE paid_on IS NOT NULL \
                  AND paid_on BETWEEN $1::DATE AND $2::DATE \
            ORDER BY paid_on DESC";
        Ok(self
            .query(SQL, &[&start, &end])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Supplier>, supplier::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Supplier>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Supplier>, supplier::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: supplier::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, name, service, document, payment_method, \
                   contract_value, paid_value, paid_on, \
                   is_headquarter, contract_id, \
                   created_at, updated_at \
            FROM suppliers \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Insert<Supplier>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Supplier>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(supplier): Insert<Supplier>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(supplier))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Supplier>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(supplier): Update<Supplier>,
    ) -> Result<Self::Ok, Self::Err> {
        let Supplier {
            id,
            name,
            service,
            document,
            payment_method,
            contract_value,
            paid_value,
            paid_on,
            linkage,
            created_at,
            updated_at,
        } = supplier;
        let is_headquarter = linkage == supplier::Linkage::Headquarters;
        let contract_id = linkage.contract_id();

        const SQL: &str = "\
            INSERT INTO suppliers (\
                id, name, service, document, payment_method, \
                contract_value, paid_value, paid_on, \
                is_headquarter, contract_id, \
                created_at, updated_at\
            ) \
            VALUES (\
                $1::UUID, \
                $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, $5::INT2, \
                $6::NUMERIC, $7::NUMERIC, $8::DATE, \
                $9::BOOL, $10::UUID, \
                $11::TIMESTAMPTZ, $12::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET name = excluded.name, \
                service = excluded.service, \
                document = excluded.document, \
                payment_method = excluded.payment_method, \
                contract_value = excluded.contract_value, \
                paid_value = excluded.paid_value, \
                paid_on = excluded.paid_on, \
                is_headquarter = excluded.is_headquarter, \
                contract_id = excluded.contract_id, \
                updated_at = excluded.updated_at";
        self.query(
            SQL,
            &[
                &id,
                &name,
                &service,
                &document,
                &payment_method,
                &contract_value.amount,
                &paid_value.amount,
                &paid_on,
                &is_headquarter,
                &contract_id,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Supplier, supplier::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Supplier, supplier::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: supplier::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM suppliers \
            WHERE id = $1::UUID";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
