//! [`Command`] for updating an existing [`Supplier`].

use common::{
    operations::{By, Select, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        contract,
        supplier::{self, Linkage},
        transaction, Contract, Supplier,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Supplier`].
#[derive(Clone, Debug)]
pub struct UpdateSupplier {
    /// ID of the [`Supplier`] to update.
    pub id: supplier::Id,

    /// New name of the [`Supplier`].
    pub name: supplier::Name,

    /// New service the [`Supplier`] provides.
    pub service: supplier::Service,

    /// New CPF/CNPJ document of the [`Supplier`].
    pub document: supplier::Document,

    /// New method the [`Supplier`] is paid with.
    pub payment_method: transaction::PaymentMethod,

    /// New contracted value of the provided service.
    pub contract_value: Money,

    /// New value actually paid so far.
    pub paid_value: Money,

    /// New day the payment was made, if it was.
    pub paid_on: Option<supplier::PaymentDate>,

    /// New [`Linkage`] of the [`Supplier`].
    pub linkage: Linkage,
}

impl<Db> Command<UpdateSupplier> for Service<Db>
where
    Db: Database<
            Select<By<Option<Supplier>, supplier::Id>>,
            Ok = Option<Supplier>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<Update<Supplier>, Err = Traced<database::Error>>,
{
    type Ok = Supplier;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateSupplier,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateSupplier {
            id,
            name,
            service,
            document,
            payment_method,
            contract_value,
            paid_value,
            paid_on,
            linkage,
        } = cmd;

        if let Linkage::Contract(contract_id) = linkage {
            self.database()
                .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ContractNotExists(contract_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        let mut supplier = self
            .database()
            .execute(Select(By::<Option<Supplier>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        supplier.name = name;
        supplier.service = service;
        supplier.document = document;
        supplier.payment_method = payment_method;
        supplier.contract_value = contract_value;
        supplier.paid_value = paid_value;
        supplier.paid_on = paid_on;
        supplier.linkage = linkage;
        supplier.updated_at = Some(DateTime::now().coerce());

        self.database()
            .execute(Update(supplier.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(supplier)
    }
}

/// Error of [`UpdateSupplier`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Supplier`] with the provided ID does not exist.
    #[display("`Supplier(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] supplier::Id),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),
}
