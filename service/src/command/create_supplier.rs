//! [`Command`] for creating a new [`Supplier`].

use common::{
    operations::{By, Insert, Select},
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

/// [`Command`] for creating a new [`Supplier`].
#[derive(Clone, Debug)]
pub struct CreateSupplier {
    /// Name of a new [`Supplier`].
    pub name: supplier::Name,

    /// Service a new [`Supplier`] provides.
    pub service: supplier::Service,

    /// CPF/CNPJ document of a new [`Supplier`].
    pub document: supplier::Document,

    /// Method a new [`Supplier`] is paid with.
    pub payment_method: transaction::PaymentMethod,

    /// Contracted value of the provided service.
    pub contract_value: Money,

    /// Value actually paid so far.
    pub paid_value: Money,

    /// Day the payment was made, if it was.
    pub paid_on: Option<supplier::PaymentDate>,

    /// [`Linkage`] of a new [`Supplier`].
    pub linkage: Linkage,
}

impl<Db> Command<CreateSupplier> for Service<Db>
where
    Db: Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<Insert<Supplier>, Err = Traced<database::Error>>,
{
    type Ok = Supplier;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateSupplier,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateSupplier {
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

        let supplier = Supplier {
            id: supplier::Id::new(),
            name,
            service,
            document,
            payment_method,
            contract_value,
            paid_value,
            paid_on,
            linkage,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        self.database()
            .execute(Insert(supplier.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(supplier)
    }
}

/// Error of [`CreateSupplier`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),
}
