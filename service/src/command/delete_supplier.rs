//! [`Command`] for deleting a [`Supplier`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{supplier, Supplier},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Supplier`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteSupplier {
    /// ID of the [`Supplier`] to delete.
    pub id: supplier::Id,
}

impl<Db> Command<DeleteSupplier> for Service<Db>
where
    Db: Database<
            Delete<By<Supplier, supplier::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteSupplier { id }: DeleteSupplier,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Delete(By::<Supplier, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

/// Error of [`DeleteSupplier`] [`Command`] execution.
pub type ExecutionError = database::Error;
