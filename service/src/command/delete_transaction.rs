//! [`Command`] for deleting a [`Transaction`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{transaction, Transaction},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Transaction`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteTransaction {
    /// ID of the [`Transaction`] to delete.
    pub id: transaction::Id,
}

impl<Db> Command<DeleteTransaction> for Service<Db>
where
    Db: Database<
            Delete<By<Transaction, transaction::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteTransaction { id }: DeleteTransaction,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Delete(By::<Transaction, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

/// Error of [`DeleteTransaction`] [`Command`] execution.
pub type ExecutionError = database::Error;
