//! [`Command`] for deleting a [`Contract`].

use common::operations::{By, Commit, Delete, Lock, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, Contract, Employee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Contract`].
///
/// Refused while active [`Employee`]s are still linked to the [`Contract`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteContract {
    /// ID of the [`Contract`] to delete.
    pub id: contract::Id,
}

impl<Db> Command<DeleteContract> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Employee>, contract::Id>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Contract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Contract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteContract { id }: DeleteContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Contract`.
        tx.execute(Lock(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Select(By::<Option<Contract>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let employees = tx
            .execute(Select(By::<Vec<Employee>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !employees.is_empty() {
            return Err(tracerr::new!(E::EmployeesStillAssigned(id)));
        }

        tx.execute(Delete(By::<Contract, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(())
    }
}

/// Error of [`DeleteContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] contract::Id),

    /// Active [`Employee`]s are still linked to the [`Contract`].
    #[display("`Contract(id: {_0})` still has active employees assigned")]
    EmployeesStillAssigned(#[error(not(source))] contract::Id),
}
