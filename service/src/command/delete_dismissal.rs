//! [`Command`] for deleting a [`Dismissal`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee::dismissal, Dismissal},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Dismissal`].
///
/// The dismissed [`Employee`] stays inactive: undoing a dismissal is a
/// bookkeeping correction, not a rehire.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Copy, Debug)]
pub struct DeleteDismissal {
    /// ID of the [`Dismissal`] to delete.
    pub id: dismissal::Id,
}

impl<Db> Command<DeleteDismissal> for Service<Db>
where
    Db: Database<
            Select<By<Option<Dismissal>, dismissal::Id>>,
            Ok = Option<Dismissal>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Dismissal, dismissal::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteDismissal { id }: DeleteDismissal,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.database()
            .execute(Select(By::<Option<Dismissal>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        self.database()
            .execute(Delete(By::<Dismissal, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(())
    }
}

/// Error of [`DeleteDismissal`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Dismissal`] with the provided ID does not exist.
    #[display("`Dismissal(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] dismissal::Id),
}
