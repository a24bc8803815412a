//! [`Command`] for deleting a [`MonthlyRecord`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{monthly_record, MonthlyRecord},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`MonthlyRecord`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteMonthlyRecord {
    /// ID of the [`MonthlyRecord`] to delete.
    pub id: monthly_record::Id,
}

impl<Db> Command<DeleteMonthlyRecord> for Service<Db>
where
    Db: Database<
            Delete<By<MonthlyRecord, monthly_record::Id>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteMonthlyRecord { id }: DeleteMonthlyRecord,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Delete(By::<MonthlyRecord, _>::new(id)))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

/// Error of [`DeleteMonthlyRecord`] [`Command`] execution.
pub type ExecutionError = database::Error;
