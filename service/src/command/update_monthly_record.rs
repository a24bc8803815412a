//! [`Command`] for updating an existing [`MonthlyRecord`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{monthly_record, MonthlyRecord},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating the reported figures of a [`MonthlyRecord`].
#[derive(Clone, Debug)]
pub struct UpdateMonthlyRecord {
    /// ID of the [`MonthlyRecord`] to update.
    pub id: monthly_record::Id,

    /// New revenue figure.
    pub revenue: Money,

    /// New expenses figure.
    pub expenses: Money,

    /// New number of employees.
    pub employees_count: monthly_record::EmployeesCount,

    /// New free-form notes, if any.
    pub notes: Option<monthly_record::Notes>,
}

impl<Db> Command<UpdateMonthlyRecord> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<MonthlyRecord>, monthly_record::Id>>,
            Ok = Option<MonthlyRecord>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<MonthlyRecord, monthly_record::Id>>,
            Err = Traced<database::Error>,
        > + Database<Update<MonthlyRecord>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = MonthlyRecord;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateMonthlyRecord,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateMonthlyRecord {
            id,
            revenue,
            expenses,
            employees_count,
            notes,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `MonthlyRecord`.
        tx.execute(Lock(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut record = tx
            .execute(Select(By::<Option<MonthlyRecord>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        record.revenue = revenue;
        record.expenses = expenses;
        record.employees_count = employees_count;
        record.notes = notes;
        record.updated_at = Some(DateTime::now().coerce());

        tx.execute(Update(record.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(record)
    }
}

/// Error of [`UpdateMonthlyRecord`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`MonthlyRecord`] with the provided ID does not exist.
    #[display("`MonthlyRecord(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] monthly_record::Id),
}
