//! [`Command`] for creating a new [`MonthlyRecord`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, monthly_record, Contract, MonthlyRecord},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`MonthlyRecord`].
///
/// At most one [`MonthlyRecord`] may exist per [`Contract`] per
/// [`monthly_record::Period`].
#[derive(Clone, Debug)]
pub struct CreateMonthlyRecord {
    /// ID of the [`Contract`] the new [`MonthlyRecord`] belongs to.
    pub contract_id: contract::Id,

    /// [`monthly_record::Period`] the new [`MonthlyRecord`] reports.
    pub period: monthly_record::Period,

    /// Revenue of the [`Contract`] within the period.
    pub revenue: Money,

    /// Expenses of the [`Contract`] within the period.
    pub expenses: Money,

    /// Number of employees working the [`Contract`] within the period.
    pub employees_count: monthly_record::EmployeesCount,

    /// Free-form notes, if any.
    pub notes: Option<monthly_record::Notes>,
}

impl<Db> Command<CreateMonthlyRecord> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<
                    Option<MonthlyRecord>,
                    (contract::Id, monthly_record::Period),
                >,
            >,
            Ok = Option<MonthlyRecord>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Contract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<Insert<MonthlyRecord>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = MonthlyRecord;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateMonthlyRecord,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateMonthlyRecord {
            contract_id,
            period,
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

        // Avoid concurrent reporting upon the same `Contract`.
        tx.execute(Lock(By::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Select(By::<Option<Contract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let existing = tx
            .execute(Select(By::<Option<MonthlyRecord>, _>::new((
                contract_id,
                period,
            ))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::PeriodAlreadyRecorded(period)));
        }

        let record = MonthlyRecord {
            id: monthly_record::Id::new(),
            contract_id,
            period,
            revenue,
            expenses,
            employees_count,
            notes,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        tx.execute(Insert(record.clone()))
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

/// Error of [`CreateMonthlyRecord`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// [`MonthlyRecord`] for the provided period already exists.
    #[display("`MonthlyRecord` for `{_0}` period is already recorded")]
    PeriodAlreadyRecorded(#[error(not(source))] monthly_record::Period),
}
