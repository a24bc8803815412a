//! [`Command`] for dismissing an [`Employee`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        employee::{self, dismissal},
        Dismissal, Employee,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for dismissing an [`Employee`].
///
/// Records a [`Dismissal`] and deactivates the [`Employee`] atomically.
#[derive(Clone, Debug)]
pub struct DismissEmployee {
    /// ID of the [`Employee`] to dismiss.
    pub employee_id: employee::Id,

    /// Day the [`Employee`] is dismissed.
    pub dismissed_on: dismissal::DismissalDate,

    /// Severance amount paid out.
    pub amount: Money,

    /// Contractual penalty paid on top, if any.
    pub penalty: Option<Money>,

    /// Reason of the dismissal, if recorded.
    pub reason: Option<dismissal::Reason>,
}

impl<Db> Command<DismissEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<Insert<Dismissal>, Err = Traced<database::Error>>
        + Database<Update<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Dismissal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DismissEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DismissEmployee {
            employee_id,
            dismissed_on,
            amount,
            penalty,
            reason,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Employee`.
        tx.execute(Lock(By::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        if !employee.active {
            return Err(tracerr::new!(E::AlreadyDismissed(employee_id)));
        }

        let dismissal = Dismissal {
            id: dismissal::Id::new(),
            employee_id,
            dismissed_on,
            amount,
            penalty,
            reason,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(dismissal.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        employee.active = false;
        employee.updated_at = Some(DateTime::now().coerce());
        tx.execute(Update(employee))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(dismissal)
    }
}

/// Error of [`DismissEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] with the provided ID is already dismissed.
    #[display("`Employee(id: {_0})` is already dismissed")]
    AlreadyDismissed(#[error(not(source))] employee::Id),
}
