//! [`Command`] for registering a [`Vacation`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        employee::{self, vacation},
        Employee, Vacation,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for registering a [`Vacation`] of an [`Employee`].
#[derive(Clone, Debug)]
pub struct RegisterVacation {
    /// ID of the vacationing [`Employee`].
    pub employee_id: employee::Id,

    /// First day of the [`Vacation`].
    pub starts_on: vacation::StartDate,

    /// Last day of the [`Vacation`], inclusive.
    pub ends_on: vacation::EndDate,

    /// Vacation pay amount.
    pub amount: Money,

    /// Reason of the [`Vacation`], if recorded.
    pub reason: Option<vacation::Reason>,
}

impl<Db> Command<RegisterVacation> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<Vacation>, Err = Traced<database::Error>>,
{
    type Ok = Vacation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RegisterVacation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RegisterVacation {
            employee_id,
            starts_on,
            ends_on,
            amount,
            reason,
        } = cmd;

        let days_count = Vacation::span_days(starts_on, ends_on)
            .ok_or(E::InvalidSpan)
            .map_err(tracerr::wrap!())?;

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        if !employee.active {
            return Err(tracerr::new!(E::NotActive(employee_id)));
        }

        let vacation = Vacation {
            id: vacation::Id::new(),
            employee_id,
            starts_on,
            ends_on,
            days_count,
            amount,
            reason,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(vacation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(vacation)
    }
}

/// Error of [`RegisterVacation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// End day of the [`Vacation`] precedes its start day.
    #[display("`Vacation` cannot end before it starts")]
    InvalidSpan,

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] with the provided ID is not active.
    #[display("`Employee(id: {_0})` is already dismissed")]
    NotActive(#[error(not(source))] employee::Id),
}
