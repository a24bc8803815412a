//! [`Command`] for deleting an [`Employee`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, Dismissal, Employee, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Employee`].
///
/// Refused while [`Dismissal`]s or [`Vacation`]s still reference the
/// [`Employee`]: those records resolve the employee name at read time, so
/// the [`Employee`] row must outlive them.
#[derive(Clone, Copy, Debug)]
pub struct DeleteEmployee {
    /// ID of the [`Employee`] to delete.
    pub id: employee::Id,
}

impl<Db> Command<DeleteEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Dismissal>, employee::Id>>,
            Ok = Vec<Dismissal>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Vacation>, employee::Id>>,
            Ok = Vec<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteEmployee { id }: DeleteEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Employee`.
        tx.execute(Lock(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Select(By::<Option<Employee>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let dismissals = tx
            .execute(Select(By::<Vec<Dismissal>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !dismissals.is_empty() {
            return Err(tracerr::new!(E::DismissalsStillRecorded(id)));
        }

        let vacations = tx
            .execute(Select(By::<Vec<Vacation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !vacations.is_empty() {
            return Err(tracerr::new!(E::VacationsStillRecorded(id)));
        }

        tx.execute(Delete(By::<Employee, _>::new(id)))
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

/// Error of [`DeleteEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] employee::Id),

    /// [`Dismissal`]s still reference the [`Employee`].
    #[display("`Employee(id: {_0})` still has dismissals recorded")]
    DismissalsStillRecorded(#[error(not(source))] employee::Id),

    /// [`Vacation`]s still reference the [`Employee`].
    #[display("`Employee(id: {_0})` still has vacations recorded")]
    VacationsStillRecorded(#[error(not(source))] employee::Id),
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Commit, Delete, Lock, Select, Transact},
        Date, DateTime, Money,
    };
    use rust_decimal::Decimal;
    use tracerr::Traced;

    use super::{Command as _, DeleteEmployee, ExecutionError};
    use crate::{
        domain::{
            employee::{self, dismissal},
            supplier::Linkage,
            Dismissal, Employee, Vacation,
        },
        infra::{database, Database},
        Service,
    };

    #[derive(Clone, Default)]
    struct InMemory {
        employee: Option<Employee>,
        dismissals: Vec<Dismissal>,
        vacations: Vec<Vacation>,
    }

    impl Database<Transact> for InMemory {
        type Ok = Self;
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
            Ok(self.clone())
        }
    }

    impl Database<Lock<By<Employee, employee::Id>>> for InMemory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Lock<By<Employee, employee::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    impl Database<Select<By<Option<Employee>, employee::Id>>> for InMemory {
        type Ok = Option<Employee>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Option<Employee>, employee::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.employee.clone())
        }
    }

    impl Database<Select<By<Vec<Dismissal>, employee::Id>>> for InMemory {
        type Ok = Vec<Dismissal>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<Dismissal>, employee::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.dismissals.clone())
        }
    }

    impl Database<Select<By<Vec<Vacation>, employee::Id>>> for InMemory {
        type Ok = Vec<Vacation>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<Vacation>, employee::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.vacations.clone())
        }
    }

    impl Database<Delete<By<Employee, employee::Id>>> for InMemory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Delete<By<Employee, employee::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    impl Database<Commit> for InMemory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    fn employee() -> Employee {
        Employee {
            id: employee::Id::new(),
            name: employee::Name::new("Carlos Pereira").unwrap(),
            role: employee::Role::new("Gari").unwrap(),
            linkage: Linkage::Headquarters,
            active: false,
            hired_on: Date::from_iso8601("2024-05-01").unwrap().coerce(),
            created_at: DateTime::now().coerce(),
            updated_at: None,
        }
    }

    fn dismissal(employee_id: employee::Id) -> Dismissal {
        Dismissal {
            id: dismissal::Id::new(),
            employee_id,
            dismissed_on: Date::from_iso8601("2025-02-28").unwrap().coerce(),
            amount: Money::brl(Decimal::new(2000, 0)),
            penalty: None,
            reason: None,
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn refuses_while_dismissals_reference_the_employee() {
        let e = employee();
        let id = e.id;
        let service = Service::new(InMemory {
            dismissals: vec![dismissal(id)],
            employee: Some(e),
            ..InMemory::default()
        });

        let res = service.execute(DeleteEmployee { id }).await;

        assert!(matches!(
            res.unwrap_err().as_ref(),
            ExecutionError::DismissalsStillRecorded(_),
        ));
    }

    #[tokio::test]
    async fn deletes_unreferenced_employee() {
        let e = employee();
        let id = e.id;
        let service = Service::new(InMemory {
            employee: Some(e),
            ..InMemory::default()
        });

        service.execute(DeleteEmployee { id }).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_missing_employee() {
        let service = Service::new(InMemory::default());

        let res = service
            .execute(DeleteEmployee {
                id: employee::Id::new(),
            })
            .await;

        assert!(matches!(
            res.unwrap_err().as_ref(),
            ExecutionError::NotExists(_),
        ));
    }
}
