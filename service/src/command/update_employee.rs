//! [`Command`] for updating an existing [`Employee`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, employee, supplier::Linkage, Contract, Employee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Employee`].
///
/// Activity of an [`Employee`] is not editable here: it only changes through
/// a [`DismissEmployee`] [`Command`].
///
/// [`DismissEmployee`]: super::DismissEmployee
#[derive(Clone, Debug)]
pub struct UpdateEmployee {
    /// ID of the [`Employee`] to update.
    pub id: employee::Id,

    /// New full name of the [`Employee`].
    pub name: employee::Name,

    /// New role of the [`Employee`].
    pub role: employee::Role,

    /// New [`Linkage`] of the [`Employee`].
    pub linkage: Linkage,

    /// New day the [`Employee`] was hired.
    pub hired_on: employee::HireDate,
}

impl<Db> Command<UpdateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Employee, employee::Id>>,
            Err = Traced<database::Error>,
        > + Database<Update<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateEmployee {
            id,
            name,
            role,
            linkage,
            hired_on,
        } = cmd;

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

        let mut employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        if let Linkage::Contract(contract_id) = linkage {
            tx.execute(Select(By::<Option<Contract>, _>::new(contract_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ContractNotExists(contract_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        employee.name = name;
        employee.role = role;
        employee.linkage = linkage;
        employee.hired_on = hired_on;
        employee.updated_at = Some(DateTime::now().coerce());

        tx.execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(employee)
    }
}

/// Error of [`UpdateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID does not exist.
    #[display("`Employee(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] employee::Id),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),
}
