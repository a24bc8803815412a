//! [`Command`] for creating a new [`Employee`].

use common::{
    operations::{By, Insert, Select},
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

/// [`Command`] for creating a new [`Employee`].
#[derive(Clone, Debug)]
pub struct CreateEmployee {
    /// Full name of a new [`Employee`].
    pub name: employee::Name,

    /// Role a new [`Employee`] works in.
    pub role: employee::Role,

    /// [`Linkage`] of a new [`Employee`].
    pub linkage: Linkage,

    /// Day a new [`Employee`] was hired.
    pub hired_on: employee::HireDate,
}

impl<Db> Command<CreateEmployee> for Service<Db>
where
    Db: Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employee>, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployee {
            name,
            role,
            linkage,
            hired_on,
        } = cmd;

        if let Linkage::Contract(contract_id) = linkage {
            self.database()
                .execute(Select(By::<Option<Contract>, _>::new(contract_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ContractNotExists(contract_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        let employee = Employee {
            id: employee::Id::new(),
            name,
            role,
            linkage,
            active: true,
            hired_on,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        self.database()
            .execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(employee)
    }
}

/// Error of [`CreateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),
}
