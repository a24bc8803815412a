//! [`Command`] for updating an existing [`Contract`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, Contract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Contract`].
#[derive(Clone, Debug)]
pub struct UpdateContract {
    /// ID of the [`Contract`] to update.
    pub id: contract::Id,

    /// New municipality of the [`Contract`].
    pub municipality_name: contract::MunicipalityName,

    /// New description of the [`Contract`].
    pub description: contract::Description,

    /// New start day of the [`Contract`].
    pub starts_on: contract::StartDate,

    /// New end day of the [`Contract`].
    pub ends_on: contract::EndDate,

    /// New [`contract::Status`] of the [`Contract`].
    pub status: contract::Status,
}

impl<Db> Command<UpdateContract> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Contract>, contract::Id>>,
            Ok = Option<Contract>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Contract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<Update<Contract>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Contract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateContract {
            id,
            municipality_name,
            description,
            starts_on,
            ends_on,
            status,
        } = cmd;

        if ends_on.coerce() < starts_on {
            return Err(tracerr::new!(E::InvalidPeriod));
        }

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

        let mut contract = tx
            .execute(Select(By::<Option<Contract>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        contract.municipality_name = municipality_name;
        contract.description = description;
        contract.starts_on = starts_on;
        contract.ends_on = ends_on;
        contract.status = status;
        contract.updated_at = Some(DateTime::now().coerce());

        tx.execute(Update(contract.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(contract)
    }
}

/// Error of [`UpdateContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// End day of the [`Contract`] precedes its start day.
    #[display("`Contract` cannot end before it starts")]
    InvalidPeriod,

    /// [`Contract`] with the provided ID does not exist.
    #[display("`Contract(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] contract::Id),
}
