//! [`Command`] for creating a new [`Contract`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, Contract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Contract`].
#[derive(Clone, Debug)]
pub struct CreateContract {
    /// Municipality a new [`Contract`] is signed with.
    pub municipality_name: contract::MunicipalityName,

    /// Description of a new [`Contract`].
    pub description: contract::Description,

    /// Day a new [`Contract`] takes effect.
    pub starts_on: contract::StartDate,

    /// Day a new [`Contract`] runs out.
    pub ends_on: contract::EndDate,
}

impl<Db> Command<CreateContract> for Service<Db>
where
    Db: Database<Insert<Contract>, Err = Traced<database::Error>>,
{
    type Ok = Contract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateContract {
            municipality_name,
            description,
            starts_on,
            ends_on,
        } = cmd;

        if ends_on.coerce() < starts_on {
            return Err(tracerr::new!(E::InvalidPeriod));
        }

        let contract = Contract {
            id: contract::Id::new(),
            municipality_name,
            description,
            starts_on,
            ends_on,
            status: contract::Status::Active,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        self.database()
            .execute(Insert(contract.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(contract)
    }
}

/// Error of [`CreateContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// End day of the [`Contract`] precedes its start day.
    #[display("`Contract` cannot end before it starts")]
    InvalidPeriod,
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, Date};
    use tracerr::Traced;

    use super::{Command as _, CreateContract, ExecutionError};
    use crate::{
        domain::{contract, Contract},
        infra::{database, Database},
        Service,
    };

    struct NoopDb;

    impl Database<Insert<Contract>> for NoopDb {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Insert<Contract>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    fn date(s: &str) -> Date {
        Date::from_iso8601(s).unwrap()
    }

    fn cmd(starts_on: &str, ends_on: &str) -> CreateContract {
        CreateContract {
            municipality_name: contract::MunicipalityName::new("Araruama")
                .unwrap(),
            description: contract::Description::new("Limpeza urbana")
                .unwrap(),
            starts_on: date(starts_on).coerce(),
            ends_on: date(ends_on).coerce(),
        }
    }

    #[tokio::test]
    async fn rejects_inverted_period() {
        let service = Service::new(NoopDb);

        let res = service.execute(cmd("2025-02-01", "2025-01-31")).await;

        assert!(matches!(
            res.unwrap_err().as_ref(),
            ExecutionError::InvalidPeriod,
        ));
    }

    #[tokio::test]
    async fn creates_active_contract() {
        let service = Service::new(NoopDb);

        let contract = service
            .execute(cmd("2025-01-01", "2025-12-31"))
            .await
            .unwrap();

        assert_eq!(contract.status, contract::Status::Active);
        assert!(contract.updated_at.is_none());
    }
}
