//! [`Command`] for updating an existing [`Dismissal`].

use common::{
    operations::{By, Select, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee::dismissal, Dismissal},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Dismissal`].
///
/// The dismissed [`Employee`] is not editable: a [`Dismissal`] stays with the
/// [`Employee`] it was recorded for.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct UpdateDismissal {
    /// ID of the [`Dismissal`] to update.
    pub id: dismissal::Id,

    /// New day of the [`Dismissal`].
    pub dismissed_on: dismissal::DismissalDate,

    /// New severance amount paid out.
    pub amount: Money,

    /// New contractual penalty paid on top, if any.
    pub penalty: Option<Money>,

    /// New reason of the [`Dismissal`], if recorded.
    pub reason: Option<dismissal::Reason>,
}

impl<Db> Command<UpdateDismissal> for Service<Db>
where
    Db: Database<
            Select<By<Option<Dismissal>, dismissal::Id>>,
            Ok = Option<Dismissal>,
            Err = Traced<database::Error>,
        > + Database<Update<Dismissal>, Err = Traced<database::Error>>,
{
    type Ok = Dismissal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateDismissal,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateDismissal {
            id,
            dismissed_on,
            amount,
            penalty,
            reason,
        } = cmd;

        let mut dismissal = self
            .database()
            .execute(Select(By::<Option<Dismissal>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        dismissal.dismissed_on = dismissed_on;
        dismissal.amount = amount;
        dismissal.penalty = penalty;
        dismissal.reason = reason;

        self.database()
            .execute(Update(dismissal.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(dismissal)
    }
}

/// Error of [`UpdateDismissal`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Dismissal`] with the provided ID does not exist.
    #[display("`Dismissal(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] dismissal::Id),
}
