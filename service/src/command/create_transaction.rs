//! [`Command`] for creating a new [`Transaction`].

use common::{operations::Insert, DateTime, Money};
use tracerr::Traced;

use crate::{
    domain::{transaction, Transaction},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Transaction`].
#[derive(Clone, Debug)]
pub struct CreateTransaction {
    /// Kind of a new [`Transaction`].
    pub kind: transaction::Kind,

    /// Category of a new [`Transaction`].
    pub category: transaction::Category,

    /// Method a new [`Transaction`] is paid with.
    pub payment_method: transaction::PaymentMethod,

    /// Description of a new [`Transaction`].
    pub description: transaction::Description,

    /// Amount of a new [`Transaction`].
    pub amount: Money,

    /// Day a new [`Transaction`] is due.
    pub due_on: transaction::DueDate,
}

impl<Db> Command<CreateTransaction> for Service<Db>
where
    Db: Database<Insert<Transaction>, Err = Traced<database::Error>>,
{
    type Ok = Transaction;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateTransaction,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateTransaction {
            kind,
            category,
            payment_method,
            description,
            amount,
            due_on,
        } = cmd;

        let transaction = Transaction {
            id: transaction::Id::new(),
            kind,
            category,
            payment_method,
            description,
            amount,
            due_on,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        self.database()
            .execute(Insert(transaction.clone()))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        Ok(transaction)
    }
}

/// Error of [`CreateTransaction`] [`Command`] execution.
pub type ExecutionError = database::Error;
