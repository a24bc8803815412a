//! [`Command`] for updating an existing [`Transaction`].

use common::{
    operations::{By, Select, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{transaction, Transaction},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Transaction`].
#[derive(Clone, Debug)]
pub struct UpdateTransaction {
    /// ID of the [`Transaction`] to update.
    pub id: transaction::Id,

    /// New [`transaction::Kind`] of the [`Transaction`].
    pub kind: transaction::Kind,

    /// New [`transaction::Category`] of the [`Transaction`].
    pub category: transaction::Category,

    /// New method the [`Transaction`] is paid with.
    pub payment_method: transaction::PaymentMethod,

    /// New description of the [`Transaction`].
    pub description: transaction::Description,

    /// New amount of the [`Transaction`].
    pub amount: Money,

    /// New day the [`Transaction`] is due.
    pub due_on: transaction::DueDate,
}

impl<Db> Command<UpdateTransaction> for Service<Db>
where
    Db: Database<
            Select<By<Option<Transaction>, transaction::Id>>,
            Ok = Option<Transaction>,
            Err = Traced<database::Error>,
        > + Database<Update<Transaction>, Err = Traced<database::Error>>,
{
    type Ok = Transaction;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateTransaction,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTransaction {
            id,
            kind,
            category,
            payment_method,
            description,
            amount,
            due_on,
        } = cmd;

        let mut transaction = self
            .database()
            .execute(Select(By::<Option<Transaction>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotExists(id))
            .map_err(tracerr::wrap!())?;

        transaction.kind = kind;
        transaction.category = category;
        transaction.payment_method = payment_method;
        transaction.description = description;
        transaction.amount = amount;
        transaction.due_on = due_on;
        transaction.updated_at = Some(DateTime::now().coerce());

        self.database()
            .execute(Update(transaction.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(transaction)
    }
}

/// Error of [`UpdateTransaction`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Transaction`] with the provided ID does not exist.
    #[display("`Transaction(id: {_0})` does not exist")]
    NotExists(#[error(not(source))] transaction::Id),
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select, Update},
        Date, DateTime, Money,
    };
    use rust_decimal::Decimal;
    use tracerr::Traced;

    use super::{Command as _, ExecutionError, UpdateTransaction};
    use crate::{
        domain::{transaction, Transaction},
        infra::{database, Database},
        Service,
    };

    #[derive(Clone)]
    struct OneRowDb(Option<Transaction>);

    impl Database<Select<By<Option<Transaction>, transaction::Id>>> for OneRowDb {
        type Ok = Option<Transaction>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Option<Transaction>, transaction::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.0.clone())
        }
    }

    impl Database<Update<Transaction>> for OneRowDb {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Update<Transaction>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    fn stored() -> Transaction {
        Transaction {
            id: transaction::Id::new(),
            kind: transaction::Kind::Expense,
            category: transaction::Category::Rent,
            payment_method: transaction::PaymentMethod::Pix,
            description: transaction::Description::new("Aluguel da sede")
                .unwrap(),
            amount: Money::brl(Decimal::new(3000, 0)),
            due_on: Date::from_iso8601("2025-03-05").unwrap().coerce(),
            created_at: DateTime::now().coerce(),
            updated_at: None,
        }
    }

    fn cmd(id: transaction::Id) -> UpdateTransaction {
        UpdateTransaction {
            id,
            kind: transaction::Kind::Expense,
            category: transaction::Category::Power,
            payment_method: transaction::PaymentMethod::Boleto,
            description: transaction::Description::new("Conta de luz")
                .unwrap(),
            amount: Money::brl(Decimal::new(450, 0)),
            due_on: Date::from_iso8601("2025-03-10").unwrap().coerce(),
        }
    }

    #[tokio::test]
    async fn overwrites_fields_and_stamps_update() {
        let before = stored();
        let service = Service::new(OneRowDb(Some(before.clone())));

        let after = service.execute(cmd(before.id)).await.unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.category, transaction::Category::Power);
        assert_eq!(after.amount, Money::brl(Decimal::new(450, 0)));
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at.is_some());
    }

    #[tokio::test]
    async fn rejects_missing_transaction() {
        let service = Service::new(OneRowDb(None));

        let res = service.execute(cmd(transaction::Id::new())).await;

        assert!(matches!(
            res.unwrap_err().as_ref(),
            ExecutionError::NotExists(_),
        ));
    }
}
