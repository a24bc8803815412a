//! GraphQL [`Mutation`]s definitions.

use common::{Date, Money};
use juniper::graphql_object;
use service::{command, domain, query, read, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `Contract` signed with a municipality.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PERIOD` - the `Contract` ends before it starts.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createContract",
            municipality_name = %municipality_name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_contract(
        municipality_name: api::contract::MunicipalityName,
        description: api::contract::Description,
        starts_on: Date,
        ends_on: Date,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(command::CreateContract {
                municipality_name: municipality_name.into(),
                description: description.into(),
                starts_on: starts_on.coerce(),
                ends_on: ends_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates an existing `Contract`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist;
    /// - `INVALID_PERIOD` - the `Contract` ends before it starts.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateContract",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_contract(
        id: api::contract::Id,
        municipality_name: api::contract::MunicipalityName,
        description: api::contract::Description,
        starts_on: Date,
        ends_on: Date,
        status: api::contract::Status,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(command::UpdateContract {
                id: id.into(),
                municipality_name: municipality_name.into(),
                description: description.into(),
                starts_on: starts_on.coerce(),
                ends_on: ends_on.coerce(),
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Contract` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist;
    /// - `EMPLOYEES_STILL_ASSIGNED` - active `Employee`s are still linked to
    ///                                the `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteContract",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_contract(
        id: api::contract::Id,
        ctx: &Context,
    ) -> Result<api::contract::Id, Error> {
        ctx.service()
            .execute(command::DeleteContract { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Creates a new `MonthlyRecord` of the specified `Contract`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist;
    /// - `INVALID_PERIOD` - the `month` is not in the `1..=12` range;
    /// - `PERIOD_ALREADY_RECORDED` - the `Contract` already has a
    ///                               `MonthlyRecord` for the period.
    #[tracing::instrument(
        skip_all,
        fields(
            contract_id = %contract_id,
            gql.name = "createMonthlyRecord",
            month = month,
            otel.name = Self::SPAN_NAME,
            year = year,
        ),
    )]
    pub async fn create_monthly_record(
        contract_id: api::contract::Id,
        month: i32,
        year: i32,
        revenue: Money,
        expenses: Money,
        employees_count: i32,
        notes: Option<api::monthly_record::Notes>,
        ctx: &Context,
    ) -> Result<api::MonthlyRecord, Error> {
        let period = u8::try_from(month)
            .ok()
            .and_then(|m| domain::monthly_record::Period::new(m, year))
            .ok_or_else(|| PeriodError::InvalidMonth.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateMonthlyRecord {
                contract_id: contract_id.into(),
                period,
                revenue,
                expenses,
                employees_count: employees_count.into(),
                notes: notes.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the financials of an existing `MonthlyRecord`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `MONTHLY_RECORD_NOT_EXISTS` - the `MonthlyRecord` with the specified
    ///                                 ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateMonthlyRecord",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_monthly_record(
        id: api::monthly_record::Id,
        revenue: Money,
        expenses: Money,
        employees_count: i32,
        notes: Option<api::monthly_record::Notes>,
        ctx: &Context,
    ) -> Result<api::MonthlyRecord, Error> {
        ctx.service()
            .execute(command::UpdateMonthlyRecord {
                id: id.into(),
                revenue,
                expenses,
                employees_count: employees_count.into(),
                notes: notes.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `MonthlyRecord` with the specified ID.
    ///
    /// Deleting an absent `MonthlyRecord` is a no-op.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteMonthlyRecord",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_monthly_record(
        id: api::monthly_record::Id,
        ctx: &Context,
    ) -> Result<api::monthly_record::Id, Error> {
        ctx.service()
            .execute(command::DeleteMonthlyRecord { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Creates a new `Supplier` payment record.
    ///
    /// A `Supplier` without a `contractId` is attributed to the headquarters.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createSupplier",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "repository fields")]
    pub async fn create_supplier(
        name: api::supplier::Name,
        service: api::supplier::Service,
        document: api::supplier::Document,
        payment_method: api::transaction::PaymentMethod,
        contract_value: Money,
        paid_value: Money,
        paid_on: Option<Date>,
        contract_id: Option<api::contract::Id>,
        ctx: &Context,
    ) -> Result<api::Supplier, Error> {
        let linkage = contract_id.map_or(
            domain::supplier::Linkage::Headquarters,
            |id| domain::supplier::Linkage::Contract(id.into()),
        );

        ctx.service()
            .execute(command::CreateSupplier {
                name: name.into(),
                service: service.into(),
                document: document.into(),
                payment_method: payment_method.into(),
                contract_value,
                paid_value,
                paid_on: paid_on.map(|on| on.coerce()),
                linkage,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Supplier` with the specified ID.
    ///
    /// A `Supplier` without a `contractId` is attributed to the headquarters.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SUPPLIER_NOT_EXISTS` - the `Supplier` with the specified ID does
    ///                           not exist;
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateSupplier",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "repository fields")]
    pub async fn update_supplier(
        id: api::supplier::Id,
        name: api::supplier::Name,
        service: api::supplier::Service,
        document: api::supplier::Document,
        payment_method: api::transaction::PaymentMethod,
        contract_value: Money,
        paid_value: Money,
        paid_on: Option<Date>,
        contract_id: Option<api::contract::Id>,
        ctx: &Context,
    ) -> Result<api::Supplier, Error> {
        let linkage = contract_id.map_or(
            domain::supplier::Linkage::Headquarters,
            |id| domain::supplier::Linkage::Contract(id.into()),
        );

        ctx.service()
            .execute(command::UpdateSupplier {
                id: id.into(),
                name: name.into(),
                service: service.into(),
                document: document.into(),
                payment_method: payment_method.into(),
                contract_value,
                paid_value,
                paid_on: paid_on.map(|on| on.coerce()),
                linkage,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Supplier` with the specified ID.
    ///
    /// Deleting an absent `Supplier` is a no-op.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteSupplier",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_supplier(
        id: api::supplier::Id,
        ctx: &Context,
    ) -> Result<api::supplier::Id, Error> {
        ctx.service()
            .execute(command::DeleteSupplier { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Creates a new `Transaction` in the headquarters ledger.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createTransaction",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_transaction(
        kind: api::transaction::Kind,
        category: api::transaction::Category,
        payment_method: api::transaction::PaymentMethod,
        description: api::transaction::Description,
        amount: Money,
        due_on: Date,
        ctx: &Context,
    ) -> Result<api::Transaction, Error> {
        ctx.service()
            .execute(command::CreateTransaction {
                kind: kind.into(),
                category: category.into(),
                payment_method: payment_method.into(),
                description: description.into(),
                amount,
                due_on: due_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Transaction` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TRANSACTION_NOT_EXISTS` - the `Transaction` with the specified ID
    ///                              does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateTransaction",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_transaction(
        id: api::transaction::Id,
        kind: api::transaction::Kind,
        category: api::transaction::Category,
        payment_method: api::transaction::PaymentMethod,
        description: api::transaction::Description,
        amount: Money,
        due_on: Date,
        ctx: &Context,
    ) -> Result<api::Transaction, Error> {
        ctx.service()
            .execute(command::UpdateTransaction {
                id: id.into(),
                kind: kind.into(),
                category: category.into(),
                payment_method: payment_method.into(),
                description: description.into(),
                amount,
                due_on: due_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Transaction` with the specified ID.
    ///
    /// Deleting an absent `Transaction` is a no-op.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteTransaction",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_transaction(
        id: api::transaction::Id,
        ctx: &Context,
    ) -> Result<api::transaction::Id, Error> {
        ctx.service()
            .execute(command::DeleteTransaction { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Creates a new `Employee`.
    ///
    /// An `Employee` without a `contractId` works at the headquarters.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createEmployee",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_employee(
        name: api::employee::Name,
        role: api::employee::Role,
        contract_id: Option<api::contract::Id>,
        hired_on: Date,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        let linkage = contract_id.map_or(
            domain::supplier::Linkage::Headquarters,
            |id| domain::supplier::Linkage::Contract(id.into()),
        );

        ctx.service()
            .execute(command::CreateEmployee {
                name: name.into(),
                role: role.into(),
                linkage,
                hired_on: hired_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Employee` with the specified ID.
    ///
    /// An `Employee` without a `contractId` works at the headquarters.
    /// Activity of an `Employee` is not editable here: it only changes when
    /// the `Employee` is dismissed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `CONTRACT_NOT_EXISTS` - the `Contract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateEmployee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_employee(
        id: api::employee::Id,
        name: api::employee::Name,
        role: api::employee::Role,
        contract_id: Option<api::contract::Id>,
        hired_on: Date,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        let linkage = contract_id.map_or(
            domain::supplier::Linkage::Headquarters,
            |id| domain::supplier::Linkage::Contract(id.into()),
        );

        ctx.service()
            .execute(command::UpdateEmployee {
                id: id.into(),
                name: name.into(),
                role: role.into(),
                linkage,
                hired_on: hired_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Employee` with the specified ID.
    ///
    /// Refused while `Dismissal`s or `Vacation`s still reference the
    /// `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `DISMISSALS_STILL_RECORDED` - `Dismissal`s still reference the
    ///                                 `Employee`;
    /// - `VACATIONS_STILL_RECORDED` - `Vacation`s still reference the
    ///                                `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteEmployee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::employee::Id, Error> {
        ctx.service()
            .execute(command::DeleteEmployee { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Dismisses the `Employee` with the specified ID, registering the
    /// severance costs and deactivating the `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `EMPLOYEE_ALREADY_DISMISSED` - the `Employee` is already dismissed.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "dismissEmployee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn dismiss_employee(
        employee_id: api::employee::Id,
        dismissed_on: Date,
        amount: Money,
        penalty: Option<Money>,
        reason: Option<api::employee::dismissal::Reason>,
        ctx: &Context,
    ) -> Result<api::employee::Dismissal, Error> {
        let dismissal = ctx
            .service()
            .execute(command::DismissEmployee {
                employee_id: employee_id.into(),
                dismissed_on: dismissed_on.coerce(),
                amount,
                penalty,
                reason: reason.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        let employee = Self::employee_of(dismissal.employee_id, ctx).await?;
        let contract_municipality = match employee.linkage.contract_id() {
            Some(id) => ctx
                .service()
                .execute(query::contract::ById::by(id))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())?
                .map(|c| c.municipality_name),
            None => None,
        };

        Ok(read::dismissal::Named {
            dismissal,
            employee_name: employee.name,
            contract_municipality,
        }
        .into())
    }

    /// Updates the `Dismissal` with the specified ID.
    ///
    /// The dismissed `Employee` is not editable: a `Dismissal` stays with the
    /// `Employee` it was recorded for.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DISMISSAL_NOT_EXISTS` - the `Dismissal` with the specified ID does
    ///                            not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateDismissal",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_dismissal(
        id: api::employee::dismissal::Id,
        dismissed_on: Date,
        amount: Money,
        penalty: Option<Money>,
        reason: Option<api::employee::dismissal::Reason>,
        ctx: &Context,
    ) -> Result<api::employee::Dismissal, Error> {
        let dismissal = ctx
            .service()
            .execute(command::UpdateDismissal {
                id: id.into(),
                dismissed_on: dismissed_on.coerce(),
                amount,
                penalty,
                reason: reason.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        let employee = Self::employee_of(dismissal.employee_id, ctx).await?;
        let contract_municipality = match employee.linkage.contract_id() {
            Some(id) => ctx
                .service()
                .execute(query::contract::ById::by(id))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())?
                .map(|c| c.municipality_name),
            None => None,
        };

        Ok(read::dismissal::Named {
            dismissal,
            employee_name: employee.name,
            contract_municipality,
        }
        .into())
    }

    /// Deletes the `Dismissal` with the specified ID.
    ///
    /// The dismissed `Employee` stays inactive: undoing a dismissal is a
    /// bookkeeping correction, not a rehire.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DISMISSAL_NOT_EXISTS` - the `Dismissal` with the specified ID does
    ///                            not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteDismissal",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_dismissal(
        id: api::employee::dismissal::Id,
        ctx: &Context,
    ) -> Result<api::employee::dismissal::Id, Error> {
        ctx.service()
            .execute(command::DeleteDismissal { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| id)
    }

    /// Registers a `Vacation` of the `Employee` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `EMPLOYEE_NOT_ACTIVE` - the `Employee` is already dismissed;
    /// - `INVALID_VACATION_SPAN` - the `Vacation` ends before it starts.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "registerVacation",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn register_vacation(
        employee_id: api::employee::Id,
        starts_on: Date,
        ends_on: Date,
        amount: Money,
        reason: Option<api::employee::dismissal::Reason>,
        ctx: &Context,
    ) -> Result<api::employee::Vacation, Error> {
        let vacation = ctx
            .service()
            .execute(command::RegisterVacation {
                employee_id: employee_id.into(),
                starts_on: starts_on.coerce(),
                ends_on: ends_on.coerce(),
                amount,
                reason: reason.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        let employee = Self::employee_of(vacation.employee_id, ctx).await?;

        Ok(read::vacation::Named {
            vacation,
            employee_name: employee.name,
        }
        .into())
    }
}

impl Mutation {
    /// Loads the [`domain::Employee`] a just-written record refers to.
    async fn employee_of(
        id: domain::employee::Id,
        ctx: &Context,
    ) -> Result<domain::Employee, Error> {
        ctx.service()
            .execute(query::employee::ById::by(id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| {
                Error::internal(&"`Employee` is missing right after a write")
            })
            .map_err(ctx.error())
    }
}

define_error! {
    enum PeriodError {
        #[code = "INVALID_PERIOD"]
        #[status = BAD_REQUEST]
        #[message = "Month must be in `1..=12` range"]
        InvalidMonth,
    }
}

impl AsError for command::create_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_PERIOD"]
                #[status = BAD_REQUEST]
                #[message = "`Contract` cannot end before it starts"]
                InvalidPeriod,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::InvalidPeriod => Some(Error::InvalidPeriod.into()),
        }
    }
}

impl AsError for command::update_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_PERIOD"]
                #[status = BAD_REQUEST]
                #[message = "`Contract` cannot end before it starts"]
                InvalidPeriod,

                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                NotExists,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::InvalidPeriod => Error::InvalidPeriod.into(),
            Self::NotExists(_) => Error::NotExists.into(),
        })
    }
}

impl AsError for command::delete_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                NotExists,

                #[code = "EMPLOYEES_STILL_ASSIGNED"]
                #[status = CONFLICT]
                #[message = "`Contract` still has active employees assigned"]
                EmployeesStillAssigned,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::EmployeesStillAssigned(_) => {
                Error::EmployeesStillAssigned.into()
            }
        })
    }
}

impl AsError for command::create_monthly_record::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                ContractNotExists,

                #[code = "PERIOD_ALREADY_RECORDED"]
                #[status = CONFLICT]
                #[message = "`Contract` already has a `MonthlyRecord` for \
                             the specified period"]
                PeriodAlreadyRecorded,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::ContractNotExists(_) => Error::ContractNotExists.into(),
            Self::PeriodAlreadyRecorded(_) => {
                Error::PeriodAlreadyRecorded.into()
            }
        })
    }
}

impl AsError for command::update_monthly_record::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "MONTHLY_RECORD_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`MonthlyRecord` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_supplier::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                ContractNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ContractNotExists(_) => Some(Error::ContractNotExists.into()),
        }
    }
}

impl AsError for command::update_supplier::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "SUPPLIER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Supplier` with the specified ID does not exist"]
                NotExists,

                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                ContractNotExists,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::ContractNotExists(_) => Error::ContractNotExists.into(),
        })
    }
}

impl AsError for command::update_transaction::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "TRANSACTION_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Transaction` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                ContractNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ContractNotExists(_) => Some(Error::ContractNotExists.into()),
        }
    }
}

impl AsError for command::update_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Employee` with the specified ID does not exist"]
                NotExists,

                #[code = "CONTRACT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Contract` with the specified ID does not exist"]
                ContractNotExists,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::ContractNotExists(_) => Error::ContractNotExists.into(),
        })
    }
}

impl AsError for command::delete_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Employee` with the specified ID does not exist"]
                NotExists,

                #[code = "DISMISSALS_STILL_RECORDED"]
                #[status = CONFLICT]
                #[message = "`Employee` still has dismissals recorded"]
                DismissalsStillRecorded,

                #[code = "VACATIONS_STILL_RECORDED"]
                #[status = CONFLICT]
                #[message = "`Employee` still has vacations recorded"]
                VacationsStillRecorded,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::DismissalsStillRecorded(_) => {
                Error::DismissalsStillRecorded.into()
            }
            Self::VacationsStillRecorded(_) => {
                Error::VacationsStillRecorded.into()
            }
        })
    }
}

impl AsError for command::dismiss_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Employee` with the specified ID does not exist"]
                NotExists,

                #[code = "EMPLOYEE_ALREADY_DISMISSED"]
                #[status = CONFLICT]
                #[message = "`Employee` with the specified ID is already \
                             dismissed"]
                AlreadyDismissed,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::AlreadyDismissed(_) => Error::AlreadyDismissed.into(),
        })
    }
}

impl AsError for command::update_dismissal::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DISMISSAL_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Dismissal` with the specified ID does not exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::delete_dismissal::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DISMISSAL_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Dismissal` with the specified ID does not exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::register_vacation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_VACATION_SPAN"]
                #[status = BAD_REQUEST]
                #[message = "`Vacation` cannot end before it starts"]
                InvalidSpan,

                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Employee` with the specified ID does not exist"]
                NotExists,

                #[code = "EMPLOYEE_NOT_ACTIVE"]
                #[status = CONFLICT]
                #[message = "`Employee` with the specified ID is already \
                             dismissed"]
                NotActive,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::InvalidSpan => Error::InvalidSpan.into(),
            Self::NotExists(_) => Error::NotExists.into(),
            Self::NotActive(_) => Error::NotActive.into(),
        })
    }
}
