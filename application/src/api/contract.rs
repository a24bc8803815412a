//! [`Contract`]-related definitions.

use std::future;

use common::{Date, DateTime};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A municipal cleaning-services contract.
#[derive(Clone, Debug, From)]
pub struct Contract {
    /// ID of this [`Contract`].
    id: Id,

    /// Underlying [`domain::Contract`].
    contract: OnceCell<domain::Contract>,
}

impl From<domain::Contract> for Contract {
    fn from(contract: domain::Contract) -> Self {
        Self {
            id: contract.id.into(),
            contract: OnceCell::new_with(Some(contract)),
        }
    }
}

impl Contract {
    /// Creates a new [`Contract`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Contract`] with the provided ID exists,
    /// otherwise accessing this [`Contract`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            contract: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Contract`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Contract`] doesn't exist.
    async fn contract(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Contract, Error> {
        let id = self.id.into();
        self.contract
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::contract::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|c| {
                        future::ready(c.ok_or_else(|| {
                            api::query::ContractError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A municipal cleaning-services contract.
#[graphql_object(context = Context)]
impl Contract {
    /// Unique identifier of this `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Name of the municipality this `Contract` is signed with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.municipalityName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn municipality_name(
        &self,
        ctx: &Context,
    ) -> Result<MunicipalityName, Error> {
        Ok(self.contract(ctx).await?.municipality_name.clone().into())
    }

    /// Description of this `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Description, Error> {
        Ok(self.contract(ctx).await?.description.clone().into())
    }

    /// Day this `Contract` takes effect.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.startsOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn starts_on(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.contract(ctx).await?.starts_on.coerce())
    }

    /// Day this `Contract` runs out.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.endsOn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn ends_on(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.contract(ctx).await?.ends_on.coerce())
    }

    /// Status of this `Contract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.contract(ctx).await?.status.into())
    }

    /// `DateTime` when this `Contract` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.contract(ctx).await?.created_at.coerce())
    }

    /// `DateTime` when this `Contract` was last updated, if ever.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Contract.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn updated_at(
        &self,
        ctx: &Context,
    ) -> Result<Option<DateTime>, Error> {
        Ok(self.contract(ctx).await?.updated_at.map(|at| at.coerce()))
    }
}

/// Unique identifier of a `Contract`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::contract::Id)]
#[into(domain::contract::Id)]
#[graphql(name = "ContractId", transparent)]
pub struct Id(Uuid);

/// Name of the municipality a `Contract` is signed with.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ContractMunicipalityName",
    with = scalar::Via::<domain::contract::MunicipalityName>,
)]
pub struct MunicipalityName(domain::contract::MunicipalityName);

/// Description of a `Contract`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ContractDescription",
    with = scalar::Via::<domain::contract::Description>,
)]
pub struct Description(domain::contract::Description);

/// Status of a `Contract`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ContractStatus")]
pub enum Status {
    /// `Contract` is in effect.
    Active,

    /// `Contract` has been closed out.
    Inactive,
}

impl From<domain::contract::Status> for Status {
    fn from(status: domain::contract::Status) -> Self {
        use domain::contract::Status as S;
        match status {
            S::Active => Self::Active,
            S::Inactive => Self::Inactive,
        }
    }
}

impl From<Status> for domain::contract::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => Self::Active,
            Status::Inactive => Self::Inactive,
        }
    }
}
