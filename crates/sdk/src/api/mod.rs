pub mod admin;
pub mod authenticators;
mod circuit_breaker;
pub mod core;
pub mod crypto;
pub mod events;
pub mod flows;
pub(crate) mod http;
pub mod managed;
pub mod oauth2;
pub mod outposts;
pub mod policies;
pub mod property_mappings;
pub mod providers;
mod query;
pub mod rac;
pub mod rbac;
pub mod root;
pub mod schema;
pub mod sources;
pub mod stages;
pub mod tasks;
mod types;

pub use admin::AdminApi;
pub use authenticators::AuthenticatorsApi;
pub use circuit_breaker::{CircuitBreaker, CircuitState};
pub use self::core::CoreApi;
pub use crypto::CryptoApi;
pub use events::EventsApi;
pub use flows::FlowsApi;
pub use http::HttpClient;
pub use managed::ManagedApi;
pub use oauth2::OAuth2Api;
pub use outposts::OutpostsApi;
pub use policies::PoliciesApi;
pub use property_mappings::PropertyMappingsApi;
pub use providers::ProvidersApi;
pub use rac::RacApi;
pub use rbac::RbacApi;
pub use root::RootApi;
pub use schema::SchemaApi;
pub use sources::SourcesApi;
pub use stages::StagesApi;
pub use tasks::TasksApi;
pub use types::{ApiResult, ApiSdkError, PaginatedResult, Pagination, PagingContext};
