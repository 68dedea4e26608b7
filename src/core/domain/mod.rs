//! Domain types.

pub mod caseworker;
mod credential;
mod paging;
mod record;

pub use caseworker::{Profile, ScopeKey};
pub use credential::{BearerToken, CertificateAuth, ClientCredentials, Credential};
pub use paging::{CaseSearchResponse, PagingInformation};
pub use record::CountRecord;
