//! Client for the DNSimple API v2.
//!
//! ```no_run
//! # async fn run() -> dnsimple::Result<()> {
//! use dnsimple::{Client, OauthTokenCredentials};
//!
//! let client = Client::new(OauthTokenCredentials::new("token"))?;
//! let response = client
//!     .registrar()
//!     .get_domain_delegation("1010", "example.com")
//!     .await?;
//! for name_server in response.data.iter() {
//!     println!("{name_server}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod models;
pub mod registrar;
pub mod response;

pub use client::{Client, ClientConfig};
pub use credentials::{
    Credentials, DomainTokenCredentials, HttpBasicCredentials, OauthTokenCredentials,
};
pub use error::{Error, Result};
pub use registrar::delegation::{Delegation, VanityNameServer};
pub use registrar::RegistrarService;
pub use response::{Pagination, Response};
