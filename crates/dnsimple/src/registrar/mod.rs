//! Registrar endpoints.
//!
//! Each sub-module adds the calls for one registrar resource to
//! [`RegistrarService`].

pub mod delegation;

use crate::client::Client;

/// Handle to the registrar endpoints, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct RegistrarService<'a> {
    client: &'a Client,
}

impl<'a> RegistrarService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}
