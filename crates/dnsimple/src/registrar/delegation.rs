//! Registrar delegation: the name servers a registered domain points to.
//!
//! Reference: https://developer.dnsimple.com/v2/registrar/delegation/

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::RegistrarService;
use crate::client::versioned;
use crate::error::Result;
use crate::response::Response;

/// Ordered list of name-server hostnames a domain is delegated to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delegation(pub Vec<String>);

impl Deref for Delegation {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Delegation {
    fn from(name_servers: Vec<String>) -> Self {
        Self(name_servers)
    }
}

impl<'a> FromIterator<&'a str> for Delegation {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

/// Vanity name server configured for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanityNameServer {
    pub id: i64,
    pub name: String,
    pub ipv4: String,
    pub ipv6: String,
    pub created_at: String,
    pub updated_at: String,
}

fn delegation_path(account_id: &str, domain_name: &str) -> String {
    versioned(&format!(
        "/{}/registrar/domains/{}/delegation",
        account_id, domain_name
    ))
}

fn vanity_delegation_path(account_id: &str, domain_name: &str) -> String {
    versioned(&format!(
        "/{}/registrar/domains/{}/delegation/vanity",
        account_id, domain_name
    ))
}

impl RegistrarService<'_> {
    /// Gets the name servers the domain is currently delegated to.
    pub async fn get_domain_delegation(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<Delegation>> {
        self.client
            .get(&delegation_path(account_id, domain_name))
            .await
    }

    /// Replaces the name servers the domain is delegated to.
    pub async fn change_domain_delegation(
        &self,
        account_id: &str,
        domain_name: &str,
        new_delegation: &Delegation,
    ) -> Result<Response<Delegation>> {
        self.client
            .put(&delegation_path(account_id, domain_name), new_delegation)
            .await
    }

    /// Delegates the domain to the account's vanity name servers.
    pub async fn change_domain_delegation_to_vanity(
        &self,
        account_id: &str,
        domain_name: &str,
        new_delegation: &Delegation,
    ) -> Result<Response<Vec<VanityNameServer>>> {
        self.client
            .put(&vanity_delegation_path(account_id, domain_name), new_delegation)
            .await
    }

    /// Moves the domain off vanity name servers.
    pub async fn change_domain_delegation_from_vanity(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Response<()>> {
        self.client
            .delete(&vanity_delegation_path(account_id, domain_name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(
            delegation_path("1010", "example.com"),
            "/v2/1010/registrar/domains/example.com/delegation"
        );
        assert_eq!(
            vanity_delegation_path("1010", "example.com"),
            "/v2/1010/registrar/domains/example.com/delegation/vanity"
        );
    }

    #[test]
    fn delegation_is_a_bare_array() {
        let delegation: Delegation = ["ns1.example.com", "ns2.example.com"].into_iter().collect();
        let encoded = serde_json::to_string(&delegation).expect("encode");
        assert_eq!(encoded, r#"["ns1.example.com","ns2.example.com"]"#);

        let decoded: Delegation = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, delegation);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0], "ns1.example.com");
    }
}
