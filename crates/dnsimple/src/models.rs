//! Resource models shared by the API endpoints and webhook payloads.
//!
//! Timestamps are kept as the strings the API sends. Fields the API may omit or
//! send as `null` are optional; every struct falls back to defaults for
//! missing keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub plan_identifier: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: i64,
    pub account_id: i64,
    pub label: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub organization_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub fax: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: String,
    pub updated_at: String,
}

/// DS record published at the registry for a DNSSEC-signed domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationSignerRecord {
    pub id: i64,
    pub domain_id: i64,
    pub algorithm: String,
    pub digest: String,
    pub digest_type: String,
    pub keytag: String,
    pub public_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub id: i64,
    pub account_id: i64,
    pub registrant_id: Option<i64>,
    pub name: String,
    pub unicode_name: String,
    pub state: String,
    pub auto_renew: bool,
    pub private_whois: bool,
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailForward {
    pub id: i64,
    pub domain_id: i64,
    pub from: String,
    pub to: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: i64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisPrivacy {
    pub id: i64,
    pub domain_id: i64,
    pub enabled: Option<bool>,
    pub expires_on: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub reverse: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRecord {
    pub id: i64,
    /// Name of the zone, not a numeric id.
    pub zone_id: String,
    pub parent_id: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u32>,
    pub system_record: bool,
    pub regions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
