//! Typed webhook events.
//!
//! Every recognised event decodes into a [`TypedEvent`] whose type parameter
//! holds the subject fields for that family of events (a domain, a contact,
//! ...). Anything else decodes into a [`GenericEvent`].

use std::ops::Deref;

use bytes::Bytes;
use dnsimple::models::{
    Account, Contact, DelegationSignerRecord, Domain, EmailForward, Webhook, WhoisPrivacy, Zone,
    ZoneRecord,
};
use dnsimple::Delegation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dispatch::EventKind;
use crate::error::WebhookError;
use crate::header::{decode_object, flatten_data, EventHeader};

/// Behaviour common to every event shape.
pub trait Envelope {
    fn header(&self) -> &EventHeader;

    /// The bytes the event was parsed from.
    fn payload(&self) -> &Bytes;

    fn name(&self) -> &str {
        &self.header().name
    }
}

/// A parsed event with typed subject fields `D`.
///
/// Subject fields are reachable directly on the event through `Deref`, and
/// [`TypedEvent::data`] returns the event itself, so `event.domain` and
/// `event.data().domain` read the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedEvent<D> {
    header: EventHeader,
    subject: D,
    payload: Bytes,
}

impl<D: DeserializeOwned> TypedEvent<D> {
    /// Decodes `payload` into this shape, without looking at the event name.
    pub fn parse(payload: impl Into<Bytes>) -> Result<Self, WebhookError> {
        let payload = payload.into();
        let merged = flatten_data(decode_object(&payload)?)?;
        let header = EventHeader::deserialize(&merged)?;
        let subject = D::deserialize(&merged)?;
        Ok(Self {
            header,
            subject,
            payload,
        })
    }
}

impl<D> TypedEvent<D> {
    /// The event viewed through its `data` field.
    pub fn data(&self) -> &Self {
        self
    }

    pub fn subject(&self) -> &D {
        &self.subject
    }

    pub fn into_subject(self) -> D {
        self.subject
    }
}

impl<D> Deref for TypedEvent<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.subject
    }
}

impl<D> Envelope for TypedEvent<D> {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn payload(&self) -> &Bytes {
        &self.payload
    }
}

/// Event with an unrecognised name; `data` is kept as loose JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericEvent {
    header: EventHeader,
    data: Value,
    payload: Bytes,
}

impl GenericEvent {
    pub fn parse(payload: impl Into<Bytes>) -> Result<Self, WebhookError> {
        let payload = payload.into();
        let mut object = decode_object(&payload)?;
        let data = object.remove("data").unwrap_or(Value::Null);
        let header = EventHeader::deserialize(&Value::Object(object))?;
        Ok(Self {
            header,
            data,
            payload,
        })
    }

    /// The `data` member of the payload, `Null` when absent.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Envelope for GenericEvent {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn payload(&self) -> &Bytes {
        &self.payload
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountData {
    pub account: Option<Account>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactData {
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnssecData {
    pub delegation_signer_record: Option<DelegationSignerRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainData {
    pub domain: Option<Domain>,
    pub registrant: Option<Contact>,
    #[serde(rename = "name_servers")]
    pub delegation: Option<Delegation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailForwardData {
    pub email_forward: Option<EmailForward>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookData {
    pub webhook: Option<Webhook>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisPrivacyData {
    pub domain: Option<Domain>,
    pub whois_privacy: Option<WhoisPrivacy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneData {
    pub zone: Option<Zone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRecordData {
    pub zone_record: Option<ZoneRecord>,
}

pub type AccountEvent = TypedEvent<AccountData>;
pub type ContactEvent = TypedEvent<ContactData>;
pub type DnssecEvent = TypedEvent<DnssecData>;
pub type DomainEvent = TypedEvent<DomainData>;
pub type EmailForwardEvent = TypedEvent<EmailForwardData>;
pub type WebhookEvent = TypedEvent<WebhookData>;
pub type WhoisPrivacyEvent = TypedEvent<WhoisPrivacyData>;
pub type ZoneEvent = TypedEvent<ZoneData>;
pub type ZoneRecordEvent = TypedEvent<ZoneRecordData>;

/// A parsed webhook event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Account(AccountEvent),
    Contact(ContactEvent),
    Dnssec(DnssecEvent),
    Domain(DomainEvent),
    EmailForward(EmailForwardEvent),
    Webhook(WebhookEvent),
    WhoisPrivacy(WhoisPrivacyEvent),
    Zone(ZoneEvent),
    ZoneRecord(ZoneRecordEvent),
    Generic(GenericEvent),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Account(_) => EventKind::Account,
            Self::Contact(_) => EventKind::Contact,
            Self::Dnssec(_) => EventKind::Dnssec,
            Self::Domain(_) => EventKind::Domain,
            Self::EmailForward(_) => EventKind::EmailForward,
            Self::Webhook(_) => EventKind::Webhook,
            Self::WhoisPrivacy(_) => EventKind::WhoisPrivacy,
            Self::Zone(_) => EventKind::Zone,
            Self::ZoneRecord(_) => EventKind::ZoneRecord,
            Self::Generic(_) => EventKind::Generic,
        }
    }

    /// The event as its common envelope.
    pub fn envelope(&self) -> &dyn Envelope {
        match self {
            Self::Account(e) => e,
            Self::Contact(e) => e,
            Self::Dnssec(e) => e,
            Self::Domain(e) => e,
            Self::EmailForward(e) => e,
            Self::Webhook(e) => e,
            Self::WhoisPrivacy(e) => e,
            Self::Zone(e) => e,
            Self::ZoneRecord(e) => e,
            Self::Generic(e) => e,
        }
    }

    pub fn header(&self) -> &EventHeader {
        self.envelope().header()
    }

    pub fn name(&self) -> &str {
        self.envelope().name()
    }

    pub fn payload(&self) -> &Bytes {
        self.envelope().payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn domain_payload() -> Vec<u8> {
        json!({
            "name": "domain.create",
            "api_version": "v2",
            "request_identifier": "4d5a2c9e-2a4b-4b53-9d4a-1f2d3c4b5a6e",
            "actor": {"id": "1120", "entity": "user", "pretty": "example@example.com"},
            "account": {"id": 1010, "email": "example@example.com"},
            "data": {
                "domain": {
                    "id": 1,
                    "account_id": 1010,
                    "registrant_id": null,
                    "name": "example.com",
                    "unicode_name": "example.com",
                    "state": "hosted",
                    "auto_renew": false,
                    "private_whois": false,
                    "expires_at": null,
                    "created_at": "2016-02-07T14:46:29Z",
                    "updated_at": "2016-02-07T14:46:29Z"
                }
            }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn typed_event_exposes_subject_at_both_paths() {
        let event = DomainEvent::parse(domain_payload()).expect("parse domain event");

        assert_eq!(event.name(), "domain.create");
        assert_eq!(event.header().account.as_ref().map(|a| a.id), Some(1010));
        let domain = event.domain.as_ref().expect("domain present");
        assert_eq!(domain.name, "example.com");
        assert_eq!(domain.state, "hosted");
        assert_eq!(event.data(), &event);
        assert_eq!(event.data().domain, event.domain);
        assert!(event.registrant.is_none());
        assert!(event.delegation.is_none());
    }

    #[test]
    fn typed_event_keeps_raw_payload() {
        let raw = domain_payload();
        let event = DomainEvent::parse(raw.clone()).expect("parse domain event");
        assert_eq!(event.payload().as_ref(), raw.as_slice());
    }

    #[test]
    fn type_mismatch_is_a_decode_error() {
        let payload = json!({"name": "domain.create", "data": {"domain": {"id": "not a number"}}});
        let result = DomainEvent::parse(payload.to_string());
        assert!(matches!(result, Err(WebhookError::Decode(_))));
    }

    #[test]
    fn generic_event_keeps_loose_data() {
        let payload = json!({
            "name": "unknown.thing",
            "api_version": "v2",
            "data": {"anything": ["goes", 1, true]}
        });
        let event = GenericEvent::parse(payload.to_string()).expect("parse generic event");
        assert_eq!(event.name(), "unknown.thing");
        assert_eq!(event.data(), &json!({"anything": ["goes", 1, true]}));
    }

    #[test]
    fn generic_event_without_data() {
        let event = GenericEvent::parse(r#"{"name":"unknown.thing"}"#).expect("parse generic event");
        assert_eq!(event.data(), &Value::Null);
    }

    #[test]
    fn event_accessors_delegate_to_the_shape() {
        let event = Event::Domain(DomainEvent::parse(domain_payload()).expect("parse"));
        assert_eq!(event.kind(), EventKind::Domain);
        assert_eq!(event.name(), "domain.create");
        assert_eq!(event.header().api_version, "v2");
        assert_eq!(event.payload().as_ref(), domain_payload().as_slice());
    }
}
