//! Event-name dispatch.
//!
//! Event names are provider-defined constants with no structure worth
//! matching on, so the mapping is a flat table of exact names.

use std::fmt;

use bytes::Bytes;

use crate::error::WebhookError;
use crate::event::{
    AccountEvent, ContactEvent, DnssecEvent, DomainEvent, EmailForwardEvent, Event, GenericEvent,
    WebhookEvent, WhoisPrivacyEvent, ZoneEvent, ZoneRecordEvent,
};
use crate::header::EventHeader;

/// The shape an event name decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Account,
    Contact,
    Dnssec,
    Domain,
    EmailForward,
    Webhook,
    WhoisPrivacy,
    Zone,
    ZoneRecord,
    Generic,
}

const EVENT_TABLE: &[(&str, EventKind)] = &[
    // account
    ("account.update", EventKind::Account),
    ("account.billing_settings_update", EventKind::Account),
    ("account.remove_user", EventKind::Account),
    // contact
    ("contact.create", EventKind::Contact),
    ("contact.delete", EventKind::Contact),
    ("contact.update", EventKind::Contact),
    // dnssec
    ("dnssec.rotation_complete", EventKind::Dnssec),
    ("dnssec.rotation_start", EventKind::Dnssec),
    // domain
    ("domain.auto_renewal_disable", EventKind::Domain),
    ("domain.auto_renewal_enable", EventKind::Domain),
    ("domain.create", EventKind::Domain),
    ("domain.delete", EventKind::Domain),
    ("domain.register", EventKind::Domain),
    ("domain.renew", EventKind::Domain),
    ("domain.delegation_change", EventKind::Domain),
    ("domain.registrant_change", EventKind::Domain),
    ("domain.resolution_disable", EventKind::Domain),
    ("domain.resolution_enable", EventKind::Domain),
    ("domain.transfer", EventKind::Domain),
    // email forward
    ("email_forward.create", EventKind::EmailForward),
    ("email_forward.delete", EventKind::EmailForward),
    ("email_forward.update", EventKind::EmailForward),
    // webhook
    ("webhook.create", EventKind::Webhook),
    ("webhook.delete", EventKind::Webhook),
    // whois privacy
    ("whois_privacy.disable", EventKind::WhoisPrivacy),
    ("whois_privacy.enable", EventKind::WhoisPrivacy),
    ("whois_privacy.purchase", EventKind::WhoisPrivacy),
    ("whois_privacy.renew", EventKind::WhoisPrivacy),
    // zone
    ("zone.create", EventKind::Zone),
    ("zone.delete", EventKind::Zone),
    // zone record
    ("zone_record.create", EventKind::ZoneRecord),
    ("zone_record.delete", EventKind::ZoneRecord),
    ("zone_record.update", EventKind::ZoneRecord),
];

impl EventKind {
    /// Looks up the shape for `name`. Unknown names map to `Generic`.
    pub fn for_name(name: &str) -> Self {
        EVENT_TABLE
            .iter()
            .find(|(event_name, _)| *event_name == name)
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// Every event name with a typed shape, paired with that shape.
    pub fn event_names() -> impl Iterator<Item = (&'static str, EventKind)> {
        EVENT_TABLE.iter().copied()
    }

    /// Decodes `payload` into this shape.
    pub fn parse(self, payload: Bytes) -> Result<Event, WebhookError> {
        match self {
            Self::Account => AccountEvent::parse(payload).map(Event::Account),
            Self::Contact => ContactEvent::parse(payload).map(Event::Contact),
            Self::Dnssec => DnssecEvent::parse(payload).map(Event::Dnssec),
            Self::Domain => DomainEvent::parse(payload).map(Event::Domain),
            Self::EmailForward => EmailForwardEvent::parse(payload).map(Event::EmailForward),
            Self::Webhook => WebhookEvent::parse(payload).map(Event::Webhook),
            Self::WhoisPrivacy => WhoisPrivacyEvent::parse(payload).map(Event::WhoisPrivacy),
            Self::Zone => ZoneEvent::parse(payload).map(Event::Zone),
            Self::ZoneRecord => ZoneRecordEvent::parse(payload).map(Event::ZoneRecord),
            Self::Generic => GenericEvent::parse(payload).map(Event::Generic),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Contact => write!(f, "contact"),
            Self::Dnssec => write!(f, "dnssec"),
            Self::Domain => write!(f, "domain"),
            Self::EmailForward => write!(f, "email_forward"),
            Self::Webhook => write!(f, "webhook"),
            Self::WhoisPrivacy => write!(f, "whois_privacy"),
            Self::Zone => write!(f, "zone"),
            Self::ZoneRecord => write!(f, "zone_record"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Decodes `payload` into the shape registered for `name`.
///
/// Unknown names are not an error: they decode into [`Event::Generic`].
pub fn dispatch(name: &str, payload: impl Into<Bytes>) -> Result<Event, WebhookError> {
    let kind = EventKind::for_name(name);
    if kind == EventKind::Generic {
        tracing::debug!(event = name, "Unrecognised webhook event, decoding as generic");
    } else {
        tracing::debug!(event = name, kind = %kind, "Dispatching webhook event");
    }
    kind.parse(payload.into())
}

/// Decodes a payload, taking the event name from its `name` field.
pub fn parse_event(payload: impl Into<Bytes>) -> Result<Event, WebhookError> {
    let payload = payload.into();
    let header = EventHeader::from_payload(&payload)?;
    dispatch(&header.name, payload)
}
