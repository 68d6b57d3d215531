//! Typed parsing of DNSimple webhook payloads.
//!
//! ```
//! use dnsimple_webhook::{parse_event, Event};
//!
//! let payload: &'static [u8] =
//!     br#"{"name":"zone.create","data":{"zone":{"id":1,"name":"example.com"}}}"#;
//! match parse_event(payload).unwrap() {
//!     Event::Zone(event) => assert_eq!(event.zone.as_ref().unwrap().name, "example.com"),
//!     other => panic!("unexpected event {:?}", other.kind()),
//! }
//! ```
//!
//! Parsing is pure: it does not verify the origin of the payload.

pub mod dispatch;
pub mod error;
pub mod event;
pub mod header;

pub use dispatch::{dispatch, parse_event, EventKind};
pub use error::WebhookError;
pub use event::{
    AccountData, AccountEvent, ContactData, ContactEvent, DnssecData, DnssecEvent, DomainData,
    DomainEvent, EmailForwardData, EmailForwardEvent, Envelope, Event, GenericEvent, TypedEvent,
    WebhookData, WebhookEvent, WhoisPrivacyData, WhoisPrivacyEvent, ZoneData, ZoneEvent,
    ZoneRecordData, ZoneRecordEvent,
};
pub use header::{Actor, EventHeader};
