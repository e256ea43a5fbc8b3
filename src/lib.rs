//! SMS composition utilities for messaging dashboards.
//!
//! The crate covers the text-level core of composing an SMS: GSM-7 vs UCS-2
//! classification and segment accounting, loose-input → E.164 phone
//! normalization with a separate validation predicate, and `{{variable}}`
//! message templates. The design is two layers: a domain layer of strong
//! types ([`MessageText`], [`PhoneNumber`], [`MessageTemplate`]) over a
//! function layer of pure, total text routines.
//!
//! ```rust
//! use smstext::{DefaultCountry, PhoneNumber, SmsEncoding, count_segments};
//!
//! let info = count_segments("Your code is 429871");
//! assert_eq!(info.segments, 1);
//! assert_eq!(info.encoding, SmsEncoding::Gsm7);
//!
//! let recipient = PhoneNumber::parse(DefaultCountry::Us, "(202) 555-0123")?;
//! assert_eq!(recipient.e164(), "+12025550123");
//! # Ok::<(), smstext::ValidationError>(())
//! ```
#![forbid(unsafe_code)]

pub mod charset;
pub mod domain;
pub mod phone;
pub mod segment;
pub mod template;

pub use charset::{gsm7_len, is_gsm7};
pub use domain::{MessageTemplate, MessageText, PhoneNumber, ValidationError};
pub use phone::{DefaultCountry, format_display, format_e164, is_valid_e164};
pub use segment::{SegmentInfo, SmsEncoding, count_segments};
pub use template::{extract_variables, render_template};
