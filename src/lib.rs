//! Card payments: a credit card family built by composition, debit cards, a
//! PayPal-style [`PaymentMethod`](domain::PaymentMethod), a runtime payment
//! dispatcher, plus the small [`Vector`] and [`Countdown`] value types.
//!
//! The [`engine`] replays a CSV script of card operations against an
//! in-memory wallet.

pub mod countdown;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output_repository;
pub mod vector;

pub use countdown::Countdown;
pub use vector::Vector;
