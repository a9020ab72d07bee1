//! # Event Bus
//!
//! A small, type-indexed event bus that lets page components talk to each other
//! and to outbound collectors without knowing about one another.
//!
//! * **Broadcast** channels fan events out to every live [`Subscription`]
//!   (analytics events, notification requests).
//! * **Watch** channels keep only the latest value and hand it to every
//!   [`WatchSubscription`] (user preferences).
//!
//! Subscriptions are plain values: dropping one (or calling `unsubscribe`) removes
//! the listener. Nothing is registered globally.
//!
//! # Example
//!
//! ```rust
//! use landing_events::{EventBus, EventBusError};
//!
//! #[derive(Debug, PartialEq)]
//! struct PageViewed(&'static str);
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!     let mut views = bus.subscribe::<PageViewed>()?;
//!
//!     bus.publish(PageViewed("course_landing"))?;
//!     assert_eq!(views.next().await.unwrap().0, "course_landing");
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod subscription;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use subscription::{Subscription, WatchSubscription};
