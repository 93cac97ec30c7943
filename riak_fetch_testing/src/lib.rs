//! Utilities for building Riak fetch responses in tests.
//!
//! [`SiblingBody`] assembles `multipart/mixed` bodies the way the store
//! emits them, and [`ResponseBuilder`] wraps headers and body into an
//! [`HttpResponse`](riak_fetch::HttpResponse).
//!
//! ```rust
//! use riak_fetch::FetchResponse;
//! use riak_fetch_testing::{ResponseBuilder, SiblingBody};
//!
//! let body = SiblingBody::new("XYZ")
//!     .part([("Content-Type", "text/plain")], "one")
//!     .part([("Content-Type", "text/plain")], "two");
//! let response = ResponseBuilder::new("b", "k").siblings(body).build();
//!
//! let fetched = FetchResponse::from_response(response).unwrap();
//! assert_eq!(fetched.siblings().len(), 2);
//! ```

pub mod logging;
pub mod multipart;
pub mod response;

pub use logging::{LoggerHandle, logger};
pub use multipart::SiblingBody;
pub use response::{ResponseBuilder, TestResult};
