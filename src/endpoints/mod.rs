//! Request constructors and response payloads for specific Graph API
//! endpoints.
//!
//! Each `*_req` function returns a built [`GraphRequest`](crate::GraphRequest)
//! for the caller to send with [`HttpClient`](crate::HttpClient). The payload
//! structs decode with [`decode_into`](crate::graph::decode_into) and carry
//! the API's `error` object when one was returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use fb_graph::endpoints::pages::{page_leadgen_setup_req, PageLeadgenSetup};
//!
//! let setup: PageLeadgenSetup = client
//!     .fetch(&page_leadgen_setup_req(&config, page_token, "1234"))
//!     .await?;
//! if let Some(error) = setup.error {
//!     println!("{}", error.user_err_message());
//! }
//! ```

pub mod apps;
pub mod me;
pub mod pages;
pub mod system_users;
pub mod tokens;
