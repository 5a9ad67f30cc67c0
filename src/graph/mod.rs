//! Decoding of Graph API responses.
//!
//! - [`decode_fill`] / [`read_response_fill`]: check the `error` envelope and
//!   hand successful bodies to a [`RespFiller`]
//! - [`decode_into`] / [`read_response`]: decode straight into a typed
//!   payload that carries its own `error` field
//! - [`CursorPaging`], [`TimePaging`], [`OffsetPaging`]: paging descriptors

mod errors;
mod paging;
mod response;

pub use errors::{DecodeError, GraphApiError, GraphError};
pub use paging::{CursorPaging, Cursors, OffsetPaging, Paging, TimePaging};
pub use response::{
    decode_fill, decode_into, read_response, read_response_fill, RespFiller, ERROR_KEY,
};
