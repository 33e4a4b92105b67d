//! Todo API for tododb
//!
//! The two entry points collaborators use:
//! - `lookup_by_id`: single todo or `NotFound`
//! - `query`: filtered, limited, ordered todos or `BadInput`
//!
//! Transport concerns (status codes, envelopes) belong to the caller.

mod handler;

pub use handler::TodoApi;
