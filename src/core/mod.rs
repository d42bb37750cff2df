// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{Document, Node};
pub use net::{FetchResponse, HttpTransport, Transport};
