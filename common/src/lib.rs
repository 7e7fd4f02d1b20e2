//! Wire model shared by the browser client and the roster server.

pub mod model;
pub mod requests;
