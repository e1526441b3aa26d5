//! Background services for the chrome.
//!
//! Each service is an async seam: the chrome dispatches a query as an effect
//! description and the answer re-enters as a message. The in-process
//! implementations here keep the chrome runnable without external hosts.

pub mod history;
pub mod navigation;
pub mod search;
