//! NSM (Non Session Management) integration for ondine hosts.
//!
//! The session manager drives the host over OSC: it tells it where its
//! state lives (`open`), when to persist it (`save`) and whether its
//! window should be shown. [`SessionShell`] implements that protocol
//! against an abstract [`NsmClient`] connection and an abstract
//! [`SynthEngine`](ondine_core::SynthEngine), keeping the wire transport
//! out of this crate.

pub mod client;
pub mod shell;

pub use client::{NsmClient, CAPABILITIES};
pub use shell::{ClosePrompt, SessionShell, ShellConfig};
