//! The NSM client seam.
//!
//! [`NsmClient`] abstracts the OSC-level session-manager connection: the
//! shell only needs session identity, reply sending and the two
//! server-bound status messages (`dirty`, `gui_is_shown`/`gui_is_hidden`).
//! Tests substitute a recording fake; a production implementation wraps
//! an actual NSM OSC endpoint.

/// Capability string sent with `/nsm/server/announce`.
///
/// The shell relies on all three: `switch` (sessions may be reopened in
/// place), `dirty` (unsaved-state reporting) and `optional-gui`
/// (server-driven show/hide).
pub const CAPABILITIES: &str = ":switch:dirty:optional-gui:";

/// Session-manager connection as seen by the [`SessionShell`].
///
/// [`SessionShell`]: crate::shell::SessionShell
pub trait NsmClient {
    /// Start the handshake: advertise the application to the server
    /// under `app_name` with the given capability string.
    fn announce(&mut self, app_name: &str, capabilities: &str);

    /// Whether the announce handshake completed and a session is live.
    fn is_active(&self) -> bool;

    /// The client id the server assigned, used for per-instance engine
    /// naming.
    fn client_id(&self) -> &str;

    /// Absolute session directory for this client.
    fn path_name(&self) -> &str;

    /// Human-readable session name, used as the preset file stem.
    fn display_name(&self) -> &str;

    /// Acknowledge a completed `open`.
    fn open_reply(&mut self);

    /// Acknowledge a completed `save`.
    fn save_reply(&mut self);

    /// Report the unsaved-changes state to the server.
    fn dirty(&mut self, dirty: bool);

    /// Report GUI visibility to the server.
    fn visible(&mut self, visible: bool);
}
