//! Session-aware host shell.
//!
//! [`SessionShell`] wires a [`SynthEngine`] to an [`NsmClient`]: it
//! reacts to the manager's `open`/`save`/`show`/`hide` messages, keeps
//! the per-session preset file under the session directory, and reports
//! dirty state and GUI visibility back to the server. While a session is
//! active the manager owns the document lifecycle, so the shell also
//! suppresses the usual unsaved-changes confirmation on close.

use std::path::PathBuf;

use ondine_core::{load_preset, save_preset, session_preset_path, SynthEngine};

use crate::client::NsmClient;

/// Confirmation seam for closing with unsaved changes outside a session.
pub trait ClosePrompt {
    /// Unsaved changes exist; returns whether to close anyway.
    fn confirm_close(&mut self) -> bool;
}

/// Static configuration of a shell instance.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Product short name, used as the preset file extension.
    pub product: String,
    /// Whether the GUI starts visible.
    pub visible: bool,
}

impl ShellConfig {
    pub fn new(product: &str) -> Self {
        Self {
            product: product.to_string(),
            visible: true,
        }
    }
}

/// Host window state minus the actual windowing.
pub struct SessionShell<E, C> {
    engine: E,
    client: Option<C>,
    config: ShellConfig,
    /// Latched "already told the server we are dirty" flag, reset by
    /// open and save.
    nsm_dirty: bool,
    /// Unsaved-changes flag of the loaded preset itself.
    dirty_preset: bool,
    visible: bool,
}

impl<E: SynthEngine, C: NsmClient> SessionShell<E, C> {
    pub fn new(engine: E, config: ShellConfig) -> Self {
        let visible = config.visible;
        Self {
            engine,
            client: None,
            config,
            nsm_dirty: false,
            dirty_preset: false,
            visible,
        }
    }

    /// Attach the session-manager connection and start the handshake.
    pub fn set_client(&mut self, mut client: C) {
        client.announce(&self.config.product, crate::client::CAPABILITIES);
        self.client = Some(client);
    }

    pub fn engine(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dirty_preset(&self) -> bool {
        self.dirty_preset
    }

    fn session_active(&self) -> bool {
        self.client.as_ref().is_some_and(NsmClient::is_active)
    }

    /// Preset file for the current session, if one is active.
    pub fn session_file(&self) -> Option<PathBuf> {
        let client = self.client.as_ref().filter(|c| c.is_active())?;
        Some(session_preset_path(
            client.path_name(),
            client.display_name(),
            &self.config.product,
        ))
    }

    /// Handle the manager's `open` message.
    ///
    /// Cycles the engine onto the session-assigned client id, loads the
    /// session preset when one exists, then acknowledges. A missing
    /// session directory is created; directory or preset errors are
    /// logged and do not fail the open.
    pub fn open_session(&mut self) {
        if !self.session_active() {
            return;
        }

        self.engine.deactivate();
        self.engine.close();

        let Some(client) = self.client.as_mut() else {
            return;
        };
        let path_name = client.path_name().to_string();
        let client_id = client.client_id().to_string();
        log::info!("session open: {path_name}");

        self.engine.open(&client_id);
        self.engine.activate();

        if let Err(err) = std::fs::create_dir_all(&path_name) {
            log::warn!("cannot create session directory {path_name}: {err}");
        }

        if let Some(file) = self.session_file() {
            if file.exists() {
                if let Err(err) = load_preset(&file, &mut self.engine) {
                    log::warn!("cannot load session preset {}: {err}", file.display());
                }
            }
        }

        self.nsm_dirty = false;
        self.dirty_preset = false;

        let Some(client) = self.client.as_mut() else {
            return;
        };
        client.open_reply();
        client.dirty(false);
        client.visible(self.visible);
    }

    /// Handle the manager's `save` message.
    ///
    /// The preset file is rewritten only when changes were reported since
    /// the last open or save; the reply is sent either way.
    pub fn save_session(&mut self) {
        if !self.session_active() {
            return;
        }

        if self.nsm_dirty {
            if let Some(file) = self.session_file() {
                log::info!("session save: {}", file.display());
                if let Err(err) = save_preset(&file, &mut self.engine) {
                    log::warn!("cannot save session preset {}: {err}", file.display());
                }
            }
            self.nsm_dirty = false;
            self.dirty_preset = false;
        }

        let Some(client) = self.client.as_mut() else {
            return;
        };
        client.save_reply();
        client.dirty(false);
    }

    /// Handle the manager's `show` message.
    pub fn show_session(&mut self) {
        self.visible = true;
        if let Some(client) = self.client.as_mut() {
            client.visible(true);
        }
    }

    /// Handle the manager's `hide` message.
    pub fn hide_session(&mut self) {
        self.visible = false;
        if let Some(client) = self.client.as_mut() {
            client.visible(false);
        }
    }

    /// Record an unsaved change to the loaded preset.
    ///
    /// The server is notified only on the first change since the last
    /// open or save; further calls just update the local flag.
    pub fn update_dirty_preset(&mut self, dirty: bool) {
        self.dirty_preset = dirty;
        if self.session_active() && !self.nsm_dirty {
            if let Some(client) = self.client.as_mut() {
                client.dirty(true);
            }
            self.nsm_dirty = true;
        }
    }

    /// Write a parameter and mark the preset dirty.
    pub fn update_param(&mut self, index: ondine_core::ParamIndex, value: f32) {
        self.engine.set_param(index, value);
        self.update_dirty_preset(true);
    }

    /// Decide whether a window-close request may proceed.
    ///
    /// Inside a session the manager owns the document, so local unsaved
    /// changes are dropped without asking. Outside one, unsaved changes
    /// go through the prompt.
    pub fn close_requested(&mut self, prompt: &mut dyn ClosePrompt) -> bool {
        if self.session_active() {
            self.dirty_preset = false;
        }
        if self.dirty_preset {
            prompt.confirm_close()
        } else {
            true
        }
    }
}
