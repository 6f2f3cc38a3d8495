use anyhow::Result;

use vattavada::{ClientConfig, FileSessionStore, HttpStayClient, SessionGate, StayOptions};

pub mod admin;
pub mod booking;
pub mod catalog;
pub mod properties;
pub mod session;
pub mod whatsapp;

/// Everything a command needs, resolved once from config and flags
pub struct CommandContext {
    pub config: ClientConfig,
    pub options: StayOptions,
    pub client: HttpStayClient,
}

impl CommandContext {
    pub fn new(config: ClientConfig, options: StayOptions) -> Result<Self> {
        let client = HttpStayClient::new(&config)?;
        Ok(Self {
            config,
            options,
            client,
        })
    }

    pub fn json(&self) -> bool {
        self.options.output_format == vattavada::OutputFormat::Json
    }

    /// Gate over the on-disk session flag
    pub fn open_gate(&self) -> Result<SessionGate<FileSessionStore>> {
        let store = FileSessionStore::new(self.config.session_path()?);
        Ok(SessionGate::open(store, self.config.admin_credentials()))
    }
}
