//! Explicit application bootstrap.
//!
//! Nothing runs at load time: callers create the process-wide [`Application`] with
//! [`Application::initialize`], mount it with [`Application::mount`], and release it with
//! [`Application::shutdown`]. Only one instance may be alive at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus_logger::tracing::{self, Level};
use thiserror::Error;

/// DOM element id the application mounts into unless configured otherwise.
pub const DEFAULT_ROOT_ID: &str = "app";

static INSTANCE_ALIVE: AtomicBool = AtomicBool::new(false);
static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Reasons the application could not be initialized or mounted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("An application instance is already initialized; shut it down first")]
    AlreadyInitialized,
    #[error("The application is already mounted")]
    AlreadyMounted,
    #[error("Root element id must not be empty")]
    InvalidRootId,
    #[error("No element with id {0:?} found in the document to mount into")]
    MountPointMissing(String),
    #[error("Failed to install logger: {0}")]
    Logger(String),
}

/// Client bootstrap settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    root_id: String,
    log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let log_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            log_level,
        }
    }
}

impl ClientConfig {
    /// Sets the id of the mount element. A leading `#` is accepted and stripped.
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    /// Sets the maximum level of emitted log events.
    pub fn with_log_level(mut self, log_level: Level) -> Self {
        self.log_level = log_level;
        self
    }

    /// Id of the mount element, without the `#` prefix once initialized.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Maximum level of emitted log events.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    fn normalized(mut self) -> Result<Self, BootstrapError> {
        let id = self.root_id.trim();
        let id = id.strip_prefix('#').unwrap_or(id).trim();

        if id.is_empty() {
            return Err(BootstrapError::InvalidRootId);
        }

        self.root_id = id.to_string();
        Ok(self)
    }
}

/// Where an [`Application`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not yet attached to the page.
    Initialized,
    /// Router installed and root view mounted.
    Mounted,
}

/// The running application instance.
///
/// Dropping it releases the process-wide claim just like [`Application::shutdown`].
#[derive(Debug)]
pub struct Application {
    config: ClientConfig,
    phase: Phase,
}

impl Application {
    /// Creates the application instance and installs logging.
    ///
    /// # Errors
    /// - [`BootstrapError::InvalidRootId`] if the configured root id is empty
    /// - [`BootstrapError::AlreadyInitialized`] if another instance has not been shut down
    /// - [`BootstrapError::Logger`] if the global logger could not be installed
    pub fn initialize(config: ClientConfig) -> Result<Self, BootstrapError> {
        let config = config.normalized()?;

        if INSTANCE_ALIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BootstrapError::AlreadyInitialized);
        }

        if let Err(e) = install_logger(config.log_level) {
            INSTANCE_ALIVE.store(false, Ordering::Release);
            return Err(e);
        }

        tracing::debug!("Application initialized with root element #{}", config.root_id);

        Ok(Self {
            config,
            phase: Phase::Initialized,
        })
    }

    /// Configuration the instance was initialized with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Installs the router and mounts the root view into the configured element.
    pub fn mount(&mut self) -> Result<(), BootstrapError> {
        self.mount_with(launch)
    }

    /// Mounts using a custom launcher, which receives the validated configuration.
    pub fn mount_with<F>(&mut self, launcher: F) -> Result<(), BootstrapError>
    where
        F: FnOnce(&ClientConfig) -> Result<(), BootstrapError>,
    {
        if self.phase == Phase::Mounted {
            return Err(BootstrapError::AlreadyMounted);
        }

        launcher(&self.config)?;
        self.phase = Phase::Mounted;

        tracing::info!("Application mounted into #{}", self.config.root_id);

        Ok(())
    }

    /// Releases the process-wide instance so a new one can be initialized.
    pub fn shutdown(self) {
        tracing::info!("Application shut down");
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        INSTANCE_ALIVE.store(false, Ordering::Release);
    }
}

fn install_logger(level: Level) -> Result<(), BootstrapError> {
    // The subscriber is global and outlives any single application instance.
    if LOGGER_INSTALLED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Ok(());
    }

    dioxus_logger::init(level).map_err(|e| {
        LOGGER_INSTALLED.store(false, Ordering::Release);
        BootstrapError::Logger(e.to_string())
    })
}

fn launch(config: &ClientConfig) -> Result<(), BootstrapError> {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        check_mount_point(config.root_id(), |id| {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id))
                .is_some()
        })?;

        dioxus::LaunchBuilder::new()
            .with_cfg(dioxus::web::Config::new().rootname(config.root_id()))
            .launch(crate::client::App);
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    {
        tracing::debug!("Launching without a DOM; root element #{} is unused", config.root_id());

        dioxus::launch(crate::client::App);
    }

    Ok(())
}

/// Verifies the mount element exists, using `element_exists` to query the document.
///
/// # Errors
/// - [`BootstrapError::MountPointMissing`] if no element has id `root_id`
pub fn check_mount_point<F>(root_id: &str, element_exists: F) -> Result<(), BootstrapError>
where
    F: FnOnce(&str) -> bool,
{
    if element_exists(root_id) {
        Ok(())
    } else {
        Err(BootstrapError::MountPointMissing(root_id.to_string()))
    }
}
