//! Lifecycle of the process-wide application instance.
//!
//! Kept in a single test since the instance guard is global to the test binary.

use artbooth::client::{
    startup::{check_mount_point, Phase, DEFAULT_ROOT_ID},
    Application, BootstrapError, ClientConfig,
};

#[test]
fn initialize_mount_and_shutdown() {
    // Invalid configuration fails before claiming the instance
    let result = Application::initialize(ClientConfig::default().with_root_id("#"));
    assert_eq!(result.unwrap_err(), BootstrapError::InvalidRootId);

    let mut app = Application::initialize(ClientConfig::default())
        .expect("bootstrap should succeed with the default root element");
    assert_eq!(app.config().root_id(), DEFAULT_ROOT_ID);
    assert_eq!(app.phase(), Phase::Initialized);

    // Only one instance at a time
    let second = Application::initialize(ClientConfig::default());
    assert_eq!(second.unwrap_err(), BootstrapError::AlreadyInitialized);

    // A document without the root element fails the mount and leaves it unmounted
    let document = ["header", "footer"];
    let result = app.mount_with(|config| {
        check_mount_point(config.root_id(), |id| document.contains(&id))
    });
    assert_eq!(
        result,
        Err(BootstrapError::MountPointMissing("app".to_string()))
    );
    assert_eq!(app.phase(), Phase::Initialized);

    let document = ["header", "app", "footer"];
    let mut mounted_into = None;
    app.mount_with(|config| {
        check_mount_point(config.root_id(), |id| document.contains(&id))?;
        mounted_into = Some(config.root_id().to_string());
        Ok(())
    })
    .expect("mount should succeed");
    assert_eq!(mounted_into.as_deref(), Some("app"));
    assert_eq!(app.phase(), Phase::Mounted);

    let again = app.mount_with(|_| Ok(()));
    assert_eq!(again, Err(BootstrapError::AlreadyMounted));

    app.shutdown();

    // Shutdown releases the instance; the logger is not reinstalled
    let app = Application::initialize(ClientConfig::default().with_root_id("#root"))
        .expect("re-initialize after shutdown");
    assert_eq!(app.config().root_id(), "root");
    app.shutdown();

    // Dropping an instance without shutdown also releases it
    {
        let _dropped = Application::initialize(ClientConfig::default())
            .expect("initialize before drop");
        assert_eq!(
            Application::initialize(ClientConfig::default()).unwrap_err(),
            BootstrapError::AlreadyInitialized
        );
    }

    let app = Application::initialize(ClientConfig::default())
        .expect("re-initialize after an instance was dropped");
    app.shutdown();
}
