// Tracing setup for the service binary

/// Installs the global fmt subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt().with_target(true).try_init();
}
