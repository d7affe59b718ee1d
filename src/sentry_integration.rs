use sentry::integrations::panic::register_panic_handler;
use sentry::internals::ClientInitGuard;
use sentry::ClientOptions;

use crate::config::SentryConfig;

/// Installs the sentry client and panic handler when a dsn is configured.
/// Events are sent while the returned guard is alive.
pub fn init(sentry_config: Option<&SentryConfig>) -> Option<ClientInitGuard> {
    sentry_config.map(|config_sentry| {
        info!("Initializing sentry");
        let result = sentry::init((
            config_sentry.dsn.clone(),
            ClientOptions {
                release: sentry_crate_release!(),
                ..Default::default()
            },
        ));
        register_panic_handler();
        result
    })
}
