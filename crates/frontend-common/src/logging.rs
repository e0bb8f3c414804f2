//! Tracing setup for frontend pages

/// Install the global tracing subscriber
///
/// In the browser, events go to the devtools console and panics are reported
/// there too. Natively, `RUST_LOG` controls the filter. Calling this twice is
/// harmless.
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        console_error_panic_hook::set_once();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(tracing_web::MakeWebConsoleWriter::new());

        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::info!("tracing initialised");
    }
}
