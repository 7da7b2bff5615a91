use {
    crate::config::Config,
    std::{panic::PanicHookInfo, sync::Once},
    time::macros::format_description,
    tracing::Level,
    tracing_subscriber::{
        EnvFilter,
        Layer,
        fmt::{time::UtcTime, writer::MakeWriterExt as _},
        prelude::*,
        util::SubscriberInitExt,
    },
};

/// Initializes the global tracing subscriber and routes panics through it.
/// Fails if a subscriber was already installed in this process.
pub fn initialize(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    set_tracing_subscriber(config)?;
    std::panic::set_hook(Box::new(tracing_panic_hook));
    Ok(())
}

/// Like [`initialize`], but can be called multiple times in a row. Later calls
/// are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(env_filter: &str) {
    // The subscriber is a global object, so only the first test to get here
    // installs it.
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let config = Config::default()
            .with_env_filter(env_filter)
            .with_stderr_threshold(Level::ERROR);
        if set_tracing_subscriber(&config).is_ok() {
            std::panic::set_hook(Box::new(tracing_panic_hook));
        }
    });
}

fn set_tracing_subscriber(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    let stderr_threshold = config.stderr_threshold.unwrap_or(Level::ERROR);
    let writer = std::io::stdout
        .with_min_level(stderr_threshold)
        .or_else(std::io::stderr);
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ));

    let fmt_layer = if config.use_json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(timer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_timer(timer)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::new(&config.env_filter)))
        .try_init()
}

/// Panic hook that prints roughly the same message as the default panic hook
/// but uses tracing:error instead of stderr.
fn tracing_panic_hook(panic: &PanicHookInfo) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("thread '{name}' {panic}\nstack backtrace:\n{backtrace}");
}
