use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

use self::emitter::Emitter;
use self::generator::Generator;

mod catalog;
mod cfg;
mod emitter;
mod entry;
mod error;
mod fields;
mod generator;
mod signal;
mod template;

fn main() {
    let args = cfg::Args::parse();
    let config = cfg::Config::new(args);

    init_logging();
    debug!(config = ?config, "starting up");
    signal::install();

    info!("starting structured JSON log generator");
    info!("generating logs to stdout");

    // Each line goes out in one write; a failed line must not linger in a buffer.
    let out = io::stdout().lock();
    let generator = Generator::new(rand::thread_rng(), &config);
    let pause = |delay: Duration| signal::sleep_unless(&signal::SHUTDOWN, delay);

    Emitter::new(generator, out, pause, &signal::SHUTDOWN, &config).run();
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();

    INIT.call_once(|| {
        let default_filter = std::env::var("LOGGEN_LOG_FILTER").unwrap_or_else(|_| {
            if cfg!(test) {
                "trace".to_string()
            } else {
                "info".to_string()
            }
        });
        let env_filter = EnvFilter::new(default_filter);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr);
        if cfg!(test) {
            builder.with_test_writer().init();
        } else {
            builder.init();
        }
    });
}
