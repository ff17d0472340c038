use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Set once SIGINT or SIGTERM arrives.
pub(crate) static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// How often a sleeping loop looks at the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[cfg(unix)]
pub(crate) fn install() {
    // SIGTERM (docker stop) + SIGINT (Ctrl+C)
    for sig in [libc::SIGTERM, libc::SIGINT] {
        unsafe {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub(crate) fn install() {
    tracing::debug!("no signal handlers on this platform, interrupt terminates the process");
}

#[cfg(unix)]
extern "C" fn on_signal(_sig: libc::c_int) {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Sleep for `duration`, returning early once `flag` is set.
pub(crate) fn sleep_unless(flag: &AtomicBool, duration: Duration) {
    let deadline = Instant::now() + duration;
    while !flag.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        std::thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}
