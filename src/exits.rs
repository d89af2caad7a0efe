//! Exit handling: signal handlers and terminal cleanup.

const GOODBYE: &[u8] = b"\nInterrupted by user. Goodbye!\n";
const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

/// Put the tty back into cooked mode with echo.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Escape codes only when stdout is a tty (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: say goodbye and exit; atexit restores the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe {
        libc::write(2, GOODBYE.as_ptr() as *const libc::c_void, GOODBYE.len());
        libc::exit(0)
    }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps and away from ptrace by other users.
pub fn harden_process() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
