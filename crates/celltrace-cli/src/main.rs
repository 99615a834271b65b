use celltrace::{Cli, run};
use clap::Parser;

fn main() {
    // Restore default SIGPIPE handling so piping into `head`/`less`
    // terminates cleanly instead of panicking on a broken pipe
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
