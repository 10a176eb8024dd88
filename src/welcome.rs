use tracing::info;

pub fn welcome(run_mode: &str) {

    let version = env!("CARGO_PKG_VERSION");

    let title = [
        r"  _   _   _    ____  ",
        r" | | | | / \  / ___| ",
        r" | | | |/ _ \| |     ",
        r" | |_| / ___ \ |___  ",
        r"  \___/_/   \_\____| ",
    ];
    for line in title {
        println!("{}", line);
    }
    println!();
    println!("Version: {} | Run-Mode: {}", version, run_mode);
    println!();
    info!("Starting up user autocomplete in {run_mode} mode.");
}
