pub mod init;
#[cfg(windows)]
pub mod list;
#[cfg(windows)]
pub mod restore;
#[cfg(windows)]
pub mod run;
#[cfg(windows)]
pub mod snapshot;

/// Reports that window commands need a Windows desktop.
#[cfg(not(windows))]
pub fn unsupported() {
    eprintln!("Error: this command is only supported on Windows.");
    std::process::exit(1);
}
