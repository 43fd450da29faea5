pub fn execute() {
    if let Err(e) = winplace_windows::session::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
