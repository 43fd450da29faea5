pub fn execute() {
    match winplace_windows::session::snapshot_once() {
        Ok(count) => println!("\n{count} windows recorded."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
