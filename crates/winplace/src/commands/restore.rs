pub fn execute() {
    match winplace_windows::session::restore_once() {
        // A partial restore still exits 0; failed windows were already
        // listed by the session.
        Ok(report) if report.entries.is_empty() => {
            println!("No open window matches the stored snapshot.");
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
