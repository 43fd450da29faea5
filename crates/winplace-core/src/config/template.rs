/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `winplace init` to create a starter file users can edit.
pub fn generate_config() -> String {
    r##"# Winplace configuration
# Location: ~/.config/winplace/config.toml

[persistence]
# Keep the last snapshot on disk so it survives a restart.
enabled = true
# Database file. Defaults to ~/.config/winplace/WindowPositions.sqlite.
# path = "C:/Users/me/WindowPositions.sqlite"

[logging]
# Enable file logging to ~/.config/winplace/logs/winplace.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

/// Generates the default `keybindings.toml` contents.
///
/// The bindings are rendered from [`super::keybinding::defaults`] so the
/// template never drifts from the built-in values.
pub fn generate_keybindings() -> String {
    let mut out = String::from(
        "# Winplace keybindings\n\
         # Location: ~/.config/winplace/keybindings.toml\n\
         #\n\
         # trigger:   snapshot | restore | quit\n\
         # key:       A-Z, 0-9, F1-F12, or a named key (Escape, Space, Home, ...)\n\
         # modifiers: any of ctrl, alt, shift, win\n",
    );

    for binding in super::keybinding::defaults() {
        let trigger = match binding.trigger {
            crate::Trigger::Snapshot => "snapshot",
            crate::Trigger::Restore => "restore",
            crate::Trigger::Quit => "quit",
        };
        let modifiers: Vec<String> = binding
            .modifiers
            .iter()
            .map(|m| format!("\"{}\"", format!("{m:?}").to_ascii_lowercase()))
            .collect();
        out.push_str(&format!(
            "\n[[keybinding]]\ntrigger = \"{trigger}\"\nkey = \"{}\"\nmodifiers = [{}]\n",
            binding.key,
            modifiers.join(", ")
        ));
    }

    out
}
