/// Global configuration options for a flowforge run.
///
/// Controls the runtime behavior of the application: banner display,
/// output density and clipboard access. It is constructed from CLI
/// arguments and handed down to the library crates so they never have
/// to know about `clap`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Toggles the display of the startup banner.
    ///
    /// If `true`, the application starts straight into log output or the
    /// full-screen UI without printing the branding line. Useful for
    /// clean logs or frequent invocations.
    pub no_banner: bool,

    /// Controls the visual density of the terminal output.
    ///
    /// Mapped from the `-q` / `--quiet` CLI flag.
    ///
    /// # Levels
    /// * **0** (Default): Full UI with colors, headers and separators.
    /// * **1**: Decorations suppressed; only data and log lines.
    /// * **2**: Raw mode. Strictly data (the bare command string),
    ///   suitable for piping into other tools.
    pub quiet: u8,

    /// Disables every clipboard write.
    ///
    /// When `true`, copy actions are skipped entirely instead of being
    /// attempted and logged on failure. Intended for headless sessions
    /// where no clipboard provider exists.
    pub no_copy: bool,
}
