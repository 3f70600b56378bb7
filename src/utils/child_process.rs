use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Boots user-supplied startup programs.
pub struct Nanny;

impl Nanny {
    /// Run the autostart script once, fire-and-forget.
    ///
    /// The child's stdio is detached and its exit status is never
    /// collected; a failing script is the user's problem, not the window
    /// manager's.
    ///
    /// # Errors
    ///
    /// Errors if the script cannot be spawned at all (missing file,
    /// missing execute permission).
    pub fn run_autostart(path: &Path) -> io::Result<Child> {
        Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}
