use menuboard_core::{Notice, Notifier};

/// Prints notices to stderr so they never mix with command output.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice);
    }
}
