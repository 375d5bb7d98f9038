/// Blocking, user-facing notice (an alert box on the web, a message dialog on desktop).
pub trait Notifier {
    fn notify(&self, message: &str);
}
