/// A command or query sent through the [`crate::Mediator`].
///
/// Requests represent **intent**: they are transient values built per HTTP
/// call, consumed by exactly one handler, and never stored.
///
/// ## Design Constraints
///
/// Requests must be:
/// - **Send**: they cross into the handler's future, which may run on any worker thread
/// - **'static**: they own all their data (no borrowed request state)
pub trait Request: Send + 'static {
    /// Value produced on success.
    type Response: Send + 'static;

    /// Short name used in logs (the type name without its module path).
    fn name() -> &'static str {
        let full = core::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
