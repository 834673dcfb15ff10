//! Standardized span constructors for command observability.

pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a command execution.
    pub fn command(name: &str, actor: &str, target: Option<&str>) -> Span {
        if let Some(target) = target {
            info_span!("command", name = %name, actor = %actor, target = %target)
        } else {
            info_span!("command", name = %name, actor = %actor)
        }
    }
}
