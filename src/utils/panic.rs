use std::panic;

/// Routes panic messages through `tracing` so they end up next to the request logs.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_else(|| "<unknown>".to_owned());

        let payload = info.payload();
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            *message
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.as_str()
        } else {
            "<non-string panic payload>"
        };

        error!(location = %location, "panicked: {message}");
    }));
}
