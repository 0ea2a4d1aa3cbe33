pub const SUBSCRIBE_ACKNOWLEDGEMENT: &str =
    "Thank you for subscribing! We'll keep you updated with the latest healthcare insights.";

/// Footer newsletter signup. The address is never sent anywhere, so every
/// press of SUBSCRIBE gets the same acknowledgement.
pub fn subscribe(_email: &str) -> &'static str {
    log::debug!("newsletter subscribe acknowledged locally");
    SUBSCRIBE_ACKNOWLEDGEMENT
}
