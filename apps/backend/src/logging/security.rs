use tracing::warn;

use crate::trace_ctx;

/// An anonymous request hit a protected route.
pub fn sign_in_required(path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SIGN_IN_REQUIRED",
        %trace_id,
        path,
        "Protected route requested without a session"
    );
}

/// The subscription lookup failed and the gate denied access.
pub fn subscription_check_unavailable(path: &str, user_id: &str, error: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SUBSCRIPTION_CHECK_FAILED",
        %trace_id,
        path,
        user_id,
        error,
        "Subscription lookup failed; redirecting to subscribe"
    );
}
