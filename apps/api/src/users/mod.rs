// User activity surface.
// One read-only operation: look up a user by identifier, report its activity flag.

pub mod activity;
pub mod handlers;
