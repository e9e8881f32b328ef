// Server-rendered pages. Shell composition only; the embedded widgets own
// their own data fetching.

pub mod handlers;
pub mod templates;
