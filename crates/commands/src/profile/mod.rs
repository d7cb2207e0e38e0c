//! Shell-profile management
//!
//! The core of the tool: locating the user's shell profile, generating the
//! marker-delimited gateway block, and reconciling it into the file
//! idempotently.

mod block;
mod locate;
mod reconcile;

pub use block::{ConfigBlock, GATEWAY_BASE_URL, GatewayMode, KEYCHAIN_SERVICE, MARKER_TAG, SecretSource};
pub use locate::locate_profile;
pub use reconcile::{ReconcileOutcome, apply_block, contains_gateway_block, strip_gateway_blocks};
