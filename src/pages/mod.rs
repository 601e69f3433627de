//! Page modules for the server-rendered screens this crate enhances.
//!
//! ARCHITECTURE
//! ============
//! Each page owns binding to its template markup and delegates rendering
//! details to `components` and transitions to `state`.

pub mod admin_log;
pub mod game_session;
