//! Page state objects
//!
//! Each page instance owns its state exclusively; views only render it.
//!
//! - `create`: long URL input, submission, in-flight flag, result
//! - `redirect`: one-shot resolution of a redirect code
//! - `clipboard`: copy the displayed short URL
//! - `notification`: transient messages shared by the pages

pub mod clipboard;
pub mod create;
pub mod notification;
pub mod redirect;

pub use clipboard::{ClipboardWriter, copy_short_url};
pub use create::{CreatePage, PendingCreate};
pub use notification::{Notification, NotificationLevel, Notifications};
pub use redirect::{
    Navigation, Navigator, PendingResolve, ROOT_PATH, RecordingNavigator, RedirectPage,
    ResolveState, navigation_for,
};
