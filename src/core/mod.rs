//! Platform-independent behavior for the site: everything here is plain
//! computation over numbers and ids, so it builds and tests on the host.

/// Open/closed bookkeeping for expandable media cards.
pub mod cards;
/// Scroll-driven pseudo-3D carousel.
///
/// Cards sit on a circular arc facing the viewer. Scroll progress rotates the
/// whole arc; each card's depth then drives its scale, opacity, blur and
/// stacking order. Everything here is a pure function of progress and config.
pub mod carousel;
pub mod constants;
/// Contact form validation ahead of handing the message to the email service.
pub mod contact;
pub mod menu;
pub mod scroll;
/// Scroll-synced navigation: picks the single section whose nav item is lit.
///
/// The resolver keeps the latest intersection ratio per registered section and
/// resolves the active one on demand. It holds no DOM references; the caller
/// feeds observer entries in and applies the result.
pub mod sections;

pub use cards::*;
pub use carousel::*;
pub use contact::*;
pub use menu::*;
pub use scroll::*;
pub use sections::*;
