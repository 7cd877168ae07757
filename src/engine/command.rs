//! The gallery's complete interactive vocabulary.
//!
//! Every user-facing operation (layout button, node click, sidebar toggle,
//! camera drag) is represented as a `GalleryCommand`. Consumers construct
//! commands and pass them to [`Gallery::execute`](super::Gallery::execute).

use glam::Vec2;

use crate::image::ImageId;
use crate::layout::LayoutKind;

/// A discrete or parameterized operation the gallery can perform.
///
/// ```ignore
/// gallery.execute(GalleryCommand::SetLayout { layout: LayoutKind::Grid });
/// gallery.execute(GalleryCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryCommand {
    // ── Layout ──────────────────────────────────────────────────────
    /// Switch the active layout.
    SetLayout {
        /// Layout to activate.
        layout: LayoutKind,
    },

    // ── Selection ───────────────────────────────────────────────────
    /// Select an image by id, or clear the selection with `None`.
    /// Selecting the current selection clears it.
    SelectImage {
        /// Image to select.
        id: Option<ImageId>,
    },

    /// A click landed on empty space.
    PointerMissed,

    /// A click at a viewport position; resolves to a node or a miss.
    Click {
        /// Position in normalized device coordinates (`+y` up).
        ndc: Vec2,
    },

    // ── Sidebar ─────────────────────────────────────────────────────
    /// Flip the image list sidebar.
    ToggleSidebar,

    /// Open or close the image list sidebar.
    SetSidebarOpen {
        /// Whether the sidebar should be open.
        open: bool,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera by `delta` pixels of pointer movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of pointer movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// The viewport changed size.
    Resize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}
