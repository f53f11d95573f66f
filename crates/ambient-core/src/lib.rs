//! Platform-free animation logic for the ambient page backdrop.
//!
//! Three controllers share one shape: a high-frequency signal updates local
//! state and asks for a frame through a [`FrameTicket`]; the frame recomputes
//! the output once and writes it to a surface. Every controller also carries
//! a [`MotionMode`] so the reduced-motion preference can swap continuous
//! animation for a snapped static state.
//!
//! Nothing here touches the DOM. Hosts implement the seams in [`surface`] and
//! [`schedule`] and feed signals in.

pub mod color;
pub mod constants;
pub mod crossfade;
pub mod error;
pub mod motion;
pub mod palette;
pub mod parallax;
pub mod schedule;
pub mod surface;
pub mod tilt;
pub mod wash;

pub use color::Rgb;
pub use crossfade::{Crossfade, PaneState};
pub use error::{AmbientError, AmbientResult};
pub use motion::MotionMode;
pub use palette::Palette;
pub use parallax::{LayerDescriptor, LayerTransform, ParallaxController, ScrollMetrics, Viewport};
pub use schedule::{FrameId, FrameScheduler, FrameTicket, QueuedFrames};
pub use surface::{AmbientOutput, AmbientSlot, LayerSurface, TiltSurface};
pub use tilt::{PanelRect, TiltConfig, TiltController, TiltState};
pub use wash::{SectionBlender, SectionKey, VisibilityEntry};
