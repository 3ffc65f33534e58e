pub mod presentation;
pub mod slide;
pub mod timeline;

pub use presentation::{NavigationMode, NavigationOutcome, PresentationState, RejectReason};
pub use slide::{Slide, SlideMark, slides_from_titles};
pub use timeline::{DeferredTask, TransitionTimeline};
