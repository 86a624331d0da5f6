//! Widgets for the Hydrogrid project browser.
//!
//! The centerpiece is [`ProjectGrid`], the row-windowed card grid; around
//! it sit the small interaction widgets the browser pages use: a carousel
//! with auto-advance, a scroll progress bar, reveal-on-scroll sections and
//! a pager. Widgets produce fully resolved view structures; turning those
//! into pixels is the rendering substrate's job.

pub mod widgets;

pub use widgets::{
    AttachedGrid, BadgeTone, CardDetails, CardView, CarouselSpec, CarouselState, GridWindow,
    Pager, ProjectGrid, ProjectGridSpec, RenderedRow, RevealSet, RevealState, ScrollProgressBar,
    StatusBadge,
};
