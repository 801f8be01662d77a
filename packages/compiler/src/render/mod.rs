//! Render Module
//!
//! Evaluation of compiled messages. A compiled message never produces output
//! by itself; it hands its segments and keys to a [`Renderer`], so the same
//! compiled form can yield a flat string or structured fragments.

pub mod context;
pub mod renderer;

pub use context::{InterpolationContext, Layered};
pub use renderer::{evaluate, Fragment, FragmentRenderer, Renderer, StringRenderer};
