//! Pan-and-zoom plan canvas: camera math, input model, the view-state
//! controller and its async fetch driver.

pub mod camera;
pub mod controller;
pub mod input;
pub mod session;

pub use camera::Camera;
pub use controller::{DocRequest, PlanCanvas, RequestToken};
pub use session::{ContentSource, FetchError, PlanSession};
