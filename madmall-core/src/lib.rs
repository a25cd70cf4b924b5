//! MADMall core: the plan canvas, its document store, page views and the
//! integration environment validators shared by the web server.

pub mod canvas;
pub mod env;
pub mod feed;
pub mod manifest;
pub mod storage;
pub mod types;
pub mod view;
