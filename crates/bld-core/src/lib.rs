//! BLD core: download bundle archives named by a manifest and collect their
//! license files into an output directory tree.

pub mod config;
pub mod logging;

pub mod archive;
pub mod fetch;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod url_model;
