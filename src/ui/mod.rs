/// UI module exports
mod components;
pub mod options;
