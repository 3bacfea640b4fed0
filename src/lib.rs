//! vortexmath - configuration and text rendering shared by the CLI

pub mod config;
pub mod format;

#[cfg(test)]
mod tests;
