pub mod config_helper;
pub mod fence_stripper;
