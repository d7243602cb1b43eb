//! ipfwtui library exports for testing

pub mod core;
pub mod firewall;
pub mod tui;

#[cfg(test)]
pub mod test_support;
