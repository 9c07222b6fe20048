pub mod dial;
pub mod readout;
