pub mod ramp_file;
