//! Test modules kept out of the implementation files.
