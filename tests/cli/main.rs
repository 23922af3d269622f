//! end-to-end tests of the uafacts cli (binary)

mod utils;

mod classify;
mod help;
mod rules;
mod version;
