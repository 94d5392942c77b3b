//! Contract bindings for the DTF factory, the LairryFink fund and the
//! mintable ERC20 tokens used by the simulator. The `wrappers` module is
//! generated by `build.rs` from the ABI files in `abi/`.

pub mod wrappers;
