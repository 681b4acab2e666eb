//! strata-json Comprehensive Tests
//!
//! Cross-crate tests through the public facade:
//! - Date/time codec round trips in both modes
//! - Mapper encode/decode of annotated structs
//! - Marshaller dispatch and bulk invariants
//! - Configuration loading

mod common;

mod codec_roundtrip;
mod config_loading;
mod end_to_end;
mod marshal_invariants;
