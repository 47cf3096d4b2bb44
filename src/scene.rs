pub mod assembler;
pub mod host;
