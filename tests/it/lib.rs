mod support;

mod emit;
mod leb128;
mod optimize;
mod probe;
