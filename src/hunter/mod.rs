//! Hunter 기구 단위 확률 유량 모듈.

pub mod hunter_flow;

pub use hunter_flow::*;
