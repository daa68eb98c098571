//! 오수(배수) 관경 선정 모듈.

pub mod drainage_sizing;

pub use drainage_sizing::*;
