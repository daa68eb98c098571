//! 급수(상수) 관경 선정 모듈.

pub mod potable_sizing;

pub use potable_sizing::*;
