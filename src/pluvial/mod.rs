//! 우수(강우) 설계 매트릭스 계산 모듈.

pub mod drainage_area;

pub use drainage_area::*;
