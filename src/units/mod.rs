//! 단위 정의 및 기준 단위 환산 모듈 모음.

pub mod area;
pub mod length;
pub mod mass;
pub mod power;

pub use area::{to_m2, AreaUnit};
pub use length::{to_m, LengthUnit};
pub use mass::{to_kg, MassUnit};
pub use power::{to_kw, PowerUnit};
