use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 m이다. 길이/폭/높이 변환이 모두 이 단위를 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// 1 단위를 m로 환산하는 계수.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.34,
        }
    }
}

/// 길이를 m로 환산한다.
pub fn to_m(value: f64, unit: LengthUnit) -> f64 {
    value * unit.factor()
}
