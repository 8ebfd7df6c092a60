use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareMillimeter,
    SquareFoot,
    SquareInch,
    SquareYard,
    Hectare,
    Acre,
}

impl AreaUnit {
    /// 1 단위를 m²로 환산하는 계수.
    pub fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareCentimeter => 0.0001,
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareFoot => 0.092903,
            AreaUnit::SquareInch => 0.00064516,
            AreaUnit::SquareYard => 0.836127,
            AreaUnit::Hectare => 10000.0,
            AreaUnit::Acre => 4046.86,
        }
    }
}

/// 면적을 m²로 환산한다.
pub fn to_m2(value: f64, unit: AreaUnit) -> f64 {
    value * unit.factor()
}
