use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Ton,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl MassUnit {
    /// 1 단위를 kg으로 환산하는 계수.
    pub fn factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Ton => 1000.0,
            MassUnit::Gram => 0.001,
            MassUnit::Milligram => 1e-6,
            MassUnit::Pound => 0.453592,
            MassUnit::Ounce => 0.0283495,
        }
    }
}

/// 질량을 kg으로 환산한다.
pub fn to_kg(value: f64, unit: MassUnit) -> f64 {
    value * unit.factor()
}
