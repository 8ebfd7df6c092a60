use serde::{Deserialize, Serialize};

/// 출력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Horsepower,
    Watt,
    Megawatt,
}

impl PowerUnit {
    /// 1 단위를 kW로 환산하는 계수.
    pub fn factor(self) -> f64 {
        match self {
            PowerUnit::Kilowatt => 1.0,
            PowerUnit::Horsepower => 0.7457,
            PowerUnit::Watt => 0.001,
            PowerUnit::Megawatt => 1000.0,
        }
    }
}

/// 출력을 kW로 환산한다.
pub fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    value * unit.factor()
}
