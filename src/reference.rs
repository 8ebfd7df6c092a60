use crate::quantity::AreaScenario;

/// 기준 차량(Škoda Fabia 1.2 HTP)의 제원. 프로세스 시작 시 한 번 만들어
/// 읽기 전용으로 공유한다.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCar {
    /// 공차 중량 [kg]
    pub mass_kg: f64,
    /// 전장 [m]
    pub length_m: f64,
    /// 전폭 [m]
    pub width_m: f64,
    /// 전고 [m]
    pub height_m: f64,
    /// 주차장 기준 1대당 필요 면적 [m²] (통행 공간 포함)
    pub parking_area_m2: f64,
    /// 엔진 출력 [kW]
    pub power_kw: f64,
}

impl ReferenceCar {
    /// Škoda Fabia 1.2 HTP 제원.
    pub fn fabia() -> Self {
        Self {
            mass_kg: 1055.0,
            length_m: 3.96,
            width_m: 1.65,
            height_m: 1.498,
            parking_area_m2: 12.5,
            power_kw: 47.0,
        }
    }

    /// 빈틈없이 세웠을 때 1대가 차지하는 면적 [m²] (길이 × 폭).
    pub fn packed_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// 시나리오에 따른 기준 면적 [m²].
    pub fn area_m2(&self, scenario: AreaScenario) -> f64 {
        match scenario {
            AreaScenario::Packed => self.packed_area_m2(),
            AreaScenario::ParkingLot => self.parking_area_m2,
        }
    }
}

impl Default for ReferenceCar {
    fn default() -> Self {
        Self::fabia()
    }
}
