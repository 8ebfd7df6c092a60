/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Mass,
    Length,
    Width,
    Height,
    Area,
    Power,
}

impl QuantityKind {
    /// 경로/쿼리에서 쓰이는 소문자 이름.
    pub fn as_str(self) -> &'static str {
        match self {
            QuantityKind::Mass => "mass",
            QuantityKind::Length => "length",
            QuantityKind::Width => "width",
            QuantityKind::Height => "height",
            QuantityKind::Area => "area",
            QuantityKind::Power => "power",
        }
    }
}

/// 면적 변환 시나리오. 기준 면적의 분모를 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaScenario {
    /// 차를 빈틈없이 붙여 세운 경우 (길이 × 폭).
    #[default]
    Packed,
    /// 주차장 기준, 통행 공간 포함 1대당 면적.
    ParkingLot,
}

impl AreaScenario {
    /// 번역 파일의 시나리오 라벨 키.
    pub fn as_str(self) -> &'static str {
        match self {
            AreaScenario::Packed => "packed",
            AreaScenario::ParkingLot => "parking_lot",
        }
    }
}
