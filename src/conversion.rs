use crate::quantity::{AreaScenario, QuantityKind};
use crate::reference::ReferenceCar;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 알 수 없는 면적 시나리오 문자열
    InvalidScenario(String),
    /// 지원하지 않는 물리량 이름
    UnknownQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::InvalidScenario(s) => write!(f, "invalid scenario: {s}"),
            ConversionError::UnknownQuantity(q) => write!(f, "unknown conversion type: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Fabia 단위는 소수 둘째 자리까지 반올림한다. 0.5는 0에서 먼 쪽으로 올린다.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// 질량을 Fabia 단위로 변환한다.
pub fn mass_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_mass_unit(unit)?;
    Ok(round2(to_kg(value, unit) / car.mass_kg))
}

/// 길이를 Fabia 단위로 변환한다.
pub fn length_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_length_unit(unit)?;
    Ok(round2(to_m(value, unit) / car.length_m))
}

/// 폭을 Fabia 단위로 변환한다.
pub fn width_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_length_unit(unit)?;
    Ok(round2(to_m(value, unit) / car.width_m))
}

/// 높이를 Fabia 단위로 변환한다.
pub fn height_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_length_unit(unit)?;
    Ok(round2(to_m(value, unit) / car.height_m))
}

/// 면적을 Fabia 단위로 변환한다. 시나리오가 분모(기준 면적)를 결정한다.
pub fn area_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
    scenario: AreaScenario,
) -> Result<f64, ConversionError> {
    let unit = parse_area_unit(unit)?;
    Ok(round2(to_m2(value, unit) / car.area_m2(scenario)))
}

/// 출력을 Fabia 단위로 변환한다.
pub fn power_to_fabia_units(
    car: &ReferenceCar,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_power_unit(unit)?;
    Ok(round2(to_kw(value, unit) / car.power_kw))
}

/// 물리량 이름으로 디스패치하는 공용 진입점. embed 경로가 사용한다.
///
/// 시나리오는 면적에만 적용되며 나머지 물리량에서는 무시한다.
pub fn to_fabia_units(
    car: &ReferenceCar,
    kind: QuantityKind,
    value: f64,
    unit: &str,
    scenario: Option<AreaScenario>,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Mass => mass_to_fabia_units(car, value, unit),
        QuantityKind::Length => length_to_fabia_units(car, value, unit),
        QuantityKind::Width => width_to_fabia_units(car, value, unit),
        QuantityKind::Height => height_to_fabia_units(car, value, unit),
        QuantityKind::Area => area_to_fabia_units(car, value, unit, scenario.unwrap_or_default()),
        QuantityKind::Power => power_to_fabia_units(car, value, unit),
    }
}

/// 물리량 이름 문자열을 enum으로 변환한다.
pub fn parse_quantity_kind(s: &str) -> Result<QuantityKind, ConversionError> {
    match s.to_lowercase().as_str() {
        "mass" => Ok(QuantityKind::Mass),
        "length" => Ok(QuantityKind::Length),
        "width" => Ok(QuantityKind::Width),
        "height" => Ok(QuantityKind::Height),
        "area" => Ok(QuantityKind::Area),
        "power" => Ok(QuantityKind::Power),
        _ => Err(ConversionError::UnknownQuantity(s.to_string())),
    }
}

/// 면적 시나리오 문자열을 enum으로 변환한다.
pub fn parse_scenario(s: &str) -> Result<AreaScenario, ConversionError> {
    match s.to_lowercase().as_str() {
        "packed" => Ok(AreaScenario::Packed),
        "parking_lot" => Ok(AreaScenario::ParkingLot),
        _ => Err(ConversionError::InvalidScenario(s.to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "t" | "ton" | "tonne" => Ok(MassUnit::Ton),
        "g" => Ok(MassUnit::Gram),
        "mg" => Ok(MassUnit::Milligram),
        "lb" | "lbs" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "yd" | "yard" => Ok(LengthUnit::Yard),
        "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "mm2" | "mm^2" => Ok(AreaUnit::SquareMillimeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        "in2" | "in^2" => Ok(AreaUnit::SquareInch),
        "yd2" | "yd^2" => Ok(AreaUnit::SquareYard),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "acre" => Ok(AreaUnit::Acre),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kw" => Ok(PowerUnit::Kilowatt),
        "hp" => Ok(PowerUnit::Horsepower),
        "w" => Ok(PowerUnit::Watt),
        "mw" => Ok(PowerUnit::Megawatt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
