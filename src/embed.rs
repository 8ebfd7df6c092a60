use crate::i18n::Translations;
use crate::quantity::AreaScenario;

/// embed 조각 생성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum EmbedError {
    /// 번역 파일에 없는 explanation 스타일
    UnknownStyle(String),
}

impl std::fmt::Display for EmbedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedError::UnknownStyle(s) => write!(f, "unknown explanation style: {s}"),
        }
    }
}

impl std::error::Error for EmbedError {}

/// 변환 결과를 지역화된 HTML 조각으로 만든다.
///
/// 템플릿은 `{value}`, `{unit}`, `{result}`, `{scenario}` 자리표시자를
/// 쓴다. 시나리오 라벨은 면적 변환에만 있고 나머지는 빈 문자열이다.
pub fn format_embed(
    tr: &Translations,
    style: &str,
    value: f64,
    unit: &str,
    fabia_units: f64,
    scenario: Option<AreaScenario>,
) -> Result<String, EmbedError> {
    let template = tr
        .conversion_result
        .get(style)
        .ok_or_else(|| EmbedError::UnknownStyle(style.to_string()))?;

    let scenario_label = scenario
        .and_then(|s| tr.scenarios.get(s.as_str()).cloned())
        .unwrap_or_default();

    let message = template
        .replace("{value}", &value.to_string())
        .replace("{unit}", unit)
        .replace("{result}", &fabia_units.to_string())
        .replace("{scenario}", &scenario_label);

    Ok(format!("<p class=\"fabia-embed\">{message}</p>"))
}
