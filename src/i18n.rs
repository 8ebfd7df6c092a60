use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::quantity::QuantityKind;

/// 기본 언어. 요청한 언어팩이 없으면 여기로 폴백한다.
pub const DEFAULT_LANGUAGE: &str = "en";

/// 서비스가 제공하는 언어 목록.
pub const LANGUAGES: [&str; 3] = ["en", "es", "fr"];

/// 영어 언어팩은 파일이 없어도 동작하도록 빌드 시 포함한다.
const BUILT_IN_EN: &str = include_str!("../locale/en/translation.json");

/// 언어 하나의 번역 번들. locale/<lang>/translation.json의 구조를 그대로 따른다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    /// explanation 스타일(scientific/funny)별 결과 문장 템플릿.
    #[serde(default)]
    pub conversion_result: HashMap<String, String>,
    /// 면적 시나리오 라벨.
    #[serde(default)]
    pub scenarios: HashMap<String, String>,
    /// 물리량별 변환 성공 메시지.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Translations {
    /// 물리량별 성공 메시지를 돌려준다. 키가 없으면 빈 문자열.
    pub fn message_for(&self, kind: QuantityKind) -> String {
        self.messages.get(kind.as_str()).cloned().unwrap_or_default()
    }
}

/// 언어팩을 로드한다. 요청 언어 → 기본 언어 파일 → 내장 영어팩 순으로
/// 시도하며 절대 실패하지 않는다.
pub fn load_translations(locale_dir: &Path, lang: &str) -> Translations {
    if let Some(tr) = read_pack(locale_dir, lang) {
        return tr;
    }
    if lang != DEFAULT_LANGUAGE {
        log::warn!("언어팩 '{lang}' 없음, '{DEFAULT_LANGUAGE}'로 폴백");
    }
    if let Some(tr) = read_pack(locale_dir, DEFAULT_LANGUAGE) {
        return tr;
    }
    built_in_english()
}

/// Accept-Language 헤더에서 언어 코드를 결정한다. 첫 토큰이 지원 언어가
/// 아니면 기본 언어를 쓴다.
pub fn resolve_language(header: Option<&str>) -> String {
    let lang = header
        .unwrap_or(DEFAULT_LANGUAGE)
        .split(',')
        .next()
        .unwrap_or(DEFAULT_LANGUAGE)
        .trim();
    if LANGUAGES.contains(&lang) {
        lang.to_string()
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}

fn read_pack(dir: &Path, lang: &str) -> Option<Translations> {
    let path = dir.join(lang).join("translation.json");
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn built_in_english() -> Translations {
    serde_json::from_str(BUILT_IN_EN).unwrap_or_default()
}
