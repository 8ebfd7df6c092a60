//! Škoda Fabia 1.2 HTP의 제원을 기준 단위("Fabia 단위")로 쓰는 변환
//! 서비스의 핵심 로직. 서버 바이너리뿐 아니라 테스트에서도 라이브러리로
//! 쓸 수 있게 분리한다.

pub mod config;
pub mod conversion;
pub mod embed;
pub mod i18n;
pub mod quantity;
pub mod reference;
pub mod server;
pub mod units;
