//! Endpoint paths

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use neethi_core::LawyerId;

/// Characters escaped when a value is interpolated as one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const CHAT: &str = "/chat";
pub const LAWYERS: &str = "/tele-law/lawyers";
pub const LEGAL_AID_CHECK: &str = "/legal-aid/check";
pub const NJDG_STATS: &str = "/njdg/stats";
pub const HEALTH: &str = "/health";

/// `/case-status/{cnr}`; the CNR is sent as typed, escaped only where a
/// character would otherwise change the path
pub fn case_status(cnr: &str) -> String {
    format!("/case-status/{}", utf8_percent_encode(cnr, PATH_SEGMENT))
}

/// `/tele-law/connect/{id}`
pub fn connect(id: &LawyerId) -> String {
    format!(
        "/tele-law/connect/{}",
        utf8_percent_encode(&id.to_string(), PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_status_verbatim() {
        assert_eq!(
            case_status("DLCT010012345672024"),
            "/case-status/DLCT010012345672024"
        );
    }

    #[test]
    fn test_case_status_escapes_path_breakers() {
        assert_eq!(case_status("AB/12 34?x"), "/case-status/AB%2F12%2034%3Fx");
    }

    #[test]
    fn test_connect_numeric_and_text_ids() {
        assert_eq!(connect(&LawyerId::from(7)), "/tele-law/connect/7");
        assert_eq!(connect(&LawyerId::from("LAW001")), "/tele-law/connect/LAW001");
    }
}
