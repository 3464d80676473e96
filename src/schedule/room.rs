//! 教室の認識

use regex::Regex;
use std::sync::LazyLock;

/// 先頭の教室番号と、任意の「他」
static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(他)?").expect("valid room number regex"));

/// 番号を持たない既知の教室名
const KNOWN_ROOMS: [&str; 2] = ["工房", "プレゼンルーム"];

/// 教室の認識結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoomMatch {
    pub room: String,
    /// 教室番号に続く「他」など、後続レコードの備考に加える印
    pub suffix: Option<&'static str>,
}

impl RoomMatch {
    fn plain(room: &str) -> Self {
        Self {
            room: room.to_string(),
            suffix: None,
        }
    }
}

/// 1行を教室として解釈する
///
/// 教室番号で始まる行はその番号を、それ以外の行は行全体を教室名として返します。
/// 空行のみ`None`です。
pub(crate) fn parse_room(line: &str) -> Option<RoomMatch> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = ROOM_NUMBER.captures(line) {
        return Some(RoomMatch {
            room: caps[1].to_string(),
            suffix: caps.get(2).map(|_| "他"),
        });
    }

    if let Some(known) = KNOWN_ROOMS.iter().find(|name| **name == line) {
        return Some(RoomMatch::plain(known));
    }

    Some(RoomMatch::plain(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number() {
        assert_eq!(parse_room("316"), Some(RoomMatch::plain("316")));
        assert_eq!(parse_room(" 509 "), Some(RoomMatch::plain("509")));
    }

    #[test]
    fn test_room_number_with_suffix() {
        let matched = parse_room("113他").unwrap();
        assert_eq!(matched.room, "113");
        assert_eq!(matched.suffix, Some("他"));
    }

    #[test]
    fn test_room_number_with_trailing_text() {
        assert_eq!(parse_room("201教室"), Some(RoomMatch::plain("201")));
    }

    #[test]
    fn test_known_rooms() {
        assert_eq!(parse_room("工房"), Some(RoomMatch::plain("工房")));
        assert_eq!(
            parse_room("プレゼンルーム"),
            Some(RoomMatch::plain("プレゼンルーム"))
        );
    }

    #[test]
    fn test_fallback_room_name() {
        assert_eq!(parse_room("図書館"), Some(RoomMatch::plain("図書館")));
        assert_eq!(parse_room("月3 316"), Some(RoomMatch::plain("月3 316")));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_room(""), None);
        assert_eq!(parse_room("   "), None);
    }
}
