/*
 * Responsibility
 * - WOPI の identity プロパティ (UserId / UserFriendlyName など) の無害化
 * - プロトコルが禁止する文字を '_' に置換する
 * - 置換以外は何もしない (長さ・順序は保存)
 */

/// Characters WOPI forbids in user-identity properties.
const FORBIDDEN_CHARS: &str = "<>\"#{}^[]`\\/";

/// Replaces every forbidden character with `_`.
///
/// Idempotent: `_` is not in the forbidden set, so sanitizing twice is the
/// same as sanitizing once. Empty input returns empty.
pub fn to_safe_identity(identity: &str) -> String {
    identity
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(c) { '_' } else { c })
        .collect()
}
