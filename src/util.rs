/// Strips module paths from a full Rust type name, as returned by
/// [`std::any::type_name()`], including from its generic arguments.
///
/// `alloc::vec::Vec<my_crate::User>` becomes `Vec<User>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut dest = String::with_capacity(full.len());
    let mut segment_start = 0;

    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            dest.truncate(segment_start);
        } else {
            dest.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = dest.len();
            }
        }
    }

    dest
}

#[test]
fn test_short_type_name() {
    assert_eq!(short_type_name("u32"), "u32");
    assert_eq!(short_type_name("my_crate::models::User"), "User");
    assert_eq!(short_type_name("alloc::vec::Vec<my_crate::User>"), "Vec<User>");
    assert_eq!(
        short_type_name("std::collections::HashMap<a::K, b::c::V>"),
        "HashMap<K, V>",
    );
    assert_eq!(short_type_name("&str"), "&str");
}
