//! Extraction of per-field metadata from member annotation strings.
//!
//! Annotations use the conventional `key:"value" other:"value"` syntax. The
//! value under the recognized key (`graphql` by default) is a comma-separated
//! list: an optional exposed name followed by option flags.
//!
//! ```text
//! graphql:"userName,nullable"
//! graphql:",id"
//! ```

use std::borrow::Cow;

use arcstr::ArcStr;

use super::{Member, TypeDescriptor};

/// Option flag making a field nullable.
pub const NULLABLE: &str = "nullable";

/// Option flag exposing a field as `ID`.
pub const ID: &str = "id";

/// Metadata of a single field, as declared by its annotation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldMeta {
    /// Name to expose the field under, if overridden.
    pub name: Option<ArcStr>,
    /// Whether the field may be `null`.
    pub nullable: bool,
    /// Whether the field is exposed as `ID`, regardless of its type.
    pub id: bool,
}

impl FieldMeta {
    /// Extracts the metadata stored under `key` in the raw `tag`.
    ///
    /// A missing key results in default metadata: declared name, non-null,
    /// not an identifier. Unknown option flags are ignored.
    pub fn parse(tag: &str, key: &str) -> Self {
        let Some(value) = lookup(tag, key) else {
            return Self::default();
        };

        let mut parts = value.split(',');
        let mut meta = Self {
            name: parts
                .next()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(ArcStr::from),
            ..Self::default()
        };
        for option in parts.map(str::trim) {
            match option {
                NULLABLE => meta.nullable = true,
                ID => meta.id = true,
                _ => __trace!(option, tag, "ignoring unknown field option"),
            }
        }
        meta
    }
}

/// Member of a composite type, together with its parsed [`FieldMeta`].
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    owner: TypeDescriptor,
    member: Member,
    meta: FieldMeta,
}

impl FieldDescriptor {
    /// Describes the `member` of the `owner` type, parsing its annotation
    /// under `key`.
    pub fn new(owner: TypeDescriptor, member: Member, key: &str) -> Self {
        Self {
            owner,
            meta: FieldMeta::parse(member.raw_tag(), key),
            member,
        }
    }

    /// Returns the type owning this field.
    pub fn owner(&self) -> &TypeDescriptor {
        &self.owner
    }

    /// Returns the name the member is declared with.
    pub fn declared_name(&self) -> &'static str {
        self.member.name()
    }

    /// Returns the name the field is exposed under.
    pub fn exposed_name(&self) -> ArcStr {
        self.meta
            .name
            .clone()
            .unwrap_or_else(|| self.declared_name().into())
    }

    /// Indicates whether the member is embedded.
    pub fn is_embedded(&self) -> bool {
        self.member.is_embedded()
    }

    /// Returns the parsed [`FieldMeta`].
    pub fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    /// Returns the [`TypeDescriptor`] of the member's type.
    pub fn descriptor(&self) -> TypeDescriptor {
        self.member.descriptor()
    }
}

/// Looks up the value stored under `key` in the raw `tag`.
///
/// Parsing stops at the first malformed entry.
fn lookup<'t>(tag: &'t str, key: &str) -> Option<Cow<'t, str>> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let end = rest
            .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
            .unwrap_or(rest.len());
        if end == 0 || !rest[end..].starts_with(":\"") {
            __trace!(tag, "malformed field annotation");
            return None;
        }
        let name = &rest[..end];
        rest = &rest[end + 2..];

        let mut escaped = false;
        let close = rest.char_indices().find_map(|(i, c)| {
            match (escaped, c) {
                (true, _) => escaped = false,
                (false, '\\') => escaped = true,
                (false, '"') => return Some(i),
                (false, _) => {}
            }
            None
        });
        let Some(close) = close else {
            __trace!(tag, "unterminated field annotation value");
            return None;
        };
        let value = &rest[..close];
        rest = &rest[close + 1..];

        if name == key {
            let unescaped = unescape(value);
            if unescaped.is_none() {
                __trace!(tag, "invalid escape in field annotation value");
            }
            return unescaped;
        }
    }
}

/// Decodes the escape sequences of a quoted annotation value: `\n`-like
/// single character escapes, `\xHH`, `\uHHHH`, `\UHHHHHHHH` and octal
/// `\OOO`.
///
/// Returns [`None`] on an unknown or incomplete escape sequence.
fn unescape(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('\\') {
        return Some(Cow::Borrowed(value));
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next()? {
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            c @ ('\\' | '"' | '\'') => c,
            'x' => char::from_u32(read_digits(&mut chars, 2, 16)?).filter(char::is_ascii)?,
            'u' => char::from_u32(read_digits(&mut chars, 4, 16)?)?,
            'U' => char::from_u32(read_digits(&mut chars, 8, 16)?)?,
            c @ '0'..='7' => {
                let rest = read_digits(&mut chars, 2, 8)?;
                char::from_u32(c.to_digit(8)? * 64 + rest).filter(char::is_ascii)?
            }
            _ => return None,
        };
        out.push(decoded);
    }
    Some(Cow::Owned(out))
}

fn read_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0, |acc, _| Some(acc * radix + chars.next()?.to_digit(radix)?))
}
