// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional arguments.
//!
//! A log call takes an ordered list of [Arg]s.  The variant decides how the argument is
//! colored (see [ArgumentColorizer](crate::ArgumentColorizer)), so conversions are provided
//! for the primitive types people actually log.  Anything else can be carried as
//! [Arg::Opaque], which is substituted as-is and never colored.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// One positional argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A value that is not there.  Renders as `none`.
    Absent,
    Bool(bool),
    /// A signed integer, kept exact.
    Integer(i128),
    /// An unsigned integer, kept exact.
    Unsigned(u128),
    /// A floating-point number.
    Number(f64),
    Text(String),
    /// Named values for `{key}` placeholders.  Positional placeholders skip these.
    Fields(BTreeMap<String, String>),
    /// A pre-rendered value of some other type.
    Opaque(String),
}

impl Arg {
    /// Named values, from anything that yields key/value pairs.
    ///
    /// ```
    /// use tagwise::Arg;
    /// let fields = Arg::fields([("user", "alice"), ("id", "7")]);
    /// assert_eq!(fields.field("user"), Some("alice"));
    /// ```
    pub fn fields<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Arg::Fields(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Renders `value` with its [Display] impl and keeps it out of coloring.
    pub fn opaque(value: impl Display) -> Self {
        Arg::Opaque(value.to_string())
    }

    /// Looks up a named value, if this is [Arg::Fields].
    pub fn field(&self, key: &str) -> Option<&str> {
        match self {
            Arg::Fields(fields) => fields.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn is_fields(&self) -> bool {
        matches!(self, Arg::Fields(_))
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Absent => f.write_str("none"),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Integer(n) => write!(f, "{n}"),
            Arg::Unsigned(n) => write!(f, "{n}"),
            Arg::Number(n) => write!(f, "{n}"),
            Arg::Text(s) | Arg::Opaque(s) => f.write_str(s),
            Arg::Fields(fields) => {
                f.write_str("{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

// Integers widen losslessly; only floats become Number.
macro_rules! numeric_from {
    ($variant:ident: $repr:ty => $($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                #[inline]
                fn from(value: $t) -> Self {
                    Arg::$variant(<$repr>::from(value))
                }
            }
        )*
    };
}

numeric_from!(Integer: i128 => i8, i16, i32, i64, i128);
numeric_from!(Unsigned: u128 => u8, u16, u32, u64, u128);
numeric_from!(Number: f64 => f32, f64);

impl From<isize> for Arg {
    #[inline]
    fn from(value: isize) -> Self {
        Arg::Integer(value as i128)
    }
}

impl From<usize> for Arg {
    #[inline]
    fn from(value: usize) -> Self {
        Arg::Unsigned(value as u128)
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<char> for Arg {
    #[inline]
    fn from(value: char) -> Self {
        Arg::Text(value.to_string())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}

impl From<BTreeMap<String, String>> for Arg {
    fn from(value: BTreeMap<String, String>) -> Self {
        Arg::Fields(value)
    }
}

impl From<HashMap<String, String>> for Arg {
    fn from(value: HashMap<String, String>) -> Self {
        Arg::Fields(value.into_iter().collect())
    }
}

/*
Boilerplate notes for Arg.

PartialEq but not Eq: f64.
No Hash for the same reason.
No Default; Absent is a legitimate value but calling it "default" would be misleading.
Display is what positional placeholders substitute.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Arg::from(true), Arg::Bool(true));
        assert_eq!(Arg::from(3u8), Arg::Unsigned(3));
        assert_eq!(Arg::from(-7i64), Arg::Integer(-7));
        assert_eq!(Arg::from(7usize), Arg::Unsigned(7));
        assert_eq!(Arg::from(-7isize), Arg::Integer(-7));
        assert_eq!(Arg::from(2.5f32), Arg::Number(2.5));
        assert_eq!(Arg::from("x"), Arg::Text("x".to_string()));
        assert_eq!(Arg::from(None::<i32>), Arg::Absent);
        assert_eq!(Arg::from(Some("y")), Arg::Text("y".to_string()));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Arg::Absent.to_string(), "none");
        assert_eq!(Arg::Bool(false).to_string(), "false");
        assert_eq!(Arg::Number(3.0).to_string(), "3");
        assert_eq!(Arg::Number(3.25).to_string(), "3.25");
        assert_eq!(Arg::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Arg::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(Arg::opaque(std::net::Ipv4Addr::LOCALHOST).to_string(), "127.0.0.1");
        assert_eq!(
            Arg::fields([("b", "2"), ("a", "1")]).to_string(),
            "{a=1, b=2}"
        );
    }

    #[test]
    fn field_lookup_only_on_fields() {
        let fields = Arg::fields([("name", "db")]);
        assert_eq!(fields.field("name"), Some("db"));
        assert_eq!(fields.field("other"), None);
        assert_eq!(Arg::from("name").field("name"), None);
        assert!(fields.is_fields());
    }
}
