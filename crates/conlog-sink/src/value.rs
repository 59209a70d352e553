//! crates/conlog-sink/src/value.rs
//! Argument value model for console calls.

use std::fmt;

/// Capability class of a [`Value`].
///
/// The console surface treats arguments polymorphically over three
/// capability sets: plain primitives, structured data that a backend may
/// expand, and renderable host references that must be kept inspectable
/// rather than coerced to text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// Scalar text, numbers, booleans, and null.
    Primitive,
    /// Lists and records a backend may expand or tabulate.
    Structured,
    /// A host UI-element reference.
    Renderable,
}

/// An opaque host UI-element reference.
///
/// On terminal targets there is no live element to inspect, so the handle
/// carries only a label used for rendering. The façade still treats these
/// values specially: output methods wrap them in a single-element list
/// before forwarding so backends receive them as inspectable data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    label: String,
}

impl Element {
    /// Creates an element handle with the given display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.label)
    }
}

/// A single console-call argument.
///
/// # Examples
///
/// ```
/// use conlog_sink::{Value, ValueKind};
///
/// let v = Value::from("ready");
/// assert_eq!(v.kind(), ValueKind::Primitive);
/// assert_eq!(v.to_string(), "ready");
///
/// let list = Value::List(vec![Value::from(1), Value::from(2)]);
/// assert_eq!(list.to_string(), "[1, 2]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Ordered key/value entries.
    Record(Vec<(String, Value)>),
    /// Host UI-element reference.
    Element(Element),
}

impl Value {
    /// Creates an element value from a display label.
    #[must_use]
    pub fn element(label: impl Into<String>) -> Self {
        Self::Element(Element::new(label))
    }

    /// Returns the capability class of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Text(_) => {
                ValueKind::Primitive
            }
            Self::List(_) | Self::Record(_) => ValueKind::Structured,
            Self::Element(_) => ValueKind::Renderable,
        }
    }

    /// Reports whether this value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Reports whether this value is a record.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Reports whether this value is a host element reference.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Renders a slice of arguments as a single space-joined string.
    ///
    /// This is the textual representation used for error messages and by
    /// line-oriented backends.
    ///
    /// # Examples
    ///
    /// ```
    /// use conlog_sink::{Value, values};
    ///
    /// assert_eq!(Value::join(&values!["a", 1, true]), "a 1 true");
    /// assert_eq!(Value::join(&[]), "");
    /// ```
    #[must_use]
    pub fn join(args: &[Self]) -> String {
        let mut out = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Display never fails into a String.
            let _ = fmt::Write::write_fmt(&mut out, format_args!("{arg}"));
        }
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Element(element) => write!(f, "{element}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Builds a fixed-size array of [`Value`]s from heterogeneous literals.
///
/// Each expression is converted through [`Value::from`], so anything with a
/// `From` impl for [`Value`] is accepted.
///
/// # Examples
///
/// ```
/// use conlog_sink::{Value, values};
///
/// let args = values!["transfer", 3, true];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[0], Value::Text("transfer".into()));
/// ```
#[macro_export]
macro_rules! values {
    () => {{
        let args: [$crate::Value; 0] = [];
        args
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_render_verbatim() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }

    #[test]
    fn containers_render_bracketed() {
        let list = Value::List(vec![Value::from(1), Value::from("two")]);
        assert_eq!(list.to_string(), "[1, two]");

        let record = Value::Record(vec![
            ("name".to_owned(), Value::from("request")),
            ("debug".to_owned(), Value::from(true)),
        ]);
        assert_eq!(record.to_string(), "{name: request, debug: true}");
    }

    #[test]
    fn element_renders_labelled() {
        let element = Value::element("div#app");
        assert_eq!(element.to_string(), "<div#app>");
        assert!(element.is_element());
    }

    #[test]
    fn kinds_cover_capability_sets() {
        assert_eq!(Value::Null.kind(), ValueKind::Primitive);
        assert_eq!(Value::from("x").kind(), ValueKind::Primitive);
        assert_eq!(Value::List(Vec::new()).kind(), ValueKind::Structured);
        assert_eq!(Value::Record(Vec::new()).kind(), ValueKind::Structured);
        assert_eq!(Value::element("a").kind(), ValueKind::Renderable);
    }

    #[test]
    fn a_value_is_never_both_list_and_record() {
        let samples = [
            Value::Null,
            Value::from("x"),
            Value::List(vec![Value::from(1)]),
            Value::Record(vec![("k".to_owned(), Value::from(1))]),
            Value::element("span"),
        ];
        for value in &samples {
            assert!(!(value.is_list() && value.is_record()), "{value:?}");
        }
    }

    #[test]
    fn join_space_separates_arguments() {
        assert_eq!(Value::join(&values!["a", "b"]), "a b");
        assert_eq!(Value::join(&values![1, 2, 3]), "1 2 3");
        assert_eq!(Value::join(&values![]), "");
    }

    #[test]
    fn values_macro_accepts_trailing_comma() {
        let args = values!["a", 1,];
        assert_eq!(args.len(), 2);
    }
}
