//! Cycle-safe `Debug` rendering for values.
//!
//! Container handles can reference themselves, so the derived `Debug` would
//! recurse forever. These impls track the containers on the current render
//! path and print `<cycle>` at the first back-reference.

use std::fmt;

use super::{FileList, List, Map, Opaque, Value};

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_guarded(self, f, &mut Vec::new())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_guarded(&Value::List(self.clone()), f, &mut Vec::new())
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_guarded(&Value::Map(self.clone()), f, &mut Vec::new())
    }
}

impl fmt::Debug for FileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_guarded(&Value::FileList(self.clone()), f, &mut Vec::new())
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

fn fmt_guarded(value: &Value, f: &mut fmt::Formatter<'_>, ancestors: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("Null"),
        Value::Bool(value) => write!(f, "Bool({value})"),
        Value::Int(value) => write!(f, "Int({value})"),
        Value::Float(value) => write!(f, "Float({value})"),
        Value::String(value) => write!(f, "String({value:?})"),
        Value::File(file) => write!(f, "{file:?}"),
        Value::Opaque(opaque) => write!(f, "{opaque:?}"),
        Value::FileList(files) => {
            f.write_str("FileList[")?;
            for (index, file) in files.to_vec().iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{file:?}")?;
            }
            f.write_str("]")
        }
        Value::List(list) => {
            if ancestors.contains(&list.address()) {
                return f.write_str("List[<cycle>]");
            }
            ancestors.push(list.address());
            f.write_str("List[")?;
            for (index, item) in list.to_vec().iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                fmt_guarded(item, f, ancestors)?;
            }
            ancestors.pop();
            f.write_str("]")
        }
        Value::Map(map) => {
            if ancestors.contains(&map.address()) {
                return f.write_str("Map{<cycle>}");
            }
            ancestors.push(map.address());
            f.write_str("Map{")?;
            for (index, (key, item)) in map.entries().iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key:?}: ")?;
                fmt_guarded(item, f, ancestors)?;
            }
            ancestors.pop();
            f.write_str("}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Map, Value};

    #[test]
    fn renders_nested_values() {
        let value = Value::map([("a", Value::list([1i64]))]);
        assert_eq!(format!("{value:?}"), "Map{\"a\": List[Int(1)]}");
    }

    #[test]
    fn cycles_render_without_overflowing() {
        let map = Map::new();
        map.insert("own", Value::Map(map.clone()));
        let rendered = format!("{:?}", Value::Map(map));
        assert_eq!(rendered, "Map{\"own\": Map{<cycle>}}");
    }

    #[test]
    fn shared_subtrees_are_not_mistaken_for_cycles() {
        let shared = Value::list([1i64]);
        let value = Value::map([("a", shared.clone()), ("b", shared)]);
        assert_eq!(
            format!("{value:?}"),
            "Map{\"a\": List[Int(1)], \"b\": List[Int(1)]}"
        );
    }
}
