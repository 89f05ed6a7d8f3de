//! Emptiness of field values

/// Whether a field value counts as "not filled in"
///
/// Optional fields with a blank value are always valid. Whitespace is not
/// blank: `"  "` was typed by someone and goes through the validator.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

macro_rules! zero_is_blank {
    ($($t:ty),*) => {
        $(impl Blank for $t {
            fn is_blank(&self) -> bool {
                *self == 0
            }
        })*
    };
}

zero_is_blank!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!("".is_blank());
        assert!(String::new().is_blank());
        assert!(!"  ".is_blank());
        assert!(None::<String>.is_blank());
        assert!(Some(String::new()).is_blank());
        assert!(!Some("x".to_string()).is_blank());
        assert!(0i32.is_blank());
        assert!(!1990i32.is_blank());
        assert!(false.is_blank());
        assert!(Vec::<u8>::new().is_blank());
    }
}
