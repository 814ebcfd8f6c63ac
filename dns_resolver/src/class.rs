/// Record class. Only IN is expected, anything else is carried, not rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Class {
    #[default]
    In,
    Other(u16),
}

impl From<u16> for Class {
    fn from(value: u16) -> Self {
        match value {
            1 => Class::In,
            other => Class::Other(other),
        }
    }
}

impl From<Class> for u16 {
    fn from(value: Class) -> Self {
        match value {
            Class::In => 1,
            Class::Other(other) => other,
        }
    }
}
