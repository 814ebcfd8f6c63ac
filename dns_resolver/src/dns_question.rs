use crate::{
    class::Class,
    error::WireError,
    name::{decode_name, encode_dns_name},
    record_type::RecordType,
    wire::read_u16,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSQuestion {
    name: String,
    type_: RecordType,
    class: Class,
}

impl DNSQuestion {
    pub fn new(name: impl Into<String>, type_: RecordType, class: Class) -> Self {
        Self {
            name: name.into(),
            type_,
            class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        Ok([
            encode_dns_name(&self.name)?,
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
        ]
        .concat())
    }

    /// Decodes a question at `cursor`, returning it with the offset past it.
    pub fn parse(message: &[u8], cursor: usize) -> Result<(Self, usize), WireError> {
        let (name, cursor) = decode_name(message, cursor)?;
        let (type_, cursor) = read_u16(message, cursor)?;
        let (class, cursor) = read_u16(message, cursor)?;

        Ok((
            DNSQuestion {
                name,
                type_: type_.into(),
                class: class.into(),
            },
            cursor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_bytes() {
        let question = DNSQuestion::new("example.com", RecordType::A, Class::In);
        let bytes = question.to_bytes().unwrap();
        assert_eq!(
            bytes,
            [
                7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, // name
                0, 1, // type
                0, 1, // class
            ]
        );

        let (parsed, next) = DNSQuestion::parse(&bytes, 0).unwrap();
        assert_eq!(parsed, question);
        assert_eq!(next, bytes.len());
    }

    #[test]
    fn test_question_missing_class() {
        let bytes: &[u8] = &[3, b'c', b'o', b'm', 0, 0, 1, 0];
        assert!(matches!(
            DNSQuestion::parse(bytes, 0),
            Err(WireError::OutOfBounds { offset: 7, .. })
        ));
    }
}
