use crate::errors::DecodeError;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

/// Parsed `<type> <size>` prefix of a loose object
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    /// Advisory only; the body is whatever follows the null byte
    pub declared_size: usize,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Consume the header up to and including the first null byte.
    ///
    /// On success the reader is positioned at the start of the body.
    pub fn parse_header(data_reader: &mut impl BufRead) -> anyhow::Result<ObjectHeader> {
        let mut header = Vec::new();
        data_reader.read_until(b'\0', &mut header)?;

        if header.pop() != Some(b'\0') {
            return Err(DecodeError::MissingHeaderTerminator.into());
        }

        let header = String::from_utf8_lossy(&header);
        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| DecodeError::MalformedHeader(header.to_string()))?;

        let object_type = ObjectType::try_from(object_type)?;
        let declared_size = size
            .parse::<usize>()
            .map_err(|_| DecodeError::MalformedHeader(header.to_string()))?;

        Ok(ObjectHeader::new(object_type, declared_size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(DecodeError::UnknownObjectType(value.to_string()).into()),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
