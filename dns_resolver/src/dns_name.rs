use crate::{
    byte_cursor::ByteCursor,
    constants,
    error::{CodecError, Result},
};

/// Encodes a dotted hostname as length-prefixed labels ending in the root label.
///
/// Empty labels (a trailing dot, or `..`) are skipped.
pub fn encode_dns_name(domain_name: &str) -> Result<Vec<u8>> {
    let mut bytes = domain_name
        .split('.')
        .filter(|label| !label.is_empty())
        .try_fold(vec![], |mut acc, label| {
            if label.len() > constants::MAX_LABEL_LENGTH {
                return Err(CodecError::name_encoding(format!(
                    "label of {} bytes exceeds {}",
                    label.len(),
                    constants::MAX_LABEL_LENGTH
                )));
            }
            acc.push(label.len() as u8);
            acc.extend_from_slice(label.as_bytes());
            Ok(acc)
        })?;

    if bytes.is_empty() {
        return Err(CodecError::name_encoding("hostname has no labels"));
    }
    // Add a 0 byte to terminate the name
    bytes.push(0);

    Ok(bytes)
}

pub fn is_root(domain_name: &str) -> bool {
    domain_name.split('.').all(str::is_empty)
}

/// Like [`encode_dns_name`], but a name with no labels encodes as the root
/// label, matching what [`decode_dns_name`] returns for it.
pub fn encode_owner_name(domain_name: &str) -> Result<Vec<u8>> {
    if is_root(domain_name) {
        return Ok(vec![0]);
    }
    encode_dns_name(domain_name)
}

/// Reads labels up to and including the root label.
///
/// Running out of input where a length byte is expected means the name was
/// never terminated; running out inside a label is a truncated buffer.
pub fn decode_dns_name(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let mut parts: Vec<&str> = vec![];

    loop {
        if cursor.is_empty() {
            return Err(CodecError::name_decoding(format!(
                "unterminated name at offset {}",
                cursor.position()
            )));
        }
        let length = cursor.read_u8()?;
        if length == 0 {
            break;
        }
        let label = cursor.read_bytes(length as usize)?;
        let label = std::str::from_utf8(label).map_err(|_| {
            CodecError::name_decoding(format!(
                "label ending at offset {} is not valid UTF-8",
                cursor.position()
            ))
        })?;
        parts.push(label);
    }

    Ok(parts.join("."))
}
