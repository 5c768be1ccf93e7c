use super::error::{Error, Result as ImgurResult};

/// Fails with [`Error::InvalidArgument`] when `value` is empty.
pub fn non_empty<'a>(name: &str, value: &'a str) -> ImgurResult<&'a str> {
    if value.is_empty() {
        Err(Error::InvalidArgument(format!("{} must not be empty", name)))
    } else {
        Ok(value)
    }
}

/// Like [`non_empty`], but also rejects values that wouldn't stay a single path segment.
pub fn path_segment<'a>(name: &str, value: &'a str) -> ImgurResult<&'a str> {
    let value = non_empty(name, value)?;

    if value.contains('/') || value == "." || value == ".." {
        Err(Error::InvalidArgument(format!(
            "{} must be a single path segment, got {:?}",
            name, value
        )))
    } else {
        Ok(value)
    }
}
