use profnet_core::constants::{MAX_MESSAGE_LEN, MAX_USER_ID_LEN};
use profnet_core::errors::{ProfnetError, ProfnetResult};

pub(crate) fn require_non_empty(field: &str, value: &str) -> ProfnetResult<()> {
    if value.trim().is_empty() {
        return Err(ProfnetError::invalid(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_user_id(field: &str, value: &str) -> ProfnetResult<()> {
    require_non_empty(field, value)?;
    if value.len() > MAX_USER_ID_LEN {
        return Err(ProfnetError::invalid(
            field,
            format!("longer than {MAX_USER_ID_LEN} bytes"),
        ));
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> ProfnetResult<()> {
    require_non_empty("email", value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ProfnetError::invalid("email", "must look like name@domain")),
    }
}

pub(crate) fn require_message_body(value: &str) -> ProfnetResult<()> {
    require_non_empty("contents", value)?;
    if value.len() > MAX_MESSAGE_LEN {
        return Err(ProfnetError::invalid(
            "contents",
            format!("longer than {MAX_MESSAGE_LEN} bytes"),
        ));
    }
    Ok(())
}
