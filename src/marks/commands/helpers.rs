use crate::form::{EditSession, FormState, URL_FIELD};
use crate::validate::validate_url_field;

/// Runs field validation and reduces it through the form state, exactly the
/// gate a submit must pass. Returns the inline message blocking submission,
/// or `None` when the form is submittable.
pub fn gate_submission(
    value: &str,
    session: &EditSession,
    urls: &[String],
) -> Option<&'static str> {
    let status = validate_url_field(value, session, urls);

    let mut form = FormState::new();
    form.set_field(URL_FIELD, status.is_error());

    if form.can_submit() {
        None
    } else {
        status.message()
    }
}

/// Display indexes are 1-based; list positions are 0-based.
pub fn to_position(display_index: usize) -> Option<usize> {
    display_index.checked_sub(1)
}
