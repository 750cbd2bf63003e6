use log::{debug, info, warn};
use serde::Serialize;

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! We'll contact you shortly to confirm your booking.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Phone,
    PreferredDate,
    PreferredTime,
    Message,
}

impl BookingField {
    /// Used for both the `id` and the `name` of the form control.
    pub fn key(self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::PreferredDate => "preferredDate",
            BookingField::PreferredTime => "preferredTime",
            BookingField::Message => "message",
        }
    }

    /// Everything except the message is marked `required` on the input.
    pub fn required(self) -> bool {
        !matches!(self, BookingField::Message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

impl BookingRequest {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::PreferredDate => &self.preferred_date,
            BookingField::PreferredTime => &self.preferred_time,
            BookingField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Phone => &mut self.phone,
            BookingField::PreferredDate => &mut self.preferred_date,
            BookingField::PreferredTime => &mut self.preferred_time,
            BookingField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingAction {
    Edit(BookingField, String),
    Submit,
    /// "Submit another request": back to a blank form.
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingState {
    pub request: BookingRequest,
    pub submitted: bool,
}

impl BookingState {
    pub fn apply(&mut self, action: BookingAction) {
        match action {
            BookingAction::Edit(field, value) => {
                if self.submitted {
                    warn!("Ignoring edit to {} after submission", field.key());
                    return;
                }
                self.request.set(field, value);
            }
            BookingAction::Submit => {
                // The browser enforces `required` before the submit event fires,
                // nothing leaves the page from here.
                match serde_json::to_string(&self.request) {
                    Ok(json) => debug!("Captured booking request {}", json),
                    Err(e) => warn!("Failed to serialize booking request: {}", e),
                }
                info!("Booking request submitted");
                self.submitted = true;
            }
            BookingAction::Reset => {
                *self = BookingState::default();
            }
        }
    }
}

/// Earliest value accepted by the preferred date picker, as `YYYY-MM-DD`.
pub fn earliest_date() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingState {
        let mut state = BookingState::default();
        state.apply(BookingAction::Edit(BookingField::Name, "Jane".into()));
        state.apply(BookingAction::Edit(BookingField::Phone, "+911234567890".into()));
        state.apply(BookingAction::Edit(BookingField::PreferredDate, "2026-05-01".into()));
        state.apply(BookingAction::Edit(BookingField::PreferredTime, "10:00".into()));
        state
    }

    #[test]
    fn edits_land_in_their_field() {
        let state = filled();
        assert_eq!(state.request.get(BookingField::Name), "Jane");
        assert_eq!(state.request.get(BookingField::Phone), "+911234567890");
        assert_eq!(state.request.get(BookingField::PreferredDate), "2026-05-01");
        assert_eq!(state.request.get(BookingField::PreferredTime), "10:00");
        assert_eq!(state.request.get(BookingField::Message), "");
        assert!(!state.submitted);
    }

    #[test]
    fn submit_moves_to_thank_you() {
        let mut state = filled();
        state.apply(BookingAction::Submit);
        assert!(state.submitted);
        assert_eq!(
            CONFIRMATION_MESSAGE,
            "Thank you! We'll contact you shortly to confirm your booking."
        );
    }

    #[test]
    fn reset_clears_fields_and_flag() {
        let mut state = filled();
        state.apply(BookingAction::Edit(BookingField::Message, "Window seat".into()));
        state.apply(BookingAction::Submit);
        state.apply(BookingAction::Reset);
        assert_eq!(state, BookingState::default());
    }

    #[test]
    fn edits_after_submit_are_dropped() {
        let mut state = filled();
        state.apply(BookingAction::Submit);
        state.apply(BookingAction::Edit(BookingField::Name, "Someone else".into()));
        assert_eq!(state.request.name, "Jane");
    }

    #[test]
    fn only_message_is_optional() {
        let optional: Vec<_> = [
            BookingField::Name,
            BookingField::Phone,
            BookingField::PreferredDate,
            BookingField::PreferredTime,
            BookingField::Message,
        ]
        .into_iter()
        .filter(|field| !field.required())
        .collect();
        assert_eq!(optional, vec![BookingField::Message]);
    }

    #[test]
    fn request_serializes_with_form_names() {
        let json = serde_json::to_value(&filled().request).unwrap();
        assert_eq!(json["preferredDate"], "2026-05-01");
        assert_eq!(json["preferredTime"], "10:00");
    }

    #[test]
    fn earliest_date_is_iso_formatted() {
        let date = earliest_date();
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
