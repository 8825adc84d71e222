//! Form state management and form structs

use super::field::FormField;
use crate::state::FeedbackRecord;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The feedback entry form: three text fields plus the submit button row
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", "Enter your name", true),
            email: FormField::text("email", "Email", "Enter your email", true),
            message: FormField::multiline("message", "Message", "Enter your feedback", true),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Returns true if the currently active field accepts newlines
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// All required fields hold text. Gates submission the way a browser
    /// gates a form with `required` inputs; no format checking beyond that.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|f| !f.required || !f.is_empty())
    }

    /// Copy the current draft out as a record. The form keeps ownership of
    /// its own field values; later edits never reach the returned record.
    pub fn to_record(&self) -> FeedbackRecord {
        FeedbackRecord {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Clear all fields and return focus to the first one
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active_field_index = 0;
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            // For the button row (index 3), return message as dummy (won't be used for text input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            // Index 3 is the button row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.name.set_text("A".to_string());
        form.email.set_text("a@x.com".to_string());
        form.message.set_text("hi".to_string());
        form
    }

    mod feedback_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = FeedbackForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.name, "name");
            assert_eq!(form.email.name, "email");
            assert_eq!(form.message.name, "message");
            assert!(form.name.is_empty());
            assert!(form.email.is_empty());
            assert!(form.message.is_empty());
        }

        #[test]
        fn test_default_equals_new() {
            let new = FeedbackForm::new();
            let default = FeedbackForm::default();
            assert_eq!(new.active_field_index, default.active_field_index);
            assert_eq!(new.name.as_text(), default.name.as_text());
        }

        #[test]
        fn test_field_count() {
            let form = FeedbackForm::new();
            assert_eq!(form.field_count(), 4);
        }

        #[test]
        fn test_all_fields_required() {
            let form = FeedbackForm::new();
            assert!(form.name.required);
            assert!(form.email.required);
            assert!(form.message.required);
        }

        #[test]
        fn test_only_message_is_multiline() {
            let form = FeedbackForm::new();
            assert!(!form.get_field(0).unwrap().is_multiline);
            assert!(!form.get_field(1).unwrap().is_multiline);
            assert!(form.get_field(2).unwrap().is_multiline);
        }

        #[test]
        fn test_is_button_row_active() {
            let mut form = FeedbackForm::new();
            assert!(!form.is_button_row_active());
            form.active_field_index = 3;
            assert!(form.is_button_row_active());
        }

        #[test]
        fn test_is_active_field_multiline() {
            let mut form = FeedbackForm::new();
            assert!(!form.is_active_field_multiline());
            form.active_field_index = 2;
            assert!(form.is_active_field_multiline());
            form.active_field_index = 3;
            assert!(!form.is_active_field_multiline());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = FeedbackForm::new();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = FeedbackForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 3); // Wrapped to last
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = FeedbackForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "message");
            assert!(form.get_field(3).is_none()); // button row
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = FeedbackForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_edit_touches_only_the_edited_field() {
            let mut form = filled_form();
            form.email.push_char('!');
            assert_eq!(form.name.as_text(), "A");
            assert_eq!(form.email.as_text(), "a@x.com!");
            assert_eq!(form.message.as_text(), "hi");

            form.name.pop_char();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "a@x.com!");
            assert_eq!(form.message.as_text(), "hi");
        }

        #[test]
        fn test_last_write_wins_per_field() {
            let mut form = FeedbackForm::new();
            form.name.set_text("first".to_string());
            form.name.set_text("second".to_string());
            assert_eq!(form.name.as_text(), "second");
        }
    }

    mod completeness {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_incomplete() {
            let form = FeedbackForm::new();
            assert!(!form.is_complete());
        }

        #[test]
        fn test_full_form_is_complete() {
            assert!(filled_form().is_complete());
        }

        #[test]
        fn test_each_missing_field_blocks_completion() {
            for index in 0..3 {
                let mut form = filled_form();
                match index {
                    0 => form.name.clear(),
                    1 => form.email.clear(),
                    _ => form.message.clear(),
                }
                assert!(!form.is_complete(), "field {index} empty");
            }
        }

        #[test]
        fn test_email_format_is_not_checked() {
            let mut form = filled_form();
            form.email.set_text("not an email at all".to_string());
            assert!(form.is_complete());
        }
    }

    mod record_extraction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_to_record_copies_all_fields() {
            let record = filled_form().to_record();
            assert_eq!(record.name, "A");
            assert_eq!(record.email, "a@x.com");
            assert_eq!(record.message, "hi");
        }

        #[test]
        fn test_record_is_detached_from_later_edits() {
            let mut form = filled_form();
            let record = form.to_record();
            form.reset();
            form.name.set_text("B".to_string());
            assert_eq!(record.name, "A");
            assert_eq!(record.email, "a@x.com");
            assert_eq!(record.message, "hi");
        }

        #[test]
        fn test_record_preserves_newlines() {
            let mut form = filled_form();
            form.message.set_text("line one\nline two".to_string());
            assert_eq!(form.to_record().message, "line one\nline two");
        }

        #[test]
        fn test_reset_clears_fields_and_focus() {
            let mut form = filled_form();
            form.active_field_index = 2;
            form.reset();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_and_pop_char() {
            let mut field = FormField::text("name", "Name", "", true);
            field.push_char('h');
            field.push_char('i');
            assert_eq!(field.as_text(), "hi");
            field.pop_char();
            assert_eq!(field.as_text(), "h");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut field = FormField::text("name", "Name", "", true);
            field.pop_char(); // Should not panic
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_push_newline_only_in_multiline() {
            let mut single = FormField::text("name", "Name", "", true);
            single.push_newline();
            assert_eq!(single.as_text(), "");

            let mut multi = FormField::multiline("message", "Message", "", true);
            multi.push_newline();
            assert_eq!(multi.as_text(), "\n");
        }

        #[test]
        fn test_clear() {
            let mut field = FormField::text("name", "Name", "", true);
            field.set_text("hello".to_string());
            field.clear();
            assert!(field.is_empty());
        }
    }
}
