//! State of the customer create/edit modal.
//!
//! The form holds an ordered list of drafts. In [`FormMode::CreateBatch`]
//! the user may add and remove drafts and the whole list is sent to the
//! batch endpoint; in [`FormMode::EditSingle`] the list holds exactly one
//! draft that is sent to the update endpoint.
//!
//! Validation errors are keyed by a [`DraftId`] assigned when the draft is
//! created, so removing a draft never moves an error onto another draft.

use super::aggregate::{Customer, CustomerDto, CustomerField, CustomerId};
use super::validation::{validate_draft, FieldError, FieldErrors};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// Types
// ============================================================================

/// Стабильный идентификатор черновика в пределах открытой формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub Uuid);

impl DraftId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEntry {
    pub id: DraftId,
    pub dto: CustomerDto,
}

impl DraftEntry {
    fn blank() -> Self {
        Self {
            id: DraftId::new_v4(),
            dto: CustomerDto::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    CreateBatch,
    EditSingle(CustomerId),
}

/// What the caller sends once [`BulkCustomerForm::validate_all`] passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    /// `PUT /api/customers/{id}`
    Update { id: CustomerId, dto: CustomerDto },
    /// `POST /api/customers/bulk`
    CreateBatch(Vec<CustomerDto>),
}

impl SubmissionPayload {
    pub fn record_count(&self) -> usize {
        match self {
            SubmissionPayload::Update { .. } => 1,
            SubmissionPayload::CreateBatch(items) => items.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Первую запись удалить нельзя")]
    FirstRecordLocked,
    #[error("Нет записи с индексом {index} (всего записей: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCustomerForm {
    drafts: Vec<DraftEntry>,
    errors: HashMap<(DraftId, CustomerField), FieldError>,
    mode: FormMode,
}

impl Default for BulkCustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkCustomerForm {
    /// Одна пустая запись, режим создания
    pub fn new() -> Self {
        Self {
            drafts: vec![DraftEntry::blank()],
            errors: HashMap::new(),
            mode: FormMode::CreateBatch,
        }
    }

    // ---- accessors ---------------------------------------------------------

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::EditSingle(_))
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Always false while the form is alive; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn drafts(&self) -> &[DraftEntry] {
        &self.drafts
    }

    pub fn draft(&self, index: usize) -> Option<&CustomerDto> {
        self.drafts.get(index).map(|d| &d.dto)
    }

    pub fn can_remove(&self, index: usize) -> bool {
        index > 0 && index < self.drafts.len()
    }

    pub fn error(&self, index: usize, field: CustomerField) -> Option<FieldError> {
        let id = self.drafts.get(index)?.id;
        self.errors.get(&(id, field)).copied()
    }

    pub fn errors_for(&self, index: usize) -> FieldErrors {
        let Some(entry) = self.drafts.get(index) else {
            return FieldErrors::new();
        };
        self.errors
            .iter()
            .filter(|((id, _), _)| *id == entry.id)
            .map(|((_, field), err)| (*field, *err))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    // ---- mutations ---------------------------------------------------------

    /// Appends a blank draft. Edit mode hides the button; it is not enforced here.
    pub fn add_record(&mut self) -> DraftId {
        let entry = DraftEntry::blank();
        let id = entry.id;
        self.drafts.push(entry);
        id
    }

    pub fn remove_record(&mut self, index: usize) -> Result<CustomerDto, FormError> {
        self.check_index(index)?;
        if index == 0 {
            return Err(FormError::FirstRecordLocked);
        }
        let removed = self.drafts.remove(index);
        self.errors.retain(|(id, _), _| *id != removed.id);
        Ok(removed.dto)
    }

    pub fn update_field(
        &mut self,
        index: usize,
        field: CustomerField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.check_index(index)?;
        let entry = &mut self.drafts[index];
        entry.dto.set(field, value.into());
        self.errors.remove(&(entry.id, field));
        Ok(())
    }

    /// Pure: reports the errors of one draft without touching the error map.
    pub fn validate(&self, index: usize) -> Result<FieldErrors, FormError> {
        self.check_index(index)?;
        Ok(validate_draft(
            &self.drafts[index].dto,
            self.password_required(),
        ))
    }

    /// Replaces the error map with the errors of every draft.
    /// Returns true when nothing failed; this is the only submission gate.
    pub fn validate_all(&mut self) -> bool {
        let password_required = self.password_required();
        self.errors = self
            .drafts
            .iter()
            .flat_map(|entry| {
                validate_draft(&entry.dto, password_required)
                    .into_iter()
                    .map(move |(field, err)| ((entry.id, field), err))
            })
            .collect();
        self.errors.is_empty()
    }

    pub fn build_submission_payload(&self) -> SubmissionPayload {
        match self.mode {
            FormMode::EditSingle(id) => SubmissionPayload::Update {
                id,
                dto: self.drafts[0].dto.clone(),
            },
            FormMode::CreateBatch => {
                SubmissionPayload::CreateBatch(self.drafts.iter().map(|d| d.dto.clone()).collect())
            }
        }
    }

    /// Switches to edit mode with one draft filled from `customer`.
    /// The password is never pre-filled.
    pub fn load_for_edit(&mut self, customer: &Customer) {
        self.drafts = vec![DraftEntry {
            id: DraftId::new_v4(),
            dto: CustomerDto::from(customer),
        }];
        self.errors.clear();
        self.mode = FormMode::EditSingle(customer.id);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ---- helpers -----------------------------------------------------------

    fn password_required(&self) -> bool {
        !self.is_edit_mode()
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index >= self.drafts.len() {
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.drafts.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::validation::RuleKind;
    use crate::domain::common::EntityMetadata;

    fn fill_valid(form: &mut BulkCustomerForm, index: usize, username: &str) {
        form.update_field(index, CustomerField::Username, username).unwrap();
        form.update_field(index, CustomerField::Password, "secret1").unwrap();
        form.update_field(index, CustomerField::Email, format!("{username}@example.com"))
            .unwrap();
    }

    fn sample_customer() -> Customer {
        Customer {
            id: CustomerId(42),
            username: "sidorov".into(),
            email: "sidorov@example.com".into(),
            phone: Some("+375291234567".into()),
            address: Some("Гомель".into()),
            company_name: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn new_form_has_one_blank_record_in_create_mode() {
        let form = BulkCustomerForm::new();
        assert_eq!(form.len(), 1);
        assert_eq!(form.draft(0), Some(&CustomerDto::default()));
        assert_eq!(form.mode(), FormMode::CreateBatch);
        assert!(!form.has_errors());
    }

    #[test]
    fn add_record_appends_blank_drafts_with_distinct_ids() {
        let mut form = BulkCustomerForm::new();
        let a = form.add_record();
        let b = form.add_record();
        assert_ne!(a, b);
        assert_eq!(form.len(), 3);
        assert_eq!(form.drafts()[2].id, b);
    }

    #[test]
    fn first_record_can_never_be_removed() {
        let mut form = BulkCustomerForm::new();
        assert_eq!(form.remove_record(0), Err(FormError::FirstRecordLocked));
        assert_eq!(form.len(), 1);

        form.add_record();
        assert_eq!(form.remove_record(0), Err(FormError::FirstRecordLocked));
        assert!(!form.can_remove(0));
        assert!(form.can_remove(1));
        assert!(!form.can_remove(2));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut form = BulkCustomerForm::new();
        assert_eq!(
            form.remove_record(3),
            Err(FormError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(form.update_field(1, CustomerField::Email, "x").is_err());
        assert!(form.validate(1).is_err());
        assert_eq!(form.error(1, CustomerField::Email), None);
        assert!(form.errors_for(5).is_empty());
    }

    #[test]
    fn update_field_clears_only_that_error_immediately() {
        let mut form = BulkCustomerForm::new();
        assert!(!form.validate_all());
        assert!(form.error(0, CustomerField::Username).is_some());
        assert!(form.error(0, CustomerField::Email).is_some());

        // even an invalid value clears the error until the next submit attempt
        form.update_field(0, CustomerField::Username, "a").unwrap();
        assert_eq!(form.error(0, CustomerField::Username), None);
        assert!(form.error(0, CustomerField::Email).is_some());
        assert_eq!(form.draft(0).unwrap().username, "a");
    }

    #[test]
    fn username_scenarios() {
        let mut form = BulkCustomerForm::new();
        form.update_field(0, CustomerField::Username, "ab").unwrap();
        let errors = form.validate(0).unwrap();
        assert_eq!(errors[&CustomerField::Username].kind(), RuleKind::Length);

        form.update_field(0, CustomerField::Username, "abc").unwrap();
        let errors = form.validate(0).unwrap();
        assert!(!errors.contains_key(&CustomerField::Username));
    }

    #[test]
    fn email_scenarios() {
        let mut form = BulkCustomerForm::new();
        form.update_field(0, CustomerField::Email, "not-an-email").unwrap();
        assert_eq!(
            form.validate(0).unwrap().get(&CustomerField::Email),
            Some(&FieldError::EmailFormat)
        );
        form.update_field(0, CustomerField::Email, "a@b.co").unwrap();
        assert!(!form.validate(0).unwrap().contains_key(&CustomerField::Email));
    }

    #[test]
    fn validate_is_pure_and_does_not_touch_the_error_map() {
        let mut form = BulkCustomerForm::new();
        form.update_field(0, CustomerField::Username, "ab").unwrap();
        let first = form.validate(0).unwrap();
        let second = form.validate(0).unwrap();
        assert_eq!(first, second);
        assert!(!form.has_errors());
    }

    #[test]
    fn validate_all_is_true_iff_every_record_passes() {
        let mut form = BulkCustomerForm::new();
        fill_valid(&mut form, 0, "first");
        form.add_record();
        fill_valid(&mut form, 1, "second");
        assert!(form.validate_all());
        assert!((0..form.len()).all(|i| form.validate(i).unwrap().is_empty()));

        form.update_field(1, CustomerField::Email, "broken").unwrap();
        assert!(!form.validate_all());
        assert_eq!(form.error_count(), 1);
        assert_eq!(form.error(1, CustomerField::Email), Some(FieldError::EmailFormat));
        assert!(form.errors_for(0).is_empty());
    }

    #[test]
    fn validate_all_replaces_previous_errors() {
        let mut form = BulkCustomerForm::new();
        assert!(!form.validate_all());
        assert_eq!(form.error_count(), 3);
        fill_valid(&mut form, 0, "valid");
        form.update_field(0, CustomerField::Email, "bad").unwrap();
        assert!(!form.validate_all());
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn removing_second_of_two_keeps_first_records_errors() {
        let mut form = BulkCustomerForm::new();
        form.add_record();
        assert!(!form.validate_all());
        assert_eq!(form.errors_for(1).len(), 3);

        form.remove_record(1).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form.errors_for(0).len(), 3);
        assert_eq!(form.error_count(), 3);
        assert_eq!(form.error(1, CustomerField::Username), None);
    }

    #[test]
    fn errors_follow_their_record_when_an_earlier_one_is_removed() {
        let mut form = BulkCustomerForm::new();
        fill_valid(&mut form, 0, "zero");
        form.add_record();
        form.add_record();
        fill_valid(&mut form, 2, "two");
        form.update_field(2, CustomerField::Email, "bad-email").unwrap();
        assert!(!form.validate_all());
        assert_eq!(form.errors_for(1).len(), 3);
        assert_eq!(form.error(2, CustomerField::Email), Some(FieldError::EmailFormat));

        form.remove_record(1).unwrap();
        assert_eq!(form.len(), 2);
        assert_eq!(form.draft(1).unwrap().username, "two");
        assert_eq!(form.error(1, CustomerField::Email), Some(FieldError::EmailFormat));
        assert_eq!(form.errors_for(1).len(), 1);
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn password_is_optional_only_in_edit_mode() {
        let mut form = BulkCustomerForm::new();
        form.update_field(0, CustomerField::Username, "abc").unwrap();
        form.update_field(0, CustomerField::Email, "a@b.co").unwrap();
        assert!(!form.validate_all());
        assert_eq!(form.error(0, CustomerField::Password), Some(FieldError::PasswordRequired));

        form.load_for_edit(&sample_customer());
        assert!(form.draft(0).unwrap().password.is_empty());
        assert!(form.validate_all());
    }

    #[test]
    fn long_password_has_no_upper_bound() {
        let mut form = BulkCustomerForm::new();
        form.update_field(0, CustomerField::Username, "abc").unwrap();
        form.update_field(0, CustomerField::Email, "a@b.co").unwrap();
        form.update_field(0, CustomerField::Password, "p".repeat(101)).unwrap();
        assert!(form.validate_all());
        assert_eq!(form.error(0, CustomerField::Password), None);
    }

    #[test]
    fn load_for_edit_round_trips_through_the_payload() {
        let customer = sample_customer();
        let mut form = BulkCustomerForm::new();
        form.add_record();
        assert!(!form.validate_all());

        form.load_for_edit(&customer);
        assert_eq!(form.len(), 1);
        assert_eq!(form.mode(), FormMode::EditSingle(CustomerId(42)));
        assert!(!form.has_errors());

        match form.build_submission_payload() {
            SubmissionPayload::Update { id, dto } => {
                assert_eq!(id, customer.id);
                assert_eq!(dto.username, customer.username);
                assert_eq!(dto.email, customer.email);
                assert_eq!(dto.phone, "+375291234567");
                assert_eq!(dto.address, "Гомель");
                assert_eq!(dto.company_name, "");
                assert_eq!(dto.password, "");
            }
            other => panic!("expected update payload, got {other:?}"),
        }
    }

    #[test]
    fn create_payload_keeps_display_order() {
        let mut form = BulkCustomerForm::new();
        fill_valid(&mut form, 0, "alpha");
        form.add_record();
        fill_valid(&mut form, 1, "beta");
        let payload = form.build_submission_payload();
        assert_eq!(payload.record_count(), 2);
        let SubmissionPayload::CreateBatch(items) = payload else {
            panic!("expected batch payload");
        };
        let names: Vec<_> = items.iter().map(|d| d.username.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut form = BulkCustomerForm::new();
        form.load_for_edit(&sample_customer());
        form.update_field(0, CustomerField::Password, "x").unwrap();
        form.validate_all();
        assert!(form.has_errors());

        form.reset();
        assert_eq!(form.len(), 1);
        assert_eq!(form.mode(), FormMode::CreateBatch);
        assert!(!form.has_errors());
        assert_eq!(form.draft(0), Some(&CustomerDto::default()));
    }
}
