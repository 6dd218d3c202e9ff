use crate::domain::a001_customer::api;
use crate::shared::dialogs;
use crate::shared::notice::{use_notice, NoticeService};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerField};
use contracts::domain::a001_customer::bulk_form::{BulkCustomerForm, DraftId, SubmissionPayload};
use contracts::domain::a001_customer::validation::FieldError;
use leptos::prelude::*;

/// ViewModel for the bulk customer modal
///
/// All state lives in signals, so the view model is `Copy` and can be moved
/// into every event handler.
#[derive(Clone, Copy)]
pub struct BulkCustomerFormViewModel {
    pub form: RwSignal<BulkCustomerForm>,
    pub open: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    notice: NoticeService,
}

impl BulkCustomerFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BulkCustomerForm::new()),
            open: RwSignal::new(false),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            notice: use_notice(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            "Редактировать клиента".to_string()
        } else {
            "Добавить клиентов".to_string()
        }
    }

    /// (index, id) pairs in display order; the key of the fieldset list
    pub fn rows(&self) -> Vec<(usize, DraftId)> {
        self.form
            .with(|f| f.drafts().iter().map(|d| d.id).enumerate().collect())
    }

    pub fn record_count(&self) -> usize {
        self.form.with(|f| f.len())
    }

    pub fn open_create(&self) {
        self.form.update(|f| f.reset());
        self.error.set(None);
        self.open.set(true);
    }

    pub fn open_edit(&self, customer: &Customer) {
        self.form.update(|f| f.load_for_edit(customer));
        self.error.set(None);
        self.open.set(true);
    }

    pub fn cancel(&self) {
        self.form.update(|f| f.reset());
        self.error.set(None);
        self.open.set(false);
    }

    pub fn add_record(&self) {
        if self.is_edit_mode() {
            return;
        }
        self.form.update(|f| {
            f.add_record();
        });
    }

    pub fn remove_record(&self, index: usize) {
        let mut result = Ok(());
        self.form.update(|f| result = f.remove_record(index).map(|_| ()));
        if let Err(e) = result {
            log::warn!("remove_record({}): {}", index, e);
        }
    }

    pub fn update_field(&self, index: usize, field: CustomerField, value: String) {
        let mut result = Ok(());
        self.form.update(|f| result = f.update_field(index, field, value));
        if let Err(e) = result {
            log::warn!("update_field({}, {}): {}", index, field.name(), e);
        }
    }

    pub fn field_value(&self, index: usize, field: CustomerField) -> String {
        self.form.with(|f| {
            f.draft(index)
                .map(|dto| dto.get(field).to_string())
                .unwrap_or_default()
        })
    }

    pub fn field_error(&self, index: usize, field: CustomerField) -> Option<FieldError> {
        self.form.with(|f| f.error(index, field))
    }

    pub fn can_remove(&self, index: usize) -> bool {
        self.form.with(|f| !f.is_edit_mode() && f.can_remove(index))
    }

    /// Validate, ask for confirmation, send. `on_saved` runs after the modal
    /// was reset and closed.
    pub fn submit(&self, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() {
            return;
        }

        let mut valid = false;
        self.form.update(|f| valid = f.validate_all());
        if !valid {
            log::debug!(
                "Bulk form has {} validation errors",
                self.form.with_untracked(|f| f.error_count())
            );
            return;
        }

        let payload = self.form.with_untracked(|f| f.build_submission_payload());
        if !dialogs::confirm(&confirm_message(&payload)) {
            return;
        }

        log::debug!("Submitting {} customer record(s)", payload.record_count());
        self.is_saving.set(true);
        self.error.set(None);

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = api::submit(&payload).await;
            this.is_saving.set(false);
            match result {
                Ok(_) => {
                    this.notice.show(success_message(&payload));
                    this.form.update(|f| f.reset());
                    this.open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save customers: {}", e);
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

fn confirm_message(payload: &SubmissionPayload) -> String {
    match payload {
        SubmissionPayload::Update { .. } => {
            "Вы уверены, что хотите обновить этого клиента?".to_string()
        }
        SubmissionPayload::CreateBatch(records) if records.len() == 1 => {
            "Вы уверены, что хотите создать нового клиента?".to_string()
        }
        SubmissionPayload::CreateBatch(records) => {
            format!("Вы уверены, что хотите создать клиентов: {}?", records.len())
        }
    }
}

fn success_message(payload: &SubmissionPayload) -> String {
    match payload {
        SubmissionPayload::Update { .. } => "Клиент успешно обновлен".to_string(),
        SubmissionPayload::CreateBatch(records) if records.len() == 1 => {
            "Клиент успешно создан".to_string()
        }
        SubmissionPayload::CreateBatch(records) => {
            format!("Клиенты успешно созданы: {}", records.len())
        }
    }
}
