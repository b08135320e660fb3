//! View state for the medicine table and its add/edit form.
//!
//! # Design
//! `MedicineController` owns the displayed list, the form fields, modal
//! visibility and the form mode. The list is the result of the last
//! successful load, patched after writes: create and update reload it,
//! delete removes the record locally.
//!
//! Add and edit are a single `FormMode` value rather than a flag plus an
//! optional id, and `close` resets it to `Adding`.
//!
//! Blocking alerts and confirmations are delegated to a `Prompt` supplied
//! by the front end.

use crate::client::MedicineApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Medicine, MedicineDetails, MedicineId};

pub const INCOMPLETE_FORM: &str = "Please fill out the form completely";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this medicine?";
pub const DELETED: &str = "Medicine deleted successfully";

/// Blocking user interaction supplied by the front end.
pub trait Prompt {
    /// Show a message and wait until it is acknowledged.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Which write the form submits to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Adding,
    Editing(MedicineId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Stock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; the user was alerted and nothing was sent.
    Invalid,
    /// The server accepted the write and returned this record.
    Saved(Medicine),
    /// The write was sent and failed. Form and modal are left as they were.
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The list is empty; nothing was asked or sent.
    Skipped,
    /// The user declined the confirmation.
    Declined,
    Deleted,
    Failed(ApiError),
}

pub struct MedicineController<T, P> {
    api: MedicineApi<T>,
    prompt: P,
    medicines: Vec<Medicine>,
    form: MedicineDetails,
    modal_visible: bool,
    mode: FormMode,
}

impl<T: Transport, P: Prompt> MedicineController<T, P> {
    pub fn new(api: MedicineApi<T>, prompt: P) -> Self {
        Self {
            api,
            prompt,
            medicines: Vec::new(),
            form: MedicineDetails::default(),
            modal_visible: false,
            mode: FormMode::Adding,
        }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// The medicine shown on 1-based table row `row`.
    pub fn medicine_at(&self, row: usize) -> Option<&Medicine> {
        row.checked_sub(1).and_then(|i| self.medicines.get(i))
    }

    pub fn form(&self) -> &MedicineDetails {
        &self.form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    /// Replace the list with the backend's collection.
    ///
    /// On failure the previous list is kept and the error is logged; no
    /// alert is shown.
    pub fn load(&mut self) -> Result<(), ApiError> {
        match self.api.list() {
            Ok(medicines) => {
                tracing::debug!(count = medicines.len(), "loaded medicines");
                self.medicines = medicines;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load medicines");
                Err(err)
            }
        }
    }

    pub fn open_for_add(&mut self) {
        self.form = MedicineDetails::default();
        self.mode = FormMode::Adding;
        self.modal_visible = true;
    }

    pub fn open_for_edit(&mut self, medicine: &Medicine) {
        self.form = medicine.details();
        self.mode = FormMode::Editing(medicine.id.clone());
        self.modal_visible = true;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form.name = value,
            FormField::Price => self.form.price = value,
            FormField::Stock => self.form.stock = value,
        }
    }

    pub fn close(&mut self) {
        self.modal_visible = false;
        self.form = MedicineDetails::default();
        self.mode = FormMode::Adding;
    }

    /// Create or update from the form, depending on the current mode.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_complete() {
            self.prompt.alert(INCOMPLETE_FORM);
            return SubmitOutcome::Invalid;
        }

        let (result, verb) = match &self.mode {
            FormMode::Adding => (self.api.create(&self.form), "Added"),
            FormMode::Editing(id) => {
                tracing::debug!(%id, "updating medicine");
                (self.api.update(id, &self.form), "Updated")
            }
        };

        match result {
            Ok(saved) => {
                self.close();
                self.prompt
                    .alert(&format!("{} Details {verb} Successfully", saved.name));
                // A failed reload is logged by `load` and leaves the old list.
                let _ = self.load();
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save medicine");
                if err == ApiError::NotFound {
                    let _ = self.load();
                }
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Delete after confirmation, then drop the record from the local list.
    pub fn delete(&mut self, id: &MedicineId) -> DeleteOutcome {
        if self.medicines.is_empty() {
            return DeleteOutcome::Skipped;
        }
        if !self.prompt.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }

        match self.api.delete(id) {
            Ok(()) => {
                self.medicines.retain(|m| &m.id != id);
                self.prompt.alert(DELETED);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "failed to delete medicine");
                if err == ApiError::NotFound {
                    let _ = self.load();
                }
                DeleteOutcome::Failed(err)
            }
        }
    }
}
