//! # Marca Form State Machine
//!
//! Three-step create/edit wizard.
//!
//! ```text
//!            next (R1 ok)          next (R2 ok)
//! BasicInfo ─────────────▶ Details ─────────────▶ Confirmation ──submit──▶ (reset to BasicInfo)
//!     │      ◀───────────          ◀───────────
//!     │          back                  back
//!     └── back = cancel (draft cleared)
//! ```
//!
//! - **R1** (leaving BasicInfo): name non-blank, category selected
//! - **R2** (leaving Details): description non-blank, owner non-blank
//!
//! Only the rule set of the step being left runs. Going back never validates.
//! Each validation pass replaces the error map.

use std::collections::BTreeMap;

use shared::{CreateMarcaRequest, Marca, MarcaCategory, UpdateMarcaRequest};

use crate::core::error::{AppError, Result};
use crate::core::service::MarcaService;
use crate::utils::validation::{self, ValidationResult};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormStep {
    BasicInfo,
    Details,
    Confirmation,
}

impl FormStep {
    pub fn all() -> &'static [FormStep] {
        &[FormStep::BasicInfo, FormStep::Details, FormStep::Confirmation]
    }

    /// 1-based position, as shown in the stepper
    pub fn number(&self) -> u8 {
        match self {
            FormStep::BasicInfo => 1,
            FormStep::Details => 2,
            FormStep::Confirmation => 3,
        }
    }

    /// Short stepper label
    pub fn label(&self) -> &'static str {
        match self {
            FormStep::BasicInfo => "Información",
            FormStep::Details => "Detalles",
            FormStep::Confirmation => "Confirmación",
        }
    }

    /// Window title suffix
    pub fn subtitle(&self) -> &'static str {
        match self {
            FormStep::BasicInfo => "Información Básica",
            FormStep::Details => "Detalles",
            FormStep::Confirmation => "Confirmación",
        }
    }

    /// Fields validated when leaving this step
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormStep::BasicInfo => &[FormField::Name, FormField::Category],
            FormStep::Details => &[FormField::Description, FormField::Owner],
            FormStep::Confirmation => &[],
        }
    }
}

/// Editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Category,
    Description,
    Owner,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Description => "description",
            FormField::Owner => "owner",
        }
    }
}

/// Field -> message for the current validation pass
pub type FormErrors = BTreeMap<FormField, String>;

/// Editable copy of a record's fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarcaDraft {
    pub name: String,
    pub description: String,
    pub category: Option<MarcaCategory>,
    pub owner: String,
}

impl MarcaDraft {
    pub fn from_marca(marca: &Marca) -> Self {
        Self {
            name: marca.name.clone(),
            description: marca.description.clone(),
            category: Some(marca.category),
            owner: marca.owner.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn check(&self, field: FormField) -> ValidationResult {
        match field {
            FormField::Name => validation::validate_name(&self.name),
            FormField::Category => validation::validate_category(self.category),
            FormField::Description => validation::validate_description(&self.description),
            FormField::Owner => validation::validate_owner(&self.owner),
        }
    }

    fn create_request(&self) -> Result<CreateMarcaRequest> {
        let category = self.category.ok_or_else(|| AppError::ValidationFailed {
            field: FormField::Category.key().to_string(),
            message: "La categoría es requerida".to_string(),
        })?;

        Ok(CreateMarcaRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            category,
            owner: self.owner.clone(),
        })
    }
}

/// Create or edit; edit carries the original record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Marca),
}

/// Result of [`MarcaForm::back`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Moved(FormStep),
    Cancelled,
}

/// The request a submit will send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CreateMarcaRequest),
    Update { id: i64, request: UpdateMarcaRequest },
}

impl Submission {
    /// Issue exactly one create or update call
    pub async fn send(&self, api: &dyn MarcaService) -> Result<Marca> {
        match self {
            Submission::Create(request) => api.create(request).await,
            Submission::Update { id, request } => api.update(*id, request).await,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Submission::Update { .. })
    }
}

/// One create/edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarcaForm {
    step: FormStep,
    draft: MarcaDraft,
    errors: FormErrors,
    mode: FormMode,
    /// A submit request is in flight; the UI disables its buttons
    pub submitting: bool,
}

impl MarcaForm {
    /// Empty form in create mode
    pub fn create() -> Self {
        Self {
            step: FormStep::BasicInfo,
            draft: MarcaDraft::default(),
            errors: FormErrors::new(),
            mode: FormMode::Create,
            submitting: false,
        }
    }

    /// Form seeded from `marca`. The record must already have an identifier.
    pub fn edit(marca: Marca) -> Result<Self> {
        if marca.id.is_none() {
            return Err(AppError::InvalidState(
                "Cannot edit a marca without an id".to_string(),
            ));
        }

        Ok(Self {
            step: FormStep::BasicInfo,
            draft: MarcaDraft::from_marca(&marca),
            errors: FormErrors::new(),
            mode: FormMode::Edit(marca),
            submitting: false,
        })
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn draft(&self) -> &MarcaDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MarcaDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// `Nueva Marca - Información Básica`, `Editar Marca - Detalles`, ...
    pub fn title(&self) -> String {
        let verb = if self.is_editing() { "Editar" } else { "Nueva" };
        format!("{} Marca - {}", verb, self.step.subtitle())
    }

    /// Run the rule set of `step`, replacing the error map.
    ///
    /// Returns the first failing field as [`AppError::ValidationFailed`].
    pub fn validate_step(&mut self, step: FormStep) -> Result<()> {
        self.errors.clear();
        for field in step.fields() {
            if let Some(message) = self.draft.check(*field).error {
                self.errors.insert(*field, message);
            }
        }

        match step.fields().iter().find_map(|f| self.errors.get_key_value(f)) {
            Some((field, message)) => Err(AppError::ValidationFailed {
                field: field.key().to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Advance one step if the current step validates.
    ///
    /// From Confirmation this is a no-op; use [`MarcaForm::submit`].
    pub fn next(&mut self) -> Result<FormStep> {
        let target = match self.step {
            FormStep::BasicInfo => FormStep::Details,
            FormStep::Details => FormStep::Confirmation,
            FormStep::Confirmation => return Ok(self.step),
        };

        self.validate_step(self.step)?;
        tracing::debug!(from = ?self.step, to = ?target, "Form step advanced");
        self.step = target;
        Ok(self.step)
    }

    /// Go back one step; from the first step this cancels the session.
    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            FormStep::BasicInfo => {
                self.reset();
                BackOutcome::Cancelled
            }
            FormStep::Details => {
                self.step = FormStep::BasicInfo;
                BackOutcome::Moved(self.step)
            }
            FormStep::Confirmation => {
                self.step = FormStep::Details;
                BackOutcome::Moved(self.step)
            }
        }
    }

    /// Empty draft, first step, no errors
    pub fn reset(&mut self) {
        self.step = FormStep::BasicInfo;
        self.draft = MarcaDraft::default();
        self.errors.clear();
        self.submitting = false;
    }

    /// Build the request a submit would send. Only valid on Confirmation.
    pub fn submission(&self) -> Result<Submission> {
        if self.step != FormStep::Confirmation {
            return Err(AppError::InvalidState(format!(
                "Submit is only available on the confirmation step (current: {:?})",
                self.step
            )));
        }

        let create = self.draft.create_request()?;
        match &self.mode {
            FormMode::Create => Ok(Submission::Create(create)),
            FormMode::Edit(original) => {
                let id = original.id.ok_or_else(|| {
                    AppError::InvalidState("Cannot update a marca without an id".to_string())
                })?;
                Ok(Submission::Update {
                    id,
                    request: UpdateMarcaRequest {
                        name: create.name,
                        description: create.description,
                        category: create.category,
                        owner: create.owner,
                        status: original.status,
                    },
                })
            }
        }
    }

    /// Apply the outcome of a submission: reset on success, keep everything on failure.
    pub fn finish_submission(&mut self, result: Result<Marca>) -> Result<Marca> {
        self.submitting = false;
        if result.is_ok() {
            self.reset();
        }
        result
    }

    /// Submit from Confirmation via `api`.
    pub async fn submit(&mut self, api: &dyn MarcaService) -> Result<Marca> {
        let submission = self.submission()?;
        self.submitting = true;
        let result = submission.send(api).await;
        self.finish_submission(result)
    }
}
