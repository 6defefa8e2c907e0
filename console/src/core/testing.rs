//! Test doubles for the service and prompt traits.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use shared::{CreateMarcaRequest, Marca, MarcaCategory, MarcaStatus, UpdateMarcaRequest};

use crate::core::error::{AppError, Result};
use crate::core::prompt::{DialogAnswer, DialogRequest, Prompter};
use crate::core::service::MarcaService;

/// Which endpoint a call went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Recorded call with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(i64),
    Create(CreateMarcaRequest),
    Update(i64, UpdateMarcaRequest),
    Delete(i64),
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Call::List => Op::List,
            Call::Get(_) => Op::Get,
            Call::Create(_) => Op::Create,
            Call::Update(..) => Op::Update,
            Call::Delete(_) => Op::Delete,
        }
    }
}

pub fn sample_marca(id: i64, name: &str, status: MarcaStatus) -> Marca {
    Marca {
        id: Some(id),
        name: name.to_string(),
        description: format!("{} description", name),
        category: MarcaCategory::Technology,
        registration_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        status,
        owner: "Jane".to_string(),
        registration_number: Some(format!("REG-{:04}", id)),
    }
}

/// In-memory [`MarcaService`] that records every call.
#[derive(Default)]
pub struct MockMarcaService {
    marcas: Mutex<Vec<Marca>>,
    failures: Mutex<HashMap<Op, AppError>>,
    calls: Mutex<Vec<Call>>,
}

impl MockMarcaService {
    pub fn with_marcas(marcas: Vec<Marca>) -> Self {
        Self {
            marcas: Mutex::new(marcas),
            ..Default::default()
        }
    }

    /// Make every call to `op` fail with `error`
    pub fn fail(&self, op: Op, error: AppError) {
        self.failures.lock().insert(op, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.lock().iter().filter(|c| c.op() == op).count()
    }

    fn record(&self, call: Call) -> Result<()> {
        let op = call.op();
        self.calls.lock().push(call);
        match self.failures.lock().get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MarcaService for MockMarcaService {
    async fn list(&self) -> Result<Vec<Marca>> {
        self.record(Call::List)?;
        Ok(self.marcas.lock().clone())
    }

    async fn get(&self, id: i64) -> Result<Marca> {
        self.record(Call::Get(id))?;
        self.marcas
            .lock()
            .iter()
            .find(|m| m.id == Some(id))
            .cloned()
            .ok_or(AppError::RequestFailed { status: 404 })
    }

    async fn create(&self, request: &CreateMarcaRequest) -> Result<Marca> {
        self.record(Call::Create(request.clone()))?;
        let mut marcas = self.marcas.lock();
        let id = marcas.iter().filter_map(|m| m.id).max().unwrap_or(0) + 1;
        let marca = Marca {
            id: Some(id),
            name: request.name.clone(),
            description: request.description.clone(),
            category: request.category,
            registration_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            status: MarcaStatus::Pending,
            owner: request.owner.clone(),
            registration_number: None,
        };
        marcas.push(marca.clone());
        Ok(marca)
    }

    async fn update(&self, id: i64, request: &UpdateMarcaRequest) -> Result<Marca> {
        self.record(Call::Update(id, request.clone()))?;
        let mut marcas = self.marcas.lock();
        let marca = marcas
            .iter_mut()
            .find(|m| m.id == Some(id))
            .ok_or(AppError::RequestFailed { status: 404 })?;
        marca.name = request.name.clone();
        marca.description = request.description.clone();
        marca.category = request.category;
        marca.owner = request.owner.clone();
        marca.status = request.status;
        Ok(marca.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record(Call::Delete(id))?;
        self.marcas.lock().retain(|m| m.id != Some(id));
        Ok(())
    }
}

/// [`Prompter`] answering from a fixed script, in order.
///
/// Once the script runs out every request is answered with
/// [`DialogAnswer::Dismissed`].
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<DialogAnswer>>,
    requests: Mutex<Vec<DialogRequest>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<DialogAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&self, request: DialogRequest) -> DialogAnswer {
        self.requests.lock().push(request);
        self.answers
            .lock()
            .pop_front()
            .unwrap_or(DialogAnswer::Dismissed)
    }
}
