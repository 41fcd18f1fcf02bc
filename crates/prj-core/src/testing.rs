use std::{collections::VecDeque, sync::Mutex, time::Duration};

use async_trait::async_trait;
use uuid::Uuid;

use prj_model::{CreateHandle, Cursor, Page, ProjectSpec};

use crate::{error::ServiceError, service::ResourceService};

#[derive(Clone, PartialEq, Eq)]
enum CreateMode {
    Succeed,
    Fail,
    Panic,
    PanicFor(String),
}

/// In-memory service with scripted listing pages and recorded create calls.
pub(crate) struct FakeService {
    mode: CreateMode,
    delay: Option<Duration>,
    attempted: Mutex<Vec<String>>,
    created: Mutex<Vec<String>>,
    pages: Mutex<VecDeque<Result<Page, ServiceError>>>,
    cursors: Mutex<Vec<Option<Cursor>>>,
}

impl FakeService {
    pub(crate) fn new() -> Self {
        Self {
            mode: CreateMode::Succeed,
            delay: None,
            attempted: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            pages: Mutex::new(VecDeque::new()),
            cursors: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_creates(mut self) -> Self {
        self.mode = CreateMode::Fail;
        self
    }

    pub(crate) fn panicking_creates(mut self) -> Self {
        self.mode = CreateMode::Panic;
        self
    }

    /// Panic only when asked to create `name`; every other create succeeds.
    pub(crate) fn panicking_for(mut self, name: impl Into<String>) -> Self {
        self.mode = CreateMode::PanicFor(name.into());
        self
    }

    pub(crate) fn with_create_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn with_pages(self, pages: Vec<Result<Page, ServiceError>>) -> Self {
        *self.pages.lock().unwrap() = pages.into();
        self
    }

    pub(crate) fn attempted(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }

    pub(crate) fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// Cursor passed to each `list` call, in call order.
    pub(crate) fn cursors(&self) -> Vec<Option<Cursor>> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceService for FakeService {
    async fn create(&self, spec: &ProjectSpec) -> Result<CreateHandle, ServiceError> {
        self.attempted.lock().unwrap().push(spec.name.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.mode {
            CreateMode::PanicFor(name) if *name == spec.name => {
                panic!("create blew up for {}", spec.name)
            }
            CreateMode::Succeed | CreateMode::PanicFor(_) => {
                self.created.lock().unwrap().push(spec.name.clone());
                Ok(CreateHandle::new(Uuid::new_v4()))
            }
            CreateMode::Fail => Err(ServiceError::Status {
                status: 409,
                body: format!("project {} already exists", spec.name),
            }),
            CreateMode::Panic => panic!("create blew up for {}", spec.name),
        }
    }

    async fn list(&self, cursor: Option<&Cursor>) -> Result<Page, ServiceError> {
        self.cursors.lock().unwrap().push(cursor.cloned());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Transport("no more scripted pages".into())))
    }
}
