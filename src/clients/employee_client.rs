use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use crate::employee_actor::EmployeeError;

/// Client for the employee store actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl_basic_client!(EmployeeClient, Employee, EmployeeError, employee);

impl EmployeeClient {
    #[instrument(skip(self, payload))]
    pub async fn create_employee(&self, payload: EmployeeCreate) -> Result<u64, EmployeeError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(EmployeeError::from)
    }

    #[instrument(skip(self, payload))]
    #[allow(dead_code)]
    pub async fn replace_employee(
        &self,
        id: u64,
        payload: EmployeeCreate,
    ) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.replace(id, payload).await.map_err(EmployeeError::from)
    }

    /// Applies a raw partial-update payload to the stored employee, decoding
    /// it into a typed patch before anything reaches the actor.
    #[instrument(skip(self, payload))]
    pub async fn patch_employee(
        &self,
        id: u64,
        payload: Map<String, Value>,
    ) -> Result<Employee, EmployeeError> {
        let patch = EmployeePatch::from_payload(payload)?;
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(EmployeeError::from)
    }
}
