use crate::actor_framework::Entity;
use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use crate::patch::PatchError;

impl Entity for Employee {
    type Id = u64;
    type CreatePayload = EmployeeCreate;
    type Patch = EmployeePatch;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create(id: u64, payload: EmployeeCreate) -> Result<Self, PatchError> {
        let employee = Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        };
        employee.validate()?;
        Ok(employee)
    }

    fn apply_patch(&self, patch: &EmployeePatch) -> Result<Self, PatchError> {
        let mut next = self.clone();
        if let Some(first_name) = &patch.first_name {
            next.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            next.last_name = last_name.clone();
        }
        if let Some(email) = &patch.email {
            next.email = email.clone();
        }
        next.validate()?;
        Ok(next)
    }
}
