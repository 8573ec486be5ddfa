use std::sync::Arc;

use models::department::{self, DepartmentInput};
use tracing::info;

use crate::department::repository::DepartmentRepository;
use crate::errors::ServiceError;

pub struct DepartmentService<R: DepartmentRepository> {
    repo: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<department::Model>, ServiceError> {
        info!("retrieving all departments");
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<department::Model, ServiceError> {
        info!(id, "retrieving department");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(department::ENTITY, id))
    }

    pub async fn create(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, name = ?created.name, "department created");
        Ok(created)
    }

    pub async fn update(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        let id = input
            .id_department
            .ok_or_else(|| ServiceError::Validation("idDepartment is required for update".into()))?;
        info!(id, "updating department");
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!(id, "removing department");
        if !self.repo.exists_by_id(id).await? || !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(department::ENTITY, id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}
