use std::sync::Arc;

use models::student::{self, StudentInput};
use tracing::info;

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// Application service for students; each call is one repository round trip.
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<student::Model>, ServiceError> {
        info!("retrieving all students");
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<student::Model, ServiceError> {
        info!(id, "retrieving student");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(student::ENTITY, id))
    }

    pub async fn create(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, first_name = ?created.first_name, "student created");
        Ok(created)
    }

    /// The identifier travels in the body, as `idStudent`.
    pub async fn update(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        let id = input
            .id_student
            .ok_or_else(|| ServiceError::Validation("idStudent is required for update".into()))?;
        info!(id, "updating student");
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!(id, "removing student");
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(student::ENTITY, id));
        }
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(student::ENTITY, id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}
