use std::sync::Arc;

use models::enrollment::{self, EnrollmentDetails, EnrollmentInput};
use tracing::info;

use crate::enrollment::repository::EnrollmentRepository;
use crate::errors::ServiceError;

pub struct EnrollmentService<R: EnrollmentRepository> {
    repo: Arc<R>,
}

impl<R: EnrollmentRepository> EnrollmentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<EnrollmentDetails>, ServiceError> {
        info!("retrieving all enrollments");
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<EnrollmentDetails, ServiceError> {
        info!(id, "retrieving enrollment");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(enrollment::ENTITY, id))
    }

    /// Requires `student.idStudent` and `course.idCourse`, both pointing at existing rows.
    pub async fn create(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(
            id = created.id_enrollment,
            student = ?created.student.as_ref().map(|s| s.id),
            course = ?created.course.as_ref().map(|c| c.id),
            "enrollment created"
        );
        Ok(created)
    }

    pub async fn update(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        let id = input
            .id_enrollment
            .ok_or_else(|| ServiceError::Validation("idEnrollment is required for update".into()))?;
        info!(id, "updating enrollment");
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!(id, "removing enrollment");
        if !self.repo.exists_by_id(id).await? || !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(enrollment::ENTITY, id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}
