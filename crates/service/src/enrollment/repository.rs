use async_trait::async_trait;
use models::enrollment::{self, EnrollmentDetails, EnrollmentInput};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Enrollments are always read back with their student and course attached.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<EnrollmentDetails>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<EnrollmentDetails>, ServiceError>;
    async fn insert(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError>;
    async fn update(&self, id: i32, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

pub struct SeaOrmEnrollmentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn find_all(&self) -> Result<Vec<EnrollmentDetails>, ServiceError> {
        Ok(enrollment::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<EnrollmentDetails>, ServiceError> {
        Ok(enrollment::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        Ok(enrollment::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: EnrollmentInput) -> Result<EnrollmentDetails, ServiceError> {
        Ok(enrollment::update(&self.db, id, input).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(enrollment::delete_by_id(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(enrollment::exists_by_id(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(enrollment::count(&self.db).await?)
    }
}
