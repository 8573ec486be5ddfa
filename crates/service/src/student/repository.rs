use async_trait::async_trait;
use models::student::{self, StudentInput};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence access for students.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<student::Model>, ServiceError>;
    async fn insert(&self, input: StudentInput) -> Result<student::Model, ServiceError>;
    async fn update(&self, id: i32, input: StudentInput) -> Result<student::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        Ok(student::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<student::Model>, ServiceError> {
        Ok(student::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        Ok(student::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: StudentInput) -> Result<student::Model, ServiceError> {
        Ok(student::update(&self.db, id, input).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(student::delete_by_id(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(student::exists_by_id(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(student::count(&self.db).await?)
    }
}
