use async_trait::async_trait;
use models::course::{self, CourseInput};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<course::Model>, ServiceError>;
    async fn insert(&self, input: CourseInput) -> Result<course::Model, ServiceError>;
    async fn update(&self, id: i32, input: CourseInput) -> Result<course::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

pub struct SeaOrmCourseRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError> {
        Ok(course::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<course::Model>, ServiceError> {
        Ok(course::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
        Ok(course::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: CourseInput) -> Result<course::Model, ServiceError> {
        Ok(course::update(&self.db, id, input).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(course::delete_by_id(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(course::exists_by_id(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(course::count(&self.db).await?)
    }
}
