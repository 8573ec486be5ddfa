use std::sync::Arc;

use models::course::{self, CourseInput};
use tracing::info;

use crate::course::repository::CourseRepository;
use crate::errors::ServiceError;

pub struct CourseService<R: CourseRepository> {
    repo: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<course::Model>, ServiceError> {
        info!("retrieving all courses");
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<course::Model, ServiceError> {
        info!(id, "retrieving course");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(course::ENTITY, id))
    }

    pub async fn create(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, code = ?created.code, "course created");
        Ok(created)
    }

    pub async fn update(&self, input: CourseInput) -> Result<course::Model, ServiceError> {
        let id = input
            .id_course
            .ok_or_else(|| ServiceError::Validation("idCourse is required for update".into()))?;
        info!(id, "updating course");
        self.repo.update(id, input).await
    }

    /// Fails with `Conflict` while enrollments still reference the course.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!(id, "removing course");
        if !self.repo.exists_by_id(id).await? || !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(course::ENTITY, id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::repository::SeaOrmCourseRepository;
    use crate::test_support::get_db;

    fn devsecops() -> CourseInput {
        CourseInput {
            name: Some("DevSecOps".into()),
            code: Some("DSO-101".into()),
            credit: Some(6),
            ..Default::default()
        }
    }

    async fn service() -> anyhow::Result<CourseService<SeaOrmCourseRepository>> {
        let db = get_db().await?;
        Ok(CourseService::new(Arc::new(SeaOrmCourseRepository { db })))
    }

    #[tokio::test]
    async fn crud_round_trip() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = svc.create(devsecops()).await?;
        assert!(created.id > 0);
        assert_eq!(svc.get(created.id).await?, created);

        let updated = svc
            .update(CourseInput { id_course: Some(created.id), credit: Some(4), ..Default::default() })
            .await?;
        assert_eq!(updated.credit, Some(4));
        assert_eq!(updated.code.as_deref(), Some("DSO-101"));

        svc.delete(created.id).await?;
        assert_eq!(svc.count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create(devsecops()).await?;
        svc.create(CourseInput { name: Some("Algorithms".into()), ..Default::default() }).await?;
        let names: Vec<_> = svc.list().await?.into_iter().filter_map(|c| c.name).collect();
        assert_eq!(names, vec!["DevSecOps".to_string(), "Algorithms".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() -> anyhow::Result<()> {
        let svc = service().await?;
        assert_eq!(svc.get(999).await.unwrap_err().to_string(), "Course not found with id: 999");
        assert!(matches!(svc.delete(999).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
