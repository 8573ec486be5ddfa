use async_trait::async_trait;
use models::department::{self, DepartmentInput};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<department::Model>, ServiceError>;
    async fn insert(&self, input: DepartmentInput) -> Result<department::Model, ServiceError>;
    async fn update(&self, id: i32, input: DepartmentInput) -> Result<department::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

pub struct SeaOrmDepartmentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError> {
        Ok(department::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<department::Model>, ServiceError> {
        Ok(department::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        Ok(department::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: DepartmentInput) -> Result<department::Model, ServiceError> {
        Ok(department::update(&self.db, id, input).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(department::delete_by_id(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(department::exists_by_id(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(department::count(&self.db).await?)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use sea_orm::{ActiveValue::Set, TryIntoModel};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockDepartmentRepository {
        rows: Mutex<BTreeMap<i32, department::Model>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl DepartmentRepository for MockDepartmentRepository {
        async fn find_all(&self) -> Result<Vec<department::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<department::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, input: DepartmentInput) -> Result<department::Model, ServiceError> {
            let id = {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                *next
            };
            let mut am = input.into_active_model();
            am.id = Set(id);
            let m = am.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?;
            self.rows.lock().unwrap().insert(id, m.clone());
            Ok(m)
        }

        async fn update(&self, id: i32, input: DepartmentInput) -> Result<department::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let current = rows.get(&id).cloned().ok_or_else(|| ServiceError::not_found(department::ENTITY, id))?;
            let mut am: department::ActiveModel = current.into();
            input.apply(&mut am);
            let m = am.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?;
            rows.insert(id, m.clone());
            Ok(m)
        }

        async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }
}
