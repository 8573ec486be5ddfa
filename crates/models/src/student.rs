use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const ENTITY: &str = "Student";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "idStudent")]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of create and update requests. On update, absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub id_student: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl StudentInput {
    /// Insertable row; any client-supplied id is ignored.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.first_name { am.first_name = Set(Some(v)); }
        if let Some(v) = self.last_name { am.last_name = Set(Some(v)); }
        if let Some(v) = self.email { am.email = Set(Some(v)); }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, input: StudentInput) -> Result<Model, ModelError> {
    Ok(input.into_active_model().insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: StudentInput) -> Result<Model, ModelError> {
    let current = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::not_found(ENTITY, id))?;
    let mut am: ActiveModel = current.clone().into();
    input.apply(&mut am);
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(db).await?)
}

/// Returns true if a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}
