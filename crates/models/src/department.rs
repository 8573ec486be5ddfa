use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const ENTITY: &str = "Department";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "idDepartment")]
    pub id: i32,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    pub id_department: Option<i32>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

impl DepartmentInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            location: Set(self.location),
            phone: Set(self.phone),
            head: Set(self.head),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.name { am.name = Set(Some(v)); }
        if let Some(v) = self.location { am.location = Set(Some(v)); }
        if let Some(v) = self.phone { am.phone = Set(Some(v)); }
        if let Some(v) = self.head { am.head = Set(Some(v)); }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, input: DepartmentInput) -> Result<Model, ModelError> {
    Ok(input.into_active_model().insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: DepartmentInput) -> Result<Model, ModelError> {
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
