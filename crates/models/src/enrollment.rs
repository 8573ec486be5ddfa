use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, LoaderTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{course, errors::ModelError, student};

pub const ENTITY: &str = "Enrollment";

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "idEnrollment")]
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrollment_date: Option<Date>,
    /// Free text; letter grades and numeric strings alike.
    pub grade: Option<String>,
    pub status: Option<Status>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Student, Course }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Student => Entity::belongs_to(student::Entity).from(Column::StudentId).to(student::Column::Id).into(),
            Relation::Course => Entity::belongs_to(course::Entity).from(Column::CourseId).to(course::Column::Id).into(),
        }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef { Relation::Course.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Enrollment as exposed over HTTP: the row plus the student and course it points at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetails {
    pub id_enrollment: i32,
    pub enrollment_date: Option<Date>,
    pub grade: Option<String>,
    pub status: Option<Status>,
    pub student: Option<student::Model>,
    pub course: Option<course::Model>,
}

impl EnrollmentDetails {
    pub fn new(m: Model, student: Option<student::Model>, course: Option<course::Model>) -> Self {
        Self {
            id_enrollment: m.id,
            enrollment_date: m.enrollment_date,
            grade: m.grade,
            status: m.status,
            student,
            course,
        }
    }
}

/// Nested student reference in an enrollment body; only the id is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id_student: Option<i32>,
}

/// Nested course reference in an enrollment body; only the id is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub id_course: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentInput {
    #[serde(alias = "id")]
    pub id_enrollment: Option<i32>,
    pub enrollment_date: Option<Date>,
    pub grade: Option<String>,
    pub status: Option<Status>,
    pub student: Option<StudentRef>,
    pub course: Option<CourseRef>,
}

impl EnrollmentInput {
    pub fn student_id(&self) -> Option<i32> { self.student.and_then(|s| s.id_student) }

    pub fn course_id(&self) -> Option<i32> { self.course.and_then(|c| c.id_course) }

    /// Copies the scalar fields that are present; references are resolved by the caller.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.enrollment_date { am.enrollment_date = Set(Some(v)); }
        if let Some(v) = self.grade { am.grade = Set(Some(v)); }
        if let Some(v) = self.status { am.status = Set(Some(v)); }
    }
}

async fn load_student(db: &DatabaseConnection, id: i32) -> Result<student::Model, ModelError> {
    student::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::not_found(student::ENTITY, id))
}

async fn load_course(db: &DatabaseConnection, id: i32) -> Result<course::Model, ModelError> {
    course::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::not_found(course::ENTITY, id))
}

async fn with_refs(db: &DatabaseConnection, m: Model) -> Result<EnrollmentDetails, ModelError> {
    let student = m.find_related(student::Entity).one(db).await?;
    let course = m.find_related(course::Entity).one(db).await?;
    Ok(EnrollmentDetails::new(m, student, course))
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<EnrollmentDetails>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    let students = rows.load_one(student::Entity, db).await?;
    let courses = rows.load_one(course::Entity, db).await?;
    Ok(rows
        .into_iter()
        .zip(students)
        .zip(courses)
        .map(|((m, s), c)| EnrollmentDetails::new(m, s, c))
        .collect())
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<EnrollmentDetails>, ModelError> {
    match Entity::find_by_id(id).one(db).await? {
        Some(m) => Ok(Some(with_refs(db, m).await?)),
        None => Ok(None),
    }
}

/// Both references are required and must resolve.
pub async fn create(db: &DatabaseConnection, input: EnrollmentInput) -> Result<EnrollmentDetails, ModelError> {
    let student_id = input
        .student_id()
        .ok_or_else(|| ModelError::Validation("student.idStudent is required".into()))?;
    let course_id = input
        .course_id()
        .ok_or_else(|| ModelError::Validation("course.idCourse is required".into()))?;
    let student = load_student(db, student_id).await?;
    let course = load_course(db, course_id).await?;

    let mut am = ActiveModel {
        id: NotSet,
        student_id: Set(student_id),
        course_id: Set(course_id),
        enrollment_date: Set(None),
        grade: Set(None),
        status: Set(None),
    };
    input.apply(&mut am);
    let created = am.insert(db).await?;
    Ok(EnrollmentDetails::new(created, Some(student), Some(course)))
}

/// Absent references keep the current student/course.
pub async fn update(db: &DatabaseConnection, id: i32, input: EnrollmentInput) -> Result<EnrollmentDetails, ModelError> {
    let current = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::not_found(ENTITY, id))?;
    let mut am: ActiveModel = current.clone().into();
    if let Some(sid) = input.student_id() {
        load_student(db, sid).await?;
        am.student_id = Set(sid);
    }
    if let Some(cid) = input.course_id() {
        load_course(db, cid).await?;
        am.course_id = Set(cid);
    }
    input.apply(&mut am);
    let saved = if am.is_changed() { am.update(db).await? } else { current };
    with_refs(db, saved).await
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
