use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::cv_application::application::domain::entities::CvApplication;
use crate::modules::degree::adapter::outgoing::sea_orm_entity::degrees;

// This is the SeaORM model that directly represents the "cv_applications" table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub last_name: String,
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub mobile: Option<String>,

    #[sea_orm(nullable)]
    pub degree_id: Option<i32>,

    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub cv_blob: Option<String>,

    pub date_created: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> CvApplication {
        CvApplication {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            degree_id: self.degree_id,
            cv_blob: self.cv_blob.clone(),
            date_created: self.date_created.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::degree::adapter::outgoing::sea_orm_entity::degrees::Entity",
        from = "Column::DegreeId",
        to = "crate::modules::degree::adapter::outgoing::sea_orm_entity::degrees::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Degrees,
}

impl Related<degrees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Degrees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
