use sea_orm::entity::prelude::*;

use crate::degree::application::domain::entities::Degree;
use crate::modules::cv_application::adapter::outgoing::sea_orm_entity::cv_applications;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "degrees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
}

impl Model {
    pub fn to_domain(&self) -> Degree {
        Degree {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::cv_application::adapter::outgoing::sea_orm_entity::cv_applications::Entity"
    )]
    CvApplications,
}

impl Related<cv_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvApplications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
