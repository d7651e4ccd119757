use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cv_applications table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CvApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvApplications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CvApplications::FirstName)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvApplications::LastName)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CvApplications::Email).string().not_null())
                    .col(ColumnDef::new(CvApplications::Mobile).string_len(10).null())
                    .col(ColumnDef::new(CvApplications::DegreeId).integer().null())
                    .col(ColumnDef::new(CvApplications::CvBlob).string_len(60).null())
                    .col(
                        ColumnDef::new(CvApplications::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A degree cannot be removed while applications point at it
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_applications_degree_id")
                            .from(CvApplications::Table, CvApplications::DegreeId)
                            .to(Degrees::Table, Degrees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast reference count per degree
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cv_applications_degree_id")
                    .table(CvApplications::Table)
                    .col(CvApplications::DegreeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_cv_applications_degree_id")
                    .table(CvApplications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CvApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvApplications {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Mobile,
    DegreeId,
    CvBlob,
    DateCreated,
}

#[derive(DeriveIden)]
enum Degrees {
    Table,
    Id,
}
