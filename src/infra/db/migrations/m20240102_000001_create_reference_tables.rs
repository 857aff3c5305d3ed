//! Migration: Create the five reference-data tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: Iden + 'static>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn text<T: Iden + 'static>(iden: T) -> ColumnDef {
    ColumnDef::new(iden).string_len(125).null().to_owned()
}

fn decimal<T: Iden + 'static>(iden: T) -> ColumnDef {
    ColumnDef::new(iden).double().null().to_owned()
}

fn timestamp<T: Iden + 'static>(iden: T) -> ColumnDef {
    ColumnDef::new(iden).timestamp_with_time_zone().null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BidList::Table)
                    .if_not_exists()
                    .col(id_column(BidList::Id))
                    .col(text(BidList::Account))
                    .col(text(BidList::Type))
                    .col(decimal(BidList::BidQuantity))
                    .col(decimal(BidList::AskQuantity))
                    .col(decimal(BidList::Bid))
                    .col(decimal(BidList::Ask))
                    .col(text(BidList::Benchmark))
                    .col(timestamp(BidList::BidListDate))
                    .col(text(BidList::Commentary))
                    .col(text(BidList::Security))
                    .col(text(BidList::Status))
                    .col(text(BidList::Trader))
                    .col(text(BidList::Book))
                    .col(text(BidList::CreationName))
                    .col(timestamp(BidList::CreationDate))
                    .col(text(BidList::RevisionName))
                    .col(timestamp(BidList::RevisionDate))
                    .col(text(BidList::DealName))
                    .col(text(BidList::DealType))
                    .col(text(BidList::SourceListId))
                    .col(text(BidList::Side))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CurvePoint::Table)
                    .if_not_exists()
                    .col(id_column(CurvePoint::Id))
                    .col(ColumnDef::new(CurvePoint::CurveId).integer().null())
                    .col(timestamp(CurvePoint::AsOfDate))
                    .col(decimal(CurvePoint::Term))
                    .col(decimal(CurvePoint::Value))
                    .col(timestamp(CurvePoint::CreationDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(id_column(Rating::Id))
                    .col(text(Rating::MoodysRating))
                    .col(text(Rating::SandPRating))
                    .col(text(Rating::FitchRating))
                    .col(ColumnDef::new(Rating::OrderNumber).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RuleName::Table)
                    .if_not_exists()
                    .col(id_column(RuleName::Id))
                    .col(text(RuleName::Name))
                    .col(text(RuleName::Description))
                    .col(ColumnDef::new(RuleName::Json).text().null())
                    .col(ColumnDef::new(RuleName::Template).text().null())
                    .col(ColumnDef::new(RuleName::SqlStr).text().null())
                    .col(ColumnDef::new(RuleName::SqlPart).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Trade::Table)
                    .if_not_exists()
                    .col(id_column(Trade::Id))
                    .col(text(Trade::Account))
                    .col(text(Trade::Type))
                    .col(decimal(Trade::BuyQuantity))
                    .col(decimal(Trade::SellQuantity))
                    .col(decimal(Trade::BuyPrice))
                    .col(decimal(Trade::SellPrice))
                    .col(text(Trade::Benchmark))
                    .col(timestamp(Trade::TradeDate))
                    .col(text(Trade::Security))
                    .col(text(Trade::Status))
                    .col(text(Trade::Trader))
                    .col(text(Trade::Book))
                    .col(text(Trade::CreationName))
                    .col(timestamp(Trade::CreationDate))
                    .col(text(Trade::RevisionName))
                    .col(timestamp(Trade::RevisionDate))
                    .col(text(Trade::DealName))
                    .col(text(Trade::DealType))
                    .col(text(Trade::SourceListId))
                    .col(text(Trade::Side))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trade::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RuleName::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CurvePoint::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BidList::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BidList {
    #[iden = "bidlist"]
    Table,
    Id,
    Account,
    Type,
    BidQuantity,
    AskQuantity,
    Bid,
    Ask,
    Benchmark,
    BidListDate,
    Commentary,
    Security,
    Status,
    Trader,
    Book,
    CreationName,
    CreationDate,
    RevisionName,
    RevisionDate,
    DealName,
    DealType,
    SourceListId,
    Side,
}

#[derive(Iden)]
enum CurvePoint {
    #[iden = "curvepoint"]
    Table,
    Id,
    CurveId,
    AsOfDate,
    Term,
    Value,
    CreationDate,
}

#[derive(Iden)]
enum Rating {
    Table,
    Id,
    MoodysRating,
    SandPRating,
    FitchRating,
    OrderNumber,
}

#[derive(Iden)]
enum RuleName {
    #[iden = "rulename"]
    Table,
    Id,
    Name,
    Description,
    Json,
    Template,
    SqlStr,
    SqlPart,
}

#[derive(Iden)]
enum Trade {
    Table,
    Id,
    Account,
    Type,
    BuyQuantity,
    SellQuantity,
    BuyPrice,
    SellPrice,
    Benchmark,
    TradeDate,
    Security,
    Status,
    Trader,
    Book,
    CreationName,
    CreationDate,
    RevisionName,
    RevisionDate,
    DealName,
    DealType,
    SourceListId,
    Side,
}
