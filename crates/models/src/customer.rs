use common::types::{Customer, CustomerInput, RecordId};
use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::vehicle;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Vehicles,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Vehicles => Entity::has_many(vehicle::Entity).into() }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vehicles.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer { id: m.id, name: m.name, email: m.email, phone: m.phone }
    }
}

fn apply(am: &mut ActiveModel, input: &CustomerInput) {
    am.name = Set(input.name.clone());
    am.email = Set(input.email.clone());
    am.phone = Set(input.phone.clone());
}

pub async fn list<C: ConnectionTrait>(db: &C, offset: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).offset(offset).limit(limit).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: RecordId) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Customer owning `email`, if any.
pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, input: &CustomerInput) -> Result<Model, ModelError> {
    let mut am = <ActiveModel as std::default::Default>::default();
    apply(&mut am, input);
    Ok(am.insert(db).await?)
}

/// Overwrite every column of `existing` with `input`.
pub async fn replace<C: ConnectionTrait>(db: &C, existing: Model, input: &CustomerInput) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    apply(&mut am, input);
    Ok(am.update(db).await?)
}
