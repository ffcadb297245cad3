use common::types::{RecordId, Vehicle, VehicleInput};
use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{customer, service_record};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub status: String,
    pub customer_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    Services,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity).from(Column::CustomerId).to(customer::Column::Id).into(),
            Relation::Services => Entity::has_many(service_record::Entity).into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<service_record::Entity> for Entity {
    fn to() -> RelationDef { Relation::Services.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Vehicle {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let status = m.status.parse().map_err(|e| ModelError::InvalidData(format!("vehicle {}: {e}", m.id)))?;
        Ok(Vehicle {
            id: m.id,
            make: m.make,
            model: m.model,
            year: m.year,
            price: m.price,
            status,
            customer_id: m.customer_id,
        })
    }
}

fn apply(am: &mut ActiveModel, input: &VehicleInput) {
    am.make = Set(input.make.clone());
    am.model = Set(input.model.clone());
    am.year = Set(input.year);
    am.price = Set(input.price);
    am.status = Set(input.status.as_str().to_string());
    am.customer_id = Set(input.customer_id);
}

pub async fn list<C: ConnectionTrait>(db: &C, offset: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).offset(offset).limit(limit).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: RecordId) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, input: &VehicleInput) -> Result<Model, ModelError> {
    let mut am = <ActiveModel as std::default::Default>::default();
    apply(&mut am, input);
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, existing: Model, input: &VehicleInput) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    apply(&mut am, input);
    Ok(am.update(db).await?)
}
