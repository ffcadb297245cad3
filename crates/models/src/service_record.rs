//! `services` table: service jobs booked against a vehicle.
use common::types::{RecordId, ServiceInput, ServiceRecord};
use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::vehicle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_id: i32,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub cost: f64,
    pub date: Date,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Vehicle,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Vehicle => Entity::belongs_to(vehicle::Entity).from(Column::VehicleId).to(vehicle::Column::Id).into() }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vehicle.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ServiceRecord {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let status = m.status.parse().map_err(|e| ModelError::InvalidData(format!("service {}: {e}", m.id)))?;
        Ok(ServiceRecord {
            id: m.id,
            vehicle_id: m.vehicle_id,
            description: m.description,
            cost: m.cost,
            date: m.date,
            status,
        })
    }
}

fn apply(am: &mut ActiveModel, input: &ServiceInput) {
    am.vehicle_id = Set(input.vehicle_id);
    am.description = Set(input.description.clone());
    am.cost = Set(input.cost);
    am.date = Set(input.date);
    am.status = Set(input.status.as_str().to_string());
}

pub async fn list<C: ConnectionTrait>(db: &C, offset: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).offset(offset).limit(limit).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: RecordId) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, input: &ServiceInput) -> Result<Model, ModelError> {
    let mut am = <ActiveModel as std::default::Default>::default();
    apply(&mut am, input);
    Ok(am.insert(db).await?)
}

pub async fn replace<C: ConnectionTrait>(db: &C, existing: Model, input: &ServiceInput) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    apply(&mut am, input);
    Ok(am.update(db).await?)
}

/// Remove every service booked against one of `vehicle_ids`; returns rows deleted.
pub async fn delete_for_vehicles<C: ConnectionTrait>(db: &C, vehicle_ids: Vec<RecordId>) -> Result<u64, ModelError> {
    if vehicle_ids.is_empty() {
        return Ok(0);
    }
    let res = Entity::delete_many().filter(Column::VehicleId.is_in(vehicle_ids)).exec(db).await?;
    Ok(res.rows_affected)
}
