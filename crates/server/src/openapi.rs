use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Customer not found")]
    pub detail: String,
}

#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip, default 0
    pub skip: Option<u64>,
    /// Maximum rows, default 100, capped at 1000
    pub limit: Option<u64>,
}

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub email: String, pub phone: String }

#[derive(ToSchema)]
pub struct CustomerInputDoc {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "555-0100")]
    pub phone: String,
}

#[derive(ToSchema)]
pub struct VehicleDoc {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    #[schema(example = "available")]
    pub status: String,
    pub customer_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct VehicleInputDoc {
    #[schema(example = "Yamaha")]
    pub make: String,
    #[schema(example = "MT-07")]
    pub model: String,
    #[schema(example = 2021, minimum = 1900.0, maximum = 2100.0)]
    pub year: i32,
    #[schema(example = 7200.0, minimum = 0.0)]
    pub price: f64,
    /// available | sold | reserved | service
    #[schema(example = "available")]
    pub status: Option<String>,
    pub customer_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub vehicle_id: i32,
    pub description: String,
    pub cost: f64,
    #[schema(example = "2024-05-17")]
    pub date: String,
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(ToSchema)]
pub struct ServiceInputDoc {
    pub vehicle_id: i32,
    #[schema(example = "Oil change")]
    pub description: String,
    #[schema(example = 49.9, minimum = 0.0)]
    pub cost: f64,
    #[schema(example = "2024-05-17")]
    pub date: String,
    /// pending | in-progress | completed | cancelled
    #[schema(example = "pending")]
    pub status: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Auto/Moto Shop API"),
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::vehicles::list,
        crate::routes::vehicles::get,
        crate::routes::vehicles::create,
        crate::routes::vehicles::update,
        crate::routes::vehicles::delete,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CustomerDoc,
            CustomerInputDoc,
            VehicleDoc,
            VehicleInputDoc,
            ServiceDoc,
            ServiceInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "vehicles"),
        (name = "services")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for p in ["/health", "/api/customers", "/api/customers/{id}", "/api/vehicles/{id}", "/api/services"] {
            assert!(doc.paths.paths.contains_key(p), "missing {p}");
        }
    }
}
