use actix_web::{web, App};
use std::sync::Arc;
use fridge_content::{
    db::postgres_service::PostgresService,
    i18n::MessageCatalog,
    services::FridgeContentService,
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn service(&self) -> FridgeContentService {
        let catalog = MessageCatalog::bundled().expect("Failed to load message catalog");
        FridgeContentService::new(self.db.clone(), self.db.clone(), Arc::new(catalog))
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.service()))
            .configure(fridge_content::routes::configure_routes)
    }
}
