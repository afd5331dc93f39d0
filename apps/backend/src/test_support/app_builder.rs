//! Given an AppState, build an initialized Actix **test service** with the
//! production routes and middleware chain.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{web, App};

use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::AppState;

pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let app = App::new()
        .wrap(StructuredLogger)
        .wrap(TraceSpan)
        .wrap(RequestTrace)
        .app_data(web::Data::new(state))
        .configure(crate::routes::configure);

    actix_web::test::init_service(app).await
}
